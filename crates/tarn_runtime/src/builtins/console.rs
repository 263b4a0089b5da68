use smallvec::SmallVec;
use tarn_std::console::{self, FormatArg};
use tarn_std::text::Text;

use super::common::{expect_args, opt_f64, opt_i64, to_text};
use crate::Value;
use crate::builtins_registry::BuiltinRegistry;
use crate::diag::{DiagnosticKind, DiagnosticsFormatter};
use crate::runtime::Runtime;

pub fn install(registry: &mut BuiltinRegistry) {
    registry.register("io.print", builtin_print);
    registry.register("io.println", builtin_println);
    registry.register("io.eprint", builtin_eprint);
    registry.register("io.eprintln", builtin_eprintln);
    registry.register("io.readln", builtin_readln);
    registry.register("io.readInt", builtin_read_int);
    registry.register("io.readFloat", builtin_read_float);
    registry.register("io.format", builtin_format);
    registry.register("io.printf", builtin_printf);
    registry.register("io.dbg", builtin_dbg);
}

fn builtin_print(rt: &mut Runtime, args: &[Value]) -> Result<Value, String> {
    expect_args("io.print", args, 1, 1)?;
    rt.console().print(&args[0]);
    Ok(Value::Unit)
}

fn builtin_println(rt: &mut Runtime, args: &[Value]) -> Result<Value, String> {
    expect_args("io.println", args, 0, 1)?;
    match args.first() {
        Some(v) => rt.console().println(v),
        None => rt.console().newline(),
    }
    Ok(Value::Unit)
}

fn builtin_eprint(rt: &mut Runtime, args: &[Value]) -> Result<Value, String> {
    expect_args("io.eprint", args, 1, 1)?;
    rt.console().eprint(&args[0]);
    Ok(Value::Unit)
}

fn builtin_eprintln(rt: &mut Runtime, args: &[Value]) -> Result<Value, String> {
    expect_args("io.eprintln", args, 0, 1)?;
    match args.first() {
        Some(v) => rt.console().eprintln(v),
        None => rt.console().eprintln(""),
    }
    Ok(Value::Unit)
}

fn builtin_readln(rt: &mut Runtime, args: &[Value]) -> Result<Value, String> {
    expect_args("io.readln", args, 0, 0)?;
    Ok(Value::Text(rt.console().read_line()))
}

fn builtin_read_int(rt: &mut Runtime, args: &[Value]) -> Result<Value, String> {
    expect_args("io.readInt", args, 0, 1)?;
    let fallback = opt_i64("io.readInt", "fallback", args, 0, rt.config().read_fallback_int)?;
    Ok(Value::Int(rt.console().read_int_or(fallback)))
}

fn builtin_read_float(rt: &mut Runtime, args: &[Value]) -> Result<Value, String> {
    expect_args("io.readFloat", args, 0, 1)?;
    let fallback = opt_f64("io.readFloat", "fallback", args, 0, rt.config().read_fallback_float)?;
    Ok(Value::Float(rt.console().read_float_or(fallback)))
}

/// Template plus converted arguments for the printf family.
fn format_args<'a>(name: &str, args: &'a [Value]) -> Result<(&'a Text, SmallVec<[FormatArg; 8]>), String> {
    expect_args(name, args, 1, usize::MAX)?;
    let template = to_text(name, "template", &args[0])?;
    let mut converted = SmallVec::new();
    for v in &args[1..] {
        let arg = v.to_format_arg().ok_or_else(|| {
            DiagnosticsFormatter::format(&DiagnosticKind::TypeMismatch {
                expected: "bool, int, float or text".to_string(),
                actual: v.type_name().to_string(),
            })
        })?;
        converted.push(arg);
    }
    Ok((template, converted))
}

fn format_failed(err: tarn_std::FormatError) -> String {
    DiagnosticsFormatter::format(&DiagnosticKind::FormatFailed(err.to_string()))
}

fn builtin_format(_rt: &mut Runtime, args: &[Value]) -> Result<Value, String> {
    let (template, converted) = format_args("io.format", args)?;
    console::format(template, &converted)
        .map(Value::Text)
        .map_err(format_failed)
}

fn builtin_printf(rt: &mut Runtime, args: &[Value]) -> Result<Value, String> {
    let (template, converted) = format_args("io.printf", args)?;
    rt.console()
        .printf(template, &converted)
        .map_err(format_failed)?;
    Ok(Value::Unit)
}

fn builtin_dbg(rt: &mut Runtime, args: &[Value]) -> Result<Value, String> {
    expect_args("io.dbg", args, 1, 2)?;
    let value = args[0].clone();
    match args.get(1) {
        Some(label) => {
            let label = to_text("io.dbg", "name", label)?.to_string_lossy();
            Ok(rt.console().dbg_named(&label, value))
        }
        None => Ok(rt.console().dbg(value)),
    }
}
