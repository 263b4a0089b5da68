use tarn_std::text::Text;

use crate::Value;
use crate::diag::{DiagnosticKind, DiagnosticsFormatter};

pub fn expect_args(name: &str, args: &[Value], min: usize, max: usize) -> Result<(), String> {
    if args.len() < min || args.len() > max {
        return Err(DiagnosticsFormatter::format(
            &DiagnosticKind::ArgumentCountMismatch {
                name: name.to_string(),
                expected_min: min,
                expected_max: max,
                actual: args.len(),
            },
        ));
    }
    Ok(())
}

fn mismatch(name: &str, param: &str, expected: &str, actual: &Value) -> String {
    DiagnosticsFormatter::format(&DiagnosticKind::TypeMismatchDetailed {
        name: name.to_string(),
        param: param.to_string(),
        expected: expected.to_string(),
        actual: actual.type_name().to_string(),
    })
}

pub fn to_f64(name: &str, param: &str, v: &Value) -> Result<f64, String> {
    v.as_f64().ok_or_else(|| mismatch(name, param, "number", v))
}

pub fn to_i64(name: &str, param: &str, v: &Value) -> Result<i64, String> {
    v.as_i64().ok_or_else(|| mismatch(name, param, "int", v))
}

pub fn to_bool(name: &str, param: &str, v: &Value) -> Result<bool, String> {
    v.as_bool().ok_or_else(|| mismatch(name, param, "bool", v))
}

pub fn to_text<'a>(name: &str, param: &str, v: &'a Value) -> Result<&'a Text, String> {
    v.as_text().ok_or_else(|| mismatch(name, param, "text", v))
}

pub fn to_list<'a>(name: &str, param: &str, v: &'a Value) -> Result<&'a [Value], String> {
    v.as_list().ok_or_else(|| mismatch(name, param, "list", v))
}

/// A single character: one-byte text or an integer byte code.
pub fn to_byte(name: &str, param: &str, v: &Value) -> Result<u8, String> {
    match v {
        Value::Int(i) => u8::try_from(*i).map_err(|_| mismatch(name, param, "byte", v)),
        Value::Text(t) if t.len() == 1 => Ok(t.as_bytes()[0]),
        other => Err(mismatch(name, param, "character", other)),
    }
}

pub fn opt_i64(name: &str, param: &str, args: &[Value], index: usize, default: i64) -> Result<i64, String> {
    args.get(index).map_or(Ok(default), |v| to_i64(name, param, v))
}

pub fn opt_f64(name: &str, param: &str, args: &[Value], index: usize, default: f64) -> Result<f64, String> {
    args.get(index).map_or(Ok(default), |v| to_f64(name, param, v))
}
