use tarn_std::text::{self, Text};

use super::common::{expect_args, opt_f64, opt_i64, to_byte, to_i64, to_list, to_text};
use crate::Value;
use crate::builtins_registry::BuiltinRegistry;
use crate::runtime::Runtime;

pub fn install(registry: &mut BuiltinRegistry) {
    registry.register("str.len", builtin_len);
    registry.register("str.isEmpty", builtin_is_empty);
    registry.register("str.charAt", builtin_char_at);
    registry.register("str.substring", builtin_substring);
    registry.register("str.slice", builtin_slice);
    registry.register("str.indexOf", builtin_index_of);
    registry.register("str.lastIndexOf", builtin_last_index_of);
    registry.register("str.contains", builtin_contains);
    registry.register("str.startsWith", builtin_starts_with);
    registry.register("str.endsWith", builtin_ends_with);
    registry.register("str.toUpper", builtin_to_upper);
    registry.register("str.toLower", builtin_to_lower);
    registry.register("str.capitalize", builtin_capitalize);
    registry.register("str.trimLeft", builtin_trim_left);
    registry.register("str.trimRight", builtin_trim_right);
    registry.register("str.trim", builtin_trim);
    registry.register("str.split", builtin_split);
    registry.register("str.join", builtin_join);
    registry.register("str.replace", builtin_replace);
    registry.register("str.replaceFirst", builtin_replace_first);
    registry.register("str.repeat", builtin_repeat);
    registry.register("str.padLeft", builtin_pad_left);
    registry.register("str.padRight", builtin_pad_right);
    registry.register("str.toInt", builtin_to_int);
    registry.register("str.toFloat", builtin_to_float);
    registry.register("str.fromInt", builtin_from_int);
    registry.register("str.fromFloat", builtin_from_float);
    registry.register("str.isDigit", builtin_is_digit);
    registry.register("str.isAlpha", builtin_is_alpha);
    registry.register("str.isAlnum", builtin_is_alnum);
    registry.register("str.isSpace", builtin_is_space);
    registry.register("str.isNumeric", builtin_is_numeric);
    registry.register("str.reverse", builtin_reverse);
}

/// The single text argument of a one-argument builtin.
fn unary<'a>(name: &str, args: &'a [Value]) -> Result<&'a Text, String> {
    expect_args(name, args, 1, 1)?;
    to_text(name, "s", &args[0])
}

/// `(s, other)` text pair.
fn binary<'a>(name: &str, args: &'a [Value], param: &str) -> Result<(&'a Text, &'a Text), String> {
    expect_args(name, args, 2, 2)?;
    Ok((to_text(name, "s", &args[0])?, to_text(name, param, &args[1])?))
}

fn builtin_len(_rt: &mut Runtime, args: &[Value]) -> Result<Value, String> {
    Ok(Value::Int(text::len(unary("str.len", args)?)))
}

fn builtin_is_empty(_rt: &mut Runtime, args: &[Value]) -> Result<Value, String> {
    Ok(Value::Bool(text::is_empty(unary("str.isEmpty", args)?)))
}

fn builtin_char_at(_rt: &mut Runtime, args: &[Value]) -> Result<Value, String> {
    expect_args("str.charAt", args, 2, 2)?;
    let s = to_text("str.charAt", "s", &args[0])?;
    let index = to_i64("str.charAt", "index", &args[1])?;
    Ok(Value::Text(Text::from(text::char_at(s, index))))
}

fn builtin_substring(_rt: &mut Runtime, args: &[Value]) -> Result<Value, String> {
    expect_args("str.substring", args, 2, 3)?;
    let s = to_text("str.substring", "s", &args[0])?;
    let start = to_i64("str.substring", "start", &args[1])?;
    let end = opt_i64("str.substring", "end", args, 2, i64::MAX)?;
    Ok(Value::Text(text::substring(s, start, end)))
}

fn builtin_slice(_rt: &mut Runtime, args: &[Value]) -> Result<Value, String> {
    expect_args("str.slice", args, 2, 3)?;
    let s = to_text("str.slice", "s", &args[0])?;
    let start = to_i64("str.slice", "start", &args[1])?;
    let end = opt_i64("str.slice", "end", args, 2, i64::MAX)?;
    Ok(Value::Text(text::slice(s, start, end)))
}

fn builtin_index_of(_rt: &mut Runtime, args: &[Value]) -> Result<Value, String> {
    expect_args("str.indexOf", args, 2, 3)?;
    let s = to_text("str.indexOf", "s", &args[0])?;
    let search = to_text("str.indexOf", "search", &args[1])?;
    let from = opt_i64("str.indexOf", "start", args, 2, 0)?;
    Ok(Value::Int(text::index_of_from(s, search, from)))
}

fn builtin_last_index_of(_rt: &mut Runtime, args: &[Value]) -> Result<Value, String> {
    let (s, search) = binary("str.lastIndexOf", args, "search")?;
    Ok(Value::Int(text::last_index_of(s, search)))
}

fn builtin_contains(_rt: &mut Runtime, args: &[Value]) -> Result<Value, String> {
    let (s, search) = binary("str.contains", args, "search")?;
    Ok(Value::Bool(text::contains(s, search)))
}

fn builtin_starts_with(_rt: &mut Runtime, args: &[Value]) -> Result<Value, String> {
    let (s, prefix) = binary("str.startsWith", args, "prefix")?;
    Ok(Value::Bool(text::starts_with(s, prefix)))
}

fn builtin_ends_with(_rt: &mut Runtime, args: &[Value]) -> Result<Value, String> {
    let (s, suffix) = binary("str.endsWith", args, "suffix")?;
    Ok(Value::Bool(text::ends_with(s, suffix)))
}

fn builtin_to_upper(_rt: &mut Runtime, args: &[Value]) -> Result<Value, String> {
    Ok(Value::Text(text::to_upper(unary("str.toUpper", args)?)))
}

fn builtin_to_lower(_rt: &mut Runtime, args: &[Value]) -> Result<Value, String> {
    Ok(Value::Text(text::to_lower(unary("str.toLower", args)?)))
}

fn builtin_capitalize(_rt: &mut Runtime, args: &[Value]) -> Result<Value, String> {
    Ok(Value::Text(text::capitalize(unary("str.capitalize", args)?)))
}

fn builtin_trim_left(_rt: &mut Runtime, args: &[Value]) -> Result<Value, String> {
    Ok(Value::Text(text::trim_left(unary("str.trimLeft", args)?)))
}

fn builtin_trim_right(_rt: &mut Runtime, args: &[Value]) -> Result<Value, String> {
    Ok(Value::Text(text::trim_right(unary("str.trimRight", args)?)))
}

fn builtin_trim(_rt: &mut Runtime, args: &[Value]) -> Result<Value, String> {
    Ok(Value::Text(text::trim(unary("str.trim", args)?)))
}

fn builtin_split(_rt: &mut Runtime, args: &[Value]) -> Result<Value, String> {
    expect_args("str.split", args, 1, 2)?;
    let s = to_text("str.split", "s", &args[0])?;
    let parts = match args.get(1) {
        Some(d) => text::split(s, to_text("str.split", "delimiter", d)?),
        None => text::split(s, " "),
    };
    Ok(Value::text_list(parts))
}

fn builtin_join(_rt: &mut Runtime, args: &[Value]) -> Result<Value, String> {
    expect_args("str.join", args, 1, 2)?;
    let items = to_list("str.join", "parts", &args[0])?;
    let parts = items
        .iter()
        .map(|v| to_text("str.join", "parts", v))
        .collect::<Result<Vec<_>, _>>()?;
    let joined = match args.get(1) {
        Some(d) => text::join(&parts, to_text("str.join", "delimiter", d)?),
        None => text::join(&parts, ""),
    };
    Ok(Value::Text(joined))
}

fn builtin_replace(_rt: &mut Runtime, args: &[Value]) -> Result<Value, String> {
    expect_args("str.replace", args, 3, 3)?;
    let s = to_text("str.replace", "s", &args[0])?;
    let from = to_text("str.replace", "from", &args[1])?;
    let to = to_text("str.replace", "to", &args[2])?;
    Ok(Value::Text(text::replace(s, from, to)))
}

fn builtin_replace_first(_rt: &mut Runtime, args: &[Value]) -> Result<Value, String> {
    expect_args("str.replaceFirst", args, 3, 3)?;
    let s = to_text("str.replaceFirst", "s", &args[0])?;
    let from = to_text("str.replaceFirst", "from", &args[1])?;
    let to = to_text("str.replaceFirst", "to", &args[2])?;
    Ok(Value::Text(text::replace_first(s, from, to)))
}

fn builtin_repeat(_rt: &mut Runtime, args: &[Value]) -> Result<Value, String> {
    expect_args("str.repeat", args, 2, 2)?;
    let s = to_text("str.repeat", "s", &args[0])?;
    let count = to_i64("str.repeat", "count", &args[1])?;
    Ok(Value::Text(text::repeat(s, count)))
}

fn pad_args(name: &str, args: &[Value]) -> Result<(Text, i64, u8), String> {
    expect_args(name, args, 2, 3)?;
    let s = to_text(name, "s", &args[0])?.clone();
    let width = to_i64(name, "width", &args[1])?;
    let fill = match args.get(2) {
        Some(v) => to_byte(name, "fill", v)?,
        None => b' ',
    };
    Ok((s, width, fill))
}

fn builtin_pad_left(_rt: &mut Runtime, args: &[Value]) -> Result<Value, String> {
    let (s, width, fill) = pad_args("str.padLeft", args)?;
    Ok(Value::Text(text::pad_left_with(s, width, fill)))
}

fn builtin_pad_right(_rt: &mut Runtime, args: &[Value]) -> Result<Value, String> {
    let (s, width, fill) = pad_args("str.padRight", args)?;
    Ok(Value::Text(text::pad_right_with(s, width, fill)))
}

fn builtin_to_int(_rt: &mut Runtime, args: &[Value]) -> Result<Value, String> {
    expect_args("str.toInt", args, 1, 2)?;
    let s = to_text("str.toInt", "s", &args[0])?;
    let default = opt_i64("str.toInt", "default", args, 1, 0)?;
    Ok(Value::Int(text::to_int(s, default)))
}

fn builtin_to_float(_rt: &mut Runtime, args: &[Value]) -> Result<Value, String> {
    expect_args("str.toFloat", args, 1, 2)?;
    let s = to_text("str.toFloat", "s", &args[0])?;
    let default = opt_f64("str.toFloat", "default", args, 1, 0.0)?;
    Ok(Value::Float(text::to_float(s, default)))
}

fn builtin_from_int(_rt: &mut Runtime, args: &[Value]) -> Result<Value, String> {
    expect_args("str.fromInt", args, 1, 1)?;
    Ok(Value::Text(text::from_int(to_i64("str.fromInt", "n", &args[0])?)))
}

fn builtin_from_float(_rt: &mut Runtime, args: &[Value]) -> Result<Value, String> {
    expect_args("str.fromFloat", args, 1, 1)?;
    let n = super::common::to_f64("str.fromFloat", "n", &args[0])?;
    Ok(Value::Text(text::from_float(n)))
}

fn classify(name: &str, args: &[Value], f: fn(u8) -> bool) -> Result<Value, String> {
    expect_args(name, args, 1, 1)?;
    Ok(Value::Bool(f(to_byte(name, "c", &args[0])?)))
}

fn builtin_is_digit(_rt: &mut Runtime, args: &[Value]) -> Result<Value, String> {
    classify("str.isDigit", args, text::is_digit)
}

fn builtin_is_alpha(_rt: &mut Runtime, args: &[Value]) -> Result<Value, String> {
    classify("str.isAlpha", args, text::is_alpha)
}

fn builtin_is_alnum(_rt: &mut Runtime, args: &[Value]) -> Result<Value, String> {
    classify("str.isAlnum", args, text::is_alnum)
}

fn builtin_is_space(_rt: &mut Runtime, args: &[Value]) -> Result<Value, String> {
    classify("str.isSpace", args, text::is_space)
}

fn builtin_is_numeric(_rt: &mut Runtime, args: &[Value]) -> Result<Value, String> {
    Ok(Value::Bool(text::is_numeric(unary("str.isNumeric", args)?)))
}

fn builtin_reverse(_rt: &mut Runtime, args: &[Value]) -> Result<Value, String> {
    Ok(Value::Text(text::reverse(unary("str.reverse", args)?)))
}
