use tarn_std::num;

use super::common::{expect_args, to_f64, to_i64};
use crate::Value;
use crate::builtins_registry::BuiltinRegistry;
use crate::runtime::Runtime;

pub fn install(registry: &mut BuiltinRegistry) {
    registry.register("math.PI", builtin_pi);
    registry.register("math.E", builtin_e);
    registry.register("math.TAU", builtin_tau);
    registry.register("math.SQRT2", builtin_sqrt2);
    registry.register("math.LN2", builtin_ln2);
    registry.register("math.LN10", builtin_ln10);
    registry.register("math.abs", builtin_abs);
    registry.register("math.floor", builtin_floor);
    registry.register("math.ceil", builtin_ceil);
    registry.register("math.round", builtin_round);
    registry.register("math.trunc", builtin_trunc);
    registry.register("math.min", builtin_min);
    registry.register("math.max", builtin_max);
    registry.register("math.clamp", builtin_clamp);
    registry.register("math.pow", builtin_pow);
    registry.register("math.sqrt", builtin_sqrt);
    registry.register("math.cbrt", builtin_cbrt);
    registry.register("math.exp", builtin_exp);
    registry.register("math.log", builtin_log);
    registry.register("math.log2", builtin_log2);
    registry.register("math.log10", builtin_log10);
    registry.register("math.sin", builtin_sin);
    registry.register("math.cos", builtin_cos);
    registry.register("math.tan", builtin_tan);
    registry.register("math.asin", builtin_asin);
    registry.register("math.acos", builtin_acos);
    registry.register("math.atan", builtin_atan);
    registry.register("math.atan2", builtin_atan2);
    registry.register("math.sinh", builtin_sinh);
    registry.register("math.cosh", builtin_cosh);
    registry.register("math.tanh", builtin_tanh);
    registry.register("math.toRadians", builtin_to_radians);
    registry.register("math.toDegrees", builtin_to_degrees);
    registry.register("math.random", builtin_random);
    registry.register("math.randomInt", builtin_random_int);
    registry.register("math.randomFloat", builtin_random_float);
    registry.register("math.seed", builtin_seed);
    registry.register("math.isNaN", builtin_is_nan);
    registry.register("math.isInf", builtin_is_inf);
    registry.register("math.isFinite", builtin_is_finite);
    registry.register("math.sign", builtin_sign);
    registry.register("math.gcd", builtin_gcd);
    registry.register("math.lcm", builtin_lcm);
    registry.register("math.factorial", builtin_factorial);
    registry.register("math.fibonacci", builtin_fibonacci);
    registry.register("math.isPrime", builtin_is_prime);
}

fn constant(name: &str, args: &[Value], value: f64) -> Result<Value, String> {
    expect_args(name, args, 0, 0)?;
    Ok(Value::Float(value))
}

fn builtin_pi(_rt: &mut Runtime, args: &[Value]) -> Result<Value, String> {
    constant("math.PI", args, num::PI)
}

fn builtin_e(_rt: &mut Runtime, args: &[Value]) -> Result<Value, String> {
    constant("math.E", args, num::E)
}

fn builtin_tau(_rt: &mut Runtime, args: &[Value]) -> Result<Value, String> {
    constant("math.TAU", args, num::TAU)
}

fn builtin_sqrt2(_rt: &mut Runtime, args: &[Value]) -> Result<Value, String> {
    constant("math.SQRT2", args, num::SQRT2)
}

fn builtin_ln2(_rt: &mut Runtime, args: &[Value]) -> Result<Value, String> {
    constant("math.LN2", args, num::LN2)
}

fn builtin_ln10(_rt: &mut Runtime, args: &[Value]) -> Result<Value, String> {
    constant("math.LN10", args, num::LN10)
}

/// One numeric argument in, one float out.
fn float_unary(name: &str, args: &[Value], f: fn(f64) -> f64) -> Result<Value, String> {
    expect_args(name, args, 1, 1)?;
    Ok(Value::Float(f(to_f64(name, "x", &args[0])?)))
}

fn builtin_abs(_rt: &mut Runtime, args: &[Value]) -> Result<Value, String> {
    expect_args("math.abs", args, 1, 1)?;
    match &args[0] {
        Value::Int(i) => Ok(Value::Int(num::abs_int(*i))),
        v => Ok(Value::Float(num::abs(to_f64("math.abs", "x", v)?))),
    }
}

fn builtin_floor(_rt: &mut Runtime, args: &[Value]) -> Result<Value, String> {
    float_unary("math.floor", args, num::floor)
}

fn builtin_ceil(_rt: &mut Runtime, args: &[Value]) -> Result<Value, String> {
    float_unary("math.ceil", args, num::ceil)
}

fn builtin_round(_rt: &mut Runtime, args: &[Value]) -> Result<Value, String> {
    float_unary("math.round", args, num::round)
}

fn builtin_trunc(_rt: &mut Runtime, args: &[Value]) -> Result<Value, String> {
    float_unary("math.trunc", args, num::trunc)
}

fn builtin_min(_rt: &mut Runtime, args: &[Value]) -> Result<Value, String> {
    expect_args("math.min", args, 2, 2)?;
    if let (Value::Int(a), Value::Int(b)) = (&args[0], &args[1]) {
        return Ok(Value::Int(num::min_int(*a, *b)));
    }
    let a = to_f64("math.min", "a", &args[0])?;
    let b = to_f64("math.min", "b", &args[1])?;
    Ok(Value::Float(num::min(a, b)))
}

fn builtin_max(_rt: &mut Runtime, args: &[Value]) -> Result<Value, String> {
    expect_args("math.max", args, 2, 2)?;
    if let (Value::Int(a), Value::Int(b)) = (&args[0], &args[1]) {
        return Ok(Value::Int(num::max_int(*a, *b)));
    }
    let a = to_f64("math.max", "a", &args[0])?;
    let b = to_f64("math.max", "b", &args[1])?;
    Ok(Value::Float(num::max(a, b)))
}

fn builtin_clamp(_rt: &mut Runtime, args: &[Value]) -> Result<Value, String> {
    expect_args("math.clamp", args, 3, 3)?;
    if let (Value::Int(x), Value::Int(lo), Value::Int(hi)) = (&args[0], &args[1], &args[2]) {
        return Ok(Value::Int(num::clamp_int(*x, *lo, *hi)));
    }
    let x = to_f64("math.clamp", "x", &args[0])?;
    let lo = to_f64("math.clamp", "lo", &args[1])?;
    let hi = to_f64("math.clamp", "hi", &args[2])?;
    Ok(Value::Float(num::clamp(x, lo, hi)))
}

fn builtin_pow(_rt: &mut Runtime, args: &[Value]) -> Result<Value, String> {
    expect_args("math.pow", args, 2, 2)?;
    let base = to_f64("math.pow", "base", &args[0])?;
    let exp = to_f64("math.pow", "exp", &args[1])?;
    Ok(Value::Float(num::pow(base, exp)))
}

fn builtin_sqrt(_rt: &mut Runtime, args: &[Value]) -> Result<Value, String> {
    float_unary("math.sqrt", args, num::sqrt)
}

fn builtin_cbrt(_rt: &mut Runtime, args: &[Value]) -> Result<Value, String> {
    float_unary("math.cbrt", args, num::cbrt)
}

fn builtin_exp(_rt: &mut Runtime, args: &[Value]) -> Result<Value, String> {
    float_unary("math.exp", args, num::exp)
}

fn builtin_log(_rt: &mut Runtime, args: &[Value]) -> Result<Value, String> {
    float_unary("math.log", args, num::log)
}

fn builtin_log2(_rt: &mut Runtime, args: &[Value]) -> Result<Value, String> {
    float_unary("math.log2", args, num::log2)
}

fn builtin_log10(_rt: &mut Runtime, args: &[Value]) -> Result<Value, String> {
    float_unary("math.log10", args, num::log10)
}

fn builtin_sin(_rt: &mut Runtime, args: &[Value]) -> Result<Value, String> {
    float_unary("math.sin", args, num::sin)
}

fn builtin_cos(_rt: &mut Runtime, args: &[Value]) -> Result<Value, String> {
    float_unary("math.cos", args, num::cos)
}

fn builtin_tan(_rt: &mut Runtime, args: &[Value]) -> Result<Value, String> {
    float_unary("math.tan", args, num::tan)
}

fn builtin_asin(_rt: &mut Runtime, args: &[Value]) -> Result<Value, String> {
    float_unary("math.asin", args, num::asin)
}

fn builtin_acos(_rt: &mut Runtime, args: &[Value]) -> Result<Value, String> {
    float_unary("math.acos", args, num::acos)
}

fn builtin_atan(_rt: &mut Runtime, args: &[Value]) -> Result<Value, String> {
    float_unary("math.atan", args, num::atan)
}

fn builtin_atan2(_rt: &mut Runtime, args: &[Value]) -> Result<Value, String> {
    expect_args("math.atan2", args, 2, 2)?;
    let y = to_f64("math.atan2", "y", &args[0])?;
    let x = to_f64("math.atan2", "x", &args[1])?;
    Ok(Value::Float(num::atan2(y, x)))
}

fn builtin_sinh(_rt: &mut Runtime, args: &[Value]) -> Result<Value, String> {
    float_unary("math.sinh", args, num::sinh)
}

fn builtin_cosh(_rt: &mut Runtime, args: &[Value]) -> Result<Value, String> {
    float_unary("math.cosh", args, num::cosh)
}

fn builtin_tanh(_rt: &mut Runtime, args: &[Value]) -> Result<Value, String> {
    float_unary("math.tanh", args, num::tanh)
}

fn builtin_to_radians(_rt: &mut Runtime, args: &[Value]) -> Result<Value, String> {
    float_unary("math.toRadians", args, num::to_radians)
}

fn builtin_to_degrees(_rt: &mut Runtime, args: &[Value]) -> Result<Value, String> {
    float_unary("math.toDegrees", args, num::to_degrees)
}

fn builtin_random(rt: &mut Runtime, args: &[Value]) -> Result<Value, String> {
    expect_args("math.random", args, 0, 0)?;
    Ok(Value::Float(rt.rng().random()))
}

fn builtin_random_int(rt: &mut Runtime, args: &[Value]) -> Result<Value, String> {
    expect_args("math.randomInt", args, 2, 2)?;
    let lo = to_i64("math.randomInt", "min", &args[0])?;
    let hi = to_i64("math.randomInt", "max", &args[1])?;
    Ok(Value::Int(rt.rng().random_int(lo, hi)))
}

fn builtin_random_float(rt: &mut Runtime, args: &[Value]) -> Result<Value, String> {
    expect_args("math.randomFloat", args, 2, 2)?;
    let lo = to_f64("math.randomFloat", "min", &args[0])?;
    let hi = to_f64("math.randomFloat", "max", &args[1])?;
    Ok(Value::Float(rt.rng().random_float(lo, hi)))
}

fn builtin_seed(rt: &mut Runtime, args: &[Value]) -> Result<Value, String> {
    expect_args("math.seed", args, 1, 1)?;
    let seed = to_i64("math.seed", "seed", &args[0])?;
    rt.set_rng_seed(seed as u64);
    Ok(Value::Unit)
}

fn float_predicate(name: &str, args: &[Value], f: fn(f64) -> bool) -> Result<Value, String> {
    expect_args(name, args, 1, 1)?;
    Ok(Value::Bool(f(to_f64(name, "x", &args[0])?)))
}

fn builtin_is_nan(_rt: &mut Runtime, args: &[Value]) -> Result<Value, String> {
    float_predicate("math.isNaN", args, num::is_nan)
}

fn builtin_is_inf(_rt: &mut Runtime, args: &[Value]) -> Result<Value, String> {
    float_predicate("math.isInf", args, num::is_inf)
}

fn builtin_is_finite(_rt: &mut Runtime, args: &[Value]) -> Result<Value, String> {
    float_predicate("math.isFinite", args, num::is_finite)
}

fn builtin_sign(_rt: &mut Runtime, args: &[Value]) -> Result<Value, String> {
    expect_args("math.sign", args, 1, 1)?;
    Ok(Value::Int(num::sign(to_f64("math.sign", "x", &args[0])?)))
}

fn int_binary(name: &str, args: &[Value], f: fn(i64, i64) -> i64) -> Result<Value, String> {
    expect_args(name, args, 2, 2)?;
    let a = to_i64(name, "a", &args[0])?;
    let b = to_i64(name, "b", &args[1])?;
    Ok(Value::Int(f(a, b)))
}

fn builtin_gcd(_rt: &mut Runtime, args: &[Value]) -> Result<Value, String> {
    int_binary("math.gcd", args, num::gcd)
}

fn builtin_lcm(_rt: &mut Runtime, args: &[Value]) -> Result<Value, String> {
    int_binary("math.lcm", args, num::lcm)
}

fn builtin_factorial(_rt: &mut Runtime, args: &[Value]) -> Result<Value, String> {
    expect_args("math.factorial", args, 1, 1)?;
    Ok(Value::Int(num::factorial(to_i64("math.factorial", "n", &args[0])?)))
}

fn builtin_fibonacci(_rt: &mut Runtime, args: &[Value]) -> Result<Value, String> {
    expect_args("math.fibonacci", args, 1, 1)?;
    Ok(Value::Int(num::fibonacci(to_i64("math.fibonacci", "n", &args[0])?)))
}

fn builtin_is_prime(_rt: &mut Runtime, args: &[Value]) -> Result<Value, String> {
    expect_args("math.isPrime", args, 1, 1)?;
    Ok(Value::Bool(num::is_prime(to_i64("math.isPrime", "n", &args[0])?)))
}
