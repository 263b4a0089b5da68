use tarn_std::num;

#[test]
fn constants_match_canonical_doubles() {
    assert_eq!(num::PI.to_bits(), std::f64::consts::PI.to_bits());
    assert_eq!(num::E.to_bits(), std::f64::consts::E.to_bits());
    assert_eq!(num::TAU.to_bits(), std::f64::consts::TAU.to_bits());
    assert_eq!(num::SQRT2.to_bits(), std::f64::consts::SQRT_2.to_bits());
    assert_eq!(num::LN2.to_bits(), std::f64::consts::LN_2.to_bits());
    assert_eq!(num::LN10.to_bits(), std::f64::consts::LN_10.to_bits());
}

#[test]
fn elementary_functions_follow_ieee() {
    assert_eq!(num::abs(-2.5), 2.5);
    assert_eq!(num::abs_int(-3), 3);
    assert_eq!(num::floor(-1.5), -2.0);
    assert_eq!(num::ceil(-1.5), -1.0);
    assert_eq!(num::round(2.5), 3.0);
    assert_eq!(num::round(-2.5), -3.0);
    assert_eq!(num::trunc(-1.7), -1.0);
    assert_eq!(num::pow(2.0, 10.0), 1024.0);
    assert_eq!(num::sqrt(81.0), 9.0);
    assert_eq!(num::cbrt(27.0), 3.0);
    assert_eq!(num::log(1.0), 0.0);
    assert_eq!(num::log2(8.0), 3.0);
    assert_eq!(num::log10(1000.0), 3.0);
    assert!(num::sqrt(-1.0).is_nan());
    assert!(num::log(-1.0).is_nan());
    assert_eq!(num::log(0.0), f64::NEG_INFINITY);
    assert_eq!(num::floor(f64::INFINITY), f64::INFINITY);
    assert!((num::to_degrees(num::PI) - 180.0).abs() < 1e-12);
    assert!((num::to_radians(90.0) - num::PI / 2.0).abs() < 1e-12);
    assert!((num::atan2(1.0, 1.0) - num::PI / 4.0).abs() < 1e-12);
    assert_eq!(num::tanh(0.0), 0.0);
}

#[test]
fn min_max_clamp() {
    assert_eq!(num::min(1.0, 2.0), 1.0);
    assert_eq!(num::max(1.0, 2.0), 2.0);
    assert_eq!(num::min_int(-1, 4), -1);
    assert_eq!(num::max_int(-1, 4), 4);
    assert_eq!(num::clamp(5.0, 0.0, 3.0), 3.0);
    assert_eq!(num::clamp(-5.0, 0.0, 3.0), 0.0);
    assert_eq!(num::clamp(1.5, 0.0, 3.0), 1.5);
    assert_eq!(num::clamp_int(-2, 0, 10), 0);
    assert_eq!(num::clamp_int(12, 0, 10), 10);
    assert!(num::clamp(f64::NAN, 0.0, 1.0).is_nan());
}

#[test]
fn float_classification() {
    assert!(num::is_nan(f64::NAN));
    assert!(num::is_inf(f64::NEG_INFINITY));
    assert!(!num::is_finite(f64::INFINITY));
    assert!(num::is_finite(0.0));
    assert_eq!(num::sign(-3.0), -1);
    assert_eq!(num::sign(0.0), 0);
    assert_eq!(num::sign(-0.0), 0);
    assert_eq!(num::sign(f64::NAN), 0);
    assert_eq!(num::sign(1e-300), 1);
}

#[test]
fn gcd_and_lcm_use_absolute_values() {
    assert_eq!(num::gcd(0, 0), 0);
    assert_eq!(num::gcd(12, 18), 6);
    assert_eq!(num::gcd(-12, 18), 6);
    assert_eq!(num::gcd(5, 0), 5);
    assert_eq!(num::gcd(-5, 0), 5);
    assert_eq!(num::lcm(4, 6), 12);
    assert_eq!(num::lcm(-4, 6), 12);
    assert_eq!(num::lcm(0, 3), 0);
}

#[test]
fn factorial_and_fibonacci() {
    assert_eq!(num::factorial(0), 1);
    assert_eq!(num::factorial(1), 1);
    assert_eq!(num::factorial(5), 120);
    assert_eq!(num::factorial(-3), 0);
    assert_eq!(num::factorial(20), 2_432_902_008_176_640_000);
    assert_eq!(num::fibonacci(0), 0);
    assert_eq!(num::fibonacci(1), 1);
    assert_eq!(num::fibonacci(2), 1);
    assert_eq!(num::fibonacci(10), 55);
    assert_eq!(num::fibonacci(90), 2_880_067_194_370_816_120);
    assert_eq!(num::fibonacci(-4), 0);
}

#[test]
fn primality_by_trial_division() {
    assert!(!num::is_prime(-7));
    assert!(!num::is_prime(0));
    assert!(!num::is_prime(1));
    assert!(num::is_prime(2));
    assert!(num::is_prime(3));
    assert!(!num::is_prime(9));
    assert!(num::is_prime(17));
    assert!(!num::is_prime(18));
    assert!(!num::is_prime(25));
    assert!(num::is_prime(7919));
    assert!(num::is_prime(1_000_000_007));
    assert!(!num::is_prime(1_000_000_007 * 3));
}

#[test]
fn factorial_and_fibonacci_wrap_without_looping_to_n() {
    assert_eq!(num::factorial(21), -4_249_290_049_419_214_848);
    assert_eq!(num::factorial(65), i64::MIN);
    assert_eq!(num::factorial(66), 0);
    assert_eq!(num::factorial(i64::MAX), 0);
    assert_eq!(num::fibonacci(92), 7_540_113_804_746_346_429);
    assert_eq!(num::fibonacci(93), -6_246_583_658_587_674_878);
    assert_eq!(num::fibonacci(i64::MAX), -800_812_746_651_928_291);
}
