//! Integer helpers. Arithmetic that exceeds 64 bits wraps; the wrapped value
//! is deterministic but not meaningful.

pub fn gcd(a: i64, b: i64) -> i64 {
    let mut a = a.unsigned_abs();
    let mut b = b.unsigned_abs();
    while b != 0 {
        let t = b;
        b = a % b;
        a = t;
    }
    a as i64
}

/// Zero when either side is zero.
pub fn lcm(a: i64, b: i64) -> i64 {
    if a == 0 || b == 0 {
        return 0;
    }
    (a / gcd(a, b)).wrapping_mul(b).wrapping_abs()
}

/// `n!`, or 0 for negative `n`. From 66 on the product holds 64 factors of
/// two, so the wrapped value is 0.
pub fn factorial(n: i64) -> i64 {
    if n < 0 {
        return 0;
    }
    if n >= 66 {
        return 0;
    }
    (2..=n).fold(1i64, |acc, i| acc.wrapping_mul(i))
}

/// 0-indexed: `fibonacci(0) == 0`, `fibonacci(1) == 1`. Negative input gives 0.
///
/// Fast doubling over wrapping arithmetic, so large `n` costs O(log n).
pub fn fibonacci(n: i64) -> i64 {
    if n <= 0 {
        return 0;
    }
    // (F(k), F(k+1)), walking the bits of n from the top.
    let (mut a, mut b) = (0i64, 1i64);
    for bit in (0..64 - n.leading_zeros()).rev() {
        let two_b_minus_a = b.wrapping_mul(2).wrapping_sub(a);
        let c = a.wrapping_mul(two_b_minus_a);
        let d = a.wrapping_mul(a).wrapping_add(b.wrapping_mul(b));
        if (n >> bit) & 1 == 1 {
            a = d;
            b = c.wrapping_add(d);
        } else {
            a = c;
            b = d;
        }
    }
    a
}

pub fn is_prime(n: i64) -> bool {
    if n < 2 {
        return false;
    }
    if n == 2 {
        return true;
    }
    if n % 2 == 0 {
        return false;
    }
    let mut i = 3;
    // i <= n / i avoids overflowing i * i near i64::MAX.
    while i <= n / i {
        if n % i == 0 {
            return false;
        }
        i += 2;
    }
    true
}
