use alloc::borrow::Cow;
use core::mem;

use num_integer::Integer;
use num_traits::{One, Signed, Zero};

use crate::{BigInt, BigUint};

/// Binary (Stein) GCD of two magnitudes.
///
/// `gcd(0, b) == b` and `gcd(a, 0) == a`. The common power of two is
/// stripped up front and restored at the end; in between both operands
/// are kept odd and the smaller is repeatedly subtracted from the larger.
pub fn gcd(a: &BigUint, b: &BigUint) -> BigUint {
    let (Some(a_tz), Some(b_tz)) = (a.trailing_zeros(), b.trailing_zeros()) else {
        return if a.is_zero() { b.clone() } else { a.clone() };
    };
    let twos = a_tz.min(b_tz);

    let mut m = a >> a_tz;
    let mut n = b >> b_tz;
    while m != n {
        if m > n {
            mem::swap(&mut m, &mut n);
        }
        n -= &m;
        // n is even and non-zero here
        let tz = n.trailing_zeros().unwrap_or(0);
        n >>= tz;
    }

    m << twos
}

/// Extended Euclid on magnitudes: `(g, x, y)` with `a*x + b*y == g`.
///
/// `(a, 0)` yields `(a, 1, 0)` and `(0, b)` yields `(b, 0, 1)`.
pub(crate) fn bezout(a: &BigUint, b: &BigUint) -> (BigUint, BigInt, BigInt) {
    let (mut old_r, mut r) = (a.clone(), b.clone());
    let (mut old_s, mut s) = (BigInt::one(), BigInt::zero());
    let (mut old_t, mut t) = (BigInt::zero(), BigInt::one());

    while !r.is_zero() {
        let (q, rem) = old_r.div_rem(&r);
        old_r = mem::replace(&mut r, rem);

        let q = BigInt::from(q);
        let next_s = &old_s - &q * &s;
        old_s = mem::replace(&mut s, next_s);
        let next_t = &old_t - &q * &t;
        old_t = mem::replace(&mut t, next_t);
    }

    (old_r, old_s, old_t)
}

/// XGCD returns the greatest common divisor `z` of `a` and `b` and, when
/// `extended` is true, coefficients with `z == a*x + b*y`.
///
/// The inputs may be zero or negative:
///
/// - `z` is always `>= 0`.
/// - `a == b == 0` gives `z = x = y = 0`.
/// - `a == 0, b != 0` gives `z = |b|, x = 0, y = sign(b)`.
/// - `a != 0, b == 0` gives `z = |a|, x = sign(a), y = 0`.
pub fn xgcd(
    a_in: &BigInt,
    b_in: &BigInt,
    extended: bool,
) -> (BigInt, Option<BigInt>, Option<BigInt>) {
    if !extended {
        return (BigInt::from(gcd(a_in.magnitude(), b_in.magnitude())), None, None);
    }

    let (z, x, y) = signed_bezout(a_in, b_in);
    (z, Some(x), Some(y))
}

/// Bezout coefficients for signed inputs; see [`xgcd`].
pub(crate) fn signed_bezout(a: &BigInt, b: &BigInt) -> (BigInt, BigInt, BigInt) {
    if a.is_zero() && b.is_zero() {
        return (BigInt::zero(), BigInt::zero(), BigInt::zero());
    }

    let (z, mut x, mut y) = bezout(a.magnitude(), b.magnitude());
    if a.is_negative() {
        x = -x;
    }
    if b.is_negative() {
        y = -y;
    }
    (BigInt::from(z), x, y)
}

/// Extended GCD on unsigned values, returning `(gcd, x, y)` with
/// `gcd == a*x + b*y` when `extended` is true.
pub fn extended_gcd(
    a_in: Cow<'_, BigUint>,
    b_in: Cow<'_, BigUint>,
    extended: bool,
) -> (BigInt, Option<BigInt>, Option<BigInt>) {
    if !extended {
        return (BigInt::from(gcd(&a_in, &b_in)), None, None);
    }

    if a_in.is_zero() && b_in.is_zero() {
        return (BigInt::zero(), Some(BigInt::zero()), Some(BigInt::zero()));
    }

    let (z, x, y) = bezout(&a_in, &b_in);
    (BigInt::from(z), Some(x), Some(y))
}
