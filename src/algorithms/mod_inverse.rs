use alloc::borrow::Cow;

use num_traits::One;

use super::gcd::bezout;
use crate::{BigInt, BigUint};

/// Calculates the multiplicative inverse of `g` modulo `n`, i.e. the `x` in
/// `[0, n)` with `g * x ≡ 1 (mod n)`, or `None` when `g` and `n` share a
/// factor.
///
/// # Panics
///
/// Panics unless `n > 1`.
pub fn mod_inverse(g: Cow<'_, BigUint>, n: Cow<'_, BigUint>) -> Option<BigUint> {
    assert!(*n > BigUint::one(), "modulus must be greater than one");

    let g = g.as_ref() % n.as_ref();
    let (d, x, _) = bezout(&g, &n);
    if !d.is_one() {
        return None;
    }

    let n = BigInt::from(n.into_owned());
    let (_, x) = x.rem_euclid(&n).into_parts();
    Some(x)
}
