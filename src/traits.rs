//! Number-theoretic operations shared by [`BigUint`] and [`BigInt`].

use alloc::borrow::Cow;

use num_integer::Integer;

use crate::algorithms::{extended_gcd, mod_inverse, signed_bezout};
use crate::{BigInt, BigUint};

/// The inverse of `self` under multiplication modulo `m`.
///
/// The result lies in `[0, |m|)`; there is none when `self` and `m` share a
/// factor. Signed elements are reduced into `[0, |m|)` first.
///
/// # Panics
///
/// Panics unless `|m| > 1`.
pub trait ModInverse<M>: Sized {
    /// The type of the inverse.
    type Output;

    /// `x` with `self * x ≡ 1 (mod m)`, or `None` when no such `x` exists.
    fn mod_inverse(self, m: M) -> Option<Self::Output>;
}

/// Bezout coefficients from the extended Euclidean algorithm.
pub trait ExtendedGcd<R>: Sized {
    /// `(g, x, y)` with `g = gcd(self, other) >= 0` and
    /// `self * x + other * y == g`.
    fn extended_gcd(self, other: R) -> (BigInt, BigInt, BigInt);
}

impl ModInverse<&BigUint> for BigUint {
    type Output = BigUint;

    fn mod_inverse(self, m: &BigUint) -> Option<BigUint> {
        mod_inverse(Cow::Owned(self), Cow::Borrowed(m))
    }
}

/// The element is first reduced into `[0, |m|)`, so negative elements work.
fn signed_mod_inverse(element: &BigInt, modulus: &BigUint) -> Option<BigInt> {
    let reduced = element.mod_floor(&BigInt::from(modulus.clone()));
    mod_inverse(Cow::Owned(reduced.into_parts().1), Cow::Borrowed(modulus)).map(BigInt::from)
}

impl ModInverse<&BigUint> for BigInt {
    type Output = BigInt;

    fn mod_inverse(self, m: &BigUint) -> Option<BigInt> {
        signed_mod_inverse(&self, m)
    }
}

impl ModInverse<&BigInt> for BigInt {
    type Output = BigInt;

    fn mod_inverse(self, m: &BigInt) -> Option<BigInt> {
        signed_mod_inverse(&self, m.magnitude())
    }
}

impl ExtendedGcd<&BigUint> for BigUint {
    fn extended_gcd(self, other: &BigUint) -> (BigInt, BigInt, BigInt) {
        match extended_gcd(Cow::Owned(self), Cow::Borrowed(other), true) {
            (g, Some(x), Some(y)) => (g, x, y),
            (g, _, _) => (g, BigInt::default(), BigInt::default()),
        }
    }
}

impl ExtendedGcd<&BigInt> for BigInt {
    fn extended_gcd(self, other: &BigInt) -> (BigInt, BigInt, BigInt) {
        signed_bezout(&self, other)
    }
}

// Owned right-hand sides borrow and forward.

macro_rules! forward_owned_mod_inverse {
    ($($Lhs:ty, $Rhs:ty => $Out:ty;)*) => {$(
        impl ModInverse<$Rhs> for $Lhs {
            type Output = $Out;

            #[inline]
            fn mod_inverse(self, m: $Rhs) -> Option<$Out> {
                ModInverse::mod_inverse(self, &m)
            }
        }
    )*};
}

macro_rules! forward_owned_extended_gcd {
    ($($T:ty),*) => {$(
        impl ExtendedGcd<$T> for $T {
            #[inline]
            fn extended_gcd(self, other: $T) -> (BigInt, BigInt, BigInt) {
                ExtendedGcd::extended_gcd(self, &other)
            }
        }
    )*};
}

forward_owned_mod_inverse! {
    BigUint, BigUint => BigUint;
    BigInt, BigUint => BigInt;
    BigInt, BigInt => BigInt;
}

forward_owned_extended_gcd!(BigUint, BigInt);
