use num_integer::Integer;
use num_traits::{One, Pow, Signed, Zero};

use super::BigInt;
use super::Sign::{Minus, Plus};
use crate::BigUint;

/// The sign of `base ^ exponent`: negative only for a negative base raised
/// to an odd power.
#[inline]
fn powsign<T: Integer>(base: &BigInt, exp: &T) -> super::Sign {
    if base.sign == Minus && exp.is_odd() {
        Minus
    } else {
        Plus
    }
}

macro_rules! pow_impl {
    ($($T:ty),*) => {$(
        impl Pow<$T> for BigInt {
            type Output = BigInt;

            #[inline]
            fn pow(self, rhs: $T) -> BigInt {
                BigInt::from_biguint(powsign(&self, &rhs), Pow::pow(self.data, rhs))
            }
        }

        impl Pow<&$T> for BigInt {
            type Output = BigInt;

            #[inline]
            fn pow(self, rhs: &$T) -> BigInt {
                Pow::pow(self, *rhs)
            }
        }

        impl Pow<$T> for &BigInt {
            type Output = BigInt;

            #[inline]
            fn pow(self, rhs: $T) -> BigInt {
                BigInt::from_biguint(powsign(self, &rhs), Pow::pow(&self.data, rhs))
            }
        }

        impl Pow<&$T> for &BigInt {
            type Output = BigInt;

            #[inline]
            fn pow(self, rhs: &$T) -> BigInt {
                Pow::pow(self, *rhs)
            }
        }
    )*};
}

pow_impl!(u8, u16, u32, u64, u128, usize);

impl Pow<&BigUint> for &BigInt {
    type Output = BigInt;

    #[inline]
    fn pow(self, rhs: &BigUint) -> BigInt {
        BigInt::from_biguint(powsign(self, rhs), Pow::pow(&self.data, rhs))
    }
}

impl Pow<BigUint> for BigInt {
    type Output = BigInt;

    #[inline]
    fn pow(self, rhs: BigUint) -> BigInt {
        Pow::pow(&self, &rhs)
    }
}

impl BigInt {
    /// Returns `self ^ exponent`.
    pub fn pow(&self, exponent: u32) -> BigInt {
        Pow::pow(self, exponent)
    }

    /// Returns `(self ^ exponent) mod |modulus|`, always in `[0, |modulus|)`.
    ///
    /// A negative exponent is only meaningful for a base of `1` or `-1`,
    /// whose powers are periodic; any other base yields zero.
    ///
    /// # Panics
    ///
    /// Panics if the modulus is zero, or if the base is zero and the
    /// exponent negative.
    pub fn modpow(&self, exponent: &BigInt, modulus: &BigInt) -> BigInt {
        assert!(
            !modulus.is_zero(),
            "attempt to calculate with zero modulus!"
        );

        if exponent.is_negative() {
            assert!(
                !self.is_zero(),
                "attempt to raise zero to a negative power"
            );
            if !self.data.is_one() {
                return BigInt::zero();
            }
        }

        let m = &modulus.data;
        let power = self.data.modpow(&exponent.data, m);
        if self.is_negative() && exponent.data.is_odd() && !power.is_zero() {
            BigInt::from(m - power)
        } else {
            BigInt::from(power)
        }
    }
}
