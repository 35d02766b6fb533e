use num_traits::{One, Pow, Zero};

use super::BigUint;

impl BigUint {
    /// Returns `self ^ exponent`.
    pub fn pow(&self, exponent: u32) -> BigUint {
        Pow::pow(self, exponent)
    }

    /// Returns `(self ^ exponent) % modulus`.
    ///
    /// The exponent is scanned from its least significant bit, squaring the
    /// base as it goes.
    ///
    /// # Panics
    ///
    /// Panics if the modulus is zero.
    pub fn modpow(&self, exponent: &BigUint, modulus: &BigUint) -> BigUint {
        assert!(
            !modulus.is_zero(),
            "attempt to calculate with zero modulus!"
        );
        if modulus.is_one() {
            return BigUint::zero();
        }

        let mut base = self % modulus;
        let mut result = BigUint::one();
        let bits = exponent.bits();
        for i in 0..bits {
            if exponent.bit(i) {
                result = &result * &base % modulus;
            }
            if i + 1 < bits {
                base = &base * &base % modulus;
            }
        }
        result
    }
}

macro_rules! pow_impl {
    ($($T:ty),*) => {$(
        impl Pow<$T> for BigUint {
            type Output = BigUint;

            fn pow(self, mut exp: $T) -> BigUint {
                if exp == 0 {
                    return BigUint::one();
                }
                let mut base = self;

                while exp & 1 == 0 {
                    base = &base * &base;
                    exp >>= 1;
                }

                if exp == 1 {
                    return base;
                }

                let mut acc = base.clone();
                while exp > 1 {
                    exp >>= 1;
                    base = &base * &base;
                    if exp & 1 == 1 {
                        acc *= &base;
                    }
                }
                acc
            }
        }

        impl Pow<&$T> for BigUint {
            type Output = BigUint;

            #[inline]
            fn pow(self, exp: &$T) -> BigUint {
                Pow::pow(self, *exp)
            }
        }

        impl Pow<$T> for &BigUint {
            type Output = BigUint;

            #[inline]
            fn pow(self, exp: $T) -> BigUint {
                if exp == 0 {
                    return BigUint::one();
                }
                Pow::pow(self.clone(), exp)
            }
        }

        impl Pow<&$T> for &BigUint {
            type Output = BigUint;

            #[inline]
            fn pow(self, exp: &$T) -> BigUint {
                Pow::pow(self, *exp)
            }
        }
    )*};
}

pow_impl!(u8, u16, u32, u64, u128, usize);

impl Pow<&BigUint> for &BigUint {
    type Output = BigUint;

    fn pow(self, exp: &BigUint) -> BigUint {
        if self.is_one() || exp.is_zero() {
            return BigUint::one();
        }
        if self.is_zero() {
            return BigUint::zero();
        }
        if let Ok(exp) = u64::try_from(exp) {
            return Pow::pow(self, exp);
        }
        // The result would not fit in memory.
        panic!("memory overflow")
    }
}

impl Pow<BigUint> for BigUint {
    type Output = BigUint;

    #[inline]
    fn pow(self, exp: BigUint) -> BigUint {
        Pow::pow(&self, &exp)
    }
}

impl Pow<&BigUint> for BigUint {
    type Output = BigUint;

    #[inline]
    fn pow(self, exp: &BigUint) -> BigUint {
        Pow::pow(&self, exp)
    }
}

impl Pow<BigUint> for &BigUint {
    type Output = BigUint;

    #[inline]
    fn pow(self, exp: BigUint) -> BigUint {
        Pow::pow(self, &exp)
    }
}
