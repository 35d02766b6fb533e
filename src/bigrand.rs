//! Random big integers drawn from any [`rand::Rng`].
#![cfg(feature = "rand")]
#![cfg_attr(docsrs, doc(cfg(feature = "rand")))]

use rand::Rng;
use rand::distr::Distribution;
use rand::distr::uniform::{Error, SampleBorrow, SampleUniform, UniformSampler};

use alloc::vec;
use alloc::vec::Vec;

use crate::Sign::{Minus, Plus};
use crate::big_digit::{self, BigDigit};
use crate::biguint::biguint_from_vec;
use crate::{BigInt, BigUint};

use num_traits::Zero;

/// Sampling of random big integers, implemented for every [`Rng`].
///
/// The `rand` feature must be enabled to use this.
pub trait RandBigInt {
    /// A uniformly random [`BigUint`] below `2^bit_size`.
    fn gen_biguint(&mut self, bit_size: u64) -> BigUint;

    /// A random [`BigInt`] whose magnitude is below `2^bit_size`, with every
    /// value in that range, zero included, equally likely.
    fn gen_bigint(&mut self, bit_size: u64) -> BigInt;

    /// A uniformly random [`BigUint`] in `[0, bound)`.
    ///
    /// # Panics
    ///
    /// Panics if `bound` is zero.
    fn gen_biguint_below(&mut self, bound: &BigUint) -> BigUint;

    /// A uniformly random [`BigUint`] in `[lbound, ubound)`.
    ///
    /// # Panics
    ///
    /// Panics if the range is empty.
    fn gen_biguint_range(&mut self, lbound: &BigUint, ubound: &BigUint) -> BigUint;

    /// A uniformly random [`BigInt`] in `[lbound, ubound)`.
    ///
    /// # Panics
    ///
    /// Panics if the range is empty.
    fn gen_bigint_range(&mut self, lbound: &BigInt, ubound: &BigInt) -> BigInt;
}

impl<R: Rng + ?Sized> RandBigInt for R {
    fn gen_biguint(&mut self, bit_size: u64) -> BigUint {
        let word_bits = u64::from(big_digit::BITS);
        let words = usize::try_from(bit_size.div_ceil(word_bits)).unwrap_or(usize::MAX);
        let mut data: Vec<BigDigit> = vec![0; words];
        self.fill(&mut data[..]);

        // only the top word can hold bits past `bit_size`
        let excess = (word_bits - bit_size % word_bits) % word_bits;
        if let Some(top) = data.last_mut() {
            *top >>= excess;
        }
        biguint_from_vec(data)
    }

    fn gen_bigint(&mut self, bit_size: u64) -> BigInt {
        loop {
            let magnitude = self.gen_biguint(bit_size);
            let negative: bool = self.random();
            // zero has one representation where every other magnitude has
            // two, so half of the zero draws are thrown back
            if negative && magnitude.is_zero() {
                continue;
            }
            let sign = if negative { Minus } else { Plus };
            return BigInt::from_biguint(sign, magnitude);
        }
    }

    fn gen_biguint_below(&mut self, bound: &BigUint) -> BigUint {
        assert!(!bound.is_zero(), "cannot sample below a zero bound");
        let bits = bound.bits();
        loop {
            let candidate = self.gen_biguint(bits);
            if candidate < *bound {
                return candidate;
            }
        }
    }

    fn gen_biguint_range(&mut self, lbound: &BigUint, ubound: &BigUint) -> BigUint {
        assert!(lbound < ubound, "cannot sample from an empty range");
        lbound + self.gen_biguint_below(&(ubound - lbound))
    }

    fn gen_bigint_range(&mut self, lbound: &BigInt, ubound: &BigInt) -> BigInt {
        assert!(lbound < ubound, "cannot sample from an empty range");
        let (_, width) = (ubound - lbound).into_parts();
        lbound + BigInt::from(self.gen_biguint_below(&width))
    }
}

/// Generates the [`UniformSampler`] back-end for a big integer type. The
/// sampler keeps the lower bound and the width of the half-open range.
macro_rules! uniform_sampler {
    ($Sampler:ident, $T:ty, |$low:ident, $high:ident| $width:expr) => {
        #[doc = concat!("The back-end implementing rand's [`UniformSampler`] for [`", stringify!($T), "`].")]
        #[derive(Clone, Debug)]
        pub struct $Sampler {
            low: $T,
            width: BigUint,
        }

        impl UniformSampler for $Sampler {
            type X = $T;

            fn new<B1, B2>(low: B1, high: B2) -> Result<Self, Error>
            where
                B1: SampleBorrow<$T> + Sized,
                B2: SampleBorrow<$T> + Sized,
            {
                let ($low, $high) = (low.borrow(), high.borrow());
                if $low >= $high {
                    return Err(Error::EmptyRange);
                }
                Ok($Sampler {
                    width: $width,
                    low: $low.clone(),
                })
            }

            fn new_inclusive<B1, B2>(low: B1, high: B2) -> Result<Self, Error>
            where
                B1: SampleBorrow<$T> + Sized,
                B2: SampleBorrow<$T> + Sized,
            {
                let (low, high) = (low.borrow(), high.borrow());
                if low > high {
                    return Err(Error::EmptyRange);
                }
                Self::new(low, high + 1u8)
            }

            #[inline]
            fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> $T {
                &self.low + <$T>::from(rng.gen_biguint_below(&self.width))
            }
        }

        impl SampleUniform for $T {
            type Sampler = $Sampler;
        }
    };
}

uniform_sampler!(UniformBigUint, BigUint, |low, high| high - low);
uniform_sampler!(UniformBigInt, BigInt, |low, high| (high - low).into_parts().1);

/// A [`Distribution`] of [`BigUint`] and [`BigInt`] values whose magnitude
/// fits in a fixed number of bits.
///
/// The `rand` feature must be enabled to use this.
#[derive(Clone, Copy, Debug)]
pub struct RandomBits {
    bits: u64,
}

impl RandomBits {
    /// Values with magnitude below `2^bits`.
    #[inline]
    pub fn new(bits: u64) -> RandomBits {
        RandomBits { bits }
    }
}

impl Distribution<BigUint> for RandomBits {
    #[inline]
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> BigUint {
        rng.gen_biguint(self.bits)
    }
}

impl Distribution<BigInt> for RandomBits {
    #[inline]
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> BigInt {
        rng.gen_bigint(self.bits)
    }
}

/// Generation of random primes of an exact bit length.
///
/// The primes are only as unpredictable as the generator behind them.
///
/// # Example
#[cfg_attr(feature = "std", doc = " ```")]
#[cfg_attr(not(feature = "std"), doc = " ```ignore")]
/// use bigarith::RandPrime;
///
/// let mut rng = rand::rng();
/// let p = rng.gen_prime(256);
/// assert_eq!(p.bits(), 256);
/// ```
#[cfg(feature = "prime")]
#[cfg_attr(docsrs, doc(cfg(feature = "prime")))]
pub trait RandPrime {
    /// A random probable prime with exactly `bits` bits, the top two of
    /// them set.
    ///
    /// # Panics
    ///
    /// Panics if `bits` is below 2.
    fn gen_prime(&mut self, bits: usize) -> BigUint;
}

/// Odd primes used to sieve candidates before the probabilistic test. The
/// list stops where their product would overflow a `u64`.
#[cfg(feature = "prime")]
const SIEVE_PRIMES: [u8; 15] = [3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47, 53];

/// The product of [`SIEVE_PRIMES`].
#[cfg(feature = "prime")]
const SIEVE_PRIMES_PRODUCT: u64 = 16_294_579_238_595_022_365;

/// How far past a random start the sieve walks before drawing again.
#[cfg(feature = "prime")]
const SIEVE_WINDOW: u64 = 1 << 20;

/// Steps the odd `candidate` forward to the nearest value with no factor in
/// [`SIEVE_PRIMES`]. Yields `None` when that value would outgrow `bits`.
///
/// Only the residue modulo the primes' product is tracked, so every step is
/// word arithmetic.
#[cfg(feature = "prime")]
fn sieve_forward(candidate: BigUint, bits: usize) -> Option<BigUint> {
    use num_traits::ToPrimitive;

    let residue = (&candidate % SIEVE_PRIMES_PRODUCT).to_u64()?;
    let delta = (0..SIEVE_WINDOW).step_by(2).find(|&delta| {
        let m = residue + delta;
        // a candidate below 64 may be one of the sieve primes itself
        SIEVE_PRIMES
            .iter()
            .map(|&p| u64::from(p))
            .all(|p| m % p != 0 || (bits <= 6 && m == p))
    })?;

    let p = candidate + delta;
    (p.bits() == bits as u64).then_some(p)
}

#[cfg(feature = "prime")]
#[cfg_attr(docsrs, doc(cfg(feature = "prime")))]
impl<R: Rng + ?Sized> RandPrime for R {
    fn gen_prime(&mut self, bits: usize) -> BigUint {
        use crate::prime::probably_prime;

        assert!(bits >= 2, "prime size must be at least 2-bit");
        let top = bits as u64 - 1;

        loop {
            let mut candidate = self.gen_biguint(bits as u64);
            // with the top two bits set, the product of two such primes
            // never comes up a bit short
            candidate.set_bit(top, true);
            candidate.set_bit(top - 1, true);
            candidate.set_bit(0, true);

            let Some(p) = sieve_forward(candidate, bits) else {
                continue;
            };
            if probably_prime(&p, 20) {
                return p;
            }
        }
    }
}
