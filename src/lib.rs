//! Arbitrary-precision integers.
//!
//! A [`BigUint`] is a magnitude stored as a little-endian sequence of machine
//! words ("digits"), always kept in canonical form with no most-significant
//! zero words. A [`BigInt`] pairs a [`Sign`] with a `BigUint`.
//!
//! All the usual operators are overloaded for owned and borrowed operands, so
//! big integers read like native ones:
//!
//! ```
//! use bigarith::BigUint;
//! use num_traits::{One, Zero};
//!
//! // Calculate large fibonacci numbers.
//! fn fib(n: usize) -> BigUint {
//!     let mut f0 = BigUint::zero();
//!     let mut f1 = BigUint::one();
//!     for _ in 0..n {
//!         let f2 = f0 + &f1;
//!         f0 = core::mem::replace(&mut f1, f2);
//!     }
//!     f0
//! }
//!
//! assert_eq!(fib(100).to_string(), "354224848179261915075");
//! ```
//!
//! Multiplication switches from the schoolbook method to Karatsuba once both
//! operands exceed [`karatsuba_threshold`] words, division uses Knuth's
//! Algorithm D, and the number-theoretic helpers (binary GCD, modular
//! exponentiation and inverse, Newton square root, Miller-Rabin) are built on
//! the public arithmetic.
//!
//! ## Features
//!
//! - `std` (default): implements `std`-only conveniences.
//! - `rand`: random generation through [`RandBigInt`].
//! - `prime` (default): [`prime::probably_prime`] and [`RandPrime`].
//! - `zeroize`: wipes digit storage through `zeroize::Zeroize`.

#![no_std]
#![cfg_attr(docsrs, feature(doc_cfg))]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

use thiserror::Error;

#[macro_use]
mod macros;

mod bigint;
mod biguint;
mod word;

pub mod algorithms;
#[cfg(feature = "prime")]
#[cfg_attr(docsrs, doc(cfg(feature = "prime")))]
pub mod prime;
pub mod traits;

#[cfg(feature = "rand")]
mod bigrand;

pub use crate::big_digit::BigDigit;
pub use crate::bigint::{BigInt, Sign, ToBigInt};
pub use crate::biguint::{
    BigUint, DEFAULT_KARATSUBA_THRESHOLD, ToBigUint, karatsuba_threshold, set_karatsuba_threshold,
};
pub use crate::traits::{ExtendedGcd, ModInverse};
pub use crate::word::Word;

#[cfg(feature = "rand")]
pub use crate::bigrand::{RandBigInt, RandomBits, UniformBigInt, UniformBigUint};

#[cfg(feature = "prime")]
pub use crate::bigrand::RandPrime;

#[cfg(target_pointer_width = "64")]
pub(crate) const VEC_SIZE: usize = 4;
#[cfg(not(target_pointer_width = "64"))]
pub(crate) const VEC_SIZE: usize = 8;

pub(crate) mod big_digit {
    /// A `BigDigit` is a `BigUint`'s composing element.
    #[cfg(target_pointer_width = "64")]
    pub type BigDigit = u64;
    /// A `BigDigit` is a `BigUint`'s composing element.
    #[cfg(not(target_pointer_width = "64"))]
    pub type BigDigit = u32;

    pub(crate) const BITS: u32 = BigDigit::BITS;

    /// Packs little-endian `u32` digits into native digits.
    #[cfg(target_pointer_width = "64")]
    pub(crate) fn from_u32_digits(digits: &[u32]) -> impl Iterator<Item = BigDigit> + '_ {
        digits.chunks(2).map(|chunk| match *chunk {
            [lo, hi] => BigDigit::from(lo) | (BigDigit::from(hi) << 32),
            [lo] => BigDigit::from(lo),
            _ => 0,
        })
    }

    /// Packs little-endian `u32` digits into native digits.
    #[cfg(not(target_pointer_width = "64"))]
    pub(crate) fn from_u32_digits(digits: &[u32]) -> impl Iterator<Item = BigDigit> + '_ {
        digits.iter().copied()
    }

    /// Splits native digits into little-endian `u32` digits.
    #[cfg(target_pointer_width = "64")]
    pub(crate) fn to_u32_digits(digits: &[BigDigit]) -> impl Iterator<Item = u32> + '_ {
        digits
            .iter()
            .flat_map(|&d| [d as u32, (d >> 32) as u32])
    }

    /// Splits native digits into little-endian `u32` digits.
    #[cfg(not(target_pointer_width = "64"))]
    pub(crate) fn to_u32_digits(digits: &[BigDigit]) -> impl Iterator<Item = u32> + '_ {
        digits.iter().copied()
    }
}

/// The error returned when parsing a big integer from text fails.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}")]
pub struct ParseBigIntError {
    kind: BigIntErrorKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
enum BigIntErrorKind {
    #[error("cannot parse integer from empty string")]
    Empty,
    #[error("invalid digit found in string")]
    InvalidDigit,
    #[error("digit separator must sit between two digits")]
    InvalidSeparator,
}

impl ParseBigIntError {
    fn empty() -> Self {
        ParseBigIntError {
            kind: BigIntErrorKind::Empty,
        }
    }

    fn invalid() -> Self {
        ParseBigIntError {
            kind: BigIntErrorKind::InvalidDigit,
        }
    }

    fn separator() -> Self {
        ParseBigIntError {
            kind: BigIntErrorKind::InvalidSeparator,
        }
    }

    /// Returns `true` when the input held no digits at all.
    pub fn is_empty(&self) -> bool {
        self.kind == BigIntErrorKind::Empty
    }
}

/// The error type returned when a checked conversion from a big integer
/// into a primitive fails.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
#[error("out of range conversion regarding big integer attempted")]
pub struct TryFromBigIntError<T> {
    original: T,
}

impl<T> TryFromBigIntError<T> {
    fn new(original: T) -> Self {
        TryFromBigIntError { original }
    }

    /// Extracts the value that failed to convert.
    pub fn into_original(self) -> T {
        self.original
    }
}
