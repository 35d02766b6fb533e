use alloc::vec::Vec;
use core::cmp::Ordering::{self, Equal};
use core::hash::{Hash, Hasher};
use core::ops::Range;
use core::{fmt, mem};

use smallvec::SmallVec;

use num_integer::{Integer, Roots};
use num_traits::{One, Unsigned, Zero};

use crate::VEC_SIZE;
use crate::big_digit::{self, BigDigit};
use crate::word::Word;

mod addition;
mod bits;
pub(crate) mod convert;
mod division;
mod multiplication;
mod power;
mod roots;
mod shift;
mod subtraction;

#[cfg(feature = "zeroize")]
mod zeroize;

pub use self::addition::{__add2, adc, add2};
pub use self::convert::ToBigUint;
pub use self::division::{
    approximate_quotient, div_rem, div_rem_digit, div_rem_words, rem_digit,
};
pub use self::multiplication::{
    DEFAULT_KARATSUBA_THRESHOLD, karatsuba_threshold, mac_digit, mac_with_carry, mac3, mul3,
    mul_with_threshold, scalar_mul, set_karatsuba_threshold,
};
pub use self::shift::{biguint_shl, biguint_shr};
pub(crate) use self::shift::shift_amount;
pub use self::subtraction::{__sub2, __sub2rev, sbb, sub2, sub2rev};

/// A big unsigned integer type.
///
/// Digits are stored least significant first and the representation is
/// always canonical: the most significant stored digit is never zero, and
/// zero is the empty digit sequence.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct BigUint {
    pub(crate) data: SmallVec<[BigDigit; VEC_SIZE]>,
}

impl Hash for BigUint {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.data.hash(state);
    }
}

impl PartialOrd for BigUint {
    #[inline]
    fn partial_cmp(&self, other: &BigUint) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BigUint {
    #[inline]
    fn cmp(&self, other: &BigUint) -> Ordering {
        cmp_slice(&self.data[..], &other.data[..])
    }
}

/// Compares two little-endian digit slices by value. Most significant zero
/// digits are ignored, so the slices need not be canonical.
pub fn cmp_slice<W: Word>(a: &[W], b: &[W]) -> Ordering {
    let a = &a[..trimmed_len(a)];
    let b = &b[..trimmed_len(b)];

    match a.len().cmp(&b.len()) {
        Equal => a.iter().rev().cmp(b.iter().rev()),
        other => other,
    }
}

/// The length of `digits` once its most significant zero digits are dropped.
#[inline]
pub(crate) fn trimmed_len<W: Word>(digits: &[W]) -> usize {
    digits
        .iter()
        .rposition(|d| !d.is_zero())
        .map_or(0, |top| top + 1)
}

/// Drops most significant zero digits from a scratch buffer.
#[inline]
pub(crate) fn trim<W: Word>(digits: &mut Vec<W>) {
    let len = trimmed_len(digits);
    digits.truncate(len);
}

impl fmt::Debug for BigUint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl Zero for BigUint {
    #[inline]
    fn zero() -> BigUint {
        BigUint {
            data: SmallVec::new(),
        }
    }

    #[inline]
    fn set_zero(&mut self) {
        self.data.clear();
    }

    #[inline]
    fn is_zero(&self) -> bool {
        self.data.is_empty()
    }
}

impl One for BigUint {
    #[inline]
    fn one() -> BigUint {
        BigUint {
            data: smallvec::smallvec![1],
        }
    }

    #[inline]
    fn set_one(&mut self) {
        self.data.clear();
        self.data.push(1);
    }

    #[inline]
    fn is_one(&self) -> bool {
        self.data[..] == [1]
    }
}

impl Unsigned for BigUint {}

impl Integer for BigUint {
    #[inline]
    fn div_rem(&self, other: &BigUint) -> (BigUint, BigUint) {
        div_rem(self, other)
    }

    #[inline]
    fn div_floor(&self, other: &BigUint) -> BigUint {
        div_rem(self, other).0
    }

    #[inline]
    fn mod_floor(&self, other: &BigUint) -> BigUint {
        self % other
    }

    /// Calculates the Greatest Common Divisor (GCD) of the number and `other`.
    ///
    /// The result is always positive.
    #[inline]
    fn gcd(&self, other: &Self) -> Self {
        crate::algorithms::gcd(self, other)
    }

    /// Calculates the Lowest Common Multiple (LCM) of the number and `other`.
    #[inline]
    fn lcm(&self, other: &BigUint) -> BigUint {
        if self.is_zero() || other.is_zero() {
            return BigUint::zero();
        }
        self / self.gcd(other) * other
    }

    /// Deprecated, use `is_multiple_of` instead.
    #[inline]
    fn divides(&self, other: &BigUint) -> bool {
        self.is_multiple_of(other)
    }

    /// Returns `true` if the number is a multiple of `other`.
    #[inline]
    fn is_multiple_of(&self, other: &BigUint) -> bool {
        if other.is_zero() {
            return self.is_zero();
        }
        (self % other).is_zero()
    }

    /// Returns `true` if the number is divisible by `2`.
    #[inline]
    fn is_even(&self) -> bool {
        // Considering only the last digit.
        match self.data.first() {
            Some(x) => x.is_even(),
            None => true,
        }
    }

    /// Returns `true` if the number is not divisible by `2`.
    #[inline]
    fn is_odd(&self) -> bool {
        !self.is_even()
    }
}

impl Roots for BigUint {
    fn nth_root(&self, n: u32) -> Self {
        self::roots::nth_root(self, n)
    }

    fn sqrt(&self) -> Self {
        self::roots::sqrt(self)
    }

    fn cbrt(&self) -> Self {
        self::roots::nth_root(self, 3)
    }
}

promote_scalar_binops!(BigUint; u8, u16, u32, u64, u128, usize);

impl_sum_iter_type!(BigUint);
impl_product_iter_type!(BigUint);

/// Creates and initializes a `BigUint` from native digits, least
/// significant first.
#[inline]
pub(crate) fn biguint_from_vec(digits: Vec<BigDigit>) -> BigUint {
    BigUint {
        data: SmallVec::from_vec(digits),
    }
    .normalized()
}

impl BigUint {
    /// Creates and initializes a `BigUint` from base 2<sup>32</sup> digits,
    /// least significant first.
    #[inline]
    pub fn new(digits: Vec<u32>) -> BigUint {
        BigUint::from_slice(&digits)
    }

    /// Creates and initializes a `BigUint` from base 2<sup>32</sup> digits,
    /// least significant first.
    #[inline]
    pub fn from_slice(slice: &[u32]) -> BigUint {
        let mut big = BigUint::zero();
        big.assign_from_slice(slice);
        big
    }

    /// Assigns a value to this `BigUint` from base 2<sup>32</sup> digits,
    /// least significant first.
    #[inline]
    pub fn assign_from_slice(&mut self, slice: &[u32]) {
        self.data.clear();
        self.data.extend(big_digit::from_u32_digits(slice));
        self.normalize();
    }

    /// Creates a `BigUint` from native [`BigDigit`] words, least significant
    /// first. Most significant zero words are dropped.
    #[inline]
    pub fn from_words(words: &[BigDigit]) -> BigUint {
        BigUint {
            data: SmallVec::from_slice(&words[..trimmed_len(words)]),
        }
    }

    /// The native words of this number, least significant first, without
    /// any most significant zero word.
    #[inline]
    pub fn words(&self) -> &[BigDigit] {
        &self.data
    }

    /// Returns the base 2<sup>32</sup> digits of this number, least
    /// significant first. Zero yields an empty vector.
    pub fn to_u32_digits(&self) -> Vec<u32> {
        let mut digits: Vec<u32> = big_digit::to_u32_digits(&self.data).collect();
        trim(&mut digits);
        digits
    }

    /// Reads the word at `index`; words past the end read as zero.
    #[inline]
    pub fn get_word(&self, index: usize) -> BigDigit {
        self.data.get(index).copied().unwrap_or(0)
    }

    /// Writes the word at `index`, zero-extending when writing past the end.
    pub fn set_word(&mut self, index: usize, word: BigDigit) {
        if index < self.data.len() {
            self.data[index] = word;
            self.normalize();
        } else if word != 0 {
            self.data.resize(index + 1, 0);
            self.data[index] = word;
        }
    }

    /// Builds a new value from the words in `range`, which may extend past
    /// the stored words.
    pub fn extract(&self, range: Range<usize>) -> BigUint {
        let end = range.end.min(self.data.len());
        if range.start >= end {
            return BigUint::zero();
        }
        BigUint::from_words(&self.data[range.start..end])
    }

    /// Determines the fewest bits necessary to express the `BigUint`.
    pub fn bits(&self) -> u64 {
        match self.data.last() {
            Some(&top) => {
                let zeros = u64::from(top.leading_zeros());
                self.data.len() as u64 * u64::from(big_digit::BITS) - zeros
            }
            None => 0,
        }
    }

    /// Leading zero bits of the most significant word; zero has none.
    #[inline]
    pub fn leading_zeros(&self) -> u32 {
        self.data.last().map_or(0, |top| top.leading_zeros())
    }

    /// Returns the number of least-significant bits that are zero,
    /// or `None` if the entire number is zero.
    pub fn trailing_zeros(&self) -> Option<u64> {
        let i = self.data.iter().position(|&digit| digit != 0)?;
        let zeros = u64::from(self.data[i].trailing_zeros());
        Some(i as u64 * u64::from(big_digit::BITS) + zeros)
    }

    /// Returns the number of one bits.
    pub fn count_ones(&self) -> u64 {
        self.data.iter().map(|d| u64::from(d.count_ones())).sum()
    }

    /// Returns whether the bit in the given position is set.
    pub fn bit(&self, bit: u64) -> bool {
        let bits_per_digit = u64::from(big_digit::BITS);
        match usize::try_from(bit / bits_per_digit) {
            Ok(index) => {
                let mask: BigDigit = 1 << (bit % bits_per_digit);
                self.get_word(index) & mask != 0
            }
            Err(_) => false,
        }
    }

    /// Sets or clears the bit in the given position.
    ///
    /// Note that setting a bit far beyond the current width allocates the
    /// words up to it.
    pub fn set_bit(&mut self, bit: u64, value: bool) {
        let bits_per_digit = u64::from(big_digit::BITS);
        let index = usize::try_from(bit / bits_per_digit).unwrap_or(usize::MAX);
        let mask: BigDigit = 1 << (bit % bits_per_digit);
        let word = self.get_word(index);
        if value {
            self.set_word(index, word | mask);
        } else {
            self.set_word(index, word & !mask);
        }
    }

    /// Adds `other`, shifted left by `shift` words, to `self` in place.
    pub fn add_at(&mut self, other: &[BigDigit], shift: usize) {
        let other = &other[..trimmed_len(other)];
        if other.is_empty() {
            return;
        }
        let needed = shift + other.len();
        if self.data.len() < needed {
            self.data.resize(needed, 0);
        }
        if __add2(&mut self.data[shift..], other) {
            self.data.push(1);
        }
    }

    /// Subtracts `other`, shifted left by `shift` words, from `self` in
    /// place.
    ///
    /// # Panics
    ///
    /// Panics if the shifted `other` is larger than `self`.
    pub fn sub_at(&mut self, other: &[BigDigit], shift: usize) {
        let other = &other[..trimmed_len(other)];
        if other.is_empty() {
            return;
        }
        assert!(
            shift < self.data.len(),
            "Cannot subtract b from a because b is larger than a."
        );
        sub2(&mut self.data[shift..], other);
        self.normalize();
    }

    /// Returns `true` when `self` is a power of two.
    #[inline]
    pub fn is_power_of_two(&self) -> bool {
        self.count_ones() == 1
    }

    /// Strips off trailing zero bigdigits - comparisons require the last
    /// element in the vector to be nonzero.
    #[inline]
    pub(crate) fn normalize(&mut self) {
        let len = trimmed_len(&self.data);
        self.data.truncate(len);
    }

    /// Returns a normalized `BigUint`.
    #[inline]
    pub(crate) fn normalized(mut self) -> BigUint {
        self.normalize();
        self
    }

    /// Moves the digits out, leaving zero behind.
    #[inline]
    pub(crate) fn take(&mut self) -> BigUint {
        mem::take(self)
    }
}
