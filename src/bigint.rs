use alloc::vec::Vec;
use core::cmp::Ordering::{self, Equal};
use core::hash::{Hash, Hasher};
use core::ops::{Mul, Neg, Not};
use core::{fmt, mem};

use num_integer::{Integer, Roots};
use num_traits::{CheckedAdd, CheckedDiv, CheckedMul, CheckedSub, One, Signed, Zero};

use crate::biguint::BigUint;

mod addition;
mod bits;
mod convert;
mod division;
mod multiplication;
mod power;
mod shift;
mod subtraction;

pub use self::bits::twos_complement_word;
pub use self::convert::ToBigInt;

use self::Sign::{Minus, NoSign, Plus};

/// A `Sign` is a [`BigInt`]'s composing element.
#[derive(PartialEq, PartialOrd, Eq, Ord, Copy, Clone, Debug, Hash)]
pub enum Sign {
    Minus,
    NoSign,
    Plus,
}

impl Neg for Sign {
    type Output = Sign;

    /// Negate `Sign` value.
    #[inline]
    fn neg(self) -> Sign {
        match self {
            Minus => Plus,
            NoSign => NoSign,
            Plus => Minus,
        }
    }
}

impl Mul<Sign> for Sign {
    type Output = Sign;

    #[inline]
    fn mul(self, other: Sign) -> Sign {
        match (self, other) {
            (NoSign, _) | (_, NoSign) => NoSign,
            (Plus, Plus) | (Minus, Minus) => Plus,
            (Plus, Minus) | (Minus, Plus) => Minus,
        }
    }
}

/// A big signed integer type.
///
/// Zero always carries [`Sign::NoSign`], so there is no negative zero.
#[derive(Clone, PartialEq, Eq)]
pub struct BigInt {
    pub(crate) sign: Sign,
    pub(crate) data: BigUint,
}

/// A non-negative value hashes exactly like the equal `BigUint`.
impl Hash for BigInt {
    fn hash<H: Hasher>(&self, state: &mut H) {
        if self.sign == Minus {
            self.sign.hash(state);
        }
        self.data.hash(state);
    }
}

impl PartialOrd for BigInt {
    #[inline]
    fn partial_cmp(&self, other: &BigInt) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BigInt {
    #[inline]
    fn cmp(&self, other: &BigInt) -> Ordering {
        let scmp = self.sign.cmp(&other.sign);
        if scmp != Equal {
            return scmp;
        }

        match self.sign {
            NoSign => Equal,
            Plus => self.data.cmp(&other.data),
            Minus => other.data.cmp(&self.data),
        }
    }
}

impl Default for BigInt {
    #[inline]
    fn default() -> BigInt {
        Zero::zero()
    }
}

impl fmt::Debug for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl Zero for BigInt {
    #[inline]
    fn zero() -> BigInt {
        BigInt {
            sign: NoSign,
            data: BigUint::zero(),
        }
    }

    #[inline]
    fn set_zero(&mut self) {
        self.data.set_zero();
        self.sign = NoSign;
    }

    #[inline]
    fn is_zero(&self) -> bool {
        self.sign == NoSign
    }
}

impl One for BigInt {
    #[inline]
    fn one() -> BigInt {
        BigInt {
            sign: Plus,
            data: BigUint::one(),
        }
    }

    #[inline]
    fn set_one(&mut self) {
        self.data.set_one();
        self.sign = Plus;
    }

    #[inline]
    fn is_one(&self) -> bool {
        self.sign == Plus && self.data.is_one()
    }
}

impl Signed for BigInt {
    #[inline]
    fn abs(&self) -> BigInt {
        match self.sign {
            Plus | NoSign => self.clone(),
            Minus => BigInt::from(self.data.clone()),
        }
    }

    #[inline]
    fn abs_sub(&self, other: &BigInt) -> BigInt {
        if *self <= *other {
            Zero::zero()
        } else {
            self - other
        }
    }

    #[inline]
    fn signum(&self) -> BigInt {
        match self.sign {
            Plus => BigInt::one(),
            Minus => -BigInt::one(),
            NoSign => BigInt::zero(),
        }
    }

    #[inline]
    fn is_positive(&self) -> bool {
        self.sign == Plus
    }

    #[inline]
    fn is_negative(&self) -> bool {
        self.sign == Minus
    }
}

impl Neg for BigInt {
    type Output = BigInt;

    #[inline]
    fn neg(mut self) -> BigInt {
        self.sign = -self.sign;
        self
    }
}

impl Neg for &BigInt {
    type Output = BigInt;

    #[inline]
    fn neg(self) -> BigInt {
        -self.clone()
    }
}

/// `!x == -x - 1`, matching two's complement on the infinite sign
/// extension.
impl Not for BigInt {
    type Output = BigInt;

    fn not(self) -> BigInt {
        match self.sign {
            NoSign | Plus => BigInt::from_biguint(Minus, self.data + 1u8),
            Minus => BigInt::from_biguint(Plus, self.data - 1u8),
        }
    }
}

impl Not for &BigInt {
    type Output = BigInt;

    fn not(self) -> BigInt {
        match self.sign {
            NoSign | Plus => BigInt::from_biguint(Minus, &self.data + 1u8),
            Minus => BigInt::from_biguint(Plus, &self.data - 1u8),
        }
    }
}

impl Integer for BigInt {
    /// Truncated division: the quotient rounds toward zero and the remainder
    /// takes the sign of `self`.
    #[inline]
    fn div_rem(&self, other: &BigInt) -> (BigInt, BigInt) {
        let (d_ui, r_ui) = self.data.div_rem(&other.data);
        let d = BigInt::from_biguint(self.sign * other.sign, d_ui);
        let r = BigInt::from_biguint(self.sign, r_ui);
        (d, r)
    }

    #[inline]
    fn div_floor(&self, other: &BigInt) -> BigInt {
        let (d, m) = self.div_rem(other);
        if !m.is_zero() && m.sign != other.sign {
            d - 1u8
        } else {
            d
        }
    }

    #[inline]
    fn mod_floor(&self, other: &BigInt) -> BigInt {
        let m = self % other;
        if !m.is_zero() && m.sign != other.sign {
            m + other
        } else {
            m
        }
    }

    /// Calculates the Greatest Common Divisor (GCD) of the number and `other`.
    ///
    /// The result is always positive.
    #[inline]
    fn gcd(&self, other: &BigInt) -> BigInt {
        BigInt::from(self.data.gcd(&other.data))
    }

    /// Calculates the Lowest Common Multiple (LCM) of the number and `other`.
    #[inline]
    fn lcm(&self, other: &BigInt) -> BigInt {
        BigInt::from(self.data.lcm(&other.data))
    }

    /// Deprecated, use `is_multiple_of` instead.
    #[inline]
    fn divides(&self, other: &BigInt) -> bool {
        self.is_multiple_of(other)
    }

    /// Returns `true` if the number is a multiple of `other`.
    #[inline]
    fn is_multiple_of(&self, other: &BigInt) -> bool {
        self.data.is_multiple_of(&other.data)
    }

    /// Returns `true` if the number is divisible by `2`.
    #[inline]
    fn is_even(&self) -> bool {
        self.data.is_even()
    }

    /// Returns `true` if the number is not divisible by `2`.
    #[inline]
    fn is_odd(&self) -> bool {
        self.data.is_odd()
    }
}

impl Roots for BigInt {
    /// Roots of negative values exist only for odd degrees.
    fn nth_root(&self, n: u32) -> Self {
        assert!(
            !(self.is_negative() && n.is_even()),
            "root of degree {} is imaginary",
            n
        );

        BigInt::from_biguint(self.sign, self.data.nth_root(n))
    }

    fn sqrt(&self) -> Self {
        assert!(!self.is_negative(), "square root is imaginary");

        BigInt::from_biguint(self.sign, self.data.sqrt())
    }

    fn cbrt(&self) -> Self {
        BigInt::from_biguint(self.sign, self.data.cbrt())
    }
}

impl CheckedAdd for BigInt {
    #[inline]
    fn checked_add(&self, v: &BigInt) -> Option<BigInt> {
        Some(self + v)
    }
}

impl CheckedSub for BigInt {
    #[inline]
    fn checked_sub(&self, v: &BigInt) -> Option<BigInt> {
        Some(self - v)
    }
}

impl CheckedMul for BigInt {
    #[inline]
    fn checked_mul(&self, v: &BigInt) -> Option<BigInt> {
        Some(self * v)
    }
}

impl CheckedDiv for BigInt {
    #[inline]
    fn checked_div(&self, v: &BigInt) -> Option<BigInt> {
        if v.is_zero() {
            return None;
        }
        Some(self / v)
    }
}

promote_scalar_binops!(
    BigInt; u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize
);

impl_sum_iter_type!(BigInt);
impl_product_iter_type!(BigInt);

#[cfg(feature = "zeroize")]
impl zeroize::Zeroize for BigInt {
    fn zeroize(&mut self) {
        zeroize::Zeroize::zeroize(&mut self.data);
        self.sign = NoSign;
    }
}

impl BigInt {
    /// Creates and initializes a `BigInt` from base 2<sup>32</sup> digits,
    /// least significant first.
    #[inline]
    pub fn new(sign: Sign, digits: Vec<u32>) -> BigInt {
        BigInt::from_biguint(sign, BigUint::new(digits))
    }

    /// Creates and initializes a `BigInt`.
    ///
    /// A zero magnitude always yields zero, and a non-zero magnitude paired
    /// with `NoSign` is dropped to zero as well.
    #[inline]
    pub fn from_biguint(mut sign: Sign, mut data: BigUint) -> BigInt {
        if sign == NoSign {
            data.set_zero();
        } else if data.is_zero() {
            sign = NoSign;
        }

        BigInt { sign, data }
    }

    /// Creates and initializes a `BigInt` from base 2<sup>32</sup> digits,
    /// least significant first.
    #[inline]
    pub fn from_slice(sign: Sign, slice: &[u32]) -> BigInt {
        BigInt::from_biguint(sign, BigUint::from_slice(slice))
    }

    /// Returns the sign of the `BigInt` as a [`Sign`].
    #[inline]
    pub fn sign(&self) -> Sign {
        self.sign
    }

    /// Returns the magnitude of the `BigInt` as a [`BigUint`].
    #[inline]
    pub fn magnitude(&self) -> &BigUint {
        &self.data
    }

    /// Splits the `BigInt` into its sign and magnitude.
    #[inline]
    pub fn into_parts(self) -> (Sign, BigUint) {
        (self.sign, self.data)
    }

    /// Determines the fewest bits necessary to express the magnitude.
    #[inline]
    pub fn bits(&self) -> u64 {
        self.data.bits()
    }

    /// Returns the number of least-significant bits that are zero,
    /// or `None` if the entire number is zero.
    #[inline]
    pub fn trailing_zeros(&self) -> Option<u64> {
        self.data.trailing_zeros()
    }

    /// Reads a bit of the two's complement form, with negative values
    /// extended by infinitely many one bits.
    pub fn bit(&self, bit: u64) -> bool {
        if self.sign != Minus {
            return self.data.bit(bit);
        }

        let bits_per_digit = u64::from(crate::big_digit::BITS);
        let Ok(index) = usize::try_from(bit / bits_per_digit) else {
            return true;
        };
        let words = self.data.words();
        let first_nonzero = words.iter().position(|&w| w != 0).unwrap_or(0);
        let mask: crate::BigDigit = 1 << (bit % bits_per_digit);
        twos_complement_word(words, index, first_nonzero) & mask != 0
    }

    /// Sets or clears a bit of the two's complement form.
    pub fn set_bit(&mut self, bit: u64, value: bool) {
        if self.sign != Minus {
            self.data.set_bit(bit, value);
            if self.data.is_zero() {
                self.sign = NoSign;
            } else {
                self.sign = Plus;
            }
            return;
        }

        if self.bit(bit) != value {
            let mask = BigInt::from(BigUint::one() << bit);
            *self = &*self ^ &mask;
        }
    }

    /// Converts to a [`BigUint`], or `None` for negative values.
    #[inline]
    pub fn to_biguint(&self) -> Option<BigUint> {
        match self.sign {
            Plus => Some(self.data.clone()),
            NoSign => Some(BigUint::zero()),
            Minus => None,
        }
    }

    /// Returns `-self` when negative.
    #[inline]
    pub fn abs(&self) -> BigInt {
        Signed::abs(self)
    }

    /// Returns `1`, `0` or `-1` following the sign.
    #[inline]
    pub fn signum(&self) -> BigInt {
        Signed::signum(self)
    }

    /// Moves the value out, leaving zero behind.
    #[inline]
    pub(crate) fn take(&mut self) -> BigInt {
        mem::take(self)
    }
}
