use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;
use core::str::{self, FromStr};

use num_integer::Integer;
use num_traits::float::FloatCore;
use num_traits::{FromPrimitive, Num, ToPrimitive, Zero};

use super::{BigUint, biguint_from_vec, div_rem_digit, mac_with_carry};
use crate::big_digit::{self, BigDigit};
use crate::{BigInt, ParseBigIntError, Sign, TryFromBigIntError};

/// Returns `(base, power)` where `base = radix^power` is the largest power
/// of `radix` fitting in a digit. Power-of-two radices pack bits directly
/// and report a `base` of zero together with the digits per word.
pub(crate) fn radix_base(radix: u32) -> (BigDigit, usize) {
    assert!(
        (2..=36).contains(&radix),
        "The radix must be within 2...36"
    );

    if radix.is_power_of_two() {
        let bits = radix.trailing_zeros();
        return (0, (big_digit::BITS / bits) as usize);
    }

    let radix = BigDigit::from(radix);
    let mut base = radix;
    let mut power = 1;
    while let Some(next) = base.checked_mul(radix) {
        base = next;
        power += 1;
    }
    (base, power)
}

/// Packs little-endian digits of `bits` bits each into words. Digits may
/// straddle a word boundary.
fn from_bitwise_digits_le(digits: &[u8], bits: u32) -> BigUint {
    let total_bits = digits.len() as u64 * u64::from(bits);
    let words = Integer::div_ceil(&total_bits, &u64::from(big_digit::BITS));
    let mut data = Vec::with_capacity(usize::try_from(words).unwrap_or(0));

    let mut acc: BigDigit = 0;
    let mut acc_bits = 0u32;
    for &digit in digits {
        acc |= BigDigit::from(digit) << acc_bits;
        acc_bits += bits;
        if acc_bits >= big_digit::BITS {
            data.push(acc);
            acc_bits -= big_digit::BITS;
            acc = BigDigit::from(digit) >> (bits - acc_bits);
        }
    }
    if acc_bits > 0 {
        data.push(acc);
    }

    biguint_from_vec(data)
}

/// Folds big-endian digits chunk by chunk: `acc = acc * base + chunk`.
fn from_radix_digits_be(digits: &[u8], radix: u32) -> BigUint {
    let (base, power) = radix_base(radix);
    let radix = BigDigit::from(radix);

    let mut data: Vec<BigDigit> = Vec::new();

    // The head chunk is the partial one, so the full chunks stay aligned to
    // the least significant end.
    let head_len = match digits.len() % power {
        0 => power.min(digits.len()),
        r => r,
    };
    let (head, tail) = digits.split_at(head_len);

    let first = head
        .iter()
        .fold(0, |acc, &d| acc * radix + BigDigit::from(d));
    data.push(first);

    for chunk in tail.chunks(power) {
        let mut carry = chunk
            .iter()
            .fold(0, |acc, &d| acc * radix + BigDigit::from(d));
        for d in data.iter_mut() {
            *d = mac_with_carry(0, *d, base, &mut carry);
        }
        if carry != 0 {
            data.push(carry);
        }
    }

    biguint_from_vec(data)
}

/// Splits the magnitude into little-endian digits of a power-of-two radix.
fn to_bitwise_digits_le(u: &BigUint, bits: u32) -> Vec<u8> {
    let total = u.bits();
    let digit_bits = u64::from(big_digit::BITS);
    let mask: BigDigit = (1 << bits) - 1;

    let mut res = Vec::with_capacity(usize::try_from(total / u64::from(bits) + 1).unwrap_or(0));
    let mut pos = 0u64;
    while pos < total {
        let index = (pos / digit_bits) as usize;
        let offset = (pos % digit_bits) as u32;
        let mut word = u.data[index] >> offset;
        if offset + bits > big_digit::BITS {
            word |= u.get_word(index + 1) << (big_digit::BITS - offset);
        }
        res.push((word & mask) as u8);
        pos += u64::from(bits);
    }
    res
}

/// Splits the magnitude into little-endian digits by repeated division by
/// the largest power of `radix` fitting a word. Every chunk but the most
/// significant is zero padded to its full width.
fn to_radix_digits_le(u: &BigUint, radix: u32) -> Vec<u8> {
    let (base, power) = radix_base(radix);
    let radix = BigDigit::from(radix);

    let mut res = Vec::with_capacity(u.data.len() * power);
    let mut digits = u.clone();

    while digits.data.len() > 1 {
        let (q, mut r) = div_rem_digit(digits, base);
        for _ in 0..power {
            res.push((r % radix) as u8);
            r /= radix;
        }
        digits = q;
    }

    let mut r = digits.get_word(0);
    while r != 0 {
        res.push((r % radix) as u8);
        r /= radix;
    }

    res
}

/// The digits of `u` in `radix`, least significant first. Zero is `[0]`.
pub(crate) fn to_radix_le(u: &BigUint, radix: u32) -> Vec<u8> {
    if u.is_zero() {
        return alloc::vec![0];
    }

    let (base, _) = radix_base(radix);
    if base == 0 {
        to_bitwise_digits_le(u, radix.trailing_zeros())
    } else {
        to_radix_digits_le(u, radix)
    }
}

/// Renders the digits of `u` in `radix`, most significant first.
pub(crate) fn to_str_radix_reversed(u: &BigUint, radix: u32, upper: bool) -> Vec<u8> {
    let mut res = to_radix_le(u, radix);
    let alpha = if upper { b'A' } else { b'a' };
    for r in &mut res {
        *r = if *r < 10 { b'0' + *r } else { alpha + *r - 10 };
    }
    res.reverse();
    res
}

/// Parses digits and `_` separators, without any sign, into values below
/// `radix`, most significant first.
pub(crate) fn parse_digits(s: &[u8], radix: u32) -> Result<Vec<u8>, ParseBigIntError> {
    assert!(
        (2..=36).contains(&radix),
        "The radix must be within 2...36"
    );

    if s.is_empty() {
        return Err(ParseBigIntError::empty());
    }

    // Separators only sit between two digits.
    if s[0] == b'_' || s[s.len() - 1] == b'_' || s.windows(2).any(|w| w == b"__") {
        return Err(ParseBigIntError::separator());
    }

    let mut digits = Vec::with_capacity(s.len());
    for &b in s {
        if b == b'_' {
            continue;
        }
        let d = match b {
            b'0'..=b'9' => b - b'0',
            b'a'..=b'z' => b - b'a' + 10,
            b'A'..=b'Z' => b - b'A' + 10,
            _ => u8::MAX,
        };
        if u32::from(d) >= radix {
            return Err(ParseBigIntError::invalid());
        }
        digits.push(d);
    }

    Ok(digits)
}

/// Builds a magnitude from digits below `radix`, most significant first.
pub(crate) fn from_radix_be(digits: &[u8], radix: u32) -> BigUint {
    let (base, _) = radix_base(radix);
    if base == 0 {
        let digits_le: Vec<u8> = digits.iter().rev().copied().collect();
        from_bitwise_digits_le(&digits_le, radix.trailing_zeros())
    } else {
        from_radix_digits_be(digits, radix)
    }
}

impl Num for BigUint {
    type FromStrRadixErr = ParseBigIntError;

    /// Creates and initializes a `BigUint`. A leading `+` is accepted and
    /// `_` may separate digits.
    fn from_str_radix(s: &str, radix: u32) -> Result<BigUint, ParseBigIntError> {
        let s = s.as_bytes();
        let s = match s.split_first() {
            Some((b'+', rest)) if rest.is_empty() => return Err(ParseBigIntError::invalid()),
            Some((b'+', rest)) => rest,
            _ => s,
        };
        let digits = parse_digits(s, radix)?;
        Ok(from_radix_be(&digits, radix))
    }
}

impl FromStr for BigUint {
    type Err = ParseBigIntError;

    #[inline]
    fn from_str(s: &str) -> Result<BigUint, ParseBigIntError> {
        BigUint::from_str_radix(s, 10)
    }
}

impl BigUint {
    /// Creates and initializes a `BigUint` from ASCII bytes in the given
    /// radix, returning `None` when the bytes do not parse.
    ///
    /// # Examples
    ///
    /// ```
    /// use bigarith::{BigUint, ToBigUint};
    ///
    /// assert_eq!(BigUint::parse_bytes(b"1234", 10), ToBigUint::to_biguint(&1234));
    /// assert_eq!(BigUint::parse_bytes(b"ABCD", 16), ToBigUint::to_biguint(&0xABCD));
    /// assert_eq!(BigUint::parse_bytes(b"G", 16), None);
    /// ```
    pub fn parse_bytes(buf: &[u8], radix: u32) -> Option<BigUint> {
        let s = str::from_utf8(buf).ok()?;
        BigUint::from_str_radix(s, radix).ok()
    }

    /// Creates and initializes a `BigUint` from big-endian bytes.
    ///
    /// The bytes are in big-endian byte order; an empty slice is zero.
    pub fn from_bytes_be(bytes: &[u8]) -> BigUint {
        if bytes.is_empty() {
            return BigUint::zero();
        }
        let mut v = bytes.to_vec();
        v.reverse();
        BigUint::from_bytes_le(&v)
    }

    /// Creates and initializes a `BigUint` from little-endian bytes.
    pub fn from_bytes_le(bytes: &[u8]) -> BigUint {
        from_bitwise_digits_le(bytes, 8)
    }

    /// Returns the byte representation of the `BigUint` in big-endian byte
    /// order. Zero is `[0]`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bigarith::BigUint;
    ///
    /// let i = BigUint::parse_bytes(b"1125", 10).unwrap();
    /// assert_eq!(i.to_bytes_be(), vec![4, 101]);
    /// ```
    pub fn to_bytes_be(&self) -> Vec<u8> {
        let mut v = self.to_bytes_le();
        v.reverse();
        v
    }

    /// Returns the byte representation of the `BigUint` in little-endian
    /// byte order. Zero is `[0]`.
    pub fn to_bytes_le(&self) -> Vec<u8> {
        if self.is_zero() {
            return alloc::vec![0];
        }
        to_bitwise_digits_le(self, 8)
    }

    /// Returns the integer formatted as a string in the given radix, with
    /// lowercase letters for digits above 9.
    ///
    /// # Panics
    ///
    /// Panics if `radix` is not in `2..=36`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bigarith::BigUint;
    ///
    /// let i = BigUint::parse_bytes(b"ff", 16).unwrap();
    /// assert_eq!(i.to_str_radix(16), "ff");
    /// ```
    pub fn to_str_radix(&self, radix: u32) -> String {
        let v = to_str_radix_reversed(self, radix, false);
        // digits are ASCII by construction
        String::from_utf8(v).unwrap_or_default()
    }

    /// Like [`to_str_radix`](BigUint::to_str_radix), with uppercase letters.
    pub fn to_str_radix_upper(&self, radix: u32) -> String {
        let v = to_str_radix_reversed(self, radix, true);
        String::from_utf8(v).unwrap_or_default()
    }

    /// Converts an `f64` holding an integral value, returning `None` for
    /// negative, fractional or non-finite input.
    pub fn from_f64_exact(n: f64) -> Option<BigUint> {
        if !n.is_finite() || FloatCore::fract(n) != 0.0 {
            return None;
        }
        BigUint::from_f64(n)
    }
}

impl fmt::Display for BigUint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(true, "", &self.to_str_radix(10))
    }
}

impl fmt::LowerHex for BigUint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(true, "0x", &self.to_str_radix(16))
    }
}

impl fmt::UpperHex for BigUint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(true, "0x", &self.to_str_radix_upper(16))
    }
}

impl fmt::Binary for BigUint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(true, "0b", &self.to_str_radix(2))
    }
}

impl fmt::Octal for BigUint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(true, "0o", &self.to_str_radix(8))
    }
}

/// The top 64 bits of `u` and the power of two they are scaled by. Any
/// shifted-out one bits are folded into the lowest mantissa bit so that
/// rounding to nearest stays correct.
fn top_bits_and_exponent(u: &BigUint) -> (u64, u64) {
    let exp = u.bits().saturating_sub(64);
    let mut mantissa = (u >> exp).to_u64().unwrap_or(u64::MAX);
    if exp > 0 && u.trailing_zeros().is_some_and(|tz| tz < exp) {
        mantissa |= 1;
    }
    (mantissa, exp)
}

impl ToPrimitive for BigUint {
    #[inline]
    fn to_i64(&self) -> Option<i64> {
        self.to_u64().and_then(|n| i64::try_from(n).ok())
    }

    #[inline]
    fn to_i128(&self) -> Option<i128> {
        self.to_u128().and_then(|n| i128::try_from(n).ok())
    }

    #[inline]
    fn to_u64(&self) -> Option<u64> {
        self.to_u128().and_then(|n| u64::try_from(n).ok())
    }

    #[inline]
    fn to_u128(&self) -> Option<u128> {
        if self.bits() > 128 {
            return None;
        }
        Some(
            self.data
                .iter()
                .rev()
                .fold(0u128, |acc, &d| (acc << big_digit::BITS) | u128::from(d)),
        )
    }

    fn to_f32(&self) -> Option<f32> {
        if self.bits() > 128 {
            return Some(f32::INFINITY);
        }
        let (mantissa, exp) = top_bits_and_exponent(self);
        // exp <= 64 here, well inside the f32 exponent range
        let scale = f32::from_bits(((exp as u32) + 127) << 23);
        Some(mantissa as f32 * scale)
    }

    fn to_f64(&self) -> Option<f64> {
        if self.bits() > 1024 {
            return Some(f64::INFINITY);
        }
        let (mantissa, exp) = top_bits_and_exponent(self);
        let scale = f64::from_bits((exp + 1023) << 52);
        Some(mantissa as f64 * scale)
    }
}

impl FromPrimitive for BigUint {
    #[inline]
    fn from_i64(n: i64) -> Option<BigUint> {
        u64::try_from(n).ok().map(BigUint::from)
    }

    #[inline]
    fn from_i128(n: i128) -> Option<BigUint> {
        u128::try_from(n).ok().map(BigUint::from)
    }

    #[inline]
    fn from_u64(n: u64) -> Option<BigUint> {
        Some(BigUint::from(n))
    }

    #[inline]
    fn from_u128(n: u128) -> Option<BigUint> {
        Some(BigUint::from(n))
    }

    /// Truncates toward zero; negative values (below `-0.0` after
    /// truncation) and non-finite values are `None`.
    #[inline]
    fn from_f64(n: f64) -> Option<BigUint> {
        if !n.is_finite() {
            return None;
        }

        let n = FloatCore::trunc(n);
        if n.is_sign_negative() && n != 0.0 {
            return None;
        }
        if n == 0.0 {
            return Some(BigUint::zero());
        }

        let (mantissa, exponent, _sign) = FloatCore::integer_decode(n);
        let mantissa = BigUint::from(mantissa);
        let ret = if exponent >= 0 {
            mantissa << exponent
        } else {
            mantissa >> -exponent
        };
        Some(ret)
    }
}

impl From<u128> for BigUint {
    #[inline]
    fn from(mut n: u128) -> Self {
        let mut ret = BigUint::zero();
        while n != 0 {
            ret.data.push(n as BigDigit);
            n = n.checked_shr(big_digit::BITS).unwrap_or(0);
        }
        ret
    }
}

macro_rules! impl_biguint_from_uint {
    ($($t:ty),*) => {$(
        impl From<$t> for BigUint {
            #[inline]
            fn from(n: $t) -> Self {
                BigUint::from(n as u128)
            }
        }
    )*};
}

impl_biguint_from_uint!(u8, u16, u32, u64, usize);

macro_rules! impl_try_from_biguint {
    ($($t:ty => $to:ident),* $(,)?) => {$(
        impl TryFrom<&BigUint> for $t {
            type Error = TryFromBigIntError<()>;

            #[inline]
            fn try_from(value: &BigUint) -> Result<$t, TryFromBigIntError<()>> {
                value.$to().ok_or(TryFromBigIntError::new(()))
            }
        }

        impl TryFrom<BigUint> for $t {
            type Error = TryFromBigIntError<BigUint>;

            #[inline]
            fn try_from(value: BigUint) -> Result<$t, TryFromBigIntError<BigUint>> {
                <$t>::try_from(&value).map_err(|_| TryFromBigIntError::new(value))
            }
        }
    )*};
}

impl_try_from_biguint!(
    u8 => to_u8,
    u16 => to_u16,
    u32 => to_u32,
    u64 => to_u64,
    u128 => to_u128,
    usize => to_usize,
    i8 => to_i8,
    i16 => to_i16,
    i32 => to_i32,
    i64 => to_i64,
    i128 => to_i128,
    isize => to_isize,
);

impl TryFrom<&BigInt> for BigUint {
    type Error = TryFromBigIntError<()>;

    #[inline]
    fn try_from(value: &BigInt) -> Result<BigUint, TryFromBigIntError<()>> {
        value.to_biguint().ok_or(TryFromBigIntError::new(()))
    }
}

impl TryFrom<BigInt> for BigUint {
    type Error = TryFromBigIntError<BigInt>;

    #[inline]
    fn try_from(value: BigInt) -> Result<BigUint, TryFromBigIntError<BigInt>> {
        if value.sign() == Sign::Minus {
            Err(TryFromBigIntError::new(value))
        } else {
            Ok(value.into_parts().1)
        }
    }
}

/// A generic trait for converting a value to a [`BigUint`].
pub trait ToBigUint {
    /// Converts the value of `self` to a [`BigUint`].
    fn to_biguint(&self) -> Option<BigUint>;
}

impl ToBigUint for BigUint {
    #[inline]
    fn to_biguint(&self) -> Option<BigUint> {
        Some(self.clone())
    }
}

impl ToBigUint for BigInt {
    #[inline]
    fn to_biguint(&self) -> Option<BigUint> {
        match self.sign() {
            Sign::Minus => None,
            _ => Some(self.magnitude().clone()),
        }
    }
}

macro_rules! impl_to_biguint {
    ($t:ty, $from_ty:path) => {
        impl ToBigUint for $t {
            #[inline]
            fn to_biguint(&self) -> Option<BigUint> {
                $from_ty(*self)
            }
        }
    };
}

impl_to_biguint!(isize, FromPrimitive::from_isize);
impl_to_biguint!(i8, FromPrimitive::from_i8);
impl_to_biguint!(i16, FromPrimitive::from_i16);
impl_to_biguint!(i32, FromPrimitive::from_i32);
impl_to_biguint!(i64, FromPrimitive::from_i64);
impl_to_biguint!(i128, FromPrimitive::from_i128);

impl_to_biguint!(usize, FromPrimitive::from_usize);
impl_to_biguint!(u8, FromPrimitive::from_u8);
impl_to_biguint!(u16, FromPrimitive::from_u16);
impl_to_biguint!(u32, FromPrimitive::from_u32);
impl_to_biguint!(u64, FromPrimitive::from_u64);
impl_to_biguint!(u128, FromPrimitive::from_u128);

impl_to_biguint!(f32, FromPrimitive::from_f32);
impl_to_biguint!(f64, FromPrimitive::from_f64);
