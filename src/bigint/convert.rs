use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;
use core::str::{self, FromStr};

use num_traits::{FromPrimitive, Num, ToPrimitive, Zero};

use super::BigInt;
use super::Sign::{self, Minus, NoSign, Plus};
use crate::biguint::convert::{from_radix_be, parse_digits, to_str_radix_reversed};
use crate::{BigUint, ParseBigIntError, TryFromBigIntError};

impl Num for BigInt {
    type FromStrRadixErr = ParseBigIntError;

    /// Creates and initializes a `BigInt`. One leading `+` or `-` is
    /// accepted and `_` may separate digits.
    fn from_str_radix(s: &str, radix: u32) -> Result<BigInt, ParseBigIntError> {
        let s = s.as_bytes();
        let (sign, digits) = match s.split_first() {
            Some((b'-', rest)) => (Minus, rest),
            Some((b'+', rest)) => (Plus, rest),
            _ => (Plus, s),
        };
        if digits.is_empty() && digits.len() != s.len() {
            // a lone sign
            return Err(ParseBigIntError::invalid());
        }
        let digits = parse_digits(digits, radix)?;
        Ok(BigInt::from_biguint(sign, from_radix_be(&digits, radix)))
    }
}

impl FromStr for BigInt {
    type Err = ParseBigIntError;

    #[inline]
    fn from_str(s: &str) -> Result<BigInt, ParseBigIntError> {
        BigInt::from_str_radix(s, 10)
    }
}

impl BigInt {
    /// Creates and initializes a `BigInt` from ASCII bytes in the given
    /// radix, returning `None` when the bytes do not parse.
    ///
    /// # Examples
    ///
    /// ```
    /// use bigarith::{BigInt, ToBigInt};
    ///
    /// assert_eq!(BigInt::parse_bytes(b"1234", 10), ToBigInt::to_bigint(&1234));
    /// assert_eq!(BigInt::parse_bytes(b"-ABCD", 16), ToBigInt::to_bigint(&-0xABCD));
    /// assert_eq!(BigInt::parse_bytes(b"G", 16), None);
    /// ```
    pub fn parse_bytes(buf: &[u8], radix: u32) -> Option<BigInt> {
        let s = str::from_utf8(buf).ok()?;
        BigInt::from_str_radix(s, radix).ok()
    }

    /// Creates and initializes a `BigInt` from a sign and big-endian
    /// magnitude bytes.
    #[inline]
    pub fn from_bytes_be(sign: Sign, bytes: &[u8]) -> BigInt {
        BigInt::from_biguint(sign, BigUint::from_bytes_be(bytes))
    }

    /// Creates and initializes a `BigInt` from a sign and little-endian
    /// magnitude bytes.
    #[inline]
    pub fn from_bytes_le(sign: Sign, bytes: &[u8]) -> BigInt {
        BigInt::from_biguint(sign, BigUint::from_bytes_le(bytes))
    }

    /// Returns the sign and the big-endian magnitude bytes.
    #[inline]
    pub fn to_bytes_be(&self) -> (Sign, Vec<u8>) {
        (self.sign, self.data.to_bytes_be())
    }

    /// Returns the sign and the little-endian magnitude bytes.
    #[inline]
    pub fn to_bytes_le(&self) -> (Sign, Vec<u8>) {
        (self.sign, self.data.to_bytes_le())
    }

    /// Encodes as one sign byte, `1` for negative values and `0` otherwise,
    /// followed by the big-endian magnitude. Zero encodes as `[0]`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bigarith::BigInt;
    ///
    /// assert_eq!(BigInt::from(-258i32).to_sign_magnitude_bytes(), vec![1, 1, 2]);
    /// assert_eq!(BigInt::from(0u8).to_sign_magnitude_bytes(), vec![0]);
    /// ```
    pub fn to_sign_magnitude_bytes(&self) -> Vec<u8> {
        if self.is_zero() {
            return alloc::vec![0];
        }
        let mut bytes = Vec::with_capacity(self.data.bits().div_ceil(8) as usize + 1);
        bytes.push(u8::from(self.sign == Minus));
        bytes.extend_from_slice(&self.data.to_bytes_be());
        bytes
    }

    /// Decodes the format written by
    /// [`to_sign_magnitude_bytes`](BigInt::to_sign_magnitude_bytes). Any
    /// non-zero sign byte marks a negative value; a magnitude of zero always
    /// decodes to zero.
    ///
    /// # Panics
    ///
    /// Panics on empty input.
    pub fn from_sign_magnitude_bytes(bytes: &[u8]) -> BigInt {
        let Some((&sign, magnitude)) = bytes.split_first() else {
            panic!("sign-magnitude data must hold at least the sign byte");
        };
        let sign = if sign == 0 { Plus } else { Minus };
        BigInt::from_biguint(sign, BigUint::from_bytes_be(magnitude))
    }

    /// Returns the integer formatted as a string in the given radix, with a
    /// leading `-` for negative values.
    ///
    /// # Panics
    ///
    /// Panics if `radix` is not in `2..=36`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bigarith::BigInt;
    ///
    /// let i = BigInt::parse_bytes(b"-ff", 16).unwrap();
    /// assert_eq!(i.to_str_radix(16), "-ff");
    /// ```
    pub fn to_str_radix(&self, radix: u32) -> String {
        self.render_radix(radix, false)
    }

    /// Like [`to_str_radix`](BigInt::to_str_radix), with uppercase letters.
    pub fn to_str_radix_upper(&self, radix: u32) -> String {
        self.render_radix(radix, true)
    }

    fn render_radix(&self, radix: u32, upper: bool) -> String {
        let mut v = to_str_radix_reversed(&self.data, radix, upper);
        if self.sign == Minus {
            v.insert(0, b'-');
        }
        String::from_utf8(v).unwrap_or_default()
    }
}

macro_rules! impl_fmt {
    ($($Trait:ident, $prefix:expr, $radix:expr, $upper:expr;)*) => {$(
        impl fmt::$Trait for BigInt {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                let digits = to_str_radix_reversed(&self.data, $radix, $upper);
                let digits = str::from_utf8(&digits).map_err(|_| fmt::Error)?;
                f.pad_integral(self.sign != Minus, $prefix, digits)
            }
        }
    )*};
}

impl_fmt! {
    Display, "", 10, false;
    LowerHex, "0x", 16, false;
    UpperHex, "0x", 16, true;
    Binary, "0b", 2, false;
    Octal, "0o", 8, false;
}

impl ToPrimitive for BigInt {
    #[inline]
    fn to_i64(&self) -> Option<i64> {
        self.to_i128().and_then(|n| i64::try_from(n).ok())
    }

    fn to_i128(&self) -> Option<i128> {
        match self.sign {
            NoSign => Some(0),
            Plus => self.data.to_i128(),
            Minus => {
                let n = self.data.to_u128()?;
                if n <= i128::MIN.unsigned_abs() {
                    Some((n as i128).wrapping_neg())
                } else {
                    None
                }
            }
        }
    }

    #[inline]
    fn to_u64(&self) -> Option<u64> {
        self.to_u128().and_then(|n| u64::try_from(n).ok())
    }

    #[inline]
    fn to_u128(&self) -> Option<u128> {
        match self.sign {
            Plus | NoSign => self.data.to_u128(),
            Minus => None,
        }
    }

    #[inline]
    fn to_f32(&self) -> Option<f32> {
        let n = self.data.to_f32()?;
        Some(if self.sign == Minus { -n } else { n })
    }

    #[inline]
    fn to_f64(&self) -> Option<f64> {
        let n = self.data.to_f64()?;
        Some(if self.sign == Minus { -n } else { n })
    }
}

impl FromPrimitive for BigInt {
    #[inline]
    fn from_i64(n: i64) -> Option<BigInt> {
        Some(BigInt::from(n))
    }

    #[inline]
    fn from_i128(n: i128) -> Option<BigInt> {
        Some(BigInt::from(n))
    }

    #[inline]
    fn from_u64(n: u64) -> Option<BigInt> {
        Some(BigInt::from(n))
    }

    #[inline]
    fn from_u128(n: u128) -> Option<BigInt> {
        Some(BigInt::from(n))
    }

    /// Truncates toward zero; non-finite values are `None`.
    #[inline]
    fn from_f64(n: f64) -> Option<BigInt> {
        if n >= 0.0 {
            BigUint::from_f64(n).map(BigInt::from)
        } else {
            let x = BigUint::from_f64(-n)?;
            Some(BigInt::from_biguint(Minus, x))
        }
    }
}

impl From<i128> for BigInt {
    #[inline]
    fn from(n: i128) -> Self {
        if n < 0 {
            BigInt::from_biguint(Minus, BigUint::from(n.unsigned_abs()))
        } else {
            BigInt::from(n as u128)
        }
    }
}

macro_rules! impl_bigint_from_int {
    ($($t:ty),*) => {$(
        impl From<$t> for BigInt {
            #[inline]
            fn from(n: $t) -> Self {
                BigInt::from(n as i128)
            }
        }
    )*};
}

impl_bigint_from_int!(i8, i16, i32, i64, isize);

macro_rules! impl_bigint_from_uint {
    ($($t:ty),*) => {$(
        impl From<$t> for BigInt {
            #[inline]
            fn from(n: $t) -> Self {
                BigInt::from(BigUint::from(n))
            }
        }
    )*};
}

impl_bigint_from_uint!(u8, u16, u32, u64, u128, usize);

impl From<BigUint> for BigInt {
    #[inline]
    fn from(n: BigUint) -> Self {
        if n.is_zero() {
            BigInt::zero()
        } else {
            BigInt {
                sign: Plus,
                data: n,
            }
        }
    }
}

macro_rules! impl_try_from_bigint {
    ($($t:ty => $to:ident),* $(,)?) => {$(
        impl TryFrom<&BigInt> for $t {
            type Error = TryFromBigIntError<()>;

            #[inline]
            fn try_from(value: &BigInt) -> Result<$t, TryFromBigIntError<()>> {
                value.$to().ok_or(TryFromBigIntError::new(()))
            }
        }

        impl TryFrom<BigInt> for $t {
            type Error = TryFromBigIntError<BigInt>;

            #[inline]
            fn try_from(value: BigInt) -> Result<$t, TryFromBigIntError<BigInt>> {
                <$t>::try_from(&value).map_err(|_| TryFromBigIntError::new(value))
            }
        }
    )*};
}

impl_try_from_bigint!(
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

/// A generic trait for converting a value to a [`BigInt`]. This may return
/// `None` when converting from `f32` or `f64`.
pub trait ToBigInt {
    /// Converts the value of `self` to a [`BigInt`].
    fn to_bigint(&self) -> Option<BigInt>;
}

impl ToBigInt for BigInt {
    #[inline]
    fn to_bigint(&self) -> Option<BigInt> {
        Some(self.clone())
    }
}

impl ToBigInt for BigUint {
    #[inline]
    fn to_bigint(&self) -> Option<BigInt> {
        Some(BigInt::from(self.clone()))
    }
}

macro_rules! impl_to_bigint {
    ($($t:ty => $from_ty:path),* $(,)?) => {$(
        impl ToBigInt for $t {
            #[inline]
            fn to_bigint(&self) -> Option<BigInt> {
                $from_ty(*self)
            }
        }
    )*};
}

impl_to_bigint!(
    isize => FromPrimitive::from_isize,
    i8 => FromPrimitive::from_i8,
    i16 => FromPrimitive::from_i16,
    i32 => FromPrimitive::from_i32,
    i64 => FromPrimitive::from_i64,
    i128 => FromPrimitive::from_i128,
    usize => FromPrimitive::from_usize,
    u8 => FromPrimitive::from_u8,
    u16 => FromPrimitive::from_u16,
    u32 => FromPrimitive::from_u32,
    u64 => FromPrimitive::from_u64,
    u128 => FromPrimitive::from_u128,
    f32 => FromPrimitive::from_f32,
    f64 => FromPrimitive::from_f64,
);

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::format;
    use alloc::string::ToString;

    #[test]
    fn test_parse_signs() {
        assert_eq!("-42".parse::<BigInt>().ok(), Some(BigInt::from(-42i8)));
        assert_eq!("+42".parse::<BigInt>().ok(), Some(BigInt::from(42i8)));
        assert_eq!("-0".parse::<BigInt>().ok(), Some(BigInt::zero()));
        assert_eq!(
            BigInt::from_str_radix("-1_0000_0000", 16).ok(),
            Some(BigInt::from(-(1i64 << 32)))
        );
    }

    #[test]
    fn test_parse_failures() {
        assert!(BigInt::from_str("").is_err_and(|e| e.is_empty()));
        for bad in ["+", "-", "--1", "-+1", "+-1", "-_1", "1_", "1__0", "12a", " 1"] {
            let err = BigInt::from_str(bad);
            assert!(err.is_err(), "{bad:?} parsed");
            assert!(!err.is_err_and(|e| e.is_empty()), "{bad:?} reported empty");
        }
    }

    #[test]
    fn test_formatting() {
        let n = BigInt::from(-255i32);
        assert_eq!(n.to_string(), "-255");
        assert_eq!(format!("{n:x}"), "-ff");
        assert_eq!(format!("{n:#X}"), "-0xFF");
        assert_eq!(format!("{n:b}"), "-11111111");
        assert_eq!(format!("{n:o}"), "-377");
        assert_eq!(format!("{:>6}", BigInt::from(42u8)), "    42");
        assert_eq!(format!("{:+}", BigInt::from(42u8)), "+42");
        assert_eq!(BigInt::zero().to_string(), "0");
        assert_eq!(n.to_str_radix_upper(36), "-73");
    }

    #[test]
    fn test_sign_magnitude_bytes() {
        let n = BigInt::from(-0x0102_03i32);
        assert_eq!(n.to_sign_magnitude_bytes(), [1, 1, 2, 3]);
        assert_eq!(BigInt::from_sign_magnitude_bytes(&[1, 1, 2, 3]), n);
        assert_eq!(BigInt::from(7u8).to_sign_magnitude_bytes(), [0, 7]);
        assert_eq!(BigInt::zero().to_sign_magnitude_bytes(), [0]);
        assert!(BigInt::from_sign_magnitude_bytes(&[1]).is_zero());
        assert!(BigInt::from_sign_magnitude_bytes(&[0]).is_zero());
    }

    #[test]
    #[should_panic]
    fn test_sign_magnitude_empty() {
        BigInt::from_sign_magnitude_bytes(&[]);
    }

    #[test]
    fn test_bytes_with_sign() {
        let n = BigInt::from_bytes_be(Minus, &[1, 0]);
        assert_eq!(n, BigInt::from(-256i32));
        assert_eq!(n.to_bytes_le(), (Minus, alloc::vec![0, 1]));
        assert_eq!(BigInt::from_bytes_le(Plus, &[0]).sign(), NoSign);
    }

    #[test]
    fn test_primitive_edges() {
        let min = BigInt::from(i128::MIN);
        assert_eq!(min.to_i128(), Some(i128::MIN));
        assert_eq!((&min - 1u8).to_i128(), None);
        assert_eq!(BigInt::from(i64::MIN).to_i64(), Some(i64::MIN));
        assert_eq!(BigInt::from(-1i8).to_u64(), None);
        assert_eq!(u8::try_from(&BigInt::from(255u8)).ok(), Some(255));
        assert!(u8::try_from(BigInt::from(-1i8)).is_err_and(|e| e.into_original() == BigInt::from(-1i8)));
        assert_eq!(BigInt::from_f64(-2.9), Some(BigInt::from(-2i8)));
        assert_eq!(BigInt::from_f64(f64::NAN), None);
        assert_eq!(BigInt::from(-3i8).to_f64(), Some(-3.0));
    }
}
