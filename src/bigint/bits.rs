use alloc::vec::Vec;
use core::cmp::Ordering::{Equal, Greater, Less};
use core::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign};

use super::BigInt;
use super::Sign::{Minus, Plus};
use crate::big_digit::BigDigit;
use crate::biguint::biguint_from_vec;
use crate::word::Word;

/// Reads word `index` of the two's complement form of `-mag`, where
/// `first_nonzero` is the index of the lowest non-zero word of `mag`.
///
/// Words below `first_nonzero` are zero, the word at it is negated, and
/// every higher word, including those past the end of `mag`, is inverted.
#[inline]
pub fn twos_complement_word<W: Word>(mag: &[W], index: usize, first_nonzero: usize) -> W {
    let word = mag.get(index).copied().unwrap_or_else(W::zero);
    match index.cmp(&first_nonzero) {
        Less => W::zero(),
        Equal => W::zero().wrapping_sub(word),
        Greater => !word,
    }
}

#[inline]
fn first_nonzero(words: &[BigDigit]) -> usize {
    words.iter().position(|&w| w != 0).unwrap_or(0)
}

/// Applies `op` to the infinite two's complement forms of `a` and `b`.
///
/// One word past the longer operand holds pure sign extension, so the sign
/// of the result is read from the top word and a negative result is
/// converted back to a magnitude through the same projection.
fn bitwise(a: &BigInt, b: &BigInt, op: impl Fn(BigDigit, BigDigit) -> BigDigit) -> BigInt {
    let (a_words, b_words) = (a.data.words(), b.data.words());
    let len = a_words.len().max(b_words.len()) + 1;
    let a_first = first_nonzero(a_words);
    let b_first = first_nonzero(b_words);

    let view = |x: &BigInt, words: &[BigDigit], first: usize, i: usize| {
        if x.sign == Minus {
            twos_complement_word(words, i, first)
        } else {
            words.get(i).copied().unwrap_or(0)
        }
    };

    let words: Vec<BigDigit> = (0..len)
        .map(|i| op(view(a, a_words, a_first, i), view(b, b_words, b_first, i)))
        .collect();

    if words[len - 1] >> (crate::big_digit::BITS - 1) == 1 {
        let first = first_nonzero(&words);
        let mag: Vec<BigDigit> = (0..len)
            .map(|i| twos_complement_word(&words, i, first))
            .collect();
        BigInt::from_biguint(Minus, biguint_from_vec(mag))
    } else {
        BigInt::from_biguint(Plus, biguint_from_vec(words))
    }
}

macro_rules! impl_bitwise {
    ($Op:ident :: $op:ident, $OpAssign:ident :: $op_assign:ident, $f:expr) => {
        forward_all_binop_to_ref_ref!(impl $Op for BigInt, $op);

        impl $Op<&BigInt> for &BigInt {
            type Output = BigInt;

            #[inline]
            fn $op(self, other: &BigInt) -> BigInt {
                bitwise(self, other, $f)
            }
        }

        impl $OpAssign<&BigInt> for BigInt {
            #[inline]
            fn $op_assign(&mut self, other: &BigInt) {
                *self = bitwise(self, other, $f);
            }
        }

        forward_val_assign!(impl $OpAssign for BigInt, $op_assign);
    };
}

impl_bitwise!(BitAnd::bitand, BitAndAssign::bitand_assign, |x, y| x & y);
impl_bitwise!(BitOr::bitor, BitOrAssign::bitor_assign, |x, y| x | y);
impl_bitwise!(BitXor::bitxor, BitXorAssign::bitxor_assign, |x, y| x ^ y);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_twos_complement_word() {
        let mag = [0u8, 0x10, 0x01];
        assert_eq!(twos_complement_word(&mag, 0, 1), 0x00);
        assert_eq!(twos_complement_word(&mag, 1, 1), 0xf0);
        assert_eq!(twos_complement_word(&mag, 2, 1), 0xfe);
        assert_eq!(twos_complement_word(&mag, 9, 1), 0xff);
    }

    #[test]
    fn test_bitwise_matches_i128() {
        let values = [
            0i128,
            1,
            -1,
            5,
            -6,
            0x1234_5678_9abc_def0,
            -0x1234_5678_9abc_def0,
            i128::from(u64::MAX),
            -i128::from(u64::MAX) - 1,
            1 << 100,
            -(1 << 100),
        ];
        for &a in &values {
            for &b in &values {
                let (x, y) = (BigInt::from(a), BigInt::from(b));
                assert_eq!(&x & &y, BigInt::from(a & b), "{a} & {b}");
                assert_eq!(&x | &y, BigInt::from(a | b), "{a} | {b}");
                assert_eq!(&x ^ &y, BigInt::from(a ^ b), "{a} ^ {b}");
            }
        }
    }

    #[test]
    fn test_bitwise_assign() {
        let mut x = BigInt::from(-12i32);
        x &= BigInt::from(0xffi32);
        assert_eq!(x, BigInt::from(0xf4i32));
        x |= &BigInt::from(-256i32);
        assert_eq!(x, BigInt::from(-12i32));
        x ^= BigInt::from(-1i32);
        assert_eq!(x, BigInt::from(11i32));
    }
}
