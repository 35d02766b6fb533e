use alloc::borrow::Cow;
use core::ops::{Shl, ShlAssign, Shr, ShrAssign};

use super::BigInt;
use super::Sign::Minus;
use crate::biguint::{biguint_shl, biguint_shr, shift_amount};

/// Whether a right shift of a negative value drops any one bits, in which
/// case the floored result is one further from zero.
fn shr_round_down(i: &BigInt, shift: usize) -> bool {
    if i.sign != Minus {
        return false;
    }
    let zeros = i.data.trailing_zeros().unwrap_or(0);
    shift > 0 && zeros < shift as u64
}

fn bigint_shl(n: Cow<'_, BigInt>, shift: usize) -> BigInt {
    let sign = n.sign;
    let data = match n {
        Cow::Borrowed(n) => biguint_shl(Cow::Borrowed(&n.data), shift),
        Cow::Owned(n) => biguint_shl(Cow::Owned(n.data), shift),
    };
    BigInt::from_biguint(sign, data)
}

/// Arithmetic right shift, rounding toward negative infinity.
fn bigint_shr(n: Cow<'_, BigInt>, shift: usize) -> BigInt {
    let round_down = shr_round_down(&n, shift);
    let sign = n.sign;
    let data = match n {
        Cow::Borrowed(n) => biguint_shr(Cow::Borrowed(&n.data), shift),
        Cow::Owned(n) => biguint_shr(Cow::Owned(n.data), shift),
    };
    let data = if round_down { data + 1u8 } else { data };
    BigInt::from_biguint(sign, data)
}

macro_rules! impl_shift {
    ($($rhs:ty),+) => {$(
        impl Shl<$rhs> for BigInt {
            type Output = BigInt;

            #[inline]
            fn shl(self, rhs: $rhs) -> BigInt {
                bigint_shl(Cow::Owned(self), shift_amount(rhs))
            }
        }
        impl Shl<$rhs> for &BigInt {
            type Output = BigInt;

            #[inline]
            fn shl(self, rhs: $rhs) -> BigInt {
                bigint_shl(Cow::Borrowed(self), shift_amount(rhs))
            }
        }
        impl ShlAssign<$rhs> for BigInt {
            #[inline]
            fn shl_assign(&mut self, rhs: $rhs) {
                let n = self.take();
                *self = n << rhs;
            }
        }

        impl Shr<$rhs> for BigInt {
            type Output = BigInt;

            #[inline]
            fn shr(self, rhs: $rhs) -> BigInt {
                bigint_shr(Cow::Owned(self), shift_amount(rhs))
            }
        }
        impl Shr<$rhs> for &BigInt {
            type Output = BigInt;

            #[inline]
            fn shr(self, rhs: $rhs) -> BigInt {
                bigint_shr(Cow::Borrowed(self), shift_amount(rhs))
            }
        }
        impl ShrAssign<$rhs> for BigInt {
            #[inline]
            fn shr_assign(&mut self, rhs: $rhs) {
                let n = self.take();
                *self = n >> rhs;
            }
        }
    )*};
}

impl_shift! { u8, u16, u32, u64, u128, usize }
impl_shift! { i8, i16, i32, i64, i128, isize }
