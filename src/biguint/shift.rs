use alloc::borrow::Cow;
use core::ops::{Shl, ShlAssign, Shr, ShrAssign};

use num_traits::Zero;
use smallvec::SmallVec;

use super::BigUint;
use crate::big_digit::{self, BigDigit};

/// `n << bits`: whole words are inserted at the low end, then the remaining
/// bit shift carries upward.
pub fn biguint_shl(n: Cow<'_, BigUint>, bits: usize) -> BigUint {
    if n.is_zero() {
        return n.into_owned();
    }

    let digit_bits = big_digit::BITS as usize;
    let n_unit = bits / digit_bits;
    let n_bits = bits % digit_bits;

    let mut data: SmallVec<[BigDigit; crate::VEC_SIZE]> = match n_unit {
        0 => n.into_owned().data,
        _ => {
            let len = n_unit.saturating_add(n.data.len() + 1);
            let mut data = SmallVec::with_capacity(len);
            data.resize(n_unit, 0);
            data.extend_from_slice(&n.data);
            data
        }
    };

    if n_bits > 0 {
        let mut carry = 0;
        for elem in data[n_unit..].iter_mut() {
            let new_carry = *elem >> (digit_bits - n_bits);
            *elem = (*elem << n_bits) | carry;
            carry = new_carry;
        }
        if carry != 0 {
            data.push(carry);
        }
    }

    BigUint { data }.normalized()
}

/// `n >> bits`: whole words are dropped from the low end, then the remaining
/// bit shift carries downward. Shifting past the bit width yields zero.
pub fn biguint_shr(n: Cow<'_, BigUint>, bits: usize) -> BigUint {
    let digit_bits = big_digit::BITS as usize;
    let n_unit = bits / digit_bits;
    if n_unit >= n.data.len() {
        return BigUint::zero();
    }
    let n_bits = bits % digit_bits;

    let mut data: SmallVec<[BigDigit; crate::VEC_SIZE]> = match n {
        Cow::Borrowed(n) => SmallVec::from_slice(&n.data[n_unit..]),
        Cow::Owned(mut n) => {
            n.data.drain(..n_unit);
            n.data
        }
    };

    if n_bits > 0 {
        let mut borrow = 0;
        for elem in data.iter_mut().rev() {
            let new_borrow = *elem << (digit_bits - n_bits);
            *elem = (*elem >> n_bits) | borrow;
            borrow = new_borrow;
        }
    }

    BigUint { data }.normalized()
}

/// Converts a shift amount to `usize`, panicking on negative amounts.
/// Amounts too large for `usize` saturate; they yield zero on the right and
/// run out of memory on the left.
#[inline]
pub(crate) fn shift_amount<T>(rhs: T) -> usize
where
    T: Copy + PartialOrd + Zero + TryInto<usize>,
{
    assert!(rhs >= T::zero(), "attempt to shift by a negative amount");
    rhs.try_into().unwrap_or(usize::MAX)
}

macro_rules! impl_shift {
    (@ref $Shx:ident :: $shx:ident, $ShxAssign:ident :: $shx_assign:ident, $rhs:ty) => {
        impl $Shx<&$rhs> for BigUint {
            type Output = BigUint;

            #[inline]
            fn $shx(self, rhs: &$rhs) -> BigUint {
                $Shx::$shx(self, *rhs)
            }
        }
        impl $Shx<&$rhs> for &BigUint {
            type Output = BigUint;

            #[inline]
            fn $shx(self, rhs: &$rhs) -> BigUint {
                $Shx::$shx(self, *rhs)
            }
        }
        impl $ShxAssign<&$rhs> for BigUint {
            #[inline]
            fn $shx_assign(&mut self, rhs: &$rhs) {
                $ShxAssign::$shx_assign(self, *rhs);
            }
        }
    };
    ($($rhs:ty),+) => {$(
        impl Shl<$rhs> for BigUint {
            type Output = BigUint;

            #[inline]
            fn shl(self, rhs: $rhs) -> BigUint {
                biguint_shl(Cow::Owned(self), shift_amount(rhs))
            }
        }
        impl Shl<$rhs> for &BigUint {
            type Output = BigUint;

            #[inline]
            fn shl(self, rhs: $rhs) -> BigUint {
                biguint_shl(Cow::Borrowed(self), shift_amount(rhs))
            }
        }
        impl ShlAssign<$rhs> for BigUint {
            #[inline]
            fn shl_assign(&mut self, rhs: $rhs) {
                let n = self.take();
                *self = n << rhs;
            }
        }
        impl_shift! { @ref Shl::shl, ShlAssign::shl_assign, $rhs }

        impl Shr<$rhs> for BigUint {
            type Output = BigUint;

            #[inline]
            fn shr(self, rhs: $rhs) -> BigUint {
                biguint_shr(Cow::Owned(self), shift_amount(rhs))
            }
        }
        impl Shr<$rhs> for &BigUint {
            type Output = BigUint;

            #[inline]
            fn shr(self, rhs: $rhs) -> BigUint {
                biguint_shr(Cow::Borrowed(self), shift_amount(rhs))
            }
        }
        impl ShrAssign<$rhs> for BigUint {
            #[inline]
            fn shr_assign(&mut self, rhs: $rhs) {
                let n = self.take();
                *self = n >> rhs;
            }
        }
        impl_shift! { @ref Shr::shr, ShrAssign::shr_assign, $rhs }
    )*};
}

impl_shift! { u8, u16, u32, u64, u128, usize }
impl_shift! { i8, i16, i32, i64, i128, isize }
