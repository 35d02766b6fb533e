use core::ops::{Div, DivAssign, Rem, RemAssign};

use num_integer::Integer;
use num_traits::Signed;

use super::BigInt;

forward_all_binop_to_ref_ref!(impl Div for BigInt, div);

impl Div<&BigInt> for &BigInt {
    type Output = BigInt;

    /// Rounds toward zero.
    #[inline]
    fn div(self, other: &BigInt) -> BigInt {
        let (q, _) = self.div_rem(other);
        q
    }
}

impl DivAssign<&BigInt> for BigInt {
    #[inline]
    fn div_assign(&mut self, other: &BigInt) {
        *self = &*self / other;
    }
}

forward_val_assign!(impl DivAssign for BigInt, div_assign);

forward_all_binop_to_ref_ref!(impl Rem for BigInt, rem);

impl Rem<&BigInt> for &BigInt {
    type Output = BigInt;

    /// The remainder takes the sign of the dividend, so `-7 % 4 == -3`.
    #[inline]
    fn rem(self, other: &BigInt) -> BigInt {
        BigInt::from_biguint(self.sign, &self.data % &other.data)
    }
}

impl RemAssign<&BigInt> for BigInt {
    #[inline]
    fn rem_assign(&mut self, other: &BigInt) {
        *self = &*self % other;
    }
}

forward_val_assign!(impl RemAssign for BigInt, rem_assign);

impl BigInt {
    /// Euclidean division: the quotient that pairs with
    /// [`rem_euclid`](BigInt::rem_euclid), so
    /// `self == q * v + self.rem_euclid(v)`.
    pub fn div_euclid(&self, v: &BigInt) -> BigInt {
        let (q, r) = self.div_rem(v);
        if r.is_negative() {
            if v.is_positive() { q - 1u8 } else { q + 1u8 }
        } else {
            q
        }
    }

    /// The least non-negative remainder of `self` divided by `v`.
    pub fn rem_euclid(&self, v: &BigInt) -> BigInt {
        let r = self % v;
        if r.is_negative() {
            if v.is_positive() { r + v } else { r - v }
        } else {
            r
        }
    }
}
