use core::ops::{Mul, MulAssign};

use super::BigInt;

forward_all_binop_to_ref_ref!(impl Mul for BigInt, mul);

impl Mul<&BigInt> for &BigInt {
    type Output = BigInt;

    #[inline]
    fn mul(self, other: &BigInt) -> BigInt {
        BigInt::from_biguint(self.sign * other.sign, &self.data * &other.data)
    }
}

impl MulAssign<&BigInt> for BigInt {
    #[inline]
    fn mul_assign(&mut self, other: &BigInt) {
        *self = &*self * other;
    }
}

forward_val_assign!(impl MulAssign for BigInt, mul_assign);
