use core::cmp::Ordering::{Equal, Greater, Less};
use core::ops::{Sub, SubAssign};

use num_traits::Zero;

use super::BigInt;
use super::Sign::{Minus, NoSign, Plus};

forward_val_val_binop!(impl Sub for BigInt, sub);
forward_ref_ref_binop!(impl Sub for BigInt, sub);
forward_ref_val_binop!(impl Sub for BigInt, sub);
forward_val_assign!(impl SubAssign for BigInt, sub_assign);

impl Sub<&BigInt> for BigInt {
    type Output = BigInt;

    fn sub(self, other: &BigInt) -> BigInt {
        match (self.sign, other.sign) {
            (_, NoSign) => self,
            (NoSign, _) => -other.clone(),
            // opposite signs: the magnitudes add
            (Plus, Minus) | (Minus, Plus) => BigInt::from_biguint(self.sign, self.data + &other.data),
            // same sign: subtract the smaller magnitude from the larger
            (Plus, Plus) | (Minus, Minus) => match self.data.cmp(&other.data) {
                Less => BigInt::from_biguint(-self.sign, &other.data - self.data),
                Greater => BigInt::from_biguint(self.sign, self.data - &other.data),
                Equal => Zero::zero(),
            },
        }
    }
}

impl SubAssign<&BigInt> for BigInt {
    #[inline]
    fn sub_assign(&mut self, other: &BigInt) {
        let n = self.take();
        *self = n - other;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sub_signs() {
        let cases = [(5i64, 3i64), (5, -3), (-5, 3), (-5, -3), (3, 5), (-3, -5), (4, 4), (0, 9), (9, 0)];
        for (a, b) in cases {
            let (x, y) = (BigInt::from(a), BigInt::from(b));
            assert_eq!(&x - &y, BigInt::from(a - b), "{a} - {b}");
            assert_eq!(&x - y.clone(), BigInt::from(a - b));

            let mut acc = x;
            acc -= &y;
            assert_eq!(acc, BigInt::from(a - b));
        }
    }

    #[test]
    fn test_scalar_sub() {
        let x = BigInt::from(3u8);
        assert_eq!(&x - 5u32, BigInt::from(-2i8));
        assert_eq!(5u32 - &x, BigInt::from(2i8));
        assert_eq!(x - (-5i64), BigInt::from(8u8));
    }
}
