use core::cmp::Ordering::{Equal, Greater, Less};
use core::ops::{Add, AddAssign};

use num_traits::Zero;

use super::BigInt;
use super::Sign::{Minus, NoSign, Plus};

forward_val_val_binop!(impl Add for BigInt, add);
forward_ref_ref_binop!(impl Add for BigInt, add);
forward_ref_val_binop_commutative!(impl Add for BigInt, add);
forward_val_assign!(impl AddAssign for BigInt, add_assign);

impl Add<&BigInt> for BigInt {
    type Output = BigInt;

    fn add(self, other: &BigInt) -> BigInt {
        match (self.sign, other.sign) {
            (_, NoSign) => self,
            (NoSign, _) => other.clone(),
            // same sign: add the magnitudes
            (Plus, Plus) | (Minus, Minus) => BigInt::from_biguint(self.sign, self.data + &other.data),
            // opposite signs: subtract the smaller magnitude from the larger
            (Plus, Minus) | (Minus, Plus) => match self.data.cmp(&other.data) {
                Less => BigInt::from_biguint(other.sign, &other.data - self.data),
                Greater => BigInt::from_biguint(self.sign, self.data - &other.data),
                Equal => Zero::zero(),
            },
        }
    }
}

impl AddAssign<&BigInt> for BigInt {
    #[inline]
    fn add_assign(&mut self, other: &BigInt) {
        let n = self.take();
        *self = n + other;
    }
}
