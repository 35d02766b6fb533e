use core::ops::{Add, AddAssign};

use num_traits::CheckedAdd;

use super::BigUint;
use crate::word::Word;

/// Adds `a + b + carry`, leaving the carry out in `carry`.
#[inline]
pub fn adc<W: Word>(a: W, b: W, carry: &mut bool) -> W {
    let (sum, c1) = a.overflowing_add(b);
    let (sum, c2) = sum.overflowing_add(if *carry { W::one() } else { W::zero() });
    *carry = c1 || c2;
    sum
}

/// Two argument addition of raw slices, `a += b`, returning the carry.
///
/// This is used when the data `Vec` might need to resize to push a non-zero
/// carry, so we perform the addition first hoping that it will fit.
///
/// The caller _must_ ensure that `a` is at least as long as `b`.
#[inline]
pub fn __add2<W: Word>(a: &mut [W], b: &[W]) -> bool {
    debug_assert!(a.len() >= b.len());

    let mut carry = false;
    let (a_lo, a_hi) = a.split_at_mut(b.len());

    for (a, &b) in a_lo.iter_mut().zip(b) {
        *a = adc(*a, b, &mut carry);
    }

    if carry {
        for a in a_hi {
            *a = adc(*a, W::zero(), &mut carry);
            if !carry {
                break;
            }
        }
    }

    carry
}

/// Two argument addition of raw slices:
/// a += b
///
/// The caller _must_ ensure that a is big enough to store the result -
/// typically this means resizing a to max(a.len(), b.len()) + 1, to fit a
/// possible carry.
pub fn add2<W: Word>(a: &mut [W], b: &[W]) {
    let carry = __add2(a, b);

    assert!(!carry, "carry overflow during addition");
}

forward_all_binop_to_val_ref_commutative!(impl Add for BigUint, add);
forward_val_assign!(impl AddAssign for BigUint, add_assign);

impl Add<&BigUint> for BigUint {
    type Output = BigUint;

    fn add(mut self, other: &BigUint) -> BigUint {
        self += other;
        self
    }
}

impl AddAssign<&BigUint> for BigUint {
    #[inline]
    fn add_assign(&mut self, other: &BigUint) {
        let self_len = self.data.len();
        let carry = if self_len < other.data.len() {
            let lo_carry = __add2(&mut self.data[..], &other.data[..self_len]);
            self.data.extend_from_slice(&other.data[self_len..]);
            __add2(&mut self.data[self_len..], &[lo_carry as crate::BigDigit])
        } else {
            __add2(&mut self.data[..], &other.data[..])
        };
        if carry {
            self.data.push(1);
        }
    }
}

impl CheckedAdd for BigUint {
    #[inline]
    fn checked_add(&self, v: &BigUint) -> Option<BigUint> {
        Some(self.add(v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use num_traits::Zero;

    #[test]
    fn test_adc_carry_chain() {
        let mut carry = false;
        assert_eq!(adc(u8::MAX, 1, &mut carry), 0);
        assert!(carry);
        assert_eq!(adc(u8::MAX, u8::MAX, &mut carry), u8::MAX);
        assert!(carry);
        assert_eq!(adc(1u8, 2, &mut carry), 4);
        assert!(!carry);
    }

    #[test]
    fn test_add2_propagates_into_high_words() {
        let mut a = vec![u32::MAX, u32::MAX, 0];
        add2(&mut a, &[1]);
        assert_eq!(a, [0, 0, 1]);

        let mut b = [u16::MAX];
        assert!(__add2(&mut b, &[1]));
        assert_eq!(b, [0]);
    }

    #[test]
    #[should_panic]
    fn test_add2_overflow() {
        let mut a = [u64::MAX];
        add2(&mut a, &[1]);
    }

    #[test]
    fn test_add_grows() {
        let a = BigUint::from_slice(&[u32::MAX]);
        let b = BigUint::from_slice(&[1, u32::MAX, u32::MAX]);
        assert_eq!(&a + &b, BigUint::from_slice(&[0, 0, 0, 1]));
        assert_eq!(&b + &a, BigUint::from_slice(&[0, 0, 0, 1]));
        assert_eq!(a + 0u8, BigUint::from_slice(&[u32::MAX]));
    }

    #[test]
    fn test_sum() {
        let total: BigUint = (1u32..=100).map(BigUint::from).sum();
        assert_eq!(total, BigUint::from(5050u32));
        assert!(core::iter::empty::<BigUint>().sum::<BigUint>().is_zero());
    }
}

