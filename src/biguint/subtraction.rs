use core::cmp;
use core::ops::{Sub, SubAssign};

use num_traits::CheckedSub;

use super::BigUint;
use crate::big_digit::BigDigit;
use crate::word::Word;

/// Subtracts `a - b - borrow`, leaving the borrow out in `borrow`.
#[inline]
pub fn sbb<W: Word>(a: W, b: W, borrow: &mut bool) -> W {
    let (diff, b1) = a.overflowing_sub(b);
    let (diff, b2) = diff.overflowing_sub(if *borrow { W::one() } else { W::zero() });
    *borrow = b1 || b2;
    diff
}

/// `a -= b`, returning `true` when the true difference is negative.
///
/// `b` may be longer than `a` as long as its extra words are zero.
pub fn __sub2<W: Word>(a: &mut [W], b: &[W]) -> bool {
    let len = cmp::min(a.len(), b.len());
    let (a_lo, a_hi) = a.split_at_mut(len);
    let (b_lo, b_hi) = b.split_at(len);

    let mut borrow = false;
    for (a, &b) in a_lo.iter_mut().zip(b_lo) {
        *a = sbb(*a, b, &mut borrow);
    }

    if borrow {
        for a in a_hi {
            *a = sbb(*a, W::zero(), &mut borrow);
            if !borrow {
                break;
            }
        }
    }

    borrow || b_hi.iter().any(|x| !x.is_zero())
}

pub fn sub2<W: Word>(a: &mut [W], b: &[W]) {
    // note: we're _required_ to fail on underflow
    assert!(
        !__sub2(a, b),
        "Cannot subtract b from a because b is larger than a."
    );
}

/// `b = a - b`, returning `true` when the true difference is negative.
///
/// The caller _must_ ensure that `b` is at least as long as `a`.
pub fn __sub2rev<W: Word>(a: &[W], b: &mut [W]) -> bool {
    debug_assert!(b.len() >= a.len());

    let len = cmp::min(a.len(), b.len());
    let (a_lo, a_hi) = a.split_at(len);
    let (b_lo, b_hi) = b.split_at_mut(len);

    let mut borrow = false;
    for (&a, b) in a_lo.iter().zip(b_lo) {
        *b = sbb(a, *b, &mut borrow);
    }

    debug_assert!(a_hi.is_empty());

    borrow || b_hi.iter().any(|x| !x.is_zero())
}

pub fn sub2rev<W: Word>(a: &[W], b: &mut [W]) {
    // note: we're _required_ to fail on underflow
    assert!(
        !__sub2rev(a, b),
        "Cannot subtract b from a because b is larger than a."
    );
}

forward_val_val_binop!(impl Sub for BigUint, sub);
forward_ref_ref_binop!(impl Sub for BigUint, sub);
forward_val_assign!(impl SubAssign for BigUint, sub_assign);

impl Sub<&BigUint> for BigUint {
    type Output = BigUint;

    fn sub(mut self, other: &BigUint) -> BigUint {
        self -= other;
        self
    }
}

impl SubAssign<&BigUint> for BigUint {
    fn sub_assign(&mut self, other: &BigUint) {
        sub2(&mut self.data[..], &other.data[..]);
        self.normalize();
    }
}

impl Sub<BigUint> for &BigUint {
    type Output = BigUint;

    fn sub(self, mut other: BigUint) -> BigUint {
        let other_len = other.data.len();
        if other_len < self.data.len() {
            let lo_borrow = __sub2rev(&self.data[..other_len], &mut other.data[..]);
            other.data.extend_from_slice(&self.data[other_len..]);
            if lo_borrow {
                sub2(&mut other.data[other_len..], &[1 as BigDigit]);
            }
        } else {
            sub2rev(&self.data[..], &mut other.data[..]);
        }
        other.normalized()
    }
}

impl CheckedSub for BigUint {
    #[inline]
    fn checked_sub(&self, v: &BigUint) -> Option<BigUint> {
        match self.cmp(v) {
            cmp::Ordering::Less => None,
            cmp::Ordering::Equal => Some(BigUint::default()),
            cmp::Ordering::Greater => Some(self.sub(v)),
        }
    }
}

impl BigUint {
    /// Subtracts `other`, reporting whether the difference wrapped.
    ///
    /// On overflow the value is the two's-complement wrap of the difference
    /// within `max(len)` words and carries no further meaning.
    pub fn overflowing_sub(&self, other: &BigUint) -> (BigUint, bool) {
        let mut diff = self.clone();
        if diff.data.len() < other.data.len() {
            diff.data.resize(other.data.len(), 0);
        }
        let overflow = __sub2(&mut diff.data[..], &other.data[..]);
        (diff.normalized(), overflow)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_traits::Zero;

    #[test]
    fn test_sbb_borrow_chain() {
        let mut borrow = false;
        assert_eq!(sbb(0u8, 1, &mut borrow), u8::MAX);
        assert!(borrow);
        assert_eq!(sbb(0u8, u8::MAX, &mut borrow), 0);
        assert!(borrow);
        assert_eq!(sbb(5u8, 1, &mut borrow), 3);
        assert!(!borrow);
    }

    #[test]
    fn test_sub2_tolerates_zero_extension() {
        let mut a = [5u32, 1];
        sub2(&mut a, &[6, 0, 0, 0]);
        assert_eq!(a, [u32::MAX, 0]);
        assert!(__sub2(&mut [1u32], &[0, 1]));
    }

    #[test]
    fn test_sub2rev() {
        let mut b = [1u16, 0, 0];
        sub2rev(&[0, 1], &mut b);
        assert_eq!(b, [u16::MAX, 0, 0]);
    }

    #[test]
    fn test_sub_both_directions() {
        let a = BigUint::from_slice(&[0, 0, 1]);
        let b = BigUint::from_slice(&[1]);
        let expected = BigUint::from_slice(&[u32::MAX, u32::MAX]);
        assert_eq!(&a - &b, expected);
        assert_eq!(&a - b.clone(), expected);
        assert_eq!(a.clone() - &b, expected);
        assert!((&a - a.clone()).is_zero());
    }

    #[test]
    #[should_panic]
    fn test_sub_underflow() {
        let _ = BigUint::from(3u8) - BigUint::from(4u8);
    }

    #[test]
    fn test_checked_and_overflowing_sub() {
        let three = BigUint::from(3u8);
        let four = BigUint::from(4u8);
        assert_eq!(four.checked_sub(&three), Some(BigUint::from(1u8)));
        assert_eq!(three.checked_sub(&four), None);

        let (diff, overflow) = four.overflowing_sub(&three);
        assert_eq!((diff, overflow), (BigUint::from(1u8), false));

        let (wrapped, overflow) = three.overflowing_sub(&four);
        assert!(overflow);
        assert_eq!(wrapped.words(), &[BigDigit::MAX]);
    }
}
