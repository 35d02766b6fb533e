//! Fixed-width word operations shared by every digit-slice algorithm.

use core::fmt::Debug;
use core::hash::Hash;

use num_traits::{PrimInt, Unsigned};

/// A fixed-width unsigned machine word usable as a big integer digit.
///
/// Every slice algorithm in [`algorithms`](crate::algorithms) is generic over
/// this trait and monomorphized per width. Leading and trailing zero counts
/// come from [`PrimInt`].
pub trait Word: PrimInt + Unsigned + Hash + Debug + Default + 'static {
    /// Width of the word in bits.
    const BITS: u32;

    /// Adds, reporting whether the sum wrapped.
    fn overflowing_add(self, other: Self) -> (Self, bool);

    /// Subtracts, reporting whether the difference wrapped.
    fn overflowing_sub(self, other: Self) -> (Self, bool);

    fn wrapping_add(self, other: Self) -> Self;

    fn wrapping_sub(self, other: Self) -> Self;

    fn wrapping_mul(self, other: Self) -> Self;

    /// Multiplies two words into a `(high, low)` double-word product.
    fn full_mul(self, other: Self) -> (Self, Self);

    /// Divides the double word `(high, low)` by `self`, returning
    /// `(quotient, remainder)`.
    ///
    /// The quotient must fit in a single word, so `high` has to be smaller
    /// than the divisor.
    fn full_div(self, dividend: (Self, Self)) -> (Self, Self) {
        let (u1, u0) = dividend;
        assert!(u1 < self, "quotient does not fit in a single word");

        let half = (Self::BITS / 2) as usize;
        let base = Self::one() << half;

        // Normalize so the divisor's top bit is set.
        let s = self.leading_zeros() as usize;
        let v = self << s;
        let (vn1, vn0) = v.split();
        let un32 = if s == 0 {
            u1
        } else {
            (u1 << s) | (u0 >> (Self::BITS as usize - s))
        };
        let (un1, un0) = (u0 << s).split();

        let (q1, un21) = divlu_step(un32, un1, (v, vn1, vn0), base);
        let (q0, un10) = divlu_step(un21, un0, (v, vn1, vn0), base);

        (Self::join(q1, q0), un10 >> s)
    }

    /// Splits the word into `(high, low)` halves.
    fn split(self) -> (Self, Self) {
        let half = (Self::BITS / 2) as usize;
        let low = self & ((Self::one() << half) - Self::one());
        (self >> half, low)
    }

    /// Joins two half words; bits of `high` beyond the half width are
    /// shifted out.
    fn join(high: Self, low: Self) -> Self {
        (high << (Self::BITS / 2) as usize) | low
    }
}

/// One half-word quotient digit of [`Word::full_div`], together with the
/// partial remainder left after subtracting it.
fn divlu_step<W: Word>(hi: W, lo: W, divisor: (W, W, W), base: W) -> (W, W) {
    let (v, vn1, vn0) = divisor;
    let mut q = hi / vn1;
    let mut rhat = hi - q * vn1;
    while q >= base || q * vn0 > W::join(rhat, lo) {
        q = q - W::one();
        rhat = rhat + vn1;
        if rhat >= base {
            break;
        }
    }
    let rem = W::join(hi, lo).wrapping_sub(q.wrapping_mul(v));
    (q, rem)
}

macro_rules! impl_word {
    ($t:ty, $wide:ty) => {
        impl Word for $t {
            const BITS: u32 = (core::mem::size_of::<$t>() * 8) as u32;

            #[inline]
            fn overflowing_add(self, other: Self) -> (Self, bool) {
                <$t>::overflowing_add(self, other)
            }

            #[inline]
            fn overflowing_sub(self, other: Self) -> (Self, bool) {
                <$t>::overflowing_sub(self, other)
            }

            #[inline]
            fn wrapping_add(self, other: Self) -> Self {
                <$t>::wrapping_add(self, other)
            }

            #[inline]
            fn wrapping_sub(self, other: Self) -> Self {
                <$t>::wrapping_sub(self, other)
            }

            #[inline]
            fn wrapping_mul(self, other: Self) -> Self {
                <$t>::wrapping_mul(self, other)
            }

            #[inline]
            fn full_mul(self, other: Self) -> (Self, Self) {
                let product = <$wide>::from(self) * <$wide>::from(other);
                ((product >> <Self as Word>::BITS) as $t, product as $t)
            }
        }
    };
}

impl_word!(u8, u16);
impl_word!(u16, u32);
impl_word!(u32, u64);
impl_word!(u64, u128);
