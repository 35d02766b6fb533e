use alloc::vec::Vec;
use core::cmp::Ordering;
use core::ops::{Div, DivAssign, Rem, RemAssign};

use log::trace;
use num_traits::{CheckedDiv, One, Zero};

use super::{BigUint, biguint_from_vec, cmp_slice, trim};
use crate::big_digit::BigDigit;
use crate::word::Word;

use super::multiplication::mac_digit;
use super::subtraction::sub2;

/// Divides by a single word, returning the quotient and the remainder.
pub fn div_rem_digit(mut a: BigUint, b: BigDigit) -> (BigUint, BigDigit) {
    assert!(b != 0, "attempt to divide by zero");

    let mut rem = 0;
    for d in a.data.iter_mut().rev() {
        let (q, r) = b.full_div((rem, *d));
        *d = q;
        rem = r;
    }

    (a.normalized(), rem)
}

/// The remainder of dividing a digit slice by a single word.
pub fn rem_digit(a: &[BigDigit], b: BigDigit) -> BigDigit {
    assert!(b != 0, "attempt to divide by zero");

    a.iter()
        .rev()
        .fold(0, |rem, &d| b.full_div((rem, d)).1)
}

/// Estimates the quotient word of the three-word `x` over the two-word `y`,
/// both most significant first.
///
/// `y` must be normalized (top bit of `y.0` set) and `(x.0, x.1)` must not
/// exceed `y`. The estimate is the exact 3/2 quotient, computed with
/// single-word arithmetic only, so it is never below the true quotient word
/// of a longer division and at most one above it.
pub fn approximate_quotient<W: Word>(x: (W, W, W), y: (W, W)) -> W {
    let (x0, x1, x2) = x;
    let (y0, y1) = y;

    // First estimate from the two top words of x and the top word of y.
    let (q, r) = if x0 == y0 {
        let (r, overflow) = x0.overflowing_add(x1);
        if overflow {
            return W::max_value();
        }
        (W::max_value(), r)
    } else {
        y0.full_div((x0, x1))
    };

    // Refine with x2 and y1; q is at most two too large.
    let (ph, pl) = q.full_mul(y1);
    if ph < r || (ph == r && pl <= x2) {
        return q;
    }

    let (r1, overflow) = r.overflowing_add(y0);
    if overflow {
        return q - W::one();
    }

    let (pl1, borrow) = pl.overflowing_sub(y1);
    let ph1 = if borrow { ph.wrapping_sub(W::one()) } else { ph };
    if ph1 < r1 || (ph1 == r1 && pl1 <= x2) {
        return q - W::one();
    }
    q - W::one() - W::one()
}

/// Knuth's Algorithm D: divides `u` by the multi-word `d`, returning the
/// trimmed quotient and remainder words.
///
/// `d` must have at least two words with a non-zero top word.
pub fn div_rem_words<W: Word>(u: &[W], d: &[W]) -> (Vec<W>, Vec<W>) {
    let n = d.len();
    assert!(n >= 2 && !d[n - 1].is_zero(), "divisor must be a trimmed multi-word value");

    if cmp_slice(u, d) == Ordering::Less {
        let mut rem = u.to_vec();
        trim(&mut rem);
        return (Vec::new(), rem);
    }

    // Normalize so the divisor's top word has its high bit set. The shifted
    // divisor still fits in n words; the remainder gains one word.
    let shift = d[n - 1].leading_zeros() as usize;
    let mut divisor = shl_bits(d, shift);
    divisor.truncate(n);
    let mut rem = shl_bits(u, shift);

    let (d1, d0) = (divisor[n - 1], divisor[n - 2]);
    let mut quotient = alloc::vec![W::zero(); rem.len() - n];
    let mut product = alloc::vec![W::zero(); n + 1];

    for j in (n..rem.len()).rev() {
        let mut q = approximate_quotient((rem[j], rem[j - 1], rem[j - 2]), (d1, d0));

        product.iter_mut().for_each(|p| *p = W::zero());
        mac_digit(&mut product, &divisor, q);

        let window = &mut rem[j - n..=j];
        if cmp_slice(&product, window) == Ordering::Greater {
            // The estimate was one too large.
            trace!("knuth division: correcting quotient word at {}", j - n);
            sub2(&mut product, &divisor);
            q = q - W::one();
        }
        sub2(window, &product);
        quotient[j - n] = q;
    }

    rem.truncate(n);
    shr_bits(&mut rem, shift);
    trim(&mut rem);
    trim(&mut quotient);

    (quotient, rem)
}

/// `u << shift` for `shift < W::BITS`, one word longer than `u`.
fn shl_bits<W: Word>(u: &[W], shift: usize) -> Vec<W> {
    let mut out = Vec::with_capacity(u.len() + 1);
    if shift == 0 {
        out.extend_from_slice(u);
        out.push(W::zero());
        return out;
    }

    let mut carry = W::zero();
    for &w in u {
        out.push((w << shift) | carry);
        carry = w >> (W::BITS as usize - shift);
    }
    out.push(carry);
    out
}

/// `u >>= shift` in place for `shift < W::BITS`.
fn shr_bits<W: Word>(u: &mut [W], shift: usize) {
    if shift == 0 {
        return;
    }

    let mut carry = W::zero();
    for w in u.iter_mut().rev() {
        let next = *w << (W::BITS as usize - shift);
        *w = (*w >> shift) | carry;
        carry = next;
    }
}

/// Divides `u` by `d`, returning `(quotient, remainder)`.
///
/// # Panics
///
/// Panics if `d` is zero.
pub fn div_rem(u: &BigUint, d: &BigUint) -> (BigUint, BigUint) {
    if d.is_zero() {
        panic!("attempt to divide by zero")
    }
    if u.is_zero() {
        return (BigUint::zero(), BigUint::zero());
    }

    if d.data.len() == 1 {
        if d.data[0] == 1 {
            return (u.clone(), BigUint::zero());
        }
        let (div, rem) = div_rem_digit(u.clone(), d.data[0]);
        return (div, BigUint::from(rem));
    }

    match u.cmp(d) {
        Ordering::Less => (BigUint::zero(), u.clone()),
        Ordering::Equal => (BigUint::one(), BigUint::zero()),
        Ordering::Greater => {
            let (q, r) = div_rem_words(&u.data, &d.data);
            (biguint_from_vec(q), biguint_from_vec(r))
        }
    }
}

forward_all_binop_to_ref_ref!(impl Div for BigUint, div);

impl Div<&BigUint> for &BigUint {
    type Output = BigUint;

    #[inline]
    fn div(self, other: &BigUint) -> BigUint {
        let (q, _) = div_rem(self, other);
        q
    }
}

impl DivAssign<&BigUint> for BigUint {
    #[inline]
    fn div_assign(&mut self, other: &BigUint) {
        *self = &*self / other;
    }
}

forward_val_assign!(impl DivAssign for BigUint, div_assign);

forward_all_binop_to_ref_ref!(impl Rem for BigUint, rem);

impl Rem<&BigUint> for &BigUint {
    type Output = BigUint;

    #[inline]
    fn rem(self, other: &BigUint) -> BigUint {
        if let [digit] = other.data[..] {
            if !self.is_zero() {
                return BigUint::from(rem_digit(&self.data, digit));
            }
        }
        let (_, r) = div_rem(self, other);
        r
    }
}

impl RemAssign<&BigUint> for BigUint {
    #[inline]
    fn rem_assign(&mut self, other: &BigUint) {
        *self = &*self % other;
    }
}

forward_val_assign!(impl RemAssign for BigUint, rem_assign);

impl CheckedDiv for BigUint {
    #[inline]
    fn checked_div(&self, v: &BigUint) -> Option<BigUint> {
        if v.is_zero() {
            return None;
        }
        Some(self.div(v))
    }
}
