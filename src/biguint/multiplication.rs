use alloc::vec::Vec;
use core::cmp::Ordering;
use core::ops::{Mul, MulAssign};
use core::sync::atomic::{AtomicUsize, Ordering::Relaxed};

use log::debug;
use num_traits::{CheckedMul, Zero};

use super::{BigUint, biguint_from_vec, cmp_slice, trim, trimmed_len};
use crate::big_digit::BigDigit;
use crate::word::Word;

use super::addition::add2;
use super::subtraction::sub2;

/// Operand length, in words, up to which multiplication stays on the
/// schoolbook method.
pub const DEFAULT_KARATSUBA_THRESHOLD: usize = 1024;

static KARATSUBA_THRESHOLD: AtomicUsize = AtomicUsize::new(DEFAULT_KARATSUBA_THRESHOLD);

/// The process-wide Karatsuba threshold used by the `*` operators.
#[inline]
pub fn karatsuba_threshold() -> usize {
    KARATSUBA_THRESHOLD.load(Relaxed)
}

/// Replaces the process-wide Karatsuba threshold. Meant to be called once at
/// startup; products computed concurrently may use either value.
pub fn set_karatsuba_threshold(words: usize) {
    let previous = KARATSUBA_THRESHOLD.swap(words, Relaxed);
    debug!("karatsuba threshold changed from {previous} to {words} words");
}

/// Computes `a + b * c + carry`, returning the low word and leaving the high
/// word in `carry`. The result always fits in two words.
#[inline]
pub fn mac_with_carry<W: Word>(a: W, b: W, c: W, carry: &mut W) -> W {
    let (mut hi, lo) = b.full_mul(c);
    let (lo, c1) = lo.overflowing_add(a);
    let (lo, c2) = lo.overflowing_add(*carry);
    if c1 {
        hi = hi + W::one();
    }
    if c2 {
        hi = hi + W::one();
    }
    *carry = hi;
    lo
}

/// Multiply-accumulate with a single word: `acc += b * c`.
pub fn mac_digit<W: Word>(acc: &mut [W], b: &[W], c: W) {
    if c.is_zero() {
        return;
    }

    let mut carry = W::zero();
    let (a_lo, a_hi) = acc.split_at_mut(b.len());

    for (a, &b) in a_lo.iter_mut().zip(b) {
        *a = mac_with_carry(*a, b, c, &mut carry);
    }

    let mut a_hi = a_hi.iter_mut();
    let mut overflow = false;
    if !carry.is_zero() {
        let a = a_hi
            .next()
            .expect("carry overflow during multiplication!");
        *a = super::adc(*a, carry, &mut overflow);
    }
    while overflow {
        let a = a_hi
            .next()
            .expect("carry overflow during multiplication!");
        *a = super::adc(*a, W::zero(), &mut overflow);
    }
}

/// `a *= b` in place, returning the word carried out of the top.
pub fn scalar_mul<W: Word>(a: &mut [W], b: W) -> W {
    let mut carry = W::zero();
    for a in a.iter_mut() {
        *a = mac_with_carry(W::zero(), *a, b, &mut carry);
    }
    carry
}

/// Three argument multiply accumulate:
/// acc += b * c
///
/// `acc` must have room for `b.len() + c.len() + 1` words. Once the shorter
/// operand is longer than `threshold` words the product is split Karatsuba
/// style.
pub fn mac3<W: Word>(acc: &mut [W], b: &[W], c: &[W], threshold: usize) {
    let (x, y) = if b.len() < c.len() { (b, c) } else { (c, b) };

    match x.len() {
        0 => return,
        1 => return mac_digit(acc, y, x[0]),
        n if n <= threshold => {
            // Schoolbook, one row per word of the shorter operand.
            for (i, &xi) in x.iter().enumerate().rev() {
                mac_digit(&mut acc[i..], y, xi);
            }
            return;
        }
        _ => {}
    }

    if x.len() != y.len() {
        // Split the longer operand and multiply each half by the whole of
        // the shorter one.
        let mid = y.len().div_ceil(2);
        let (y0, y1) = y.split_at(mid);
        mac3(acc, x, y0, threshold);
        mac3(&mut acc[mid..], x, y1, threshold);
        return;
    }

    // Karatsuba, with x = x1·H + x0 and y = y1·H + y0:
    //
    //   x·y = x0·y0 + (x1·y0 + x0·y1)·H + x1·y1·H²
    //   x1·y0 + x0·y1 = x1·y1 + x0·y0 - (x1 - x0)·(y1 - y0)
    let half = x.len() / 2;
    let (x0, x1) = x.split_at(half);
    let (y0, y1) = y.split_at(half);

    let high = mul_vec(x1, y1, threshold);
    let low = mul_vec(x0, y0, threshold);

    let (x_sign, x_diff) = sub_sign(x1, x0);
    let (y_sign, y_diff) = sub_sign(y1, y0);
    let m = mul_vec(&x_diff, &y_diff, threshold);

    let mut cross = Vec::with_capacity(high.len().max(low.len()).max(m.len()) + 1);
    cross.extend_from_slice(&high);
    cross.resize(high.len().max(low.len()) + 1, W::zero());
    add2(&mut cross, &low);
    if x_sign == y_sign {
        sub2(&mut cross, &m);
    } else {
        let len = cross.len().max(m.len()) + 1;
        cross.resize(len, W::zero());
        add2(&mut cross, &m);
    }
    trim(&mut cross);

    add2(acc, &low);
    add2(&mut acc[half..], &cross);
    add2(&mut acc[2 * half..], &high);
}

/// `x * y` into a fresh, trimmed buffer.
fn mul_vec<W: Word>(x: &[W], y: &[W], threshold: usize) -> Vec<W> {
    let x = &x[..trimmed_len(x)];
    let y = &y[..trimmed_len(y)];
    if x.is_empty() || y.is_empty() {
        return Vec::new();
    }
    let mut prod = alloc::vec![W::zero(); x.len() + y.len() + 1];
    mac3(&mut prod, x, y, threshold);
    trim(&mut prod);
    prod
}

/// `|a - b|` together with the ordering of `a` against `b`.
fn sub_sign<W: Word>(a: &[W], b: &[W]) -> (Ordering, Vec<W>) {
    let a = &a[..trimmed_len(a)];
    let b = &b[..trimmed_len(b)];

    match cmp_slice(a, b) {
        Ordering::Greater => {
            let mut diff = a.to_vec();
            sub2(&mut diff, b);
            trim(&mut diff);
            (Ordering::Greater, diff)
        }
        Ordering::Less => {
            let mut diff = b.to_vec();
            sub2(&mut diff, a);
            trim(&mut diff);
            (Ordering::Less, diff)
        }
        Ordering::Equal => (Ordering::Equal, Vec::new()),
    }
}

/// Multiplies two digit slices with the process-wide Karatsuba threshold.
pub fn mul3(x: &[BigDigit], y: &[BigDigit]) -> BigUint {
    mul_slices(x, y, karatsuba_threshold())
}

/// Multiplies with an explicit Karatsuba threshold, in words. The product
/// does not depend on the threshold, only the running time does.
pub fn mul_with_threshold(x: &BigUint, y: &BigUint, threshold: usize) -> BigUint {
    mul_slices(&x.data, &y.data, threshold)
}

fn mul_slices(x: &[BigDigit], y: &[BigDigit], threshold: usize) -> BigUint {
    let x = &x[..trimmed_len(x)];
    let y = &y[..trimmed_len(y)];
    if x.is_empty() || y.is_empty() {
        return BigUint::zero();
    }

    // Single word operands multiply in place.
    let single = match (x, y) {
        ([d], other) | (other, [d]) => Some((*d, other)),
        _ => None,
    };
    if let Some((d, other)) = single {
        let mut prod = BigUint::from_words(other);
        let carry = scalar_mul(&mut prod.data[..], d);
        if carry != 0 {
            prod.data.push(carry);
        }
        return prod.normalized();
    }

    let mut prod = alloc::vec![0; x.len() + y.len() + 1];
    mac3(&mut prod, x, y, threshold);
    biguint_from_vec(prod)
}

impl Mul<&BigUint> for &BigUint {
    type Output = BigUint;

    #[inline]
    fn mul(self, other: &BigUint) -> BigUint {
        mul3(&self.data[..], &other.data[..])
    }
}

forward_all_binop_to_ref_ref!(impl Mul for BigUint, mul);

impl MulAssign<&BigUint> for BigUint {
    #[inline]
    fn mul_assign(&mut self, other: &BigUint) {
        *self = &*self * other;
    }
}

forward_val_assign!(impl MulAssign for BigUint, mul_assign);

impl CheckedMul for BigUint {
    #[inline]
    fn checked_mul(&self, v: &BigUint) -> Option<BigUint> {
        Some(self.mul(v))
    }
}
