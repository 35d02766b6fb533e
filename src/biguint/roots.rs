use num_traits::{One, Zero};

use super::BigUint;

/// Integer square root by Newton's method, starting from a power of two at
/// or above the root so the iterates decrease monotonically.
pub(super) fn sqrt(n: &BigUint) -> BigUint {
    if n.is_zero() || n.is_one() {
        return n.clone();
    }

    let mut x = BigUint::one() << n.bits().div_ceil(2);
    loop {
        let y = (&x + n / &x) >> 1u8;
        if y >= x {
            return x;
        }
        x = y;
    }
}

/// Integer `k`-th root, rounded down, by Newton's method from above.
pub(super) fn nth_root(n: &BigUint, k: u32) -> BigUint {
    assert!(k > 0, "root degree must be at least 1");
    match k {
        1 => return n.clone(),
        2 => return sqrt(n),
        _ => {}
    }
    if n.is_zero() || n.is_one() {
        return n.clone();
    }

    let bits = n.bits();
    if bits <= u64::from(k) {
        return BigUint::one();
    }

    let k_minus_one = k - 1;
    let mut x = BigUint::one() << bits.div_ceil(u64::from(k));
    loop {
        let y = (&x * k_minus_one + n / x.pow(k_minus_one)) / k;
        if y >= x {
            return x;
        }
        x = y;
    }
}
