use zeroize::Zeroize;

use super::BigUint;

/// Overwrites every stored word, then leaves the value at zero.
impl Zeroize for BigUint {
    fn zeroize(&mut self) {
        self.data.as_mut_slice().zeroize();
        self.data.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_traits::Zero;

    #[test]
    fn test_zeroize_leaves_zero() {
        let mut n = BigUint::from_words(&[1, 2, 3, 4, 5, 6]);
        n.zeroize();
        assert!(n.is_zero());
    }
}
