//! Low-level algorithms for big integer arithmetic.
//!
//! This module re-exports the arithmetic primitives used by
//! [`BigUint`](crate::BigUint) and [`BigInt`](crate::BigInt), making them
//! available for direct use on word slices, together with the
//! number-theoretic algorithms built on the public arithmetic.

// The slice primitives live inside the `biguint` submodules where the
// operator impls use them; they are only widened here.

// --- addition ---
pub use crate::biguint::{__add2, adc, add2};

// --- subtraction ---
pub use crate::biguint::{__sub2, __sub2rev, sbb, sub2, sub2rev};

// --- multiplication ---
pub use crate::biguint::{mac_digit, mac_with_carry, mac3, mul3, mul_with_threshold, scalar_mul};

// --- division ---
pub use crate::biguint::{approximate_quotient, div_rem, div_rem_digit, div_rem_words, rem_digit};

// --- shift ---
pub use crate::biguint::{biguint_shl, biguint_shr};

// --- comparison ---
pub use crate::biguint::cmp_slice;

// --- two's complement view ---
pub use crate::bigint::twos_complement_word;

mod gcd;
mod mod_inverse;

pub use self::gcd::{extended_gcd, gcd, xgcd};
pub(crate) use self::gcd::signed_bezout;
pub use self::mod_inverse::mod_inverse;
