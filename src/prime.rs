//! Miller-Rabin primality testing.
//!
//! Small inputs are settled by trial division, inputs below the largest
//! known strong pseudoprime to the first thirteen prime bases use those
//! bases as deterministic witnesses, and anything larger falls back to
//! random witnesses.

use log::trace;
use num_integer::Integer;
use num_traits::{One, Signed, ToPrimitive};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::bigrand::RandBigInt;
use crate::{BigInt, BigUint};

/// The primes used for trial division and as deterministic witnesses.
const SMALL_PRIMES: [u8; 13] = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41];

/// `STRONG_PSEUDOPRIMES[i]` is the smallest odd composite that passes the
/// strong probable prime test for every base in `SMALL_PRIMES[..=i]`.
const STRONG_PSEUDOPRIMES: [u128; 13] = [
    2_047,
    1_373_653,
    25_326_001,
    3_215_031_751,
    2_152_302_898_747,
    3_474_749_660_383,
    341_550_071_728_321,
    341_550_071_728_321,
    3_825_123_056_546_413_051,
    3_825_123_056_546_413_051,
    3_825_123_056_546_413_051,
    318_665_857_834_031_151_167_461,
    3_317_044_064_679_887_385_961_981,
];

/// Every composite below `41²` has a prime factor in `SMALL_PRIMES`.
const TRIAL_DIVISION_LIMIT: u32 = 41 * 41;

/// Miller-Rabin test of the odd `n > 2` against a single `base`.
///
/// Writes `n - 1 = d·2^s` with `d` odd; `n` passes when `base^d ≡ 1` or
/// `base^(d·2^r) ≡ -1 (mod n)` for some `r < s`.
pub fn is_strong_probable_prime(n: &BigUint, base: &BigUint) -> bool {
    assert!(
        n.is_odd() && *n > BigUint::from(2u8),
        "the strong probable prime test needs an odd number above two"
    );

    let n_minus_one = n - 1u8;
    let s = n_minus_one.trailing_zeros().unwrap_or(0);
    let d = &n_minus_one >> s;

    let mut x = base.modpow(&d, n);
    if x.is_one() || x == n_minus_one {
        return true;
    }

    for _ in 1..s {
        x = &x * &x % n;
        if x == n_minus_one {
            return true;
        }
        if x.is_one() {
            return false;
        }
    }

    false
}

/// Tests `n` for primality. Inputs below 3317044064679887385961981 are
/// decided exactly; larger ones are checked against `rounds` random
/// witnesses drawn from `rng`, so a composite slips through with
/// probability at most `4^-rounds`.
pub fn probably_prime_with_rng<R: Rng + ?Sized>(n: &BigUint, rounds: usize, rng: &mut R) -> bool {
    if n < &BigUint::from(2u8) {
        return false;
    }

    for &p in &SMALL_PRIMES {
        let p = BigUint::from(p);
        if *n == p {
            return true;
        }
        if n.is_multiple_of(&p) {
            return false;
        }
    }

    if *n < BigUint::from(TRIAL_DIVISION_LIMIT) {
        return true;
    }

    if let Some(small) = n.to_u128() {
        if let Some(count) = STRONG_PSEUDOPRIMES.iter().position(|&bound| small < bound) {
            trace!("deterministic primality test with {} witnesses", count + 1);
            return SMALL_PRIMES[..=count]
                .iter()
                .all(|&base| is_strong_probable_prime(n, &BigUint::from(base)));
        }
    }

    trace!("probabilistic primality test with {rounds} random witnesses");
    let witness_range = n - 3u8;
    (0..rounds).all(|_| {
        let base = rng.gen_biguint_below(&witness_range) + 2u8;
        is_strong_probable_prime(n, &base)
    })
}

/// [`probably_prime_with_rng`] with a generator seeded from the low word of
/// `n`, so the answer for a given input is reproducible.
pub fn probably_prime(n: &BigUint, rounds: usize) -> bool {
    let mut rng = StdRng::seed_from_u64(u64::from(n.get_word(0)));
    probably_prime_with_rng(n, rounds, &mut rng)
}

impl BigUint {
    /// Returns `true` if `self` is prime; see [`probably_prime`].
    pub fn is_prime(&self, rounds: usize) -> bool {
        probably_prime(self, rounds)
    }
}

impl BigInt {
    /// Returns `true` if `self` is a positive prime; zero and negative
    /// values are never prime.
    pub fn is_prime(&self, rounds: usize) -> bool {
        self.is_positive() && self.magnitude().is_prime(rounds)
    }
}
