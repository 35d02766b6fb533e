use bigarith::{BigInt, BigUint, Sign, ToBigInt};

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use num_integer::Integer;
use num_traits::{FromPrimitive, Num, One, Signed, ToPrimitive, Zero};

mod consts;
use crate::consts::*;

const SAMPLES: [i64; 14] = [
    0,
    1,
    -1,
    4,
    -4,
    7,
    -7,
    u32::MAX as i64,
    -(u32::MAX as i64),
    1 << 40,
    -(1 << 40) + 3,
    i64::MAX,
    i64::MIN,
    i64::MIN + 1,
];

fn big(n: i128) -> BigInt {
    BigInt::from(n)
}

fn hash<T: Hash>(x: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    x.hash(&mut hasher);
    hasher.finish()
}

#[test]
fn test_from_biguint() {
    let n = BigInt::from_biguint(Sign::Minus, BigUint::zero());
    assert_eq!(n.sign(), Sign::NoSign);
    assert_eq!(n, BigInt::zero());

    let n = BigInt::from_biguint(Sign::NoSign, BigUint::from(5u8));
    assert!(n.is_zero());

    let n = BigInt::new(Sign::Minus, vec![1, 2]);
    assert_eq!(n.magnitude(), &BigUint::from_slice(&[1, 2]));
    assert_eq!(n.clone().into_parts(), (Sign::Minus, BigUint::from_slice(&[1, 2])));
    assert_eq!(-n, BigInt::from_slice(Sign::Plus, &[1, 2]));
}

#[test]
fn test_no_negative_zero() {
    let a = BigInt::from(5u8);
    let zero = &a - &a;
    assert_eq!(zero.sign(), Sign::NoSign);
    assert_eq!((-&zero).sign(), Sign::NoSign);
    assert_eq!((BigInt::from(-3i8) * BigInt::zero()).sign(), Sign::NoSign);
    assert_eq!((BigInt::from(-3i8) % BigInt::from(3u8)).sign(), Sign::NoSign);
    assert_eq!(BigInt::from_str("-0"), Ok(BigInt::zero()));
}

#[test]
fn test_arithmetic_matches_i128() {
    for &a in &SAMPLES {
        for &b in &SAMPLES {
            let (a, b) = (i128::from(a), i128::from(b));
            let (x, y) = (big(a), big(b));

            assert_eq!(x.cmp(&y), a.cmp(&b), "{a} cmp {b}");
            assert_eq!(&x + &y, big(a + b), "{a} + {b}");
            assert_eq!(&x - &y, big(a - b), "{a} - {b}");
            assert_eq!(&x * &y, big(a * b), "{a} * {b}");

            if b != 0 {
                assert_eq!(&x / &y, big(a / b), "{a} / {b}");
                assert_eq!(&x % &y, big(a % b), "{a} % {b}");
                assert_eq!(x.div_rem(&y), (big(a / b), big(a % b)));
                assert_eq!(x.div_floor(&y), big(Integer::div_floor(&a, &b)), "{a} div_floor {b}");
                assert_eq!(x.mod_floor(&y), big(Integer::mod_floor(&a, &b)), "{a} mod_floor {b}");
                assert_eq!(x.div_euclid(&y), big(a.div_euclid(b)), "{a} div_euclid {b}");
                assert_eq!(x.rem_euclid(&y), big(a.rem_euclid(b)), "{a} rem_euclid {b}");
            }

            assert_eq!(x.gcd(&y), big(Integer::gcd(&a, &b)), "gcd({a}, {b})");
        }
    }
}

#[test]
fn test_bitwise_matches_i128() {
    for &a in &SAMPLES {
        for &b in &SAMPLES {
            let (a, b) = (i128::from(a), i128::from(b));
            let (x, y) = (big(a), big(b));

            assert_eq!(&x & &y, big(a & b), "{a} & {b}");
            assert_eq!(&x | &y, big(a | b), "{a} | {b}");
            assert_eq!(&x ^ &y, big(a ^ b), "{a} ^ {b}");
        }

        let a = i128::from(a);
        assert_eq!(!big(a), big(!a), "!{a}");
        for bit in [0u64, 1, 31, 32, 63, 64, 100] {
            assert_eq!(big(a).bit(bit), (a >> bit) & 1 == 1, "bit {bit} of {a}");
        }
    }
}

#[test]
fn test_shift_matches_i128() {
    for &a in &SAMPLES {
        let a = i128::from(a);
        let x = big(a);
        for shift in [0u32, 1, 3, 31, 32, 33, 63] {
            assert_eq!(&x << shift, big(a << shift), "{a} << {shift}");
            assert_eq!(&x >> shift, big(a >> shift), "{a} >> {shift}");
        }
        assert_eq!(&x >> 100u32, big(a >> 100), "{a} >> 100");
    }

    // rounds toward negative infinity
    assert_eq!(BigInt::from(-7i8) >> 1u8, BigInt::from(-4i8));
    assert_eq!(BigInt::from(-8i8) >> 1u8, BigInt::from(-4i8));
    assert_eq!(BigInt::from(-1i8) >> 1000u32, BigInt::from(-1i8));
}

#[test]
fn test_remainder_scenarios() {
    assert_eq!(BigInt::from(-7i8) % BigInt::from(4u8), BigInt::from(-3i8));
    assert_eq!(BigInt::from(7u8) % BigInt::from(-4i8), BigInt::from(3u8));
    assert_eq!(BigInt::from(-22i8).rem_euclid(&BigInt::from(5u8)), BigInt::from(3u8));
    assert_eq!(BigInt::from(-22i8).div_euclid(&BigInt::from(5u8)), BigInt::from(-5i8));
    assert_eq!(BigInt::from(-22i8).rem_euclid(&BigInt::from(-5i8)), BigInt::from(3u8));
}

#[test]
#[should_panic]
fn test_div_by_zero() {
    let _ = BigInt::one() / BigInt::zero();
}

#[test]
fn test_sum_triples_signed() {
    for &(a_vec, b_vec, c_vec) in SUM_TRIPLES {
        let a = BigInt::from_slice(Sign::Plus, a_vec);
        let b = BigInt::from_slice(Sign::Plus, b_vec);
        let c = BigInt::from_slice(Sign::Plus, c_vec);

        assert_eq!(&a + &b, c);
        assert_eq!(&c - &a, b);
        assert_eq!(&a - &c, -&b);
        assert_eq!((-&a) + (-&b), -&c);
        assert_eq!(&(-&c) + &a, -&b);
    }
}

#[test]
fn test_mul_div_triples_signed() {
    for &(a_vec, b_vec, c_vec) in MUL_TRIPLES {
        let a = BigInt::from_slice(Sign::Plus, a_vec);
        let b = BigInt::from_slice(Sign::Plus, b_vec);
        let c = BigInt::from_slice(Sign::Plus, c_vec);

        assert_eq!(&a * &b, c);
        assert_eq!(-&a * &b, -&c);
        assert_eq!(-&a * -&b, c);
    }

    for &(a_vec, b_vec, c_vec, d_vec) in DIV_REM_QUADRUPLES {
        let a = BigInt::from_slice(Sign::Plus, a_vec);
        let b = BigInt::from_slice(Sign::Plus, b_vec);
        let c = BigInt::from_slice(Sign::Plus, c_vec);
        let d = BigInt::from_slice(Sign::Plus, d_vec);

        assert_eq!((-&a).div_rem(&b), (-&c, -&d));
        assert_eq!(a.div_rem(&-&b), (-&c, d.clone()));
        let (q, r) = (-&a).div_mod_floor(&b);
        assert_eq!(&q * &b + &r, -&a);
        assert!(!r.is_negative());
    }
}

#[test]
fn test_scalar_ops() {
    let n = BigInt::from(-10i8);
    assert_eq!(&n + 3u8, BigInt::from(-7i8));
    assert_eq!(&n - -3i32, BigInt::from(-7i8));
    assert_eq!(&n * -2i64, BigInt::from(20u8));
    assert_eq!(&n / 3usize, BigInt::from(-3i8));
    assert_eq!(&n % 3i16, BigInt::from(-1i8));
    assert_eq!(5i32 - &n, BigInt::from(15u8));

    let mut m = n.clone();
    m += 11u32;
    assert!(m.is_one());
}

#[test]
fn test_signed_traits() {
    let n = BigInt::from(-12i8);
    assert_eq!(n.abs(), BigInt::from(12u8));
    assert_eq!(n.signum(), BigInt::from(-1i8));
    assert_eq!(BigInt::zero().signum(), BigInt::zero());
    assert!(n.is_negative());
    assert!(!n.is_positive());
    assert_eq!(Signed::abs_sub(&BigInt::from(3u8), &n), BigInt::from(15u8));
    assert_eq!(n.to_biguint(), None);
    assert_eq!(n.abs().to_biguint(), Some(BigUint::from(12u8)));
}

#[test]
fn test_hash_matches_biguint() {
    let a = BigInt::from(12345u32);
    assert_eq!(hash(&a), hash(&BigUint::from(12345u32)));
    assert_eq!(hash(&BigInt::zero()), hash(&BigUint::zero()));
    assert_ne!(hash(&a), hash(&-&a));
}

#[test]
fn test_parse() {
    assert_eq!(BigInt::from_str("-123"), Ok(BigInt::from(-123i32)));
    assert_eq!(BigInt::from_str("+1_234"), Ok(BigInt::from(1234u32)));
    assert_eq!(BigInt::from_str_radix("-FF", 16), Ok(BigInt::from(-255i32)));

    assert!(BigInt::from_str("").unwrap_err().is_empty());
    for bad in ["+", "-", "--1", "+-1", "-_1", "1-", "12 "] {
        let err = BigInt::from_str(bad).unwrap_err();
        assert!(!err.is_empty(), "{bad:?}");
    }
    assert_eq!(BigInt::parse_bytes(b"-zz", 36), Some(BigInt::from(-1295i32)));
}

#[test]
fn test_to_str_radix() {
    for &(digits, cases) in STR_RADIX_CASES {
        let n = BigInt::from_slice(Sign::Plus, digits);
        for &(radix, s) in cases {
            assert_eq!(n.to_str_radix(radix), s);
            if !n.is_zero() {
                let negative = format!("-{s}");
                assert_eq!((-&n).to_str_radix(radix), negative);
                assert_eq!(BigInt::from_str_radix(&negative, radix), Ok(-&n));
            }
        }
    }
    assert_eq!(BigInt::from(-255i32).to_str_radix_upper(16), "-FF");
}

#[test]
fn test_formatting() {
    let n = BigInt::from(-255i32);
    assert_eq!(format!("{n}"), "-255");
    assert_eq!(format!("{n:x}"), "-ff");
    assert_eq!(format!("{n:#X}"), "-0xFF");
    assert_eq!(format!("{n:b}"), "-11111111");
    assert_eq!(format!("{n:>6}"), "  -255");
    assert_eq!(format!("{n:06}"), "-00255");
    assert_eq!(format!("{:+}", BigInt::from(5u8)), "+5");
    assert_eq!(format!("{:?}", BigInt::from(-1i8)), "-1");
}

#[test]
fn test_bytes() {
    let n = BigInt::from(-0x0102i32);
    assert_eq!(n.to_bytes_be(), (Sign::Minus, vec![1, 2]));
    assert_eq!(n.to_bytes_le(), (Sign::Minus, vec![2, 1]));
    assert_eq!(BigInt::from_bytes_be(Sign::Minus, &[1, 2]), n);
    assert_eq!(BigInt::from_bytes_le(Sign::Minus, &[2, 1]), n);
    assert_eq!(BigInt::from_bytes_be(Sign::Minus, &[0, 0]), BigInt::zero());
}

#[test]
fn test_sign_magnitude_bytes() {
    let n = BigInt::from(-258i32);
    assert_eq!(n.to_sign_magnitude_bytes(), vec![1, 1, 2]);
    assert_eq!(BigInt::from_sign_magnitude_bytes(&[1, 1, 2]), n);
    assert_eq!(BigInt::from(258u32).to_sign_magnitude_bytes(), vec![0, 1, 2]);
    assert_eq!(BigInt::zero().to_sign_magnitude_bytes(), vec![0]);
    assert_eq!(BigInt::from_sign_magnitude_bytes(&[1]), BigInt::zero());
    assert_eq!(BigInt::from_sign_magnitude_bytes(&[7, 3]), BigInt::from(-3i8));

    for &a in &SAMPLES {
        let x = BigInt::from(a);
        assert_eq!(BigInt::from_sign_magnitude_bytes(&x.to_sign_magnitude_bytes()), x);
    }
}

#[test]
#[should_panic]
fn test_sign_magnitude_empty() {
    let _ = BigInt::from_sign_magnitude_bytes(&[]);
}

#[test]
fn test_primitive_conversions() {
    for &a in &SAMPLES {
        let x = BigInt::from(a);
        assert_eq!(x.to_i64(), Some(a));
        assert_eq!(x.to_i128(), Some(i128::from(a)));
        assert_eq!(x.to_u64(), u64::try_from(a).ok());
        assert_eq!(i64::try_from(&x), Ok(a));
    }

    assert_eq!(BigInt::from(i128::MIN).to_i128(), Some(i128::MIN));
    assert_eq!((BigInt::from(i128::MIN) - 1u8).to_i128(), None);
    assert_eq!(BigInt::from(u128::MAX).to_u128(), Some(u128::MAX));

    assert_eq!(BigInt::from_f64(-2.75), Some(BigInt::from(-2i8)));
    assert_eq!(BigInt::from_f64(f64::INFINITY), None);
    assert_eq!(BigInt::from(-3i8).to_f64(), Some(-3.0));
    assert_eq!((-1.5f64).to_bigint(), Some(BigInt::from(-1i8)));
    assert_eq!(BigInt::from(BigUint::from(9u8)), BigInt::from(9u8));

    let err = i8::try_from(BigInt::from(-200i32)).unwrap_err();
    assert_eq!(err.into_original(), BigInt::from(-200i32));
}

#[test]
fn test_bit_ops() {
    let mut n = BigInt::from(-8i8);
    assert!(!n.bit(0));
    assert!(n.bit(3));
    assert!(n.bit(1000));
    assert_eq!(n.trailing_zeros(), Some(3));
    assert_eq!(n.bits(), 4);

    n.set_bit(0, true);
    assert_eq!(n, BigInt::from(-7i8));
    n.set_bit(200, false);
    assert_eq!(n, BigInt::from(-7i8) - (BigInt::one() << 200u32));

    let mut p = BigInt::zero();
    p.set_bit(70, true);
    assert_eq!(p, BigInt::one() << 70u32);
    p.set_bit(70, false);
    assert_eq!(p.sign(), Sign::NoSign);
}

#[test]
fn test_pow() {
    assert_eq!(BigInt::from(-2i8).pow(63), BigInt::from(i64::MIN));
    assert_eq!(BigInt::from(-3i8).pow(4), BigInt::from(81u8));
    assert_eq!(BigInt::from(10u8).pow(20).to_string(), "100000000000000000000");
}

#[test]
fn test_sum_product() {
    let nums: Vec<BigInt> = (-5i32..=5).filter(|&n| n != 0).map(BigInt::from).collect();
    let sum: BigInt = nums.iter().sum();
    assert!(sum.is_zero());
    let product: BigInt = nums.iter().product();
    assert_eq!(product, BigInt::from(-14400i32));
    let odd: BigInt = nums[..3].iter().product();
    assert_eq!(odd, BigInt::from(-60i32));
}
