//! Fixture tables shared by the integration tests. Operands are little-endian
//! `u32` digits, so the tables read the same on every word width.
#![allow(dead_code)]

pub const N1: u32 = u32::MAX;
pub const N2: u32 = u32::MAX - 1;
pub const H: u32 = 1 << 31;

pub const SUM_TRIPLES: &[(&[u32], &[u32], &[u32])] = &[
    (&[], &[], &[]),
    (&[], &[1], &[1]),
    (&[1], &[1], &[2]),
    (&[1], &[1, 1], &[2, 1]),
    (&[1], &[N1], &[0, 1]),
    (&[1], &[N1, N1], &[0, 0, 1]),
    (&[N1, N1], &[N1, N1], &[N2, N1, 1]),
    (&[1, 1, 1], &[N1, N1], &[0, 1, 2]),
    (&[2, 2, 1], &[N1, N2], &[1, 1, 2]),
    (&[1, 2, 2, 1], &[N1, N2], &[0, 1, 3, 1]),
];

pub const MUL_TRIPLES: &[(&[u32], &[u32], &[u32])] = &[
    (&[], &[], &[]),
    (&[], &[1], &[]),
    (&[2], &[], &[]),
    (&[1], &[1], &[1]),
    (&[2], &[3], &[6]),
    (&[1], &[1, 1, 1], &[1, 1, 1]),
    (&[1, 2, 3], &[3], &[3, 6, 9]),
    (&[1, 1, 1], &[N1], &[N1, N1, N1]),
    (&[1, 2, 3], &[N1], &[N1, N2, N2, 2]),
    (&[1, 2, 3, 4], &[N1], &[N1, N2, N2, N2, 3]),
    (&[N1], &[N1], &[1, N2]),
    (&[N1, N1], &[N1], &[1, N1, N2]),
    (&[N1, N1, N1], &[N1], &[1, N1, N1, N2]),
    (&[N1, N1, N1, N1], &[N1], &[1, N1, N1, N1, N2]),
    (&[H], &[2], &[0, 1]),
    (&[0, H], &[2], &[0, 0, 1]),
    (&[1, 2], &[1, 2, 3], &[1, 4, 7, 6]),
    (&[N1, N1], &[N1, N1, N1], &[1, 0, N1, N2, N1]),
    (&[N1, N1, N1], &[N1, N1, N1, N1], &[1, 0, 0, N1, N2, N1, N1]),
    (&[0, 0, 1], &[1, 2, 3], &[0, 0, 1, 2, 3]),
    (&[0, 0, 1], &[0, 0, 0, 1], &[0, 0, 0, 0, 0, 1]),
];

pub const DIV_REM_QUADRUPLES: &[(&[u32], &[u32], &[u32], &[u32])] = &[
    (&[1], &[2], &[], &[1]),
    (&[3], &[2], &[1], &[1]),
    (&[1, 1], &[2], &[H], &[1]),
    (&[1, 1, 1], &[2], &[H, H], &[1]),
    (&[0, 1], &[N1], &[1], &[1]),
    (&[N1, N1], &[N2], &[2, 1], &[3]),
    (&[0, 0, 0, 1], &[3, 0, 1], &[N1], &[3, 4294967293]),
    (&[N1, N1, N1, N1], &[1, 0, H], &[N1, 1], &[0, N2, 2147483647]),
    (&[7, 8, 9, 10, 11], &[N1, N1], &[20, 10, 11], &[27, 18]),
    (&[1, 2, 3, 4, 5, 6, 7, 8], &[1, 2, 3, 4, 5], &[1133871366, 3092376453, 2576980377, 1], &[3161095931, 3229815408, 721554508, 2508260903, 1]),
    (&[N1, N1, N1, N1, N1, N1, N1, N1], &[N1, N1, N1, 1], &[0, 1073741824, 0, 0, H], &[N1, 1073741823]),
];

pub const STR_RADIX_CASES: &[(&[u32], &[(u32, &str)])] = &[
    (&[], &[(2, "0"), (5, "0"), (10, "0"), (16, "0"), (36, "0")]),
    (&[1], &[(2, "1"), (5, "1"), (10, "1"), (16, "1"), (36, "1")]),
    (&[N1], &[(2, "11111111111111111111111111111111"), (5, "32244002423140"), (10, "4294967295"), (16, "ffffffff"), (36, "1z141z3")]),
    (&[0, 1], &[(2, "100000000000000000000000000000000"), (5, "32244002423141"), (10, "4294967296"), (16, "100000000"), (36, "1z141z4")]),
    (&[N1, N1], &[(2, "1111111111111111111111111111111111111111111111111111111111111111"), (5, "2214220303114400424121122430"), (10, "18446744073709551615"), (16, "ffffffffffffffff"), (36, "3w5e11264sgsf")]),
    (&[1, 2, 3, 4, 5, 6, 7, 8], &[(2, "100000000000000000000000000000000111000000000000000000000000000001100000000000000000000000000000010100000000000000000000000000000100000000000000000000000000000000110000000000000000000000000000001000000000000000000000000000000001"), (5, "32020443142210142413224332021024030224241313410022112100114432340114321241401322022323112244234141"), (10, "215679573381144830513811895868694400695694534256768036697775454289921"), (16, "800000007000000060000000500000004000000030000000200000001"), (36, "pvbwrlavvdzfudr0dyy52pqde44utjn1htoql04x3f29")]),
    (&[2309737967, 19088743, 3735928559], &[(2, "110111101010110110111110111011110000000100100011010001010110011110001001101010111100110111101111"), (5, "122420411223334100131334010401142431110424"), (10, "68915718005617500482515488239"), (16, "deadbeef0123456789abcdef"), (36, "6oj7k6k0e0yzx658flb")]),
];
