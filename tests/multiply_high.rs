//! Multiply-high and big-multiply checked against arbitrary precision.
//!
//! `num::BigInt` computes the exact product; the high word is the product
//! shifted right by 64 (flooring, so negative products keep their sign) and
//! the low word is the product masked to 64 bits.

use num::{BigInt, ToPrimitive};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use simdport::bits::{self, soft};

const SEED: u64 = 0x5EED_0F_B16;
const ITERATIONS: usize = 20_000;

fn oracle_signed(a: i64, b: i64) -> (i64, u64) {
    let product = BigInt::from(a) * BigInt::from(b);
    let high = (&product >> 64u32).to_i64().expect("high word fits in i64");
    let low = (&product & BigInt::from(u64::MAX))
        .to_u64()
        .expect("masked low word fits in u64");
    (high, low)
}

fn oracle_unsigned(a: u64, b: u64) -> (u64, u64) {
    let product = BigInt::from(a) * BigInt::from(b);
    let high = (&product >> 64u32).to_u64().expect("high word fits in u64");
    let low = (&product & BigInt::from(u64::MAX))
        .to_u64()
        .expect("masked low word fits in u64");
    (high, low)
}

/// Operands that stress the sign handling and the carry out of the low word.
fn edge_values() -> Vec<i64> {
    vec![
        0,
        1,
        -1,
        2,
        -2,
        i64::MAX,
        i64::MIN,
        i64::MIN + 1,
        i64::MAX - 1,
        1 << 32,
        -(1 << 32),
        (1 << 32) - 1,
        -((1 << 32) - 1),
        0x7FFF_FFFF,
        -0x8000_0000,
    ]
}

#[test]
fn test_signed_edge_grid_matches_bigint() {
    for &a in &edge_values() {
        for &b in &edge_values() {
            let expected = oracle_signed(a, b);
            assert_eq!(soft::big_mul_i64(a, b), expected, "soft big_mul({a}, {b})");
            assert_eq!(bits::big_mul_i64(a, b), expected, "big_mul({a}, {b})");
            assert_eq!(soft::multiply_high_i64(a, b), expected.0, "soft mulhi({a}, {b})");
            assert_eq!(bits::multiply_high_i64(a, b), expected.0, "mulhi({a}, {b})");
        }
    }
}

#[test]
fn test_unsigned_edge_grid_matches_bigint() {
    for &a in &edge_values() {
        for &b in &edge_values() {
            let (a, b) = (a as u64, b as u64);
            let expected = oracle_unsigned(a, b);
            assert_eq!(soft::big_mul_u64(a, b), expected, "soft big_mul({a}, {b})");
            assert_eq!(bits::big_mul_u64(a, b), expected, "big_mul({a}, {b})");
            assert_eq!(bits::multiply_high_u64(a, b), expected.0);
        }
    }
}

#[test]
fn test_documented_critical_cases() {
    assert_eq!(bits::multiply_high_i64(-1, -1), 0);
    assert_eq!(bits::multiply_high_i64(i64::MIN, -1), 0);
    assert_eq!(bits::multiply_high_i64(i64::MIN, 1), -1);
    assert_eq!(bits::multiply_high_i64(i64::MIN, 2), -1);
    assert_eq!(
        bits::multiply_high_i64(i64::MAX, i64::MAX),
        0x3FFF_FFFF_FFFF_FFFF
    );
    assert_eq!(bits::multiply_high_u64(u64::MAX, u64::MAX), u64::MAX - 1);
}

#[test]
fn test_random_signed_products() {
    let mut rng = StdRng::seed_from_u64(SEED);

    for _ in 0..ITERATIONS {
        let a: i64 = rng.random();
        let b: i64 = rng.random();
        let expected = oracle_signed(a, b);
        assert_eq!(soft::big_mul_i64(a, b), expected, "a = {a}, b = {b}");

        // The native product agrees as well
        let wide = a as i128 * b as i128;
        assert_eq!(expected, ((wide >> 64) as i64, wide as u64));
    }
}

#[test]
fn test_random_unsigned_products() {
    let mut rng = StdRng::seed_from_u64(SEED ^ 0xFFFF);

    for _ in 0..ITERATIONS {
        let a: u64 = rng.random();
        let b: u64 = rng.random();
        let expected = oracle_unsigned(a, b);
        assert_eq!(soft::big_mul_u64(a, b), expected, "a = {a}, b = {b}");

        let wide = a as u128 * b as u128;
        assert_eq!(expected, ((wide >> 64) as u64, wide as u64));
    }
}

#[test]
fn test_random_small_magnitudes() {
    // Products that fit in 64 bits: the high word is pure sign extension
    let mut rng = StdRng::seed_from_u64(SEED.rotate_left(17));

    for _ in 0..ITERATIONS {
        let a: i64 = rng.random_range(-(1 << 31)..(1 << 31));
        let b: i64 = rng.random_range(-(1 << 31)..(1 << 31));
        let high = soft::multiply_high_i64(a, b);
        assert_eq!(high, if a * b < 0 { -1 } else { 0 }, "a = {a}, b = {b}");
    }
}
