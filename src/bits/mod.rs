//! Bit-manipulation primitives.
//!
//! The functions exported here are the tier-selected symbols: each name
//! resolves to exactly one definition, from [`native`] when the build's tier
//! supplies it and from [`soft`] otherwise. Both definitions are bit-for-bit
//! identical in result. [`soft`] stays public so the fallback can be exercised
//! and benchmarked on any target.
//!
//! | Symbols | Native from |
//! |---------|-------------|
//! | leading zero/sign count, bit reversal, pop count, trailing zero count | [`Tier::BitIntrinsics`](crate::tier::Tier::BitIntrinsics) |
//! | `big_mul_*`, `multiply_high_*` | [`Tier::WideMultiply`](crate::tier::Tier::WideMultiply) |

pub mod soft;

#[cfg(wave1)]
pub mod native;

#[cfg(not(wave1))]
pub use soft::{
    leading_sign_count_i32, leading_sign_count_i64, leading_zero_count_u32,
    leading_zero_count_u64, pop_count_u32, pop_count_u64, reverse_element_bits_u32,
    reverse_element_bits_u64, trailing_zero_count_u32, trailing_zero_count_u64,
};

#[cfg(wave1)]
pub use native::{
    leading_sign_count_i32, leading_sign_count_i64, leading_zero_count_u32,
    leading_zero_count_u64, pop_count_u32, pop_count_u64, reverse_element_bits_u32,
    reverse_element_bits_u64, trailing_zero_count_u32, trailing_zero_count_u64,
};

#[cfg(not(wave2))]
pub use soft::{big_mul_i64, big_mul_u64, multiply_high_i64, multiply_high_u64};

#[cfg(wave2)]
pub use native::{big_mul_i64, big_mul_u64, multiply_high_i64, multiply_high_u64};

/// Floor of the base-2 logarithm; 0 for zero, as the hardware sequence
/// `31 - lzcnt(x | 1)` gives.
#[inline]
pub fn log2_u32(value: u32) -> u32 {
    31 - leading_zero_count_u32(value | 1)
}

/// Floor of the base-2 logarithm; 0 for zero.
#[inline]
pub fn log2_u64(value: u64) -> u32 {
    63 - leading_zero_count_u64(value | 1)
}

#[inline]
pub fn is_pow2_u32(value: u32) -> bool {
    value != 0 && value & (value - 1) == 0
}

#[inline]
pub fn is_pow2_u64(value: u64) -> bool {
    value != 0 && value & (value - 1) == 0
}

#[inline]
pub fn reverse_element_bits_i32(value: i32) -> i32 {
    reverse_element_bits_u32(value as u32) as i32
}

#[inline]
pub fn reverse_element_bits_i64(value: i64) -> i64 {
    reverse_element_bits_u64(value as u64) as i64
}
