//! Bit tricks lowered to the target's own instructions.
//!
//! Compiled only when `build.rs` selected a tier that supplies them; see
//! [`crate::tier`].

#[inline(always)]
pub fn leading_zero_count_u32(value: u32) -> u32 {
    value.leading_zeros()
}

#[inline(always)]
pub fn leading_zero_count_u64(value: u64) -> u32 {
    value.leading_zeros()
}

#[inline(always)]
pub fn leading_sign_count_i32(value: i32) -> u32 {
    (value ^ (value >> 31)).leading_zeros() - 1
}

#[inline(always)]
pub fn leading_sign_count_i64(value: i64) -> u32 {
    (value ^ (value >> 63)).leading_zeros() - 1
}

#[inline(always)]
pub fn reverse_element_bits_u32(value: u32) -> u32 {
    value.reverse_bits()
}

#[inline(always)]
pub fn reverse_element_bits_u64(value: u64) -> u64 {
    value.reverse_bits()
}

#[inline(always)]
pub fn pop_count_u32(value: u32) -> u32 {
    value.count_ones()
}

#[inline(always)]
pub fn pop_count_u64(value: u64) -> u32 {
    value.count_ones()
}

#[inline(always)]
pub fn trailing_zero_count_u32(value: u32) -> u32 {
    value.trailing_zeros()
}

#[inline(always)]
pub fn trailing_zero_count_u64(value: u64) -> u32 {
    value.trailing_zeros()
}

#[cfg(wave2)]
#[inline(always)]
pub fn big_mul_u64(a: u64, b: u64) -> (u64, u64) {
    let product = a as u128 * b as u128;
    ((product >> 64) as u64, product as u64)
}

#[cfg(wave2)]
#[inline(always)]
pub fn big_mul_i64(a: i64, b: i64) -> (i64, u64) {
    let product = a as i128 * b as i128;
    ((product >> 64) as i64, product as u64)
}

#[cfg(wave2)]
#[inline(always)]
pub fn multiply_high_u64(a: u64, b: u64) -> u64 {
    ((a as u128 * b as u128) >> 64) as u64
}

#[cfg(wave2)]
#[inline(always)]
pub fn multiply_high_i64(a: i64, b: i64) -> i64 {
    ((a as i128 * b as i128) >> 64) as i64
}
