//! Software bit tricks.
//!
//! Every function here computes its result with shifts, masks and 32-bit
//! partial products only, so it is exact on targets with no native support.
//! They are always compiled: the tier-selected symbols in [`crate::bits`]
//! resolve to them when the native tier is absent, and tests cross-check them
//! against the core intrinsics on every build.

/// Leading zero bits of `value`; 32 for zero.
///
/// Binary search by folding: if the top half is empty, count it and shift the
/// value up, then repeat on the next narrower half.
#[inline]
pub fn leading_zero_count_u32(value: u32) -> u32 {
    let mut x = value;
    let mut count = 0;

    let shift = (((x >> 16) == 0) as u32) << 4;
    count += shift;
    x <<= shift;

    let shift = (((x >> 24) == 0) as u32) << 3;
    count += shift;
    x <<= shift;

    let shift = (((x >> 28) == 0) as u32) << 2;
    count += shift;
    x <<= shift;

    let shift = (((x >> 30) == 0) as u32) << 1;
    count += shift;
    x <<= shift;

    let shift = ((x >> 31) == 0) as u32;
    count += shift;
    x <<= shift;

    // Only a zero input still has an empty top bit here
    count + ((x >> 31) ^ 1)
}

/// Leading zero bits of `value`; 64 for zero.
#[inline]
pub fn leading_zero_count_u64(value: u64) -> u32 {
    let mut x = value;
    let mut count = 0;

    let shift = (((x >> 32) == 0) as u32) << 5;
    count += shift;
    x <<= shift;

    let shift = (((x >> 48) == 0) as u32) << 4;
    count += shift;
    x <<= shift;

    let shift = (((x >> 56) == 0) as u32) << 3;
    count += shift;
    x <<= shift;

    let shift = (((x >> 60) == 0) as u32) << 2;
    count += shift;
    x <<= shift;

    let shift = (((x >> 62) == 0) as u32) << 1;
    count += shift;
    x <<= shift;

    let shift = ((x >> 63) == 0) as u32;
    count += shift;
    x <<= shift;

    count + ((x >> 63) as u32 ^ 1)
}

/// Bits below the sign bit that are equal to it.
#[inline]
pub fn leading_sign_count_i32(value: i32) -> u32 {
    let magnitude = if value < 0 { !value } else { value };
    leading_zero_count_u32(magnitude as u32) - 1
}

/// Bits below the sign bit that are equal to it.
#[inline]
pub fn leading_sign_count_i64(value: i64) -> u32 {
    let magnitude = if value < 0 { !value } else { value };
    leading_zero_count_u64(magnitude as u64) - 1
}

/// Reverses the bit order by swapping adjacent 1-, 2-, 4-, 8- and 16-bit groups.
#[inline]
pub fn reverse_element_bits_u32(value: u32) -> u32 {
    let mut x = value;
    x = ((x >> 1) & 0x5555_5555) | ((x & 0x5555_5555) << 1);
    x = ((x >> 2) & 0x3333_3333) | ((x & 0x3333_3333) << 2);
    x = ((x >> 4) & 0x0F0F_0F0F) | ((x & 0x0F0F_0F0F) << 4);
    x = ((x >> 8) & 0x00FF_00FF) | ((x & 0x00FF_00FF) << 8);
    (x >> 16) | (x << 16)
}

/// Same swap ladder as the 32-bit version with one more rung.
#[inline]
pub fn reverse_element_bits_u64(value: u64) -> u64 {
    let mut x = value;
    x = ((x >> 1) & 0x5555_5555_5555_5555) | ((x & 0x5555_5555_5555_5555) << 1);
    x = ((x >> 2) & 0x3333_3333_3333_3333) | ((x & 0x3333_3333_3333_3333) << 2);
    x = ((x >> 4) & 0x0F0F_0F0F_0F0F_0F0F) | ((x & 0x0F0F_0F0F_0F0F_0F0F) << 4);
    x = ((x >> 8) & 0x00FF_00FF_00FF_00FF) | ((x & 0x00FF_00FF_00FF_00FF) << 8);
    x = ((x >> 16) & 0x0000_FFFF_0000_FFFF) | ((x & 0x0000_FFFF_0000_FFFF) << 16);
    (x >> 32) | (x << 32)
}

/// Set bits, counted in parallel across 2-, 4- and 8-bit fields.
#[inline]
pub fn pop_count_u32(value: u32) -> u32 {
    let mut x = value;
    x -= (x >> 1) & 0x5555_5555;
    x = (x & 0x3333_3333) + ((x >> 2) & 0x3333_3333);
    x = (x + (x >> 4)) & 0x0F0F_0F0F;
    x.wrapping_mul(0x0101_0101) >> 24
}

#[inline]
pub fn pop_count_u64(value: u64) -> u32 {
    let mut x = value;
    x -= (x >> 1) & 0x5555_5555_5555_5555;
    x = (x & 0x3333_3333_3333_3333) + ((x >> 2) & 0x3333_3333_3333_3333);
    x = (x + (x >> 4)) & 0x0F0F_0F0F_0F0F_0F0F;
    (x.wrapping_mul(0x0101_0101_0101_0101) >> 56) as u32
}

/// Trailing zero bits; 32 for zero.
#[inline]
pub fn trailing_zero_count_u32(value: u32) -> u32 {
    // Ones exactly where `value` has trailing zeros
    pop_count_u32(!value & value.wrapping_sub(1))
}

/// Trailing zero bits; 64 for zero.
#[inline]
pub fn trailing_zero_count_u64(value: u64) -> u32 {
    pop_count_u64(!value & value.wrapping_sub(1))
}

/// Full 128-bit product of two unsigned 64-bit values as `(high, low)`.
///
/// Each operand is split into 32-bit halves. The middle accumulator collects
/// the carry out of the low partial product plus both cross products; its
/// bound is `2^64 - 1`, so it never overflows.
#[inline]
pub fn big_mul_u64(a: u64, b: u64) -> (u64, u64) {
    const LOW_MASK: u64 = 0xFFFF_FFFF;

    let (a_lo, a_hi) = (a & LOW_MASK, a >> 32);
    let (b_lo, b_hi) = (b & LOW_MASK, b >> 32);

    let lo_lo = a_lo * b_lo;
    let hi_lo = a_hi * b_lo;
    let lo_hi = a_lo * b_hi;
    let hi_hi = a_hi * b_hi;

    let middle = (lo_lo >> 32) + (hi_lo & LOW_MASK) + lo_hi;

    let high = hi_hi + (hi_lo >> 32) + (middle >> 32);
    let low = (middle << 32) | (lo_lo & LOW_MASK);

    (high, low)
}

/// Full 128-bit product of two signed 64-bit values as `(high, low)`.
///
/// Multiplies the magnitudes, then negates the 128-bit result when the signs
/// differ. Two's-complement negation of `(high, low)` is `(!high, -low)` when
/// `low` is nonzero, and `(!high + 1, 0)` when it is zero, because only then
/// does the `+1` carry out of the low word.
#[inline]
pub fn big_mul_i64(a: i64, b: i64) -> (i64, u64) {
    let (high, low) = big_mul_u64(a.unsigned_abs(), b.unsigned_abs());

    if (a < 0) == (b < 0) {
        return (high as i64, low);
    }

    if low == 0 {
        ((!high).wrapping_add(1) as i64, 0)
    } else {
        (!high as i64, low.wrapping_neg())
    }
}

/// High 64 bits of the 128-bit product.
#[inline]
pub fn multiply_high_u64(a: u64, b: u64) -> u64 {
    big_mul_u64(a, b).0
}

/// High 64 bits of the signed 128-bit product.
#[inline]
pub fn multiply_high_i64(a: i64, b: i64) -> i64 {
    big_mul_i64(a, b).0
}
