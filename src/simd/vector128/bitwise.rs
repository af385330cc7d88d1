//! Bitwise operations, shifts and per-lane bit counts.
//!
//! The logical operations work on the raw 128 bits, so they apply to float
//! lanes as well.

use super::Vector128;
use crate::scalar::{Element, IntElement};

#[inline(always)]
pub fn and<T: Element>(left: Vector128<T>, right: Vector128<T>) -> Vector128<T> {
    left.zip_halves(right, |a, b| a & b)
}

#[inline(always)]
pub fn or<T: Element>(left: Vector128<T>, right: Vector128<T>) -> Vector128<T> {
    left.zip_halves(right, |a, b| a | b)
}

#[inline(always)]
pub fn xor<T: Element>(left: Vector128<T>, right: Vector128<T>) -> Vector128<T> {
    left.zip_halves(right, |a, b| a ^ b)
}

/// `left & !right`.
#[inline(always)]
pub fn and_not<T: Element>(left: Vector128<T>, right: Vector128<T>) -> Vector128<T> {
    left.zip_halves(right, |a, b| a & !b)
}

#[inline(always)]
pub fn ones_complement<T: Element>(vector: Vector128<T>) -> Vector128<T> {
    vector.map_halves(|a| !a)
}

/// Takes each bit from `left` where `mask` has a one and from `right`
/// elsewhere. Bitwise, so a partially set mask lane mixes both inputs.
#[inline(always)]
pub fn conditional_select<T: Element>(
    mask: Vector128<T>,
    left: Vector128<T>,
    right: Vector128<T>,
) -> Vector128<T> {
    or(and(mask, left), and_not(right, mask))
}

/// Shift amount is taken modulo the lane width.
#[inline]
pub fn shift_left<T: IntElement>(vector: Vector128<T>, amount: u32) -> Vector128<T> {
    vector.map(|lane| lane.shift_left(amount))
}

/// Sign-propagating for signed lanes.
#[inline]
pub fn shift_right_arithmetic<T: IntElement>(vector: Vector128<T>, amount: u32) -> Vector128<T> {
    vector.map(|lane| lane.shift_right_arithmetic(amount))
}

#[inline]
pub fn shift_right_logical<T: IntElement>(vector: Vector128<T>, amount: u32) -> Vector128<T> {
    vector.map(|lane| lane.shift_right_logical(amount))
}

#[inline]
pub fn leading_zero_count<T: IntElement>(vector: Vector128<T>) -> Vector128<T> {
    vector.map(IntElement::leading_zero_count)
}

#[inline]
pub fn pop_count<T: IntElement>(vector: Vector128<T>) -> Vector128<T> {
    vector.map(IntElement::pop_count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_and_not_operand_order() {
        let a = Vector128::splat(0b1100u8);
        let b = Vector128::splat(0b1010u8);
        assert_eq!(and_not(a, b), Vector128::splat(0b0100));
        assert_eq!(and_not(b, a), Vector128::splat(0b0010));
    }

    #[test]
    fn test_conditional_select_is_bitwise() {
        let mask = Vector128::<u32>::from_fn(|i| if i % 2 == 0 { u32::MAX } else { 0x0000_FFFF });
        let left = Vector128::splat(0xAAAA_AAAAu32);
        let right = Vector128::splat(0x5555_5555u32);
        assert_eq!(
            conditional_select(mask, left, right).to_vec(),
            vec![0xAAAA_AAAA, 0x5555_AAAA, 0xAAAA_AAAA, 0x5555_AAAA]
        );
    }

    #[test]
    fn test_conditional_select_on_floats() {
        let mask = Vector128::<f64>::from_halves(u64::MAX, 0);
        let r = conditional_select(mask, Vector128::splat(1.0), Vector128::splat(2.0));
        assert_eq!(r.to_vec(), vec![1.0, 2.0]);
    }

    #[test]
    fn test_shift_masks_amount_per_lane_width() {
        let v = Vector128::splat(1u16);
        assert_eq!(shift_left(v, 16), v);
        assert_eq!(shift_left(v, 17), Vector128::splat(2));

        let n = Vector128::splat(i32::MIN);
        assert_eq!(shift_right_arithmetic(n, 31), Vector128::splat(-1));
        assert_eq!(shift_right_logical(n, 31), Vector128::splat(1));
        assert_eq!(shift_right_logical(n, 32), n);
    }

    #[test]
    fn test_bit_counts() {
        let v = Vector128::<u8>::from_fn(|i| i as u8);
        let lzc = leading_zero_count(v).to_vec();
        assert_eq!(&lzc[..5], &[8, 7, 6, 6, 5]);
        let pop = pop_count(v).to_vec();
        assert_eq!(&pop[..8], &[0, 1, 1, 2, 1, 2, 2, 3]);
        assert_eq!(pop_count(Vector128::splat(-1i64)), Vector128::splat(64));
    }
}
