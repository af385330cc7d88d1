//! Horizontal reductions.

use super::Vector128;
use crate::scalar::Element;

/// Sum of all lanes, accumulated from lane 0 upward starting at zero.
///
/// The order is fixed, so float sums are reproducible across runs and tiers.
#[inline]
pub fn sum<T: Element>(vector: Vector128<T>) -> T {
    vector.iter().fold(T::ZERO, T::add)
}

/// Sum of the lane-wise products, in the same order as [`sum`].
#[inline]
pub fn dot<T: Element>(left: Vector128<T>, right: Vector128<T>) -> T {
    left.iter()
        .zip(right.iter())
        .fold(T::ZERO, |acc, (a, b)| acc.add(a.multiply(b)))
}

/// Top bit of each lane packed into an integer, lane 0 in bit 0.
#[inline]
pub fn extract_most_significant_bits<T: Element>(vector: Vector128<T>) -> u32 {
    vector
        .iter()
        .enumerate()
        .fold(0u32, |bits, (index, lane)| {
            bits | ((lane.most_significant_bit() as u32) << index)
        })
}

/// Lane 0.
#[inline(always)]
pub fn to_scalar<T: Element>(vector: Vector128<T>) -> T {
    vector.to_scalar()
}
