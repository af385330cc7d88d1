//! Lane permutation.

use super::Vector128;
use crate::scalar::Element;

/// Lane `i` of the result is lane `indices[i] % COUNT` of `vector`.
///
/// Out-of-range indices wrap instead of producing zero, so a shuffle never
/// fails.
#[inline]
pub fn shuffle<T: Element>(vector: Vector128<T>, indices: Vector128<T::Index>) -> Vector128<T> {
    let count = Vector128::<T>::COUNT as u64;
    Vector128::from_fn(|lane| {
        let source = indices.element_unchecked(lane).to_bits() % count;
        vector.element_unchecked(source as usize)
    })
}

/// Interleaves the lower halves: `left[0], right[0], left[1], right[1], ...`.
#[inline]
pub fn interleave_lower<T: Element>(left: Vector128<T>, right: Vector128<T>) -> Vector128<T> {
    Vector128::from_fn(|lane| {
        let source = if lane % 2 == 0 { left } else { right };
        source.element_unchecked(lane / 2)
    })
}

/// Interleaves the upper halves.
#[inline]
pub fn interleave_upper<T: Element>(left: Vector128<T>, right: Vector128<T>) -> Vector128<T> {
    let half = Vector128::<T>::COUNT / 2;
    Vector128::from_fn(|lane| {
        let source = if lane % 2 == 0 { left } else { right };
        source.element_unchecked(half + lane / 2)
    })
}

/// Lanes in reverse order.
#[inline]
pub fn reverse<T: Element>(vector: Vector128<T>) -> Vector128<T> {
    let last = Vector128::<T>::COUNT - 1;
    Vector128::from_fn(|lane| vector.element_unchecked(last - lane))
}
