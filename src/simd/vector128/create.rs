//! Construction, loads and stores.

use super::{Vector128, ALIGNMENT};
use crate::error::{index_out_of_range, Result};
use crate::scalar::Element;

/// Every lane set to `value`.
#[inline]
pub fn create<T: Element>(value: T) -> Vector128<T> {
    Vector128::splat(value)
}

/// Lane 0 set to `value`, every other lane zero.
#[inline]
pub fn create_scalar<T: Element>(value: T) -> Vector128<T> {
    Vector128::from_fn(|index| if index == 0 { value } else { T::ZERO })
}

/// Lane `i` holds `start + i * step`, with the lane type's own arithmetic.
#[inline]
pub fn create_sequence<T: Element>(start: T, step: T) -> Vector128<T> {
    let mut position = T::ZERO;
    Vector128::from_fn(|_| {
        let lane = start.add(position.multiply(step));
        position = position.add(T::ONE);
        lane
    })
}

/// `0, 1, 2, ...` across the lanes.
#[inline]
pub fn indices<T: Element>() -> Vector128<T> {
    create_sequence(T::ZERO, T::ONE)
}

/// Reads `Vector128::<T>::COUNT` elements starting at `source`.
///
/// # Safety
///
/// `source` must be valid for reads of 16 bytes. No alignment is required.
#[inline]
pub unsafe fn load<T: Element>(source: *const T) -> Vector128<T> {
    assert!(!source.is_null(), "Pointer must not be null");
    // SAFETY: the caller guarantees `COUNT` readable elements behind `source`.
    Vector128::from_fn(|index| unsafe { source.add(index).read_unaligned() })
}

/// Same as [`load`].
///
/// # Safety
///
/// See [`load`].
#[inline]
pub unsafe fn load_unaligned<T: Element>(source: *const T) -> Vector128<T> {
    unsafe { load(source) }
}

/// [`load`] from a 16-byte aligned address.
///
/// # Safety
///
/// See [`load`]. Panics if `source` is not 16-byte aligned.
#[inline]
pub unsafe fn load_aligned<T: Element>(source: *const T) -> Vector128<T> {
    assert!(
        (source as usize) % ALIGNMENT == 0,
        "Pointer must be 16-byte aligned"
    );
    unsafe { load(source) }
}

/// Writes every lane starting at `destination`.
///
/// # Safety
///
/// `destination` must be valid for writes of 16 bytes. No alignment is required.
#[inline]
pub unsafe fn store<T: Element>(vector: Vector128<T>, destination: *mut T) {
    assert!(!destination.is_null(), "Pointer must not be null");
    for (index, lane) in vector.iter().enumerate() {
        // SAFETY: the caller guarantees `COUNT` writable elements behind `destination`.
        unsafe { destination.add(index).write_unaligned(lane) };
    }
}

/// Same as [`store`].
///
/// # Safety
///
/// See [`store`].
#[inline]
pub unsafe fn store_unaligned<T: Element>(vector: Vector128<T>, destination: *mut T) {
    unsafe { store(vector, destination) }
}

/// [`store`] to a 16-byte aligned address.
///
/// # Safety
///
/// See [`store`]. Panics if `destination` is not 16-byte aligned.
#[inline]
pub unsafe fn store_aligned<T: Element>(vector: Vector128<T>, destination: *mut T) {
    assert!(
        (destination as usize) % ALIGNMENT == 0,
        "Pointer must be 16-byte aligned"
    );
    unsafe { store(vector, destination) }
}

/// Loads `COUNT` elements of `source` starting at `offset`.
///
/// Fails with [`IndexOutOfRange`](crate::error::VectorError::IndexOutOfRange)
/// naming the last element that would be read.
pub fn load_from<T: Element>(source: &[T], offset: usize) -> Result<Vector128<T>> {
    let lanes = checked_window::<T>(source.len(), offset)?;
    Ok(Vector128::from_fn(|index| source[lanes.start + index]))
}

/// Stores every lane into `destination` starting at `offset`.
pub fn store_into<T: Element>(
    vector: Vector128<T>,
    destination: &mut [T],
    offset: usize,
) -> Result<()> {
    let lanes = checked_window::<T>(destination.len(), offset)?;
    vector.store_partial(&mut destination[lanes]);
    Ok(())
}

fn checked_window<T: Element>(len: usize, offset: usize) -> Result<std::ops::Range<usize>> {
    let count = Vector128::<T>::COUNT;
    match offset.checked_add(count) {
        Some(end) if end <= len => Ok(offset..end),
        _ => Err(index_out_of_range(offset.saturating_add(count - 1), len)),
    }
}
