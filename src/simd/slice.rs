//! Slice implementations of the bulk traits in [`crate::simd::traits`].
//!
//! Inputs are walked in `Vector128::<T>::COUNT`-element blocks. The last block
//! of a slice whose length is not a multiple of the lane count is loaded with
//! zero padding and written back partially, so no element outside the slice
//! is ever touched.
//!
//! The parallel variants split the output into chunks of roughly
//! [`PARALLEL_CHUNK_SIZE`] elements, rounded down to a whole number of
//! vectors, and run the sequential kernel on each chunk. Below
//! [`PARALLEL_SIMD_THRESHOLD`] elements they fall back to the sequential path.

use rayon::prelude::*;
use tracing::{debug, trace};

use crate::error::{validation_error, Result};
use crate::scalar::{Element, FloatElement};
use crate::simd::traits::{SimdAdd, SimdDot, SimdMath};
use crate::simd::vector128::{self, Vector128};
use crate::{PARALLEL_CHUNK_SIZE, PARALLEL_SIMD_THRESHOLD};

fn validate_single<T>(a: &[T]) -> Result<()> {
    if a.is_empty() {
        return Err(validation_error("Size can't be empty (size zero)"));
    }
    Ok(())
}

fn validate_pair<T>(a: &[T], b: &[T]) -> Result<()> {
    validate_single(a)?;
    validate_single(b)?;
    if a.len() != b.len() {
        return Err(validation_error(format!(
            "Slices must be the same length: {} != {}",
            a.len(),
            b.len()
        )));
    }
    Ok(())
}

/// Output chunk length for the parallel paths: a whole number of vectors.
#[inline(always)]
fn parallel_chunk_size<T: Element>() -> usize {
    let step = Vector128::<T>::COUNT;
    std::cmp::max((PARALLEL_CHUNK_SIZE / step) * step, step)
}

fn simd_unary<T: Element>(a: &[T], c: &mut [T], op: impl Fn(Vector128<T>) -> Vector128<T>) {
    let step = Vector128::<T>::COUNT;
    let mut a_blocks = a.chunks_exact(step);
    let mut c_blocks = c.chunks_exact_mut(step);

    for (a_block, c_block) in a_blocks.by_ref().zip(c_blocks.by_ref()) {
        op(Vector128::load_partial(a_block)).store_partial(c_block);
    }

    let tail = c_blocks.into_remainder();
    if !tail.is_empty() {
        trace!(remaining = tail.len(), "partial block");
        op(Vector128::load_partial(a_blocks.remainder())).store_partial(tail);
    }
}

fn simd_binary<T: Element>(
    a: &[T],
    b: &[T],
    c: &mut [T],
    op: impl Fn(Vector128<T>, Vector128<T>) -> Vector128<T>,
) {
    let step = Vector128::<T>::COUNT;
    let mut a_blocks = a.chunks_exact(step);
    let mut b_blocks = b.chunks_exact(step);
    let mut c_blocks = c.chunks_exact_mut(step);

    for ((a_block, b_block), c_block) in a_blocks
        .by_ref()
        .zip(b_blocks.by_ref())
        .zip(c_blocks.by_ref())
    {
        op(Vector128::load_partial(a_block), Vector128::load_partial(b_block))
            .store_partial(c_block);
    }

    let tail = c_blocks.into_remainder();
    if !tail.is_empty() {
        trace!(remaining = tail.len(), "partial block");
        op(
            Vector128::load_partial(a_blocks.remainder()),
            Vector128::load_partial(b_blocks.remainder()),
        )
        .store_partial(tail);
    }
}

fn map_slice<T: Element>(a: &[T], op: impl Fn(Vector128<T>) -> Vector128<T>) -> Vec<T> {
    let mut c = vec![T::ZERO; a.len()];
    simd_unary(a, &mut c, op);
    c
}

fn par_map_slice<T: Element>(
    a: &[T],
    op: impl Fn(Vector128<T>) -> Vector128<T> + Send + Sync,
) -> Vec<T> {
    if a.len() <= PARALLEL_SIMD_THRESHOLD {
        debug!(len = a.len(), "below parallel threshold, running sequentially");
        return map_slice(a, op);
    }

    let chunk_size = parallel_chunk_size::<T>();
    debug!(len = a.len(), chunk_size, "running in parallel");

    let mut c = vec![T::ZERO; a.len()];
    c.par_chunks_mut(chunk_size)
        .zip(a.par_chunks(chunk_size))
        .for_each(|(c_chunk, a_chunk)| simd_unary(a_chunk, c_chunk, &op));
    c
}

fn zip_slices<T: Element>(
    a: &[T],
    b: &[T],
    op: impl Fn(Vector128<T>, Vector128<T>) -> Vector128<T>,
) -> Vec<T> {
    let mut c = vec![T::ZERO; a.len()];
    simd_binary(a, b, &mut c, op);
    c
}

fn par_zip_slices<T: Element>(
    a: &[T],
    b: &[T],
    op: impl Fn(Vector128<T>, Vector128<T>) -> Vector128<T> + Send + Sync,
) -> Vec<T> {
    if a.len() <= PARALLEL_SIMD_THRESHOLD {
        debug!(len = a.len(), "below parallel threshold, running sequentially");
        return zip_slices(a, b, op);
    }

    let chunk_size = parallel_chunk_size::<T>();
    debug!(len = a.len(), chunk_size, "running in parallel");

    let mut c = vec![T::ZERO; a.len()];
    c.par_chunks_mut(chunk_size)
        .zip(a.par_chunks(chunk_size))
        .zip(b.par_chunks(chunk_size))
        .for_each(|((c_chunk, a_chunk), b_chunk)| simd_binary(a_chunk, b_chunk, c_chunk, &op));
    c
}

impl<'b, T: Element> SimdAdd<&'b [T]> for &[T] {
    type Output = Vec<T>;

    fn simd_add(self, rhs: &'b [T]) -> Result<Self::Output> {
        validate_pair(self, rhs)?;
        Ok(zip_slices(self, rhs, vector128::add))
    }

    fn par_simd_add(self, rhs: &'b [T]) -> Result<Self::Output> {
        validate_pair(self, rhs)?;
        Ok(par_zip_slices(self, rhs, vector128::add))
    }

    fn scalar_add(self, rhs: &'b [T]) -> Result<Self::Output> {
        validate_pair(self, rhs)?;
        Ok(self
            .iter()
            .zip(rhs.iter())
            .map(|(x, y)| Element::add(*x, *y))
            .collect())
    }
}

impl<'b, T: Element> SimdDot<&'b [T]> for &[T] {
    type Output = T;

    fn simd_dot(self, rhs: &'b [T]) -> Result<Self::Output> {
        validate_pair(self, rhs)?;

        let step = Vector128::<T>::COUNT;
        // Zero padding in the last block adds nothing to the sums
        let partial_sums = self
            .chunks(step)
            .zip(rhs.chunks(step))
            .fold(Vector128::zero(), |acc, (a_block, b_block)| {
                acc + Vector128::load_partial(a_block) * Vector128::load_partial(b_block)
            });

        Ok(vector128::sum(partial_sums))
    }

    fn scalar_dot(self, rhs: &'b [T]) -> Result<Self::Output> {
        validate_pair(self, rhs)?;
        Ok(self
            .iter()
            .zip(rhs.iter())
            .fold(T::ZERO, |acc, (x, y)| Element::add(acc, x.multiply(*y))))
    }
}

impl<T: FloatElement> SimdMath for &[T] {
    type Output = Vec<T>;

    fn simd_abs(self) -> Result<Self::Output> {
        validate_single(self)?;
        Ok(map_slice(self, vector128::abs))
    }

    fn simd_sqrt(self) -> Result<Self::Output> {
        validate_single(self)?;
        Ok(map_slice(self, vector128::sqrt))
    }

    fn simd_sin(self) -> Result<Self::Output> {
        validate_single(self)?;
        Ok(map_slice(self, vector128::sin))
    }

    fn simd_cos(self) -> Result<Self::Output> {
        validate_single(self)?;
        Ok(map_slice(self, vector128::cos))
    }

    fn simd_exp(self) -> Result<Self::Output> {
        validate_single(self)?;
        Ok(map_slice(self, vector128::exp))
    }

    fn simd_ln(self) -> Result<Self::Output> {
        validate_single(self)?;
        Ok(map_slice(self, vector128::log))
    }

    fn par_simd_abs(self) -> Result<Self::Output> {
        validate_single(self)?;
        Ok(par_map_slice(self, vector128::abs))
    }

    fn par_simd_sqrt(self) -> Result<Self::Output> {
        validate_single(self)?;
        Ok(par_map_slice(self, vector128::sqrt))
    }

    fn par_simd_sin(self) -> Result<Self::Output> {
        validate_single(self)?;
        Ok(par_map_slice(self, vector128::sin))
    }

    fn par_simd_cos(self) -> Result<Self::Output> {
        validate_single(self)?;
        Ok(par_map_slice(self, vector128::cos))
    }

    fn par_simd_exp(self) -> Result<Self::Output> {
        validate_single(self)?;
        Ok(par_map_slice(self, vector128::exp))
    }

    fn par_simd_ln(self) -> Result<Self::Output> {
        validate_single(self)?;
        Ok(par_map_slice(self, vector128::log))
    }
}
