//! Bulk operations over slices.
//!
//! Each trait offers the same computation three ways: `simd_*` walks the input
//! one [`Vector128`](crate::simd::Vector128) at a time, `par_simd_*` splits it
//! across the rayon pool first, and `scalar_*` is the plain per-element loop
//! kept as a reference. All three return identical results.

use crate::error::Result;

/// Element-wise addition of two equally long, non-empty slices.
pub trait SimdAdd<Rhs = Self> {
    type Output;

    fn simd_add(self, rhs: Rhs) -> Result<Self::Output>;
    fn par_simd_add(self, rhs: Rhs) -> Result<Self::Output>;
    fn scalar_add(self, rhs: Rhs) -> Result<Self::Output>;
}

/// Dot product of two equally long, non-empty slices.
///
/// Accumulates one partial sum per lane and reduces them in lane order, so
/// float results can differ from [`scalar_dot`](SimdDot::scalar_dot) in the
/// last bits.
pub trait SimdDot<Rhs = Self> {
    type Output;

    fn simd_dot(self, rhs: Rhs) -> Result<Self::Output>;
    fn scalar_dot(self, rhs: Rhs) -> Result<Self::Output>;
}

/// Element-wise math on a non-empty float slice.
pub trait SimdMath {
    type Output;

    fn simd_abs(self) -> Result<Self::Output>;
    fn simd_sqrt(self) -> Result<Self::Output>;
    fn simd_sin(self) -> Result<Self::Output>;
    fn simd_cos(self) -> Result<Self::Output>;
    fn simd_exp(self) -> Result<Self::Output>;
    fn simd_ln(self) -> Result<Self::Output>;

    fn par_simd_abs(self) -> Result<Self::Output>;
    fn par_simd_sqrt(self) -> Result<Self::Output>;
    fn par_simd_sin(self) -> Result<Self::Output>;
    fn par_simd_cos(self) -> Result<Self::Output>;
    fn par_simd_exp(self) -> Result<Self::Output>;
    fn par_simd_ln(self) -> Result<Self::Output>;
}
