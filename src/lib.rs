//! # simdport
//!
//! A portable 128-bit SIMD vector computed entirely in software.
//!
//! [`Vector128<T>`] holds 128 bits as two 64-bit halves and exposes the
//! cross-platform vector instruction set over them: lane-wise arithmetic,
//! comparisons producing masks, bitwise logic, shuffles, widening and
//! narrowing, conversions, reductions and float math. Every result is
//! bit-identical to what a hardware 128-bit unit would produce, on any target.
//!
//! ## Lane types
//!
//! `i8`, `u8`, `i16`, `u16`, `i32`, `u32`, `i64`, `u64`, `isize`, `usize`,
//! `f32` and `f64`. Any other lane type fails to compile. When the lane type
//! is only known at runtime, use [`AnyVector128`].
//!
//! ## Capability tiers
//!
//! The bit-manipulation primitives in [`bits`] (leading zero count, bit
//! reversal, 64x64 -> 128 multiply) use the target's own instructions when
//! the build script finds them, and exact software sequences otherwise. See
//! [`tier`] for how the tier is chosen and capped with Cargo features.
//!
//! ## Example
//!
//! ```rust
//! use simdport::vector128::{self, Vector128};
//!
//! let a = Vector128::<i32>::from_fn(|i| i as i32);
//! let b = Vector128::splat(10i32);
//!
//! let sum = a + b;
//! assert_eq!(sum.to_vec(), vec![10, 11, 12, 13]);
//!
//! let mask = vector128::greater_than(sum, Vector128::splat(11));
//! assert_eq!(vector128::extract_most_significant_bits(mask), 0b1100);
//! ```
//!
//! ## Bulk operations
//!
//! ```rust
//! use simdport::simd::{SimdAdd, SimdMath};
//!
//! let a = vec![1.0f32, 4.0, 9.0, 16.0, 25.0];
//! let b = vec![1.0f32; 5];
//!
//! let sum = a.as_slice().simd_add(b.as_slice()).unwrap();
//! assert_eq!(sum, vec![2.0, 5.0, 10.0, 17.0, 26.0]);
//!
//! let roots = a.as_slice().simd_sqrt().unwrap();
//! assert_eq!(roots, vec![1.0, 2.0, 3.0, 4.0, 5.0]);
//! ```

pub mod bits;
pub mod error;
pub mod scalar;
pub mod simd;
pub mod tier;

pub use error::{Result, VectorError};
pub use scalar::{Element, ElementKind, FloatElement, IntElement};
pub use simd::dynamic::AnyVector128;
pub use simd::vector128::{self, Vector128};
pub use tier::{Implementation, Tier, ACTIVE_TIER};

/// Slices at or below this length run the parallel variants sequentially.
pub const PARALLEL_SIMD_THRESHOLD: usize = 1 << 16;

/// Target number of elements handed to each rayon task.
pub const PARALLEL_CHUNK_SIZE: usize = 1 << 14;
