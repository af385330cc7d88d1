//! Per-element scalar arithmetic.
//!
//! [`Element`] is implemented once for every type in the closed catalogue
//! described by [`ElementKind`]. Each implementation computes what the hardware
//! would for that lane type: integers wrap, floats follow IEEE-754. Vector
//! operations are generic over `Element` and monomorphize down to these
//! functions, so the per-lane dispatch costs nothing at runtime.
//!
//! The trait is sealed; the catalogue only grows by adding an impl here.

use std::fmt;
use std::str::FromStr;

use crate::error::{unsupported_element_type, Result, VectorError};

mod float;
mod integer;

mod private {
    pub trait Sealed {}
}

/// The closed catalogue of lane types a 128-bit vector can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    I8,
    U8,
    I16,
    U16,
    I32,
    U32,
    I64,
    U64,
    ISize,
    USize,
    F32,
    F64,
}

impl ElementKind {
    pub const ALL: [ElementKind; 12] = [
        ElementKind::I8,
        ElementKind::U8,
        ElementKind::I16,
        ElementKind::U16,
        ElementKind::I32,
        ElementKind::U32,
        ElementKind::I64,
        ElementKind::U64,
        ElementKind::ISize,
        ElementKind::USize,
        ElementKind::F32,
        ElementKind::F64,
    ];

    /// Size of one lane in bytes.
    pub const fn size(self) -> usize {
        match self {
            ElementKind::I8 | ElementKind::U8 => 1,
            ElementKind::I16 | ElementKind::U16 => 2,
            ElementKind::I32 | ElementKind::U32 | ElementKind::F32 => 4,
            ElementKind::I64 | ElementKind::U64 | ElementKind::F64 => 8,
            ElementKind::ISize | ElementKind::USize => std::mem::size_of::<usize>(),
        }
    }

    /// Number of lanes of this kind in a 128-bit vector.
    pub const fn lane_count(self) -> usize {
        16 / self.size()
    }

    pub const fn bits(self) -> u32 {
        self.size() as u32 * 8
    }

    pub const fn is_float(self) -> bool {
        matches!(self, ElementKind::F32 | ElementKind::F64)
    }

    pub const fn is_integer(self) -> bool {
        !self.is_float()
    }

    pub const fn is_unsigned(self) -> bool {
        matches!(
            self,
            ElementKind::U8
                | ElementKind::U16
                | ElementKind::U32
                | ElementKind::U64
                | ElementKind::USize
        )
    }

    pub const fn name(self) -> &'static str {
        match self {
            ElementKind::I8 => "i8",
            ElementKind::U8 => "u8",
            ElementKind::I16 => "i16",
            ElementKind::U16 => "u16",
            ElementKind::I32 => "i32",
            ElementKind::U32 => "u32",
            ElementKind::I64 => "i64",
            ElementKind::U64 => "u64",
            ElementKind::ISize => "isize",
            ElementKind::USize => "usize",
            ElementKind::F32 => "f32",
            ElementKind::F64 => "f64",
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ElementKind {
    type Err = VectorError;

    /// Accepts Rust primitive names as well as the common C-style aliases
    /// (`sbyte`, `int`, `ulong`, `float`, `nint`, ...).
    fn from_str(s: &str) -> Result<Self> {
        let kind = match s {
            "i8" | "sbyte" => ElementKind::I8,
            "u8" | "byte" => ElementKind::U8,
            "i16" | "short" => ElementKind::I16,
            "u16" | "ushort" => ElementKind::U16,
            "i32" | "int" => ElementKind::I32,
            "u32" | "uint" => ElementKind::U32,
            "i64" | "long" => ElementKind::I64,
            "u64" | "ulong" => ElementKind::U64,
            "isize" | "nint" => ElementKind::ISize,
            "usize" | "nuint" => ElementKind::USize,
            "f32" | "float" | "single" => ElementKind::F32,
            "f64" | "double" => ElementKind::F64,
            other => return Err(unsupported_element_type(other)),
        };
        Ok(kind)
    }
}

/// A lane type of a 128-bit vector.
///
/// Binary operations take both operands by value and return what a lane of
/// that hardware type would hold. Predicates return `bool`; the vector layer
/// widens them into all-bits-set or all-bits-zero lanes.
pub trait Element:
    private::Sealed
    + Copy
    + Default
    + PartialEq
    + PartialOrd
    + fmt::Debug
    + fmt::Display
    + Send
    + Sync
    + 'static
{
    const KIND: ElementKind;

    /// Width of one lane in bytes.
    const SIZE: usize = std::mem::size_of::<Self>();

    /// Width of one lane in bits.
    const BITS: u32;

    const ZERO: Self;
    const ONE: Self;

    /// Every bit set. For floats this is a mask pattern, not a number.
    const ALL_BITS_SET: Self;

    /// Most negative finite value.
    const MIN_VALUE: Self;

    /// Most positive finite value.
    const MAX_VALUE: Self;

    const IS_UNSIGNED: bool;
    const IS_FLOAT: bool;

    /// Unsigned integer of the same width, used for shuffle indices.
    type Index: Element;

    /// Raw bit pattern, zero-extended to 64 bits.
    fn to_bits(self) -> u64;

    /// Builds a lane from the low `BITS` bits of `bits`.
    fn from_bits(bits: u64) -> Self;

    fn add(self, rhs: Self) -> Self;
    fn subtract(self, rhs: Self) -> Self;
    fn multiply(self, rhs: Self) -> Self;

    /// Integer division by zero is [`VectorError::DivideByZero`]; float
    /// division follows IEEE-754.
    fn divide(self, rhs: Self) -> Result<Self>;

    fn negate(self) -> Self;

    /// Identity for unsigned lanes. For signed integers the most negative
    /// value maps to itself.
    fn abs(self) -> Self;

    fn add_saturate(self, rhs: Self) -> Self;
    fn subtract_saturate(self, rhs: Self) -> Self;

    /// `self * multiplier + addend`, fused for floats.
    fn multiply_add(self, multiplier: Self, addend: Self) -> Self;

    /// Minimum where NaN propagates and `-0.0 < +0.0`.
    fn minimum(self, rhs: Self) -> Self;

    /// Maximum where NaN propagates and `-0.0 < +0.0`.
    fn maximum(self, rhs: Self) -> Self;

    /// `self < rhs ? self : rhs`, as a compare-and-select instruction does.
    fn min_native(self, rhs: Self) -> Self;

    /// `self > rhs ? self : rhs`, as a compare-and-select instruction does.
    fn max_native(self, rhs: Self) -> Self;

    fn floor(self) -> Self;
    fn ceiling(self) -> Self;

    /// Round half to even.
    fn round(self) -> Self;
    fn truncate(self) -> Self;
    fn sqrt(self) -> Self;

    /// Magnitude of `self` with the sign of `sign`.
    fn copy_sign(self, sign: Self) -> Self;

    fn equals(self, rhs: Self) -> bool;
    fn less_than(self, rhs: Self) -> bool;
    fn less_than_or_equal(self, rhs: Self) -> bool;
    fn greater_than(self, rhs: Self) -> bool;
    fn greater_than_or_equal(self, rhs: Self) -> bool;

    /// Top bit of the raw lane.
    #[inline]
    fn most_significant_bit(self) -> bool {
        (self.to_bits() >> (Self::BITS - 1)) & 1 == 1
    }

    /// Sign extraction. Always false for unsigned lanes; true for floats with
    /// the sign bit set, including `-0.0` and negative NaNs.
    fn is_negative(self) -> bool;

    fn is_zero(self) -> bool;
    fn is_nan(self) -> bool;
    fn is_infinity(self) -> bool;
    fn is_finite(self) -> bool;
    fn is_normal(self) -> bool;
    fn is_subnormal(self) -> bool;
    fn is_integer(self) -> bool;
    fn is_even_integer(self) -> bool;
    fn is_odd_integer(self) -> bool;
}

/// Integer lanes: shifts and bit counting.
pub trait IntElement: Element + Eq + Ord + std::hash::Hash {
    /// Shift amounts are taken modulo `BITS`.
    fn shift_left(self, amount: u32) -> Self;

    /// Sign-propagating for signed lanes, zero-filling for unsigned ones.
    fn shift_right_arithmetic(self, amount: u32) -> Self;

    fn shift_right_logical(self, amount: u32) -> Self;

    #[inline]
    fn leading_zero_count(self) -> Self {
        let count = crate::bits::leading_zero_count_u64(self.to_bits()) - (64 - Self::BITS);
        Self::from_bits(count as u64)
    }

    #[inline]
    fn pop_count(self) -> Self {
        Self::from_bits(crate::bits::pop_count_u64(self.to_bits()) as u64)
    }
}

/// Floating-point lanes. Transcendental functions come from [`num::Float`],
/// which forwards to the platform's scalar math library.
pub trait FloatElement: Element + num::Float {
    /// `(degrees * PI) / 180`, rounded after each step.
    fn degrees_to_radians(self) -> Self;

    /// `(radians * 180) / PI`, rounded after each step.
    fn radians_to_degrees(self) -> Self;
}
