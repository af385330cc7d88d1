//! Runtime-tagged vectors.
//!
//! [`Vector128<T>`] fixes its lane type at compile time. [`AnyVector128`]
//! carries the lane type as data instead, for callers that only learn it at
//! runtime (a parsed [`ElementKind`], a file header, a command line). The
//! checks the type system does for `Vector128<T>` happen here as errors:
//! mixing kinds is [`ElementKindMismatch`](crate::error::VectorError::ElementKindMismatch)
//! and integer-only operations on float kinds are
//! [`UnsupportedElementType`](crate::error::VectorError::UnsupportedElementType).

use std::fmt;

use crate::error::{element_kind_mismatch, index_out_of_range, unsupported_element_type, Result};
use crate::scalar::{Element, ElementKind};
use crate::simd::vector128::{self, Vector128, VECTOR_BYTES};

/// A 128-bit vector whose lane type is known only at runtime.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum AnyVector128 {
    I8(Vector128<i8>),
    U8(Vector128<u8>),
    I16(Vector128<i16>),
    U16(Vector128<u16>),
    I32(Vector128<i32>),
    U32(Vector128<u32>),
    I64(Vector128<i64>),
    U64(Vector128<u64>),
    ISize(Vector128<isize>),
    USize(Vector128<usize>),
    F32(Vector128<f32>),
    F64(Vector128<f64>),
}

// Runs `$body` with `$v` bound to the inner vector, whatever its lane type.
macro_rules! with_vector {
    ($value:expr, $v:ident => $body:expr) => {
        match $value {
            AnyVector128::I8($v) => $body,
            AnyVector128::U8($v) => $body,
            AnyVector128::I16($v) => $body,
            AnyVector128::U16($v) => $body,
            AnyVector128::I32($v) => $body,
            AnyVector128::U32($v) => $body,
            AnyVector128::I64($v) => $body,
            AnyVector128::U64($v) => $body,
            AnyVector128::ISize($v) => $body,
            AnyVector128::USize($v) => $body,
            AnyVector128::F32($v) => $body,
            AnyVector128::F64($v) => $body,
        }
    };
}

// Like `with_vector!`, rewrapping the result in the same variant.
macro_rules! map_vector {
    ($value:expr, $v:ident => $body:expr) => {
        match $value {
            AnyVector128::I8($v) => AnyVector128::I8($body),
            AnyVector128::U8($v) => AnyVector128::U8($body),
            AnyVector128::I16($v) => AnyVector128::I16($body),
            AnyVector128::U16($v) => AnyVector128::U16($body),
            AnyVector128::I32($v) => AnyVector128::I32($body),
            AnyVector128::U32($v) => AnyVector128::U32($body),
            AnyVector128::I64($v) => AnyVector128::I64($body),
            AnyVector128::U64($v) => AnyVector128::U64($body),
            AnyVector128::ISize($v) => AnyVector128::ISize($body),
            AnyVector128::USize($v) => AnyVector128::USize($body),
            AnyVector128::F32($v) => AnyVector128::F32($body),
            AnyVector128::F64($v) => AnyVector128::F64($body),
        }
    };
}

// Integer variants only; float kinds are rejected.
macro_rules! map_integer_vector {
    ($value:expr, $v:ident => $body:expr) => {
        match $value {
            AnyVector128::I8($v) => Ok(AnyVector128::I8($body)),
            AnyVector128::U8($v) => Ok(AnyVector128::U8($body)),
            AnyVector128::I16($v) => Ok(AnyVector128::I16($body)),
            AnyVector128::U16($v) => Ok(AnyVector128::U16($body)),
            AnyVector128::I32($v) => Ok(AnyVector128::I32($body)),
            AnyVector128::U32($v) => Ok(AnyVector128::U32($body)),
            AnyVector128::I64($v) => Ok(AnyVector128::I64($body)),
            AnyVector128::U64($v) => Ok(AnyVector128::U64($body)),
            AnyVector128::ISize($v) => Ok(AnyVector128::ISize($body)),
            AnyVector128::USize($v) => Ok(AnyVector128::USize($body)),
            other => Err(unsupported_element_type(other.kind().name())),
        }
    };
}

// Pairs two vectors of the same kind; different kinds are a mismatch.
macro_rules! zip_vectors {
    ($left:expr, $right:expr, $a:ident, $b:ident => $body:expr) => {
        match ($left, $right) {
            (AnyVector128::I8($a), AnyVector128::I8($b)) => Ok(AnyVector128::I8($body)),
            (AnyVector128::U8($a), AnyVector128::U8($b)) => Ok(AnyVector128::U8($body)),
            (AnyVector128::I16($a), AnyVector128::I16($b)) => Ok(AnyVector128::I16($body)),
            (AnyVector128::U16($a), AnyVector128::U16($b)) => Ok(AnyVector128::U16($body)),
            (AnyVector128::I32($a), AnyVector128::I32($b)) => Ok(AnyVector128::I32($body)),
            (AnyVector128::U32($a), AnyVector128::U32($b)) => Ok(AnyVector128::U32($body)),
            (AnyVector128::I64($a), AnyVector128::I64($b)) => Ok(AnyVector128::I64($body)),
            (AnyVector128::U64($a), AnyVector128::U64($b)) => Ok(AnyVector128::U64($body)),
            (AnyVector128::ISize($a), AnyVector128::ISize($b)) => Ok(AnyVector128::ISize($body)),
            (AnyVector128::USize($a), AnyVector128::USize($b)) => Ok(AnyVector128::USize($body)),
            (AnyVector128::F32($a), AnyVector128::F32($b)) => Ok(AnyVector128::F32($body)),
            (AnyVector128::F64($a), AnyVector128::F64($b)) => Ok(AnyVector128::F64($body)),
            (left, right) => Err(element_kind_mismatch(left.kind(), right.kind())),
        }
    };
}

impl AnyVector128 {
    /// Tags 128 raw bits with `kind`.
    pub fn from_halves(kind: ElementKind, lower: u64, upper: u64) -> Self {
        match kind {
            ElementKind::I8 => AnyVector128::I8(Vector128::from_halves(lower, upper)),
            ElementKind::U8 => AnyVector128::U8(Vector128::from_halves(lower, upper)),
            ElementKind::I16 => AnyVector128::I16(Vector128::from_halves(lower, upper)),
            ElementKind::U16 => AnyVector128::U16(Vector128::from_halves(lower, upper)),
            ElementKind::I32 => AnyVector128::I32(Vector128::from_halves(lower, upper)),
            ElementKind::U32 => AnyVector128::U32(Vector128::from_halves(lower, upper)),
            ElementKind::I64 => AnyVector128::I64(Vector128::from_halves(lower, upper)),
            ElementKind::U64 => AnyVector128::U64(Vector128::from_halves(lower, upper)),
            ElementKind::ISize => AnyVector128::ISize(Vector128::from_halves(lower, upper)),
            ElementKind::USize => AnyVector128::USize(Vector128::from_halves(lower, upper)),
            ElementKind::F32 => AnyVector128::F32(Vector128::from_halves(lower, upper)),
            ElementKind::F64 => AnyVector128::F64(Vector128::from_halves(lower, upper)),
        }
    }

    pub fn zero(kind: ElementKind) -> Self {
        Self::from_halves(kind, 0, 0)
    }

    /// Tags little-endian bytes with `kind`.
    pub fn from_bytes(kind: ElementKind, bytes: [u8; VECTOR_BYTES]) -> Self {
        let bits = Vector128::<u64>::from_bytes(bytes);
        Self::from_halves(kind, bits.lower(), bits.upper())
    }

    pub fn kind(&self) -> ElementKind {
        with_vector!(self, v => element_kind_of(v))
    }

    pub fn lane_count(&self) -> usize {
        self.kind().lane_count()
    }

    /// `(lower, upper)` 64-bit halves.
    pub fn halves(&self) -> (u64, u64) {
        with_vector!(self, v => (v.lower(), v.upper()))
    }

    pub fn to_bytes(&self) -> [u8; VECTOR_BYTES] {
        with_vector!(self, v => v.to_bytes())
    }

    /// Same 128 bits, read as lanes of `kind`.
    pub fn reinterpret(&self, kind: ElementKind) -> Self {
        let (lower, upper) = self.halves();
        Self::from_halves(kind, lower, upper)
    }

    /// Raw bits of lane `index`, zero-extended.
    pub fn element_bits(&self, index: usize) -> Result<u64> {
        with_vector!(self, v => v.get_element(index).map(Element::to_bits))
    }

    /// Copy with lane `index` replaced by the low bits of `bits`.
    pub fn with_element_bits(&self, index: usize, bits: u64) -> Result<Self> {
        let count = self.lane_count();
        if index >= count {
            return Err(index_out_of_range(index, count));
        }
        Ok(map_vector!(*self, v => v.with_element(index, Element::from_bits(bits))?))
    }

    pub fn add(&self, other: &Self) -> Result<Self> {
        zip_vectors!(*self, *other, a, b => a + b)
    }

    pub fn subtract(&self, other: &Self) -> Result<Self> {
        zip_vectors!(*self, *other, a, b => a - b)
    }

    pub fn multiply(&self, other: &Self) -> Result<Self> {
        zip_vectors!(*self, *other, a, b => a * b)
    }

    /// Fails on mismatched kinds and on an integer zero lane in `other`.
    pub fn divide(&self, other: &Self) -> Result<Self> {
        zip_vectors!(*self, *other, a, b => vector128::divide(a, b)?)
    }

    pub fn and(&self, other: &Self) -> Result<Self> {
        zip_vectors!(*self, *other, a, b => a & b)
    }

    pub fn or(&self, other: &Self) -> Result<Self> {
        zip_vectors!(*self, *other, a, b => a | b)
    }

    pub fn xor(&self, other: &Self) -> Result<Self> {
        zip_vectors!(*self, *other, a, b => a ^ b)
    }

    pub fn and_not(&self, other: &Self) -> Result<Self> {
        zip_vectors!(*self, *other, a, b => vector128::and_not(a, b))
    }

    pub fn equals(&self, other: &Self) -> Result<Self> {
        zip_vectors!(*self, *other, a, b => vector128::equals(a, b))
    }

    pub fn min(&self, other: &Self) -> Result<Self> {
        zip_vectors!(*self, *other, a, b => vector128::min(a, b))
    }

    pub fn max(&self, other: &Self) -> Result<Self> {
        zip_vectors!(*self, *other, a, b => vector128::max(a, b))
    }

    pub fn not(&self) -> Self {
        map_vector!(*self, v => !v)
    }

    pub fn negate(&self) -> Self {
        map_vector!(*self, v => -v)
    }

    pub fn abs(&self) -> Self {
        map_vector!(*self, v => vector128::abs(v))
    }

    pub fn shift_left(&self, amount: u32) -> Result<Self> {
        map_integer_vector!(*self, v => v << amount)
    }

    pub fn shift_right_arithmetic(&self, amount: u32) -> Result<Self> {
        map_integer_vector!(*self, v => v >> amount)
    }

    pub fn shift_right_logical(&self, amount: u32) -> Result<Self> {
        map_integer_vector!(*self, v => vector128::shift_right_logical(v, amount))
    }

    pub fn pop_count(&self) -> Result<Self> {
        map_integer_vector!(*self, v => vector128::pop_count(v))
    }

    pub fn extract_most_significant_bits(&self) -> u32 {
        with_vector!(self, v => vector128::extract_most_significant_bits(*v))
    }
}

fn element_kind_of<T: Element>(_: &Vector128<T>) -> ElementKind {
    T::KIND
}

impl<T: Element> From<Vector128<T>> for AnyVector128 {
    fn from(vector: Vector128<T>) -> Self {
        AnyVector128::from_halves(T::KIND, vector.lower(), vector.upper())
    }
}

impl<T: Element> TryFrom<AnyVector128> for Vector128<T> {
    type Error = crate::error::VectorError;

    /// Succeeds only when the tag matches `T`; use
    /// [`reinterpret`](AnyVector128::reinterpret) first to change it.
    fn try_from(value: AnyVector128) -> Result<Self> {
        if value.kind() != T::KIND {
            return Err(element_kind_mismatch(T::KIND, value.kind()));
        }
        let (lower, upper) = value.halves();
        Ok(Vector128::from_halves(lower, upper))
    }
}

impl fmt::Display for AnyVector128 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        with_vector!(self, v => write!(f, "{}{}", self.kind(), v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::VectorError;

    #[test]
    fn test_round_trip_through_tag() {
        let v = Vector128::<i16>::from_fn(|i| i as i16 * -3);
        let any = AnyVector128::from(v);
        assert_eq!(any.kind(), ElementKind::I16);
        assert_eq!(any.lane_count(), 8);
        assert_eq!(Vector128::<i16>::try_from(any), Ok(v));
        assert_eq!(
            Vector128::<u16>::try_from(any),
            Err(VectorError::ElementKindMismatch {
                expected: ElementKind::U16,
                found: ElementKind::I16
            })
        );
    }

    #[test]
    fn test_mismatched_kinds_are_rejected() {
        let a = AnyVector128::zero(ElementKind::I32);
        let b = AnyVector128::zero(ElementKind::F32);
        assert_eq!(
            a.add(&b),
            Err(element_kind_mismatch(ElementKind::I32, ElementKind::F32))
        );
        assert!(a.and(&a).is_ok());
    }

    #[test]
    fn test_arithmetic_follows_kind() {
        let bits = (u64::MAX, 0);
        let as_i8 = AnyVector128::from_halves(ElementKind::I8, bits.0, bits.1);
        let one = AnyVector128::from(Vector128::splat(1i8));
        let sum = as_i8.add(&one).unwrap();
        assert_eq!(sum.halves(), (0, 0x0101_0101_0101_0101));

        let as_u64 = as_i8.reinterpret(ElementKind::U64);
        let one = AnyVector128::from(Vector128::splat(1u64));
        assert_eq!(as_u64.add(&one).unwrap().halves(), (0, 1));
    }

    #[test]
    fn test_integer_divide_by_zero() {
        let a = AnyVector128::from(Vector128::splat(4u8));
        assert_eq!(
            a.divide(&AnyVector128::zero(ElementKind::U8)),
            Err(VectorError::DivideByZero)
        );
        let f = AnyVector128::from(Vector128::splat(4.0f32));
        assert!(f.divide(&AnyVector128::zero(ElementKind::F32)).is_ok());
    }

    #[test]
    fn test_shift_rejects_float_kinds() {
        let f = AnyVector128::zero(ElementKind::F64);
        assert_eq!(f.shift_left(1), Err(unsupported_element_type("f64")));
        assert_eq!(f.pop_count(), Err(unsupported_element_type("f64")));

        let i = AnyVector128::from(Vector128::splat(-16i32));
        let shifted = i.shift_right_arithmetic(2).unwrap();
        assert_eq!(shifted, AnyVector128::from(Vector128::splat(-4i32)));
    }

    #[test]
    fn test_element_bits() {
        let any = AnyVector128::from(Vector128::splat(-1.0f32));
        assert_eq!(any.element_bits(3), Ok(0xBF80_0000));
        assert_eq!(any.element_bits(4), Err(index_out_of_range(4, 4)));

        let updated = any.with_element_bits(0, 0x3F80_0000).unwrap();
        assert_eq!(updated.extract_most_significant_bits(), 0b1110);
        assert!(any.with_element_bits(9, 0).is_err());
    }

    #[test]
    fn test_display_includes_kind() {
        let any = AnyVector128::from(Vector128::<u32>::from_fn(|i| i as u32));
        assert_eq!(any.to_string(), "u32<0, 1, 2, 3>");
    }
}
