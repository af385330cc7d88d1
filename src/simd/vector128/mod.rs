//! Software 128-bit vector.
//!
//! [`Vector128<T>`] holds exactly 128 bits as two 64-bit halves and reads them
//! as `16 / size_of::<T>()` lanes of `T`. Lane `i` occupies bits
//! `i * T::BITS .. (i + 1) * T::BITS` of the 128-bit little-endian value, so
//! lane 0 always sits at the bottom of [`lower`](Vector128::lower) whatever the
//! host byte order.
//!
//! The value is immutable from the outside. Every operation returns a new
//! vector; lane writes only happen while a fresh vector is being built.
//!
//! The instruction set lives in the sibling modules as free functions and is
//! re-exported here, so callers write `vector128::add(a, b)` or simply `a + b`.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::ops::{
    Add, AddAssign, BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Div,
    DivAssign, Mul, MulAssign, Neg, Not, Shl, ShlAssign, Shr, ShrAssign, Sub, SubAssign,
};

use crate::error::{index_out_of_range, Result};
use crate::scalar::{Element, IntElement};

mod arith;
mod bitwise;
mod compare;
mod convert;
mod create;
mod math;
mod reduce;
mod shuffle;

pub use arith::*;
pub use bitwise::*;
pub use compare::*;
pub use convert::*;
pub use create::*;
pub use math::*;
pub use reduce::*;
pub use shuffle::*;

/// Size of a vector in bytes.
pub const VECTOR_BYTES: usize = 16;

/// Alignment required by the aligned load and store variants.
pub const ALIGNMENT: usize = 16;

/// A 128-bit vector of `T` lanes.
#[derive(Clone, Copy)]
#[repr(C, align(16))]
pub struct Vector128<T: Element> {
    lower: u64,
    upper: u64,
    element: PhantomData<T>,
}

const _: () = assert!(std::mem::size_of::<Vector128<u8>>() == VECTOR_BYTES);
const _: () = assert!(std::mem::size_of::<Vector128<f64>>() == VECTOR_BYTES);

impl<T: Element> Vector128<T> {
    /// Number of lanes. Fails to compile for a lane type whose size does not
    /// divide 16.
    pub const COUNT: usize = {
        assert!(
            T::SIZE > 0 && T::SIZE <= 8 && VECTOR_BYTES % T::SIZE == 0,
            "element size must evenly divide 16 bytes"
        );
        VECTOR_BYTES / T::SIZE
    };

    /// Number of lanes.
    #[inline(always)]
    pub const fn count() -> usize {
        Self::COUNT
    }

    /// Whether `T` can be a lane type. Always true: unsupported types do not
    /// implement [`Element`] and are rejected at compile time.
    #[inline(always)]
    pub const fn is_supported() -> bool {
        Self::COUNT > 0
    }

    /// Assembles a vector from its low and high 64-bit halves.
    #[inline(always)]
    pub const fn from_halves(lower: u64, upper: u64) -> Self {
        Self {
            lower,
            upper,
            element: PhantomData,
        }
    }

    /// Low 64 bits (lanes `0 .. COUNT / 2`).
    #[inline(always)]
    pub const fn lower(self) -> u64 {
        self.lower
    }

    /// High 64 bits (lanes `COUNT / 2 .. COUNT`).
    #[inline(always)]
    pub const fn upper(self) -> u64 {
        self.upper
    }

    #[inline(always)]
    pub const fn with_lower(self, lower: u64) -> Self {
        Self::from_halves(lower, self.upper)
    }

    #[inline(always)]
    pub const fn with_upper(self, upper: u64) -> Self {
        Self::from_halves(self.lower, upper)
    }

    #[inline(always)]
    pub const fn zero() -> Self {
        Self::from_halves(0, 0)
    }

    #[inline(always)]
    pub const fn all_bits_set() -> Self {
        Self::from_halves(u64::MAX, u64::MAX)
    }

    #[inline]
    pub fn one() -> Self {
        Self::splat(T::ONE)
    }

    /// Broadcasts `value` to every lane by tiling its bit pattern across each
    /// 64-bit half.
    #[inline]
    pub fn splat(value: T) -> Self {
        let bits = value.to_bits() & Self::lane_mask();
        let mut half = 0u64;
        let mut offset = 0;
        while offset + T::BITS <= 64 {
            half |= bits << offset;
            offset += T::BITS;
        }
        Self::from_halves(half, half)
    }

    /// Builds a vector lane by lane.
    #[inline]
    pub fn from_fn(mut f: impl FnMut(usize) -> T) -> Self {
        let mut vector = Self::zero();
        for index in 0..Self::COUNT {
            vector.set_element_unchecked(index, f(index));
        }
        vector
    }

    /// Loads the first `COUNT` elements of `values`.
    pub fn from_slice(values: &[T]) -> Result<Self> {
        load_from(values, 0)
    }

    /// Loads up to `COUNT` elements of `values`, zero-filling missing lanes.
    #[inline]
    pub fn load_partial(values: &[T]) -> Self {
        Self::from_fn(|index| values.get(index).copied().unwrap_or(T::ZERO))
    }

    /// Reads lane `index`.
    #[inline]
    pub fn get_element(self, index: usize) -> Result<T> {
        if index >= Self::COUNT {
            return Err(index_out_of_range(index, Self::COUNT));
        }
        Ok(self.element_unchecked(index))
    }

    /// Copy of `self` with lane `index` replaced by `value`.
    #[inline]
    pub fn with_element(self, index: usize, value: T) -> Result<Self> {
        if index >= Self::COUNT {
            return Err(index_out_of_range(index, Self::COUNT));
        }
        let mut vector = self;
        vector.set_element_unchecked(index, value);
        Ok(vector)
    }

    /// Lane 0.
    #[inline(always)]
    pub fn to_scalar(self) -> T {
        self.element_unchecked(0)
    }

    /// Lanes in order, lane 0 first.
    #[inline]
    pub fn iter(self) -> impl ExactSizeIterator<Item = T> {
        (0..Self::COUNT).map(move |index| self.element_unchecked(index))
    }

    pub fn to_vec(self) -> Vec<T> {
        self.iter().collect()
    }

    /// Writes every lane to the front of `destination`.
    pub fn copy_to(self, destination: &mut [T]) -> Result<()> {
        store_into(self, destination, 0)
    }

    /// Writes the first `destination.len()` lanes (at most `COUNT`).
    #[inline]
    pub fn store_partial(self, destination: &mut [T]) {
        for (index, slot) in destination.iter_mut().take(Self::COUNT).enumerate() {
            *slot = self.element_unchecked(index);
        }
    }

    /// Reinterprets the same 128 bits as lanes of `U`. No numeric conversion
    /// takes place.
    #[inline(always)]
    pub const fn bitcast<U: Element>(self) -> Vector128<U> {
        Vector128::from_halves(self.lower, self.upper)
    }

    /// The 128 bits in little-endian byte order.
    #[inline]
    pub fn to_bytes(self) -> [u8; VECTOR_BYTES] {
        let mut bytes = [0u8; VECTOR_BYTES];
        bytes[..8].copy_from_slice(&self.lower.to_le_bytes());
        bytes[8..].copy_from_slice(&self.upper.to_le_bytes());
        bytes
    }

    #[inline]
    pub fn from_bytes(bytes: [u8; VECTOR_BYTES]) -> Self {
        let mut lower = [0u8; 8];
        let mut upper = [0u8; 8];
        lower.copy_from_slice(&bytes[..8]);
        upper.copy_from_slice(&bytes[8..]);
        Self::from_halves(u64::from_le_bytes(lower), u64::from_le_bytes(upper))
    }

    #[inline(always)]
    const fn lane_mask() -> u64 {
        if T::BITS >= 64 {
            u64::MAX
        } else {
            (1u64 << T::BITS) - 1
        }
    }

    /// Bit offset of lane `index` inside its half, and whether it is the upper half.
    #[inline(always)]
    const fn locate(index: usize) -> (bool, u32) {
        let offset = index as u32 * T::BITS;
        if offset < 64 {
            (false, offset)
        } else {
            (true, offset - 64)
        }
    }

    /// Caller guarantees `index < COUNT`.
    #[inline(always)]
    pub(crate) fn element_unchecked(self, index: usize) -> T {
        let (in_upper, shift) = Self::locate(index);
        let half = if in_upper { self.upper } else { self.lower };
        T::from_bits((half >> shift) & Self::lane_mask())
    }

    /// Caller guarantees `index < COUNT`.
    #[inline(always)]
    fn set_element_unchecked(&mut self, index: usize, value: T) {
        let (in_upper, shift) = Self::locate(index);
        let mask = Self::lane_mask() << shift;
        let bits = (value.to_bits() << shift) & mask;
        let half = if in_upper {
            &mut self.upper
        } else {
            &mut self.lower
        };
        *half = (*half & !mask) | bits;
    }

    /// Applies `f` to every lane.
    #[inline]
    pub(crate) fn map<U: Element>(self, mut f: impl FnMut(T) -> U) -> Vector128<U> {
        Vector128::from_fn(|index| f(self.element_unchecked(index)))
    }

    /// Applies `f` to every pair of corresponding lanes.
    #[inline]
    pub(crate) fn zip_map<U: Element>(
        self,
        other: Self,
        mut f: impl FnMut(T, T) -> U,
    ) -> Vector128<U> {
        Vector128::from_fn(|index| f(self.element_unchecked(index), other.element_unchecked(index)))
    }

    /// Widens each lane's predicate into an all-bits-set or zero lane.
    #[inline]
    pub(crate) fn mask_where(self, mut predicate: impl FnMut(T) -> bool) -> Self {
        self.map(|lane| lane_mask_of::<T>(predicate(lane)))
    }

    #[inline]
    pub(crate) fn mask_where_pair(self, other: Self, mut predicate: impl FnMut(T, T) -> bool) -> Self {
        self.zip_map(other, |left, right| lane_mask_of::<T>(predicate(left, right)))
    }

    #[inline(always)]
    pub(crate) fn map_halves(self, f: impl Fn(u64) -> u64) -> Self {
        Self::from_halves(f(self.lower), f(self.upper))
    }

    #[inline(always)]
    pub(crate) fn zip_halves(self, other: Self, f: impl Fn(u64, u64) -> u64) -> Self {
        Self::from_halves(f(self.lower, other.lower), f(self.upper, other.upper))
    }
}

#[inline(always)]
pub(crate) fn lane_mask_of<T: Element>(condition: bool) -> T {
    if condition {
        T::ALL_BITS_SET
    } else {
        T::ZERO
    }
}

impl<T: Element> Default for Vector128<T> {
    fn default() -> Self {
        Self::zero()
    }
}

/// Bitwise equality of all 128 bits; identical NaN patterns compare equal.
impl<T: Element> PartialEq for Vector128<T> {
    #[inline(always)]
    fn eq(&self, other: &Self) -> bool {
        self.lower == other.lower && self.upper == other.upper
    }
}

impl<T: Element> Eq for Vector128<T> {}

impl<T: Element> Hash for Vector128<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.lower.hash(state);
        self.upper.hash(state);
    }
}

impl<T: Element> fmt::Display for Vector128<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<")?;
        for (index, lane) in self.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{lane}")?;
        }
        f.write_str(">")
    }
}

impl<T: Element> fmt::Debug for Vector128<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vector128<{}>", T::KIND)?;
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: Element> Add for Vector128<T> {
    type Output = Self;

    #[inline(always)]
    fn add(self, rhs: Self) -> Self::Output {
        arith::add(self, rhs)
    }
}

impl<T: Element> AddAssign for Vector128<T> {
    #[inline(always)]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<T: Element> Sub for Vector128<T> {
    type Output = Self;

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self::Output {
        arith::subtract(self, rhs)
    }
}

impl<T: Element> SubAssign for Vector128<T> {
    #[inline(always)]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<T: Element> Mul for Vector128<T> {
    type Output = Self;

    #[inline(always)]
    fn mul(self, rhs: Self) -> Self::Output {
        arith::multiply(self, rhs)
    }
}

impl<T: Element> Mul<T> for Vector128<T> {
    type Output = Self;

    #[inline(always)]
    fn mul(self, rhs: T) -> Self::Output {
        arith::multiply_scalar(self, rhs)
    }
}

impl<T: Element> MulAssign for Vector128<T> {
    #[inline(always)]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

/// Panics when an integer lane of `rhs` is zero, like integer division does.
/// Use [`divide`] to get the error instead.
impl<T: Element> Div for Vector128<T> {
    type Output = Self;

    #[inline]
    fn div(self, rhs: Self) -> Self::Output {
        match arith::divide(self, rhs) {
            Ok(quotient) => quotient,
            Err(error) => panic!("{error}"),
        }
    }
}

impl<T: Element> DivAssign for Vector128<T> {
    #[inline]
    fn div_assign(&mut self, rhs: Self) {
        *self = *self / rhs;
    }
}

impl<T: Element> Neg for Vector128<T> {
    type Output = Self;

    #[inline(always)]
    fn neg(self) -> Self::Output {
        arith::negate(self)
    }
}

impl<T: Element> BitAnd for Vector128<T> {
    type Output = Self;

    #[inline(always)]
    fn bitand(self, rhs: Self) -> Self::Output {
        bitwise::and(self, rhs)
    }
}

impl<T: Element> BitAndAssign for Vector128<T> {
    #[inline(always)]
    fn bitand_assign(&mut self, rhs: Self) {
        *self = *self & rhs;
    }
}

impl<T: Element> BitOr for Vector128<T> {
    type Output = Self;

    #[inline(always)]
    fn bitor(self, rhs: Self) -> Self::Output {
        bitwise::or(self, rhs)
    }
}

impl<T: Element> BitOrAssign for Vector128<T> {
    #[inline(always)]
    fn bitor_assign(&mut self, rhs: Self) {
        *self = *self | rhs;
    }
}

impl<T: Element> BitXor for Vector128<T> {
    type Output = Self;

    #[inline(always)]
    fn bitxor(self, rhs: Self) -> Self::Output {
        bitwise::xor(self, rhs)
    }
}

impl<T: Element> BitXorAssign for Vector128<T> {
    #[inline(always)]
    fn bitxor_assign(&mut self, rhs: Self) {
        *self = *self ^ rhs;
    }
}

impl<T: Element> Not for Vector128<T> {
    type Output = Self;

    #[inline(always)]
    fn not(self) -> Self::Output {
        bitwise::ones_complement(self)
    }
}

impl<T: IntElement> Shl<u32> for Vector128<T> {
    type Output = Self;

    #[inline(always)]
    fn shl(self, amount: u32) -> Self::Output {
        bitwise::shift_left(self, amount)
    }
}

impl<T: IntElement> ShlAssign<u32> for Vector128<T> {
    #[inline(always)]
    fn shl_assign(&mut self, amount: u32) {
        *self = *self << amount;
    }
}

/// Arithmetic for signed lanes, logical for unsigned ones, like `>>` on the
/// scalar types.
impl<T: IntElement> Shr<u32> for Vector128<T> {
    type Output = Self;

    #[inline(always)]
    fn shr(self, amount: u32) -> Self::Output {
        bitwise::shift_right_arithmetic(self, amount)
    }
}

impl<T: IntElement> ShrAssign<u32> for Vector128<T> {
    #[inline(always)]
    fn shr_assign(&mut self, amount: u32) {
        *self = *self >> amount;
    }
}
