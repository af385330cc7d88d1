//! Widening, narrowing and numeric conversion between lane types.

use super::Vector128;
use crate::scalar::Element;

/// Lane types with a twice-as-wide counterpart.
pub trait Widen: Element {
    type Wide: Element;

    /// Sign- or zero-extends integers; exact for `f32 -> f64`.
    fn widen(self) -> Self::Wide;
}

/// Lane types with a half-as-wide counterpart.
pub trait Narrow: Element {
    type Narrow: Element;

    /// Keeps the low bits of integers; rounds to nearest for `f64 -> f32`.
    fn narrow(self) -> Self::Narrow;

    /// Clamps integers to the narrow type's range first. Floats convert as in
    /// [`narrow`](Narrow::narrow), overflowing to infinity.
    fn narrow_saturate(self) -> Self::Narrow;
}

macro_rules! widen_narrow {
    ($($narrow:ty => $wide:ty;)*) => {$(
        impl Widen for $narrow {
            type Wide = $wide;

            #[inline(always)]
            fn widen(self) -> $wide {
                self as $wide
            }
        }

        impl Narrow for $wide {
            type Narrow = $narrow;

            #[inline(always)]
            fn narrow(self) -> $narrow {
                self as $narrow
            }

            #[inline]
            fn narrow_saturate(self) -> $narrow {
                num::clamp(self, <$narrow>::MIN as $wide, <$narrow>::MAX as $wide) as $narrow
            }
        }
    )*};
}

widen_narrow! {
    i8 => i16;
    u8 => u16;
    i16 => i32;
    u16 => u32;
    i32 => i64;
    u32 => u64;
}

impl Widen for f32 {
    type Wide = f64;

    #[inline(always)]
    fn widen(self) -> f64 {
        self as f64
    }
}

impl Narrow for f64 {
    type Narrow = f32;

    #[inline(always)]
    fn narrow(self) -> f32 {
        self as f32
    }

    #[inline(always)]
    fn narrow_saturate(self) -> f32 {
        self as f32
    }
}

/// Widens the lower half of the lanes.
#[inline]
pub fn widen_lower<T: Widen>(vector: Vector128<T>) -> Vector128<T::Wide> {
    Vector128::from_fn(|index| vector.element_unchecked(index).widen())
}

/// Widens the upper half of the lanes.
#[inline]
pub fn widen_upper<T: Widen>(vector: Vector128<T>) -> Vector128<T::Wide> {
    let half = Vector128::<T::Wide>::COUNT;
    Vector128::from_fn(|index| vector.element_unchecked(half + index).widen())
}

/// `(widen_lower(vector), widen_upper(vector))`.
#[inline]
pub fn widen<T: Widen>(vector: Vector128<T>) -> (Vector128<T::Wide>, Vector128<T::Wide>) {
    (widen_lower(vector), widen_upper(vector))
}

/// Packs two wide vectors into one; `lower`'s lanes come first.
#[inline]
pub fn narrow<T: Narrow>(lower: Vector128<T>, upper: Vector128<T>) -> Vector128<T::Narrow> {
    let half = Vector128::<T>::COUNT;
    Vector128::from_fn(|index| {
        if index < half {
            lower.element_unchecked(index).narrow()
        } else {
            upper.element_unchecked(index - half).narrow()
        }
    })
}

/// [`narrow`] with clamping instead of truncation.
#[inline]
pub fn narrow_saturate<T: Narrow>(
    lower: Vector128<T>,
    upper: Vector128<T>,
) -> Vector128<T::Narrow> {
    let half = Vector128::<T>::COUNT;
    Vector128::from_fn(|index| {
        if index < half {
            lower.element_unchecked(index).narrow_saturate()
        } else {
            upper.element_unchecked(index - half).narrow_saturate()
        }
    })
}

/// Same-width numeric conversion between lane types.
///
/// Float-to-integer conversions truncate toward zero, saturate at the
/// target's bounds and map NaN to zero.
pub trait ConvertLane<U: Element>: Element {
    fn convert_lane(self) -> U;
}

macro_rules! convert_lane {
    ($($from:ty => $to:ty;)*) => {$(
        impl ConvertLane<$to> for $from {
            #[inline(always)]
            fn convert_lane(self) -> $to {
                self as $to
            }
        }
    )*};
}

// `as` rounds to nearest for integer to float and saturates for float to integer
convert_lane! {
    i32 => f32;
    u32 => f32;
    i64 => f64;
    u64 => f64;
    f32 => i32;
    f32 => u32;
    f64 => i64;
    f64 => u64;
}

/// Converts every lane to `U`.
#[inline]
pub fn convert<T: ConvertLane<U>, U: Element>(vector: Vector128<T>) -> Vector128<U> {
    Vector128::from_fn(|index| vector.element_unchecked(index).convert_lane())
}

#[inline]
pub fn convert_to_f32<T: ConvertLane<f32>>(vector: Vector128<T>) -> Vector128<f32> {
    convert(vector)
}

#[inline]
pub fn convert_to_f64<T: ConvertLane<f64>>(vector: Vector128<T>) -> Vector128<f64> {
    convert(vector)
}

#[inline]
pub fn convert_to_i32(vector: Vector128<f32>) -> Vector128<i32> {
    convert(vector)
}

#[inline]
pub fn convert_to_u32(vector: Vector128<f32>) -> Vector128<u32> {
    convert(vector)
}

#[inline]
pub fn convert_to_i64(vector: Vector128<f64>) -> Vector128<i64> {
    convert(vector)
}

#[inline]
pub fn convert_to_u64(vector: Vector128<f64>) -> Vector128<u64> {
    convert(vector)
}
