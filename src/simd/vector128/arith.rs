//! Lane-wise arithmetic.
//!
//! Integer lanes wrap unless the name says `saturate`; float lanes follow
//! IEEE-754 with round-to-nearest-even.

use super::Vector128;
use crate::error::Result;
use crate::scalar::Element;

#[inline]
pub fn add<T: Element>(left: Vector128<T>, right: Vector128<T>) -> Vector128<T> {
    left.zip_map(right, T::add)
}

#[inline]
pub fn subtract<T: Element>(left: Vector128<T>, right: Vector128<T>) -> Vector128<T> {
    left.zip_map(right, T::subtract)
}

#[inline]
pub fn multiply<T: Element>(left: Vector128<T>, right: Vector128<T>) -> Vector128<T> {
    left.zip_map(right, T::multiply)
}

/// Multiplies every lane by the same scalar.
#[inline]
pub fn multiply_scalar<T: Element>(left: Vector128<T>, right: T) -> Vector128<T> {
    left.map(|lane| lane.multiply(right))
}

/// Lane-wise quotient. An integer zero in any lane of `right` fails the whole
/// operation with [`DivideByZero`](crate::error::VectorError::DivideByZero).
pub fn divide<T: Element>(left: Vector128<T>, right: Vector128<T>) -> Result<Vector128<T>> {
    let mut quotient = Vector128::zero();
    for index in 0..Vector128::<T>::COUNT {
        let lane = left
            .element_unchecked(index)
            .divide(right.element_unchecked(index))?;
        quotient = quotient.with_element(index, lane)?;
    }
    Ok(quotient)
}

/// Divides every lane by the same scalar.
pub fn divide_scalar<T: Element>(left: Vector128<T>, right: T) -> Result<Vector128<T>> {
    divide(left, Vector128::splat(right))
}

#[inline]
pub fn negate<T: Element>(vector: Vector128<T>) -> Vector128<T> {
    vector.map(T::negate)
}

/// For signed integers the most negative value stays unchanged.
#[inline]
pub fn abs<T: Element>(vector: Vector128<T>) -> Vector128<T> {
    vector.map(T::abs)
}

#[inline]
pub fn sqrt<T: Element>(vector: Vector128<T>) -> Vector128<T> {
    vector.map(T::sqrt)
}

#[inline]
pub fn floor<T: Element>(vector: Vector128<T>) -> Vector128<T> {
    vector.map(T::floor)
}

#[inline]
pub fn ceiling<T: Element>(vector: Vector128<T>) -> Vector128<T> {
    vector.map(T::ceiling)
}

/// Round half to even.
#[inline]
pub fn round<T: Element>(vector: Vector128<T>) -> Vector128<T> {
    vector.map(T::round)
}

#[inline]
pub fn truncate<T: Element>(vector: Vector128<T>) -> Vector128<T> {
    vector.map(T::truncate)
}

/// NaN-propagating minimum with `-0.0 < +0.0`.
#[inline]
pub fn min<T: Element>(left: Vector128<T>, right: Vector128<T>) -> Vector128<T> {
    left.zip_map(right, T::minimum)
}

/// NaN-propagating maximum with `-0.0 < +0.0`.
#[inline]
pub fn max<T: Element>(left: Vector128<T>, right: Vector128<T>) -> Vector128<T> {
    left.zip_map(right, T::maximum)
}

/// `left < right ? left : right` per lane. A NaN in either lane yields `right`.
#[inline]
pub fn min_native<T: Element>(left: Vector128<T>, right: Vector128<T>) -> Vector128<T> {
    left.zip_map(right, T::min_native)
}

/// `left > right ? left : right` per lane. A NaN in either lane yields `right`.
#[inline]
pub fn max_native<T: Element>(left: Vector128<T>, right: Vector128<T>) -> Vector128<T> {
    left.zip_map(right, T::max_native)
}

/// `min(max(value, low), high)` per lane. Bounds are not validated.
#[inline]
pub fn clamp<T: Element>(
    value: Vector128<T>,
    low: Vector128<T>,
    high: Vector128<T>,
) -> Vector128<T> {
    min(max(value, low), high)
}

#[inline]
pub fn copy_sign<T: Element>(value: Vector128<T>, sign: Vector128<T>) -> Vector128<T> {
    value.zip_map(sign, T::copy_sign)
}

/// `left * right + addend` with a single rounding for float lanes.
pub fn fused_multiply_add<T: Element>(
    left: Vector128<T>,
    right: Vector128<T>,
    addend: Vector128<T>,
) -> Vector128<T> {
    Vector128::from_fn(|index| {
        left.element_unchecked(index).multiply_add(
            right.element_unchecked(index),
            addend.element_unchecked(index),
        )
    })
}

/// Integer lanes clamp at the type's bounds; float lanes add normally.
#[inline]
pub fn add_saturate<T: Element>(left: Vector128<T>, right: Vector128<T>) -> Vector128<T> {
    left.zip_map(right, T::add_saturate)
}

#[inline]
pub fn subtract_saturate<T: Element>(left: Vector128<T>, right: Vector128<T>) -> Vector128<T> {
    left.zip_map(right, T::subtract_saturate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::VectorError;

    #[test]
    fn test_integer_add_wraps() {
        let a = Vector128::splat(i8::MAX);
        let b = Vector128::splat(1i8);
        assert_eq!(add(a, b), Vector128::splat(i8::MIN));
        assert_eq!(add_saturate(a, b), Vector128::splat(i8::MAX));
    }

    #[test]
    fn test_subtract_saturate_unsigned_floor() {
        let a = Vector128::<u16>::from_fn(|i| i as u16);
        let b = Vector128::splat(3u16);
        assert_eq!(subtract_saturate(a, b).to_vec(), vec![0, 0, 0, 0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_divide_reports_zero_lane() {
        let a = Vector128::splat(10i32);
        let b = Vector128::<i32>::from_fn(|i| i as i32);
        assert_eq!(divide(a, b), Err(VectorError::DivideByZero));

        let b = Vector128::<i32>::from_fn(|i| i as i32 + 1);
        assert_eq!(divide(a, b).map(|q| q.to_vec()), Ok(vec![10, 5, 3, 2]));
        assert_eq!(
            divide(Vector128::splat(i32::MIN), Vector128::splat(-1)),
            Ok(Vector128::splat(i32::MIN))
        );
    }

    #[test]
    fn test_float_divide_by_zero_is_ieee() {
        let q = divide(Vector128::splat(1.0f64), Vector128::zero()).unwrap();
        assert_eq!(q, Vector128::splat(f64::INFINITY));
        assert_eq!(
            divide_scalar(Vector128::splat(3.0f32), 2.0).unwrap(),
            Vector128::splat(1.5)
        );
    }

    #[test]
    fn test_min_max_nan_and_zero_sign() {
        let a = Vector128::<f32>::from_fn(|i| [f32::NAN, 1.0, -0.0, 0.0][i]);
        let b = Vector128::<f32>::from_fn(|i| [1.0, f32::NAN, 0.0, -0.0][i]);

        let lo = min(a, b).to_vec();
        assert!(lo[0].is_nan() && lo[1].is_nan());
        assert!(lo[2].is_sign_negative() && lo[3].is_sign_negative());

        let hi = max(a, b).to_vec();
        assert!(hi[0].is_nan() && hi[1].is_nan());
        assert!(hi[2].is_sign_positive() && hi[3].is_sign_positive());

        let native = max_native(a, b).to_vec();
        assert_eq!(native[0], 1.0);
        assert!(native[1].is_nan());
    }

    #[test]
    fn test_clamp_applies_max_then_min() {
        let value = Vector128::<i32>::from_fn(|i| i as i32 * 10 - 10);
        let low = Vector128::splat(0);
        let high = Vector128::splat(15);
        assert_eq!(clamp(value, low, high).to_vec(), vec![0, 0, 10, 15]);

        // Inverted bounds resolve to `high`
        assert_eq!(clamp(value, high, low), Vector128::splat(0));
    }

    #[test]
    fn test_rounding_family() {
        let v = Vector128::<f64>::from_fn(|i| [-2.5, 2.5][i]);
        assert_eq!(round(v).to_vec(), vec![-2.0, 2.0]);
        assert_eq!(floor(v).to_vec(), vec![-3.0, 2.0]);
        assert_eq!(ceiling(v).to_vec(), vec![-2.0, 3.0]);
        assert_eq!(truncate(v).to_vec(), vec![-2.0, 2.0]);
    }

    #[test]
    fn test_abs_keeps_min_value() {
        let v = Vector128::<i16>::from_fn(|i| if i == 0 { i16::MIN } else { -(i as i16) });
        let a = abs(v).to_vec();
        assert_eq!(a[0], i16::MIN);
        assert_eq!(&a[1..], &[1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn test_copy_sign_and_fma() {
        let magnitude = Vector128::splat(2.0f32);
        let sign = Vector128::<f32>::from_fn(|i| if i % 2 == 0 { -0.0 } else { 1.0 });
        assert_eq!(copy_sign(magnitude, sign).to_vec(), vec![-2.0, 2.0, -2.0, 2.0]);

        let r = fused_multiply_add(
            Vector128::splat(3i32),
            Vector128::splat(4),
            Vector128::splat(-2),
        );
        assert_eq!(r, Vector128::splat(10));
    }
}
