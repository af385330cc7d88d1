//! Comparisons and lane classification.
//!
//! Mask-returning functions set a lane to all ones where the predicate holds
//! and to zero elsewhere. Feed the result to
//! [`conditional_select`](super::conditional_select) or
//! [`extract_most_significant_bits`](super::extract_most_significant_bits).
//! The `_all` and `_any` forms collapse the same predicate into a `bool`.

use super::Vector128;
use crate::scalar::Element;

macro_rules! comparison {
    ($($mask:ident, $all:ident, $any:ident => $op:ident;)*) => {$(
        #[inline]
        pub fn $mask<T: Element>(left: Vector128<T>, right: Vector128<T>) -> Vector128<T> {
            left.mask_where_pair(right, T::$op)
        }

        #[inline]
        pub fn $all<T: Element>(left: Vector128<T>, right: Vector128<T>) -> bool {
            left.iter().zip(right.iter()).all(|(a, b)| a.$op(b))
        }

        #[inline]
        pub fn $any<T: Element>(left: Vector128<T>, right: Vector128<T>) -> bool {
            left.iter().zip(right.iter()).any(|(a, b)| a.$op(b))
        }
    )*};
}

comparison! {
    equals, equals_all, equals_any => equals;
    less_than, less_than_all, less_than_any => less_than;
    less_than_or_equal, less_than_or_equal_all, less_than_or_equal_any => less_than_or_equal;
    greater_than, greater_than_all, greater_than_any => greater_than;
    greater_than_or_equal, greater_than_or_equal_all, greater_than_or_equal_any => greater_than_or_equal;
}

/// Lanes where `left != right`; NaN lanes are always unequal.
#[inline]
pub fn not_equals<T: Element>(left: Vector128<T>, right: Vector128<T>) -> Vector128<T> {
    left.mask_where_pair(right, |a, b| !a.equals(b))
}

#[inline]
pub fn is_nan<T: Element>(vector: Vector128<T>) -> Vector128<T> {
    vector.mask_where(T::is_nan)
}

#[inline]
pub fn is_infinity<T: Element>(vector: Vector128<T>) -> Vector128<T> {
    vector.mask_where(T::is_infinity)
}

#[inline]
pub fn is_positive_infinity<T: Element>(vector: Vector128<T>) -> Vector128<T> {
    vector.mask_where(|lane| lane.is_infinity() && !lane.is_negative())
}

#[inline]
pub fn is_negative_infinity<T: Element>(vector: Vector128<T>) -> Vector128<T> {
    vector.mask_where(|lane| lane.is_infinity() && lane.is_negative())
}

#[inline]
pub fn is_finite<T: Element>(vector: Vector128<T>) -> Vector128<T> {
    vector.mask_where(T::is_finite)
}

/// Nonzero for integers; neither zero, subnormal, infinite nor NaN for floats.
#[inline]
pub fn is_normal<T: Element>(vector: Vector128<T>) -> Vector128<T> {
    vector.mask_where(T::is_normal)
}

#[inline]
pub fn is_subnormal<T: Element>(vector: Vector128<T>) -> Vector128<T> {
    vector.mask_where(T::is_subnormal)
}

/// Sign bit set. Never true for unsigned lanes; true for `-0.0`.
#[inline]
pub fn is_negative<T: Element>(vector: Vector128<T>) -> Vector128<T> {
    vector.mask_where(T::is_negative)
}

/// Sign bit clear. Always true for unsigned lanes; true for `+0.0`.
#[inline]
pub fn is_positive<T: Element>(vector: Vector128<T>) -> Vector128<T> {
    vector.mask_where(|lane| !lane.is_negative())
}

#[inline]
pub fn is_zero<T: Element>(vector: Vector128<T>) -> Vector128<T> {
    vector.mask_where(T::is_zero)
}

#[inline]
pub fn is_integer<T: Element>(vector: Vector128<T>) -> Vector128<T> {
    vector.mask_where(T::is_integer)
}

#[inline]
pub fn is_even_integer<T: Element>(vector: Vector128<T>) -> Vector128<T> {
    vector.mask_where(T::is_even_integer)
}

#[inline]
pub fn is_odd_integer<T: Element>(vector: Vector128<T>) -> Vector128<T> {
    vector.mask_where(T::is_odd_integer)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn floats(values: [f32; 4]) -> Vector128<f32> {
        Vector128::from_fn(|i| values[i])
    }

    #[test]
    fn test_comparison_masks() {
        let a = Vector128::<i32>::from_fn(|i| i as i32);
        let b = Vector128::splat(2i32);

        assert_eq!(less_than(a, b).to_vec(), vec![-1, -1, 0, 0]);
        assert_eq!(equals(a, b).to_vec(), vec![0, 0, -1, 0]);
        assert_eq!(greater_than_or_equal(a, b).to_vec(), vec![0, 0, -1, -1]);
        assert_eq!(not_equals(a, b).to_vec(), vec![-1, -1, 0, -1]);

        assert!(less_than_any(a, b));
        assert!(!less_than_all(a, b));
        assert!(less_than_or_equal_all(a, Vector128::splat(3)));
        assert!(!equals_any(a, Vector128::splat(9)));
    }

    #[test]
    fn test_float_mask_is_all_bits_set() {
        let mask = greater_than(floats([1.0, -1.0, 0.0, 2.0]), Vector128::zero());
        assert_eq!(mask.bitcast::<u32>().to_vec(), vec![u32::MAX, 0, 0, u32::MAX]);
    }

    #[test]
    fn test_nan_compares_false() {
        let v = floats([f32::NAN, 1.0, f32::NAN, 1.0]);
        assert_eq!(equals(v, v).bitcast::<u32>().to_vec(), vec![0, u32::MAX, 0, u32::MAX]);
        assert!(!equals_all(v, v));
        assert_eq!(
            not_equals(v, v).bitcast::<u32>().to_vec(),
            vec![u32::MAX, 0, u32::MAX, 0]
        );
    }

    #[test]
    fn test_float_classification_masks() {
        let v = floats([f32::INFINITY, f32::NEG_INFINITY, -0.0, 1.0e-40]);
        let bits = |m: Vector128<f32>| m.bitcast::<u32>().to_vec();

        assert_eq!(bits(is_infinity(v)), vec![u32::MAX, u32::MAX, 0, 0]);
        assert_eq!(bits(is_positive_infinity(v)), vec![u32::MAX, 0, 0, 0]);
        assert_eq!(bits(is_negative_infinity(v)), vec![0, u32::MAX, 0, 0]);
        assert_eq!(bits(is_finite(v)), vec![0, 0, u32::MAX, u32::MAX]);
        assert_eq!(bits(is_subnormal(v)), vec![0, 0, 0, u32::MAX]);
        assert_eq!(bits(is_zero(v)), vec![0, 0, u32::MAX, 0]);
        assert_eq!(bits(is_negative(v)), vec![0, u32::MAX, u32::MAX, 0]);
        assert_eq!(bits(is_positive(v)), vec![u32::MAX, 0, 0, u32::MAX]);
        assert_eq!(bits(is_normal(v)), vec![0, 0, 0, 0]);
    }

    #[test]
    fn test_integer_classification_masks() {
        let v = Vector128::<i16>::from_fn(|i| i as i16 - 4);
        assert_eq!(is_negative(v).to_vec(), vec![-1, -1, -1, -1, 0, 0, 0, 0]);
        assert_eq!(is_even_integer(v).to_vec(), vec![-1, 0, -1, 0, -1, 0, -1, 0]);
        assert_eq!(is_odd_integer(v).to_vec(), vec![0, -1, 0, -1, 0, -1, 0, -1]);
        assert_eq!(is_nan(v), Vector128::zero());
        assert_eq!(is_integer(v), Vector128::all_bits_set());

        let u = Vector128::splat(u8::MAX);
        assert_eq!(is_negative(u), Vector128::zero());
        assert_eq!(is_positive(u), Vector128::all_bits_set());
    }
}
