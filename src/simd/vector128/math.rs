//! Transcendental functions on float lanes.
//!
//! Each lane goes through the platform's scalar routine via [`num::Float`],
//! so results are bit-identical to calling `f32::sin` and friends on every
//! lane.

use super::Vector128;
use crate::scalar::{Element, FloatElement};

#[inline]
pub fn sin<T: FloatElement>(vector: Vector128<T>) -> Vector128<T> {
    vector.map(num::Float::sin)
}

#[inline]
pub fn cos<T: FloatElement>(vector: Vector128<T>) -> Vector128<T> {
    vector.map(num::Float::cos)
}

#[inline]
pub fn sin_cos<T: FloatElement>(vector: Vector128<T>) -> (Vector128<T>, Vector128<T>) {
    (sin(vector), cos(vector))
}

#[inline]
pub fn exp<T: FloatElement>(vector: Vector128<T>) -> Vector128<T> {
    vector.map(num::Float::exp)
}

/// Natural logarithm.
#[inline]
pub fn log<T: FloatElement>(vector: Vector128<T>) -> Vector128<T> {
    vector.map(num::Float::ln)
}

#[inline]
pub fn log2<T: FloatElement>(vector: Vector128<T>) -> Vector128<T> {
    vector.map(num::Float::log2)
}

/// `sqrt(x^2 + y^2)` without intermediate overflow.
#[inline]
pub fn hypot<T: FloatElement>(x: Vector128<T>, y: Vector128<T>) -> Vector128<T> {
    x.zip_map(y, num::Float::hypot)
}

/// `x * (1 - amount) + y * amount`, rounded after each step.
pub fn lerp<T: FloatElement>(
    x: Vector128<T>,
    y: Vector128<T>,
    amount: Vector128<T>,
) -> Vector128<T> {
    Vector128::from_fn(|index| {
        let weight = amount.element_unchecked(index);
        let from = x.element_unchecked(index).multiply(T::ONE.subtract(weight));
        let to = y.element_unchecked(index).multiply(weight);
        Element::add(from, to)
    })
}

#[inline]
pub fn degrees_to_radians<T: FloatElement>(vector: Vector128<T>) -> Vector128<T> {
    vector.map(FloatElement::degrees_to_radians)
}

#[inline]
pub fn radians_to_degrees<T: FloatElement>(vector: Vector128<T>) -> Vector128<T> {
    vector.map(FloatElement::radians_to_degrees)
}
