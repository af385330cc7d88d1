use super::{private::Sealed, Element, ElementKind, FloatElement};
use crate::error::Result;

macro_rules! impl_float_element {
    ($($t:ident => $bits:ty, $kind:ident;)*) => {$(
        impl Sealed for $t {}

        impl Element for $t {
            const KIND: ElementKind = ElementKind::$kind;
            const BITS: u32 = <$bits>::BITS;
            const ZERO: Self = 0.0;
            const ONE: Self = 1.0;
            const ALL_BITS_SET: Self = $t::from_bits(<$bits>::MAX);
            const MIN_VALUE: Self = $t::MIN;
            const MAX_VALUE: Self = $t::MAX;
            const IS_UNSIGNED: bool = false;
            const IS_FLOAT: bool = true;

            type Index = $bits;

            #[inline(always)]
            fn to_bits(self) -> u64 {
                $t::to_bits(self) as u64
            }

            #[inline(always)]
            fn from_bits(bits: u64) -> Self {
                $t::from_bits(bits as $bits)
            }

            #[inline(always)]
            fn add(self, rhs: Self) -> Self {
                self + rhs
            }

            #[inline(always)]
            fn subtract(self, rhs: Self) -> Self {
                self - rhs
            }

            #[inline(always)]
            fn multiply(self, rhs: Self) -> Self {
                self * rhs
            }

            #[inline(always)]
            fn divide(self, rhs: Self) -> Result<Self> {
                Ok(self / rhs)
            }

            #[inline(always)]
            fn negate(self) -> Self {
                -self
            }

            #[inline(always)]
            fn abs(self) -> Self {
                $t::abs(self)
            }

            // Floats have no saturation point short of infinity
            #[inline(always)]
            fn add_saturate(self, rhs: Self) -> Self {
                self + rhs
            }

            #[inline(always)]
            fn subtract_saturate(self, rhs: Self) -> Self {
                self - rhs
            }

            #[inline(always)]
            fn multiply_add(self, multiplier: Self, addend: Self) -> Self {
                $t::mul_add(self, multiplier, addend)
            }

            #[inline]
            fn minimum(self, rhs: Self) -> Self {
                if self != rhs {
                    if $t::is_nan(self) {
                        return self;
                    }
                    return if self < rhs { self } else { rhs };
                }
                if $t::is_sign_negative(self) {
                    self
                } else {
                    rhs
                }
            }

            #[inline]
            fn maximum(self, rhs: Self) -> Self {
                if self != rhs {
                    if $t::is_nan(self) {
                        return self;
                    }
                    return if rhs < self { self } else { rhs };
                }
                if $t::is_sign_negative(rhs) {
                    self
                } else {
                    rhs
                }
            }

            #[inline(always)]
            fn min_native(self, rhs: Self) -> Self {
                if self < rhs {
                    self
                } else {
                    rhs
                }
            }

            #[inline(always)]
            fn max_native(self, rhs: Self) -> Self {
                if self > rhs {
                    self
                } else {
                    rhs
                }
            }

            #[inline(always)]
            fn floor(self) -> Self {
                $t::floor(self)
            }

            #[inline(always)]
            fn ceiling(self) -> Self {
                $t::ceil(self)
            }

            #[inline(always)]
            fn round(self) -> Self {
                $t::round_ties_even(self)
            }

            #[inline(always)]
            fn truncate(self) -> Self {
                $t::trunc(self)
            }

            #[inline(always)]
            fn sqrt(self) -> Self {
                $t::sqrt(self)
            }

            #[inline(always)]
            fn copy_sign(self, sign: Self) -> Self {
                $t::copysign(self, sign)
            }

            #[inline(always)]
            fn equals(self, rhs: Self) -> bool {
                self == rhs
            }

            #[inline(always)]
            fn less_than(self, rhs: Self) -> bool {
                self < rhs
            }

            #[inline(always)]
            fn less_than_or_equal(self, rhs: Self) -> bool {
                self <= rhs
            }

            #[inline(always)]
            fn greater_than(self, rhs: Self) -> bool {
                self > rhs
            }

            #[inline(always)]
            fn greater_than_or_equal(self, rhs: Self) -> bool {
                self >= rhs
            }

            #[inline(always)]
            fn is_negative(self) -> bool {
                $t::is_sign_negative(self)
            }

            #[inline(always)]
            fn is_zero(self) -> bool {
                self == 0.0
            }

            #[inline(always)]
            fn is_nan(self) -> bool {
                $t::is_nan(self)
            }

            #[inline(always)]
            fn is_infinity(self) -> bool {
                $t::is_infinite(self)
            }

            #[inline(always)]
            fn is_finite(self) -> bool {
                $t::is_finite(self)
            }

            #[inline(always)]
            fn is_normal(self) -> bool {
                $t::is_normal(self)
            }

            #[inline(always)]
            fn is_subnormal(self) -> bool {
                $t::is_subnormal(self)
            }

            #[inline]
            fn is_integer(self) -> bool {
                $t::is_finite(self) && $t::trunc(self) == self
            }

            #[inline]
            fn is_even_integer(self) -> bool {
                Element::is_integer(self) && self % 2.0 == 0.0
            }

            #[inline]
            fn is_odd_integer(self) -> bool {
                Element::is_integer(self) && $t::abs(self % 2.0) == 1.0
            }
        }

        impl FloatElement for $t {
            #[inline]
            fn degrees_to_radians(self) -> Self {
                (self * std::$t::consts::PI) / 180.0
            }

            #[inline]
            fn radians_to_degrees(self) -> Self {
                (self * 180.0) / std::$t::consts::PI
            }
        }
    )*};
}

impl_float_element! {
    f32 => u32, F32;
    f64 => u64, F64;
}
