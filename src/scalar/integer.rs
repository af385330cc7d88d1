use super::{private::Sealed, Element, ElementKind, IntElement};
use crate::error::{Result, VectorError};

// Items shared by every integer lane type.
macro_rules! integer_common {
    ($t:ty, $unsigned:ty, $kind:ident) => {
        const KIND: ElementKind = ElementKind::$kind;
        const BITS: u32 = <$t>::BITS;
        const ZERO: Self = 0;
        const ONE: Self = 1;
        const ALL_BITS_SET: Self = !0;
        const MIN_VALUE: Self = <$t>::MIN;
        const MAX_VALUE: Self = <$t>::MAX;
        const IS_FLOAT: bool = false;

        type Index = $unsigned;

        #[inline(always)]
        fn to_bits(self) -> u64 {
            self as $unsigned as u64
        }

        #[inline(always)]
        fn from_bits(bits: u64) -> Self {
            bits as $unsigned as $t
        }

        #[inline(always)]
        fn add(self, rhs: Self) -> Self {
            <$t>::wrapping_add(self, rhs)
        }

        #[inline(always)]
        fn subtract(self, rhs: Self) -> Self {
            <$t>::wrapping_sub(self, rhs)
        }

        #[inline(always)]
        fn multiply(self, rhs: Self) -> Self {
            <$t>::wrapping_mul(self, rhs)
        }

        #[inline]
        fn divide(self, rhs: Self) -> Result<Self> {
            if rhs == 0 {
                return Err(VectorError::DivideByZero);
            }
            // MIN / -1 wraps back to MIN
            Ok(<$t>::wrapping_div(self, rhs))
        }

        #[inline(always)]
        fn negate(self) -> Self {
            <$t>::wrapping_neg(self)
        }

        #[inline(always)]
        fn add_saturate(self, rhs: Self) -> Self {
            <$t>::saturating_add(self, rhs)
        }

        #[inline(always)]
        fn subtract_saturate(self, rhs: Self) -> Self {
            <$t>::saturating_sub(self, rhs)
        }

        #[inline(always)]
        fn multiply_add(self, multiplier: Self, addend: Self) -> Self {
            <$t>::wrapping_add(<$t>::wrapping_mul(self, multiplier), addend)
        }

        #[inline(always)]
        fn minimum(self, rhs: Self) -> Self {
            std::cmp::Ord::min(self, rhs)
        }

        #[inline(always)]
        fn maximum(self, rhs: Self) -> Self {
            std::cmp::Ord::max(self, rhs)
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
            self
        }

        #[inline(always)]
        fn ceiling(self) -> Self {
            self
        }

        #[inline(always)]
        fn round(self) -> Self {
            self
        }

        #[inline(always)]
        fn truncate(self) -> Self {
            self
        }

        /// Truncated double-precision root.
        #[inline]
        fn sqrt(self) -> Self {
            (self as f64).sqrt() as $t
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
        fn is_zero(self) -> bool {
            self == 0
        }

        #[inline(always)]
        fn is_nan(self) -> bool {
            false
        }

        #[inline(always)]
        fn is_infinity(self) -> bool {
            false
        }

        #[inline(always)]
        fn is_finite(self) -> bool {
            true
        }

        #[inline(always)]
        fn is_normal(self) -> bool {
            self != 0
        }

        #[inline(always)]
        fn is_subnormal(self) -> bool {
            false
        }

        #[inline(always)]
        fn is_integer(self) -> bool {
            true
        }

        #[inline(always)]
        fn is_even_integer(self) -> bool {
            self & 1 == 0
        }

        #[inline(always)]
        fn is_odd_integer(self) -> bool {
            self & 1 == 1
        }
    };
}

macro_rules! impl_signed_element {
    ($($t:ty => $unsigned:ty, $kind:ident;)*) => {$(
        impl Sealed for $t {}

        impl Element for $t {
            integer_common!($t, $unsigned, $kind);

            const IS_UNSIGNED: bool = false;

            #[inline(always)]
            fn abs(self) -> Self {
                <$t>::wrapping_abs(self)
            }

            #[inline]
            fn copy_sign(self, sign: Self) -> Self {
                let magnitude = <$t>::wrapping_abs(self);
                if sign < 0 {
                    magnitude.wrapping_neg()
                } else {
                    magnitude
                }
            }

            #[inline(always)]
            fn is_negative(self) -> bool {
                self < 0
            }
        }

        impl IntElement for $t {
            #[inline(always)]
            fn shift_left(self, amount: u32) -> Self {
                <$t>::wrapping_shl(self, amount)
            }

            #[inline(always)]
            fn shift_right_arithmetic(self, amount: u32) -> Self {
                <$t>::wrapping_shr(self, amount)
            }

            #[inline(always)]
            fn shift_right_logical(self, amount: u32) -> Self {
                <$unsigned>::wrapping_shr(self as $unsigned, amount) as $t
            }
        }
    )*};
}

macro_rules! impl_unsigned_element {
    ($($t:ty, $kind:ident;)*) => {$(
        impl Sealed for $t {}

        impl Element for $t {
            integer_common!($t, $t, $kind);

            const IS_UNSIGNED: bool = true;

            #[inline(always)]
            fn abs(self) -> Self {
                self
            }

            #[inline(always)]
            fn copy_sign(self, _sign: Self) -> Self {
                self
            }

            #[inline(always)]
            fn is_negative(self) -> bool {
                false
            }
        }

        impl IntElement for $t {
            #[inline(always)]
            fn shift_left(self, amount: u32) -> Self {
                <$t>::wrapping_shl(self, amount)
            }

            // No sign bit to propagate
            #[inline(always)]
            fn shift_right_arithmetic(self, amount: u32) -> Self {
                <$t>::wrapping_shr(self, amount)
            }

            #[inline(always)]
            fn shift_right_logical(self, amount: u32) -> Self {
                <$t>::wrapping_shr(self, amount)
            }
        }
    )*};
}

impl_signed_element! {
    i8 => u8, I8;
    i16 => u16, I16;
    i32 => u32, I32;
    i64 => u64, I64;
    isize => usize, ISize;
}

impl_unsigned_element! {
    u8, U8;
    u16, U16;
    u32, U32;
    u64, U64;
    usize, USize;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arithmetic_wraps() {
        assert_eq!(Element::add(i8::MAX, 1), i8::MIN);
        assert_eq!(Element::subtract(0u16, 1), u16::MAX);
        assert_eq!(Element::multiply(0x1_0000u32, 0x1_0000), 0);
        assert_eq!(Element::negate(i32::MIN), i32::MIN);
        assert_eq!(Element::negate(1u8), u8::MAX);
    }

    #[test]
    fn test_abs_most_negative_is_itself() {
        assert_eq!(Element::abs(i8::MIN), i8::MIN);
        assert_eq!(Element::abs(i16::MIN), i16::MIN);
        assert_eq!(Element::abs(i32::MIN), i32::MIN);
        assert_eq!(Element::abs(i64::MIN), i64::MIN);
        assert_eq!(Element::abs(isize::MIN), isize::MIN);
        assert_eq!(Element::abs(-5i32), 5);
        assert_eq!(Element::abs(u8::MAX), u8::MAX);
    }

    #[test]
    fn test_divide() {
        assert_eq!(Element::divide(7i32, 2), Ok(3));
        assert_eq!(Element::divide(-7i32, 2), Ok(-3));
        assert_eq!(Element::divide(1u64, 0), Err(VectorError::DivideByZero));
        assert_eq!(Element::divide(i64::MIN, -1), Ok(i64::MIN));
    }

    #[test]
    fn test_saturating() {
        assert_eq!(Element::add_saturate(i8::MAX, 1), i8::MAX);
        assert_eq!(Element::subtract_saturate(i8::MIN, 1), i8::MIN);
        assert_eq!(Element::add_saturate(u32::MAX, 1), u32::MAX);
        assert_eq!(Element::subtract_saturate(0u32, 1), 0);
    }

    #[test]
    fn test_shift_amount_is_masked() {
        assert_eq!(IntElement::shift_left(1u8, 8), 1);
        assert_eq!(IntElement::shift_left(1u8, 9), 2);
        assert_eq!(IntElement::shift_left(1i32, 33), 2);
        assert_eq!(IntElement::shift_right_arithmetic(-8i16, 17), -4);
        assert_eq!(IntElement::shift_right_logical(-1i8, 4), 0x0F);
        assert_eq!(IntElement::shift_right_logical(-1i64, 64), -1);
        assert_eq!(IntElement::shift_right_arithmetic(0x80u8, 7), 1);
    }

    #[test]
    fn test_bit_round_trip_sign_extension() {
        assert_eq!(Element::to_bits(-1i8), 0xFF);
        assert_eq!(<i8 as Element>::from_bits(0xFF), -1);
        assert_eq!(<i16 as Element>::from_bits(0xFFFF_8000), i16::MIN);
        assert_eq!(Element::to_bits(isize::MIN), 1u64 << (isize::BITS - 1));
    }

    #[test]
    fn test_min_max_native_match_for_integers() {
        assert_eq!(Element::minimum(-3i32, 2), -3);
        assert_eq!(Element::maximum(-3i32, 2), 2);
        assert_eq!(Element::min_native(5u8, 5), 5);
        assert_eq!(Element::max_native(1u64, 9), 9);
    }

    #[test]
    fn test_integer_classification() {
        assert!(Element::is_normal(3i32));
        assert!(!Element::is_normal(0i32));
        assert!(!Element::is_nan(0u8));
        assert!(Element::is_finite(i64::MAX));
        assert!(Element::is_odd_integer(-3i16));
        assert!(Element::is_even_integer(-4i16));
        assert!(!Element::is_negative(u8::MAX));
        assert!(Element::is_negative(-1i8));
    }

    #[test]
    fn test_integer_sqrt_and_copy_sign() {
        assert_eq!(Element::sqrt(17u32), 4);
        assert_eq!(Element::sqrt(-4i32), 0);
        assert_eq!(Element::copy_sign(5i32, -1), -5);
        assert_eq!(Element::copy_sign(-5i32, 0), 5);
        assert_eq!(Element::copy_sign(5u32, 0), 5);
    }
}
