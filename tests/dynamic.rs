//! Runtime-tagged vectors built from parsed element kinds.

use simdport::error::{element_kind_mismatch, unsupported_element_type};
use simdport::{AnyVector128, ElementKind, Vector128, VectorError};

#[test]
fn test_parse_then_operate() {
    let kind: ElementKind = "int".parse().unwrap();
    let a = AnyVector128::from(Vector128::<i32>::from_fn(|i| i as i32));
    let b = AnyVector128::from_halves(kind, 0x0000_0001_0000_0001, 0x0000_0001_0000_0001);

    let sum = a.add(&b).unwrap();
    assert_eq!(Vector128::<i32>::try_from(sum).unwrap().to_vec(), vec![1, 2, 3, 4]);
}

#[test]
fn test_unknown_kind_names_are_rejected() {
    for name in ["f16", "half", "bool", "char", "u128", "decimal"] {
        assert_eq!(
            name.parse::<ElementKind>(),
            Err(unsupported_element_type(name)),
            "{name}"
        );
    }
}

#[test]
fn test_every_kind_round_trips_its_bits() {
    for kind in ElementKind::ALL {
        let any = AnyVector128::from_halves(kind, 0x0123_4567_89AB_CDEF, 0xFEDC_BA98_7654_3210);
        assert_eq!(any.kind(), kind);
        assert_eq!(any.lane_count(), 16 / kind.size());
        assert_eq!(any.halves(), (0x0123_4567_89AB_CDEF, 0xFEDC_BA98_7654_3210));
        assert_eq!(AnyVector128::from_bytes(kind, any.to_bytes()), any);
        assert_eq!(any.not().not(), any);
    }
}

#[test]
fn test_reinterpret_keeps_bits() {
    let floats = AnyVector128::from(Vector128::splat(1.0f32));
    let ints = floats.reinterpret(ElementKind::U32);
    assert_eq!(ints.element_bits(0), Ok(0x3F80_0000));
    assert_eq!(ints.reinterpret(ElementKind::F32), floats);
}

#[test]
fn test_operations_reject_mixed_kinds() {
    let a = AnyVector128::zero(ElementKind::U8);
    let b = AnyVector128::zero(ElementKind::I8);
    let expected = Err(element_kind_mismatch(ElementKind::U8, ElementKind::I8));

    assert_eq!(a.add(&b), expected);
    assert_eq!(a.subtract(&b), expected);
    assert_eq!(a.multiply(&b), expected);
    assert_eq!(a.divide(&b), expected);
    assert_eq!(a.and(&b), expected);
    assert_eq!(a.or(&b), expected);
    assert_eq!(a.xor(&b), expected);
}

#[test]
fn test_integer_only_operations() {
    for kind in ElementKind::ALL {
        let v = AnyVector128::from_halves(kind, u64::MAX, 1);
        let shifted = v.shift_left(1);
        if kind.is_float() {
            assert_eq!(shifted, Err(unsupported_element_type(kind.name())));
            assert!(v.shift_right_logical(1).is_err());
        } else {
            assert!(shifted.is_ok(), "{kind}");
            assert!(v.shift_right_arithmetic(1).is_ok());
        }
    }
}

#[test]
fn test_divide_by_zero_only_for_integer_kinds() {
    for kind in ElementKind::ALL {
        let one = AnyVector128::from_halves(kind, 0, 0).not();
        let zero = AnyVector128::zero(kind);
        let result = one.divide(&zero);
        if kind.is_integer() {
            assert_eq!(result, Err(VectorError::DivideByZero), "{kind}");
        } else {
            assert!(result.is_ok(), "{kind}");
        }
    }
}
