//! Capability tier selection as seen from outside the crate.

use simdport::bits::{self, soft};
use simdport::{Implementation, Tier, ACTIVE_TIER};

#[test]
fn test_active_tier_is_supported_and_maximal() {
    assert!(ACTIVE_TIER.is_supported());
    for tier in Tier::ALL {
        assert_eq!(tier.is_supported(), tier <= ACTIVE_TIER, "{tier}");
    }
}

#[test]
fn test_feature_caps_are_respected() {
    if cfg!(feature = "software-only") {
        assert_eq!(ACTIVE_TIER, Tier::Software);
    }
    if cfg!(feature = "no-wide-multiply") {
        assert!(ACTIVE_TIER < Tier::WideMultiply);
    }
}

#[test]
fn test_implementation_follows_support() {
    assert_eq!(Tier::Software.implementation(), Implementation::Software);
    for tier in [Tier::BitIntrinsics, Tier::WideMultiply] {
        let expected = if tier.is_supported() {
            Implementation::Native
        } else {
            Implementation::Software
        };
        assert_eq!(tier.implementation(), expected, "{tier}");
    }
}

#[test]
fn test_levels_and_names() {
    let levels: Vec<u8> = Tier::ALL.iter().map(|t| t.level()).collect();
    assert_eq!(levels, vec![0, 1, 2]);

    for tier in Tier::ALL {
        assert_eq!(tier.to_string().parse::<Tier>(), Ok(tier));
    }
    assert!("".parse::<Tier>().is_err());
    assert!("Software".parse::<Tier>().is_err());
}

#[test]
fn test_selected_symbols_agree_with_software_whatever_the_tier() {
    let samples = [0u64, 1, 0xFF, 1 << 31, 0xDEAD_BEEF_0000_0001, 1 << 63, u64::MAX];

    for &a in samples.iter() {
        assert_eq!(bits::leading_zero_count_u64(a), soft::leading_zero_count_u64(a));
        assert_eq!(bits::pop_count_u64(a), soft::pop_count_u64(a));
        assert_eq!(bits::reverse_element_bits_u64(a), soft::reverse_element_bits_u64(a));
        assert_eq!(
            bits::leading_sign_count_i64(a as i64),
            soft::leading_sign_count_i64(a as i64)
        );

        for &b in samples.iter() {
            assert_eq!(bits::big_mul_u64(a, b), soft::big_mul_u64(a, b));
            assert_eq!(
                bits::multiply_high_i64(a as i64, b as i64),
                soft::multiply_high_i64(a as i64, b as i64)
            );
        }
    }
}
