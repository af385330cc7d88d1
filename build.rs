use std::cmp::Ordering;
use std::env;

// Native capabilities that let a tier replace software fallbacks
#[derive(PartialEq, Eq, Debug)]
struct Capability {
    name: &'static str,
    tier: u8,
    cfg_flag: &'static str,
    detected: bool,
}

impl Capability {
    // Tiers are additive, lowest tier first
    fn priority(&self) -> u8 {
        self.tier
    }

    fn capabilities() -> Vec<Capability> {
        vec![
            Capability {
                name: "wide-multiply",
                tier: 2,
                cfg_flag: "wave2",
                detected: false,
            },
            Capability {
                name: "bit-intrinsics",
                tier: 1,
                cfg_flag: "wave1",
                detected: false,
            },
        ]
    }
}

impl Ord for Capability {
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority().cmp(&other.priority())
    }
}

impl PartialOrd for Capability {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// What cargo tells us about the target being compiled for
struct Target {
    arch: String,
    features: Vec<String>,
    pointer_width: String,
}

impl Target {
    fn from_env() -> Self {
        let features = env::var("CARGO_CFG_TARGET_FEATURE").unwrap_or_default();

        Target {
            arch: env::var("CARGO_CFG_TARGET_ARCH").unwrap_or_default(),
            features: features.split(',').map(str::to_string).collect(),
            pointer_width: env::var("CARGO_CFG_TARGET_POINTER_WIDTH").unwrap_or_default(),
        }
    }

    fn has_feature(&self, feature: &str) -> bool {
        self.features.iter().any(|f| f == feature)
    }
}

trait CapabilityDetector {
    fn detect(&self, target: &Target, capability: &mut Capability);
    fn is_applicable(&self, capability: &Capability) -> bool;
}

// Count-leading-zeros and bit reversal lower to single instructions
struct BitIntrinsicsDetector;
impl CapabilityDetector for BitIntrinsicsDetector {
    fn detect(&self, target: &Target, capability: &mut Capability) {
        capability.detected = match target.arch.as_str() {
            "aarch64" | "arm64ec" | "wasm32" | "wasm64" | "powerpc64" => true,
            "x86" | "x86_64" => target.has_feature("lzcnt"),
            "riscv32" | "riscv64" => target.has_feature("zbb"),
            _ => false,
        };
    }

    fn is_applicable(&self, capability: &Capability) -> bool {
        capability.name == "bit-intrinsics"
    }
}

// 64x64 -> 128 multiply is a native instruction (mul/umulh/mulhdu)
struct WideMultiplyDetector;
impl CapabilityDetector for WideMultiplyDetector {
    fn detect(&self, target: &Target, capability: &mut Capability) {
        capability.detected = target.pointer_width == "64"
            && matches!(
                target.arch.as_str(),
                "x86_64" | "aarch64" | "arm64ec" | "powerpc64" | "riscv64" | "s390x" | "loongarch64"
            );
    }

    fn is_applicable(&self, capability: &Capability) -> bool {
        capability.name == "wide-multiply"
    }
}

struct TierSelector;
impl TierSelector {
    fn detectors() -> Vec<Box<dyn CapabilityDetector>> {
        vec![Box::new(BitIntrinsicsDetector), Box::new(WideMultiplyDetector)]
    }

    // Highest tier a cargo feature allows
    fn tier_cap() -> u8 {
        if env::var_os("CARGO_FEATURE_SOFTWARE_ONLY").is_some() {
            0
        } else if env::var_os("CARGO_FEATURE_NO_WIDE_MULTIPLY").is_some() {
            1
        } else {
            u8::MAX
        }
    }

    fn detect(target: &Target, capabilities: &mut [Capability]) {
        let detectors = Self::detectors();

        for capability in capabilities.iter_mut() {
            for detector in detectors.iter() {
                if detector.is_applicable(capability) {
                    detector.detect(target, capability);
                }
            }
        }
    }

    fn apply(capabilities: &mut [Capability]) {
        // Lowest tier first: a tier only counts if every tier below it was detected
        capabilities.sort();

        let cap = Self::tier_cap();
        let mut tier = 0;

        for capability in capabilities.iter() {
            if !capability.detected || capability.tier > cap || capability.tier != tier + 1 {
                break;
            }
            tier = capability.tier;
            println!("cargo:rustc-cfg={}", capability.cfg_flag);
        }

        println!("cargo:rustc-cfg=simdport_tier=\"{tier}\"");

        println!("cargo::rustc-check-cfg=cfg(wave1)");
        println!("cargo::rustc-check-cfg=cfg(wave2)");
        println!("cargo::rustc-check-cfg=cfg(simdport_tier, values(\"0\", \"1\", \"2\"))");
    }
}

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    let target = Target::from_env();
    let mut capabilities = Capability::capabilities();

    TierSelector::detect(&target, &mut capabilities);
    TierSelector::apply(&mut capabilities);
}
