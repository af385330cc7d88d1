//! Capability tiers.
//!
//! A tier is a build-time classification of what the target already supplies
//! natively. `build.rs` selects the highest tier the target supports (capped by
//! the `software-only` and `no-wide-multiply` features) and passes it to the
//! compiler as `simdport_tier` plus the cumulative `wave1`/`wave2` flags.
//!
//! Every public symbol backed by a tier is compiled exactly once: the native
//! definition when its tier is active, the software definition otherwise. The
//! assertions below turn an inconsistent flag set into a build failure instead
//! of a duplicate or missing symbol.
//!
//! | Tier | Native symbols |
//! |------|----------------|
//! | [`Tier::Software`] | none |
//! | [`Tier::BitIntrinsics`] | leading zero count, leading sign count, bit reversal, pop count, trailing zero count |
//! | [`Tier::WideMultiply`] | multiply-high and big multiply, signed and unsigned |

use std::fmt;
use std::str::FromStr;

use crate::error::{validation_error, VectorError};

#[cfg(not(any(simdport_tier = "0", simdport_tier = "1", simdport_tier = "2")))]
compile_error!("no capability tier selected: build.rs must emit `simdport_tier`");

#[cfg(all(wave2, not(wave1)))]
compile_error!("capability tiers are additive: `wave2` requires `wave1`");

#[cfg(any(
    all(simdport_tier = "0", any(wave1, wave2)),
    all(simdport_tier = "1", any(not(wave1), wave2)),
    all(simdport_tier = "2", not(all(wave1, wave2))),
))]
compile_error!("`simdport_tier` disagrees with the wave flags");

/// A discrete, monotonically increasing level of native capability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Tier {
    /// Nothing is native; every symbol uses its software definition.
    Software = 0,
    /// Native count-leading-zeros, bit reversal and population count.
    BitIntrinsics = 1,
    /// Native 64x64 -> 128-bit multiplication.
    WideMultiply = 2,
}

/// The tier selected for this build.
#[cfg(simdport_tier = "0")]
pub const ACTIVE_TIER: Tier = Tier::Software;

/// The tier selected for this build.
#[cfg(simdport_tier = "1")]
pub const ACTIVE_TIER: Tier = Tier::BitIntrinsics;

/// The tier selected for this build.
#[cfg(simdport_tier = "2")]
pub const ACTIVE_TIER: Tier = Tier::WideMultiply;

/// Which definition of a tier's symbols made it into the build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Implementation {
    Native,
    Software,
}

impl Tier {
    /// All tiers, lowest first.
    pub const ALL: [Tier; 3] = [Tier::Software, Tier::BitIntrinsics, Tier::WideMultiply];

    #[inline]
    pub const fn level(self) -> u8 {
        self as u8
    }

    /// Whether this tier is supported by the current build. Tiers are
    /// additive, so this holds for every tier at or below [`ACTIVE_TIER`].
    #[inline]
    pub const fn is_supported(self) -> bool {
        self.level() <= ACTIVE_TIER.level()
    }

    /// The definition compiled in for the symbols this tier governs.
    #[inline]
    pub const fn implementation(self) -> Implementation {
        match self {
            Tier::Software => Implementation::Software,
            _ if self.is_supported() => Implementation::Native,
            _ => Implementation::Software,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Tier::Software => "software",
            Tier::BitIntrinsics => "bit-intrinsics",
            Tier::WideMultiply => "wide-multiply",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Tier {
    type Err = VectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tier::ALL
            .into_iter()
            .find(|tier| tier.name() == s)
            .ok_or_else(|| validation_error(format!("unknown capability tier `{s}`")))
    }
}
