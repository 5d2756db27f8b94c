//! Linguistic categories — comfort levels for temperature, duration levels
//! for actuator run time.
//!
//! Both scales are totally ordered by an integer rank 0..=4. The rank
//! distance between the current and requested comfort level selects the
//! duration level a rule fires with.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::InvalidCategoryError;

/// Qualitative temperature category, ordered coldest to hottest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComfortLevel {
    Cold,
    Cool,
    Comfortable,
    Warm,
    Hot,
}

impl ComfortLevel {
    /// All levels in rank order.
    pub const ALL: [Self; 5] = [
        Self::Cold,
        Self::Cool,
        Self::Comfortable,
        Self::Warm,
        Self::Hot,
    ];

    /// Integer rank, 0 (coldest) to 4 (hottest).
    #[must_use]
    pub fn rank(self) -> u8 {
        self as u8
    }

    /// Level for a given rank, if within 0..=4.
    #[must_use]
    pub fn from_rank(rank: u8) -> Option<Self> {
        Self::ALL.get(usize::from(rank)).copied()
    }
}

impl std::fmt::Display for ComfortLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Cold => f.write_str("cold"),
            Self::Cool => f.write_str("cool"),
            Self::Comfortable => f.write_str("comfortable"),
            Self::Warm => f.write_str("warm"),
            Self::Hot => f.write_str("hot"),
        }
    }
}

impl FromStr for ComfortLevel {
    type Err = InvalidCategoryError;

    /// Parse a spoken comfort word. Accepts the five canonical words plus
    /// `"comfy"` as a shorthand for `"comfortable"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cold" => Ok(Self::Cold),
            "cool" => Ok(Self::Cool),
            "comfortable" | "comfy" => Ok(Self::Comfortable),
            "warm" => Ok(Self::Warm),
            "hot" => Ok(Self::Hot),
            _ => Err(InvalidCategoryError {
                word: s.to_string(),
            }),
        }
    }
}

/// Qualitative actuator run-time category, ordered 0..=4.
///
/// The same five levels apply to both the heater and the fan scale; only the
/// breakpoint values differ between the two duration domains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DurationLevel {
    Off,
    Weak,
    Medium,
    Strong,
    VeryStrong,
}

impl DurationLevel {
    /// All levels in rank order.
    pub const ALL: [Self; 5] = [
        Self::Off,
        Self::Weak,
        Self::Medium,
        Self::Strong,
        Self::VeryStrong,
    ];

    /// Integer rank, 0 (off) to 4 (very strong).
    #[must_use]
    pub fn rank(self) -> u8 {
        self as u8
    }

    /// Duration level fired by a rule whose comfort ranks differ by
    /// `distance`, clamped to `Weak..=VeryStrong`.
    ///
    /// Rules only fire for nonzero distances, so `Off` is never selected
    /// here; it exists only as the degenerate point shape on both scales.
    #[must_use]
    pub fn from_distance(distance: u8) -> Self {
        match distance {
            0 | 1 => Self::Weak,
            2 => Self::Medium,
            3 => Self::Strong,
            _ => Self::VeryStrong,
        }
    }
}

impl std::fmt::Display for DurationLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Off => f.write_str("off"),
            Self::Weak => f.write_str("weak"),
            Self::Medium => f.write_str("medium"),
            Self::Strong => f.write_str("strong"),
            Self::VeryStrong => f.write_str("very strong"),
        }
    }
}
