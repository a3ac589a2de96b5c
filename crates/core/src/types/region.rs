//! Market regions and their sizing conventions.

use serde::{Deserialize, Serialize};

/// A retail market whose garments follow a local sizing convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum MarketRegion {
    Au,
    #[default]
    Us,
    Uk,
    Eu,
    Jp,
    Kr,
}

/// Coarse grouping of regions that share comparable garment sizing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SizingGroup {
    Asia,
    Us,
    Western,
}

/// Units a region's shoppers expect to see measurements in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MeasurementSystem {
    Metric,
    Imperial,
}

impl MarketRegion {
    /// Every region, in declaration order.
    pub const ALL: [Self; 6] = [Self::Au, Self::Us, Self::Uk, Self::Eu, Self::Jp, Self::Kr];

    /// Two-letter code used in storage and serialization.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Au => "AU",
            Self::Us => "US",
            Self::Uk => "UK",
            Self::Eu => "EU",
            Self::Jp => "JP",
            Self::Kr => "KR",
        }
    }

    /// Human-readable region name.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Au => "Australia",
            Self::Us => "United States",
            Self::Uk => "United Kingdom",
            Self::Eu => "Europe",
            Self::Jp => "Japan",
            Self::Kr => "Korea",
        }
    }

    /// The sizing group this region belongs to.
    #[must_use]
    pub const fn sizing_group(self) -> SizingGroup {
        match self {
            Self::Jp | Self::Kr => SizingGroup::Asia,
            Self::Us => SizingGroup::Us,
            Self::Au | Self::Uk | Self::Eu => SizingGroup::Western,
        }
    }

    #[must_use]
    pub const fn preferred_system(self) -> MeasurementSystem {
        match self {
            Self::Us | Self::Uk => MeasurementSystem::Imperial,
            _ => MeasurementSystem::Metric,
        }
    }
}

impl std::fmt::Display for MarketRegion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl std::str::FromStr for MarketRegion {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|region| region.code().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("invalid market region: {s}"))
    }
}
