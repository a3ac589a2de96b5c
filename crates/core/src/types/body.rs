//! Body metric types used for shopper-to-reviewer comparison.

use serde::{Deserialize, Serialize};

use super::id::UserId;

/// Self-reported body build, ordered from slimmest to largest.
///
/// The declaration order is the ordinal scale used when scoring builds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BodyBuild {
    Slim,
    Average,
    Athletic,
    Muscular,
    Large,
}

impl BodyBuild {
    /// Position on the ordinal build scale (slim = 0 .. large = 4).
    #[must_use]
    pub const fn ordinal(self) -> u8 {
        match self {
            Self::Slim => 0,
            Self::Average => 1,
            Self::Athletic => 2,
            Self::Muscular => 3,
            Self::Large => 4,
        }
    }
}

impl std::fmt::Display for BodyBuild {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Slim => write!(f, "slim"),
            Self::Average => write!(f, "average"),
            Self::Athletic => write!(f, "athletic"),
            Self::Muscular => write!(f, "muscular"),
            Self::Large => write!(f, "large"),
        }
    }
}

impl std::str::FromStr for BodyBuild {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "slim" => Ok(Self::Slim),
            "average" => Ok(Self::Average),
            "athletic" => Ok(Self::Athletic),
            "muscular" => Ok(Self::Muscular),
            "large" => Ok(Self::Large),
            _ => Err(format!("invalid body build: {s}")),
        }
    }
}

/// A user's physical metrics. Each field may be missing independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserMetricProfile {
    pub user_id: UserId,
    pub height_cm: Option<u32>,
    pub weight_kg: Option<u32>,
    pub body_build: Option<BodyBuild>,
}

impl UserMetricProfile {
    /// Returns `(height_cm, weight_kg, build)` when all three metrics are present.
    #[must_use]
    pub fn complete_metrics(&self) -> Option<(u32, u32, BodyBuild)> {
        Some((self.height_cm?, self.weight_kg?, self.body_build?))
    }
}

/// Classification of a body compatibility percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComparisonTier {
    Twin,
    Similar,
    Comparable,
    Different,
}

impl ComparisonTier {
    /// Tier for a 0-100 percentage.
    #[must_use]
    pub const fn from_percentage(percentage: u8) -> Self {
        match percentage {
            90.. => Self::Twin,
            70..90 => Self::Similar,
            50..70 => Self::Comparable,
            _ => Self::Different,
        }
    }

    /// Label shown next to a review.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Twin => "Body Twin",
            Self::Similar => "Similar Build",
            Self::Comparable => "Comparable Fit",
            Self::Different => "Different Body Type",
        }
    }
}

/// Result of comparing two complete profiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BodyComparison {
    pub tier: ComparisonTier,
    /// Similarity out of 100.
    pub percentage: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_boundaries() {
        assert_eq!(ComparisonTier::from_percentage(100), ComparisonTier::Twin);
        assert_eq!(ComparisonTier::from_percentage(90), ComparisonTier::Twin);
        assert_eq!(ComparisonTier::from_percentage(89), ComparisonTier::Similar);
        assert_eq!(ComparisonTier::from_percentage(70), ComparisonTier::Similar);
        assert_eq!(ComparisonTier::from_percentage(69), ComparisonTier::Comparable);
        assert_eq!(ComparisonTier::from_percentage(50), ComparisonTier::Comparable);
        assert_eq!(ComparisonTier::from_percentage(49), ComparisonTier::Different);
        assert_eq!(ComparisonTier::from_percentage(0), ComparisonTier::Different);
    }

    #[test]
    fn test_build_ordinals_follow_declaration_order() {
        assert!(BodyBuild::Slim < BodyBuild::Average);
        assert_eq!(BodyBuild::Large.ordinal(), 4);
    }

    #[test]
    fn test_incomplete_profile_has_no_metrics() {
        let profile = UserMetricProfile {
            user_id: UserId::generate(),
            height_cm: Some(180),
            weight_kg: None,
            body_build: Some(BodyBuild::Slim),
        };
        assert!(profile.complete_metrics().is_none());
    }
}
