//! Attendance streak tiers and badge icons.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Streak value shown until a backend supplies real numbers.
pub const PLACEHOLDER_STREAK: u32 = 9;

/// Badge tier for a streak length in days.
///
/// | tier   | days      | icon                   |
/// |--------|-----------|------------------------|
/// | none   | 0-2       | hidden                 |
/// | yellow | 3-10      | `../../assets/ys.jpg`  |
/// | orange | 11-20     | `../../assets/os.jpg`  |
/// | red    | 21-50     | `../../assets/rs.jpg`  |
/// | purple | 51-70     | `../../assets/ps.jpg`  |
/// | violet | 71 and up | `../../assets/vs.jpg`  |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StreakTier {
    None,
    Yellow,
    Orange,
    Red,
    Purple,
    Violet,
}

impl StreakTier {
    #[must_use]
    pub const fn for_days(days: u32) -> Self {
        match days {
            0..=2 => Self::None,
            3..=10 => Self::Yellow,
            11..=20 => Self::Orange,
            21..=50 => Self::Red,
            51..=70 => Self::Purple,
            _ => Self::Violet,
        }
    }

    /// Badge image, relative to a student folder. `None` hides the badge.
    #[must_use]
    pub const fn icon(self) -> Option<&'static str> {
        match self {
            Self::None => None,
            Self::Yellow => Some("../../assets/ys.jpg"),
            Self::Orange => Some("../../assets/os.jpg"),
            Self::Red => Some("../../assets/rs.jpg"),
            Self::Purple => Some("../../assets/ps.jpg"),
            Self::Violet => Some("../../assets/vs.jpg"),
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Yellow => "yellow",
            Self::Orange => "orange",
            Self::Red => "red",
            Self::Purple => "purple",
            Self::Violet => "violet",
        }
    }
}

impl fmt::Display for StreakTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What the streak number and icon elements should show.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StreakBadge {
    pub days: u32,
    pub tier: StreakTier,
    pub icon: Option<&'static str>,
    pub icon_visible: bool,
}

impl StreakBadge {
    #[must_use]
    pub const fn new(days: u32) -> Self {
        let tier = StreakTier::for_days(days);
        let icon = tier.icon();
        Self {
            days,
            tier,
            icon,
            icon_visible: icon.is_some(),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(0, StreakTier::None)]
    #[case(2, StreakTier::None)]
    #[case(3, StreakTier::Yellow)]
    #[case(10, StreakTier::Yellow)]
    #[case(11, StreakTier::Orange)]
    #[case(20, StreakTier::Orange)]
    #[case(21, StreakTier::Red)]
    #[case(50, StreakTier::Red)]
    #[case(51, StreakTier::Purple)]
    #[case(70, StreakTier::Purple)]
    #[case(71, StreakTier::Violet)]
    #[case(100, StreakTier::Violet)]
    #[case(101, StreakTier::Violet)]
    #[case(u32::MAX, StreakTier::Violet)]
    fn tier_boundaries(#[case] days: u32, #[case] tier: StreakTier) {
        assert_eq!(StreakTier::for_days(days), tier);
    }

    #[test]
    fn no_streak_hides_icon() {
        let badge = StreakBadge::new(1);
        assert_eq!(badge.icon, None);
        assert!(!badge.icon_visible);
    }

    #[test]
    fn placeholder_streak_is_yellow() {
        let badge = StreakBadge::new(PLACEHOLDER_STREAK);
        assert_eq!(badge.tier, StreakTier::Yellow);
        assert_eq!(badge.icon, Some("../../assets/ys.jpg"));
    }

    #[test]
    fn tier_serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&StreakTier::Violet).unwrap(),
            "\"violet\""
        );
    }
}
