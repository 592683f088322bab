//! Proximity hints.
//!
//! A missed guess is bucketed by its distance to the target relative to the
//! width of the level range. Both thresholds are inclusive.

use serde::Serialize;

use super::audio::Cue;

/// Percent of the range at or below which a guess is "very close".
pub const VERY_CLOSE_PERCENT: i64 = 5;

/// Percent of the range at or below which a guess is "close".
pub const CLOSE_PERCENT: i64 = 15;

/// Which side of the target a guess landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    TooHigh,
    TooLow,
}

impl Direction {
    pub fn of(guess: i64, target: i64) -> Self {
        if guess > target {
            Self::TooHigh
        } else {
            Self::TooLow
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TooHigh => "too_high",
            Self::TooLow => "too_low",
        }
    }
}

/// Proximity bucket for a missed guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "tier", content = "direction", rename_all = "snake_case")]
pub enum HintTier {
    VeryClose,
    Close(Direction),
    Far(Direction),
}

impl HintTier {
    /// Classify `guess` against `target` for a level spanning `min..=max`.
    ///
    /// `diff <= 5% of range` is very close, `diff <= 15% of range` is close.
    /// Compared in integer percent so the boundaries are exact.
    pub fn classify(guess: i64, target: i64, min: i64, max: i64) -> Self {
        let diff = i128::from(guess.abs_diff(target));
        let range = i128::from(max) - i128::from(min);

        if diff * 100 <= range * i128::from(VERY_CLOSE_PERCENT) {
            Self::VeryClose
        } else if diff * 100 <= range * i128::from(CLOSE_PERCENT) {
            Self::Close(Direction::of(guess, target))
        } else {
            Self::Far(Direction::of(guess, target))
        }
    }

    pub fn direction(&self) -> Option<Direction> {
        match self {
            Self::VeryClose => None,
            Self::Close(d) | Self::Far(d) => Some(*d),
        }
    }

    /// Audio cue for the tier.
    pub fn cue(&self) -> Cue {
        match self {
            Self::VeryClose => Cue::Close,
            Self::Close(_) => Cue::Medium,
            Self::Far(_) => Cue::Far,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::VeryClose => "very_close",
            Self::Close(_) => "close",
            Self::Far(_) => "far",
        }
    }

    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "tier": self.as_str(),
            "direction": self.direction().map(|d| d.as_str())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_one_far() {
        // range 49, 15% is 7.35
        assert_eq!(
            HintTier::classify(40, 25, 1, 50),
            HintTier::Far(Direction::TooHigh)
        );
        assert_eq!(
            HintTier::classify(10, 25, 1, 50),
            HintTier::Far(Direction::TooLow)
        );
    }

    #[test]
    fn test_level_one_tiers() {
        // 5% of 49 is 2.45
        assert_eq!(HintTier::classify(27, 25, 1, 50), HintTier::VeryClose);
        assert_eq!(HintTier::classify(23, 25, 1, 50), HintTier::VeryClose);
        assert_eq!(
            HintTier::classify(28, 25, 1, 50),
            HintTier::Close(Direction::TooHigh)
        );
        assert_eq!(
            HintTier::classify(18, 25, 1, 50),
            HintTier::Close(Direction::TooLow)
        );
        assert_eq!(
            HintTier::classify(17, 25, 1, 50),
            HintTier::Far(Direction::TooLow)
        );
    }

    #[test]
    fn test_boundaries_are_inclusive() {
        // range 100: 5% = 5, 15% = 15
        assert_eq!(HintTier::classify(55, 50, 0, 100), HintTier::VeryClose);
        assert_eq!(
            HintTier::classify(56, 50, 0, 100),
            HintTier::Close(Direction::TooHigh)
        );
        assert_eq!(
            HintTier::classify(35, 50, 0, 100),
            HintTier::Close(Direction::TooLow)
        );
        assert_eq!(
            HintTier::classify(34, 50, 0, 100),
            HintTier::Far(Direction::TooLow)
        );
    }

    #[test]
    fn test_level_three_boundary() {
        // range 499: 5% = 24.95, 15% = 74.85
        assert_eq!(HintTier::classify(124, 100, 1, 500), HintTier::VeryClose);
        assert_eq!(
            HintTier::classify(125, 100, 1, 500),
            HintTier::Close(Direction::TooHigh)
        );
        assert_eq!(
            HintTier::classify(174, 100, 1, 500),
            HintTier::Close(Direction::TooHigh)
        );
        assert_eq!(
            HintTier::classify(175, 100, 1, 500),
            HintTier::Far(Direction::TooHigh)
        );
    }

    #[test]
    fn test_cues() {
        assert_eq!(HintTier::VeryClose.cue(), Cue::Close);
        assert_eq!(HintTier::Close(Direction::TooLow).cue(), Cue::Medium);
        assert_eq!(HintTier::Far(Direction::TooHigh).cue(), Cue::Far);
    }

    #[test]
    fn test_to_json() {
        let json = HintTier::Close(Direction::TooLow).to_json();
        assert_eq!(json["tier"], "close");
        assert_eq!(json["direction"], "too_low");
        assert!(HintTier::VeryClose.to_json()["direction"].is_null());
    }
}
