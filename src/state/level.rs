//! Level table.
//!
//! The game has a fixed, ordered list of levels. Each level defines an
//! inclusive number range and how many guesses the player gets.

use serde::Serialize;

/// Points awarded for any win, before the attempts bonus.
pub const BASE_POINTS: u32 = 100;

/// Bonus points per attempt still unused after the winning guess.
pub const BONUS_PER_ATTEMPT: u32 = 10;

/// Static configuration for a single level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LevelConfig {
    /// Display name
    pub name: &'static str,

    /// Smallest valid guess (inclusive)
    pub min: i64,

    /// Largest valid guess (inclusive)
    pub max: i64,

    /// Guesses available each time the level is played
    pub attempts_allowed: u32,
}

/// The three levels, easiest first.
pub const LEVELS: [LevelConfig; 3] = [
    LevelConfig::new("Level 1", 1, 50, 10),
    LevelConfig::new("Level 2", 1, 100, 12),
    LevelConfig::new("Level 3", 1, 500, 15),
];

impl LevelConfig {
    pub const fn new(name: &'static str, min: i64, max: i64, attempts_allowed: u32) -> Self {
        Self {
            name,
            min,
            max,
            attempts_allowed,
        }
    }

    /// Width of the range used for hint thresholds (`max - min`).
    pub fn range(&self) -> i64 {
        self.max - self.min
    }

    /// Check if a guess lies within the level bounds.
    pub fn contains(&self, guess: i64) -> bool {
        (self.min..=self.max).contains(&guess)
    }

    /// Heading shown above the input, e.g. `Level 1: Guess between 1 and 50`.
    pub fn title(&self) -> String {
        format!("{}: Guess between {} and {}", self.name, self.min, self.max)
    }

    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "name": self.name,
            "min": self.min,
            "max": self.max,
            "attempts_allowed": self.attempts_allowed
        })
    }
}

/// Look up a level by index.
pub fn level(index: usize) -> Option<&'static LevelConfig> {
    LEVELS.get(index)
}

/// Number of levels in the table.
pub fn level_count() -> usize {
    LEVELS.len()
}

/// Check if a level follows the one at `index`.
pub fn has_next(index: usize) -> bool {
    index + 1 < LEVELS.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_level_table() {
        assert_eq!(level_count(), 3);
        assert_eq!(LEVELS[0], LevelConfig::new("Level 1", 1, 50, 10));
        assert_eq!(LEVELS[1], LevelConfig::new("Level 2", 1, 100, 12));
        assert_eq!(LEVELS[2], LevelConfig::new("Level 3", 1, 500, 15));
    }

    #[test]
    fn test_level_bounds() {
        let l = &LEVELS[0];
        assert!(l.contains(1));
        assert!(l.contains(50));
        assert!(!l.contains(0));
        assert!(!l.contains(51));
        assert_eq!(l.range(), 49);
    }

    #[test]
    fn test_level_lookup() {
        assert_eq!(level(2).map(|l| l.max), Some(500));
        assert!(level(3).is_none());
        assert!(has_next(0));
        assert!(has_next(1));
        assert!(!has_next(2));
    }

    #[test]
    fn test_title() {
        assert_eq!(LEVELS[1].title(), "Level 2: Guess between 1 and 100");
    }

    #[test]
    fn test_to_json() {
        let json = LEVELS[2].to_json();
        assert_eq!(json["name"], "Level 3");
        assert_eq!(json["attempts_allowed"], 15);
    }
}
