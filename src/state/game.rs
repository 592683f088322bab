//! Game state management.
//!
//! Tracks the level being played, the hidden target, remaining attempts,
//! guess history and the running score. All transitions are synchronous and
//! free of I/O; rendering and sound are the caller's business.

use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};

use super::audio::Cue;
use super::hint::HintTier;
use super::level::{self, LevelConfig, BASE_POINTS, BONUS_PER_ATTEMPT, LEVELS};
use super::phase::{self, LevelPhase, PhaseEvent};
use super::target::{RandomTarget, TargetSource};

/// Result of submitting a guess.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessOutcome {
    /// Input was not accepted; nothing changed
    Rejected(GuessError),

    /// Missed, attempts remain
    Hint { guess: i64, tier: HintTier },

    /// Target found and another level follows
    LevelComplete {
        attempts_used: u32,
        bonus: u32,
        score: u32,
    },

    /// Target found on the last level
    GameComplete { score: u32 },

    /// Missed with the last attempt
    Lost { target: i64, score: u32 },
}

impl GuessOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Rejected(_) => "rejected",
            Self::Hint { .. } => "hint",
            Self::LevelComplete { .. } => "level_complete",
            Self::GameComplete { .. } => "game_complete",
            Self::Lost { .. } => "lost",
        }
    }

    /// Check if the guess consumed an attempt.
    pub fn is_accepted(&self) -> bool {
        !matches!(self, Self::Rejected(_))
    }

    /// Check if the guess found the target.
    pub fn is_win(&self) -> bool {
        matches!(self, Self::LevelComplete { .. } | Self::GameComplete { .. })
    }

    /// Sound for the outcome. Rejected input is silent.
    pub fn cue(&self) -> Option<Cue> {
        match self {
            Self::Rejected(_) => None,
            Self::Hint { tier, .. } => Some(tier.cue()),
            Self::LevelComplete { .. } | Self::GameComplete { .. } => Some(Cue::Win),
            Self::Lost { .. } => Some(Cue::Lose),
        }
    }

    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Self::Rejected(err) => serde_json::json!({
                "outcome": self.as_str(),
                "error": err.to_string()
            }),
            Self::Hint { guess, tier } => serde_json::json!({
                "outcome": self.as_str(),
                "guess": guess,
                "hint": tier.to_json()
            }),
            Self::LevelComplete {
                attempts_used,
                bonus,
                score,
            } => serde_json::json!({
                "outcome": self.as_str(),
                "attempts_used": attempts_used,
                "bonus": bonus,
                "score": score
            }),
            Self::GameComplete { score } => serde_json::json!({
                "outcome": self.as_str(),
                "score": score
            }),
            Self::Lost { target, score } => serde_json::json!({
                "outcome": self.as_str(),
                "target": target,
                "score": score
            }),
        }
    }
}

/// Reasons a guess is not accepted.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GuessError {
    #[error("'{input}' is not a number between {min} and {max}")]
    NotANumber { input: String, min: i64, max: i64 },

    #[error("{guess} is outside {min}..={max}")]
    OutOfRange { guess: i64, min: i64, max: i64 },

    #[error("Level is {phase}; restart or move on to keep guessing")]
    InputLocked { phase: LevelPhase },
}

/// Game errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("No level at index {index} (have {count})")]
    UnknownLevel { index: usize, count: usize },
}

/// Read the leading integer from raw input.
///
/// Surrounding whitespace is skipped, a single `+` or `-` is allowed, and
/// parsing stops at the first non-digit (`"12abc"` is 12, `"3.9"` is 3).
/// Magnitudes beyond `i64` saturate. Returns `None` if there are no digits.
pub fn parse_guess(raw: &str) -> Option<i64> {
    let s = raw.trim();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let mut value: i64 = 0;
    let mut seen = false;
    for b in digits.bytes().take_while(u8::is_ascii_digit) {
        seen = true;
        let d = i64::from(b - b'0');
        value = if negative {
            value.saturating_mul(10).saturating_sub(d)
        } else {
            value.saturating_mul(10).saturating_add(d)
        };
    }

    seen.then_some(value)
}

/// State of one play session.
///
/// Score and unlocked levels live for the whole session; target, attempts
/// and history are replaced every time a level starts.
#[derive(Debug, Clone)]
pub struct GameState<T = RandomTarget> {
    /// Index into [`LEVELS`]
    level_index: usize,

    /// Accumulated points
    score: u32,

    /// Number to find
    target: i64,

    /// Guesses remaining at this level
    attempts_left: u32,

    /// Accepted guesses at this level, oldest first
    history: Vec<i64>,

    /// Highest level index + 1 the player has reached
    unlocked_levels: usize,

    /// Whether the level still accepts guesses
    phase: LevelPhase,

    /// Where targets come from
    source: T,

    /// When the current level started
    pub started_at: DateTime<Utc>,

    /// When the current level was won or lost
    pub ended_at: Option<DateTime<Utc>>,
}

impl GameState<RandomTarget> {
    /// Create a session on the first level with a random target.
    pub fn new() -> Self {
        Self::with_source(RandomTarget::new())
    }
}

impl Default for GameState<RandomTarget> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: TargetSource> GameState<T> {
    /// Create a session on the first level, drawing targets from `source`.
    pub fn with_source(source: T) -> Self {
        let first = &LEVELS[0];
        let mut state = Self {
            level_index: 0,
            score: 0,
            target: first.min,
            attempts_left: first.attempts_allowed,
            history: Vec::new(),
            unlocked_levels: 1,
            phase: LevelPhase::Active,
            source,
            started_at: Utc::now(),
            ended_at: None,
        };
        state.reset_level();
        state
    }

    /// Start (or restart) the level at `index` with a fresh target.
    pub fn start_level(&mut self, index: usize) -> Result<(), GameError> {
        if level::level(index).is_none() {
            return Err(GameError::UnknownLevel {
                index,
                count: level::level_count(),
            });
        }

        self.level_index = index;
        self.reset_level();
        Ok(())
    }

    /// Replay the current level. Score and unlocked levels are kept.
    pub fn restart_level(&mut self) {
        self.phase = phase::transition(self.phase, PhaseEvent::Restart).unwrap_or_default();
        self.reset_level();
    }

    /// Move to the next level. Returns `false` (and changes nothing) on the
    /// last level.
    pub fn advance_level(&mut self) -> bool {
        if !level::has_next(self.level_index) {
            debug!(level = self.level_index, "advance ignored on final level");
            return false;
        }

        self.phase = phase::transition(self.phase, PhaseEvent::Advance).unwrap_or_default();
        self.level_index += 1;
        self.reset_level();
        true
    }

    fn reset_level(&mut self) {
        let level = self.level();
        let drawn = self.source.draw(level.min, level.max);
        self.target = drawn.clamp(level.min, level.max);
        self.attempts_left = level.attempts_allowed;
        self.history.clear();
        self.phase = LevelPhase::Active;
        self.started_at = Utc::now();
        self.ended_at = None;

        info!(
            level = self.level_index + 1,
            min = level.min,
            max = level.max,
            attempts = level.attempts_allowed,
            "level started"
        );
    }

    /// Validate and apply a guess.
    pub fn submit_guess(&mut self, raw: &str) -> GuessOutcome {
        let level = *self.level();

        if !self.phase.accepts_guesses() {
            warn!(phase = %self.phase, "guess while input locked");
            return GuessOutcome::Rejected(GuessError::InputLocked { phase: self.phase });
        }

        let guess = match parse_guess(raw) {
            Some(g) => g,
            None => {
                warn!(input = raw, "guess is not a number");
                return GuessOutcome::Rejected(GuessError::NotANumber {
                    input: raw.to_string(),
                    min: level.min,
                    max: level.max,
                });
            }
        };

        if !level.contains(guess) {
            warn!(guess, min = level.min, max = level.max, "guess out of range");
            return GuessOutcome::Rejected(GuessError::OutOfRange {
                guess,
                min: level.min,
                max: level.max,
            });
        }

        let attempts_left = self.attempts_left.saturating_sub(1);
        let event = if guess == self.target {
            PhaseEvent::CorrectGuess
        } else if attempts_left == 0 {
            PhaseEvent::AttemptsExhausted
        } else {
            PhaseEvent::WrongGuess
        };

        let next_phase = match phase::transition(self.phase, event) {
            Ok(p) => p,
            Err(_) => {
                return GuessOutcome::Rejected(GuessError::InputLocked { phase: self.phase })
            }
        };

        self.attempts_left = attempts_left;
        self.history.push(guess);
        self.phase = next_phase;

        debug!(guess, attempts_left, "guess accepted");

        match event {
            PhaseEvent::CorrectGuess => self.handle_win(&level),
            PhaseEvent::AttemptsExhausted => self.handle_loss(),
            _ => {
                let tier = HintTier::classify(guess, self.target, level.min, level.max);
                debug!(guess, tier = tier.as_str(), "hint");
                GuessOutcome::Hint { guess, tier }
            }
        }
    }

    fn handle_win(&mut self, level: &LevelConfig) -> GuessOutcome {
        let bonus = self.attempts_left * BONUS_PER_ATTEMPT;
        self.score += BASE_POINTS + bonus;
        self.ended_at = Some(Utc::now());

        info!(
            level = self.level_index + 1,
            bonus,
            score = self.score,
            "level won"
        );

        if level::has_next(self.level_index) {
            self.unlocked_levels = self.unlocked_levels.max(self.level_index + 2);
            GuessOutcome::LevelComplete {
                attempts_used: level.attempts_allowed - self.attempts_left,
                bonus,
                score: self.score,
            }
        } else {
            GuessOutcome::GameComplete { score: self.score }
        }
    }

    fn handle_loss(&mut self) -> GuessOutcome {
        self.ended_at = Some(Utc::now());

        info!(
            level = self.level_index + 1,
            target = self.target,
            score = self.score,
            "level lost"
        );

        GuessOutcome::Lost {
            target: self.target,
            score: self.score,
        }
    }

    /// Configuration of the level being played.
    pub fn level(&self) -> &'static LevelConfig {
        &LEVELS[self.level_index]
    }

    pub fn level_index(&self) -> usize {
        self.level_index
    }

    /// One-based level number for display.
    pub fn level_number(&self) -> usize {
        self.level_index + 1
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn target(&self) -> i64 {
        self.target
    }

    pub fn attempts_left(&self) -> u32 {
        self.attempts_left
    }

    pub fn attempts_used(&self) -> u32 {
        self.level().attempts_allowed - self.attempts_left
    }

    pub fn history(&self) -> &[i64] {
        &self.history
    }

    pub fn unlocked_levels(&self) -> usize {
        self.unlocked_levels
    }

    pub fn phase(&self) -> LevelPhase {
        self.phase
    }

    /// Check if a guess would be considered.
    pub fn accepts_guesses(&self) -> bool {
        self.phase.accepts_guesses()
    }

    /// Share of the attempt budget spent, 0 to 100.
    pub fn progress_percent(&self) -> f64 {
        let allowed = self.level().attempts_allowed;
        f64::from(self.attempts_used()) / f64::from(allowed) * 100.0
    }

    /// Convert state to a JSON snapshot. The target is only revealed once
    /// the level is over.
    pub fn to_json(&self) -> serde_json::Value {
        let mut obj = serde_json::json!({
            "level": self.level_number(),
            "level_config": self.level().to_json(),
            "title": self.level().title(),
            "score": self.score,
            "attempts_left": self.attempts_left,
            "history": self.history,
            "unlocked_levels": self.unlocked_levels,
            "phase": self.phase.as_str(),
            "progress": self.progress_percent(),
            "started_at": self.started_at.to_rfc3339()
        });
        if self.phase.is_terminal() {
            obj["target"] = serde_json::json!(self.target);
        }
        if let Some(ended_at) = self.ended_at {
            obj["ended_at"] = serde_json::json!(ended_at.to_rfc3339());
        }
        obj
    }
}
