//! Level phase state machine.
//!
//! Tracks whether the current level still accepts guesses.
//!
//! # State Diagram
//!
//! ```text
//!              wrong_guess
//!             ┌─────────┐
//!             ▼         │
//!        ┌──────────┐───┘
//!   ┌───▶│  Active  │──────────────────┐
//!   │    └────┬─────┘                  │
//!   │         │ correct_guess          │ attempts_exhausted
//!   │         ▼                        ▼
//!   │    ┌──────────┐            ┌──────────┐
//!   │    │   Won    │            │   Lost   │
//!   │    └────┬─────┘            └────┬─────┘
//!   │         │                       │
//!   └─────────┴── restart / advance ──┘
//! ```

use std::fmt;

use serde::Serialize;

/// Phase of the level currently being played.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LevelPhase {
    /// Accepting guesses
    #[default]
    Active,

    /// Target found; waiting for restart or next level
    Won,

    /// Attempts used up; waiting for restart
    Lost,
}

impl LevelPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Won => "won",
            Self::Lost => "lost",
        }
    }

    /// Check if guesses are accepted.
    pub fn accepts_guesses(&self) -> bool {
        matches!(self, Self::Active)
    }

    /// Check if the level is over.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl fmt::Display for LevelPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Phase transition events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhaseEvent {
    /// A valid guess that missed, with attempts remaining
    WrongGuess,
    /// A valid guess that hit the target
    CorrectGuess,
    /// A valid guess that missed and used the last attempt
    AttemptsExhausted,
    /// Replay the same level
    Restart,
    /// Move on to the following level
    Advance,
}

/// Error when a phase transition is invalid.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid transition from {from} via {event:?}: {reason}")]
pub struct InvalidTransition {
    pub from: LevelPhase,
    pub event: PhaseEvent,
    pub reason: &'static str,
}

/// Calculate the phase that follows `from` on `event`.
pub fn transition(from: LevelPhase, event: PhaseEvent) -> Result<LevelPhase, InvalidTransition> {
    use LevelPhase::*;
    use PhaseEvent::*;

    let invalid = |reason: &'static str| InvalidTransition {
        from,
        event,
        reason,
    };

    match (from, event) {
        (Active, WrongGuess) => Ok(Active),
        (Active, CorrectGuess) => Ok(Won),
        (Active, AttemptsExhausted) => Ok(Lost),
        (Won, WrongGuess | CorrectGuess | AttemptsExhausted) => {
            Err(invalid("Level already won"))
        }
        (Lost, WrongGuess | CorrectGuess | AttemptsExhausted) => {
            Err(invalid("No attempts left"))
        }

        // Restarting or advancing always reopens input
        (_, Restart) | (_, Advance) => Ok(Active),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_phase() {
        let phase = LevelPhase::default();
        assert_eq!(phase, LevelPhase::Active);
        assert!(phase.accepts_guesses());
        assert!(!phase.is_terminal());
    }

    #[test]
    fn test_guess_transitions() {
        assert_eq!(
            transition(LevelPhase::Active, PhaseEvent::WrongGuess),
            Ok(LevelPhase::Active)
        );
        assert_eq!(
            transition(LevelPhase::Active, PhaseEvent::CorrectGuess),
            Ok(LevelPhase::Won)
        );
        assert_eq!(
            transition(LevelPhase::Active, PhaseEvent::AttemptsExhausted),
            Ok(LevelPhase::Lost)
        );
    }

    #[test]
    fn test_terminal_phases_reject_guesses() {
        for phase in [LevelPhase::Won, LevelPhase::Lost] {
            assert!(phase.is_terminal());
            for event in [
                PhaseEvent::WrongGuess,
                PhaseEvent::CorrectGuess,
                PhaseEvent::AttemptsExhausted,
            ] {
                let err = transition(phase, event).unwrap_err();
                assert_eq!(err.from, phase);
                assert_eq!(err.event, event);
            }
        }
    }

    #[test]
    fn test_restart_and_advance_reopen() {
        for phase in [LevelPhase::Active, LevelPhase::Won, LevelPhase::Lost] {
            assert_eq!(transition(phase, PhaseEvent::Restart), Ok(LevelPhase::Active));
            assert_eq!(transition(phase, PhaseEvent::Advance), Ok(LevelPhase::Active));
        }
    }

    #[test]
    fn test_display() {
        let err = transition(LevelPhase::Lost, PhaseEvent::WrongGuess).unwrap_err();
        assert_eq!(
            format!("{}", err),
            "Invalid transition from lost via WrongGuess: No attempts left"
        );
    }
}
