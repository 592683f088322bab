//! Guess Range Library
//!
//! This crate provides the game state for a level-based number guessing game.
//!
//! # Overview
//!
//! The state module provides:
//!
//! - **Game State** - Level index, hidden target, attempts, guess history and
//!   score, with validated guess handling.
//!
//! - **Hint Rules** - Missed guesses are bucketed as very close, close or far,
//!   relative to the level range.
//!
//! - **Level Phases** - Each level is active until it is won or lost; only a
//!   restart or advance reopens input.
//!
//! - **Output Ports** - Rendering and sound go through `RenderSink` and
//!   `AudioSink`, implemented by the host.
//!
//! # Design Principles
//!
//! 1. **No I/O in the core** - `GameState` only computes outcomes.
//!
//! 2. **Injectable randomness** - Targets come from a `TargetSource`, so tests
//!    can pin them.
//!
//! 3. **Invalid input is an outcome** - Bad guesses come back as
//!    `GuessOutcome::Rejected` and never consume an attempt.
//!
//! # Example
//!
//! ```rust
//! use guess_range::state::{
//!     Direction, FixedTarget, GameState, GuessOutcome, HintTier,
//! };
//!
//! let mut game = GameState::with_source(FixedTarget(25));
//!
//! // Out of range: rejected, nothing consumed
//! assert!(!game.submit_guess("51").is_accepted());
//! assert_eq!(game.attempts_left(), 10);
//!
//! // A far miss
//! assert_eq!(
//!     game.submit_guess("40"),
//!     GuessOutcome::Hint { guess: 40, tier: HintTier::Far(Direction::TooHigh) }
//! );
//!
//! // The hit: 100 base + 10 per remaining attempt
//! assert_eq!(
//!     game.submit_guess("25"),
//!     GuessOutcome::LevelComplete { attempts_used: 2, bonus: 80, score: 180 }
//! );
//! assert!(game.advance_level());
//! ```

pub mod state;

// Re-export everything from state module at crate root
pub use state::*;
