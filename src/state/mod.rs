//! State management module for the guessing game.
//!
//! This module provides the core state types and the ports around them:
//!
//! - `level` - Fixed level table
//! - `phase` - Per-level phase state machine (active, won, lost)
//! - `hint` - Proximity hint rules
//! - `target` - Target number sources
//! - `game` - Game state and guess handling
//! - `render` / `audio` - Output ports implemented by the host
//! - `session` - Controller binding state to the ports
//! - `settings` / `logging` - Host configuration
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────────┐
//! │                           GuessGame                              │
//! │                                                                  │
//! │  user action ──▶ ┌──────────────────────────────┐                │
//! │                  │          GameState           │                │
//! │                  │                              │                │
//! │                  │  level table ─▶ LevelConfig  │                │
//! │                  │  TargetSource ─▶ target      │                │
//! │                  │  LevelPhase: Active/Won/Lost │                │
//! │                  │  score, attempts, history    │                │
//! │                  └──────────────┬───────────────┘                │
//! │                                 │ GuessOutcome                   │
//! │                  ┌──────────────┴───────────────┐                │
//! │                  ▼                              ▼                │
//! │          ┌──────────────┐               ┌──────────────┐         │
//! │          │  RenderSink  │               │  AudioSink   │         │
//! │          │ status, msgs │               │  Cue → Tone  │         │
//! │          │ history,modal│               │              │         │
//! │          └──────────────┘               └──────────────┘         │
//! └──────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,ignore
//! use guess_range::state::{GameState, FixedTarget, GuessOutcome};
//!
//! let mut game = GameState::with_source(FixedTarget(25));
//! let outcome = game.submit_guess("40");
//! assert!(matches!(outcome, GuessOutcome::Hint { .. }));
//! ```

pub mod audio;
pub mod game;
pub mod hint;
pub mod level;
pub mod logging;
pub mod phase;
pub mod render;
pub mod session;
pub mod settings;
pub mod target;

// Re-export commonly used types
pub use audio::{AudioSink, Cue, NullAudio, Tone, TracingAudio, TONE_DURATION, TONE_GAIN};
pub use game::{parse_guess, GameError, GameState, GuessError, GuessOutcome};
pub use hint::{Direction, HintTier};
pub use level::{LevelConfig, BASE_POINTS, BONUS_PER_ATTEMPT, LEVELS};
pub use phase::{InvalidTransition, LevelPhase, PhaseEvent};
pub use render::{Message, ModalKind, RenderSink, Severity, StatusView};
pub use session::GuessGame;
pub use settings::{Settings, SettingsError};
pub use target::{FixedTarget, RandomTarget, SequenceTarget, TargetSource};
