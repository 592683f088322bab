//! Presentation controller.
//!
//! [`GuessGame`] binds a [`GameState`] to a render sink and an audio sink.
//! A host forwards user actions to it (submit, restart, next level, modal
//! dismissal) and the controller pushes banners, history entries, modals and
//! cues back out.

use tracing::debug;

use super::audio::{AudioSink, Cue};
use super::game::{GameState, GuessError, GuessOutcome};
use super::hint::{Direction, HintTier};
use super::render::{Message, ModalKind, RenderSink, StatusView};
use super::settings::Settings;
use super::target::{RandomTarget, TargetSource};

/// Banner text for a missed guess.
pub fn hint_message(tier: HintTier) -> Message {
    match tier {
        HintTier::VeryClose => Message::success("🔥 Very Close! You're almost there!"),
        HintTier::Close(Direction::TooHigh) => Message::warning("📉 Close, but too high!"),
        HintTier::Close(Direction::TooLow) => Message::warning("📈 Close, but too low!"),
        HintTier::Far(Direction::TooHigh) => Message::info("⬇️ Too High!"),
        HintTier::Far(Direction::TooLow) => Message::info("⬆️ Too Low!"),
    }
}

/// Banner text for rejected input.
pub fn rejection_message(err: &GuessError) -> Message {
    match err {
        GuessError::NotANumber { min, max, .. } | GuessError::OutOfRange { min, max, .. } => {
            Message::error(format!("Please enter a number between {} and {}", min, max))
        }
        GuessError::InputLocked { .. } => Message::error(err.to_string()),
    }
}

/// Victory modal body after a level that has a successor.
pub fn level_complete_html(attempts_used: u32, bonus: u32, score: u32) -> String {
    format!(
        "You guessed it in {} attempts!<br>Bonus: +{} points<br>Total Score: {}",
        attempts_used, bonus, score
    )
}

/// Victory modal body after the final level.
pub fn game_complete_html(score: u32) -> String {
    format!(
        "🏆 Game Completed!<br>Final Score: {}<br>You're a Master Guesser!",
        score
    )
}

/// Game-over modal body.
pub fn game_over_html(target: i64, score: u32) -> String {
    format!(
        "The correct number was {}<br>Your Score: {}",
        target, score
    )
}

/// A game wired to its presentation.
pub struct GuessGame<R, A, T = RandomTarget> {
    state: GameState<T>,
    renderer: R,
    audio: A,
    settings: Settings,
}

impl<R: RenderSink, A: AudioSink> GuessGame<R, A, RandomTarget> {
    /// Create a game with random targets and default settings.
    pub fn new(renderer: R, audio: A) -> Self {
        Self::with_state(GameState::new(), renderer, audio, Settings::default())
    }
}

impl<R: RenderSink, A: AudioSink, T: TargetSource> GuessGame<R, A, T> {
    pub fn with_state(state: GameState<T>, renderer: R, audio: A, settings: Settings) -> Self {
        Self {
            state,
            renderer,
            audio,
            settings,
        }
    }

    /// Draw the level the state is on. Call once after construction.
    pub fn start(&mut self) {
        self.level_started();
    }

    /// Handle the submit action.
    pub fn submit(&mut self, raw: &str) -> GuessOutcome {
        let outcome = self.state.submit_guess(raw);

        match &outcome {
            GuessOutcome::Rejected(err) => {
                self.renderer.show_message(&rejection_message(err));
                return outcome;
            }
            GuessOutcome::Hint { guess, tier } => {
                self.renderer.append_history(*guess);
                self.renderer.show_message(&hint_message(*tier));
            }
            GuessOutcome::LevelComplete {
                attempts_used,
                bonus,
                score,
            } => {
                self.append_last_guess();
                self.renderer
                    .show_message(&Message::success("🎉 Correct! You won!"));
                self.renderer.set_next_level_visible(true);
                self.renderer.show_modal(
                    ModalKind::Victory,
                    &level_complete_html(*attempts_used, *bonus, *score),
                );
                self.renderer.set_input_enabled(false);
            }
            GuessOutcome::GameComplete { score } => {
                self.append_last_guess();
                self.renderer
                    .show_message(&Message::success("🎉 Correct! You won!"));
                self.renderer
                    .show_modal(ModalKind::Victory, &game_complete_html(*score));
                self.renderer.set_input_enabled(false);
            }
            GuessOutcome::Lost { target, score } => {
                self.append_last_guess();
                self.renderer.show_message(&Message::error(format!(
                    "😢 Game Over! The number was {}",
                    target
                )));
                self.renderer
                    .show_modal(ModalKind::GameOver, &game_over_html(*target, *score));
                self.renderer.set_input_enabled(false);
            }
        }

        if let Some(cue) = outcome.cue() {
            self.play(cue);
        }
        self.renderer.render_status(&StatusView::of(&self.state));
        outcome
    }

    /// Handle the restart action.
    pub fn restart_level(&mut self) {
        self.renderer.set_input_enabled(true);
        self.state.restart_level();
        self.level_started();
        self.renderer
            .show_message(&Message::info("Level restarted! Good luck!"));
    }

    /// Handle the next-level action. Returns `false` on the final level.
    pub fn next_level(&mut self) -> bool {
        if !self.state.advance_level() {
            return false;
        }

        self.renderer.set_input_enabled(true);
        self.level_started();
        self.renderer
            .show_message(&Message::info("New level! Can you beat it?"));
        true
    }

    /// Dismiss the victory modal.
    pub fn close_victory_modal(&mut self) {
        self.renderer.hide_modal(ModalKind::Victory);
    }

    /// Dismiss the game-over modal and replay the level.
    pub fn close_game_over_modal(&mut self) {
        self.renderer.hide_modal(ModalKind::GameOver);
        self.restart_level();
    }

    fn level_started(&mut self) {
        debug!(level = self.state.level_number(), "render level start");
        self.renderer.render_status(&StatusView::of(&self.state));
        self.renderer.clear_history();
        self.renderer.set_next_level_visible(false);
        self.play(Cue::Start);
    }

    fn append_last_guess(&mut self) {
        if let Some(guess) = self.state.history().last() {
            self.renderer.append_history(*guess);
        }
    }

    fn play(&mut self, cue: Cue) {
        if self.settings.audio.enabled {
            self.audio.play(cue);
        }
    }

    pub fn state(&self) -> &GameState<T> {
        &self.state
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn audio(&self) -> &A {
        &self.audio
    }

    /// Take the parts back.
    pub fn into_parts(self) -> (GameState<T>, R, A) {
        (self.state, self.renderer, self.audio)
    }
}
