//! Render port.
//!
//! Everything the presentation layer has to draw is pushed through
//! [`RenderSink`]. The sink owns the widgets; the game only describes what
//! they should show.

use serde::Serialize;

use super::game::GameState;
use super::target::TargetSource;

/// Banner severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Error,
    Success,
    Warning,
    Info,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Info => "info",
        }
    }
}

/// Banner text plus its severity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Message {
    pub text: String,
    pub severity: Severity,
}

impl Message {
    pub fn new(text: impl Into<String>, severity: Severity) -> Self {
        Self {
            text: text.into(),
            severity,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::new(text, Severity::Error)
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self::new(text, Severity::Success)
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self::new(text, Severity::Warning)
    }

    pub fn info(text: impl Into<String>) -> Self {
        Self::new(text, Severity::Info)
    }

    /// CSS-style class list, e.g. `message warning`.
    pub fn class_name(&self) -> String {
        format!("message {}", self.severity.as_str())
    }
}

/// The two modal dialogs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ModalKind {
    Victory,
    GameOver,
}

impl ModalKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Victory => "victory",
            Self::GameOver => "game_over",
        }
    }
}

/// Status panel contents.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatusView {
    /// One-based level number
    pub level: usize,
    /// e.g. `Level 1: Guess between 1 and 50`
    pub title: String,
    pub min: i64,
    pub max: i64,
    pub score: u32,
    pub attempts_left: u32,
    /// Share of the attempt budget spent, 0 to 100
    pub progress_percent: f64,
}

impl StatusView {
    pub fn of<T: TargetSource>(state: &GameState<T>) -> Self {
        let level = state.level();
        Self {
            level: state.level_number(),
            title: level.title(),
            min: level.min,
            max: level.max,
            score: state.score(),
            attempts_left: state.attempts_left(),
            progress_percent: state.progress_percent(),
        }
    }
}

/// Presentation layer.
pub trait RenderSink {
    /// Redraw level, score, attempts and progress.
    fn render_status(&mut self, status: &StatusView);

    /// Empty the guess list.
    fn clear_history(&mut self);

    /// Add one entry to the end of the guess list.
    fn append_history(&mut self, guess: i64);

    /// Replace the banner.
    fn show_message(&mut self, message: &Message);

    /// Enable or disable the guess input and submit control.
    fn set_input_enabled(&mut self, enabled: bool);

    /// Show or hide the next-level control.
    fn set_next_level_visible(&mut self, visible: bool);

    /// Open a modal with HTML-bearing text.
    fn show_modal(&mut self, modal: ModalKind, html: &str);

    fn hide_modal(&mut self, modal: ModalKind);
}

impl<T: RenderSink + ?Sized> RenderSink for &mut T {
    fn render_status(&mut self, status: &StatusView) {
        (**self).render_status(status)
    }

    fn clear_history(&mut self) {
        (**self).clear_history()
    }

    fn append_history(&mut self, guess: i64) {
        (**self).append_history(guess)
    }

    fn show_message(&mut self, message: &Message) {
        (**self).show_message(message)
    }

    fn set_input_enabled(&mut self, enabled: bool) {
        (**self).set_input_enabled(enabled)
    }

    fn set_next_level_visible(&mut self, visible: bool) {
        (**self).set_next_level_visible(visible)
    }

    fn show_modal(&mut self, modal: ModalKind, html: &str) {
        (**self).show_modal(modal, html)
    }

    fn hide_modal(&mut self, modal: ModalKind) {
        (**self).hide_modal(modal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::target::FixedTarget;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_message_constructors() {
        assert_eq!(Message::error("x").severity, Severity::Error);
        assert_eq!(Message::success("x").severity, Severity::Success);
        assert_eq!(Message::warning("x").severity, Severity::Warning);
        assert_eq!(Message::info("x").class_name(), "message info");
    }

    #[test]
    fn test_status_view() {
        let mut state = GameState::with_source(FixedTarget(25));
        state.submit_guess("10");
        state.submit_guess("12");

        assert_eq!(
            StatusView::of(&state),
            StatusView {
                level: 1,
                title: "Level 1: Guess between 1 and 50".to_string(),
                min: 1,
                max: 50,
                score: 0,
                attempts_left: 8,
                progress_percent: 20.0,
            }
        );
    }

    #[test]
    fn test_message_serializes() {
        let json = serde_json::to_value(Message::warning("careful")).unwrap();
        assert_eq!(json, serde_json::json!({"text": "careful", "severity": "warning"}));
    }
}
