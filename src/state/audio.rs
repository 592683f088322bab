//! Audio cues.
//!
//! The game never synthesizes sound itself. It hands a [`Cue`] to an
//! [`AudioSink`]; each cue maps to a fixed short tone.

use std::time::Duration;

use serde::Serialize;

/// Gain applied to every tone.
pub const TONE_GAIN: f32 = 0.1;

/// Length of every tone.
pub const TONE_DURATION: Duration = Duration::from_millis(100);

/// Game events that have a sound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Cue {
    Start,
    Close,
    Medium,
    Far,
    Win,
    Lose,
}

impl Cue {
    pub const ALL: [Cue; 6] = [
        Self::Start,
        Self::Close,
        Self::Medium,
        Self::Far,
        Self::Win,
        Self::Lose,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Close => "close",
            Self::Medium => "medium",
            Self::Far => "far",
            Self::Win => "win",
            Self::Lose => "lose",
        }
    }

    /// Tone frequency in Hz.
    pub fn frequency_hz(&self) -> f32 {
        match self {
            Self::Start => 440.0,
            Self::Close => 880.0,
            Self::Medium => 660.0,
            Self::Far => 330.0,
            Self::Win => 1000.0,
            Self::Lose => 200.0,
        }
    }

    pub fn tone(&self) -> Tone {
        Tone {
            frequency_hz: self.frequency_hz(),
            gain: TONE_GAIN,
            duration: TONE_DURATION,
        }
    }
}

/// A single oscillator beep.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tone {
    pub frequency_hz: f32,
    pub gain: f32,
    pub duration: Duration,
}

/// Plays cues.
pub trait AudioSink {
    fn play(&mut self, cue: Cue);
}

impl<T: AudioSink + ?Sized> AudioSink for &mut T {
    fn play(&mut self, cue: Cue) {
        (**self).play(cue)
    }
}

impl<T: AudioSink + ?Sized> AudioSink for Box<T> {
    fn play(&mut self, cue: Cue) {
        (**self).play(cue)
    }
}

/// Discards every cue.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullAudio;

impl AudioSink for NullAudio {
    fn play(&mut self, _cue: Cue) {}
}

/// Emits each cue's tone as a trace event; handy for headless hosts.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingAudio;

impl AudioSink for TracingAudio {
    fn play(&mut self, cue: Cue) {
        let tone = cue.tone();
        tracing::trace!(
            cue = cue.as_str(),
            frequency_hz = tone.frequency_hz,
            gain = tone.gain,
            duration_ms = tone.duration.as_millis() as u64,
            "play tone"
        );
    }
}
