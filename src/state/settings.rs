//! Host settings.
//!
//! Only presentation-side knobs live here. The level table is fixed.
//!
//! ```toml
//! [audio]
//! enabled = false
//!
//! [log]
//! max_level = "debug"
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("failed to read settings from {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid settings: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub audio: AudioSettings,
    pub log: LogSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AudioSettings {
    /// When false no cue reaches the audio sink
    pub enabled: bool,
}

impl Default for AudioSettings {
    fn default() -> Self {
        Self { enabled: true }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogSettings {
    pub max_level: Level,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl Level {
    pub fn as_tracing_level(&self) -> tracing::Level {
        match self {
            Level::Trace => tracing::Level::TRACE,
            Level::Debug => tracing::Level::DEBUG,
            Level::Info => tracing::Level::INFO,
            Level::Warn => tracing::Level::WARN,
            Level::Error => tracing::Level::ERROR,
        }
    }
}

impl Settings {
    pub fn from_toml_str(s: &str) -> Result<Self, SettingsError> {
        Ok(toml::from_str(s)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Like [`Settings::load`], but a missing file yields the defaults.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no settings file, using defaults");
            return Ok(Self::default());
        }
        Self::load(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert!(settings.audio.enabled);
        assert_eq!(settings.log.max_level, Level::Info);
    }

    #[test]
    fn test_empty_toml_is_default() {
        assert_eq!(Settings::from_toml_str("").unwrap(), Settings::default());
    }

    #[test]
    fn test_parse() {
        let settings = Settings::from_toml_str(
            r#"
            [audio]
            enabled = false

            [log]
            max_level = "debug"
            "#,
        )
        .unwrap();
        assert!(!settings.audio.enabled);
        assert_eq!(settings.log.max_level, Level::Debug);
        assert_eq!(
            settings.log.max_level.as_tracing_level(),
            tracing::Level::DEBUG
        );
    }

    #[test]
    fn test_parse_error() {
        let err = Settings::from_toml_str("[log]\nmax_level = \"loud\"").unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[audio]\nenabled = false").unwrap();

        let settings = Settings::load(file.path()).unwrap();
        assert!(!settings.audio.enabled);
        assert_eq!(settings.log.max_level, Level::Info);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");

        assert!(matches!(
            Settings::load(&path),
            Err(SettingsError::Io { .. })
        ));
        assert_eq!(Settings::load_or_default(&path).unwrap(), Settings::default());
    }
}
