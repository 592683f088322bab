//! Trace subscriber setup for hosts that don't install their own.

use tracing_subscriber::fmt;

use super::settings::LogSettings;

/// Install a fmt subscriber capped at the configured level.
///
/// Returns `false` if a global subscriber was already set.
pub fn init(settings: &LogSettings) -> bool {
    fmt()
        .with_max_level(settings.max_level.as_tracing_level())
        .with_target(false)
        .try_init()
        .is_ok()
}
