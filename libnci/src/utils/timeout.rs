//! Timeout helpers used across the crate.
//!
//! The state machine itself never sleeps or arms timers; these only
//! describe how long an outstanding command may wait before the event
//! loop reports it through `StateMachine::check_timeout`.

use std::time::Duration;

/// Default command timeout in milliseconds.
pub const DEFAULT_COMMAND_TIMEOUT_MS: u64 = 2000;

/// Convert milliseconds to Duration.
pub fn ms(ms: u64) -> Duration {
    Duration::from_millis(ms)
}

/// Convenience: default command timeout as Duration.
pub fn default_command_timeout() -> Duration {
    ms(DEFAULT_COMMAND_TIMEOUT_MS)
}
