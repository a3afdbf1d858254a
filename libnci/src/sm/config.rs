// libnci/src/sm/config.rs

use std::time::Duration;

use crate::types::RfStateId;
use crate::utils::default_command_timeout;

/// Tunables for [`StateMachine`](crate::sm::StateMachine).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// State the machine reports before anything has happened
    pub initial_state: RfStateId,
    /// How long a command may stay unanswered before
    /// `StateMachine::check_timeout` reports it. `None` disables the
    /// check entirely and an unanswered command stays pending forever.
    pub command_timeout: Option<Duration>,
    /// Dump notification and response payloads at trace level
    pub log_payloads: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            initial_state: RfStateId::Init,
            command_timeout: Some(default_command_timeout()),
            log_payloads: false,
        }
    }
}

impl Config {
    pub fn with_initial_state(mut self, state: RfStateId) -> Self {
        self.initial_state = state;
        self
    }

    pub fn with_command_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.command_timeout = timeout;
        self
    }

    pub fn with_payload_logging(mut self, enabled: bool) -> Self {
        self.log_payloads = enabled;
        self
    }
}
