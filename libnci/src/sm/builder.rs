// libnci/src/sm/builder.rs

use std::rc::Rc;

use crate::sm::{Config, StateMachine};
use crate::state::{State, StateTable};
use crate::transport::CommandSink;
use crate::{Error, Result};

/// Helper to construct a [`StateMachine`] with optional configuration and
/// replacement states.
#[derive(Default)]
pub struct StateMachineBuilder {
    sink: Option<Box<dyn CommandSink>>,
    config: Config,
    states: StateTable,
}

impl StateMachineBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Where outbound commands go (e.g. a MockSink in tests)
    pub fn with_sink(mut self, sink: Box<dyn CommandSink>) -> Self {
        self.sink = Some(sink);
        self
    }

    pub fn with_config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    /// Replace the built-in singleton for `state.id()`.
    pub fn with_state(mut self, state: Rc<dyn State>) -> Self {
        self.states.replace(state);
        self
    }

    /// Consume the builder. Requires a sink; otherwise returns NoSink.
    pub fn build(self) -> Result<StateMachine> {
        match self.sink {
            Some(sink) => Ok(StateMachine::with_parts(sink, self.config, self.states)),
            None => Err(Error::NoSink),
        }
    }
}

impl StateMachine {
    pub fn builder() -> StateMachineBuilder {
        StateMachineBuilder::new()
    }
}
