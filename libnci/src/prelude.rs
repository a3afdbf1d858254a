// libnci/src/prelude.rs

pub use crate::protocol::{
    Command, DiscoveryConfig, IntfActivationNtf, Notification, RfDeactivateNtf, RfDiscoverNtf,
};
pub use crate::sm::{Config, StateMachine, StateMachineBuilder};
pub use crate::state::{State, StateParam};
pub use crate::transition::{
    DeactivateTransition, IdleToDiscoveryTransition, ResetTransition, Transition,
    TransitionContext,
};
pub use crate::transport::CommandSink;
pub use crate::{
    CommandStatus, DeactivationReason, DeactivationType, Disposition, Error, Result, RfInterface,
    RfProtocol, RfStateId, RfTechMode, SmStatus, StallReason,
};

// Re-export small utilities for convenience
pub use crate::utils::{Hex, default_command_timeout, ms};
