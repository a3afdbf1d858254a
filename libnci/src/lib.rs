// libnci/src/lib.rs

//! libnci
//!
//! RF interface state machine for NFC controllers speaking NCI. The
//! crate tracks the controller's RF state, drives multi-step
//! transitions (reset, discovery, deactivation) by correlating commands
//! with their responses, and routes unsolicited notifications to the
//! active transition or the current state. Packet framing and the
//! physical transport stay outside; they plug in through
//! [`transport::CommandSink`] and the `dispatch_notification` /
//! `handle_response` entry points of [`sm::StateMachine`].

pub mod constants;
pub mod error;
pub mod prelude;
pub mod protocol;
pub mod sm;
pub mod state;
pub mod test_support;
pub mod transition;
pub mod transport;
pub mod types;
pub mod utils;

// Re-export common types at crate root so `crate::Error`, `crate::Result`
// and the enums in `types` are available for consumers and for
// convenient `prelude` re-exports.
pub use crate::error::*;
pub use crate::types::*;

pub use prelude::*;
