// libnci/src/state/mod.rs

//! RF states. Each [`RfStateId`] has exactly one [`State`] singleton in
//! the machine's [`StateTable`], reused every time the state is entered.

pub mod basic;
pub mod discovery;
pub mod listen_active;
pub mod listen_sleep;
pub mod poll_active;
pub mod select;

pub use basic::BasicState;
pub use discovery::DiscoveryState;
pub use listen_active::ListenActiveState;
pub use listen_sleep::ListenSleepState;
pub use poll_active::PollActiveState;
pub use select::{W4AllDiscoveriesState, W4HostSelectState};

use std::rc::Rc;

use log::{debug, warn};

use crate::protocol::{IntfActivationNtf, Notification, NotificationKind, RfDeactivateNtf};
use crate::sm::StateMachine;
use crate::types::{Disposition, RfStateId, StallReason};
use crate::utils::Hex;
use crate::Result;

/// Out-of-band data handed to the state being entered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StateParam {
    /// The interface activation that brought the machine here. Entering
    /// a state with this parameter notifies the activation observers.
    Activation(IntfActivationNtf),
    /// The deactivation that brought the machine here.
    Deactivation(RfDeactivateNtf),
}

/// Behaviour of one RF state.
///
/// States own no mutable data; all side effects go through the
/// machine's `enter_state` and `stall`. An implementation matches the
/// notifications meaningful to it and hands everything else to
/// [`default_handle_notification`].
pub trait State {
    fn id(&self) -> RfStateId;

    /// Called right after the machine switched to this state.
    fn enter(&self, _sm: &mut StateMachine, _param: Option<&StateParam>) {}

    /// Called right before the machine switches away from this state.
    fn leave(&self, _sm: &mut StateMachine) {}

    fn handle_notification(&self, sm: &mut StateMachine, ntf: &Notification<'_>) -> Disposition {
        default_handle_notification(self.id(), sm, ntf)
    }
}

/// Base handling shared by all states.
///
/// Housekeeping notifications are logged and consumed. RF notifications
/// that move the state machine are recognized but have no meaning in a
/// state that did not handle them itself, so they stall the machine.
/// Anything else is declined.
pub fn default_handle_notification(
    state: RfStateId,
    sm: &mut StateMachine,
    ntf: &Notification<'_>,
) -> Disposition {
    match ntf.kind() {
        NotificationKind::CoreGenericError => {
            warn!("CORE_GENERIC_ERROR_NTF ({}) in {}", Hex(ntf.payload), state);
            Disposition::Handled
        }
        NotificationKind::CoreInterfaceError => {
            warn!("CORE_INTERFACE_ERROR_NTF ({}) in {}", Hex(ntf.payload), state);
            Disposition::Handled
        }
        NotificationKind::CoreConnCredits
        | NotificationKind::RfFieldInfo
        | NotificationKind::RfNfceeAction
        | NotificationKind::RfNfceeDiscoveryReq => {
            debug!("Ignoring {} in {}", ntf, state);
            Disposition::Handled
        }
        NotificationKind::CoreReset
        | NotificationKind::RfDiscover
        | NotificationKind::RfIntfActivated
        | NotificationKind::RfDeactivate => {
            warn!("Unexpected {} in {}", ntf, state);
            sm.stall(StallReason::Error);
            Disposition::Handled
        }
        NotificationKind::Unknown => Disposition::Declined,
    }
}

/// Decode a notification payload, stalling the machine if it does not
/// decode. A known opcode with a broken payload means the host and the
/// NFCC are out of sync.
pub fn decode_or_stall<T>(
    sm: &mut StateMachine,
    ntf: &Notification<'_>,
    decode: impl FnOnce(&[u8]) -> Result<T>,
) -> Option<T> {
    match decode(ntf.payload) {
        Ok(v) => Some(v),
        Err(e) => {
            warn!("Malformed {} ({}): {}", ntf, Hex(ntf.payload), e);
            sm.stall(StallReason::Error);
            None
        }
    }
}

/// One state singleton per [`RfStateId`].
#[derive(Clone)]
pub struct StateTable {
    states: Vec<Rc<dyn State>>,
}

impl StateTable {
    /// The built-in states.
    pub fn new() -> Self {
        let states = RfStateId::ALL
            .iter()
            .map(|&id| -> Rc<dyn State> {
                match id {
                    RfStateId::Init | RfStateId::Idle => Rc::new(BasicState::new(id)),
                    RfStateId::Discovery => Rc::new(DiscoveryState),
                    RfStateId::W4AllDiscoveries => Rc::new(W4AllDiscoveriesState),
                    RfStateId::W4HostSelect => Rc::new(W4HostSelectState),
                    RfStateId::PollActive => Rc::new(PollActiveState),
                    RfStateId::ListenActive => Rc::new(ListenActiveState),
                    RfStateId::ListenSleep => Rc::new(ListenSleepState),
                }
            })
            .collect();
        Self { states }
    }

    /// Install `state` as the singleton for `state.id()`, returning the
    /// one it replaces.
    pub fn replace(&mut self, state: Rc<dyn State>) -> Rc<dyn State> {
        let idx = state.id().index();
        std::mem::replace(&mut self.states[idx], state)
    }

    /// The singleton for `id`. The table always holds one per id.
    pub fn get(&self, id: RfStateId) -> Rc<dyn State> {
        Rc::clone(&self.states[id.index()])
    }
}

impl Default for StateTable {
    fn default() -> Self {
        Self::new()
    }
}
