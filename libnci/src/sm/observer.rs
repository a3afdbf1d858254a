// libnci/src/sm/observer.rs

use crate::protocol::IntfActivationNtf;
use crate::sm::StateMachine;
use crate::types::{RfStateId, StallReason};

/// Invoked once the machine is already in the post-activation state.
pub type ActivationObserver = Box<dyn FnMut(&mut StateMachine, &IntfActivationNtf)>;

/// Invoked after the machine has recorded the stall and dropped the
/// active transition. May start a recovery transition.
pub type StallObserver = Box<dyn FnMut(&mut StateMachine, StallReason)>;

/// Invoked with (previous, next) after every actual state change.
pub type StateObserver = Box<dyn FnMut(&mut StateMachine, RfStateId, RfStateId)>;

/// Registered callbacks. Lists are taken out of the machine while they
/// run, so a callback may register more observers (they are kept and
/// run from the next event on) but is never re-entered for a nested
/// event of the same kind.
#[derive(Default)]
pub(crate) struct Observers {
    pub(crate) activation: Vec<ActivationObserver>,
    pub(crate) stall: Vec<StallObserver>,
    pub(crate) state: Vec<StateObserver>,
}

/// Put a list back after running it, keeping whatever was registered
/// in the meantime.
pub(crate) fn restore<T>(slot: &mut Vec<T>, mut taken: Vec<T>) {
    taken.append(slot);
    *slot = taken;
}
