// libnci/src/state/poll_active.rs

use crate::protocol::{Notification, NotificationKind, decode_rf_deactivate};
use crate::sm::StateMachine;
use crate::state::{State, StateParam, decode_or_stall, default_handle_notification};
use crate::types::{DeactivationType, Disposition, RfStateId};

/// RFST_POLL_ACTIVE: we activated a remote listener.
#[derive(Debug, Clone, Copy, Default)]
pub struct PollActiveState;

impl State for PollActiveState {
    fn id(&self) -> RfStateId {
        RfStateId::PollActive
    }

    fn handle_notification(&self, sm: &mut StateMachine, ntf: &Notification<'_>) -> Disposition {
        match ntf.kind() {
            NotificationKind::RfDeactivate => {
                if let Some(deact) = decode_or_stall(sm, ntf, decode_rf_deactivate) {
                    let next = match deact.deactivation_type {
                        DeactivationType::Discovery => RfStateId::Discovery,
                        DeactivationType::Idle => RfStateId::Idle,
                        DeactivationType::Sleep | DeactivationType::SleepAf => {
                            RfStateId::W4HostSelect
                        }
                    };
                    sm.enter_state(next, Some(StateParam::Deactivation(deact)));
                }
                Disposition::Handled
            }
            _ => default_handle_notification(self.id(), sm, ntf),
        }
    }
}
