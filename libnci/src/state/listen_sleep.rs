// libnci/src/state/listen_sleep.rs

use log::debug;

use crate::protocol::{Notification, NotificationKind, decode_intf_activated, decode_rf_deactivate};
use crate::sm::StateMachine;
use crate::state::{State, StateParam, decode_or_stall, default_handle_notification};
use crate::types::{DeactivationType, Disposition, RfStateId, StallReason};

/// RFST_LISTEN_SLEEP: the remote poller put us to sleep.
#[derive(Debug, Clone, Copy, Default)]
pub struct ListenSleepState;

impl ListenSleepState {
    /// A valid wake-up followed by activation brings the NFCC back to
    /// RFST_LISTEN_ACTIVE. Anything but a listen mode activation is a
    /// protocol violation.
    fn intf_activated(&self, sm: &mut StateMachine, ntf: &Notification<'_>) {
        let Some(act) = decode_or_stall(sm, ntf, decode_intf_activated) else {
            return;
        };
        if act.mode.is_listen() {
            // The state must change before activation observers run,
            // they are allowed to switch it again.
            sm.enter_state(RfStateId::ListenActive, Some(StateParam::Activation(act)));
        } else {
            debug!("Unexpected activation mode {:#04x}", act.mode.as_u8());
            sm.stall(StallReason::Error);
        }
    }

    fn rf_deactivate(&self, sm: &mut StateMachine, ntf: &Notification<'_>) {
        let Some(deact) = decode_or_stall(sm, ntf, decode_rf_deactivate) else {
            return;
        };
        match deact.deactivation_type {
            // Remote field off (link loss) or NFC-B bad AFI
            DeactivationType::Discovery => {
                sm.enter_state(RfStateId::Discovery, Some(StateParam::Deactivation(deact)));
            }
            // Already asleep, and idle never comes spontaneously
            DeactivationType::Sleep | DeactivationType::SleepAf | DeactivationType::Idle => {
                debug!("Unexpected RF_DEACTIVATE_NTF ({})", deact.deactivation_type);
                sm.stall(StallReason::Error);
            }
        }
    }
}

impl State for ListenSleepState {
    fn id(&self) -> RfStateId {
        RfStateId::ListenSleep
    }

    fn handle_notification(&self, sm: &mut StateMachine, ntf: &Notification<'_>) -> Disposition {
        match ntf.kind() {
            NotificationKind::RfIntfActivated => {
                self.intf_activated(sm, ntf);
                Disposition::Handled
            }
            NotificationKind::RfDeactivate => {
                self.rf_deactivate(sm, ntf);
                Disposition::Handled
            }
            _ => default_handle_notification(self.id(), sm, ntf),
        }
    }
}
