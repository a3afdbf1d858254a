// libnci/src/state/select.rs

//! The two states between discovering several remote endpoints and the
//! host selecting one of them.

use log::debug;

use crate::protocol::{Notification, NotificationKind, decode_intf_activated, decode_rf_discover};
use crate::sm::StateMachine;
use crate::state::{State, StateParam, decode_or_stall, default_handle_notification};
use crate::types::{Disposition, RfStateId, StallReason};

/// RFST_W4_ALL_DISCOVERIES: more RF_DISCOVER_NTF are on their way.
#[derive(Debug, Clone, Copy, Default)]
pub struct W4AllDiscoveriesState;

impl State for W4AllDiscoveriesState {
    fn id(&self) -> RfStateId {
        RfStateId::W4AllDiscoveries
    }

    fn handle_notification(&self, sm: &mut StateMachine, ntf: &Notification<'_>) -> Disposition {
        match ntf.kind() {
            NotificationKind::RfDiscover => {
                if let Some(disc) = decode_or_stall(sm, ntf, decode_rf_discover) {
                    debug!("Discovered id {} ({:?})", disc.discovery_id, disc.protocol);
                    if !disc.more {
                        sm.enter_state(RfStateId::W4HostSelect, None);
                    }
                }
                Disposition::Handled
            }
            _ => default_handle_notification(self.id(), sm, ntf),
        }
    }
}

/// RFST_W4_HOST_SELECT: waiting for RF_DISCOVER_SELECT_CMD. The
/// activation that follows the select arrives here.
#[derive(Debug, Clone, Copy, Default)]
pub struct W4HostSelectState;

impl State for W4HostSelectState {
    fn id(&self) -> RfStateId {
        RfStateId::W4HostSelect
    }

    fn handle_notification(&self, sm: &mut StateMachine, ntf: &Notification<'_>) -> Disposition {
        match ntf.kind() {
            NotificationKind::RfIntfActivated => {
                if let Some(act) = decode_or_stall(sm, ntf, decode_intf_activated) {
                    if act.mode.is_poll() {
                        sm.enter_state(RfStateId::PollActive, Some(StateParam::Activation(act)));
                    } else {
                        debug!("Unexpected activation mode {:#04x}", act.mode.as_u8());
                        sm.stall(StallReason::Error);
                    }
                }
                Disposition::Handled
            }
            _ => default_handle_notification(self.id(), sm, ntf),
        }
    }
}
