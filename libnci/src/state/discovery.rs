// libnci/src/state/discovery.rs

use log::debug;

use crate::protocol::{
    Notification, NotificationKind, decode_intf_activated, decode_rf_deactivate,
    decode_rf_discover,
};
use crate::sm::StateMachine;
use crate::state::{State, StateParam, decode_or_stall, default_handle_notification};
use crate::types::{DeactivationType, Disposition, RfStateId, StallReason};

/// RFST_DISCOVERY: polling and/or listening as configured by RF_DISCOVER_CMD.
#[derive(Debug, Clone, Copy, Default)]
pub struct DiscoveryState;

impl DiscoveryState {
    fn intf_activated(&self, sm: &mut StateMachine, ntf: &Notification<'_>) {
        let Some(act) = decode_or_stall(sm, ntf, decode_intf_activated) else {
            return;
        };
        let next = if act.mode.is_poll() {
            RfStateId::PollActive
        } else if act.mode.is_listen() {
            RfStateId::ListenActive
        } else {
            debug!("Unexpected activation mode {:#04x}", act.mode.as_u8());
            sm.stall(StallReason::Error);
            return;
        };
        sm.enter_state(next, Some(StateParam::Activation(act)));
    }

    fn rf_discover(&self, sm: &mut StateMachine, ntf: &Notification<'_>) {
        // Several remote endpoints found, the host has to pick one
        if let Some(disc) = decode_or_stall(sm, ntf, decode_rf_discover) {
            debug!("Discovered id {} ({:?})", disc.discovery_id, disc.protocol);
            if disc.more {
                sm.enter_state(RfStateId::W4AllDiscoveries, None);
            } else {
                sm.enter_state(RfStateId::W4HostSelect, None);
            }
        }
    }

    fn rf_deactivate(&self, sm: &mut StateMachine, ntf: &Notification<'_>) {
        if let Some(deact) = decode_or_stall(sm, ntf, decode_rf_deactivate) {
            if deact.deactivation_type == DeactivationType::Idle {
                sm.enter_state(RfStateId::Idle, Some(StateParam::Deactivation(deact)));
            } else {
                debug!("Unexpected RF_DEACTIVATE_NTF ({})", deact.deactivation_type);
                sm.stall(StallReason::Error);
            }
        }
    }
}

impl State for DiscoveryState {
    fn id(&self) -> RfStateId {
        RfStateId::Discovery
    }

    fn handle_notification(&self, sm: &mut StateMachine, ntf: &Notification<'_>) -> Disposition {
        match ntf.kind() {
            NotificationKind::RfIntfActivated => self.intf_activated(sm, ntf),
            NotificationKind::RfDiscover => self.rf_discover(sm, ntf),
            NotificationKind::RfDeactivate => self.rf_deactivate(sm, ntf),
            _ => return default_handle_notification(self.id(), sm, ntf),
        }
        Disposition::Handled
    }
}
