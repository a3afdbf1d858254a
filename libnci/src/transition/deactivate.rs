// libnci/src/transition/deactivate.rs

use log::{debug, warn};

use crate::protocol::{Notification, NotificationKind, RfDeactivateNtf, decode_rf_deactivate};
use crate::state::StateParam;
use crate::transition::{Transition, TransitionContext};
use crate::types::{CommandStatus, DeactivationType, Disposition, RfStateId};
use crate::utils::Hex;

/// RF_DEACTIVATE_CMD towards RFST_IDLE or RFST_DISCOVERY.
///
/// From RFST_DISCOVERY the response alone completes the deactivation.
/// From every other state the NFCC follows up with RF_DEACTIVATE_NTF,
/// which this transition consumes and hands to the destination state.
///
/// When heading for RFST_IDLE from an active or sleeping link, the remote
/// side may drop the link before the NFCC processes the command. The
/// NFCC then reports RF_DEACTIVATE_NTF(Discovery) first and treats the
/// command as issued from RFST_DISCOVERY, so only the response follows.
#[derive(Debug, Clone)]
pub struct DeactivateTransition {
    target: DeactivationType,
    wait_ntf: bool,
    rsp_ok: bool,
    ntf: Option<RfDeactivateNtf>,
}

impl DeactivateTransition {
    pub fn to_idle() -> Self {
        Self::new(DeactivationType::Idle)
    }

    pub fn to_discovery() -> Self {
        Self::new(DeactivationType::Discovery)
    }

    fn new(target: DeactivationType) -> Self {
        Self {
            target,
            wait_ntf: true,
            rsp_ok: false,
            ntf: None,
        }
    }

    fn deactivate_rsp(&mut self, cx: &mut TransitionContext<'_, Self>, status: CommandStatus, payload: &[u8]) {
        if !cx.check_response(status, payload) {
            return;
        }
        self.rsp_ok = true;
        self.try_finish(cx);
    }

    fn try_finish(&mut self, cx: &mut TransitionContext<'_, Self>) {
        if !self.rsp_ok {
            return;
        }
        if !self.wait_ntf {
            cx.finish(None);
        } else if let Some(ntf) = self.ntf.take() {
            cx.finish(Some(StateParam::Deactivation(ntf)));
        } else {
            debug!("{}: waiting for RF_DEACTIVATE_NTF", self.name());
        }
    }
}

impl Transition for DeactivateTransition {
    fn name(&self) -> &'static str {
        match self.target {
            DeactivationType::Discovery => "DEACTIVATE_TO_DISCOVERY",
            _ => "DEACTIVATE_TO_IDLE",
        }
    }

    fn destination(&self) -> RfStateId {
        match self.target {
            DeactivationType::Discovery => RfStateId::Discovery,
            _ => RfStateId::Idle,
        }
    }

    fn start(&mut self, cx: &mut TransitionContext<'_, Self>) -> bool {
        let current = cx.current_state();
        if current == cx.destination() {
            debug!("{}: already in {}", self.name(), current);
            cx.finish(None);
            return true;
        }
        self.wait_ntf = current != RfStateId::Discovery;
        let sent = match self.target {
            DeactivationType::Discovery => cx.deactivate_to_discovery(Self::deactivate_rsp),
            _ => cx.deactivate_to_idle(Self::deactivate_rsp),
        };
        sent.is_ok()
    }

    fn handle_notification(
        &mut self,
        cx: &mut TransitionContext<'_, Self>,
        ntf: &Notification<'_>,
    ) -> Disposition {
        if ntf.kind() != NotificationKind::RfDeactivate || !self.wait_ntf {
            return Disposition::Declined;
        }
        match decode_rf_deactivate(ntf.payload) {
            Ok(deact) if deact.deactivation_type == self.target => {
                self.ntf = Some(deact);
                self.try_finish(cx);
            }
            Ok(deact)
                if self.target == DeactivationType::Idle
                    && deact.deactivation_type == DeactivationType::Discovery =>
            {
                debug!("{}: link lost ({:?}) before deactivation", self.name(), deact.reason);
                self.wait_ntf = false;
                cx.enter_state(RfStateId::Discovery, Some(StateParam::Deactivation(deact)));
                self.try_finish(cx);
            }
            Ok(deact) => {
                warn!(
                    "{}: unexpected deactivation type {}",
                    self.name(),
                    deact.deactivation_type
                );
                cx.error();
            }
            Err(e) => {
                warn!("{}: malformed {} ({}): {}", self.name(), ntf, Hex(ntf.payload), e);
                cx.error();
            }
        }
        Disposition::Handled
    }
}
