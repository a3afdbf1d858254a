// libnci/src/transition/reset.rs

use log::debug;

use crate::protocol::{Command, Notification, NotificationKind};
use crate::transition::{Transition, TransitionContext};
use crate::types::{CommandStatus, Disposition, RfStateId};

/// Brings the NFCC from any state to RFST_IDLE with CORE_RESET_CMD
/// followed by CORE_INIT_CMD. The usual way out of a stall.
#[derive(Debug, Clone, Copy)]
pub struct ResetTransition {
    reset_config: bool,
}

impl ResetTransition {
    /// `reset_config` also drops the NFCC's configuration parameters.
    pub fn new(reset_config: bool) -> Self {
        Self { reset_config }
    }

    fn reset_rsp(&mut self, cx: &mut TransitionContext<'_, Self>, status: CommandStatus, payload: &[u8]) {
        if !cx.check_response(status, payload) {
            return;
        }
        if cx.send(&Command::CoreInit, Self::init_rsp).is_err() {
            cx.error();
        }
    }

    fn init_rsp(&mut self, cx: &mut TransitionContext<'_, Self>, status: CommandStatus, payload: &[u8]) {
        if cx.check_response(status, payload) {
            cx.finish(None);
        }
    }
}

impl Default for ResetTransition {
    fn default() -> Self {
        Self::new(false)
    }
}

impl Transition for ResetTransition {
    fn name(&self) -> &'static str {
        "RESET"
    }

    fn destination(&self) -> RfStateId {
        RfStateId::Idle
    }

    fn start(&mut self, cx: &mut TransitionContext<'_, Self>) -> bool {
        let cmd = Command::CoreReset {
            reset_config: self.reset_config,
        };
        cx.send(&cmd, Self::reset_rsp).is_ok()
    }

    fn handle_notification(
        &mut self,
        _cx: &mut TransitionContext<'_, Self>,
        ntf: &Notification<'_>,
    ) -> Disposition {
        // CORE_RESET_NTF is expected here, and anything RF related that
        // was in flight before the reset is stale.
        match ntf.kind() {
            NotificationKind::CoreReset
            | NotificationKind::RfDeactivate
            | NotificationKind::RfIntfActivated
            | NotificationKind::RfDiscover => {
                debug!("RESET: consumed {}", ntf);
                Disposition::Handled
            }
            _ => Disposition::Declined,
        }
    }
}
