// libnci/src/transition/idle_to_discovery.rs

use log::warn;

use crate::protocol::{Command, DiscoveryConfig, MAX_DISCOVERY_CONFIGS};
use crate::transition::{Transition, TransitionContext};
use crate::types::{CommandStatus, RfStateId};

/// RFST_IDLE to RFST_DISCOVERY with RF_DISCOVER_CMD.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdleToDiscoveryTransition {
    configs: Vec<DiscoveryConfig>,
}

impl IdleToDiscoveryTransition {
    pub fn new(configs: Vec<DiscoveryConfig>) -> Self {
        Self { configs }
    }

    fn discover_rsp(&mut self, cx: &mut TransitionContext<'_, Self>, status: CommandStatus, payload: &[u8]) {
        if cx.check_response(status, payload) {
            cx.finish(None);
        }
    }
}

impl Transition for IdleToDiscoveryTransition {
    fn name(&self) -> &'static str {
        "IDLE_TO_DISCOVERY"
    }

    fn destination(&self) -> RfStateId {
        RfStateId::Discovery
    }

    fn start(&mut self, cx: &mut TransitionContext<'_, Self>) -> bool {
        if self.configs.is_empty() {
            warn!("IDLE_TO_DISCOVERY: no discovery configuration");
            return false;
        }
        if self.configs.len() > MAX_DISCOVERY_CONFIGS {
            warn!(
                "IDLE_TO_DISCOVERY: {} discovery configurations, at most {}",
                self.configs.len(),
                MAX_DISCOVERY_CONFIGS
            );
            return false;
        }
        let cmd = Command::RfDiscover {
            configs: std::mem::take(&mut self.configs),
        };
        cx.send(&cmd, Self::discover_rsp).is_ok()
    }
}
