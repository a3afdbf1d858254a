// libnci/src/protocol/commands/mod.rs

pub mod core;
pub mod rf;

pub use self::core::{encode_core_init, encode_core_reset};
pub use rf::{DiscoveryConfig, MAX_DISCOVERY_CONFIGS, encode_rf_deactivate, encode_rf_discover};

use crate::constants::*;
use crate::types::DeactivationType;
use crate::Result;

/// Control commands issued by the built-in transitions. Each knows its
/// group/opcode and how to encode its payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    CoreReset { reset_config: bool },
    CoreInit,
    RfDiscover { configs: Vec<DiscoveryConfig> },
    RfDeactivate(DeactivationType),
}

impl Command {
    pub fn gid(&self) -> u8 {
        match self {
            Self::CoreReset { .. } | Self::CoreInit => NCI_GID_CORE,
            Self::RfDiscover { .. } | Self::RfDeactivate(_) => NCI_GID_RF,
        }
    }

    pub fn oid(&self) -> u8 {
        match self {
            Self::CoreReset { .. } => NCI_OID_CORE_RESET,
            Self::CoreInit => NCI_OID_CORE_INIT,
            Self::RfDiscover { .. } => NCI_OID_RF_DISCOVER,
            Self::RfDeactivate(_) => NCI_OID_RF_DEACTIVATE,
        }
    }

    /// Encode the command payload (without the NCI packet header).
    /// Fails only for an RF_DISCOVER_CMD whose entry count does not fit
    /// its count byte.
    pub fn encode(&self) -> Result<Vec<u8>> {
        Ok(match self {
            Self::CoreReset { reset_config } => encode_core_reset(*reset_config),
            Self::CoreInit => encode_core_init(),
            Self::RfDiscover { configs } => encode_rf_discover(configs)?,
            Self::RfDeactivate(t) => encode_rf_deactivate(*t),
        })
    }
}
