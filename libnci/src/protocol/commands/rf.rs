// libnci/src/protocol/commands/rf.rs

use crate::types::{DeactivationType, RfTechMode};
use crate::{Error, Result};

/// RF_DISCOVER_CMD carries its entry count in a single byte.
pub const MAX_DISCOVERY_CONFIGS: usize = u8::MAX as usize;

/// One RF_DISCOVER_CMD configuration entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiscoveryConfig {
    pub mode: RfTechMode,
    /// Discovery frequency; 0x01 means every period
    pub frequency: u8,
}

impl DiscoveryConfig {
    pub fn new(mode: RfTechMode) -> Self {
        Self { mode, frequency: 0x01 }
    }
}

/// Encode RF_DISCOVER_CMD payload: count(1) + [mode(1) + frequency(1)] * count
pub fn encode_rf_discover(configs: &[DiscoveryConfig]) -> Result<Vec<u8>> {
    let count = u8::try_from(configs.len()).map_err(|_| Error::TooManyEntries {
        max: MAX_DISCOVERY_CONFIGS,
        actual: configs.len(),
    })?;
    let mut buf = Vec::with_capacity(1 + configs.len() * 2);
    buf.push(count);
    for c in configs {
        buf.push(c.mode.as_u8());
        buf.push(c.frequency);
    }
    Ok(buf)
}

/// Encode RF_DEACTIVATE_CMD payload
pub fn encode_rf_deactivate(deactivation_type: DeactivationType) -> Vec<u8> {
    vec![deactivation_type as u8]
}
