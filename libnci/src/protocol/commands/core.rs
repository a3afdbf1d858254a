// libnci/src/protocol/commands/core.rs

use crate::constants::{NCI_RESET_KEEP_CONFIG, NCI_RESET_RESET_CONFIG};

/// Encode CORE_RESET_CMD payload
pub fn encode_core_reset(reset_config: bool) -> Vec<u8> {
    if reset_config {
        vec![NCI_RESET_RESET_CONFIG]
    } else {
        vec![NCI_RESET_KEEP_CONFIG]
    }
}

/// Encode CORE_INIT_CMD payload (NCI 1.x carries no parameters)
pub fn encode_core_init() -> Vec<u8> {
    Vec::new()
}
