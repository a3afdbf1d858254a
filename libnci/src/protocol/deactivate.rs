// libnci/src/protocol/deactivate.rs

use crate::protocol::parser;
use crate::types::{DeactivationReason, DeactivationType};
use crate::Result;

/// Decoded RF_DEACTIVATE_NTF
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RfDeactivateNtf {
    pub deactivation_type: DeactivationType,
    pub reason: DeactivationReason,
}

/// Decode an RF_DEACTIVATE_NTF payload.
/// Layout: type(1) + reason(1)
pub fn decode_rf_deactivate(data: &[u8]) -> Result<RfDeactivateNtf> {
    parser::ensure_exact_len(data, 2)?;
    let deactivation_type = DeactivationType::try_from(parser::byte_at(data, 0)?)?;
    let reason = DeactivationReason::from(parser::byte_at(data, 1)?);
    Ok(RfDeactivateNtf {
        deactivation_type,
        reason,
    })
}
