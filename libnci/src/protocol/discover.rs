// libnci/src/protocol/discover.rs

use crate::constants::{
    NCI_DISCOVER_NTF_TYPE_LAST, NCI_DISCOVER_NTF_TYPE_LAST_LIMIT, NCI_DISCOVER_NTF_TYPE_MORE,
};
use crate::protocol::mode_param::{ModeParam, decode_mode_param};
use crate::protocol::parser;
use crate::types::{RfProtocol, RfTechMode};
use crate::{Error, Result};

/// Decoded RF_DISCOVER_NTF
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RfDiscoverNtf {
    pub discovery_id: u8,
    pub protocol: RfProtocol,
    pub mode: RfTechMode,
    pub mode_param: Option<ModeParam>,
    /// More RF_DISCOVER_NTF follow this one
    pub more: bool,
}

/// Decode an RF_DISCOVER_NTF payload.
/// Layout: discovery_id(1) + protocol(1) + mode(1) + n(1) + mode_param(n) + type(1)
pub fn decode_rf_discover(data: &[u8]) -> Result<RfDiscoverNtf> {
    let discovery_id = parser::byte_at(data, 0)?;
    let protocol = RfProtocol::from(parser::byte_at(data, 1)?);
    let mode = RfTechMode::from(parser::byte_at(data, 2)?);
    let (param_bytes, next) = parser::length_prefixed_at(data, 3)?;
    let more = match parser::byte_at(data, next)? {
        NCI_DISCOVER_NTF_TYPE_LAST | NCI_DISCOVER_NTF_TYPE_LAST_LIMIT => false,
        NCI_DISCOVER_NTF_TYPE_MORE => true,
        value => {
            return Err(Error::InvalidValue {
                field: "discover notification type",
                value,
            });
        }
    };
    Ok(RfDiscoverNtf {
        discovery_id,
        protocol,
        mode,
        mode_param: decode_mode_param(mode, param_bytes).ok().flatten(),
        more,
    })
}
