// libnci/src/protocol/intf_activated.rs

use log::debug;

use crate::protocol::mode_param::{ModeParam, decode_mode_param};
use crate::protocol::parser;
use crate::types::{RfInterface, RfProtocol, RfTechMode};
use crate::utils::Hex;
use crate::Result;

/// Interface specific activation parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActivationParam {
    /// RATS response (ATS) without its length byte
    IsoDepPollA { ats: Vec<u8> },
    IsoDepPollB { attrib_res: Vec<u8> },
    /// Byte 2 of the RATS command (FSDI/DID)
    IsoDepListenA { rats_param: u8 },
    IsoDepListenB { attrib_cmd: Vec<u8> },
    NfcDepPoll { atr_res: Vec<u8> },
    NfcDepListen { atr_req: Vec<u8> },
}

/// Decoded RF_INTF_ACTIVATED_NTF.
///
/// The raw technology and activation parameter blocks are always kept;
/// the decoded forms are `None` when the mode/interface defines none or
/// when the block does not decode (the notification itself is still
/// valid in that case).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IntfActivationNtf {
    pub discovery_id: u8,
    pub rf_intf: RfInterface,
    pub protocol: RfProtocol,
    pub mode: RfTechMode,
    pub max_data_packet_size: u8,
    pub num_credits: u8,
    pub mode_param_bytes: Vec<u8>,
    pub mode_param: Option<ModeParam>,
    pub data_exchange_mode: RfTechMode,
    pub transmit_rate: u8,
    pub receive_rate: u8,
    pub activation_param_bytes: Vec<u8>,
    pub activation_param: Option<ActivationParam>,
}

/// Fixed part: 6 header bytes, the mode param length byte, 3 data
/// exchange bytes and the activation param length byte.
pub const INTF_ACTIVATED_MIN_LEN: usize = 11;

/// Decode an RF_INTF_ACTIVATED_NTF payload.
///
/// Layout: discovery_id(1) + interface(1) + protocol(1) + mode(1) +
/// max_packet(1) + credits(1) + n(1) + mode_param(n) + dx_mode(1) +
/// tx_rate(1) + rx_rate(1) + m(1) + activation_param(m)
pub fn decode_intf_activated(data: &[u8]) -> Result<IntfActivationNtf> {
    parser::ensure_len(data, INTF_ACTIVATED_MIN_LEN)?;

    let discovery_id = parser::byte_at(data, 0)?;
    let rf_intf = RfInterface::from(parser::byte_at(data, 1)?);
    let protocol = RfProtocol::from(parser::byte_at(data, 2)?);
    let mode = RfTechMode::from(parser::byte_at(data, 3)?);
    let max_data_packet_size = parser::byte_at(data, 4)?;
    let num_credits = parser::byte_at(data, 5)?;

    let (mode_param_bytes, next) = parser::length_prefixed_at(data, 6)?;
    let dx = parser::slice_at(data, next, 3)?;
    let (activation_param_bytes, _) = parser::length_prefixed_at(data, next + 3)?;

    let mode_param = match decode_mode_param(mode, mode_param_bytes) {
        Ok(param) => param,
        Err(e) => {
            debug!(
                "Failed to parse mode params ({}): {}",
                Hex(mode_param_bytes),
                e
            );
            None
        }
    };

    let activation_param =
        match decode_activation_param(rf_intf, mode, activation_param_bytes) {
            Ok(param) => param,
            Err(e) => {
                debug!(
                    "Failed to parse activation params ({}): {}",
                    Hex(activation_param_bytes),
                    e
                );
                None
            }
        };

    Ok(IntfActivationNtf {
        discovery_id,
        rf_intf,
        protocol,
        mode,
        max_data_packet_size,
        num_credits,
        mode_param_bytes: mode_param_bytes.to_vec(),
        mode_param,
        data_exchange_mode: RfTechMode::from(dx[0]),
        transmit_rate: dx[1],
        receive_rate: dx[2],
        activation_param_bytes: activation_param_bytes.to_vec(),
        activation_param,
    })
}

/// Decode the activation parameter block, which depends on both the
/// interface and the activation mode.
pub fn decode_activation_param(
    rf_intf: RfInterface,
    mode: RfTechMode,
    bytes: &[u8],
) -> Result<Option<ActivationParam>> {
    let param = match (rf_intf, mode) {
        (RfInterface::IsoDep, RfTechMode::PassivePollA) => {
            let (ats, _) = parser::length_prefixed_at(bytes, 0)?;
            ActivationParam::IsoDepPollA { ats: ats.to_vec() }
        }
        (RfInterface::IsoDep, RfTechMode::PassivePollB) => {
            let (attrib_res, _) = parser::length_prefixed_at(bytes, 0)?;
            ActivationParam::IsoDepPollB {
                attrib_res: attrib_res.to_vec(),
            }
        }
        (RfInterface::IsoDep, RfTechMode::PassiveListenA) => ActivationParam::IsoDepListenA {
            rats_param: parser::byte_at(bytes, 0)?,
        },
        (RfInterface::IsoDep, RfTechMode::PassiveListenB) => {
            let (attrib_cmd, _) = parser::length_prefixed_at(bytes, 0)?;
            ActivationParam::IsoDepListenB {
                attrib_cmd: attrib_cmd.to_vec(),
            }
        }
        (RfInterface::NfcDep, m) if m.is_poll() => {
            let (atr_res, _) = parser::length_prefixed_at(bytes, 0)?;
            ActivationParam::NfcDepPoll {
                atr_res: atr_res.to_vec(),
            }
        }
        (RfInterface::NfcDep, m) if m.is_listen() => {
            let (atr_req, _) = parser::length_prefixed_at(bytes, 0)?;
            ActivationParam::NfcDepListen {
                atr_req: atr_req.to_vec(),
            }
        }
        _ => return Ok(None),
    };
    Ok(Some(param))
}
