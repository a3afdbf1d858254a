// libnci/src/protocol/mode_param.rs

//! RF technology specific parameters, shared by RF_DISCOVER_NTF and
//! RF_INTF_ACTIVATED_NTF.

use crate::protocol::parser;
use crate::types::RfTechMode;
use crate::{Error, Result};

/// Decoded technology specific parameters for the modes that carry any.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ModeParam {
    PollA {
        sens_res: [u8; 2],
        nfcid1: Vec<u8>,
        sel_res: Option<u8>,
    },
    PollB {
        /// SENSB_RES without its leading 0x50 byte
        sensb_res: Vec<u8>,
    },
    PollF {
        /// 1 = 212 kbps, 2 = 424 kbps
        bitrate: u8,
        /// SENSF_RES without its leading 0x01 byte
        sensf_res: Vec<u8>,
    },
    ListenF {
        nfcid2: Option<[u8; 8]>,
    },
}

/// Decode technology specific parameters for `mode`. Returns `Ok(None)`
/// for modes that define no parameters (listen A/B, poll V, unknown).
pub fn decode_mode_param(mode: RfTechMode, bytes: &[u8]) -> Result<Option<ModeParam>> {
    match mode {
        RfTechMode::PassivePollA | RfTechMode::ActivePollA => decode_poll_a(bytes).map(Some),
        RfTechMode::PassivePollB => decode_poll_b(bytes).map(Some),
        RfTechMode::PassivePollF | RfTechMode::ActivePollF => decode_poll_f(bytes).map(Some),
        RfTechMode::PassiveListenF | RfTechMode::ActiveListenF => {
            decode_listen_f(bytes).map(Some)
        }
        _ => Ok(None),
    }
}

/// Layout: SENS_RES(2) + nfcid1_len(1) + NFCID1(0/4/7/10) + sel_res_len(1) + SEL_RES(0/1)
fn decode_poll_a(bytes: &[u8]) -> Result<ModeParam> {
    let sens = parser::slice_at(bytes, 0, 2)?;
    let (nfcid1, next) = parser::length_prefixed_at(bytes, 2)?;
    if !matches!(nfcid1.len(), 0 | 4 | 7 | 10) {
        return Err(Error::InvalidValue {
            field: "nfcid1 length",
            value: nfcid1.len() as u8,
        });
    }
    let (sel, _) = parser::length_prefixed_at(bytes, next)?;
    let sel_res = match sel {
        [] => None,
        [b] => Some(*b),
        _ => {
            return Err(Error::InvalidValue {
                field: "sel_res length",
                value: sel.len() as u8,
            });
        }
    };
    Ok(ModeParam::PollA {
        sens_res: [sens[0], sens[1]],
        nfcid1: nfcid1.to_vec(),
        sel_res,
    })
}

/// Layout: sensb_res_len(1, 11 or 12) + SENSB_RES
fn decode_poll_b(bytes: &[u8]) -> Result<ModeParam> {
    let (sensb, _) = parser::length_prefixed_at(bytes, 0)?;
    if !matches!(sensb.len(), 11 | 12) {
        return Err(Error::InvalidValue {
            field: "sensb_res length",
            value: sensb.len() as u8,
        });
    }
    Ok(ModeParam::PollB {
        sensb_res: sensb.to_vec(),
    })
}

/// Layout: bitrate(1) + sensf_res_len(1, 16 or 18) + SENSF_RES
fn decode_poll_f(bytes: &[u8]) -> Result<ModeParam> {
    let bitrate = parser::byte_at(bytes, 0)?;
    let (sensf, _) = parser::length_prefixed_at(bytes, 1)?;
    if !matches!(sensf.len(), 16 | 18) {
        return Err(Error::InvalidValue {
            field: "sensf_res length",
            value: sensf.len() as u8,
        });
    }
    Ok(ModeParam::PollF {
        bitrate,
        sensf_res: sensf.to_vec(),
    })
}

/// Layout: nfcid2_len(1, 0 or 8) + NFCID2. An empty block is also accepted.
fn decode_listen_f(bytes: &[u8]) -> Result<ModeParam> {
    if bytes.is_empty() {
        return Ok(ModeParam::ListenF { nfcid2: None });
    }
    let (id, _) = parser::length_prefixed_at(bytes, 0)?;
    match id.len() {
        0 => Ok(ModeParam::ListenF { nfcid2: None }),
        8 => {
            let mut nfcid2 = [0u8; 8];
            nfcid2.copy_from_slice(id);
            Ok(ModeParam::ListenF {
                nfcid2: Some(nfcid2),
            })
        }
        n => Err(Error::InvalidValue {
            field: "nfcid2 length",
            value: n as u8,
        }),
    }
}
