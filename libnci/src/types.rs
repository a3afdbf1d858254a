// libnci/src/types.rs

use crate::Error;
use derive_more::Display;
use std::convert::TryFrom;

/// RF state of the NFCC as believed by the host.
///
/// `Init` is the pre-reset state the machine starts in before the first
/// reset transition completes; the remaining variants follow the RF
/// communication state diagram of NCI.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RfStateId {
    #[display(fmt = "INIT")]
    Init,
    #[display(fmt = "RFST_IDLE")]
    Idle,
    #[display(fmt = "RFST_DISCOVERY")]
    Discovery,
    #[display(fmt = "RFST_W4_ALL_DISCOVERIES")]
    W4AllDiscoveries,
    #[display(fmt = "RFST_W4_HOST_SELECT")]
    W4HostSelect,
    #[display(fmt = "RFST_POLL_ACTIVE")]
    PollActive,
    #[display(fmt = "RFST_LISTEN_ACTIVE")]
    ListenActive,
    #[display(fmt = "RFST_LISTEN_SLEEP")]
    ListenSleep,
}

impl RfStateId {
    /// Every state, in table order.
    pub const ALL: [RfStateId; 8] = [
        RfStateId::Init,
        RfStateId::Idle,
        RfStateId::Discovery,
        RfStateId::W4AllDiscoveries,
        RfStateId::W4HostSelect,
        RfStateId::PollActive,
        RfStateId::ListenActive,
        RfStateId::ListenSleep,
    ];

    /// Number of distinct states.
    pub const COUNT: usize = Self::ALL.len();

    /// Position of this state in [`RfStateId::ALL`].
    pub const fn index(self) -> usize {
        self as usize
    }

    /// True for states in which an RF interface is activated.
    pub fn is_active(self) -> bool {
        matches!(self, RfStateId::PollActive | RfStateId::ListenActive)
    }
}

/// Why the state machine stalled.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StallReason {
    /// Orderly stop requested by the host
    #[display(fmt = "stop")]
    Stop,
    /// Protocol violation or failed command
    #[display(fmt = "error")]
    Error,
}

/// Coordinator status, orthogonal to the RF state.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SmStatus {
    #[display(fmt = "ready")]
    Ready,
    #[display(fmt = "transitioning")]
    Transitioning,
    #[display(fmt = "stalled ({})", _0)]
    Stalled(StallReason),
}

/// Outcome of an outstanding command as seen by its response handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandStatus {
    /// A response with matching gid/oid arrived
    Success,
    /// The configured command timeout expired first
    Timeout,
}

/// Whether a notification handler consumed a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
    Handled,
    /// Not meaningful to this handler; the next one in line gets it
    Declined,
}

impl Disposition {
    pub fn is_handled(self) -> bool {
        self == Disposition::Handled
    }
}

/// RF interface reported in RF_INTF_ACTIVATED_NTF
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RfInterface {
    NfceeDirect,
    Frame,
    IsoDep,
    NfcDep,
    Other(u8),
}

impl From<u8> for RfInterface {
    fn from(v: u8) -> Self {
        match v {
            0x00 => Self::NfceeDirect,
            0x01 => Self::Frame,
            0x02 => Self::IsoDep,
            0x03 => Self::NfcDep,
            other => Self::Other(other),
        }
    }
}

/// RF protocol reported in RF_INTF_ACTIVATED_NTF / RF_DISCOVER_NTF
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RfProtocol {
    Undetermined,
    T1t,
    T2t,
    T3t,
    IsoDep,
    NfcDep,
    T5t,
    Other(u8),
}

impl From<u8> for RfProtocol {
    fn from(v: u8) -> Self {
        match v {
            0x00 => Self::Undetermined,
            0x01 => Self::T1t,
            0x02 => Self::T2t,
            0x03 => Self::T3t,
            0x04 => Self::IsoDep,
            0x05 => Self::NfcDep,
            0x06 => Self::T5t,
            other => Self::Other(other),
        }
    }
}

/// RF technology and mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RfTechMode {
    PassivePollA,
    PassivePollB,
    PassivePollF,
    ActivePollA,
    ActivePollF,
    PassivePollV,
    PassiveListenA,
    PassiveListenB,
    PassiveListenF,
    ActiveListenA,
    ActiveListenF,
    PassiveListenV,
    Other(u8),
}

impl RfTechMode {
    /// Any of the listen modes known to NCI.
    pub fn is_listen(self) -> bool {
        matches!(
            self,
            Self::PassiveListenA
                | Self::PassiveListenB
                | Self::PassiveListenF
                | Self::ActiveListenA
                | Self::ActiveListenF
                | Self::PassiveListenV
        )
    }

    /// Any of the poll modes known to NCI.
    pub fn is_poll(self) -> bool {
        matches!(
            self,
            Self::PassivePollA
                | Self::PassivePollB
                | Self::PassivePollF
                | Self::ActivePollA
                | Self::ActivePollF
                | Self::PassivePollV
        )
    }

    pub fn as_u8(self) -> u8 {
        match self {
            Self::PassivePollA => 0x00,
            Self::PassivePollB => 0x01,
            Self::PassivePollF => 0x02,
            Self::ActivePollA => 0x03,
            Self::ActivePollF => 0x05,
            Self::PassivePollV => 0x06,
            Self::PassiveListenA => 0x80,
            Self::PassiveListenB => 0x81,
            Self::PassiveListenF => 0x82,
            Self::ActiveListenA => 0x83,
            Self::ActiveListenF => 0x85,
            Self::PassiveListenV => 0x86,
            Self::Other(v) => v,
        }
    }
}

impl From<u8> for RfTechMode {
    fn from(v: u8) -> Self {
        match v {
            0x00 => Self::PassivePollA,
            0x01 => Self::PassivePollB,
            0x02 => Self::PassivePollF,
            0x03 => Self::ActivePollA,
            0x05 => Self::ActivePollF,
            0x06 => Self::PassivePollV,
            0x80 => Self::PassiveListenA,
            0x81 => Self::PassiveListenB,
            0x82 => Self::PassiveListenF,
            0x83 => Self::ActiveListenA,
            0x85 => Self::ActiveListenF,
            0x86 => Self::PassiveListenV,
            other => Self::Other(other),
        }
    }
}

/// Deactivation type of RF_DEACTIVATE_CMD / RF_DEACTIVATE_NTF
#[repr(u8)]
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DeactivationType {
    #[display(fmt = "idle")]
    Idle = 0x00,
    #[display(fmt = "sleep")]
    Sleep = 0x01,
    #[display(fmt = "sleep_af")]
    SleepAf = 0x02,
    #[display(fmt = "discovery")]
    Discovery = 0x03,
}

impl TryFrom<u8> for DeactivationType {
    type Error = Error;

    fn try_from(v: u8) -> Result<Self, Self::Error> {
        match v {
            0x00 => Ok(Self::Idle),
            0x01 => Ok(Self::Sleep),
            0x02 => Ok(Self::SleepAf),
            0x03 => Ok(Self::Discovery),
            value => Err(Error::InvalidValue {
                field: "deactivation type",
                value,
            }),
        }
    }
}

/// Deactivation reason of RF_DEACTIVATE_NTF
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DeactivationReason {
    DhRequest,
    EndpointRequest,
    RfLinkLoss,
    BadAfi,
    Other(u8),
}

impl From<u8> for DeactivationReason {
    fn from(v: u8) -> Self {
        match v {
            0x00 => Self::DhRequest,
            0x01 => Self::EndpointRequest,
            0x02 => Self::RfLinkLoss,
            0x03 => Self::BadAfi,
            other => Self::Other(other),
        }
    }
}
