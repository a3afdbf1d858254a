// libnci/src/error.rs

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("invalid payload length: expected {expected}, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("invalid {field}: {value:#04x}")]
    InvalidValue { field: &'static str, value: u8 },

    #[error("transition already active: {active}")]
    TransitionBusy { active: &'static str },

    #[error("transition {name} is no longer active")]
    TransitionInactive { name: &'static str },

    #[error("transition {name} failed to start")]
    TransitionStartFailed { name: &'static str },

    #[error("command already pending: gid={gid:#04x} oid={oid:#04x}")]
    CommandPending { gid: u8, oid: u8 },

    #[error("too many entries: {actual} (max {max})")]
    TooManyEntries { max: usize, actual: usize },

    #[error("no command sink configured")]
    NoSink,

    #[error("transport error: {0}")]
    Transport(String),
}

pub type Result<T> = std::result::Result<T, Error>;
