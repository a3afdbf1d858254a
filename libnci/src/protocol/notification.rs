// libnci/src/protocol/notification.rs

use std::fmt;

use crate::constants::*;

/// A control notification as delivered by the packet layer: group id,
/// opcode and the reassembled payload. Borrowed for the duration of a
/// single dispatch and never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Notification<'a> {
    pub gid: u8,
    pub oid: u8,
    pub payload: &'a [u8],
}

/// Notifications the engine knows how to interpret.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    CoreReset,
    CoreConnCredits,
    CoreGenericError,
    CoreInterfaceError,
    RfDiscover,
    RfIntfActivated,
    RfDeactivate,
    RfFieldInfo,
    RfNfceeAction,
    RfNfceeDiscoveryReq,
    Unknown,
}

impl<'a> Notification<'a> {
    pub fn new(gid: u8, oid: u8, payload: &'a [u8]) -> Self {
        Self { gid, oid, payload }
    }

    /// Classify by (gid, oid). The payload is not inspected.
    pub fn kind(&self) -> NotificationKind {
        match (self.gid, self.oid) {
            (NCI_GID_CORE, NCI_OID_CORE_RESET) => NotificationKind::CoreReset,
            (NCI_GID_CORE, NCI_OID_CORE_CONN_CREDITS) => NotificationKind::CoreConnCredits,
            (NCI_GID_CORE, NCI_OID_CORE_GENERIC_ERROR) => NotificationKind::CoreGenericError,
            (NCI_GID_CORE, NCI_OID_CORE_INTERFACE_ERROR) => NotificationKind::CoreInterfaceError,
            (NCI_GID_RF, NCI_OID_RF_DISCOVER) => NotificationKind::RfDiscover,
            (NCI_GID_RF, NCI_OID_RF_INTF_ACTIVATED) => NotificationKind::RfIntfActivated,
            (NCI_GID_RF, NCI_OID_RF_DEACTIVATE) => NotificationKind::RfDeactivate,
            (NCI_GID_RF, NCI_OID_RF_FIELD_INFO) => NotificationKind::RfFieldInfo,
            (NCI_GID_RF, NCI_OID_RF_NFCEE_ACTION) => NotificationKind::RfNfceeAction,
            (NCI_GID_RF, NCI_OID_RF_NFCEE_DISCOVERY_REQ) => NotificationKind::RfNfceeDiscoveryReq,
            _ => NotificationKind::Unknown,
        }
    }
}

impl fmt::Display for Notification<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ntf {:02x}/{:02x} ({:?}, {} bytes)",
            self.gid,
            self.oid,
            self.kind(),
            self.payload.len()
        )
    }
}
