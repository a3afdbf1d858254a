// libnci/src/constants.rs
//! NCI group/opcode identifiers and status codes used across the crate

/// Group id for NCI core messages
pub const NCI_GID_CORE: u8 = 0x00;
/// Group id for RF management messages
pub const NCI_GID_RF: u8 = 0x01;
/// Group id for NFCEE management messages
pub const NCI_GID_NFCEE: u8 = 0x02;
/// Group id reserved for proprietary messages
pub const NCI_GID_PROPRIETARY: u8 = 0x0f;

// NCI_GID_CORE
pub const NCI_OID_CORE_RESET: u8 = 0x00;
pub const NCI_OID_CORE_INIT: u8 = 0x01;
pub const NCI_OID_CORE_SET_CONFIG: u8 = 0x02;
pub const NCI_OID_CORE_GET_CONFIG: u8 = 0x03;
pub const NCI_OID_CORE_CONN_CREATE: u8 = 0x04;
pub const NCI_OID_CORE_CONN_CLOSE: u8 = 0x05;
pub const NCI_OID_CORE_CONN_CREDITS: u8 = 0x06;
pub const NCI_OID_CORE_GENERIC_ERROR: u8 = 0x07;
pub const NCI_OID_CORE_INTERFACE_ERROR: u8 = 0x08;

// NCI_GID_RF
pub const NCI_OID_RF_DISCOVER_MAP: u8 = 0x00;
pub const NCI_OID_RF_SET_LISTEN_MODE_ROUTING: u8 = 0x01;
pub const NCI_OID_RF_GET_LISTEN_MODE_ROUTING: u8 = 0x02;
pub const NCI_OID_RF_DISCOVER: u8 = 0x03;
pub const NCI_OID_RF_DISCOVER_SELECT: u8 = 0x04;
pub const NCI_OID_RF_INTF_ACTIVATED: u8 = 0x05;
pub const NCI_OID_RF_DEACTIVATE: u8 = 0x06;
pub const NCI_OID_RF_FIELD_INFO: u8 = 0x07;
pub const NCI_OID_RF_T3T_POLLING: u8 = 0x08;
pub const NCI_OID_RF_NFCEE_ACTION: u8 = 0x09;
pub const NCI_OID_RF_NFCEE_DISCOVERY_REQ: u8 = 0x0a;
pub const NCI_OID_RF_PARAMETER_UPDATE: u8 = 0x0b;

/// Generic status codes carried in the first byte of every response
pub const NCI_STATUS_OK: u8 = 0x00;
pub const NCI_STATUS_REJECTED: u8 = 0x01;
pub const NCI_STATUS_RF_FRAME_CORRUPTED: u8 = 0x02;
pub const NCI_STATUS_FAILED: u8 = 0x03;
pub const NCI_STATUS_NOT_INITIALIZED: u8 = 0x04;
pub const NCI_STATUS_SYNTAX_ERROR: u8 = 0x05;
pub const NCI_STATUS_SEMANTIC_ERROR: u8 = 0x06;

/// RF_DISCOVER_NTF notification types
pub const NCI_DISCOVER_NTF_TYPE_LAST: u8 = 0x00;
pub const NCI_DISCOVER_NTF_TYPE_LAST_LIMIT: u8 = 0x01;
pub const NCI_DISCOVER_NTF_TYPE_MORE: u8 = 0x02;

/// CORE_RESET_CMD reset types
pub const NCI_RESET_KEEP_CONFIG: u8 = 0x00;
pub const NCI_RESET_RESET_CONFIG: u8 = 0x01;
