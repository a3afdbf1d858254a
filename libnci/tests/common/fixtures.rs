// fixtures.rs — commonly used notification payloads, written as hex

/// Decode a spaced hex string. Fixtures are constants, a typo is a test bug.
pub fn bytes(s: &str) -> Vec<u8> {
    hex::decode(s.replace(' ', "")).expect("fixture hex")
}

/// RF_INTF_ACTIVATED_NTF: ISO-DEP interface, passive listen A, RATS param 0x80
pub fn listen_a_iso_dep() -> Vec<u8> {
    bytes("01 02 04 80 ff 01 00 80 00 00 01 80")
}

/// RF_INTF_ACTIVATED_NTF: frame interface, T2T, passive poll A, 7 byte NFCID1
pub fn poll_a_t2t() -> Vec<u8> {
    bytes("01 01 02 00 ff 01 0c 44 00 07 04 9b fb 4a eb 2b 80 01 00 00 00 00 00")
}

/// RF_INTF_ACTIVATED_NTF: NFC-DEP interface, passive listen F, no NFCID2
pub fn listen_f_nfc_dep() -> Vec<u8> {
    bytes("02 03 05 82 ff 01 00 82 00 00 03 02 d4 00")
}

/// RF_DISCOVER_NTF: ISO-DEP in poll A, more to come
pub fn discover_more() -> Vec<u8> {
    bytes("01 04 00 00 02")
}

/// RF_DISCOVER_NTF: T2T in poll A, last one
pub fn discover_last() -> Vec<u8> {
    bytes("02 02 00 00 00")
}

/// RF_DEACTIVATE_NTF: discovery, link loss
pub fn deactivate_discovery_link_loss() -> Vec<u8> {
    bytes("03 02")
}

/// RF_DEACTIVATE_NTF: idle, DH request
pub fn deactivate_idle() -> Vec<u8> {
    bytes("00 00")
}

/// RF_DEACTIVATE_NTF: sleep, endpoint request
pub fn deactivate_sleep() -> Vec<u8> {
    bytes("01 01")
}

/// Generic OK response
pub fn rsp_ok() -> Vec<u8> {
    bytes("00")
}
