use libnci::constants::*;
use libnci::protocol::{decode_intf_activated, decode_rf_deactivate, decode_rf_discover};
use libnci::test_support;
use libnci::RfStateId;
use proptest::prelude::*;

proptest! {
    #[test]
    fn decoders_never_panic(data in prop::collection::vec(any::<u8>(), 0..64)) {
        let _ = decode_intf_activated(&data);
        let _ = decode_rf_deactivate(&data);
        let _ = decode_rf_discover(&data);
    }

    #[test]
    fn arbitrary_rf_payloads_never_panic_the_machine(
        initial in prop::sample::select(RfStateId::ALL.to_vec()),
        oid in prop::sample::select(vec![
            NCI_OID_RF_DISCOVER,
            NCI_OID_RF_INTF_ACTIVATED,
            NCI_OID_RF_DEACTIVATE,
        ]),
        data in prop::collection::vec(any::<u8>(), 0..32),
    ) {
        let (mut sm, _sink) = test_support::machine_with_mock(initial);
        sm.dispatch_notification(NCI_GID_RF, oid, &data);
        // Either the payload moved the machine or it stalled it; never both
        // a state change and a stall.
        prop_assert!(sm.current_state() == initial || !sm.is_stalled());
    }
}
