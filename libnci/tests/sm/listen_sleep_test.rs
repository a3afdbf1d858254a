#[path = "../common/mod.rs"]
mod common;

use libnci::constants::*;
use libnci::protocol::ActivationParam;
use libnci::test_support;
use libnci::{RfStateId, RfTechMode, SmStatus, StallReason};

#[test]
fn listen_activation_wakes_to_listen_active() {
    common::init_logging();
    let (mut sm, _sink) = test_support::machine_with_mock(RfStateId::ListenSleep);
    let activations = test_support::record_activations(&mut sm);
    let stalls = test_support::record_stalls(&mut sm);

    sm.dispatch_notification(
        NCI_GID_RF,
        NCI_OID_RF_INTF_ACTIVATED,
        &common::fixtures::listen_a_iso_dep(),
    );

    assert_eq!(sm.current_state(), RfStateId::ListenActive);
    assert_eq!(sm.status(), SmStatus::Ready);
    assert!(stalls.borrow().is_empty());

    let activations = activations.borrow();
    assert_eq!(activations.len(), 1);
    let (seen_in, ntf) = &activations[0];
    // The observer already runs in the post-activation state
    assert_eq!(*seen_in, RfStateId::ListenActive);
    assert_eq!(ntf.mode, RfTechMode::PassiveListenA);
    assert_eq!(
        ntf.activation_param,
        Some(ActivationParam::IsoDepListenA { rats_param: 0x80 })
    );
}

#[test]
fn observer_asserts_state_from_inside_callback() {
    let (mut sm, _sink) = test_support::machine_with_mock(RfStateId::ListenSleep);
    sm.add_activation_observer(|sm, _| {
        assert_eq!(sm.current_state(), RfStateId::ListenActive);
    });
    for _ in 0..3 {
        sm.enter_state(RfStateId::ListenSleep, None);
        sm.dispatch_notification(
            NCI_GID_RF,
            NCI_OID_RF_INTF_ACTIVATED,
            &common::fixtures::listen_f_nfc_dep(),
        );
        assert_eq!(sm.current_state(), RfStateId::ListenActive);
    }
}

#[test]
fn observer_may_move_the_machine_again() {
    let (mut sm, _sink) = test_support::machine_with_mock(RfStateId::ListenSleep);
    sm.add_activation_observer(|sm, _| sm.enter_state(RfStateId::ListenSleep, None));
    sm.dispatch_notification(
        NCI_GID_RF,
        NCI_OID_RF_INTF_ACTIVATED,
        &common::fixtures::listen_a_iso_dep(),
    );
    assert_eq!(sm.current_state(), RfStateId::ListenSleep);
    assert!(!sm.is_stalled());
}

#[test]
fn poll_activation_stalls() {
    let (mut sm, _sink) = test_support::machine_with_mock(RfStateId::ListenSleep);
    let activations = test_support::record_activations(&mut sm);
    let stalls = test_support::record_stalls(&mut sm);

    sm.dispatch_notification(
        NCI_GID_RF,
        NCI_OID_RF_INTF_ACTIVATED,
        &common::fixtures::poll_a_t2t(),
    );

    assert_eq!(*stalls.borrow(), vec![StallReason::Error]);
    assert_eq!(sm.current_state(), RfStateId::ListenSleep);
    assert!(activations.borrow().is_empty());
}

#[test]
fn deactivate_to_discovery_returns_to_discovery() {
    let (mut sm, _sink) = test_support::machine_with_mock(RfStateId::ListenSleep);
    let stalls = test_support::record_stalls(&mut sm);
    sm.dispatch_notification(
        NCI_GID_RF,
        NCI_OID_RF_DEACTIVATE,
        &common::fixtures::deactivate_discovery_link_loss(),
    );
    assert_eq!(sm.current_state(), RfStateId::Discovery);
    assert!(stalls.borrow().is_empty());
}

#[test]
fn deactivate_to_idle_stalls() {
    let (mut sm, _sink) = test_support::machine_with_mock(RfStateId::ListenSleep);
    let stalls = test_support::record_stalls(&mut sm);
    sm.dispatch_notification(
        NCI_GID_RF,
        NCI_OID_RF_DEACTIVATE,
        &common::fixtures::deactivate_idle(),
    );
    assert_eq!(*stalls.borrow(), vec![StallReason::Error]);
    assert_eq!(sm.current_state(), RfStateId::ListenSleep);
}

#[test]
fn deactivate_to_sleep_stalls() {
    let (mut sm, _sink) = test_support::machine_with_mock(RfStateId::ListenSleep);
    sm.dispatch_notification(
        NCI_GID_RF,
        NCI_OID_RF_DEACTIVATE,
        &common::fixtures::deactivate_sleep(),
    );
    assert_eq!(sm.status(), SmStatus::Stalled(StallReason::Error));
    assert_eq!(sm.current_state(), RfStateId::ListenSleep);
}

#[test]
fn malformed_payloads_stall() {
    for (oid, payload) in [
        (NCI_OID_RF_INTF_ACTIVATED, vec![0x01, 0x02, 0x04]),
        (NCI_OID_RF_DEACTIVATE, vec![0x03]),
        (NCI_OID_RF_DEACTIVATE, vec![0x07, 0x00]),
    ] {
        let (mut sm, _sink) = test_support::machine_with_mock(RfStateId::ListenSleep);
        sm.dispatch_notification(NCI_GID_RF, oid, &payload);
        assert_eq!(
            sm.status(),
            SmStatus::Stalled(StallReason::Error),
            "payload {:02x?}",
            payload
        );
        assert_eq!(sm.current_state(), RfStateId::ListenSleep);
    }
}

#[test]
fn unknown_notification_is_dropped() {
    let (mut sm, _sink) = test_support::machine_with_mock(RfStateId::ListenSleep);
    sm.dispatch_notification(NCI_GID_PROPRIETARY, 0x3a, &[0xde, 0xad]);
    assert_eq!(sm.status(), SmStatus::Ready);
    assert_eq!(sm.current_state(), RfStateId::ListenSleep);
}
