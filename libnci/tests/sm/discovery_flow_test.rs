#[path = "../common/mod.rs"]
mod common;

use std::cell::RefCell;
use std::rc::Rc;

use libnci::constants::*;
use libnci::test_support;
use libnci::{DeactivationType, RfStateId, SmStatus, StallReason};

fn path_recorder(sm: &mut libnci::StateMachine) -> Rc<RefCell<Vec<RfStateId>>> {
    let path = Rc::new(RefCell::new(Vec::new()));
    let p = path.clone();
    sm.add_state_observer(move |_, _, next| p.borrow_mut().push(next));
    path
}

#[test]
fn multiple_discoveries_then_poll_activation() {
    common::init_logging();
    let (mut sm, _sink) = test_support::machine_with_mock(RfStateId::Discovery);
    let path = path_recorder(&mut sm);

    sm.dispatch_notification(NCI_GID_RF, NCI_OID_RF_DISCOVER, &common::fixtures::discover_more());
    sm.dispatch_notification(NCI_GID_RF, NCI_OID_RF_DISCOVER, &common::fixtures::discover_more());
    sm.dispatch_notification(NCI_GID_RF, NCI_OID_RF_DISCOVER, &common::fixtures::discover_last());
    sm.dispatch_notification(
        NCI_GID_RF,
        NCI_OID_RF_INTF_ACTIVATED,
        &common::fixtures::poll_a_t2t(),
    );

    assert_eq!(
        *path.borrow(),
        vec![
            RfStateId::W4AllDiscoveries,
            RfStateId::W4HostSelect,
            RfStateId::PollActive
        ]
    );
    assert_eq!(sm.status(), SmStatus::Ready);
}

#[test]
fn listen_link_goes_to_sleep_and_back() {
    let (mut sm, _sink) = test_support::machine_with_mock(RfStateId::Discovery);
    let path = path_recorder(&mut sm);

    sm.dispatch_notification(
        NCI_GID_RF,
        NCI_OID_RF_INTF_ACTIVATED,
        &common::fixtures::listen_a_iso_dep(),
    );
    sm.dispatch_notification(NCI_GID_RF, NCI_OID_RF_DEACTIVATE, &common::fixtures::deactivate_sleep());
    sm.dispatch_notification(
        NCI_GID_RF,
        NCI_OID_RF_INTF_ACTIVATED,
        &common::fixtures::listen_a_iso_dep(),
    );
    sm.dispatch_notification(
        NCI_GID_RF,
        NCI_OID_RF_DEACTIVATE,
        &common::fixtures::deactivate_discovery_link_loss(),
    );

    assert_eq!(
        *path.borrow(),
        vec![
            RfStateId::ListenActive,
            RfStateId::ListenSleep,
            RfStateId::ListenActive,
            RfStateId::Discovery
        ]
    );
    assert!(!sm.is_stalled());
}

#[test]
fn poll_sleep_returns_to_host_select() {
    let (mut sm, _sink) = test_support::machine_with_mock(RfStateId::PollActive);
    sm.dispatch_notification(
        NCI_GID_RF,
        NCI_OID_RF_DEACTIVATE,
        &test_support::deactivate_payload(DeactivationType::Sleep),
    );
    assert_eq!(sm.current_state(), RfStateId::W4HostSelect);
}

#[test]
fn listen_activation_in_host_select_stalls() {
    let (mut sm, _sink) = test_support::machine_with_mock(RfStateId::W4HostSelect);
    sm.dispatch_notification(
        NCI_GID_RF,
        NCI_OID_RF_INTF_ACTIVATED,
        &test_support::listen_activation_payload(),
    );
    assert_eq!(sm.status(), SmStatus::Stalled(StallReason::Error));
    assert_eq!(sm.current_state(), RfStateId::W4HostSelect);
}

#[test]
fn activation_in_idle_stalls() {
    let (mut sm, _sink) = test_support::machine_with_mock(RfStateId::Idle);
    sm.dispatch_notification(
        NCI_GID_RF,
        NCI_OID_RF_INTF_ACTIVATED,
        &test_support::poll_activation_payload(),
    );
    assert_eq!(sm.status(), SmStatus::Stalled(StallReason::Error));
    assert_eq!(sm.current_state(), RfStateId::Idle);
}

#[test]
fn housekeeping_notifications_are_harmless_everywhere() {
    for state in RfStateId::ALL {
        let (mut sm, _sink) = test_support::machine_with_mock(state);
        sm.dispatch_notification(NCI_GID_CORE, NCI_OID_CORE_CONN_CREDITS, &[0x01, 0x00, 0x01]);
        sm.dispatch_notification(NCI_GID_CORE, NCI_OID_CORE_GENERIC_ERROR, &[0x0a]);
        sm.dispatch_notification(NCI_GID_RF, NCI_OID_RF_FIELD_INFO, &[0x01]);
        assert_eq!(sm.status(), SmStatus::Ready, "{}", state);
        assert_eq!(sm.current_state(), state);
    }
}
