#[path = "../common/mod.rs"]
mod common;

use std::time::Instant;

use libnci::constants::*;
use libnci::prelude::*;
use libnci::test_support;

/// Stall observer that resets the controller, as a host would.
fn reset_on_stall(sm: &mut StateMachine) {
    sm.add_stall_observer(|sm, reason| {
        if reason == StallReason::Error {
            let _ = sm.start_transition(ResetTransition::default());
        }
    });
}

#[test]
fn stall_observer_recovers_with_reset() {
    common::init_logging();
    let (mut sm, sink) = test_support::machine_with_mock(RfStateId::ListenSleep);
    reset_on_stall(&mut sm);

    sm.dispatch_notification(
        NCI_GID_RF,
        NCI_OID_RF_DEACTIVATE,
        &common::fixtures::deactivate_idle(),
    );
    assert_eq!(sm.status(), SmStatus::Transitioning);
    assert_eq!(sm.active_transition(), Some("RESET"));
    assert_eq!(sink.borrow().last().unwrap().oid, NCI_OID_CORE_RESET);

    sm.handle_response(NCI_GID_CORE, NCI_OID_CORE_RESET, &[NCI_STATUS_OK]);
    sm.handle_response(NCI_GID_CORE, NCI_OID_CORE_INIT, &[NCI_STATUS_OK]);
    assert_eq!(sm.current_state(), RfStateId::Idle);
    assert_eq!(sm.status(), SmStatus::Ready);
}

#[test]
fn stop_stall_is_left_alone() {
    let (mut sm, sink) = test_support::machine_with_mock(RfStateId::Discovery);
    reset_on_stall(&mut sm);
    sm.stall(StallReason::Stop);
    assert_eq!(sm.status(), SmStatus::Stalled(StallReason::Stop));
    assert!(sink.borrow().sent.is_empty());
}

#[test]
fn timeout_stall_triggers_reset() {
    let (mut sm, sink) = test_support::machine_with_mock(RfStateId::Idle);
    reset_on_stall(&mut sm);
    let configs = vec![DiscoveryConfig::new(RfTechMode::PassivePollA)];
    sm.start_transition(IdleToDiscoveryTransition::new(configs))
        .unwrap();

    let deadline = sm.next_deadline().unwrap();
    assert!(!sm.check_timeout(Instant::now().min(deadline)));
    assert!(sm.check_timeout(deadline));

    // The discover timed out and the observer started a reset
    assert_eq!(sm.active_transition(), Some("RESET"));
    assert_eq!(sm.current_state(), RfStateId::Idle);
    assert_eq!(sink.borrow().sent.len(), 2);
    assert_eq!(
        sink.borrow().cancelled,
        Vec::<(u8, u8)>::new(),
        "a timed out command is no longer pending"
    );
}

#[test]
fn repeated_failures_do_not_loop() {
    let (mut sm, sink) = test_support::machine_with_mock(RfStateId::Idle);
    reset_on_stall(&mut sm);
    sm.stall(StallReason::Error);
    // Reset rejected: stall again, the observer tries once more
    sm.handle_response(NCI_GID_CORE, NCI_OID_CORE_RESET, &[NCI_STATUS_REJECTED]);
    assert_eq!(sm.active_transition(), Some("RESET"));
    assert_eq!(sink.borrow().sent.len(), 2);
}
