#[path = "../common/mod.rs"]
mod common;

use std::cell::Cell;
use std::rc::Rc;

use libnci::constants::*;
use libnci::prelude::*;
use libnci::test_support;

/// Sends CORE_INIT and counts how often its response handler runs.
struct CountingInit {
    calls: Rc<Cell<u32>>,
}

impl CountingInit {
    fn rsp(&mut self, cx: &mut TransitionContext<'_, Self>, _: CommandStatus, _: &[u8]) {
        self.calls.set(self.calls.get() + 1);
        cx.finish(None);
    }
}

impl Transition for CountingInit {
    fn name(&self) -> &'static str {
        "COUNTING_INIT"
    }

    fn destination(&self) -> RfStateId {
        RfStateId::Idle
    }

    fn start(&mut self, cx: &mut TransitionContext<'_, Self>) -> bool {
        cx.send_command(NCI_GID_CORE, NCI_OID_CORE_INIT, &[], Self::rsp)
            .is_ok()
    }
}

#[test]
fn late_response_after_cancel_is_discarded() {
    common::init_logging();
    let (mut sm, sink) = test_support::machine_with_mock(RfStateId::Init);
    let calls = Rc::new(Cell::new(0));
    sm.start_transition(CountingInit { calls: calls.clone() })
        .unwrap();
    assert!(sm.cancel_transition());

    sm.handle_response(NCI_GID_CORE, NCI_OID_CORE_INIT, &common::fixtures::rsp_ok());

    assert_eq!(calls.get(), 0);
    assert_eq!(sm.current_state(), RfStateId::Init);
    assert_eq!(sm.status(), SmStatus::Ready);
    assert_eq!(sink.borrow().cancelled, vec![(NCI_GID_CORE, NCI_OID_CORE_INIT)]);
}

#[test]
fn late_response_after_stall_is_discarded() {
    let (mut sm, _sink) = test_support::machine_with_mock(RfStateId::Init);
    let calls = Rc::new(Cell::new(0));
    sm.start_transition(CountingInit { calls: calls.clone() })
        .unwrap();
    sm.stall(StallReason::Stop);
    sm.handle_response(NCI_GID_CORE, NCI_OID_CORE_INIT, &common::fixtures::rsp_ok());
    assert_eq!(calls.get(), 0);
    assert_eq!(sm.status(), SmStatus::Stalled(StallReason::Stop));
}

#[test]
fn response_handler_fires_once() {
    let (mut sm, _sink) = test_support::machine_with_mock(RfStateId::Init);
    let calls = Rc::new(Cell::new(0));
    sm.start_transition(CountingInit { calls: calls.clone() })
        .unwrap();
    sm.handle_response(NCI_GID_CORE, NCI_OID_CORE_INIT, &[0x00]);
    sm.handle_response(NCI_GID_CORE, NCI_OID_CORE_INIT, &[0x00]);
    assert!(!sm.check_timeout(std::time::Instant::now() + ms(60_000)));
    assert_eq!(calls.get(), 1);
    assert_eq!(sm.current_state(), RfStateId::Idle);
}

#[test]
fn second_start_is_rejected_and_first_survives() {
    let (mut sm, sink) = test_support::machine_with_mock(RfStateId::Init);
    let first = Rc::new(Cell::new(0));
    let second = Rc::new(Cell::new(0));
    sm.start_transition(CountingInit { calls: first.clone() })
        .unwrap();

    let err = sm
        .start_transition(CountingInit {
            calls: second.clone(),
        })
        .unwrap_err();
    assert_eq!(
        err,
        Error::TransitionBusy {
            active: "COUNTING_INIT"
        }
    );
    assert_eq!(sink.borrow().sent.len(), 1);

    sm.handle_response(NCI_GID_CORE, NCI_OID_CORE_INIT, &[0x00]);
    assert_eq!((first.get(), second.get()), (1, 0));
}

#[test]
fn reset_refused_during_deactivation() {
    let (mut sm, _sink) = test_support::machine_with_mock(RfStateId::PollActive);
    sm.start_transition(DeactivateTransition::to_idle()).unwrap();
    assert!(sm.start_transition(ResetTransition::default()).is_err());
    assert_eq!(sm.active_transition(), Some("DEACTIVATE_TO_IDLE"));
}

#[test]
fn discovery_cycle_with_builtin_transitions() {
    let (mut sm, sink) = test_support::machine_with_mock(RfStateId::Init);

    sm.start_transition(ResetTransition::new(true)).unwrap();
    sm.handle_response(NCI_GID_CORE, NCI_OID_CORE_RESET, &[0x00, 0x11, 0x01]);
    sm.handle_response(NCI_GID_CORE, NCI_OID_CORE_INIT, &[0x00]);
    assert_eq!(sm.current_state(), RfStateId::Idle);

    let configs = vec![DiscoveryConfig::new(RfTechMode::PassiveListenA)];
    sm.start_transition(IdleToDiscoveryTransition::new(configs))
        .unwrap();
    sm.handle_response(NCI_GID_RF, NCI_OID_RF_DISCOVER, &[0x00]);
    assert_eq!(sm.current_state(), RfStateId::Discovery);

    sm.dispatch_notification(
        NCI_GID_RF,
        NCI_OID_RF_INTF_ACTIVATED,
        &test_support::listen_activation_payload(),
    );
    assert_eq!(sm.current_state(), RfStateId::ListenActive);

    sm.start_transition(DeactivateTransition::to_discovery())
        .unwrap();
    sm.handle_response(NCI_GID_RF, NCI_OID_RF_DEACTIVATE, &[0x00]);
    sm.dispatch_notification(
        NCI_GID_RF,
        NCI_OID_RF_DEACTIVATE,
        &test_support::deactivate_payload(DeactivationType::Discovery),
    );
    assert_eq!(sm.current_state(), RfStateId::Discovery);
    assert_eq!(sm.status(), SmStatus::Ready);

    let opcodes: Vec<(u8, u8)> = sink.borrow().sent.iter().map(|c| (c.gid, c.oid)).collect();
    assert_eq!(
        opcodes,
        vec![
            (NCI_GID_CORE, NCI_OID_CORE_RESET),
            (NCI_GID_CORE, NCI_OID_CORE_INIT),
            (NCI_GID_RF, NCI_OID_RF_DISCOVER),
            (NCI_GID_RF, NCI_OID_RF_DEACTIVATE),
        ]
    );
}
