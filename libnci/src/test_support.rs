//! Test support helpers intended for use by unit and integration tests.
//!
//! These helpers centralize common MockSink setup and notification
//! payload construction so tests across the crate and the tests/
//! directory share the same fixtures.
#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use crate::protocol::IntfActivationNtf;
use crate::sm::{Config, StateMachine};
use crate::state::StateTable;
use crate::transport::mock::MockSink;
use crate::types::{DeactivationType, RfInterface, RfProtocol, RfStateId, RfTechMode, StallReason};

/// A machine in `state` whose sink stays observable through the
/// returned handle.
#[doc(hidden)]
pub fn machine_with_mock(state: RfStateId) -> (StateMachine, Rc<RefCell<MockSink>>) {
    machine_with_config(Config::default().with_initial_state(state))
}

#[doc(hidden)]
pub fn machine_with_config(config: Config) -> (StateMachine, Rc<RefCell<MockSink>>) {
    let sink = Rc::new(RefCell::new(MockSink::new()));
    let sm = StateMachine::with_parts(Box::new(sink.clone()), config, StateTable::new());
    (sm, sink)
}

/// Record every stall reason reported to stall observers.
#[doc(hidden)]
pub fn record_stalls(sm: &mut StateMachine) -> Rc<RefCell<Vec<StallReason>>> {
    let log = Rc::new(RefCell::new(Vec::new()));
    let l = log.clone();
    sm.add_stall_observer(move |_, reason| l.borrow_mut().push(reason));
    log
}

/// Record each activation together with the state the machine was in
/// when the observer ran.
#[doc(hidden)]
pub fn record_activations(
    sm: &mut StateMachine,
) -> Rc<RefCell<Vec<(RfStateId, IntfActivationNtf)>>> {
    let log = Rc::new(RefCell::new(Vec::new()));
    let l = log.clone();
    sm.add_activation_observer(move |sm, ntf| l.borrow_mut().push((sm.current_state(), ntf.clone())));
    log
}

/// RF_INTF_ACTIVATED_NTF payload with empty mode and activation
/// parameters.
#[doc(hidden)]
pub fn intf_activated_payload(intf: RfInterface, protocol: RfProtocol, mode: RfTechMode) -> Vec<u8> {
    let intf = match intf {
        RfInterface::NfceeDirect => 0x00,
        RfInterface::Frame => 0x01,
        RfInterface::IsoDep => 0x02,
        RfInterface::NfcDep => 0x03,
        RfInterface::Other(v) => v,
    };
    let protocol = match protocol {
        RfProtocol::Undetermined => 0x00,
        RfProtocol::T1t => 0x01,
        RfProtocol::T2t => 0x02,
        RfProtocol::T3t => 0x03,
        RfProtocol::IsoDep => 0x04,
        RfProtocol::NfcDep => 0x05,
        RfProtocol::T5t => 0x06,
        RfProtocol::Other(v) => v,
    };
    vec![
        0x01,
        intf,
        protocol,
        mode.as_u8(),
        0xff,
        0x01,
        0x00,
        mode.as_u8(),
        0x00,
        0x00,
        0x00,
    ]
}

/// ISO-DEP activation in passive listen A.
#[doc(hidden)]
pub fn listen_activation_payload() -> Vec<u8> {
    intf_activated_payload(RfInterface::IsoDep, RfProtocol::IsoDep, RfTechMode::PassiveListenA)
}

/// Frame interface T2T activation in passive poll A.
#[doc(hidden)]
pub fn poll_activation_payload() -> Vec<u8> {
    intf_activated_payload(RfInterface::Frame, RfProtocol::T2t, RfTechMode::PassivePollA)
}

/// RF_DEACTIVATE_NTF payload with reason DH_REQUEST.
#[doc(hidden)]
pub fn deactivate_payload(deactivation_type: DeactivationType) -> Vec<u8> {
    vec![deactivation_type as u8, 0x00]
}
