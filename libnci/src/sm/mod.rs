// libnci/src/sm/mod.rs

//! The RF state machine coordinator.
//!
//! Owns the current state, at most one active transition and the
//! outbound command sink, and routes every inbound notification and
//! response. Everything runs on the caller's thread: handlers may call
//! back into the machine (`enter_state`, `stall`, `start_transition`)
//! and those calls take effect immediately.

pub mod builder;
pub mod config;
pub mod observer;

pub use builder::StateMachineBuilder;
pub use config::Config;
pub use observer::{ActivationObserver, StallObserver, StateObserver};

use std::time::Instant;

use log::{debug, info, trace, warn};

use crate::protocol::{IntfActivationNtf, Notification};
use crate::state::{StateParam, StateTable};
use crate::transition::{Driver, Transition, TransitionDriver, TransitionId};
use crate::transport::CommandSink;
use crate::types::{CommandStatus, RfStateId, SmStatus, StallReason};
use crate::utils::Hex;
use crate::{Error, Result};

use observer::{Observers, restore};

/// Bookkeeping for the registered transition. Kept separately from the
/// boxed transition, which is moved out of its slot while one of its
/// callbacks runs.
#[derive(Debug, Clone, Copy)]
struct ActiveTransition {
    id: TransitionId,
    name: &'static str,
    dest: RfStateId,
}

pub struct StateMachine {
    config: Config,
    states: StateTable,
    current: RfStateId,
    stalled: Option<StallReason>,
    active: Option<ActiveTransition>,
    slot: Option<Box<dyn TransitionDriver>>,
    last_transition_id: TransitionId,
    sink: Box<dyn CommandSink>,
    observers: Observers,
}

impl StateMachine {
    /// A machine with the built-in states and default configuration.
    pub fn new(sink: Box<dyn CommandSink>) -> Self {
        Self::with_parts(sink, Config::default(), StateTable::new())
    }

    pub(crate) fn with_parts(sink: Box<dyn CommandSink>, config: Config, states: StateTable) -> Self {
        Self {
            current: config.initial_state,
            config,
            states,
            stalled: None,
            active: None,
            slot: None,
            last_transition_id: 0,
            sink,
            observers: Observers::default(),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The NFCC's believed RF state.
    pub fn current_state(&self) -> RfStateId {
        self.current
    }

    pub fn status(&self) -> SmStatus {
        match (self.stalled, self.active) {
            (Some(reason), _) => SmStatus::Stalled(reason),
            (None, Some(_)) => SmStatus::Transitioning,
            (None, None) => SmStatus::Ready,
        }
    }

    pub fn is_stalled(&self) -> bool {
        self.stalled.is_some()
    }

    /// Name of the active transition, if any.
    pub fn active_transition(&self) -> Option<&'static str> {
        self.active.map(|a| a.name)
    }

    pub(crate) fn is_transition_active(&self, id: TransitionId) -> bool {
        matches!(self.active, Some(a) if a.id == id)
    }

    /// (gid, oid) of the command the active transition is waiting for.
    pub fn pending_command(&self) -> Option<(u8, u8)> {
        self.slot
            .as_ref()
            .and_then(|d| d.pending())
            .map(|(gid, oid, _)| (gid, oid))
    }

    /// When `check_timeout` would next fire, if a command is pending and
    /// a timeout is configured.
    pub fn next_deadline(&self) -> Option<Instant> {
        let timeout = self.config.command_timeout?;
        let (_, _, sent_at) = self.slot.as_ref()?.pending()?;
        Some(sent_at + timeout)
    }

    /// Switch to `state` right away. Safe to call from any state or
    /// transition handler. An activation parameter is forwarded to the
    /// activation observers after the switch.
    pub fn enter_state(&mut self, state: RfStateId, param: Option<StateParam>) {
        let prev = self.current;
        if prev != state {
            self.states.get(prev).leave(self);
            self.current = state;
            debug!("{} -> {}", prev, state);
            self.states.get(state).enter(self, param.as_ref());
            self.notify_state_change(prev, state);
        }
        if let Some(StateParam::Activation(ntf)) = param {
            self.intf_activated(&ntf);
        }
    }

    /// Enter the stall status. The active transition (if any) is dropped
    /// together with its pending response handler; the current state is
    /// left alone. Only starting a new transition leaves the stall.
    pub fn stall(&mut self, reason: StallReason) {
        warn!("State machine stalled ({}) in {}", reason, self.current);
        self.stalled = Some(reason);
        if let Some(active) = self.active.take() {
            debug!("Dropping transition {}", active.name);
        }
        if let Some(driver) = self.slot.take() {
            self.release(driver);
        }
        self.notify_stall(reason);
    }

    /// Register and start `transition`.
    ///
    /// Refused with [`Error::TransitionBusy`] while another transition is
    /// active; the active one is left untouched. Starting a transition
    /// clears a stall. If the transition fails to start the machine
    /// stalls and [`Error::TransitionStartFailed`] is returned.
    pub fn start_transition<T: Transition>(&mut self, transition: T) -> Result<()> {
        if let Some(active) = self.active {
            warn!(
                "Refusing {} while {} is active",
                transition.name(),
                active.name
            );
            return Err(Error::TransitionBusy {
                active: active.name,
            });
        }
        if let Some(reason) = self.stalled.take() {
            info!("Leaving stall ({}) with {}", reason, transition.name());
        }

        self.last_transition_id += 1;
        let id = self.last_transition_id;
        let name = transition.name();
        let dest = transition.destination();
        debug!("Starting {} ({} -> {})", name, self.current, dest);
        self.active = Some(ActiveTransition { id, name, dest });

        let mut driver: Box<dyn TransitionDriver> = Box::new(Driver::new(id, transition));
        if driver.start(self) {
            self.settle(driver);
            Ok(())
        } else {
            self.release(driver);
            if self.is_transition_active(id) {
                self.stall(StallReason::Error);
            }
            Err(Error::TransitionStartFailed { name })
        }
    }

    /// Drop the active transition without stalling. Its pending response
    /// handler will never fire. Returns false if nothing was active.
    pub fn cancel_transition(&mut self) -> bool {
        let Some(active) = self.active.take() else {
            return false;
        };
        debug!("Cancelling {}", active.name);
        if let Some(driver) = self.slot.take() {
            self.release(driver);
        }
        true
    }

    /// Route one inbound notification: the active transition first, the
    /// current state if the transition declines. Notifications nobody
    /// recognizes are logged and dropped.
    pub fn dispatch_notification(&mut self, gid: u8, oid: u8, payload: &[u8]) {
        let ntf = Notification::new(gid, oid, payload);
        if self.config.log_payloads {
            trace!("< {} [{}]", ntf, Hex(payload));
        }

        if let Some(mut driver) = self.slot.take() {
            let handled = driver.handle_notification(self, &ntf).is_handled();
            self.settle(driver);
            if handled {
                return;
            }
        }

        if let Some(reason) = self.stalled {
            debug!("Stalled ({}), dropping {}", reason, ntf);
            return;
        }

        let state = self.states.get(self.current);
        if !state.handle_notification(self, &ntf).is_handled() {
            debug!("Unhandled {} in {}", ntf, state.id());
        }
    }

    /// Deliver a response frame to the transition waiting for it.
    /// Responses nobody waits for (including ones whose transition is
    /// gone) are dropped.
    pub fn handle_response(&mut self, gid: u8, oid: u8, payload: &[u8]) {
        if self.config.log_payloads {
            trace!("< rsp {:02x}/{:02x} [{}]", gid, oid, Hex(payload));
        }
        let Some(mut driver) = self.slot.take() else {
            debug!("Dropping response {:02x}/{:02x}, no transition", gid, oid);
            return;
        };
        if !driver.handle_response(self, gid, oid, CommandStatus::Success, payload) {
            debug!(
                "Dropping response {:02x}/{:02x}, not expected by {}",
                gid,
                oid,
                driver.name()
            );
        }
        self.settle(driver);
    }

    /// Report the pending command as timed out if it has been waiting
    /// longer than the configured timeout at `now`. The core never
    /// measures time on its own; the event loop decides when to ask.
    /// Returns true if a response handler ran.
    pub fn check_timeout(&mut self, now: Instant) -> bool {
        let Some(timeout) = self.config.command_timeout else {
            return false;
        };
        let Some(mut driver) = self.slot.take() else {
            return false;
        };
        let fired = match driver.pending() {
            Some((gid, oid, sent_at)) if now.saturating_duration_since(sent_at) >= timeout => {
                warn!(
                    "{}: command {:02x}/{:02x} timed out",
                    driver.name(),
                    gid,
                    oid
                );
                driver.handle_response(self, gid, oid, CommandStatus::Timeout, &[])
            }
            _ => false,
        };
        self.settle(driver);
        fired
    }

    /// Tell the activation observers about an activated interface. The
    /// machine is expected to be in the post-activation state already.
    pub fn intf_activated(&mut self, ntf: &IntfActivationNtf) {
        info!(
            "Interface activated in {}: {:?} {:?} {:?}",
            self.current, ntf.rf_intf, ntf.protocol, ntf.mode
        );
        let mut observers = std::mem::take(&mut self.observers.activation);
        for cb in observers.iter_mut() {
            cb(self, ntf);
        }
        restore(&mut self.observers.activation, observers);
    }

    pub fn add_activation_observer(
        &mut self,
        cb: impl FnMut(&mut StateMachine, &IntfActivationNtf) + 'static,
    ) {
        self.observers.activation.push(Box::new(cb));
    }

    pub fn add_stall_observer(&mut self, cb: impl FnMut(&mut StateMachine, StallReason) + 'static) {
        self.observers.stall.push(Box::new(cb));
    }

    pub fn add_state_observer(
        &mut self,
        cb: impl FnMut(&mut StateMachine, RfStateId, RfStateId) + 'static,
    ) {
        self.observers.state.push(Box::new(cb));
    }

    pub(crate) fn send(&mut self, gid: u8, oid: u8, payload: &[u8]) -> Result<()> {
        if self.config.log_payloads {
            trace!("> cmd {:02x}/{:02x} [{}]", gid, oid, Hex(payload));
        }
        self.sink.send_command(gid, oid, payload)
    }

    pub(crate) fn cancel_sink_command(&mut self, gid: u8, oid: u8) {
        self.sink.cancel_command(gid, oid);
    }

    /// Called by a transition through its context. The transition is
    /// released before the destination state is entered, so observers
    /// triggered by the state change may start a new one.
    pub(crate) fn finish_transition(&mut self, id: TransitionId, param: Option<StateParam>) {
        let Some(active) = self.active.filter(|a| a.id == id) else {
            return;
        };
        self.active = None;
        debug!("{} finished", active.name);
        self.enter_state(active.dest, param);
    }

    /// Put a driver back after one of its callbacks, or drop it if it is
    /// no longer the active transition.
    fn settle(&mut self, driver: Box<dyn TransitionDriver>) {
        if self.is_transition_active(driver.id()) && self.slot.is_none() {
            self.slot = Some(driver);
        } else {
            self.release(driver);
        }
    }

    fn release(&mut self, driver: Box<dyn TransitionDriver>) {
        if let Some((gid, oid, _)) = driver.pending() {
            debug!(
                "{} released with {:02x}/{:02x} pending",
                driver.name(),
                gid,
                oid
            );
            self.sink.cancel_command(gid, oid);
        }
    }

    fn notify_stall(&mut self, reason: StallReason) {
        let mut observers = std::mem::take(&mut self.observers.stall);
        for cb in observers.iter_mut() {
            cb(self, reason);
        }
        restore(&mut self.observers.stall, observers);
    }

    fn notify_state_change(&mut self, prev: RfStateId, next: RfStateId) {
        let mut observers = std::mem::take(&mut self.observers.state);
        for cb in observers.iter_mut() {
            cb(self, prev, next);
        }
        restore(&mut self.observers.state, observers);
    }
}
