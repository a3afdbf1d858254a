// libnci/src/transition/mod.rs

//! Transitions: one-shot procedures that move the NFCC from the current
//! RF state to a destination state by exchanging commands.
//!
//! A transition never holds a reference to the state machine. Every
//! callback receives a [`TransitionContext`] that borrows the machine
//! for the duration of that call and carries the transition's single
//! pending command slot. The slot is stored next to the transition in
//! the machine's active-transition slot, so dropping the transition
//! (finish, stall, cancel) drops the pending response handler with it
//! and a late response finds nothing to call.

pub mod deactivate;
pub mod idle_to_discovery;
pub mod reset;

pub use deactivate::DeactivateTransition;
pub use idle_to_discovery::IdleToDiscoveryTransition;
pub use reset::ResetTransition;

use std::time::Instant;

use log::{debug, warn};

use crate::protocol::{Command, Notification, parser};
use crate::sm::StateMachine;
use crate::state::StateParam;
use crate::types::{CommandStatus, DeactivationType, Disposition, RfStateId, StallReason};
use crate::utils::Hex;
use crate::{Error, Result};

/// Identifies one registration of a transition with the machine.
pub type TransitionId = u64;

/// Response callback registered with [`TransitionContext::send_command`].
/// Fires at most once, and only while the transition is still active.
pub type ResponseHandler<T> = fn(&mut T, &mut TransitionContext<'_, T>, CommandStatus, &[u8]);

/// A procedure driving the NFCC towards [`Transition::destination`].
///
/// Implementations override only what they need. `handle_notification`
/// declines by default so the current state still sees everything the
/// transition does not care about.
pub trait Transition: Sized + 'static {
    /// Name used in diagnostics.
    fn name(&self) -> &'static str;

    /// State the machine enters on [`TransitionContext::finish`].
    fn destination(&self) -> RfStateId;

    /// Called once, right after the transition became active. Returning
    /// `false` stalls the machine with [`StallReason::Error`].
    fn start(&mut self, cx: &mut TransitionContext<'_, Self>) -> bool;

    /// Offered every notification while active, before the current state.
    fn handle_notification(
        &mut self,
        _cx: &mut TransitionContext<'_, Self>,
        _ntf: &Notification<'_>,
    ) -> Disposition {
        Disposition::Declined
    }
}

/// Correlation record for the one outstanding command of a transition.
pub(crate) struct PendingCommand<T> {
    gid: u8,
    oid: u8,
    sent_at: Instant,
    handler: ResponseHandler<T>,
}

/// Handle a transition uses to talk back to the machine.
pub struct TransitionContext<'a, T> {
    sm: &'a mut StateMachine,
    id: TransitionId,
    name: &'static str,
    dest: RfStateId,
    pending: &'a mut Option<PendingCommand<T>>,
}

impl<T> TransitionContext<'_, T> {
    /// Read-only view of the machine.
    pub fn sm(&self) -> &StateMachine {
        &*self.sm
    }

    pub fn current_state(&self) -> RfStateId {
        self.sm.current_state()
    }

    pub fn destination(&self) -> RfStateId {
        self.dest
    }

    /// False once this transition has finished, stalled or been
    /// cancelled, even while its own callback is still running.
    pub fn is_active(&self) -> bool {
        self.sm.is_transition_active(self.id)
    }

    /// (gid, oid) of the command awaiting a response, if any.
    pub fn pending_command(&self) -> Option<(u8, u8)> {
        self.pending.as_ref().map(|p| (p.gid, p.oid))
    }

    /// Send a command and register `handler` for its response.
    ///
    /// Only one command may be outstanding per transition; a second one
    /// is refused with [`Error::CommandPending`]. Nothing is registered
    /// when the sink refuses the command.
    pub fn send_command(
        &mut self,
        gid: u8,
        oid: u8,
        payload: &[u8],
        handler: ResponseHandler<T>,
    ) -> Result<()> {
        if !self.is_active() {
            return Err(Error::TransitionInactive { name: self.name });
        }
        if let Some(p) = self.pending.as_ref() {
            return Err(Error::CommandPending {
                gid: p.gid,
                oid: p.oid,
            });
        }
        self.sm.send(gid, oid, payload)?;
        *self.pending = Some(PendingCommand {
            gid,
            oid,
            sent_at: Instant::now(),
            handler,
        });
        Ok(())
    }

    /// [`send_command`](Self::send_command) for one of the built-in commands.
    pub fn send(&mut self, cmd: &Command, handler: ResponseHandler<T>) -> Result<()> {
        let payload = cmd.encode()?;
        self.send_command(cmd.gid(), cmd.oid(), &payload, handler)
    }

    /// RF_DEACTIVATE_CMD (Idle), response goes to `handler`.
    pub fn deactivate_to_idle(&mut self, handler: ResponseHandler<T>) -> Result<()> {
        self.send(&Command::RfDeactivate(DeactivationType::Idle), handler)
    }

    /// RF_DEACTIVATE_CMD (Discovery), response goes to `handler`.
    pub fn deactivate_to_discovery(&mut self, handler: ResponseHandler<T>) -> Result<()> {
        self.send(&Command::RfDeactivate(DeactivationType::Discovery), handler)
    }

    /// Move the machine to an intermediate `state` while the transition
    /// stays active, e.g. when the NFCC reports a state change on its own
    /// before answering. Ignored once the transition is inactive.
    pub fn enter_state(&mut self, state: RfStateId, param: Option<StateParam>) {
        if self.is_active() {
            self.sm.enter_state(state, param);
        }
    }

    /// Enter the destination state and release the transition. No
    /// further callback of this transition runs afterwards.
    pub fn finish(&mut self, param: Option<StateParam>) {
        if !self.is_active() {
            warn!("{} finished while inactive", self.name);
            return;
        }
        if let Some(p) = self.pending.take() {
            debug!("{} finished with {:02x}/{:02x} pending", self.name, p.gid, p.oid);
            self.sm.cancel_sink_command(p.gid, p.oid);
        }
        self.sm.finish_transition(self.id, param);
    }

    /// Abort the transition and stall the machine.
    pub fn stall(&mut self, reason: StallReason) {
        if self.is_active() {
            self.sm.stall(reason);
        }
    }

    /// Shorthand for `stall(StallReason::Error)`.
    pub fn error(&mut self) {
        self.stall(StallReason::Error);
    }

    /// True for a received response carrying NCI_STATUS_OK. A timeout or
    /// any other status stalls the machine and returns false.
    pub fn check_response(&mut self, status: CommandStatus, payload: &[u8]) -> bool {
        match status {
            CommandStatus::Success if parser::is_status_ok(payload) => true,
            CommandStatus::Success => {
                warn!("{}: response status {}", self.name, Hex(payload));
                self.error();
                false
            }
            CommandStatus::Timeout => {
                warn!("{}: no response", self.name);
                self.error();
                false
            }
        }
    }
}

/// Object-safe face of a boxed transition, as stored by the machine.
pub(crate) trait TransitionDriver {
    fn id(&self) -> TransitionId;
    fn name(&self) -> &'static str;
    fn start(&mut self, sm: &mut StateMachine) -> bool;
    fn handle_notification(&mut self, sm: &mut StateMachine, ntf: &Notification<'_>)
    -> Disposition;
    /// Returns false if nothing was waiting for (gid, oid).
    fn handle_response(
        &mut self,
        sm: &mut StateMachine,
        gid: u8,
        oid: u8,
        status: CommandStatus,
        payload: &[u8],
    ) -> bool;
    fn pending(&self) -> Option<(u8, u8, Instant)>;
}

pub(crate) struct Driver<T: Transition> {
    id: TransitionId,
    name: &'static str,
    dest: RfStateId,
    inner: T,
    pending: Option<PendingCommand<T>>,
}

impl<T: Transition> Driver<T> {
    pub(crate) fn new(id: TransitionId, inner: T) -> Self {
        Self {
            id,
            name: inner.name(),
            dest: inner.destination(),
            inner,
            pending: None,
        }
    }
}

impl<T: Transition> TransitionDriver for Driver<T> {
    fn id(&self) -> TransitionId {
        self.id
    }

    fn name(&self) -> &'static str {
        self.name
    }

    fn start(&mut self, sm: &mut StateMachine) -> bool {
        let Driver {
            id,
            name,
            dest,
            inner,
            pending,
        } = self;
        let mut cx = TransitionContext {
            sm,
            id: *id,
            name: *name,
            dest: *dest,
            pending,
        };
        inner.start(&mut cx)
    }

    fn handle_notification(
        &mut self,
        sm: &mut StateMachine,
        ntf: &Notification<'_>,
    ) -> Disposition {
        let Driver {
            id,
            name,
            dest,
            inner,
            pending,
        } = self;
        let mut cx = TransitionContext {
            sm,
            id: *id,
            name: *name,
            dest: *dest,
            pending,
        };
        inner.handle_notification(&mut cx, ntf)
    }

    fn handle_response(
        &mut self,
        sm: &mut StateMachine,
        gid: u8,
        oid: u8,
        status: CommandStatus,
        payload: &[u8],
    ) -> bool {
        let matches = matches!(&self.pending, Some(p) if p.gid == gid && p.oid == oid);
        if !matches {
            return false;
        }
        let Some(p) = self.pending.take() else {
            return false;
        };
        let Driver {
            id,
            name,
            dest,
            inner,
            pending,
        } = self;
        let mut cx = TransitionContext {
            sm,
            id: *id,
            name: *name,
            dest: *dest,
            pending,
        };
        (p.handler)(inner, &mut cx, status, payload);
        true
    }

    fn pending(&self) -> Option<(u8, u8, Instant)> {
        self.pending.as_ref().map(|p| (p.gid, p.oid, p.sent_at))
    }
}
