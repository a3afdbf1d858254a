// libnci/src/transport/traits.rs

use std::cell::RefCell;
use std::rc::Rc;

use crate::Result;

/// Outbound half of the packet layer. The state machine hands it one
/// control command at a time; responses come back later through
/// `StateMachine::handle_response` on the same event loop.
pub trait CommandSink {
    /// Queue a control command for transmission. Must not block.
    fn send_command(&mut self, gid: u8, oid: u8, payload: &[u8]) -> Result<()>;

    /// The owner of an outstanding command went away. Implementations
    /// may drop the command if it has not been written yet. Default is a
    /// no-op; late responses are discarded by the state machine anyway.
    fn cancel_command(&mut self, _gid: u8, _oid: u8) {}
}

/// Lets tests keep a handle on a sink after the state machine owns it.
impl<T: CommandSink + ?Sized> CommandSink for Rc<RefCell<T>> {
    fn send_command(&mut self, gid: u8, oid: u8, payload: &[u8]) -> Result<()> {
        self.borrow_mut().send_command(gid, oid, payload)
    }

    fn cancel_command(&mut self, gid: u8, oid: u8) {
        self.borrow_mut().cancel_command(gid, oid)
    }
}
