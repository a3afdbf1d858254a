// libnci/src/state/basic.rs

use crate::state::State;
use crate::types::RfStateId;

/// A state with nothing but the default notification handling. Used for
/// INIT and RFST_IDLE, where the NFCC sends nothing that moves the
/// machine on its own.
#[derive(Debug, Clone, Copy)]
pub struct BasicState {
    id: RfStateId,
}

impl BasicState {
    pub fn new(id: RfStateId) -> Self {
        Self { id }
    }
}

impl State for BasicState {
    fn id(&self) -> RfStateId {
        self.id
    }
}
