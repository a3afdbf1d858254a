// libnci/src/transport/mock.rs

use crate::transport::traits::CommandSink;
use crate::{Error, Result};

/// A command as recorded by [`MockSink`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentCommand {
    pub gid: u8,
    pub oid: u8,
    pub payload: Vec<u8>,
}

/// Mock sink for unit tests. It records sent commands and can be told to
/// fail the next N sends.
#[derive(Debug, Default)]
pub struct MockSink {
    pub sent: Vec<SentCommand>,
    /// Testing hook: number of send_command calls that should fail
    pub failures: usize,
    /// Record cancel_command calls: (gid, oid)
    pub cancelled: Vec<(u8, u8)>,
}

impl MockSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set how many subsequent send_command calls should fail (for tests).
    pub fn set_failures(&mut self, n: usize) {
        self.failures = n;
    }

    pub fn last(&self) -> Option<&SentCommand> {
        self.sent.last()
    }

    pub fn pop_sent(&mut self) -> Option<SentCommand> {
        self.sent.pop()
    }
}

impl CommandSink for MockSink {
    fn send_command(&mut self, gid: u8, oid: u8, payload: &[u8]) -> Result<()> {
        if self.failures > 0 {
            self.failures -= 1;
            return Err(Error::Transport("mock send failure".to_string()));
        }
        self.sent.push(SentCommand {
            gid,
            oid,
            payload: payload.to_vec(),
        });
        Ok(())
    }

    fn cancel_command(&mut self, gid: u8, oid: u8) {
        self.cancelled.push((gid, oid));
    }
}
