// tagbridge/src/transport/traits.rs

use crate::Result;

/// Transport trait abstracts I/O away from protocol/session logic.
pub trait Transport {
    /// Send raw bytes to the reader
    fn send(&mut self, data: &[u8]) -> Result<()>;

    /// Receive whatever the reader has sent, waiting at most `timeout_ms`
    /// for the first byte. Returns `Error::Timeout` when nothing arrived;
    /// any other error is an I/O fault.
    fn receive(&mut self, timeout_ms: u64) -> Result<Vec<u8>>;

    /// Discard stale inbound bytes before issuing a command. Default is a
    /// no-op for transports without an input buffer.
    fn clear_input(&mut self) -> Result<()> {
        Ok(())
    }
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn send(&mut self, data: &[u8]) -> Result<()> {
        (**self).send(data)
    }

    fn receive(&mut self, timeout_ms: u64) -> Result<Vec<u8>> {
        (**self).receive(timeout_ms)
    }

    fn clear_input(&mut self) -> Result<()> {
        (**self).clear_input()
    }
}
