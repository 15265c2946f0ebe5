// tagbridge/src/transport/mock.rs

use std::collections::VecDeque;

use crate::transport::traits::Transport;
use crate::{Error, Result};

/// Mock transport for unit tests. It records sent frames and returns queued
/// responses. An empty vector queued as a response simulates a read that
/// timed out.
#[derive(Debug, Default)]
pub struct MockTransport {
    /// Frames written so far
    pub sent: Vec<Vec<u8>>,
    /// Replies handed out by `receive`, oldest first
    pub responses: VecDeque<Vec<u8>>,
    /// Testing hook: number of subsequent send calls that fail with an I/O error
    pub send_failures: usize,
    /// Number of clear_input calls observed
    pub clears: usize,
}

impl MockTransport {
    /// Empty mock
    pub fn new() -> Self {
        Self::default()
    }

    /// Set how many subsequent send calls should fail (for tests).
    pub fn set_send_failures(&mut self, n: usize) {
        self.send_failures = n;
    }

    /// Queue a reply.
    pub fn push_response(&mut self, resp: Vec<u8>) {
        self.responses.push_back(resp);
    }

    /// Queue a read that yields nothing.
    pub fn push_silence(&mut self) {
        self.responses.push_back(Vec::new());
    }

    /// Most recently sent frame
    pub fn pop_sent(&mut self) -> Option<Vec<u8>> {
        self.sent.pop()
    }
}

impl Transport for MockTransport {
    fn send(&mut self, data: &[u8]) -> Result<()> {
        if self.send_failures > 0 {
            self.send_failures -= 1;
            return Err(Error::Io(std::io::Error::new(
                std::io::ErrorKind::BrokenPipe,
                "mock transport unplugged",
            )));
        }
        self.sent.push(data.to_vec());
        Ok(())
    }

    fn receive(&mut self, _timeout_ms: u64) -> Result<Vec<u8>> {
        match self.responses.pop_front() {
            Some(resp) if !resp.is_empty() => Ok(resp),
            _ => Err(Error::Timeout),
        }
    }

    fn clear_input(&mut self) -> Result<()> {
        // Queued responses stand for bytes the reader has not sent yet, so
        // they are preserved.
        self.clears += 1;
        Ok(())
    }
}
