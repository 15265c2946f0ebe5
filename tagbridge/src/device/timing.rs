// tagbridge/src/device/timing.rs

/// Settle delays applied between writing a command and draining the reply.
/// The PN532 answers slowly right after wakeup; later commands are quick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionTiming {
    /// After the HSU wakeup preamble
    pub wakeup_settle_ms: u64,
    /// After GetFirmwareVersion
    pub firmware_settle_ms: u64,
    /// After SAMConfiguration
    pub config_settle_ms: u64,
    /// After InListPassiveTarget
    pub detect_settle_ms: u64,
    /// After each READ
    pub read_settle_ms: u64,
    /// Upper bound on waiting for the first response byte
    pub response_timeout_ms: u64,
}

impl Default for SessionTiming {
    fn default() -> Self {
        Self {
            wakeup_settle_ms: 200,
            firmware_settle_ms: 500,
            config_settle_ms: 200,
            detect_settle_ms: 100,
            read_settle_ms: 100,
            response_timeout_ms: crate::utils::DEFAULT_READ_TIMEOUT_MS,
        }
    }
}

impl SessionTiming {
    /// No delays at all. Used with MockTransport.
    pub fn immediate() -> Self {
        Self {
            wakeup_settle_ms: 0,
            firmware_settle_ms: 0,
            config_settle_ms: 0,
            detect_settle_ms: 0,
            read_settle_ms: 0,
            response_timeout_ms: 0,
        }
    }

    /// Same delays, different response timeout.
    pub fn with_response_timeout(mut self, timeout_ms: u64) -> Self {
        self.response_timeout_ms = timeout_ms;
        self
    }
}
