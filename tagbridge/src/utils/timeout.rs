//! Timeout helpers used across the crate.
//!
//! Keep these helpers minimal: they centralize the default transport read
//! timeout and provide a small conversion helper so session timings can be
//! expressed in milliseconds.

use std::time::Duration;

/// Default read timeout in milliseconds used by transports when a caller
/// doesn't provide an explicit timeout.
pub const DEFAULT_READ_TIMEOUT_MS: u64 = 1000;

/// Convert milliseconds to Duration.
pub fn ms(ms: u64) -> Duration {
    Duration::from_millis(ms)
}

/// Sleep for `millis`, skipping the syscall entirely for zero. Tests run
/// sessions with all-zero timings.
pub fn pause(millis: u64) {
    if millis > 0 {
        std::thread::sleep(ms(millis));
    }
}

/// Convert a timeout expressed in (possibly fractional) seconds, as found in
/// config files, to whole milliseconds. Negative or NaN values become 0.
pub fn secs_f64_to_ms(secs: f64) -> u64 {
    if secs.is_finite() && secs > 0.0 {
        (secs * 1000.0).round() as u64
    } else {
        0
    }
}
