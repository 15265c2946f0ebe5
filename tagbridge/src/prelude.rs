// tagbridge/src/prelude.rs

pub use crate::card::{BulkReadPolicy, DetectedCard, MemoryImage};
pub use crate::config::{ConfigSource, Settings};
pub use crate::delivery::{EventSink, TagEvent};
pub use crate::device::{Connected, Reader, Ready, SessionTiming};
pub use crate::monitor::{Monitor, MonitorConfig};
pub use crate::ndef::{NdefRecord, TlvScanOptions};
pub use crate::presence::{PresenceEvent, PresenceState};
pub use crate::protocol::Command;
pub use crate::{CardType, Error, PayloadMode, Result, Technology, Uid};

// Re-export small utilities for convenience
pub use crate::utils::{bytes_to_hex_spaced, bytes_to_hex_upper, ms, parse_hex};
