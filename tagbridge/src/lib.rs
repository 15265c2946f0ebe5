// tagbridge/src/lib.rs

//! tagbridge
//!
//! PN532 (HSU serial) tag reader: frame codec, reader session, Type 2 tag
//! memory and NDEF decoding, and a poll loop that reports tag presentations
//! to Home Assistant.
#![warn(missing_docs)]

/// Detected targets and Type 2 tag memory reads
pub mod card;
pub mod config;
pub mod constants;
/// Event sinks (Home Assistant)
pub mod delivery;
/// Reader session with compile-time handshake state
pub mod device;
/// 共通エラー型
pub mod error;
pub mod monitor;
pub mod ndef;
/// Commonly used types
pub mod prelude;
/// Tag presence transitions between polls
pub mod presence;
/// PN532 frame codec, command encoders and response decoders
pub mod protocol;
pub mod test_support;
/// Byte transports: serial port and mock
pub mod transport;
/// UID newtype, card type table and payload mode
pub mod types;
pub mod utils;

// Re-export common types at crate root so `crate::Error`, `crate::Result`,
// and the newtypes in `types` are available for consumers and for
// convenient `prelude` re-exports.
pub use crate::error::*;
pub use crate::types::*;

pub use prelude::*;
