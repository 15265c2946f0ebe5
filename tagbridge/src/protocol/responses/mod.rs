// tagbridge/src/protocol/responses/mod.rs
//
// Per-command response decoders. Each takes the payload returned by
// `Frame::extract_payload` (the D5/response-code pair already stripped).

/// InListPassiveTarget (D5 4B)
pub mod detection;
/// InDataExchange (D5 41)
pub mod exchange;
/// GetFirmwareVersion (D5 03)
pub mod firmware;

pub use detection::{decode_detection, parse_detection};
pub use exchange::decode_data_exchange;
pub use firmware::{FirmwareVersion, decode_firmware_version};
