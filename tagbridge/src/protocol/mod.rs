// tagbridge/src/protocol/mod.rs

/// LCS / DCS
pub mod checksum;
/// Command -> frame bytes
pub mod codec;
/// Command enum and per-command encoders
pub mod commands;
/// Frame envelope and response extraction
pub mod frame;
/// Bounds-checked slice helpers
pub mod parser;
/// Response decoders
pub mod responses;

pub use checksum::{dcs, lcs};
pub use commands::*;
pub use frame::{Frame, build_frame, extract_response_payload};
pub use responses::*;
