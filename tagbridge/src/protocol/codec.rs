// tagbridge/src/protocol/codec.rs

use super::Frame;
use super::commands::Command;

/// Encode a Command into a full wire frame (marker/LEN/LCS/DCS/postamble).
pub fn encode_command_frame(cmd: &Command) -> Vec<u8> {
    Frame::encode(&cmd.encode())
}

/// Locate the response to `cmd` inside a raw inbound buffer and return its
/// payload with the D5/response-code pair stripped.
pub fn response_payload<'a>(cmd: &Command, raw: &'a [u8]) -> Option<&'a [u8]> {
    Frame::extract_payload(raw, cmd.response_pair())
}
