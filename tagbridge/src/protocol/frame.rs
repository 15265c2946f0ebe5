// tagbridge/src/protocol/frame.rs

use crate::constants::{PN532_FRAME_OVERHEAD, PN532_POSTAMBLE, PN532_START_MARKER};
use crate::protocol::checksum::{dcs, lcs};
use crate::{Error, Result};

/// PN532 frame helper. Provides encode/decode of the normal information frame
/// Format: [Preamble(2) StartCode(1)] [Len(1)] [LCS(1)] [Payload(n)] [DCS(1)] [Postamble(1)]
/// Preamble + start code: 0x00 0x00 0xFF
/// Postamble: 0x00
pub struct Frame;

impl Frame {
    /// Encode a payload (TFI + command + params) into a full PN532 frame.
    ///
    /// Payloads longer than 255 bytes cannot be expressed in the LEN byte;
    /// every command this crate sends is a handful of bytes.
    pub fn encode(payload: &[u8]) -> Vec<u8> {
        debug_assert!(payload.len() <= crate::constants::PN532_MAX_PAYLOAD_LEN);

        let len = payload.len() as u8;
        let mut out = Vec::with_capacity(PN532_FRAME_OVERHEAD + payload.len());
        out.extend_from_slice(&PN532_START_MARKER);
        out.push(len);
        out.push(lcs(len));
        out.extend_from_slice(payload);
        out.push(dcs(payload));
        out.push(PN532_POSTAMBLE);
        out
    }

    /// Decode the frame whose start marker begins at `pos` inside `raw` and
    /// return its payload (still including the D5/response-code pair).
    ///
    /// The postamble is not required: HSU reads may end right after DCS.
    pub fn decode_at(raw: &[u8], pos: usize) -> Result<&[u8]> {
        let header_end = pos + PN532_START_MARKER.len() + 2;
        if raw.len() < header_end {
            return Err(Error::InvalidLength {
                expected: header_end,
                actual: raw.len(),
            });
        }

        if raw[pos..pos + 3] != PN532_START_MARKER {
            return Err(Error::FrameFormat("invalid start marker".into()));
        }

        let len = raw[pos + 3];
        let lcs_actual = raw[pos + 4];
        let lcs_expected = lcs(len);
        if lcs_actual != lcs_expected {
            return Err(Error::ChecksumMismatch {
                expected: lcs_expected,
                actual: lcs_actual,
            });
        }

        let payload_start = header_end;
        let payload_end = payload_start + len as usize;
        // Declared payload plus the trailing DCS byte must be present
        if raw.len() < payload_end + 1 {
            return Err(Error::InvalidLength {
                expected: payload_end + 1,
                actual: raw.len(),
            });
        }

        let payload = &raw[payload_start..payload_end];
        let dcs_actual = raw[payload_end];
        let dcs_expected = dcs(payload);
        if dcs_actual != dcs_expected {
            return Err(Error::ChecksumMismatch {
                expected: dcs_expected,
                actual: dcs_actual,
            });
        }

        Ok(payload)
    }

    /// Scan `raw` for a frame carrying the `response` pair (e.g. D5 4B) and
    /// return its payload without that pair.
    ///
    /// Leading noise (wakeup echoes, ACK frames) is skipped: any candidate
    /// marker that fails to decode, or decodes to a different response
    /// type, moves the scan on by one byte. Malformed input yields `None`.
    pub fn extract_payload<'a>(raw: &'a [u8], response: [u8; 2]) -> Option<&'a [u8]> {
        let mut pos = 0usize;
        while pos + PN532_START_MARKER.len() <= raw.len() {
            let rel = raw[pos..]
                .windows(PN532_START_MARKER.len())
                .position(|w| w == PN532_START_MARKER)?;
            let at = pos + rel;

            match Frame::decode_at(raw, at) {
                Ok(payload) if payload.len() >= 2 && payload[..2] == response => {
                    return Some(&payload[2..]);
                }
                Ok(payload) => {
                    log::trace!(
                        "skipping frame at {} ({} bytes, not {:02x} {:02x})",
                        at,
                        payload.len(),
                        response[0],
                        response[1]
                    );
                }
                Err(e) => {
                    log::trace!("skipping candidate marker at {}: {}", at, e);
                }
            }
            pos = at + 1;
        }
        None
    }
}

/// Wrap an application-layer command (TFI + command code + params) in the
/// PN532 envelope.
pub fn build_frame(command: &[u8]) -> Vec<u8> {
    Frame::encode(command)
}

/// Extract the payload of the first well-formed frame of the requested
/// response type from a raw inbound buffer.
pub fn extract_response_payload(raw: &[u8], response: [u8; 2]) -> Option<&[u8]> {
    Frame::extract_payload(raw, response)
}
