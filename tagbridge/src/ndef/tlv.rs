// tagbridge/src/ndef/tlv.rs

use crate::constants::{TLV_NDEF_MESSAGE, TLV_NULL, TLV_TERMINATOR};

/// Acceptance rule for an NDEF TLV whose declared length runs past the end
/// of the memory image (the bulk read stopped early).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TlvScanOptions {
    /// Minimum share of the declared length that must be present
    pub lenient_percent: u8,
    /// The available tail must be longer than this
    pub min_lenient_len: usize,
}

impl Default for TlvScanOptions {
    fn default() -> Self {
        Self {
            lenient_percent: 80,
            min_lenient_len: 10,
        }
    }
}

impl TlvScanOptions {
    /// Never accept a truncated message.
    pub fn strict() -> Self {
        Self {
            lenient_percent: u8::MAX,
            min_lenient_len: usize::MAX,
        }
    }

    fn accepts_tail(&self, available: usize, declared: usize) -> bool {
        available * 100 >= declared * usize::from(self.lenient_percent)
            && available > self.min_lenient_len
    }
}

/// `find_ndef_message_with` using the default leniency.
pub fn find_ndef_message(image: &[u8]) -> Option<&[u8]> {
    find_ndef_message_with(image, &TlvScanOptions::default())
}

/// Locate the first NDEF message TLV in `image` and return its value.
///
/// NULL and terminator bytes are skipped; other TLV types are not parsed,
/// the scan just moves on one byte. The first NDEF TLV found decides the
/// outcome: its exact value, the tolerated truncated tail, or nothing.
pub fn find_ndef_message_with<'a>(image: &'a [u8], opts: &TlvScanOptions) -> Option<&'a [u8]> {
    let mut i = 0;
    while i < image.len() {
        match image[i] {
            TLV_NDEF_MESSAGE => {
                let declared = usize::from(*image.get(i + 1)?);
                let start = i + 2;
                let available = image.len().saturating_sub(start);

                if available >= declared {
                    return Some(&image[start..start + declared]);
                }
                if opts.accepts_tail(available, declared) {
                    log::debug!(
                        "NDEF TLV declares {} bytes, using {} available",
                        declared,
                        available
                    );
                    return Some(&image[start..]);
                }
                log::debug!(
                    "NDEF TLV truncated: {} of {} bytes",
                    available,
                    declared
                );
                return None;
            }
            TLV_NULL | TLV_TERMINATOR => i += 1,
            _ => i += 1,
        }
    }
    None
}
