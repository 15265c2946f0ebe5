//! Hexadecimal helpers for UID display, the raw-payload fallback and
//! wire-level debug logging.

use std::fmt::Write;

/// Uppercase hex without separators. This is the display form used for
/// UIDs and for rendering an undecodable record payload.
///
/// Example: `&[0x04, 0xa1]` -> `"04A1"`
pub fn bytes_to_hex_upper(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        // write! never fails writing to a String
        let _ = write!(&mut s, "{:02X}", b);
    }
    s
}

/// Lowercase hex with a single space between bytes, for frame traces.
///
/// Example: `&[0x00, 0xff, 0xd5]` -> `"00 ff d5"`
pub fn bytes_to_hex_spaced(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() * 3);
    for (i, b) in bytes.iter().enumerate() {
        if i != 0 {
            s.push(' ');
        }
        let _ = write!(&mut s, "{:02x}", b);
    }
    s
}

/// Parse a hex dump (as printed by serial sniffers) into bytes. ASCII
/// whitespace is ignored; either case is accepted.
pub fn parse_hex(s: &str) -> Result<Vec<u8>, String> {
    let digits: Vec<u8> = s.bytes().filter(|b| !b.is_ascii_whitespace()).collect();
    if digits.len() % 2 != 0 {
        return Err("hex string has odd length".to_string());
    }

    digits
        .chunks(2)
        .map(|pair| {
            let text = std::str::from_utf8(pair).map_err(|e| e.to_string())?;
            u8::from_str_radix(text, 16).map_err(|e| format!("invalid hex pair '{}': {}", text, e))
        })
        .collect()
}
