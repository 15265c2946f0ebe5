// tagbridge/src/ndef/value.rs

use std::borrow::Cow;

use crate::constants::{MIN_TAG_VALUE_LEN, RTD_TEXT, RTD_URI};
use crate::ndef::NdefRecord;
use crate::utils::bytes_to_hex_upper;

/// URI identifier codes (NFC Forum URI RTD), indexed by code
pub const URI_PREFIXES: [&str; 36] = [
    "",
    "http://www.",
    "https://www.",
    "http://",
    "https://",
    "tel:",
    "mailto:",
    "ftp://anonymous:anonymous@",
    "ftp://ftp.",
    "ftps://",
    "sftp://",
    "smb://",
    "nfs://",
    "ftp://",
    "dav://",
    "news:",
    "telnet://",
    "imap:",
    "rtsp://",
    "urn:",
    "pop:",
    "sip:",
    "sips:",
    "tftp:",
    "btspp://",
    "btl2cap://",
    "btgoep://",
    "tcpobex://",
    "irdaobex://",
    "file://",
    "urn:epc:id:",
    "urn:epc:tag:",
    "urn:epc:pat:",
    "urn:epc:raw:",
    "urn:epc:",
    "urn:nfc:",
];

/// Path segment marking a bare tag id inside a URL
const TAG_PATH_SEGMENT: &str = "/tag/";

/// Expand a URI identifier code. Unknown codes render as `[XX]`.
pub fn uri_prefix(code: u8) -> Cow<'static, str> {
    match URI_PREFIXES.get(usize::from(code)) {
        Some(prefix) => Cow::Borrowed(prefix),
        None => Cow::Owned(format!("[{:02X}]", code)),
    }
}

fn extract_uri(payload: &[u8]) -> String {
    let (code, rest) = match payload.split_first() {
        Some((code, rest)) => (*code, rest),
        None => return String::new(),
    };
    let suffix = String::from_utf8_lossy(rest);

    // https://.../tag/<id> -> <id>
    if let Some(pos) = suffix.rfind(TAG_PATH_SEGMENT) {
        return suffix[pos + TAG_PATH_SEGMENT.len()..].to_string();
    }
    format!("{}{}", uri_prefix(code), suffix)
}

/// UTF-8 decode that drops invalid sequences instead of replacing them.
fn decode_valid_utf8(bytes: &[u8]) -> String {
    bytes.utf8_chunks().map(|chunk| chunk.valid()).collect()
}

fn extract_text(payload: &[u8]) -> Option<String> {
    // status byte: bit 7 encoding, bits 5..0 language code length
    let lang_len = usize::from(*payload.first()? & 0x3F);
    let text = payload.get(lang_len + 1..).filter(|t| !t.is_empty())?;
    Some(decode_valid_utf8(text))
}

/// Human-usable value of a record. Always `Some` for a non-empty payload.
pub fn extract(record: &NdefRecord<'_>) -> Option<String> {
    let payload = record.payload;
    if payload.is_empty() {
        return None;
    }

    if record.is_type(RTD_URI) {
        return Some(extract_uri(payload));
    }
    if record.is_type(RTD_TEXT) {
        if let Some(text) = extract_text(payload) {
            return Some(text);
        }
    }

    let text = decode_valid_utf8(payload);
    if text.trim().is_empty() {
        return Some(bytes_to_hex_upper(payload));
    }
    Some(text)
}

/// Gate applied before a value is delivered as a tag id.
pub fn is_usable_tag_value(value: &str) -> bool {
    value.trim().chars().count() >= MIN_TAG_VALUE_LEN
}
