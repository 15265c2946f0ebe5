// tagbridge/src/ndef/mod.rs
//! NDEF decoding for Type 2 tag memory: TLV scan, first record header and
//! the value carried by the record.

/// Record header decoding
pub mod record;
/// NDEF message TLV scan
pub mod tlv;
/// Tag value from a record
pub mod value;

pub use record::{decode_first_record, parse_first_record, NdefRecord, TypeNameFormat};
pub use tlv::{find_ndef_message, find_ndef_message_with, TlvScanOptions};
pub use value::{extract, is_usable_tag_value, uri_prefix, URI_PREFIXES};
