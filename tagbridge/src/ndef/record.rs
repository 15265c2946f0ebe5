// tagbridge/src/ndef/record.rs

use derive_more::Display;

use crate::protocol::parser;
use crate::Result;

const FLAG_MB: u8 = 0x80;
const FLAG_ME: u8 = 0x40;
const FLAG_CF: u8 = 0x20;
const FLAG_SR: u8 = 0x10;
const FLAG_IL: u8 = 0x08;
const TNF_MASK: u8 = 0x07;

/// 3-bit TNF field of the record header
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum TypeNameFormat {
    #[display(fmt = "empty")]
    Empty,
    #[display(fmt = "well-known")]
    WellKnown,
    #[display(fmt = "media-type")]
    MediaType,
    #[display(fmt = "absolute-uri")]
    AbsoluteUri,
    #[display(fmt = "external")]
    External,
    #[display(fmt = "unknown")]
    Unknown,
    #[display(fmt = "unchanged")]
    Unchanged,
    #[display(fmt = "reserved")]
    Reserved,
}

impl TypeNameFormat {
    /// TNF from the low three header bits
    pub fn from_bits(bits: u8) -> Self {
        match bits & TNF_MASK {
            0 => Self::Empty,
            1 => Self::WellKnown,
            2 => Self::MediaType,
            3 => Self::AbsoluteUri,
            4 => Self::External,
            5 => Self::Unknown,
            6 => Self::Unchanged,
            _ => Self::Reserved,
        }
    }
}

/// First record of an NDEF message, borrowing from the message bytes.
/// The ID field is skipped; only its length is kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NdefRecord<'a> {
    /// MB
    pub message_begin: bool,
    /// ME
    pub message_end: bool,
    /// CF
    pub chunked: bool,
    /// SR: one-byte payload length
    pub short_record: bool,
    /// IL
    pub id_present: bool,
    /// Type name format
    pub tnf: TypeNameFormat,
    /// Record type, e.g. `U` or `T`
    pub record_type: &'a [u8],
    /// Length of the skipped ID field
    pub id_length: u8,
    /// Payload bytes
    pub payload: &'a [u8],
}

impl NdefRecord<'_> {
    /// True for a one-byte well-known type equal to `code` (e.g. `U`, `T`).
    pub fn is_type(&self, code: u8) -> bool {
        self.record_type == [code]
    }
}

/// Decode the record header and slice type and payload.
///
/// Layout: header(1) TYPE_LEN(1) PAYLOAD_LEN(1 | 4 BE) [ID_LEN(1)] TYPE ID PAYLOAD
pub fn decode_first_record(message: &[u8]) -> Result<NdefRecord<'_>> {
    parser::ensure_len(message, 3)?;

    let header = message[0];
    let short_record = header & FLAG_SR != 0;
    let id_present = header & FLAG_IL != 0;

    let type_len = usize::from(parser::byte_at(message, 1)?);
    let mut i = 2;

    let payload_len = if short_record {
        let n = usize::from(parser::byte_at(message, i)?);
        i += 1;
        n
    } else {
        let n = parser::be_u32_at(message, i)? as usize;
        i += 4;
        n
    };

    let id_length = if id_present {
        let n = parser::byte_at(message, i)?;
        i += 1;
        n
    } else {
        0
    };

    // type + id + payload must fit in what is left; never truncate
    let remaining = message.len() - i;
    let required = type_len
        .checked_add(usize::from(id_length))
        .and_then(|n| n.checked_add(payload_len))
        .unwrap_or(usize::MAX);
    if required > remaining {
        return Err(crate::Error::InvalidLength {
            expected: required,
            actual: remaining,
        });
    }

    let record_type = &message[i..i + type_len];
    i += type_len + usize::from(id_length);
    let payload = &message[i..i + payload_len];

    Ok(NdefRecord {
        message_begin: header & FLAG_MB != 0,
        message_end: header & FLAG_ME != 0,
        chunked: header & FLAG_CF != 0,
        short_record,
        id_present,
        tnf: TypeNameFormat::from_bits(header),
        record_type,
        id_length,
        payload,
    })
}

/// NDEF Parser boundary: malformed records are "no record".
pub fn parse_first_record(message: &[u8]) -> Option<NdefRecord<'_>> {
    match decode_first_record(message) {
        Ok(record) => Some(record),
        Err(e) => {
            log::debug!("rejecting NDEF record: {}", e);
            None
        }
    }
}
