// tagbridge/src/types.rs

use derive_more::Display;

/// UID - Newtype Pattern (可変長: 通常 4 または 7 バイト)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Uid(Vec<u8>);

impl Uid {
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Uppercase hex without separators, e.g. `04A1B2C3D4E5F6`.
    pub fn to_hex(&self) -> String {
        crate::utils::bytes_to_hex_upper(self.as_bytes())
    }
}

impl std::fmt::Display for Uid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// RF technology of a detected target. Only 106 kbps Type A is listed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Technology {
    #[display(fmt = "ISO14443A")]
    Iso14443A,
}

/// Human-readable card family derived from the SAK (SEL_RES) byte
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum CardType {
    #[display(fmt = "MIFARE Ultralight")]
    MifareUltralight,
    #[display(fmt = "MIFARE Classic 1K")]
    MifareClassic1K,
    #[display(fmt = "MIFARE Classic 4K")]
    MifareClassic4K,
    #[display(fmt = "MIFARE DESFire")]
    MifareDesfire,
    #[display(fmt = "MIFARE Plus")]
    MifarePlus,
    #[display(fmt = "Unknown (SAK: 0x{:02X})", _0)]
    Unknown(u8),
}

/// SAK -> CardType lookup table
const SAK_TABLE: [(u8, CardType); 5] = [
    (0x00, CardType::MifareUltralight),
    (0x08, CardType::MifareClassic1K),
    (0x18, CardType::MifareClassic4K),
    (0x20, CardType::MifareDesfire),
    (0x44, CardType::MifarePlus),
];

impl CardType {
    /// Table lookup; unknown SAKs keep the raw byte.
    pub fn from_sak(sak: u8) -> Self {
        SAK_TABLE
            .iter()
            .find(|(code, _)| *code == sak)
            .map(|(_, ty)| *ty)
            .unwrap_or(CardType::Unknown(sak))
    }
}

/// Which value is delivered as `tag_id` when a tag enters the field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display)]
pub enum PayloadMode {
    /// Decoded NDEF content; delivery is suppressed when none is found
    #[default]
    #[display(fmt = "ndef")]
    Ndef,
    /// Always the UID hex string
    #[display(fmt = "uuid")]
    Uuid,
}

impl PayloadMode {
    /// Parse a selector value (case-insensitive). Unrecognised values
    /// return None so the caller can decide on a fallback.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ndef" => Some(Self::Ndef),
            "uuid" => Some(Self::Uuid),
            _ => None,
        }
    }
}
