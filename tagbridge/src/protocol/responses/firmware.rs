// tagbridge/src/protocol/responses/firmware.rs

use crate::protocol::parser;
use crate::Result;

/// GetFirmwareVersion response: IC(1) Ver(1) Rev(1) Support(1)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FirmwareVersion {
    /// IC code (0x32 for PN532)
    pub ic: u8,
    pub ver: u8,
    pub rev: u8,
    pub support: u8,
}

impl std::fmt::Display for FirmwareVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "PN5{:02X} v{}.{} (support {:#04x})",
            self.ic, self.ver, self.rev, self.support
        )
    }
}

/// Decode the four bytes after D5 03.
pub fn decode_firmware_version(data: &[u8]) -> Result<FirmwareVersion> {
    let s = parser::slice_at(data, 0, 4)?;
    Ok(FirmwareVersion {
        ic: s[0],
        ver: s[1],
        rev: s[2],
        support: s[3],
    })
}
