use crate::constants::{
    CAPABILITY_CONTAINER_MAGIC, CAPABILITY_CONTAINER_PAGE, NDEF_FIRST_PAGE, NDEF_PAGE_COUNT,
};
use crate::device::{Reader, Ready};
use crate::ndef::{self, TlvScanOptions};
use crate::Result;

use super::read::{read_blocks, read_chunk, BulkReadPolicy};

/// Type 2 tag capability container (page 3)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapabilityContainer {
    /// 0xE1 on an NDEF formatted tag
    pub magic: u8,
    pub version: u8,
    /// Data area size in units of 8 bytes
    pub size: u8,
    /// Read/write access nibbles
    pub access: u8,
}

impl CapabilityContainer {
    /// First four bytes of page 3; `None` if fewer are given.
    pub fn from_bytes(data: &[u8]) -> Option<Self> {
        match data {
            [magic, version, size, access, ..] => Some(Self {
                magic: *magic,
                version: *version,
                size: *size,
                access: *access,
            }),
            _ => None,
        }
    }

    /// Magic byte check
    pub fn is_ndef_formatted(&self) -> bool {
        self.magic == CAPABILITY_CONTAINER_MAGIC
    }

    /// Data area size in bytes
    pub fn data_area_len(&self) -> usize {
        usize::from(self.size) * 8
    }
}

/// Read page 3. `Ok(None)` when the tag does not answer.
pub fn read_capability_container(
    reader: &mut Reader<Ready>,
    target_id: u8,
) -> Result<Option<CapabilityContainer>> {
    let data = read_chunk(reader, target_id, CAPABILITY_CONTAINER_PAGE)?;
    Ok(data.as_deref().and_then(CapabilityContainer::from_bytes))
}

/// Capability container, NDEF window read, TLV scan, first record, value.
/// Every step that finds nothing ends in `Ok(None)`.
pub fn read_ndef_value(
    reader: &mut Reader<Ready>,
    target_id: u8,
    policy: &BulkReadPolicy,
    scan: &TlvScanOptions,
) -> Result<Option<String>> {
    let Some(cc) = read_capability_container(reader, target_id)? else {
        log::debug!("capability container unreadable");
        return Ok(None);
    };
    if cc.is_ndef_formatted() {
        log::debug!(
            "capability container: version {:#04x}, {} bytes, access {:#04x}",
            cc.version,
            cc.data_area_len(),
            cc.access
        );
    } else {
        log::debug!("capability container magic {:#04x} is not NDEF; reading anyway", cc.magic);
    }

    let Some(image) = read_blocks(reader, target_id, NDEF_FIRST_PAGE, NDEF_PAGE_COUNT, policy)?
    else {
        return Ok(None);
    };
    // TLV tag + length + at least a record header
    if image.len() < 4 {
        return Ok(None);
    }

    let value = ndef::find_ndef_message_with(image.as_bytes(), scan)
        .and_then(ndef::parse_first_record)
        .and_then(|record| ndef::extract(&record));
    Ok(value)
}
