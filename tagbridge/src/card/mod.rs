// tagbridge/src/card/mod.rs

use crate::device::{Reader, Ready};
use crate::ndef::TlvScanOptions;
use crate::types::{CardType, Technology, Uid};
use crate::Result;

/// Block reads and capability container / NDEF helpers
pub mod operations;

pub use operations::{
    read_blocks, read_capability_container, read_chunk, read_ndef_value, BulkReadPolicy,
    CapabilityContainer, MemoryImage,
};

/// A target found by one detection scan. Superseded by the next scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetectedCard {
    /// UID as reported by the anticollision loop
    pub uid: Uid,
    /// SENS_RES (ATQA)
    pub sens_res: [u8; 2],
    /// SEL_RES
    pub sak: u8,
    /// Logical target number for InDataExchange
    pub target_id: u8,
    pub technology: Technology,
}

impl DetectedCard {
    /// Card family from the SAK table
    pub fn card_type(&self) -> CardType {
        CardType::from_sak(self.sak)
    }

    /// Decoded value of the first NDEF record, if the tag carries one.
    pub fn read_ndef_value(
        &self,
        reader: &mut Reader<Ready>,
        policy: &BulkReadPolicy,
        scan: &TlvScanOptions,
    ) -> Result<Option<String>> {
        operations::read_ndef_value(reader, self.target_id, policy, scan)
    }
}
