// tagbridge/src/protocol/commands/system.rs

use crate::constants::{
    PN532_CMD_GET_FIRMWARE_VERSION, PN532_CMD_PREFIX_HOST, PN532_CMD_SAM_CONFIGURATION,
};

/// Encode GetFirmwareVersion (0x02). No parameters.
pub fn encode_get_firmware_version() -> Vec<u8> {
    vec![PN532_CMD_PREFIX_HOST, PN532_CMD_GET_FIRMWARE_VERSION]
}

/// Encode SAMConfiguration (0x14)
/// Layout: D4 14 mode timeout irq
pub fn encode_sam_configuration(mode: u8, timeout: u8, use_irq: u8) -> Vec<u8> {
    vec![
        PN532_CMD_PREFIX_HOST,
        PN532_CMD_SAM_CONFIGURATION,
        mode,
        timeout,
        use_irq,
    ]
}
