// tagbridge/src/protocol/commands/detection.rs

use crate::constants::{PN532_CMD_INLIST_PASSIVE_TARGET, PN532_CMD_PREFIX_HOST};

/// Encode InListPassiveTarget (0x4A)
/// Layout: D4 4A max_targets brty
pub fn encode_in_list_passive_target(max_targets: u8, brty: u8) -> Vec<u8> {
    vec![
        PN532_CMD_PREFIX_HOST,
        PN532_CMD_INLIST_PASSIVE_TARGET,
        max_targets,
        brty,
    ]
}
