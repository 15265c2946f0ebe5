// tagbridge/src/protocol/commands/mod.rs

/// InListPassiveTarget
pub mod detection;
/// InDataExchange and MIFARE READ
pub mod exchange;
/// GetFirmwareVersion and SAMConfiguration
pub mod system;

pub use detection::encode_in_list_passive_target;
pub use exchange::{encode_in_data_exchange, encode_mifare_read};
pub use system::{encode_get_firmware_version, encode_sam_configuration};

use crate::constants;

/// High-level Command enum. New commands should be added here and
/// their per-command encoder placed in `protocol::commands::<name>.rs`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    GetFirmwareVersion,
    SamConfiguration {
        mode: u8,
        timeout: u8,
        use_irq: u8,
    },
    InListPassiveTarget {
        max_targets: u8,
        brty: u8,
    },
    InDataExchange {
        target: u8,
        data: Vec<u8>,
    },
}

impl Command {
    /// SAMConfiguration as sent after wakeup: normal mode, 0x14 * 50 ms
    /// virtual-card timeout, IRQ enabled.
    pub fn sam_normal_mode() -> Self {
        Self::SamConfiguration {
            mode: 0x01,
            timeout: 0x14,
            use_irq: 0x01,
        }
    }

    /// InListPassiveTarget for a single 106 kbps Type A target.
    pub fn detect_type_a() -> Self {
        Self::InListPassiveTarget {
            max_targets: constants::INLIST_MAX_TARGETS,
            brty: constants::INLIST_BRTY_106_TYPE_A,
        }
    }

    /// MIFARE Ultralight READ of four pages starting at `page`, tunnelled
    /// through InDataExchange to `target`.
    pub fn mifare_read(target: u8, page: u8) -> Self {
        Self::InDataExchange {
            target,
            data: vec![constants::MIFARE_CMD_READ, page],
        }
    }

    /// Return the PN532 command code.
    pub fn command_code(&self) -> u8 {
        match self {
            Self::GetFirmwareVersion => constants::PN532_CMD_GET_FIRMWARE_VERSION,
            Self::SamConfiguration { .. } => constants::PN532_CMD_SAM_CONFIGURATION,
            Self::InListPassiveTarget { .. } => constants::PN532_CMD_INLIST_PASSIVE_TARGET,
            Self::InDataExchange { .. } => constants::PN532_CMD_IN_DATA_EXCHANGE,
        }
    }

    /// The (D5, code + 1) pair that identifies this command's response.
    pub fn response_pair(&self) -> [u8; 2] {
        [
            constants::PN532_CMD_PREFIX_DEVICE,
            self.command_code().wrapping_add(1),
        ]
    }

    /// Encode the command into the frame payload (D4 + command code + params).
    pub fn encode(&self) -> Vec<u8> {
        match self {
            Self::GetFirmwareVersion => encode_get_firmware_version(),
            Self::SamConfiguration {
                mode,
                timeout,
                use_irq,
            } => encode_sam_configuration(*mode, *timeout, *use_irq),
            Self::InListPassiveTarget { max_targets, brty } => {
                encode_in_list_passive_target(*max_targets, *brty)
            }
            Self::InDataExchange { target, data } => encode_in_data_exchange(*target, data),
        }
    }
}
