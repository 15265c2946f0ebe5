// tagbridge/src/constants.rs
//! Common protocol constants used across the crate

/// PN532 frame preamble + start code: 0x00 0x00 0xFF
pub const PN532_START_MARKER: [u8; 3] = [0x00, 0x00, 0xFF];

/// PN532 frame postamble: 0x00
pub const PN532_POSTAMBLE: u8 = 0x00;

/// Bytes surrounding the payload: marker(3) + LEN + LCS + DCS + postamble
pub const PN532_FRAME_OVERHEAD: usize = 7;

/// Maximum payload length encodable in the single LEN byte
pub const PN532_MAX_PAYLOAD_LEN: usize = 255;

/// PN532 host->device prefix (D4) and device->host prefix (D5)
pub const PN532_CMD_PREFIX_HOST: u8 = 0xD4;
pub const PN532_CMD_PREFIX_DEVICE: u8 = 0xD5;

/// PN532 command codes (host side)
pub const PN532_CMD_GET_FIRMWARE_VERSION: u8 = 0x02;
pub const PN532_CMD_SAM_CONFIGURATION: u8 = 0x14;
pub const PN532_CMD_IN_DATA_EXCHANGE: u8 = 0x40;
pub const PN532_CMD_INLIST_PASSIVE_TARGET: u8 = 0x4A;

/// Response-type pairs (D5, command + 1) expected after the start marker
pub const PN532_RESP_FIRMWARE_VERSION: [u8; 2] = [PN532_CMD_PREFIX_DEVICE, 0x03];
pub const PN532_RESP_IN_DATA_EXCHANGE: [u8; 2] = [PN532_CMD_PREFIX_DEVICE, 0x41];
pub const PN532_RESP_INLIST_PASSIVE_TARGET: [u8; 2] = [PN532_CMD_PREFIX_DEVICE, 0x4B];

/// HSU wakeup: two 0x55 bytes, a run of zero padding, then a
/// SAMConfiguration(normal mode) frame whose preamble is folded into the
/// padding. Sent verbatim.
pub const PN532_HSU_WAKEUP: [u8; 24] = [
    0x55, 0x55, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0xFF, 0x03, 0xFD, 0xD4, 0x14, 0x01, 0x17, 0x00,
];

/// InListPassiveTarget: one target, 106 kbps ISO14443A
pub const INLIST_MAX_TARGETS: u8 = 0x01;
pub const INLIST_BRTY_106_TYPE_A: u8 = 0x00;

/// Target number the PN532 assigns to the single listed target
pub const DEFAULT_TARGET_ID: u8 = 0x01;

/// InDataExchange status byte for success
pub const IN_DATA_EXCHANGE_STATUS_OK: u8 = 0x00;

/// MIFARE Ultralight READ: returns 4 pages (16 bytes) per command
pub const MIFARE_CMD_READ: u8 = 0x30;
pub const ULTRALIGHT_PAGE_SIZE: usize = 4;
pub const ULTRALIGHT_PAGES_PER_READ: u8 = 4;

/// Capability container page and the NDEF read window that follows it
pub const CAPABILITY_CONTAINER_PAGE: u8 = 3;
pub const CAPABILITY_CONTAINER_MAGIC: u8 = 0xE1;
pub const NDEF_FIRST_PAGE: u8 = 4;
pub const NDEF_PAGE_COUNT: u8 = 44;

/// TLV tags
pub const TLV_NULL: u8 = 0x00;
pub const TLV_NDEF_MESSAGE: u8 = 0x03;
pub const TLV_TERMINATOR: u8 = 0xFE;

/// NFC Forum well-known record types
pub const RTD_TEXT: u8 = 0x54;
pub const RTD_URI: u8 = 0x55;

/// Minimum trimmed length of a value accepted as a tag identifier
pub const MIN_TAG_VALUE_LEN: usize = 8;

/// Default serial baud rate for PN532 HSU
pub const DEFAULT_BAUDRATE: u32 = 115_200;
