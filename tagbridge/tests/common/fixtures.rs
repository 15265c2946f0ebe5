// fixtures.rs — reader replies captured from a PN532 v1.6 on HSU

/// ACK + GetFirmwareVersion reply (IC 0x32, v1.6, support 0x07)
pub const FIRMWARE_REPLY_HEX: &str = "0000ff00ff000000ff06fad50332010607e800";

/// ACK + InListPassiveTarget reply: NTAG215, 7-byte UID 04A1B2C3D4E580
pub const ULTRALIGHT_DETECTION_HEX: &str =
    "0000ff00ff000000ff0ff1d54b01010044000704a1b2c3d4e5804000";

/// ACK + InListPassiveTarget reply: MIFARE Classic 1K, 4-byte UID DEADBEEF
pub const CLASSIC_DETECTION_HEX: &str = "0000ff00ff000000ff0cf4d54b010100040804deadbeef9600";

/// ACK + READ of page 3 (capability container + lock/NDEF TLVs)
pub const CC_READ_REPLY_HEX: &str =
    "0000ff00ff000000ff13edd54100e11012000103a00c340300fe000000000200";

pub fn bytes(hex_str: &str) -> Vec<u8> {
    tagbridge::utils::parse_hex(hex_str).expect("fixture hex")
}

pub fn ultralight_uid() -> Vec<u8> {
    vec![0x04, 0xA1, 0xB2, 0xC3, 0xD4, 0xE5, 0x80]
}

/// Home Assistant style tag URL: https://www.home-assistant.io/tag/<id>
pub fn ha_tag_uri_record(tag_id: &str) -> Vec<u8> {
    tagbridge::test_support::uri_record(0x02, &format!("home-assistant.io/tag/{}", tag_id))
}
