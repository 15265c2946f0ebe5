#[path = "../common/mod.rs"]
mod common;

use common::fixtures;
use tagbridge::protocol::codec::response_payload;
use tagbridge::protocol::{decode_firmware_version, parse_detection, Command};
use tagbridge::CardType;

#[test]
fn captured_ultralight_detection() {
    let raw = fixtures::bytes(fixtures::ULTRALIGHT_DETECTION_HEX);
    let payload = response_payload(&Command::detect_type_a(), &raw).unwrap();
    let card = parse_detection(payload).unwrap();
    assert_eq!(card.uid.to_hex(), "04A1B2C3D4E580");
    assert_eq!(card.card_type(), CardType::MifareUltralight);
    assert_eq!(card.sens_res, [0x00, 0x44]);
    assert_eq!(card.target_id, 1);
    assert_eq!(card.technology.to_string(), "ISO14443A");
}

#[test]
fn captured_classic_detection() {
    let raw = fixtures::bytes(fixtures::CLASSIC_DETECTION_HEX);
    let payload = response_payload(&Command::detect_type_a(), &raw).unwrap();
    let card = parse_detection(payload).unwrap();
    assert_eq!(card.uid.to_hex(), "DEADBEEF");
    assert_eq!(card.card_type().to_string(), "MIFARE Classic 1K");
}

#[test]
fn zero_targets_is_no_card() {
    assert!(parse_detection(&[0x00]).is_none());
}

#[test]
fn uid_length_past_end_is_no_card() {
    // declares a 7-byte UID but carries 3
    assert!(parse_detection(&[0x01, 0x01, 0x00, 0x44, 0x00, 0x07, 0x04, 0xA1, 0xB2]).is_none());
}

#[test]
fn unknown_sak_gets_hex_label() {
    let card = parse_detection(&[0x01, 0x01, 0x00, 0x04, 0x28, 0x04, 1, 2, 3, 4]).unwrap();
    assert_eq!(card.card_type().to_string(), "Unknown (SAK: 0x28)");
}

#[test]
fn captured_firmware_version() -> anyhow::Result<()> {
    let raw = fixtures::bytes(fixtures::FIRMWARE_REPLY_HEX);
    let payload = response_payload(&Command::GetFirmwareVersion, &raw)
        .ok_or_else(|| anyhow::anyhow!("no firmware payload"))?;
    let fw = decode_firmware_version(payload)?;
    assert_eq!((fw.ic, fw.ver, fw.rev), (0x32, 1, 6));
    Ok(())
}
