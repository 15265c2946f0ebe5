#[path = "../common/mod.rs"]
mod common;

use common::fixtures;
use proptest::prelude::*;
use tagbridge::protocol::{build_frame, extract_response_payload, Frame};

#[test]
fn captured_firmware_reply_behind_ack() {
    let raw = fixtures::bytes(fixtures::FIRMWARE_REPLY_HEX);
    let payload = extract_response_payload(&raw, [0xD5, 0x03]).expect("firmware payload");
    assert_eq!(payload, &[0x32, 0x01, 0x06, 0x07]);
}

#[test]
fn leading_noise_and_wakeup_echo_are_skipped() {
    let mut raw = vec![0x55, 0x55, 0x00, 0x00, 0x00];
    raw.extend_from_slice(&fixtures::bytes(fixtures::ULTRALIGHT_DETECTION_HEX));
    let payload = extract_response_payload(&raw, [0xD5, 0x4B]).unwrap();
    assert_eq!(payload[0], 0x01);
    assert_eq!(&payload[6..], fixtures::ultralight_uid().as_slice());
}

#[test]
fn split_frame_is_absent_until_complete() {
    let raw = fixtures::bytes(fixtures::ULTRALIGHT_DETECTION_HEX);
    let cut = raw.len() - 4;
    assert!(extract_response_payload(&raw[..cut], [0xD5, 0x4B]).is_none());
    assert!(extract_response_payload(&raw, [0xD5, 0x4B]).is_some());
}

#[test]
fn mismatched_response_type_is_absent() {
    let raw = fixtures::bytes(fixtures::FIRMWARE_REPLY_HEX);
    assert!(extract_response_payload(&raw, [0xD5, 0x41]).is_none());
    assert!(extract_response_payload(&[], [0xD5, 0x41]).is_none());
}

#[test]
fn corrupted_checksum_is_absent() {
    let mut raw = fixtures::bytes(fixtures::FIRMWARE_REPLY_HEX);
    let dcs = raw.len() - 2;
    raw[dcs] ^= 0x01;
    assert!(extract_response_payload(&raw, [0xD5, 0x03]).is_none());
}

proptest! {
    #[test]
    fn build_then_extract_round_trips(body in prop::collection::vec(any::<u8>(), 0..=253)) {
        let mut command = vec![0xD5, 0x4B];
        command.extend_from_slice(&body);
        let frame = build_frame(&command);
        prop_assert_eq!(frame.len(), command.len() + 7);
        prop_assert_eq!(extract_response_payload(&frame, [0xD5, 0x4B]), Some(body.as_slice()));
        prop_assert_eq!(Frame::decode_at(&frame, 0).ok(), Some(command.as_slice()));
    }
}
