#[path = "../common/mod.rs"]
mod common;

use tagbridge::ndef::{
    extract, find_ndef_message, find_ndef_message_with, is_usable_tag_value, parse_first_record,
    TlvScanOptions, TypeNameFormat,
};
use tagbridge::test_support::{ndef_tag_memory, text_record, uri_record};

fn decode(image: &[u8]) -> Option<String> {
    find_ndef_message(image)
        .and_then(parse_first_record)
        .and_then(|record| extract(&record))
}

#[test]
fn https_tag_url_yields_bare_id() {
    let image = ndef_tag_memory(&uri_record(0x04, "example.com/tag/42"));
    assert_eq!(decode(&image).as_deref(), Some("42"));
}

#[test]
fn plain_url_is_expanded() {
    let image = ndef_tag_memory(&uri_record(0x03, "foo.org"));
    assert_eq!(decode(&image).as_deref(), Some("http://foo.org"));
}

#[test]
fn text_record_hello() {
    let image = ndef_tag_memory(&text_record("en", "Hello"));
    let record = find_ndef_message(&image).and_then(parse_first_record).unwrap();
    assert_eq!(record.tnf, TypeNameFormat::WellKnown);
    assert!(record.message_begin && record.message_end);
    assert_eq!(extract(&record).as_deref(), Some("Hello"));
}

#[test]
fn lock_control_tlv_before_message() {
    // Lock Control TLV as written by NTAG21x, then the NDEF TLV
    let mut image = vec![0x01, 0x03, 0xA0, 0x0C, 0x34];
    image.extend_from_slice(&ndef_tag_memory(&uri_record(0x02, "home-assistant.io/tag/abcd-1234")));
    // 0x03 inside the lock TLV is taken as the NDEF tag; what follows is no valid record
    assert_eq!(decode(&image), None);
}

#[test]
fn oversized_record_is_rejected_not_truncated() {
    // record claims 0x40 payload bytes inside a 9-byte message
    let message = [0xD1, 0x01, 0x40, 0x55, 0x04, b'a', b'b', b'c', b'd'];
    let image = ndef_tag_memory(&message);
    assert_eq!(find_ndef_message(&image), Some(&message[..]));
    assert!(parse_first_record(&message).is_none());
    assert_eq!(decode(&image), None);
}

#[test]
fn truncated_image_uses_lenient_tail() {
    let record = text_record("en", "living-room-light");
    let mut image = ndef_tag_memory(&record);
    // declare a few more bytes than the image holds
    image.truncate(2 + record.len());
    image[1] = (record.len() + 2) as u8;

    assert_eq!(decode(&image).as_deref(), Some("living-room-light"));
    assert!(find_ndef_message_with(&image, &TlvScanOptions::strict()).is_none());
}

#[test]
fn short_value_fails_usability_gate() {
    let image = ndef_tag_memory(&text_record("en", "ab"));
    let value = decode(&image).unwrap();
    assert_eq!(value, "ab");
    assert!(!is_usable_tag_value(&value));
}
