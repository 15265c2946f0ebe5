#[path = "../common/mod.rs"]
mod common;

use common::fixtures;
use tagbridge::device::{Reader, SessionTiming};
use tagbridge::test_support;

#[test]
fn handshake_then_scan_with_captured_frames() -> anyhow::Result<()> {
    common::helpers::init_logger();
    let (shared, boxed) = test_support::shared_mock();
    {
        let mut mock = shared.borrow_mut();
        mock.push_response(test_support::ACK_FRAME.to_vec());
        mock.push_response(fixtures::bytes(fixtures::FIRMWARE_REPLY_HEX));
        mock.push_silence();
        mock.push_response(fixtures::bytes(fixtures::CLASSIC_DETECTION_HEX));
    }

    // Reader<Connected> has no scan(); the handshake yields Reader<Ready>
    let mut reader = Reader::new_with_transport(boxed, SessionTiming::immediate()).handshake()?;
    assert_eq!(reader.firmware().map(|fw| fw.to_string()).as_deref(), Some("PN532 v1.6 (support 0x07)"));

    let card = reader.scan()?.expect("card");
    assert_eq!(card.uid.to_hex(), "DEADBEEF");

    // wakeup, firmware, SAM config, detection
    assert_eq!(shared.borrow().sent.len(), 4);
    assert!(shared.borrow().clears >= 4);
    Ok(())
}

#[test]
fn garbage_reply_is_no_card() -> anyhow::Result<()> {
    let mut reader = common::helpers::ready_reader(vec![vec![0x55, 0x00, 0xFF, 0x12]])?;
    assert!(reader.scan()?.is_none());
    Ok(())
}

#[test]
fn unplugged_reader_surfaces_io_error() -> anyhow::Result<()> {
    let (shared, boxed) = test_support::shared_mock();
    test_support::seed_handshake(&mut shared.borrow_mut());
    let mut reader = Reader::new_with_transport(boxed, SessionTiming::immediate()).handshake()?;

    shared.borrow_mut().set_send_failures(1);
    let err = reader.scan().unwrap_err();
    assert!(err.is_transport_fault());
    Ok(())
}
