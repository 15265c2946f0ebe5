// helpers.rs — reader setup shared by the integration tests

use tagbridge::device::{Reader, Ready};
use tagbridge::test_support;

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Handshaken mock reader with `frames` queued after the handshake replies.
pub fn ready_reader(frames: Vec<Vec<u8>>) -> anyhow::Result<Reader<Ready>> {
    init_logger();
    Ok(test_support::ready_mock_reader(frames)?)
}

/// Replies for one "tag entered" cycle in NDEF mode: detection, then the
/// capability container and the full NDEF window holding `message`.
pub fn entered_with_ndef(uid: &[u8], message: &[u8]) -> Vec<Vec<u8>> {
    let mut frames = vec![test_support::detection_frame(uid, 0x00)];
    frames.extend(test_support::ndef_read_frames(&test_support::ndef_tag_memory(
        message,
    )));
    frames
}
