//! Test support helpers intended for use by unit and integration tests.
//!
//! These helpers centralize MockTransport setup and the reader replies a
//! PN532 would send, so tests across the crate and the tests/ directory can
//! reuse the same frames.
#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use crate::constants::{NDEF_PAGE_COUNT, TLV_NDEF_MESSAGE, TLV_TERMINATOR, ULTRALIGHT_PAGE_SIZE};
use crate::delivery::{EventSink, TagEvent};
use crate::device::{Reader, Ready, SessionTiming};
use crate::protocol::Frame;
use crate::transport::{MockTransport, Transport};
use crate::{Error, Result};

/// ACK frame the PN532 sends before every response
pub const ACK_FRAME: [u8; 6] = [0x00, 0x00, 0xFF, 0x00, 0xFF, 0x00];

/// Transport wrapper so a test can inspect the mock after the Reader owns it.
#[doc(hidden)]
pub struct SharedTransport {
    inner: Rc<RefCell<MockTransport>>,
}

impl SharedTransport {
    /// Wrap a shared mock.
    pub fn new(inner: Rc<RefCell<MockTransport>>) -> Self {
        Self { inner }
    }
}

impl Transport for SharedTransport {
    fn send(&mut self, data: &[u8]) -> Result<()> {
        self.inner.borrow_mut().send(data)
    }

    fn receive(&mut self, timeout_ms: u64) -> Result<Vec<u8>> {
        self.inner.borrow_mut().receive(timeout_ms)
    }

    fn clear_input(&mut self) -> Result<()> {
        self.inner.borrow_mut().clear_input()
    }
}

/// A fresh mock plus a boxed transport sharing it.
#[doc(hidden)]
pub fn shared_mock() -> (Rc<RefCell<MockTransport>>, Box<dyn Transport>) {
    let inner = Rc::new(RefCell::new(MockTransport::new()));
    let boxed: Box<dyn Transport> = Box::new(SharedTransport::new(inner.clone()));
    (inner, boxed)
}

/// ACK followed by a response frame carrying `payload`.
#[doc(hidden)]
pub fn ack_and(payload: &[u8]) -> Vec<u8> {
    let mut raw = ACK_FRAME.to_vec();
    raw.extend_from_slice(&Frame::encode(payload));
    raw
}

/// GetFirmwareVersion reply for a PN532 v1.6
#[doc(hidden)]
pub fn firmware_frame() -> Vec<u8> {
    ack_and(&[0xD5, 0x03, 0x32, 0x01, 0x06, 0x07])
}

/// InListPassiveTarget reply with one Type A target.
#[doc(hidden)]
pub fn detection_frame(uid: &[u8], sak: u8) -> Vec<u8> {
    let mut payload = vec![0xD5, 0x4B, 0x01, 0x01, 0x00, 0x44, sak, uid.len() as u8];
    payload.extend_from_slice(uid);
    ack_and(&payload)
}

/// InListPassiveTarget reply with no target in the field.
#[doc(hidden)]
pub fn no_target_frame() -> Vec<u8> {
    ack_and(&[0xD5, 0x4B, 0x00])
}

/// Successful InDataExchange (READ) reply.
#[doc(hidden)]
pub fn read_frame(data: &[u8]) -> Vec<u8> {
    let mut payload = vec![0xD5, 0x41, 0x00];
    payload.extend_from_slice(data);
    ack_and(&payload)
}

/// InDataExchange reply with a non-zero status.
#[doc(hidden)]
pub fn read_error_frame(status: u8) -> Vec<u8> {
    ack_and(&[0xD5, 0x41, status])
}

/// Replies for a full handshake: wakeup ACK, firmware, SAM configuration.
#[doc(hidden)]
pub fn seed_handshake(mock: &mut MockTransport) {
    mock.push_response(ACK_FRAME.to_vec());
    mock.push_response(firmware_frame());
    mock.push_response(ack_and(&[0xD5, 0x15]));
}

/// A handshaken Reader over a MockTransport. `frames` are queued after the
/// handshake replies, one per transport read.
#[doc(hidden)]
pub fn ready_mock_reader(frames: Vec<Vec<u8>>) -> Result<Reader<Ready>> {
    let mut mock = MockTransport::new();
    seed_handshake(&mut mock);
    for frame in frames {
        mock.push_response(frame);
    }
    Reader::new_with_transport(Box::new(mock), SessionTiming::immediate()).handshake()
}

/// Short well-known URI record (MB|ME|SR).
#[doc(hidden)]
pub fn uri_record(code: u8, suffix: &str) -> Vec<u8> {
    let mut payload = vec![code];
    payload.extend_from_slice(suffix.as_bytes());
    short_record(b"U", &payload)
}

/// Short well-known Text record, UTF-8.
#[doc(hidden)]
pub fn text_record(lang: &str, text: &str) -> Vec<u8> {
    let mut payload = vec![lang.len() as u8];
    payload.extend_from_slice(lang.as_bytes());
    payload.extend_from_slice(text.as_bytes());
    short_record(b"T", &payload)
}

fn short_record(record_type: &[u8], payload: &[u8]) -> Vec<u8> {
    let mut rec = vec![0xD1, record_type.len() as u8, payload.len() as u8];
    rec.extend_from_slice(record_type);
    rec.extend_from_slice(payload);
    rec
}

/// NDEF data area (pages 4..48) holding `message` in an NDEF TLV.
#[doc(hidden)]
pub fn ndef_tag_memory(message: &[u8]) -> Vec<u8> {
    let mut memory = vec![TLV_NDEF_MESSAGE, message.len() as u8];
    memory.extend_from_slice(message);
    memory.push(TLV_TERMINATOR);
    memory.resize(usize::from(NDEF_PAGE_COUNT) * ULTRALIGHT_PAGE_SIZE, 0x00);
    memory
}

/// Replies for `read_ndef_value`: capability container, then one READ reply
/// per 16-byte chunk of `memory`.
#[doc(hidden)]
pub fn ndef_read_frames(memory: &[u8]) -> Vec<Vec<u8>> {
    let mut frames = vec![read_frame(&[0xE1, 0x10, 0x12, 0x00, 0x01, 0x03, 0xA0, 0x0C, 0x34, 0x03, 0x00, 0xFE, 0x00, 0x00, 0x00, 0x00])];
    frames.extend(memory.chunks(16).map(read_frame));
    frames
}

/// EventSink that records deliveries; can be told to fail every call.
#[doc(hidden)]
#[derive(Debug, Default)]
pub struct RecordingSink {
    /// Delivered events
    pub events: Vec<TagEvent>,
    /// All deliver calls, failed ones included
    pub attempts: usize,
    /// Fail every call
    pub fail: bool,
}

impl RecordingSink {
    /// Sink that accepts everything
    pub fn new() -> Self {
        Self::default()
    }

    /// Sink that rejects everything
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }
}

impl EventSink for RecordingSink {
    fn deliver(&mut self, event: &TagEvent) -> Result<()> {
        self.attempts += 1;
        if self.fail {
            return Err(Error::Delivery {
                status: 500,
                body: "recording sink set to fail".into(),
            });
        }
        self.events.push(event.clone());
        Ok(())
    }
}
