// tagbridge/src/device/handle.rs

use std::marker::PhantomData;

use crate::card::DetectedCard;
use crate::constants::PN532_HSU_WAKEUP;
use crate::device::SessionTiming;
use crate::protocol::{codec, Command, FirmwareVersion};
use crate::transport::Transport;
use crate::utils::{bytes_to_hex_spaced, pause};
use crate::{Error, Result};

/// Type-state markers
pub struct Connected;
/// Handshake done; scans and reads are available.
pub struct Ready;

/// Reader session over an owned transport. The handshake state is tracked
/// at compile time: detection and block reads exist only on `Reader<Ready>`.
pub struct Reader<State = Connected> {
    transport: Box<dyn Transport>,
    timing: SessionTiming,
    firmware: Option<FirmwareVersion>,
    _state: PhantomData<State>,
}

impl<S> Reader<S> {
    /// Write `frame`, wait `settle_ms`, then drain the reply.
    ///
    /// No reply (transport timeout) is `Ok(None)`. Only I/O faults are
    /// returned as errors.
    fn transceive(&mut self, frame: &[u8], settle_ms: u64) -> Result<Option<Vec<u8>>> {
        self.transport.clear_input()?;
        self.transport.send(frame)?;
        pause(settle_ms);

        match self.transport.receive(self.timing.response_timeout_ms) {
            Ok(raw) => {
                log::trace!("rx {}", bytes_to_hex_spaced(&raw));
                Ok(Some(raw))
            }
            Err(Error::Timeout) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Delays this session was created with
    pub fn timing(&self) -> SessionTiming {
        self.timing
    }
}

impl Reader<Connected> {
    /// Create a session from an existing Transport instance. This is
    /// primarily intended for tests where a MockTransport is provided.
    pub fn new_with_transport(transport: Box<dyn Transport>, timing: SessionTiming) -> Self {
        Self {
            transport,
            timing,
            firmware: None,
            _state: PhantomData,
        }
    }

    /// Open the serial port. A failure leaves nothing behind; the caller
    /// decides when to try again.
    #[cfg(feature = "serial")]
    pub fn open(port: &str, baudrate: u32, timing: SessionTiming) -> Result<Self> {
        let transport =
            crate::transport::SerialTransport::open(port, baudrate, timing.response_timeout_ms)?;
        Ok(Self::new_with_transport(Box::new(transport), timing))
    }

    /// Wakeup, firmware query and SAM configuration.
    ///
    /// Every step is best effort: a missing or garbled reply is logged and
    /// the session becomes Ready anyway. I/O faults abort the handshake.
    pub fn handshake(mut self) -> Result<Reader<Ready>> {
        let timing = self.timing;

        // ウェイクアップ応答は読み捨て
        if let Some(raw) = self.transceive(&PN532_HSU_WAKEUP, timing.wakeup_settle_ms)? {
            log::debug!("wakeup drained {} bytes", raw.len());
        }

        let fw_cmd = Command::GetFirmwareVersion;
        let reply = self.transceive(&codec::encode_command_frame(&fw_cmd), timing.firmware_settle_ms)?;
        self.firmware = reply.as_deref().and_then(|raw| {
            let payload = codec::response_payload(&fw_cmd, raw)?;
            crate::protocol::decode_firmware_version(payload)
                .map_err(|e| log::debug!("firmware reply not decodable: {}", e))
                .ok()
        });
        match &self.firmware {
            Some(fw) => log::info!("reader firmware {}", fw),
            None => log::warn!("no firmware reply; continuing anyway"),
        }

        let sam = Command::sam_normal_mode();
        if self
            .transceive(&codec::encode_command_frame(&sam), timing.config_settle_ms)?
            .is_none()
        {
            log::debug!("no reply to SAM configuration");
        }

        Ok(Reader {
            transport: self.transport,
            timing: self.timing,
            firmware: self.firmware,
            _state: PhantomData,
        })
    }
}

impl Reader<Ready> {
    /// Firmware version reported during the handshake, if any.
    pub fn firmware(&self) -> Option<FirmwareVersion> {
        self.firmware
    }

    /// Issue InListPassiveTarget and return whatever bytes came back.
    pub fn detect_target(&mut self) -> Result<Option<Vec<u8>>> {
        let frame = codec::encode_command_frame(&Command::detect_type_a());
        let settle = self.timing.detect_settle_ms;
        self.transceive(&frame, settle)
    }

    /// Issue a 4-page READ at `block` through InDataExchange and return the
    /// raw reply.
    pub fn read_block(&mut self, target_id: u8, block: u8) -> Result<Option<Vec<u8>>> {
        let frame = codec::encode_command_frame(&Command::mifare_read(target_id, block));
        let settle = self.timing.read_settle_ms;
        self.transceive(&frame, settle)
    }

    /// Detection plus parsing: `Ok(None)` means no card this poll.
    pub fn scan(&mut self) -> Result<Option<DetectedCard>> {
        let Some(raw) = self.detect_target()? else {
            return Ok(None);
        };
        let card = codec::response_payload(&Command::detect_type_a(), &raw)
            .and_then(crate::protocol::parse_detection);
        Ok(card)
    }
}
