// tagbridge/src/transport/serial.rs
//! PN532 over HSU (high-speed UART) using the `serialport` crate.

use std::io::{ErrorKind, Read, Write};

use serialport::{ClearBuffer, SerialPort};

use crate::transport::traits::Transport;
use crate::utils::ms;
use crate::{Error, Result};

/// Largest single read; PN532 frames are at most 262 bytes.
const READ_CHUNK: usize = 512;

/// Owned serial port handle
pub struct SerialTransport {
    port: Box<dyn SerialPort>,
    name: String,
}

impl SerialTransport {
    /// Open `port_name` (e.g. `/dev/ttyUSB0`) at `baudrate`, 8N1.
    pub fn open(port_name: &str, baudrate: u32, timeout_ms: u64) -> Result<Self> {
        if port_name.is_empty() {
            return Err(Error::NoDevicePort);
        }
        let port = serialport::new(port_name, baudrate)
            .timeout(ms(timeout_ms))
            .open()?;

        log::info!("opened serial port {} at {} baud", port_name, baudrate);

        Ok(Self {
            port,
            name: port_name.to_string(),
        })
    }

    /// Port name as opened
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Drain every byte currently sitting in the OS buffer.
    fn drain_available(&mut self, out: &mut Vec<u8>) -> Result<()> {
        let mut buf = [0u8; READ_CHUNK];
        loop {
            let pending = self.port.bytes_to_read()? as usize;
            if pending == 0 {
                return Ok(());
            }
            let want = pending.min(READ_CHUNK);
            let n = self.port.read(&mut buf[..want])?;
            if n == 0 {
                return Ok(());
            }
            out.extend_from_slice(&buf[..n]);
        }
    }
}

impl Transport for SerialTransport {
    fn send(&mut self, data: &[u8]) -> Result<()> {
        log::trace!("{} <- {}", self.name, crate::utils::bytes_to_hex_spaced(data));
        self.port.write_all(data)?;
        self.port.flush()?;
        Ok(())
    }

    fn receive(&mut self, timeout_ms: u64) -> Result<Vec<u8>> {
        let mut out = Vec::new();
        self.drain_available(&mut out)?;

        if out.is_empty() {
            // Block for the first byte(s), bounded by the timeout
            self.port.set_timeout(ms(timeout_ms))?;
            let mut buf = [0u8; READ_CHUNK];
            match self.port.read(&mut buf) {
                Ok(n) => out.extend_from_slice(&buf[..n]),
                Err(e) if e.kind() == ErrorKind::TimedOut => return Err(Error::Timeout),
                Err(e) => return Err(e.into()),
            }
            self.drain_available(&mut out)?;
        }

        if out.is_empty() {
            return Err(Error::Timeout);
        }
        log::trace!("{} -> {}", self.name, crate::utils::bytes_to_hex_spaced(&out));
        Ok(out)
    }

    fn clear_input(&mut self) -> Result<()> {
        self.port.clear(ClearBuffer::Input)?;
        Ok(())
    }
}
