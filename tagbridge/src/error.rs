// tagbridge/src/error.rs

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    // serialport は optional dependency なので feature で切り替える
    #[cfg(feature = "serial")]
    #[error("serial error: {0}")]
    Serial(#[from] serialport::Error),

    #[error("operation timed out")]
    Timeout,

    #[error("no device port configured")]
    NoDevicePort,

    #[error("invalid packet length: expected {expected}, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("checksum mismatch: expected {expected:#04x}, got {actual:#04x}")]
    ChecksumMismatch { expected: u8, actual: u8 },

    #[error("frame format error: {0}")]
    FrameFormat(String),

    #[error("unexpected response code: expected {expected:#04x}, got {actual:#04x}")]
    UnexpectedResponse { expected: u8, actual: u8 },

    #[error("config error: {0}")]
    Config(String),

    #[error("config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[cfg(feature = "http")]
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("event delivery failed: status={status}, body={body}")]
    Delivery { status: u16, body: String },
}

impl Error {
    /// True for faults that end the current reader session (the caller is
    /// expected to reconnect). Protocol and delivery errors never do.
    pub fn is_transport_fault(&self) -> bool {
        match self {
            Error::Io(_) => true,
            #[cfg(feature = "serial")]
            Error::Serial(_) => true,
            _ => false,
        }
    }
}

/// Result alias used across the crate
pub type Result<T> = std::result::Result<T, Error>;
