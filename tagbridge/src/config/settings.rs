// tagbridge/src/config/settings.rs

use crate::card::BulkReadPolicy;
use crate::config::{require_non_empty, ConfigSource};
use crate::constants::DEFAULT_BAUDRATE;
use crate::device::SessionTiming;
use crate::ndef::TlvScanOptions;
use crate::types::PayloadMode;
use crate::utils::secs_f64_to_ms;
use crate::{Error, Result};

/// Placeholders written into a fresh config file
const PLACEHOLDER_HOST: &str = "YOUR_HA_IP_ADDRESS";
const PLACEHOLDER_TOKEN: &str = "YOUR_LONG_LIVED_ACCESS_TOKEN";

/// `[nfc_reader]` section
#[derive(Debug, Clone, PartialEq)]
pub struct ReaderSettings {
    /// Serial device; `None` when blank
    pub port: Option<String>,
    /// Serial baud rate
    pub baudrate: u32,
    /// Response timeout (`timeout` in seconds)
    pub timeout_ms: u64,
    /// Sent as `device_id`
    pub reader_id: String,
    /// `payload_type`: ndef or uuid
    pub payload_mode: PayloadMode,
    /// Pause between scans
    pub poll_interval_ms: u64,
}

impl ReaderSettings {
    /// Configured port; `NoDevicePort` if none.
    pub fn require_port(&self) -> Result<&str> {
        self.port.as_deref().ok_or(Error::NoDevicePort)
    }

    /// Default settle delays with the configured response timeout
    pub fn session_timing(&self) -> SessionTiming {
        SessionTiming::default().with_response_timeout(self.timeout_ms)
    }
}

/// `[home_assistant]` section
#[derive(Debug, Clone, PartialEq)]
pub struct HomeAssistantSettings {
    /// Home Assistant host name or address
    pub host: String,
    /// Home Assistant HTTP port
    pub port: u16,
    /// Long-lived access token
    pub token: Option<String>,
}

impl HomeAssistantSettings {
    /// `http://host:port`
    pub fn base_url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }

    /// Token, rejecting a missing value or the placeholder.
    pub fn require_token(&self) -> Result<&str> {
        match self.token.as_deref() {
            Some(t) if !t.trim().is_empty() && t != PLACEHOLDER_TOKEN => Ok(t),
            _ => Err(Error::Config(
                "home_assistant.token is not set (create a long-lived access token)".into(),
            )),
        }
    }

    /// Host, rejecting the placeholder.
    pub fn require_host(&self) -> Result<&str> {
        if self.host == PLACEHOLDER_HOST {
            return Err(Error::Config("home_assistant.host is still the placeholder".into()));
        }
        Ok(&self.host)
    }
}

/// Everything the daemon needs, resolved from a `ConfigSource`.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// Serial reader
    pub reader: ReaderSettings,
    /// Event target
    pub home_assistant: HomeAssistantSettings,
    /// `critical_bytes` / `min_partial_bytes` overrides
    pub bulk_read: BulkReadPolicy,
    /// Lenient TLV scan parameters
    pub tlv_scan: TlvScanOptions,
}

impl Settings {
    /// Resolve every key, falling back to defaults for missing or malformed values.
    pub fn from_source(source: &dyn ConfigSource) -> Result<Self> {
        let port = Some(source.get_str("nfc_reader.port", ""))
            .map(|p| p.trim().to_string())
            .filter(|p| !p.is_empty());

        let baudrate = u32::try_from(source.get_u64("nfc_reader.baudrate", u64::from(DEFAULT_BAUDRATE)))
            .map_err(|_| Error::Config("nfc_reader.baudrate out of range".into()))?;

        let payload_raw = source.get_str("nfc_reader.payload_type", "ndef");
        let payload_mode = PayloadMode::parse(&payload_raw).unwrap_or_else(|| {
            log::warn!("unknown nfc_reader.payload_type {:?}; using ndef", payload_raw);
            PayloadMode::Ndef
        });

        let reader_id = require_non_empty(
            "nfc_reader.reader_id",
            source.get_str("nfc_reader.reader_id", "nfc_reader_main"),
        )?;

        let ha_port = u16::try_from(source.get_u64("home_assistant.port", 8123))
            .map_err(|_| Error::Config("home_assistant.port out of range".into()))?;
        let token = Some(source.get_str("home_assistant.token", ""))
            .filter(|t| !t.trim().is_empty());

        let defaults = BulkReadPolicy::default();
        let bulk_read = BulkReadPolicy {
            critical_bytes: source.get_u64("nfc_reader.critical_bytes", defaults.critical_bytes as u64)
                as usize,
            min_partial_bytes: source
                .get_u64("nfc_reader.min_partial_bytes", defaults.min_partial_bytes as u64)
                as usize,
            ..defaults
        };

        Ok(Self {
            reader: ReaderSettings {
                port,
                baudrate,
                timeout_ms: secs_f64_to_ms(source.get_f64("nfc_reader.timeout", 1.0)),
                reader_id,
                payload_mode,
                poll_interval_ms: source.get_u64("nfc_reader.poll_interval_ms", 200),
            },
            home_assistant: HomeAssistantSettings {
                host: source.get_str("home_assistant.host", "localhost"),
                port: ha_port,
                token,
            },
            bulk_read,
            tlv_scan: TlvScanOptions::default(),
        })
    }
}
