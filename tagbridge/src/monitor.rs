// tagbridge/src/monitor.rs
//! Poll loop: scan, track presence, deliver once per presentation.

use std::sync::atomic::{AtomicBool, Ordering};

use crate::card::{BulkReadPolicy, DetectedCard};
use crate::config::Settings;
use crate::delivery::{EventSink, TagEvent};
use crate::device::{Reader, Ready};
use crate::ndef::{is_usable_tag_value, TlvScanOptions};
use crate::presence::{PresenceEvent, PresenceState};
use crate::types::PayloadMode;
use crate::utils::pause;
use crate::Result;

/// Poll loop parameters
#[derive(Debug, Clone, PartialEq)]
pub struct MonitorConfig {
    /// Sent with every event
    pub device_id: String,
    /// What becomes the `tag_id`
    pub payload_mode: PayloadMode,
    /// Pause between polls
    pub poll_interval_ms: u64,
    /// Retry and partial-read policy for NDEF reads
    pub bulk_read: BulkReadPolicy,
    /// NDEF TLV scan leniency
    pub tlv_scan: TlvScanOptions,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            device_id: "nfc_reader_main".to_string(),
            payload_mode: PayloadMode::Ndef,
            poll_interval_ms: 200,
            bulk_read: BulkReadPolicy::default(),
            tlv_scan: TlvScanOptions::default(),
        }
    }
}

impl MonitorConfig {
    /// Loop parameters from resolved settings
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            device_id: settings.reader.reader_id.clone(),
            payload_mode: settings.reader.payload_mode,
            poll_interval_ms: settings.reader.poll_interval_ms,
            bulk_read: settings.bulk_read,
            tlv_scan: settings.tlv_scan,
        }
    }
}

/// Owns the ready reader, the sink and the presence state.
pub struct Monitor<S> {
    reader: Reader<Ready>,
    sink: S,
    presence: PresenceState,
    config: MonitorConfig,
}

impl<S: EventSink> Monitor<S> {
    /// Start with an empty field.
    pub fn new(reader: Reader<Ready>, sink: S, config: MonitorConfig) -> Self {
        Self {
            reader,
            sink,
            presence: PresenceState::new(),
            config,
        }
    }

    /// Presence state after the last poll
    pub fn presence(&self) -> &PresenceState {
        &self.presence
    }

    /// The sink events are delivered to
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Give the sink back, e.g. to reuse it after a reconnect.
    pub fn into_sink(self) -> S {
        self.sink
    }

    /// One scan cycle. Only transport faults are returned as errors.
    pub fn poll_once(&mut self) -> Result<Option<PresenceEvent>> {
        let card = self.reader.scan()?;
        let event = self.presence.observe(card.as_ref().map(|c| &c.uid));

        match (&event, &card) {
            (Some(PresenceEvent::Entered(uid)), Some(card)) => {
                log::info!(
                    "tag entered: uid {} ({}, {})",
                    uid,
                    card.card_type(),
                    card.technology
                );
                self.handle_entered(card)?;
            }
            (Some(PresenceEvent::Left(uid)), _) => log::info!("tag left: uid {}", uid),
            _ => {}
        }
        Ok(event)
    }

    /// Poll until `stop` is set. The flag is checked between iterations
    /// only, so an in-flight read always finishes first.
    pub fn run(&mut self, stop: &AtomicBool) -> Result<()> {
        while !stop.load(Ordering::Relaxed) {
            self.poll_once()?;
            pause(self.config.poll_interval_ms);
        }
        log::info!("monitor stopped");
        Ok(())
    }

    fn handle_entered(&mut self, card: &DetectedCard) -> Result<()> {
        let Some(tag_id) = self.tag_value(card)? else {
            return Ok(());
        };

        let event = TagEvent::new(tag_id, self.config.device_id.clone());
        // 失敗してもリトライしない（次の Entered まで待つ）
        if let Err(e) = self.sink.deliver(&event) {
            log::warn!("delivery of tag_id {} failed: {}", event.tag_id, e);
        }
        Ok(())
    }

    fn tag_value(&mut self, card: &DetectedCard) -> Result<Option<String>> {
        match self.config.payload_mode {
            PayloadMode::Uuid => Ok(Some(card.uid.to_hex())),
            PayloadMode::Ndef => {
                let value =
                    card.read_ndef_value(&mut self.reader, &self.config.bulk_read, &self.config.tlv_scan)?;
                match value {
                    Some(v) if is_usable_tag_value(&v) => {
                        log::info!("NDEF tag value: {}", v);
                        Ok(Some(v))
                    }
                    Some(v) => {
                        log::debug!("NDEF value {:?} too short to use as tag id", v);
                        Ok(None)
                    }
                    None => {
                        log::info!("no NDEF data on uid {}; nothing delivered", card.uid);
                        Ok(None)
                    }
                }
            }
        }
    }
}
