// tagbridge/src/delivery/mod.rs

use serde::Serialize;

use crate::Result;

/// Home Assistant REST sink
#[cfg(feature = "http")]
pub mod home_assistant;

#[cfg(feature = "http")]
pub use home_assistant::HomeAssistantSink;

/// Body of a `tag_scanned` event
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagEvent {
    /// Decoded NDEF value or UID hex
    pub tag_id: String,
    /// Reader identifier from config
    pub device_id: String,
}

impl TagEvent {
    /// Event for `tag_id` seen by `device_id`
    pub fn new(tag_id: impl Into<String>, device_id: impl Into<String>) -> Self {
        Self {
            tag_id: tag_id.into(),
            device_id: device_id.into(),
        }
    }
}

/// Receiver of tag events. Called at most once per tag presentation; the
/// caller logs failures and does not retry.
pub trait EventSink {
    fn deliver(&mut self, event: &TagEvent) -> Result<()>;
}

impl<T: EventSink + ?Sized> EventSink for Box<T> {
    fn deliver(&mut self, event: &TagEvent) -> Result<()> {
        (**self).deliver(event)
    }
}
