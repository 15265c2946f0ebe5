// tagbridge/src/delivery/home_assistant.rs
//! Home Assistant REST API: `tag_scanned` events and a connectivity check.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::StatusCode;

use crate::config::HomeAssistantSettings;
use crate::delivery::{EventSink, TagEvent};
use crate::{Error, Result};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);
const TAG_SCANNED_PATH: &str = "/api/events/tag_scanned";
const API_ROOT_PATH: &str = "/api/";

/// Posts `tag_scanned` events with a bearer token.
pub struct HomeAssistantSink {
    client: Client,
    base_url: String,
    token: String,
}

impl HomeAssistantSink {
    /// Client for `base_url` (trailing slash ignored) with a 5 s request timeout.
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Result<Self> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: token.into(),
        })
    }

    /// Build from settings; a missing or placeholder token is a config error.
    pub fn from_settings(settings: &HomeAssistantSettings) -> Result<Self> {
        let token = settings.require_token()?;
        settings.require_host()?;
        Self::new(settings.base_url(), token)
    }

    /// Full `tag_scanned` endpoint URL
    pub fn events_url(&self) -> String {
        format!("{}{}", self.base_url, TAG_SCANNED_PATH)
    }

    /// `GET /api/` with the bearer token; Ok only on HTTP 200.
    pub fn check_connection(&self) -> Result<()> {
        let resp = self
            .client
            .get(format!("{}{}", self.base_url, API_ROOT_PATH))
            .bearer_auth(&self.token)
            .send()?;
        let status = resp.status();
        if status != StatusCode::OK {
            return Err(Error::Delivery {
                status: status.as_u16(),
                body: resp.text().unwrap_or_default(),
            });
        }
        log::info!("Home Assistant API reachable at {}", self.base_url);
        Ok(())
    }
}

impl EventSink for HomeAssistantSink {
    fn deliver(&mut self, event: &TagEvent) -> Result<()> {
        let resp = self
            .client
            .post(self.events_url())
            .bearer_auth(&self.token)
            .json(event)
            .send()?;
        let status = resp.status();
        if status != StatusCode::OK {
            return Err(Error::Delivery {
                status: status.as_u16(),
                body: resp.text().unwrap_or_default(),
            });
        }
        log::info!("fired tag_scanned with tag_id {}", event.tag_id);
        Ok(())
    }
}
