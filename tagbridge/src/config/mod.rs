// tagbridge/src/config/mod.rs
//! Key-value configuration: a TOML file, environment overrides, and the
//! resolved `Settings` the binary runs with.

use std::collections::HashMap;
use std::path::Path;

use crate::{Error, Result};

/// Typed settings resolved from a source
pub mod settings;

pub use settings::{HomeAssistantSettings, ReaderSettings, Settings};

/// `get(dotted_key, default)` lookup over some configuration store.
pub trait ConfigSource {
    /// Raw value at `key` (e.g. `nfc_reader.port`), if set.
    fn lookup(&self, key: &str) -> Option<toml::Value>;

    fn get_str(&self, key: &str, default: &str) -> String {
        match self.lookup(key) {
            Some(toml::Value::String(s)) => s,
            Some(toml::Value::Integer(i)) => i.to_string(),
            Some(toml::Value::Float(f)) => f.to_string(),
            Some(toml::Value::Boolean(b)) => b.to_string(),
            Some(other) => {
                log::warn!("config key {} has non-scalar value {}", key, other);
                default.to_string()
            }
            None => default.to_string(),
        }
    }

    fn get_u64(&self, key: &str, default: u64) -> u64 {
        let parsed = match self.lookup(key) {
            None => return default,
            Some(toml::Value::Integer(i)) => u64::try_from(i).ok(),
            Some(toml::Value::String(s)) => s.trim().parse().ok(),
            Some(_) => None,
        };
        parsed.unwrap_or_else(|| {
            log::warn!("config key {} is not an unsigned integer; using {}", key, default);
            default
        })
    }

    fn get_f64(&self, key: &str, default: f64) -> f64 {
        let parsed = match self.lookup(key) {
            None => return default,
            Some(toml::Value::Float(f)) => Some(f),
            Some(toml::Value::Integer(i)) => Some(i as f64),
            Some(toml::Value::String(s)) => s.trim().parse().ok(),
            Some(_) => None,
        };
        parsed.unwrap_or_else(|| {
            log::warn!("config key {} is not a number; using {}", key, default);
            default
        })
    }
}

/// Nested TOML document with dotted-path lookup.
#[derive(Debug, Clone, Default)]
pub struct TomlConfig {
    root: toml::Table,
}

impl TomlConfig {
    /// Parse a TOML document.
    pub fn from_str(content: &str) -> Result<Self> {
        let root: toml::Table = toml::from_str(content)?;
        Ok(Self { root })
    }

    /// Read and parse `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        log::debug!("loaded config from {}", path.display());
        Self::from_str(&content)
    }

    /// Load `path` if it exists, otherwise start empty.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            Self::load(path)
        } else {
            log::info!("{} not found; using defaults and environment", path.display());
            Ok(Self::default())
        }
    }
}

impl ConfigSource for TomlConfig {
    fn lookup(&self, key: &str) -> Option<toml::Value> {
        let mut parts = key.split('.');
        let mut current = self.root.get(parts.next()?)?;
        for part in parts {
            current = current.as_table()?.get(part)?;
        }
        Some(current.clone())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EnvKind {
    Text,
    Integer,
    Float,
}

/// Environment variable -> dotted key
const ENV_KEYS: [(&str, &str, EnvKind); 8] = [
    ("NFC_PORT", "nfc_reader.port", EnvKind::Text),
    ("NFC_BAUDRATE", "nfc_reader.baudrate", EnvKind::Integer),
    ("NFC_TIMEOUT", "nfc_reader.timeout", EnvKind::Float),
    ("NFC_READER_ID", "nfc_reader.reader_id", EnvKind::Text),
    ("NFC_PAYLOAD_TYPE", "nfc_reader.payload_type", EnvKind::Text),
    ("HA_HOST", "home_assistant.host", EnvKind::Text),
    ("HA_PORT", "home_assistant.port", EnvKind::Integer),
    ("HA_TOKEN", "home_assistant.token", EnvKind::Text),
];

/// Values taken from the recognised environment variables.
#[derive(Debug, Clone, Default)]
pub struct EnvConfig {
    values: HashMap<&'static str, toml::Value>,
}

impl EnvConfig {
    /// Snapshot of the process environment
    pub fn from_env() -> Self {
        Self::from_pairs(std::env::vars())
    }

    /// Build from arbitrary (name, value) pairs; unknown names are ignored.
    pub fn from_pairs<I, K, V>(vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut values = HashMap::new();
        for (name, raw) in vars {
            let Some((_, key, kind)) = ENV_KEYS.iter().find(|(n, _, _)| *n == name.as_ref()) else {
                continue;
            };
            let raw = raw.as_ref().trim();
            let value = match kind {
                EnvKind::Text => Some(toml::Value::String(raw.to_string())),
                EnvKind::Integer => raw.parse().ok().map(toml::Value::Integer),
                EnvKind::Float => raw.parse().ok().map(toml::Value::Float),
            };
            match value {
                Some(v) => {
                    values.insert(*key, v);
                }
                None => log::warn!("ignoring {}={:?}: not a number", name.as_ref(), raw),
            }
        }
        Self { values }
    }
}

impl ConfigSource for EnvConfig {
    fn lookup(&self, key: &str) -> Option<toml::Value> {
        self.values.get(key).cloned()
    }
}

/// Ordered sources; the first one that has a key wins.
#[derive(Default)]
pub struct LayeredConfig {
    layers: Vec<Box<dyn ConfigSource>>,
}

impl LayeredConfig {
    /// No layers
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a layer with lower priority than the existing ones.
    pub fn with_layer(mut self, source: impl ConfigSource + 'static) -> Self {
        self.layers.push(Box::new(source));
        self
    }

    /// Environment over `path` (which may be missing).
    pub fn from_file_and_env(path: impl AsRef<Path>) -> Result<Self> {
        let file = TomlConfig::load_or_default(path)?;
        Ok(Self::new().with_layer(EnvConfig::from_env()).with_layer(file))
    }
}

impl ConfigSource for LayeredConfig {
    fn lookup(&self, key: &str) -> Option<toml::Value> {
        self.layers.iter().find_map(|layer| layer.lookup(key))
    }
}

impl ConfigSource for HashMap<String, toml::Value> {
    fn lookup(&self, key: &str) -> Option<toml::Value> {
        self.get(key).cloned()
    }
}

pub(crate) fn require_non_empty(key: &str, value: String) -> Result<String> {
    if value.trim().is_empty() {
        Err(Error::Config(format!("{} must not be empty", key)))
    } else {
        Ok(value)
    }
}
