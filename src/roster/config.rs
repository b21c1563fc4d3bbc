//! # Configuration
//!
//! Stored as `config.json` in the data directory. Missing fields fall back to
//! their defaults, so an older or hand-trimmed file still loads.
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `notification-ms` | `3000` | How long outcome notices stay alive |
//! | `directory-url` | jsonplaceholder users | Remote directory endpoint |
//! | `directory-limit` | `6` | Entries kept from the remote directory |
//! | `directory-timeout-secs` | `10` | Request timeout for the remote directory |
//! | `log-level` | `info` | trace, debug, info, warn or error |

use crate::directory::{DEFAULT_DIRECTORY_LIMIT, DEFAULT_DIRECTORY_URL, DEFAULT_TIMEOUT_SECS};
use crate::error::{Result, RosterError};
use crate::notify::DEFAULT_DURATION_MS;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use url::Url;

const CONFIG_FILENAME: &str = "config.json";

/// One day.
pub const MAX_NOTIFICATION_MS: u64 = 24 * 60 * 60 * 1000;
/// One hour.
pub const MAX_TIMEOUT_SECS: u64 = 60 * 60;

pub const KEYS: &[&str] = &[
    "notification-ms",
    "directory-url",
    "directory-limit",
    "directory-timeout-secs",
    "log-level",
];

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "kebab-case")]
pub struct RosterConfig {
    pub notification_ms: u64,
    pub directory_url: String,
    pub directory_limit: usize,
    pub directory_timeout_secs: u64,
    pub log_level: String,
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            notification_ms: DEFAULT_DURATION_MS,
            directory_url: DEFAULT_DIRECTORY_URL.to_string(),
            directory_limit: DEFAULT_DIRECTORY_LIMIT,
            directory_timeout_secs: DEFAULT_TIMEOUT_SECS,
            log_level: "info".to_string(),
        }
    }
}

impl RosterConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: RosterConfig = serde_json::from_str(&content)?;
        Ok(config.clamped())
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_dir.join(CONFIG_FILENAME), content)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "notification-ms" => Some(self.notification_ms.to_string()),
            "directory-url" => Some(self.directory_url.clone()),
            "directory-limit" => Some(self.directory_limit.to_string()),
            "directory-timeout-secs" => Some(self.directory_timeout_secs.to_string()),
            "log-level" => Some(self.log_level.clone()),
            _ => None,
        }
    }

    /// Validates and sets a single key.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let value = value.trim();
        match key {
            "notification-ms" => {
                self.notification_ms = parse_bounded(key, value, MAX_NOTIFICATION_MS)?
            }
            "directory-url" => {
                Url::parse(value)
                    .map_err(|e| RosterError::Config(format!("invalid url `{}`: {}", value, e)))?;
                self.directory_url = value.to_string();
            }
            "directory-limit" => {
                self.directory_limit = parse_bounded(key, value, usize::MAX as u64)? as usize
            }
            "directory-timeout-secs" => {
                self.directory_timeout_secs = parse_bounded(key, value, MAX_TIMEOUT_SECS)?
            }
            "log-level" => {
                let level = value.to_ascii_lowercase();
                if !matches!(level.as_str(), "trace" | "debug" | "info" | "warn" | "error") {
                    return Err(RosterError::Config(format!(
                        "unsupported log level `{}`; expected trace|debug|info|warn|error",
                        value
                    )));
                }
                self.log_level = level;
            }
            other => {
                return Err(RosterError::Config(format!("Unknown config key: {}", other)));
            }
        }
        Ok(())
    }

    pub fn notification_ttl(&self) -> chrono::Duration {
        chrono::Duration::milliseconds(self.notification_ms.min(MAX_NOTIFICATION_MS) as i64)
    }

    pub fn directory_timeout(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.directory_timeout_secs.min(MAX_TIMEOUT_SECS))
    }

    /// Pulls hand-edited values back into the ranges `set` accepts.
    fn clamped(mut self) -> Self {
        if self.notification_ms > MAX_NOTIFICATION_MS {
            log::warn!(
                "event=config_load key=notification-ms status=clamped value={}",
                self.notification_ms
            );
            self.notification_ms = MAX_NOTIFICATION_MS;
        }
        if self.directory_timeout_secs > MAX_TIMEOUT_SECS {
            log::warn!(
                "event=config_load key=directory-timeout-secs status=clamped value={}",
                self.directory_timeout_secs
            );
            self.directory_timeout_secs = MAX_TIMEOUT_SECS;
        }
        self
    }
}

fn parse_bounded(key: &str, value: &str, max: u64) -> Result<u64> {
    match value.parse::<u64>() {
        Ok(n) if n > 0 && n <= max => Ok(n),
        _ => Err(RosterError::Config(format!(
            "{} must be an integer from 1 to {}, got `{}`",
            key, max, value
        ))),
    }
}
