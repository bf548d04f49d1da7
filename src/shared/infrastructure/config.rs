//! Service configuration read from the environment.
use std::net::SocketAddr;
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
pub const DEFAULT_SENDER: &str = "noreply@mice-attendance.local";
pub const DEFAULT_NOTIFIER_TIMEOUT_MS: u64 = 5_000;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid {key}: {value}")]
    Invalid { key: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotifierConfig {
    /// Relay endpoint that accepts JSON messages.
    pub url: String,
    pub sender: String,
    pub timeout: Duration,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    /// `None` disables delivery; messages are only logged.
    pub notifier: Option<NotifierConfig>,
}

impl AppConfig {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `MICE_BIND_ADDR` - listen address (default: 0.0.0.0:8080)
    /// - `MICE_NOTIFIER_URL` - mail relay endpoint (optional)
    /// - `MICE_NOTIFIER_SENDER` - sender address (default: noreply@mice-attendance.local)
    /// - `MICE_NOTIFIER_TIMEOUT_MS` - relay request timeout (default: 5000)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let raw_addr = lookup("MICE_BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = raw_addr.parse().map_err(|_| ConfigError::Invalid {
            key: "MICE_BIND_ADDR",
            value: raw_addr.clone(),
        })?;

        let notifier = match lookup("MICE_NOTIFIER_URL").filter(|url| !url.trim().is_empty()) {
            None => None,
            Some(url) => {
                let timeout_ms = match lookup("MICE_NOTIFIER_TIMEOUT_MS") {
                    None => DEFAULT_NOTIFIER_TIMEOUT_MS,
                    Some(raw) => raw.parse().map_err(|_| ConfigError::Invalid {
                        key: "MICE_NOTIFIER_TIMEOUT_MS",
                        value: raw.clone(),
                    })?,
                };
                Some(NotifierConfig {
                    url: url.trim().to_string(),
                    sender: lookup("MICE_NOTIFIER_SENDER")
                        .unwrap_or_else(|| DEFAULT_SENDER.to_string()),
                    timeout: Duration::from_millis(timeout_ms),
                })
            }
        };

        Ok(Self {
            bind_addr,
            notifier,
        })
    }
}
