//! Application configuration model.
//!
//! Loaded from `config.toml` in the Crezia config directory. Every section
//! falls back to its defaults, so an empty or partial file is valid.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::account::DEFAULT_FREE_DAILY_LIMIT;

/// Root of `config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CreziaConfig {
    pub latency: LatencySettings,
    pub quota: QuotaSettings,
    pub logging: LogSettings,
}

/// Simulated network latency for each deferred step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LatencySettings {
    pub login_delay_ms: u64,
    pub signup_delay_ms: u64,
    pub tool_delay_ms: u64,
}

impl LatencySettings {
    /// All delays set to zero.
    pub fn none() -> Self {
        Self {
            login_delay_ms: 0,
            signup_delay_ms: 0,
            tool_delay_ms: 0,
        }
    }

    pub fn login_delay(&self) -> Duration {
        Duration::from_millis(self.login_delay_ms)
    }

    pub fn signup_delay(&self) -> Duration {
        Duration::from_millis(self.signup_delay_ms)
    }

    pub fn tool_delay(&self) -> Duration {
        Duration::from_millis(self.tool_delay_ms)
    }
}

impl Default for LatencySettings {
    fn default() -> Self {
        Self {
            login_delay_ms: 1000,
            signup_delay_ms: 1000,
            tool_delay_ms: 2000,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuotaSettings {
    /// Daily limit assigned to newly registered accounts.
    pub free_daily_limit: u32,
}

impl Default for QuotaSettings {
    fn default() -> Self {
        Self {
            free_daily_limit: DEFAULT_FREE_DAILY_LIMIT,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogSettings {
    /// Default filter directive; `RUST_LOG` takes precedence.
    pub level: String,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}
