//! Runtime configuration.
//!
//! Loaded from environment variables with defaults for anything unset or
//! unparseable:
//!
//! | variable | default |
//! |---|---|
//! | `TRACKER_LOG` | `activity_tracker=info,activity_tracker_runtime=info` |
//! | `TRACKER_NOTIFICATIONS` | `true` |
//! | `TRACKER_BROADCAST_CAPACITY` | `16` |

use activity_tracker_runtime::StoreConfig;
use serde::{Deserialize, Serialize};
use std::env;

/// Default tracing filter
pub const DEFAULT_LOG_FILTER: &str = "activity_tracker=info,activity_tracker_runtime=info";

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackerConfig {
    /// `tracing_subscriber::EnvFilter` directive string
    pub log_filter: String,
    /// Whether change notifications are shown
    pub notifications: bool,
    /// Capacity of the store's action broadcast channel
    pub broadcast_capacity: usize,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            notifications: true,
            broadcast_capacity: StoreConfig::default().broadcast_capacity,
        }
    }
}

impl TrackerConfig {
    /// Load configuration from the process environment
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup
    #[must_use]
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        Self {
            log_filter: lookup("TRACKER_LOG")
                .filter(|s| !s.trim().is_empty())
                .unwrap_or(defaults.log_filter),
            notifications: lookup("TRACKER_NOTIFICATIONS")
                .and_then(|s| parse_bool(&s))
                .unwrap_or(defaults.notifications),
            broadcast_capacity: lookup("TRACKER_BROADCAST_CAPACITY")
                .and_then(|s| s.trim().parse().ok())
                .filter(|capacity| *capacity > 0)
                .unwrap_or(defaults.broadcast_capacity),
        }
    }

    /// Store settings derived from this configuration
    #[must_use]
    pub fn store_config(&self) -> StoreConfig {
        StoreConfig::default().with_broadcast_capacity(self.broadcast_capacity)
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
