//! Configuration Root
//!
//! One tenant-local or shared snapshot of the routing engine configuration.

use crate::receiver::Receiver;
use routing::Route;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Engine-wide defaults
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GlobalConfig {
    /// Time after which an alert without updates is declared resolved
    #[serde(with = "humantime_serde")]
    pub resolve_timeout: Duration,

    /// Fallback API URL for Slack notifiers without their own
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slack_api_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub smtp_from: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub smtp_smarthost: Option<String>,

    pub smtp_hello: String,

    pub smtp_require_tls: bool,

    pub pagerduty_url: String,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            resolve_timeout: Duration::from_secs(5 * 60),
            slack_api_url: None,
            smtp_from: None,
            smtp_smarthost: None,
            smtp_hello: "localhost".to_string(),
            smtp_require_tls: true,
            pagerduty_url: "https://events.pagerduty.com/v2/enqueue".to_string(),
        }
    }
}

/// Routing tree plus the receivers it delivers to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Engine defaults; `None` uses [`GlobalConfig::default`]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub global: Option<GlobalConfig>,

    /// Root of the routing tree
    pub route: Route,

    /// Receivers, unique by name
    #[serde(default)]
    pub receivers: Vec<Receiver>,
}

impl Config {
    /// Create a config with no receivers
    pub fn new(route: Route) -> Self {
        Self {
            global: None,
            route,
            receivers: Vec::new(),
        }
    }

    /// Global settings in effect, falling back to engine defaults
    pub fn effective_global(&self) -> GlobalConfig {
        self.global.clone().unwrap_or_default()
    }

    /// Find a receiver by exact name
    pub fn get_receiver(&self, name: &str) -> Option<&Receiver> {
        self.registry().get_receiver(name)
    }

    /// Position of the first top-level child route sending to `name`
    pub fn get_route_idx(&self, name: &str) -> Option<usize> {
        self.registry().get_route_idx(name)
    }
}
