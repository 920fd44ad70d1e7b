//! Receivers and Notifier Configurations

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A named bundle of notifier configurations a route can target.
///
/// A receiver without notifiers is accepted but delivers nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Receiver {
    pub name: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub slack_configs: Vec<SlackConfig>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub webhook_configs: Vec<WebhookConfig>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub email_configs: Vec<EmailConfig>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub pagerduty_configs: Vec<PagerDutyConfig>,
}

impl Receiver {
    /// Create a receiver with no notifiers
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// True when no notifier is configured
    pub fn is_inert(&self) -> bool {
        self.slack_configs.is_empty()
            && self.webhook_configs.is_empty()
            && self.email_configs.is_empty()
            && self.pagerduty_configs.is_empty()
    }
}

/// Slack notifier
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SlackConfig {
    /// Incoming webhook URL; empty falls back to the global one
    pub api_url: String,
    pub channel: String,
    pub username: String,
    pub color: String,
    pub title: String,
    pub text: String,
    pub icon_emoji: String,
    pub icon_url: String,
    pub fields: Vec<SlackField>,
    pub actions: Vec<SlackAction>,
    pub send_resolved: bool,
}

/// Button attached to a Slack message
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SlackAction {
    #[serde(rename = "type")]
    pub action_type: String,
    pub text: String,
    pub url: String,
    pub style: String,
    pub name: String,
    pub value: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SlackField {
    pub title: String,
    pub value: String,
    pub short: Option<bool>,
}

/// Generic HTTP webhook notifier
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WebhookConfig {
    pub url: String,
    pub send_resolved: bool,
    /// Maximum alerts per message, 0 for unlimited
    pub max_alerts: u32,
}

/// Email notifier. Empty `from`/`smarthost` fall back to the global SMTP settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmailConfig {
    pub to: String,
    pub from: String,
    pub smarthost: String,
    pub hello: String,
    pub auth_username: String,
    pub auth_identity: String,
    pub auth_password: String,
    pub headers: BTreeMap<String, String>,
    pub html: String,
    pub text: String,
    pub require_tls: Option<bool>,
    pub send_resolved: bool,
}

/// PagerDuty notifier
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PagerDutyConfig {
    /// Events API v1 integration key
    pub service_key: String,
    /// Events API v2 integration key
    pub routing_key: String,
    pub url: String,
    pub client: String,
    pub client_url: String,
    pub description: String,
    pub severity: String,
    pub send_resolved: bool,
}
