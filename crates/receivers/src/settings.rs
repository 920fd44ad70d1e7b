//! Validation Settings
//!
//! Limits applied by the validator on top of the engine's own rules.
//! Loaded from defaults, an optional file, and `RECEIVERS_*` environment
//! variables, in that order of precedence.

use crate::error::SettingsError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

/// Validator limits
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationSettings {
    /// Deepest accepted route nesting, the root being level one.
    ///
    /// Only bounds what is accepted; a route tree deep enough to exhaust the
    /// stack when dropped must never be built in the first place.
    pub max_route_depth: usize,
    /// URL schemes accepted for notifier endpoints
    pub allowed_url_schemes: Vec<String>,
}

impl Default for ValidationSettings {
    fn default() -> Self {
        Self {
            max_route_depth: 128,
            allowed_url_schemes: vec!["http".to_string(), "https".to_string()],
        }
    }
}

impl ValidationSettings {
    /// Create strict settings (shallow trees, TLS endpoints only)
    pub fn strict() -> Self {
        Self {
            max_route_depth: 16,
            allowed_url_schemes: vec!["https".to_string()],
        }
    }

    /// Create lenient settings (deep trees allowed)
    pub fn lenient() -> Self {
        Self {
            max_route_depth: 1024,
            ..Default::default()
        }
    }

    /// Load settings, layering an optional file and the environment over defaults
    pub fn load(path: Option<&Path>) -> Result<Self, SettingsError> {
        let mut builder = config::Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path).required(true));
        }
        builder = builder.add_source(
            config::Environment::with_prefix("RECEIVERS")
                .try_parsing(true)
                .list_separator(",")
                .with_list_parse_key("allowed_url_schemes"),
        );

        let settings: Self = builder.build()?.try_deserialize()?;
        settings.check()?;

        info!(
            max_route_depth = settings.max_route_depth,
            allowed_url_schemes = ?settings.allowed_url_schemes,
            "Validation settings loaded"
        );
        Ok(settings)
    }

    /// Whether `scheme` may be used by notifier endpoints
    pub fn allows_scheme(&self, scheme: &str) -> bool {
        self.allowed_url_schemes
            .iter()
            .any(|allowed| allowed.eq_ignore_ascii_case(scheme))
    }

    fn check(&self) -> Result<(), SettingsError> {
        if self.max_route_depth == 0 {
            return Err(SettingsError::Invalid("max_route_depth must be at least 1"));
        }
        if self.allowed_url_schemes.is_empty() {
            return Err(SettingsError::Invalid("allowed_url_schemes must not be empty"));
        }
        Ok(())
    }
}
