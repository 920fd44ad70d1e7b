//! Configuration Validator
//!
//! Rejects a configuration at the first problem found. Engine rules run
//! first, then route references (parents before children), then notifier
//! fields in receiver and declaration order.

use crate::engine;
use crate::error::ConfigError;
use crate::model::Config;
use crate::registry::ReceiverRegistry;
use crate::settings::ValidationSettings;
use routing::Route;
use tracing::{debug, warn};

/// Validator for receiver configurations
#[derive(Debug, Clone, Default)]
pub struct Validator {
    settings: ValidationSettings,
}

impl Validator {
    /// Create a new validator with given settings
    pub fn new(settings: ValidationSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &ValidationSettings {
        &self.settings
    }

    /// Validate a whole configuration without modifying it
    pub fn validate(&self, config: &Config) -> Result<(), ConfigError> {
        engine::check(config, &self.settings)?;

        let registry = ReceiverRegistry::new(config);
        self.validate_references(&config.route, &registry)?;
        self.validate_receivers(config)?;

        debug!(
            receivers = config.receivers.len(),
            routes = config.route.walk().count(),
            "Configuration validated"
        );
        Ok(())
    }

    /// Check that every receiver named in the tree under `route` is defined
    pub fn validate_references(
        &self,
        route: &Route,
        registry: &ReceiverRegistry<'_>,
    ) -> Result<(), ConfigError> {
        for (_, node) in route.walk() {
            if !node.receiver.is_empty() && !registry.contains(&node.receiver) {
                return Err(ConfigError::UndefinedReceiver(node.receiver.clone()));
            }
        }
        Ok(())
    }

    /// Check the notifier fields of every receiver
    pub fn validate_receivers(&self, config: &Config) -> Result<(), ConfigError> {
        let global = config.effective_global();
        for receiver in &config.receivers {
            if receiver.is_inert() {
                warn!(receiver = %receiver.name, "Receiver has no notifiers configured");
                continue;
            }
            for notifier in receiver.notifiers() {
                notifier.validate(&global, &self.settings)?;
            }
        }
        Ok(())
    }
}

impl Config {
    /// Validate with default settings
    pub fn validate(&self) -> Result<(), ConfigError> {
        Validator::default().validate(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{EngineError, FieldError};
    use crate::receiver::{Receiver, SlackAction, SlackConfig, WebhookConfig};
    use crate::GlobalConfig;

    fn sample_route() -> Route {
        Route::new("testReceiver")
            .with_route(Route::new("testReceiver"))
            .with_route(Route::new("slack_receiver"))
    }

    fn sample_slack_receiver() -> Receiver {
        Receiver {
            name: "slack_receiver".into(),
            slack_configs: vec![SlackConfig {
                api_url: "http://slack.com/12345".into(),
                username: "slack_user".into(),
                channel: "slack_alert_channel".into(),
                ..Default::default()
            }],
            ..Default::default()
        }
    }

    #[test]
    fn test_valid_config() {
        let config = Config {
            global: Some(GlobalConfig::default()),
            route: sample_route(),
            receivers: vec![Receiver::new("testReceiver"), sample_slack_receiver()],
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_undefined_receiver() {
        let config = Config {
            global: Some(GlobalConfig::default()),
            route: sample_route(),
            receivers: vec![],
        };
        let err = config.validate().unwrap_err();
        assert_eq!(err.to_string(), r#"undefined receiver "testReceiver" used in route"#);
    }

    #[test]
    fn test_undefined_nested_receiver() {
        let mut route = sample_route();
        route.routes[1].routes.push(Route::new("missing"));
        let config = Config {
            global: None,
            route,
            receivers: vec![Receiver::new("testReceiver"), sample_slack_receiver()],
        };

        assert!(matches!(
            config.validate(),
            Err(ConfigError::UndefinedReceiver(name)) if name == "missing"
        ));
    }

    #[test]
    fn test_parent_reported_before_child() {
        let route = Route::new("default")
            .with_route(Route::new("first_missing").with_route(Route::new("second_missing")));
        let mut config = Config::new(route);
        config.receivers.push(Receiver::new("default"));

        let err = config.validate().unwrap_err();
        assert_eq!(err.to_string(), r#"undefined receiver "first_missing" used in route"#);
    }

    #[test]
    fn test_invalid_slack_url() {
        let config = Config {
            global: Some(GlobalConfig::default()),
            route: Route::new("invalidSlack"),
            receivers: vec![Receiver {
                name: "invalidSlack".into(),
                slack_configs: vec![SlackConfig {
                    api_url: "invalidURL".into(),
                    ..Default::default()
                }],
                ..Default::default()
            }],
        };
        let err = config.validate().unwrap_err();
        assert_eq!(err.to_string(), r#"unsupported scheme "" for URL"#);
    }

    #[test]
    fn test_slack_action_missing_type() {
        let config = Config {
            global: None,
            route: Route::new("invalidSlackAction"),
            receivers: vec![Receiver {
                name: "invalidSlackAction".into(),
                slack_configs: vec![SlackConfig {
                    api_url: "http://slack.com".into(),
                    actions: vec![SlackAction {
                        url: "test.com".into(),
                        text: "test".into(),
                        ..Default::default()
                    }],
                    ..Default::default()
                }],
                ..Default::default()
            }],
        };
        let err = config.validate().unwrap_err();
        assert_eq!(err.to_string(), "missing type in Slack action configuration");
    }

    #[test]
    fn test_engine_errors_come_first() {
        // Duplicate name and bad slack URL: the engine rule wins.
        let mut bad_slack = sample_slack_receiver();
        bad_slack.slack_configs[0].api_url = "invalidURL".into();
        let config = Config {
            global: None,
            route: Route::new("slack_receiver").with_route(Route::new("nowhere")),
            receivers: vec![bad_slack.clone(), bad_slack],
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Engine(EngineError::DuplicateReceiver(_)))
        ));
    }

    #[test]
    fn test_references_before_fields() {
        let mut bad_slack = sample_slack_receiver();
        bad_slack.slack_configs[0].api_url = "invalidURL".into();
        let config = Config {
            global: None,
            route: Route::new("slack_receiver").with_route(Route::new("nowhere")),
            receivers: vec![bad_slack],
        };
        assert!(matches!(config.validate(), Err(ConfigError::UndefinedReceiver(_))));
    }

    #[test]
    fn test_receivers_checked_in_order() {
        let config = Config {
            global: None,
            route: Route::new("a"),
            receivers: vec![
                Receiver {
                    name: "a".into(),
                    webhook_configs: vec![WebhookConfig::default()],
                    ..Default::default()
                },
                Receiver {
                    name: "b".into(),
                    slack_configs: vec![SlackConfig {
                        api_url: "invalidURL".into(),
                        ..Default::default()
                    }],
                    ..Default::default()
                },
            ],
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Field(FieldError::MissingWebhookUrl))
        ));
    }

    #[test]
    fn test_unreferenced_receivers_still_checked() {
        let mut config = Config::new(Route::new("default"));
        config.receivers = vec![
            Receiver::new("default"),
            Receiver {
                name: "unused".into(),
                webhook_configs: vec![WebhookConfig {
                    url: "gopher://old.net".into(),
                    ..Default::default()
                }],
                ..Default::default()
            },
        ];
        let err = config.validate().unwrap_err();
        assert_eq!(err.to_string(), r#"unsupported scheme "gopher" for URL"#);
    }

    #[test]
    fn test_validate_does_not_mutate() {
        let config = Config {
            global: None,
            route: sample_route(),
            receivers: vec![Receiver::new("testReceiver"), sample_slack_receiver()],
        };
        let before = config.clone();
        config.validate().unwrap();
        assert_eq!(config, before);
    }

    #[test]
    fn test_translated_route_validates() {
        let wrapper: routing::RouteJsonWrapper = serde_json::from_str(
            r#"{
                "receiver": "testReceiver",
                "group_by": ["alertname"],
                "routes": [
                    {"receiver": "slack_receiver", "match": {"severity": "critical"}, "repeat_interval": "4h"}
                ]
            }"#,
        )
        .unwrap();

        let config = Config {
            global: None,
            route: wrapper.to_native_route().unwrap(),
            receivers: vec![Receiver::new("testReceiver"), sample_slack_receiver()],
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_strict_settings() {
        let config = Config {
            global: None,
            route: sample_route(),
            receivers: vec![Receiver::new("testReceiver"), sample_slack_receiver()],
        };
        let validator = Validator::new(ValidationSettings::strict());
        assert_eq!(validator.settings(), &ValidationSettings::strict());
        assert!(Validator::default().validate(&config).is_ok());
        assert!(matches!(
            validator.validate(&config),
            Err(ConfigError::Field(FieldError::UnsupportedScheme(scheme))) if scheme == "http"
        ));
    }
}
