//! Per-Notifier Field Validation
//!
//! Every notifier kind the engine knows is one variant of [`Notifier`], so
//! adding a kind forces a matching validation arm.

use crate::error::FieldError;
use crate::model::GlobalConfig;
use crate::receiver::{
    EmailConfig, PagerDutyConfig, Receiver, SlackAction, SlackConfig, SlackField, WebhookConfig,
};
use crate::settings::ValidationSettings;
use url::Url;

/// Borrowed view of one notifier configuration
#[derive(Debug, Clone, Copy)]
pub enum Notifier<'a> {
    Slack(&'a SlackConfig),
    Webhook(&'a WebhookConfig),
    Email(&'a EmailConfig),
    PagerDuty(&'a PagerDutyConfig),
}

impl Notifier<'_> {
    /// Short name of the notifier kind
    pub fn kind(&self) -> &'static str {
        match self {
            Notifier::Slack(_) => "slack",
            Notifier::Webhook(_) => "webhook",
            Notifier::Email(_) => "email",
            Notifier::PagerDuty(_) => "pagerduty",
        }
    }

    /// Check required fields and endpoint URLs
    pub fn validate(
        &self,
        global: &GlobalConfig,
        settings: &ValidationSettings,
    ) -> Result<(), FieldError> {
        match self {
            Notifier::Slack(slack) => validate_slack(slack, global, settings),
            Notifier::Webhook(webhook) => validate_webhook(webhook, settings),
            Notifier::Email(email) => validate_email(email, global),
            Notifier::PagerDuty(pagerduty) => validate_pagerduty(pagerduty, settings),
        }
    }
}

impl Receiver {
    /// All notifiers of this receiver: slack, webhook, email, then pagerduty,
    /// each kind in declaration order
    pub fn notifiers(&self) -> impl Iterator<Item = Notifier<'_>> {
        self.slack_configs
            .iter()
            .map(Notifier::Slack)
            .chain(self.webhook_configs.iter().map(Notifier::Webhook))
            .chain(self.email_configs.iter().map(Notifier::Email))
            .chain(self.pagerduty_configs.iter().map(Notifier::PagerDuty))
    }
}

/// Parse an endpoint URL and check its scheme.
///
/// Input without any scheme reports the scheme as an empty string.
pub(crate) fn validate_url(raw: &str, settings: &ValidationSettings) -> Result<Url, FieldError> {
    let url = match Url::parse(raw) {
        Ok(url) => url,
        Err(url::ParseError::RelativeUrlWithoutBase) => {
            return Err(FieldError::UnsupportedScheme(String::new()))
        }
        Err(source) => {
            return Err(FieldError::InvalidUrl {
                url: raw.to_string(),
                source,
            })
        }
    };

    if !settings.allows_scheme(url.scheme()) {
        return Err(FieldError::UnsupportedScheme(url.scheme().to_string()));
    }
    Ok(url)
}

fn validate_slack(
    slack: &SlackConfig,
    global: &GlobalConfig,
    settings: &ValidationSettings,
) -> Result<(), FieldError> {
    let api_url = if slack.api_url.is_empty() {
        global
            .slack_api_url
            .as_deref()
            .filter(|url| !url.is_empty())
            .ok_or(FieldError::MissingSlackApiUrl)?
    } else {
        slack.api_url.as_str()
    };
    validate_url(api_url, settings)?;

    if !slack.icon_url.is_empty() {
        validate_url(&slack.icon_url, settings)?;
    }

    slack.fields.iter().try_for_each(validate_slack_field)?;
    slack.actions.iter().try_for_each(validate_slack_action)
}

fn validate_slack_field(field: &SlackField) -> Result<(), FieldError> {
    if field.title.is_empty() {
        return Err(FieldError::MissingSlackFieldTitle);
    }
    if field.value.is_empty() {
        return Err(FieldError::MissingSlackFieldValue);
    }
    Ok(())
}

fn validate_slack_action(action: &SlackAction) -> Result<(), FieldError> {
    if action.action_type.is_empty() {
        return Err(FieldError::MissingSlackActionType);
    }
    if action.text.is_empty() {
        return Err(FieldError::MissingSlackActionText);
    }
    if action.url.is_empty() && action.name.is_empty() {
        return Err(FieldError::MissingSlackActionNameOrUrl);
    }
    Ok(())
}

fn validate_webhook(webhook: &WebhookConfig, settings: &ValidationSettings) -> Result<(), FieldError> {
    if webhook.url.is_empty() {
        return Err(FieldError::MissingWebhookUrl);
    }
    validate_url(&webhook.url, settings).map(drop)
}

fn validate_email(email: &EmailConfig, global: &GlobalConfig) -> Result<(), FieldError> {
    if email.to.is_empty() {
        return Err(FieldError::MissingEmailTo);
    }
    if email.smarthost.is_empty() && is_unset(&global.smtp_smarthost) {
        return Err(FieldError::MissingSmtpSmarthost);
    }
    if email.from.is_empty() && is_unset(&global.smtp_from) {
        return Err(FieldError::MissingSmtpFrom);
    }
    Ok(())
}

fn validate_pagerduty(
    pagerduty: &PagerDutyConfig,
    settings: &ValidationSettings,
) -> Result<(), FieldError> {
    if pagerduty.service_key.is_empty() && pagerduty.routing_key.is_empty() {
        return Err(FieldError::MissingPagerDutyKey);
    }
    if !pagerduty.url.is_empty() {
        validate_url(&pagerduty.url, settings)?;
    }
    Ok(())
}

fn is_unset(value: &Option<String>) -> bool {
    value.as_deref().map_or(true, str::is_empty)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slack(api_url: &str) -> SlackConfig {
        SlackConfig {
            api_url: api_url.into(),
            ..Default::default()
        }
    }

    fn check(notifier: Notifier<'_>) -> Result<(), FieldError> {
        notifier.validate(&GlobalConfig::default(), &ValidationSettings::default())
    }

    #[test]
    fn test_url_scheme() {
        let settings = ValidationSettings::default();
        assert!(validate_url("http://slack.com/12345", &settings).is_ok());
        assert!(validate_url("https://hooks.slack.com", &settings).is_ok());

        let err = validate_url("invalidURL", &settings).unwrap_err();
        assert_eq!(err.to_string(), r#"unsupported scheme "" for URL"#);

        let err = validate_url("ftp://files.local", &settings).unwrap_err();
        assert_eq!(err.to_string(), r#"unsupported scheme "ftp" for URL"#);

        let err = validate_url("http://[::1", &settings).unwrap_err();
        assert!(matches!(err, FieldError::InvalidUrl { .. }));
    }

    #[test]
    fn test_slack_api_url_fallback() {
        let config = slack("");
        let err = check(Notifier::Slack(&config)).unwrap_err();
        assert!(matches!(err, FieldError::MissingSlackApiUrl));

        let global = GlobalConfig {
            slack_api_url: Some("https://hooks.slack.com/global".into()),
            ..Default::default()
        };
        assert!(Notifier::Slack(&config)
            .validate(&global, &ValidationSettings::default())
            .is_ok());
    }

    #[test]
    fn test_slack_actions_checked_in_order() {
        let mut config = slack("http://slack.com");
        config.actions.push(SlackAction {
            url: "test.com".into(),
            text: "test".into(),
            ..Default::default()
        });
        let err = check(Notifier::Slack(&config)).unwrap_err();
        assert_eq!(err.to_string(), "missing type in Slack action configuration");

        config.actions[0] = SlackAction {
            action_type: "button".into(),
            ..Default::default()
        };
        let err = check(Notifier::Slack(&config)).unwrap_err();
        assert!(matches!(err, FieldError::MissingSlackActionText));

        config.actions[0].text = "Silence".into();
        let err = check(Notifier::Slack(&config)).unwrap_err();
        assert!(matches!(err, FieldError::MissingSlackActionNameOrUrl));

        config.actions[0].name = "silence".into();
        assert!(check(Notifier::Slack(&config)).is_ok());
    }

    #[test]
    fn test_slack_fields() {
        let mut config = slack("http://slack.com");
        config.fields.push(SlackField {
            value: "gateway".into(),
            ..Default::default()
        });
        assert!(matches!(
            check(Notifier::Slack(&config)),
            Err(FieldError::MissingSlackFieldTitle)
        ));

        config.fields[0] = SlackField {
            title: "Source".into(),
            ..Default::default()
        };
        assert!(matches!(
            check(Notifier::Slack(&config)),
            Err(FieldError::MissingSlackFieldValue)
        ));
    }

    #[test]
    fn test_webhook() {
        let mut webhook = WebhookConfig::default();
        assert!(matches!(
            check(Notifier::Webhook(&webhook)),
            Err(FieldError::MissingWebhookUrl)
        ));

        webhook.url = "http://test.com".into();
        assert!(check(Notifier::Webhook(&webhook)).is_ok());
    }

    #[test]
    fn test_email_falls_back_to_global_smtp() {
        let email = EmailConfig {
            to: "oncall@example.com".into(),
            ..Default::default()
        };
        assert!(matches!(
            check(Notifier::Email(&email)),
            Err(FieldError::MissingSmtpSmarthost)
        ));

        let global = GlobalConfig {
            smtp_smarthost: Some("smtp.example.com:587".into()),
            smtp_from: Some("alerts@example.com".into()),
            ..Default::default()
        };
        assert!(Notifier::Email(&email)
            .validate(&global, &ValidationSettings::default())
            .is_ok());

        assert!(matches!(
            check(Notifier::Email(&EmailConfig::default())),
            Err(FieldError::MissingEmailTo)
        ));
    }

    #[test]
    fn test_pagerduty_requires_key() {
        let mut pagerduty = PagerDutyConfig::default();
        assert!(matches!(
            check(Notifier::PagerDuty(&pagerduty)),
            Err(FieldError::MissingPagerDutyKey)
        ));

        pagerduty.routing_key = "abc123".into();
        assert!(check(Notifier::PagerDuty(&pagerduty)).is_ok());
    }

    #[test]
    fn test_notifier_order() {
        let receiver = Receiver {
            name: "mixed".into(),
            pagerduty_configs: vec![PagerDutyConfig::default()],
            webhook_configs: vec![WebhookConfig::default()],
            slack_configs: vec![slack("a"), slack("b")],
            ..Default::default()
        };

        let kinds: Vec<&str> = receiver.notifiers().map(|n| n.kind()).collect();
        assert_eq!(kinds, vec!["slack", "slack", "webhook", "pagerduty"]);
    }
}
