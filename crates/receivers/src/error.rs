//! Configuration Error Types
//!
//! Message texts are matched on by callers and must stay stable.

use thiserror::Error;

/// Any reason a configuration is rejected
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    /// Structural check inherited from the routing engine failed
    #[error(transparent)]
    Engine(#[from] EngineError),

    /// A route points at a receiver the configuration does not define
    #[error("undefined receiver {0:?} used in route")]
    UndefinedReceiver(String),

    /// A notifier field failed its structural check
    #[error(transparent)]
    Field(#[from] FieldError),
}

/// Routing engine structural errors
#[derive(Debug, Clone, Error)]
pub enum EngineError {
    #[error("missing name in receiver")]
    MissingReceiverName,

    #[error("notification config name {0:?} is not unique")]
    DuplicateReceiver(String),

    #[error("root route must specify a default receiver")]
    RootWithoutReceiver,

    #[error("root route must not have any matchers")]
    RootWithMatchers,

    #[error("cannot have continue in root route")]
    RootWithContinue,

    #[error("route tree exceeds maximum depth of {0}")]
    RouteTooDeep(usize),

    #[error("{0:?} is not a valid label name")]
    InvalidMatcherLabel(String),

    #[error("invalid regular expression {pattern:?} in match_re: {source}")]
    InvalidMatchRegex {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("invalid label name {0:?} in group_by")]
    InvalidGroupByLabel(String),

    #[error("duplicated label {0:?} in group_by")]
    DuplicateGroupByLabel(String),

    #[error("cannot have wildcard group_by (`...`) and other labels at the same time")]
    MixedGroupByWildcard,

    #[error("group_interval cannot be zero")]
    ZeroGroupInterval,

    #[error("repeat_interval cannot be zero")]
    ZeroRepeatInterval,

    #[error("resolve_timeout cannot be zero")]
    ZeroResolveTimeout,
}

/// Notifier field errors
#[derive(Debug, Clone, Error)]
pub enum FieldError {
    #[error("unsupported scheme {0:?} for URL")]
    UnsupportedScheme(String),

    #[error("invalid URL {url:?}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("no global Slack API URL set")]
    MissingSlackApiUrl,

    #[error("missing title in Slack field configuration")]
    MissingSlackFieldTitle,

    #[error("missing value in Slack field configuration")]
    MissingSlackFieldValue,

    #[error("missing type in Slack action configuration")]
    MissingSlackActionType,

    #[error("missing text in Slack action configuration")]
    MissingSlackActionText,

    #[error("missing name or url in Slack action configuration")]
    MissingSlackActionNameOrUrl,

    #[error("missing URL in webhook config")]
    MissingWebhookUrl,

    #[error("missing to address in email config")]
    MissingEmailTo,

    #[error("no global SMTP smarthost set")]
    MissingSmtpSmarthost,

    #[error("no global SMTP from set")]
    MissingSmtpFrom,

    #[error("missing service or routing key in PagerDuty config")]
    MissingPagerDutyKey,
}

/// Errors loading [`ValidationSettings`](crate::ValidationSettings)
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Failed to load validation settings: {0}")]
    Load(#[from] config::ConfigError),

    #[error("Invalid validation settings: {0}")]
    Invalid(&'static str),
}
