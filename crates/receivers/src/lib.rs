//! Alert Receiver Configuration
//!
//! Multi-tenant configuration layer in front of the alert routing engine.
//! Validates that a route tree only references defined receivers and that
//! each notifier is well-formed, and namespaces receiver names per tenant so
//! several tenants can share one engine instance.

mod engine;
mod error;
mod model;
mod notify;
mod receiver;
mod registry;
mod settings;
mod tenancy;
mod validator;

pub use error::{ConfigError, EngineError, FieldError, SettingsError};
pub use model::{Config, GlobalConfig};
pub use notify::Notifier;
pub use receiver::{
    EmailConfig, PagerDutyConfig, Receiver, SlackAction, SlackConfig, SlackField, WebhookConfig,
};
pub use registry::ReceiverRegistry;
pub use settings::ValidationSettings;
pub use tenancy::{secure_name, secure_route, unsecure_name, unsecure_route};
pub use validator::Validator;

pub use routing::{ParseError, Route, RouteJsonWrapper};
