//! Routing Engine Structural Checks
//!
//! Rules the routing engine enforces when it loads a configuration. They run
//! before receiver references and notifier fields are looked at.

use crate::error::EngineError;
use crate::model::Config;
use crate::settings::ValidationSettings;
use regex::Regex;
use routing::Route;
use std::collections::HashSet;
use std::time::Duration;

/// `group_by` value meaning "group by every label"
const GROUP_BY_ALL: &str = "...";

/// Run every engine rule, stopping at the first violation
pub(crate) fn check(config: &Config, settings: &ValidationSettings) -> Result<(), EngineError> {
    check_receiver_names(config)?;
    check_root(&config.route)?;

    for (depth, route) in config.route.walk() {
        if depth >= settings.max_route_depth {
            return Err(EngineError::RouteTooDeep(settings.max_route_depth));
        }
        check_route(route)?;
    }

    if let Some(global) = &config.global {
        if global.resolve_timeout == Duration::ZERO {
            return Err(EngineError::ZeroResolveTimeout);
        }
    }
    Ok(())
}

fn check_receiver_names(config: &Config) -> Result<(), EngineError> {
    let mut seen = HashSet::with_capacity(config.receivers.len());
    for receiver in &config.receivers {
        if receiver.name.is_empty() {
            return Err(EngineError::MissingReceiverName);
        }
        if !seen.insert(receiver.name.as_str()) {
            return Err(EngineError::DuplicateReceiver(receiver.name.clone()));
        }
    }
    Ok(())
}

fn check_root(root: &Route) -> Result<(), EngineError> {
    if root.receiver.is_empty() {
        return Err(EngineError::RootWithoutReceiver);
    }
    if root.has_matchers() {
        return Err(EngineError::RootWithMatchers);
    }
    if root.continue_matching {
        return Err(EngineError::RootWithContinue);
    }
    Ok(())
}

fn check_route(route: &Route) -> Result<(), EngineError> {
    for label in route.matchers.keys().chain(route.match_re.keys()) {
        if !is_valid_label_name(label) {
            return Err(EngineError::InvalidMatcherLabel(label.clone()));
        }
    }

    for pattern in route.match_re.values() {
        // The engine anchors every pattern on both ends.
        Regex::new(&format!("^(?:{pattern})$")).map_err(|source| {
            EngineError::InvalidMatchRegex {
                pattern: pattern.clone(),
                source,
            }
        })?;
    }

    check_group_by(&route.group_by)?;

    if route.group_interval == Some(Duration::ZERO) {
        return Err(EngineError::ZeroGroupInterval);
    }
    if route.repeat_interval == Some(Duration::ZERO) {
        return Err(EngineError::ZeroRepeatInterval);
    }
    Ok(())
}

fn check_group_by(labels: &[String]) -> Result<(), EngineError> {
    let mut seen = HashSet::with_capacity(labels.len());
    for label in labels {
        if label == GROUP_BY_ALL {
            if labels.len() > 1 {
                return Err(EngineError::MixedGroupByWildcard);
            }
            continue;
        }
        if !is_valid_label_name(label) {
            return Err(EngineError::InvalidGroupByLabel(label.clone()));
        }
        if !seen.insert(label.as_str()) {
            return Err(EngineError::DuplicateGroupByLabel(label.clone()));
        }
    }
    Ok(())
}

/// Label names match `[a-zA-Z_][a-zA-Z0-9_]*`
fn is_valid_label_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}
