//! Wire Format Translation
//!
//! `RouteJsonWrapper` is what API clients send and receive: durations are
//! plain strings and an empty string means "not provided". It is always
//! translated into a [`Route`] before use.

use crate::duration::{format_duration, parse_duration};
use crate::error::ParseError;
use crate::route::Route;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::time::Duration;
use tracing::debug;

/// JSON-friendly twin of [`Route`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteJsonWrapper {
    #[serde(default, alias = "Receiver", skip_serializing_if = "String::is_empty")]
    pub receiver: String,

    #[serde(
        rename = "group_by",
        alias = "GroupByStr",
        default,
        skip_serializing_if = "Vec::is_empty"
    )]
    pub group_by_str: Vec<String>,

    #[serde(
        rename = "match",
        alias = "Match",
        default,
        skip_serializing_if = "BTreeMap::is_empty"
    )]
    pub matchers: BTreeMap<String, String>,

    #[serde(default, alias = "MatchRE", skip_serializing_if = "BTreeMap::is_empty")]
    pub match_re: BTreeMap<String, String>,

    #[serde(
        rename = "continue",
        alias = "Continue",
        default,
        skip_serializing_if = "std::ops::Not::not"
    )]
    pub continue_matching: bool,

    #[serde(default, alias = "Routes", skip_serializing_if = "Vec::is_empty")]
    pub routes: Vec<RouteJsonWrapper>,

    #[serde(default, alias = "GroupWait", skip_serializing_if = "String::is_empty")]
    pub group_wait: String,

    #[serde(default, alias = "GroupInterval", skip_serializing_if = "String::is_empty")]
    pub group_interval: String,

    #[serde(default, alias = "RepeatInterval", skip_serializing_if = "String::is_empty")]
    pub repeat_interval: String,
}

impl RouteJsonWrapper {
    /// Translate into the native route tree.
    ///
    /// The first malformed duration anywhere in the tree aborts translation.
    pub fn to_native_route(&self) -> Result<Route, ParseError> {
        let group_wait = parse_optional(&self.group_wait)?;
        let group_interval = parse_optional(&self.group_interval)?;
        let repeat_interval = parse_optional(&self.repeat_interval)?;

        let routes = self
            .routes
            .iter()
            .map(RouteJsonWrapper::to_native_route)
            .collect::<Result<Vec<_>, _>>()?;

        debug!(
            receiver = %self.receiver,
            children = routes.len(),
            "Translated wire route"
        );

        Ok(Route {
            receiver: self.receiver.clone(),
            group_by: self.group_by_str.clone(),
            matchers: self.matchers.clone(),
            match_re: self.match_re.clone(),
            continue_matching: self.continue_matching,
            routes,
            group_wait,
            group_interval,
            repeat_interval,
        })
    }

    /// Build the wire form of a native route, children included
    pub fn from_native_route(route: &Route) -> Self {
        Self {
            receiver: route.receiver.clone(),
            group_by_str: route.group_by.clone(),
            matchers: route.matchers.clone(),
            match_re: route.match_re.clone(),
            continue_matching: route.continue_matching,
            routes: route.routes.iter().map(Self::from_native_route).collect(),
            group_wait: format_optional(route.group_wait),
            group_interval: format_optional(route.group_interval),
            repeat_interval: format_optional(route.repeat_interval),
        }
    }
}

impl From<&Route> for RouteJsonWrapper {
    fn from(route: &Route) -> Self {
        Self::from_native_route(route)
    }
}

impl TryFrom<&RouteJsonWrapper> for Route {
    type Error = ParseError;

    fn try_from(wrapper: &RouteJsonWrapper) -> Result<Self, Self::Error> {
        wrapper.to_native_route()
    }
}

fn parse_optional(raw: &str) -> Result<Option<Duration>, ParseError> {
    if raw.is_empty() {
        return Ok(None);
    }
    parse_duration(raw).map(Some)
}

fn format_optional(duration: Option<Duration>) -> String {
    duration.map(format_duration).unwrap_or_default()
}
