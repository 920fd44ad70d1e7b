//! Native Route Tree
//!
//! The strongly typed route handed to the routing engine. Durations are
//! optional: `None` leaves the engine default in place, which is not the
//! same as an explicit zero.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::time::Duration;

/// A node in the alert routing tree.
///
/// Drop, clone and equality recurse through `routes`, so trees built in code
/// must stay shallow; validation caps accepted nesting separately.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route {
    /// Name of the receiver alerts matching this node are sent to
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub receiver: String,

    /// Labels alerts are grouped by
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub group_by: Vec<String>,

    /// Exact label matchers
    #[serde(rename = "match", default, skip_serializing_if = "BTreeMap::is_empty")]
    pub matchers: BTreeMap<String, String>,

    /// Regex label matchers
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub match_re: BTreeMap<String, String>,

    /// Keep matching sibling routes after this one matched
    #[serde(rename = "continue", default, skip_serializing_if = "std::ops::Not::not")]
    pub continue_matching: bool,

    /// Child routes, evaluated in order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub routes: Vec<Route>,

    #[serde(default, with = "humantime_serde", skip_serializing_if = "Option::is_none")]
    pub group_wait: Option<Duration>,

    #[serde(default, with = "humantime_serde", skip_serializing_if = "Option::is_none")]
    pub group_interval: Option<Duration>,

    #[serde(default, with = "humantime_serde", skip_serializing_if = "Option::is_none")]
    pub repeat_interval: Option<Duration>,
}

impl Route {
    /// Create a route that sends everything to `receiver`
    pub fn new(receiver: impl Into<String>) -> Self {
        Self {
            receiver: receiver.into(),
            ..Default::default()
        }
    }

    /// Append a child route
    pub fn with_route(mut self, child: Route) -> Self {
        self.routes.push(child);
        self
    }

    /// Depth-first walk over this node and its descendants, parents first.
    ///
    /// Each item carries the node depth, with `self` at depth 0.
    pub fn walk(&self) -> Walk<'_> {
        Walk {
            stack: vec![(0, self)],
        }
    }

    /// Apply `f` to this node and every descendant, parents first
    pub fn for_each_mut<F>(&mut self, mut f: F)
    where
        F: FnMut(&mut Route),
    {
        let mut stack: Vec<&mut Route> = vec![self];
        while let Some(route) = stack.pop() {
            f(route);
            stack.extend(route.routes.iter_mut().rev());
        }
    }

    /// Whether this node carries any label matchers
    pub fn has_matchers(&self) -> bool {
        !self.matchers.is_empty() || !self.match_re.is_empty()
    }
}

/// Pre-order iterator returned by [`Route::walk`]
pub struct Walk<'a> {
    stack: Vec<(usize, &'a Route)>,
}

impl<'a> Iterator for Walk<'a> {
    type Item = (usize, &'a Route);

    fn next(&mut self) -> Option<Self::Item> {
        let (depth, route) = self.stack.pop()?;
        self.stack
            .extend(route.routes.iter().rev().map(|child| (depth + 1, child)));
        Some((depth, route))
    }
}
