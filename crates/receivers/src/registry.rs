//! Receiver Registry
//!
//! Name index over one configuration snapshot. Built per `Config` and
//! dropped after use; never shared between tenants.

use crate::model::Config;
use crate::receiver::Receiver;
use routing::Route;
use std::collections::HashMap;

/// Borrowed lookup table for a single [`Config`]
#[derive(Debug)]
pub struct ReceiverRegistry<'a> {
    receivers: HashMap<&'a str, &'a Receiver>,
    route: &'a Route,
}

impl<'a> ReceiverRegistry<'a> {
    /// Index the receivers of `config`. When names repeat the first one wins.
    pub fn new(config: &'a Config) -> Self {
        let mut receivers = HashMap::with_capacity(config.receivers.len());
        for receiver in &config.receivers {
            receivers.entry(receiver.name.as_str()).or_insert(receiver);
        }

        Self {
            receivers,
            route: &config.route,
        }
    }

    /// Exact, case-sensitive lookup
    pub fn get_receiver(&self, name: &str) -> Option<&'a Receiver> {
        self.receivers.get(name).copied()
    }

    /// Position of the first top-level child route sending to `name`
    pub fn get_route_idx(&self, name: &str) -> Option<usize> {
        self.route.routes.iter().position(|route| route.receiver == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.receivers.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.receivers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.receivers.is_empty()
    }
}

impl Config {
    /// Build a registry over this configuration
    pub fn registry(&self) -> ReceiverRegistry<'_> {
        ReceiverRegistry::new(self)
    }
}
