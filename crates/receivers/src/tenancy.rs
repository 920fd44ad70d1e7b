//! Tenant Namespacing
//!
//! A tenant's receiver names are prefixed with `<tenant>_` before they enter
//! a shared configuration and stripped again on the way out. Securing is not
//! idempotent: callers track whether a name is already prefixed.

use crate::model::Config;
use crate::receiver::Receiver;
use routing::Route;
use tracing::debug;

/// Prefix `name` with the tenant namespace
pub fn secure_name(tenant_id: &str, name: &str) -> String {
    format!("{tenant_id}_{name}")
}

/// Strip one tenant namespace prefix; names without it come back unchanged
pub fn unsecure_name<'a>(tenant_id: &str, name: &'a str) -> &'a str {
    name.strip_prefix(tenant_id)
        .and_then(|rest| rest.strip_prefix('_'))
        .unwrap_or(name)
}

impl Receiver {
    pub fn secure(&mut self, tenant_id: &str) {
        self.name = secure_name(tenant_id, &self.name);
    }

    pub fn unsecure(&mut self, tenant_id: &str) {
        self.name = unsecure_name(tenant_id, &self.name).to_string();
    }
}

/// Namespace every receiver reference in a route tree
pub fn secure_route(route: &mut Route, tenant_id: &str) {
    route.for_each_mut(|node| {
        if !node.receiver.is_empty() {
            node.receiver = secure_name(tenant_id, &node.receiver);
        }
    });
}

/// Remove the tenant namespace from every receiver reference in a route tree
pub fn unsecure_route(route: &mut Route, tenant_id: &str) {
    route.for_each_mut(|node| {
        node.receiver = unsecure_name(tenant_id, &node.receiver).to_string();
    });
}

impl Config {
    /// Namespace all receivers and route references for `tenant_id`
    pub fn secure(&mut self, tenant_id: &str) {
        for receiver in &mut self.receivers {
            receiver.secure(tenant_id);
        }
        secure_route(&mut self.route, tenant_id);
        debug!(tenant_id, receivers = self.receivers.len(), "Secured tenant configuration");
    }

    /// Undo [`Config::secure`] for `tenant_id`
    pub fn unsecure(&mut self, tenant_id: &str) {
        for receiver in &mut self.receivers {
            receiver.unsecure(tenant_id);
        }
        unsecure_route(&mut self.route, tenant_id);
        debug!(tenant_id, receivers = self.receivers.len(), "Unsecured tenant configuration");
    }
}
