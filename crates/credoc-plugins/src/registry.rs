//! Plugin registry keyed by provider.
//!
//! A `BTreeMap` keeps iteration in `Csp` order so the startup sweep walks
//! providers deterministically.

use std::collections::BTreeMap;
use std::sync::Arc;

use tracing::warn;

use credoc_core::Csp;

use crate::plugin::CspPlugin;

/// Registered provider integrations, at most one per provider.
#[derive(Default, Clone)]
pub struct PluginRegistry {
    plugins: BTreeMap<Csp, Arc<dyn CspPlugin>>,
}

impl PluginRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an integration. Re-registering a provider replaces the
    /// previous integration (logged).
    pub fn register(&mut self, plugin: Arc<dyn CspPlugin>) {
        let csp = plugin.csp();
        if self.plugins.insert(csp, plugin).is_some() {
            warn!(%csp, "replacing previously registered plugin");
        }
    }

    /// Look up the integration for one provider.
    pub fn get(&self, csp: Csp) -> Option<&Arc<dyn CspPlugin>> {
        self.plugins.get(&csp)
    }

    /// Iterate all registered integrations in provider order.
    pub fn iter(&self) -> impl Iterator<Item = (Csp, &Arc<dyn CspPlugin>)> {
        self.plugins.iter().map(|(csp, p)| (*csp, p))
    }

    pub fn len(&self) -> usize {
        self.plugins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plugins.is_empty()
    }
}
