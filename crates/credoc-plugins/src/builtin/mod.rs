//! Built-in provider integrations.
//!
//! Included with the `builtin` feature. Each module declares the credential
//! variable templates one provider accepts; the templates are static data,
//! no I/O is performed.

#![cfg(feature = "builtin")]

pub mod flexibleengine;
pub mod huawei;
pub mod openstack;

use crate::registry::PluginRegistry;

/// Register all built-in integrations into the provided registry.
pub fn register_all(registry: &mut PluginRegistry) {
    // Register in a stable order (even though the registry is ordered).
    // This keeps logs and debugging consistent.
    huawei::register(registry);
    flexibleengine::register(registry);
    openstack::register(registry);
}
