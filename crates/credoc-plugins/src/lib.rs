//! credoc-plugins
//!
//! The provider-integration side of credoc:
//! - the `CspPlugin` trait a cloud provider integration implements
//! - the registry the documentation pipeline reads integrations from
//! - built-in integrations (feature: `builtin`)
//!
//! Plugins only *declare* credential definitions; the documentation
//! pipeline never writes through them.

#![forbid(unsafe_code)]

pub mod plugin;
pub mod registry;

#[cfg(feature = "builtin")]
pub mod builtin;

pub use plugin::CspPlugin;
pub use registry::PluginRegistry;

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Convenience: create a registry with all built-in integrations registered.
///
/// This is typically used by the API layer and by tests.
#[cfg(feature = "builtin")]
pub fn default_registry() -> PluginRegistry {
    let mut reg = PluginRegistry::new();
    builtin::register_all(&mut reg);
    reg
}
