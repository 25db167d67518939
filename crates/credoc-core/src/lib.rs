//! credoc-core
//!
//! Shared model for the credoc workspace:
//! - closed enumerations for cloud service providers and credential types
//! - credential definitions (variable templates declared by plugins)
//! - the domain error surfaced by the documentation pipeline
//!
//! This crate performs no I/O.

#![forbid(unsafe_code)]

pub mod credential;
pub mod csp;
pub mod errors;

pub use credential::{CredentialType, CredentialVariable, CredentialVariables};
pub use csp::Csp;
pub use errors::{DocsError, DocsResult};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
