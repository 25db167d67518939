//! credoc-gen
//!
//! The credential API documentation pipeline:
//! - deterministic artifact naming scheme
//! - OpenAPI document synthesis from a credential definition
//! - external HTML renderer invocation behind a narrow trait
//! - artifact store helpers for the shared working directory
//! - the orchestrator sequencing synthesize -> render -> serve
//!
//! Filesystem and process work in this crate is synchronous and blocks the
//! calling thread; hosts decide where those calls run.

#![forbid(unsafe_code)]

pub mod generator;
pub mod naming;
pub mod openapi;
pub mod renderer;
pub mod store;

pub use generator::{CredentialDocsGenerator, GeneratorConfig};
pub use renderer::{HtmlRenderer, OpenApiGeneratorCli, RenderOutcome};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
