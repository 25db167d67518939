//! Documentation orchestrator.
//!
//! Sequences synthesize -> write JSON -> render -> rename HTML -> delete
//! JSON for one (provider, credential type) key, sweeps every registered
//! integration at startup, and resolves served URLs with a
//! generate-or-reuse policy.
//!
//! Callers for the same key are serialised through a per-key lock, so an
//! overlapping generate and resolve collapse into one generation attempt.
//! Distinct keys stay concurrent; their deterministic file names keep them
//! isolated inside the shared workdir.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::Mutex;
use tracing::{error, info, warn};

use credoc_core::{CredentialType, CredentialVariables, Csp, DocsError, DocsResult};
use credoc_plugins::PluginRegistry;

use crate::naming::{credential_api_file_name, HTML_SUFFIX, JSON_SUFFIX};
use crate::openapi::credential_openapi_json;
use crate::renderer::{HtmlRenderer, RENDERED_INDEX};
use crate::store;

/// Filesystem and URL configuration for the generator.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Working directory holding transient JSON inputs and rendered HTML.
    pub workdir: PathBuf,
    /// Externally visible base URL of the service, without trailing slash.
    pub service_url: String,
    /// Relative path under which rendered documents are served.
    pub openapi_path: String,
    /// Application version embedded in synthesized documents.
    pub app_version: String,
}

/// Generates, caches and serves credential API documentation artifacts.
pub struct CredentialDocsGenerator {
    cfg: GeneratorConfig,
    renderer: Arc<dyn HtmlRenderer>,
    locks: Mutex<HashMap<String, Arc<Mutex<()>>>>,
}

impl CredentialDocsGenerator {
    pub fn new(cfg: GeneratorConfig, renderer: Arc<dyn HtmlRenderer>) -> Self {
        Self {
            cfg,
            renderer,
            locks: Mutex::new(HashMap::new()),
        }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.cfg
    }

    /// Generate documentation for every credential definition of every
    /// registered integration. A key's failure is logged and never aborts
    /// the sweep. Duplicate credential types within one integration
    /// collapse, first occurrence wins.
    pub fn generate_all(&self, registry: &PluginRegistry) {
        for (csp, plugin) in registry.iter() {
            let definitions = plugin.credential_definitions();
            if definitions.is_empty() {
                info!(%csp, "no credential definitions for cloud service provider");
                continue;
            }
            let mut seen: Vec<CredentialType> = Vec::new();
            for definition in definitions {
                if seen.contains(&definition.credential_type) {
                    continue;
                }
                seen.push(definition.credential_type);
                if let Err(err) = self.generate_one(&definition) {
                    error!(
                        %csp,
                        credential_type = %definition.credential_type,
                        %err,
                        "credential api generation failed"
                    );
                }
            }
        }
    }

    /// Run the full pipeline for one credential definition.
    ///
    /// The transient JSON input is removed on every exit path: success,
    /// render failure, or process error.
    pub fn generate_one(&self, definition: &CredentialVariables) -> DocsResult<()> {
        let lock = self.key_lock(definition.csp, definition.credential_type);
        let _held = lock.lock();
        self.generate_locked(definition)
    }

    /// Resolve the served URL for a (provider, credential type) pair,
    /// generating the HTML artifact first when it is not already on disk.
    ///
    /// Presence on disk is the sole freshness signal: an existing artifact
    /// is returned as-is without invoking the renderer again.
    pub fn resolve_url(
        &self,
        csp: Csp,
        credential_type: CredentialType,
        registry: &PluginRegistry,
    ) -> DocsResult<String> {
        let html_name = credential_api_file_name(csp, credential_type, HTML_SUFFIX);
        let lock = self.key_lock(csp, credential_type);
        let _held = lock.lock();

        if !store::exists(&self.cfg.workdir, &html_name) {
            let definition = registry
                .get(csp)
                .and_then(|plugin| {
                    plugin
                        .credential_definitions()
                        .into_iter()
                        .find(|d| d.credential_type == credential_type)
                })
                .ok_or_else(|| {
                    error!(%csp, %credential_type, "no credential definition available");
                    DocsError::no_credential_definition(csp, credential_type)
                })?;
            self.generate_locked(&definition)?;
        }

        Ok(self.docs_url(&html_name))
    }

    fn key_lock(&self, csp: Csp, credential_type: CredentialType) -> Arc<Mutex<()>> {
        let key = credential_api_file_name(csp, credential_type, "");
        self.locks.lock().entry(key).or_default().clone()
    }

    /// The pipeline body. Caller must hold the key's lock.
    fn generate_locked(&self, definition: &CredentialVariables) -> DocsResult<()> {
        let json_name =
            credential_api_file_name(definition.csp, definition.credential_type, JSON_SUFFIX);
        let html_name =
            credential_api_file_name(definition.csp, definition.credential_type, HTML_SUFFIX);

        let api_docs_json =
            credential_openapi_json(definition, &self.cfg.service_url, &self.cfg.app_version);
        let json_path = store::write(&self.cfg.workdir, &json_name, &api_docs_json)
            .map_err(|err| {
                DocsError::generation(
                    html_name.as_str(),
                    format!("writing {json_name} failed: {err}"),
                )
            })?;
        info!(file = %json_name, "credential api json file created");

        let result = self.render_html(&json_path, &html_name);
        store::remove_quiet(&json_path);
        result
    }

    fn render_html(&self, json_path: &Path, html_name: &str) -> DocsResult<()> {
        if !self.renderer.available() || !json_path.exists() {
            error!(file = %html_name, "not generating file, missing json input or renderer tool");
            return Err(DocsError::generation(
                html_name,
                "missing json input or renderer tool",
            ));
        }

        let outcome = self
            .renderer
            .render(json_path, &self.cfg.workdir)
            .map_err(|err| {
                DocsError::generation(html_name, format!("renderer process failed: {err}"))
            })?;
        if !outcome.success() {
            error!(
                file = %html_name,
                exit_code = outcome.exit_code,
                output = %outcome.output,
                "renderer exited non-zero"
            );
        }

        let rendered = self.cfg.workdir.join(RENDERED_INDEX);
        if rendered.exists() {
            let html_path = self.cfg.workdir.join(html_name);
            fs::rename(&rendered, &html_path).map_err(|err| {
                DocsError::generation(html_name, format!("renaming rendered output failed: {err}"))
            })?;
            info!(file = %html_name, "credential api html file created");
            return Ok(());
        }

        if outcome.success() {
            // Reported success without the fixed-name output: logged only.
            warn!(file = %html_name, "renderer reported success but produced no output file");
            Ok(())
        } else {
            Err(DocsError::generation(
                html_name,
                format!(
                    "renderer exited with code {} and produced no output file",
                    outcome.exit_code
                ),
            ))
        }
    }

    /// `<service url>/<docs path>/<file>` with exactly one separator, no
    /// matter whether the configured docs path carries a trailing slash.
    fn docs_url(&self, file_name: &str) -> String {
        let path = self.cfg.openapi_path.trim_end_matches('/');
        format!("{}/{}/{}", self.cfg.service_url, path, file_name)
    }
}
