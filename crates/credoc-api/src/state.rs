use std::path::PathBuf;
use std::sync::Arc;

use credoc_gen::{CredentialDocsGenerator, GeneratorConfig, OpenApiGeneratorCli};
use credoc_plugins::PluginRegistry;

use crate::config::AppConfig;

#[derive(Clone)]
pub struct AppState {
    pub cfg: Arc<AppConfig>,
    pub plugins: Arc<PluginRegistry>,
    pub generator: Arc<CredentialDocsGenerator>,
}

impl AppState {
    pub fn new(cfg: AppConfig) -> Self {
        let mut reg = PluginRegistry::new();

        // Builtins
        credoc_plugins::builtin::register_all(&mut reg);

        let renderer = Arc::new(OpenApiGeneratorCli::new(&cfg.docs.renderer_jar));
        let generator = CredentialDocsGenerator::new(
            GeneratorConfig {
                workdir: PathBuf::from(&cfg.docs.workdir),
                service_url: cfg.service_url.trim_end_matches('/').to_string(),
                openapi_path: cfg.docs.openapi_path.clone(),
                app_version: cfg.docs.app_version.clone(),
            },
            renderer,
        );

        Self {
            cfg: Arc::new(cfg),
            plugins: Arc::new(reg),
            generator: Arc::new(generator),
        }
    }
}
