use std::fs;
use std::path::Path;

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    pub listen_addr: String,
    pub log_level: String,
    #[serde(default)]
    pub telemetry: TelemetryConfig,
    /// Externally visible base URL of this service, used in synthesized
    /// documents and resolved artifact URLs.
    pub service_url: String,
    #[serde(default)]
    pub docs: DocsConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:8080".to_string(),
            log_level: "info".to_string(),
            telemetry: TelemetryConfig::default(),
            service_url: "http://localhost:8080".to_string(),
            docs: DocsConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TelemetryConfig {
    #[serde(default)]
    pub json: bool,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self { json: false }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DocsConfig {
    /// Working directory for transient JSON inputs and rendered HTML.
    #[serde(default = "DocsConfig::default_workdir")]
    pub workdir: String,
    /// Relative path under which rendered documents are served.
    #[serde(default = "DocsConfig::default_openapi_path")]
    pub openapi_path: String,
    /// Path to the openapi-generator CLI jar.
    #[serde(default = "DocsConfig::default_renderer_jar")]
    pub renderer_jar: String,
    /// Application version embedded in synthesized documents.
    #[serde(default = "DocsConfig::default_app_version")]
    pub app_version: String,
}

impl Default for DocsConfig {
    fn default() -> Self {
        Self {
            workdir: Self::default_workdir(),
            openapi_path: Self::default_openapi_path(),
            renderer_jar: Self::default_renderer_jar(),
            app_version: Self::default_app_version(),
        }
    }
}

impl DocsConfig {
    fn default_workdir() -> String {
        "openapi".to_string()
    }

    fn default_openapi_path() -> String {
        "openapi/".to_string()
    }

    fn default_renderer_jar() -> String {
        "openapi-generator-cli.jar".to_string()
    }

    fn default_app_version() -> String {
        "1.0.0".to_string()
    }
}

#[derive(Debug, Clone)]
pub struct Args {
    pub config: Option<String>,
}

impl Args {
    pub fn parse() -> Self {
        let mut config: Option<String> = None;
        let mut it = std::env::args().skip(1);
        while let Some(arg) = it.next() {
            if arg.as_str() == "--config" {
                if let Some(v) = it.next() {
                    config = Some(v);
                }
            }
        }
        Self { config }
    }
}

pub fn load_config(path: Option<&str>) -> Result<AppConfig> {
    match path {
        None => Ok(AppConfig::default()),
        Some(p) => {
            let raw = fs::read_to_string(Path::new(p))?;
            let mut cfg: AppConfig =
                serde_json::from_str(&raw).map_err(|e| anyhow!("invalid config json: {e}"))?;
            if cfg.listen_addr.trim().is_empty() {
                cfg.listen_addr = AppConfig::default().listen_addr;
            }
            if cfg.log_level.trim().is_empty() {
                cfg.log_level = AppConfig::default().log_level;
            }
            if cfg.service_url.trim().is_empty() {
                cfg.service_url = AppConfig::default().service_url;
            }
            Ok(cfg)
        }
    }
}
