use axum::extract::{Path, State};
use axum::Json;
use serde::Serialize;

use credoc_core::{CredentialType, Csp};

use crate::error::ApiResult;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct CredentialOpenApiUrl {
    pub url: String,
}

/// GET /v1/credentials/openapi/:csp/:type
///
/// Returns the served URL of the credential API document for the pair,
/// generating the artifact on first request. The render step blocks the
/// calling worker until the external tool finishes.
pub async fn credential_openapi_url(
    Path((csp, credential_type)): Path<(String, String)>,
    State(state): State<AppState>,
) -> ApiResult<Json<CredentialOpenApiUrl>> {
    let csp: Csp = csp.parse()?;
    let credential_type: CredentialType = credential_type.parse()?;

    let url = state
        .generator
        .resolve_url(csp, credential_type, &state.plugins)?;

    Ok(Json(CredentialOpenApiUrl { url }))
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    use crate::app::build_router;
    use crate::config::AppConfig;
    use crate::state::AppState;

    fn test_state() -> (tempfile::TempDir, AppState) {
        let td = tempfile::TempDir::new().unwrap();
        let mut cfg = AppConfig::default();
        cfg.service_url = "https://api.example.com".to_string();
        cfg.docs.workdir = td.path().join("openapi").to_string_lossy().into_owned();
        // Jar deliberately absent: on-demand generation fails, cache hits don't.
        cfg.docs.renderer_jar = td.path().join("missing.jar").to_string_lossy().into_owned();
        (td, AppState::new(cfg))
    }

    #[tokio::test]
    async fn healthz_responds() {
        let (_td, state) = test_state();
        let router = build_router(state);

        let res = router
            .oneshot(Request::builder().uri("/healthz").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn unknown_csp_is_bad_request() {
        let (_td, state) = test_state();
        let router = build_router(state);

        let res = router
            .oneshot(
                Request::builder()
                    .uri("/v1/credentials/openapi/gcp/variables")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn provider_without_definition_is_bad_request() {
        let (_td, state) = test_state();
        let router = build_router(state);

        // No builtin integration declares azure credentials.
        let res = router
            .oneshot(
                Request::builder()
                    .uri("/v1/credentials/openapi/azure/variables")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn missing_renderer_surfaces_generation_failure() {
        let (_td, state) = test_state();
        let router = build_router(state);

        let res = router
            .oneshot(
                Request::builder()
                    .uri("/v1/credentials/openapi/huawei/variables")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn existing_artifact_resolves_without_renderer() {
        let (_td, state) = test_state();
        let workdir = state.generator.config().workdir.clone();
        std::fs::create_dir_all(&workdir).unwrap();
        std::fs::write(
            workdir.join("huawei_variables_credentialApi.html"),
            "<html></html>",
        )
        .unwrap();

        let router = build_router(state);
        let res = router
            .oneshot(
                Request::builder()
                    .uri("/v1/credentials/openapi/huawei/variables")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);
    }
}
