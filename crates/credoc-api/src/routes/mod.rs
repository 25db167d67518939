use axum::routing::get;
use axum::Router;
use tower_http::services::ServeDir;

use crate::state::AppState;

mod credentials;
mod health;

pub fn router(state: &AppState) -> Router<AppState> {
    let v1 = Router::new().route(
        "/credentials/openapi/:csp/:type",
        get(credentials::credential_openapi_url),
    );

    // Rendered HTML artifacts are served straight out of the workdir under
    // the configured docs path, so resolved URLs are reachable.
    let docs_path = format!("/{}", state.cfg.docs.openapi_path.trim_matches('/'));
    let docs_dir = state.generator.config().workdir.clone();

    Router::new()
        .route("/healthz", get(health::healthz))
        .nest("/v1", v1)
        .nest_service(&docs_path, ServeDir::new(docs_dir))
}
