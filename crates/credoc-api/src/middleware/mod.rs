use axum::Router;
use tower_http::trace::TraceLayer;

mod cors;
mod request_id;

pub fn wrap(router: Router) -> Router {
    router
        .layer(cors::layer())
        .layer(TraceLayer::new_for_http())
        .layer(request_id::propagate_layer())
        .layer(request_id::set_layer())
}
