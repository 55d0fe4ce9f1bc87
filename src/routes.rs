use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::CorsLayer,
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

use crate::{
    handlers::{history, save_session},
    state::AppState,
};

/// Build the full application router: API routes, the static root, and a
/// static-file fallback for everything else.
pub fn build(state: AppState) -> Router {
    let index = ServeFile::new(state.config.index_path());
    let assets = ServeDir::new(state.config.static_dir());

    Router::new()
        .route("/api/save-session", post(save_session))
        .route("/api/history", get(history))
        .route_service("/", index)
        .fallback_service(assets)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
