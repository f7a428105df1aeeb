//! HTTP/JSON transport for the roundtable directory.

pub mod dto;
pub mod error;
pub mod handlers;

use axum::{
    Router,
    http::Method,
    routing::{get, post},
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::state::AppState;

use handlers::{create_roundtable, get_roundtable, get_status, healthcheck, list_roundtables};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(healthcheck))
        .route("/api/v1/status", get(get_status))
        .route(
            "/api/v1/roundtables",
            post(create_roundtable).get(list_roundtables),
        )
        .route("/api/v1/roundtables/{id}", get(get_roundtable))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_headers(Any)
                .allow_methods([Method::GET, Method::POST, Method::OPTIONS]),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
