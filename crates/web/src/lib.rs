pub mod config;
pub mod error;
pub mod features;
pub mod middleware;
pub mod state;

use std::time::Duration;

use axum::{
    http::{header, HeaderValue, Method, StatusCode},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde_json::json;
use tower_http::cors::{AllowOrigin, CorsLayer};

pub use state::AppState;

/// Assemble the full application router over the given state.
pub fn build_router(state: AppState) -> Router {
    let tokens = state.tokens.clone();

    let api = Router::new()
        .merge(features::catalog::routes::routes())
        .merge(features::workouts::routes::routes(tokens.clone()))
        .merge(features::settings::routes::routes(tokens.clone()))
        .merge(features::admin::routes::routes(tokens));

    let cors = cors_layer(&state.allowed_origins);

    Router::new()
        .route("/health", get(features::health::handlers::health_check))
        .nest("/api", api)
        .fallback(not_found)
        .layer(cors)
        .with_state(state)
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
        .allow_credentials(true)
        .max_age(Duration::from_secs(3600))
}

async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, Json(json!({ "error": "Not found" })))
}
