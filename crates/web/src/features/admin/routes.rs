use axum::{middleware, routing::post, Router};

use super::handlers::init_database;
use crate::middleware::auth::{require_auth, AccessTokens};
use crate::state::AppState;

pub fn routes(tokens: AccessTokens) -> Router<AppState> {
    Router::new()
        .route("/admin/init-database", post(init_database))
        .route_layer(middleware::from_fn_with_state(tokens, require_auth))
}
