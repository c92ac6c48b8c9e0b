use axum::{middleware, routing::get, Router};

use super::handlers::{get_current_day, update_current_day};
use crate::middleware::auth::{require_auth, AccessTokens};
use crate::state::AppState;

pub fn routes(tokens: AccessTokens) -> Router<AppState> {
    Router::new()
        .route("/current-day", get(get_current_day).put(update_current_day))
        .route_layer(middleware::from_fn_with_state(tokens, require_auth))
}
