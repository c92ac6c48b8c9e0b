use axum::{
    middleware,
    routing::{delete, get, post},
    Router,
};

use super::handlers::{
    bulk_import_workouts, create_workout, delete_workout, list_logged_workouts,
    list_workouts_by_day, list_workouts_legacy, log_workout,
};
use crate::middleware::auth::{require_auth, AccessTokens};
use crate::state::AppState;

pub fn routes(tokens: AccessTokens) -> Router<AppState> {
    Router::new()
        .route("/logged-workouts", get(list_logged_workouts))
        .route("/log-workout", post(log_workout))
        .route("/workouts", get(list_workouts_legacy).post(create_workout))
        .route("/workouts/day/:day_number", get(list_workouts_by_day))
        .route("/workouts/bulk", post(bulk_import_workouts))
        .route("/workouts/:id", delete(delete_workout))
        .route_layer(middleware::from_fn_with_state(tokens, require_auth))
}
