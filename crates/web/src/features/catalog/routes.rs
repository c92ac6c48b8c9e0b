use axum::{routing::get, Router};

use super::handlers::{get_workout_day, list_exercises_for_day};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/workout-days/:day_number", get(get_workout_day))
        .route("/exercises/day/:day_number", get(list_exercises_for_day))
}
