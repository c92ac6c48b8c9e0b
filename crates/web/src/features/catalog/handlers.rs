use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
    Json,
};
use storage::dto::catalog::{ExerciseListResponse, WorkoutDayResponse};
use storage::StorageError;

use crate::error::WebError;
use crate::features::parse_day_param;
use crate::state::AppState;

use super::services;

#[utoipa::path(
    get,
    path = "/api/workout-days/{day_number}",
    params(
        ("day_number" = u8, Path, description = "Rotation day, 1-12")
    ),
    responses(
        (status = 200, description = "Workout day definition", body = WorkoutDayResponse),
        (status = 400, description = "Invalid day number"),
        (status = 404, description = "Workout day not found")
    ),
    tag = "catalog"
)]
pub async fn get_workout_day(
    State(state): State<AppState>,
    Path(day_number): Path<String>,
) -> Result<Response, WebError> {
    let day_number = parse_day_param(&day_number)?;

    let workout_day = services::workout_day(state.store.as_ref(), day_number)
        .await
        .map_err(|e| match e {
            StorageError::NotFound => WebError::NotFound("Workout day not found"),
            other => other.into(),
        })?;

    Ok(Json(WorkoutDayResponse { workout_day }).into_response())
}

#[utoipa::path(
    get,
    path = "/api/exercises/day/{day_number}",
    params(
        ("day_number" = u8, Path, description = "Rotation day, 1-12")
    ),
    responses(
        (status = 200, description = "Exercises recommended for the day", body = ExerciseListResponse),
        (status = 400, description = "Invalid day number")
    ),
    tag = "catalog"
)]
pub async fn list_exercises_for_day(
    State(state): State<AppState>,
    Path(day_number): Path<String>,
) -> Result<Response, WebError> {
    let day_number = parse_day_param(&day_number)?;

    let exercises = services::exercises_for_day(state.store.as_ref(), day_number).await?;

    Ok(Json(ExerciseListResponse { exercises }).into_response())
}
