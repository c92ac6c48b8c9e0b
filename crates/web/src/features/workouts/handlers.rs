use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Extension, Json,
};
use storage::dto::workout::{
    BulkImportResponse, DeleteWorkoutResponse, LegacyCreateWorkoutRequest,
    LegacyWorkout, LegacyWorkoutListResponse, LogWorkoutRequest, WorkoutListResponse,
    WorkoutResponse,
};

use crate::error::WebError;
use crate::features::parse_day_param;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

use super::services;

#[utoipa::path(
    get,
    path = "/api/logged-workouts",
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "History, most recent first", body = WorkoutListResponse),
        (status = 401, description = "Unauthorized")
    ),
    tag = "workouts"
)]
pub async fn list_logged_workouts(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
) -> Result<Response, WebError> {
    let workouts = services::list_history(state.store.as_ref(), &user.0).await?;

    Ok(Json(WorkoutListResponse { workouts }).into_response())
}

#[utoipa::path(
    post,
    path = "/api/log-workout",
    request_body = LogWorkoutRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Workout logged", body = WorkoutResponse),
        (status = 400, description = "Missing or invalid dayNumber"),
        (status = 401, description = "Unauthorized")
    ),
    tag = "workouts"
)]
pub async fn log_workout(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Json(req): Json<LogWorkoutRequest>,
) -> Result<Response, WebError> {
    let workout = services::log_workout(state.store.as_ref(), &user.0, req).await?;

    Ok((StatusCode::CREATED, Json(WorkoutResponse { workout })).into_response())
}

#[utoipa::path(
    get,
    path = "/api/workouts",
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "History in the pre-rotation shape", body = LegacyWorkoutListResponse),
        (status = 401, description = "Unauthorized")
    ),
    tag = "workouts"
)]
pub async fn list_workouts_legacy(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
) -> Result<Response, WebError> {
    let workouts = services::list_history(state.store.as_ref(), &user.0)
        .await?
        .into_iter()
        .map(LegacyWorkout::from)
        .collect();

    Ok(Json(LegacyWorkoutListResponse { workouts }).into_response())
}

#[utoipa::path(
    get,
    path = "/api/workouts/day/{day_number}",
    params(
        ("day_number" = u8, Path, description = "Rotation day, 1-12")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "History for one rotation day", body = WorkoutListResponse),
        (status = 400, description = "Invalid day number"),
        (status = 401, description = "Unauthorized")
    ),
    tag = "workouts"
)]
pub async fn list_workouts_by_day(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(day_number): Path<String>,
) -> Result<Response, WebError> {
    let day_number = parse_day_param(&day_number)?;

    let workouts =
        services::list_history_for_day(state.store.as_ref(), &user.0, day_number).await?;

    Ok(Json(WorkoutListResponse { workouts }).into_response())
}

#[utoipa::path(
    post,
    path = "/api/workouts",
    request_body = LegacyCreateWorkoutRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Workout created", body = WorkoutResponse),
        (status = 400, description = "Missing required fields"),
        (status = 401, description = "Unauthorized")
    ),
    tag = "workouts"
)]
pub async fn create_workout(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Json(req): Json<LegacyCreateWorkoutRequest>,
) -> Result<Response, WebError> {
    let workout = services::create_legacy_workout(state.store.as_ref(), &user.0, req).await?;

    Ok((StatusCode::CREATED, Json(WorkoutResponse { workout })).into_response())
}

#[utoipa::path(
    post,
    path = "/api/workouts/bulk",
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Per-item import outcome", body = BulkImportResponse),
        (status = 400, description = "Payload is not an array of workouts"),
        (status = 401, description = "Unauthorized")
    ),
    tag = "workouts"
)]
pub async fn bulk_import_workouts(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Json(payload): Json<serde_json::Value>,
) -> Result<Response, WebError> {
    let outcome = services::bulk_import(state.store.as_ref(), &user.0, payload).await?;

    Ok((StatusCode::CREATED, Json(outcome)).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/workouts/{id}",
    params(
        ("id" = String, Path, description = "Workout id")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Workout deleted", body = DeleteWorkoutResponse),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Workout not found")
    ),
    tag = "workouts"
)]
pub async fn delete_workout(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<String>,
) -> Result<Response, WebError> {
    services::delete_workout(state.store.as_ref(), &user.0, &id).await?;

    Ok(Json(DeleteWorkoutResponse {
        message: "Workout deleted successfully".to_string(),
        id,
    })
    .into_response())
}
