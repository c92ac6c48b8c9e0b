use axum::{
    extract::State,
    response::{IntoResponse, Response},
    Extension, Json,
};
use storage::dto::settings::{CurrentDayResponse, UpdateCurrentDayRequest};

use crate::error::WebError;
use crate::features::{validate_day, INVALID_DAY_MESSAGE};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

use super::services;

#[utoipa::path(
    get,
    path = "/api/current-day",
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "The user's rotation pointer", body = CurrentDayResponse),
        (status = 401, description = "Unauthorized")
    ),
    tag = "settings"
)]
pub async fn get_current_day(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
) -> Result<Response, WebError> {
    let current_day = services::current_day(state.store.as_ref(), &user.0).await?;

    Ok(Json(CurrentDayResponse { current_day }).into_response())
}

#[utoipa::path(
    put,
    path = "/api/current-day",
    request_body = UpdateCurrentDayRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Pointer moved", body = CurrentDayResponse),
        (status = 400, description = "Day outside the rotation"),
        (status = 401, description = "Unauthorized")
    ),
    tag = "settings"
)]
pub async fn update_current_day(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Json(req): Json<UpdateCurrentDayRequest>,
) -> Result<Response, WebError> {
    let day = req
        .current_day
        .and_then(validate_day)
        .ok_or_else(|| WebError::BadRequest(INVALID_DAY_MESSAGE.to_string()))?;

    let current_day = services::set_current_day(state.store.as_ref(), &user.0, day).await?;

    Ok(Json(CurrentDayResponse { current_day }).into_response())
}
