use axum::{
    extract::State,
    response::{IntoResponse, Response},
    Json,
};
use storage::dto::admin::InitDatabaseResponse;

use crate::error::WebError;
use crate::state::AppState;

use super::services;

#[utoipa::path(
    post,
    path = "/api/admin/init-database",
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Reference data seeded", body = InitDatabaseResponse),
        (status = 401, description = "Unauthorized")
    ),
    tag = "admin"
)]
pub async fn init_database(State(state): State<AppState>) -> Result<Response, WebError> {
    let seeded = services::seed_reference_data(state.store.as_ref()).await?;

    Ok(Json(InitDatabaseResponse {
        success: true,
        message: "Database initialized and seeded successfully".to_string(),
        database: state.database.clone(),
        container: state.container.clone(),
        seeded,
    })
    .into_response())
}
