use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Wire shape of the per-user rotation pointer.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CurrentDayResponse {
    pub current_day: u8,
}

/// Request payload for moving the rotation pointer. Wide integer so the
/// range check sees out-of-range values.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCurrentDayRequest {
    pub current_day: Option<i64>,
}
