use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Per-user pointer into the rotation. At most one record per user,
/// enforced by the deterministic document id.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserSettings {
    pub id: String,
    pub user_id: String,
    pub current_day: u8,
    pub updated_at: DateTime<Utc>,
}

impl UserSettings {
    pub fn document_id(user_id: &str) -> String {
        format!("settings_{user_id}")
    }
}
