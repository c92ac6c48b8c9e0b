use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One slot of the 12-day rotation. Reference data: loaded once at startup
/// and never mutated.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DayDefinition {
    pub day_number: u8,
    pub name: String,
    pub focus: String,
    pub primary_muscle_groups: Vec<String>,
    /// Present only for days with an exercise contraindication (day 8 in
    /// the shipped catalog).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}
