use serde::Serialize;
use utoipa::ToSchema;

/// How many reference records a seeding pass wrote.
#[derive(Debug, Default, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SeedSummary {
    pub workout_days: usize,
    pub exercises: usize,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct InitDatabaseResponse {
    pub success: bool,
    pub message: String,
    pub database: String,
    pub container: String,
    pub seeded: SeedSummary,
}
