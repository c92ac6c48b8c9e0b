use serde::Serialize;
use utoipa::ToSchema;

use crate::models::{DayDefinition, Exercise};

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutDayResponse {
    pub workout_day: DayDefinition,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ExerciseListResponse {
    pub exercises: Vec<Exercise>,
}
