use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::models::{CompletedExercise, LoggedWorkout, RepTarget, WorkoutMode};

/// Request payload for logging a completed session.
///
/// `day_number` is modeled as a wide integer so an out-of-range value
/// reaches the range check instead of failing deserialization.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LogWorkoutRequest {
    pub day_number: Option<i64>,
    #[validate(length(max = 255, message = "Day name must be at most 255 characters"))]
    pub day_name: Option<String>,
    pub mode: Option<WorkoutMode>,
    pub exercises: Option<Vec<CompletedExercise>>,
}

/// Request payload for the legacy single-exercise create endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LegacyCreateWorkoutRequest {
    pub day_number: Option<i64>,
    #[validate(length(max = 255, message = "Day name must be at most 255 characters"))]
    pub day_name: Option<String>,
    #[validate(length(min = 1, max = 255, message = "Exercise name must be between 1 and 255 characters"))]
    pub exercise: Option<String>,
    pub weight: Option<f64>,
    pub reps: Option<RepTarget>,
    pub sets: Option<u32>,
    pub date: Option<NaiveDate>,
    /// Backfilled entries may carry the instant they were originally
    /// recorded; defaults to now.
    pub timestamp: Option<DateTime<Utc>>,
}

/// A workout draft as accepted by the store. Missing `id`, `date` and
/// `timestamp` are assigned at creation time.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewLoggedWorkout {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub day_number: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub day_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub mode: WorkoutMode,
    #[serde(default)]
    pub exercises: Vec<CompletedExercise>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
}

impl NewLoggedWorkout {
    /// Promote a draft into a stored record, assigning whatever the caller
    /// left unset. A fresh id can never collide with an existing record.
    pub fn into_workout(self, user_id: &str, now: DateTime<Utc>) -> LoggedWorkout {
        LoggedWorkout {
            id: self
                .id
                .unwrap_or_else(|| uuid::Uuid::new_v4().to_string()),
            user_id: user_id.to_string(),
            day_number: self.day_number,
            day_name: self.day_name,
            date: self.date.unwrap_or_else(|| now.date_naive()),
            mode: self.mode,
            exercises: self.exercises,
            timestamp: self.timestamp.unwrap_or(now),
            created_at: now,
        }
    }
}

/// Response wrapper for a single stored workout.
#[derive(Debug, Serialize, ToSchema)]
pub struct WorkoutResponse {
    pub workout: LoggedWorkout,
}

/// Response wrapper for the history listing.
#[derive(Debug, Serialize, ToSchema)]
pub struct WorkoutListResponse {
    pub workouts: Vec<LoggedWorkout>,
}

/// The pre-rotation wire shape still consumed by older clients: one entity,
/// second serialization view.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LegacyWorkout {
    pub id: String,
    pub day: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub day_name: Option<String>,
    /// Older clients expect the recording instant in the `date` slot.
    pub date: DateTime<Utc>,
    pub exercises: Vec<CompletedExercise>,
}

impl From<LoggedWorkout> for LegacyWorkout {
    fn from(workout: LoggedWorkout) -> Self {
        Self {
            id: workout.id,
            day: workout.day_number,
            day_name: workout.day_name,
            date: workout.timestamp,
            exercises: workout.exercises,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct LegacyWorkoutListResponse {
    pub workouts: Vec<LegacyWorkout>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct DeleteWorkoutResponse {
    pub message: String,
    pub id: String,
}

/// One draft the bulk import could not persist.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BulkImportFailure {
    /// The draft exactly as submitted, echoed back for diagnostics.
    #[schema(value_type = Object)]
    pub workout: serde_json::Value,
    pub error: String,
}

/// Outcome of a best-effort batch create. Partial success is a normal
/// result, not an error.
#[derive(Debug, Default)]
pub struct BulkImportOutcome {
    pub created: Vec<LoggedWorkout>,
    pub failures: Vec<BulkImportFailure>,
}

/// Wire shape of the bulk import result.
#[derive(Debug, Serialize, ToSchema)]
pub struct BulkImportResponse {
    pub success: usize,
    pub failed: usize,
    pub workouts: Vec<LoggedWorkout>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<BulkImportFailure>>,
}

impl From<BulkImportOutcome> for BulkImportResponse {
    fn from(outcome: BulkImportOutcome) -> Self {
        Self {
            success: outcome.created.len(),
            failed: outcome.failures.len(),
            workouts: outcome.created,
            errors: if outcome.failures.is_empty() {
                None
            } else {
                Some(outcome.failures)
            },
        }
    }
}
