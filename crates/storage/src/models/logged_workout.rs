use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::RepTarget;

/// How much detail a logged session carries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum WorkoutMode {
    /// Day and date only.
    #[default]
    Quick,
    /// Carries per-exercise completed weight/reps/sets.
    Detailed,
}

/// One exercise as actually performed in a detailed session.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CompletedExercise {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reps: Option<RepTarget>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sets: Option<u32>,
}

/// A session the user logged. Immutable once written: corrections are
/// delete + recreate, never in-place updates.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoggedWorkout {
    pub id: String,
    /// Owner identity; also the partition key addressing the record.
    pub user_id: String,
    pub day_number: u8,
    /// The day's name as it read when the session was logged. Kept verbatim
    /// even if the catalog entry is renamed later.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub day_name: Option<String>,
    /// Calendar date the session is attributed to. A backfilled entry may
    /// have `date` in the past while `timestamp` is the moment of recording.
    pub date: NaiveDate,
    #[serde(default)]
    pub mode: WorkoutMode,
    #[serde(default)]
    pub exercises: Vec<CompletedExercise>,
    pub timestamp: DateTime<Utc>,
    /// Server-assigned creation instant.
    pub created_at: DateTime<Utc>,
}
