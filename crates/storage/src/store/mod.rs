use async_trait::async_trait;

use crate::dto::admin::SeedSummary;
use crate::dto::workout::{BulkImportFailure, BulkImportOutcome, NewLoggedWorkout};
use crate::error::Result;
use crate::models::{DayDefinition, Exercise, LoggedWorkout};

mod memory;
mod postgres;

pub use memory::MemoryWorkoutStore;
pub use postgres::Database;

/// Discriminant values for the record kinds sharing the one logical
/// collection.
pub mod doc_type {
    pub const DAY_DEFINITION: &str = "workout-day-definition";
    pub const EXERCISE: &str = "exercise";
    pub const LOGGED_WORKOUT: &str = "logged-workout";
    pub const SETTINGS: &str = "settings";
}

/// Reference data lives outside any user partition.
pub(crate) const CATALOG_PARTITION: &str = "";

pub(crate) fn day_document_id(day_number: u8) -> String {
    format!("workout-day-{day_number}")
}

pub(crate) fn exercise_document_id(exercise: &Exercise) -> String {
    let slug: String = exercise
        .name
        .to_lowercase()
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '-' })
        .collect();
    format!("exercise-{}-{}", exercise.day_number, slug)
}

/// Persistence contract for the workout log.
///
/// Every user-scoped operation takes the caller's verified `user_id`;
/// records in other partitions are invisible to it, deletes included.
/// A lookup miss is `StorageError::NotFound`, a distinct outcome from a
/// backend fault.
#[async_trait]
pub trait WorkoutStore: Send + Sync {
    /// Catalog definition for a rotation day.
    async fn day_definition(&self, day_number: u8) -> Result<DayDefinition>;

    /// Exercises recommended for a rotation day. Empty is not an error.
    async fn exercises_for_day(&self, day_number: u8) -> Result<Vec<Exercise>>;

    /// Full history, most recent `date` first, creation instant breaking
    /// ties.
    async fn list_logged_workouts(&self, user_id: &str) -> Result<Vec<LoggedWorkout>>;

    /// History for one rotation day, most recently recorded first.
    async fn list_logged_workouts_for_day(
        &self,
        user_id: &str,
        day_number: u8,
    ) -> Result<Vec<LoggedWorkout>>;

    /// Insert-only create. A draft without an id gets a fresh one; a
    /// supplied id that already exists in the user's partition fails with
    /// `ConstraintViolation` rather than overwriting.
    async fn create_logged_workout(
        &self,
        user_id: &str,
        draft: NewLoggedWorkout,
    ) -> Result<LoggedWorkout>;

    /// Addressed by (`user_id`, `id`); a record owned by someone else
    /// reports `NotFound`.
    async fn delete_logged_workout(&self, user_id: &str, id: &str) -> Result<()>;

    /// The user's rotation pointer; 1 when no settings record exists yet.
    async fn current_day(&self, user_id: &str) -> Result<u8>;

    /// Upsert the single settings record. Last writer wins.
    async fn set_current_day(&self, user_id: &str, day: u8) -> Result<u8>;

    /// Idempotent upsert of the reference catalog.
    async fn seed_catalog(
        &self,
        days: &[DayDefinition],
        exercises: &[Exercise],
    ) -> Result<SeedSummary>;

    /// Best-effort batch create: each draft is processed independently and
    /// one failure never aborts its siblings.
    async fn bulk_create_logged_workouts(
        &self,
        user_id: &str,
        drafts: Vec<NewLoggedWorkout>,
    ) -> BulkImportOutcome {
        let mut outcome = BulkImportOutcome::default();
        for draft in drafts {
            let echo = serde_json::to_value(&draft).unwrap_or_default();
            match self.create_logged_workout(user_id, draft).await {
                Ok(stored) => outcome.created.push(stored),
                Err(error) => outcome.failures.push(BulkImportFailure {
                    workout: echo,
                    error: error.to_string(),
                }),
            }
        }
        outcome
    }
}
