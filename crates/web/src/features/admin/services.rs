use storage::dto::admin::SeedSummary;
use storage::{catalog, error::Result, WorkoutStore};

/// Upsert the shipped reference data into the store. Safe to repeat.
pub async fn seed_reference_data(store: &dyn WorkoutStore) -> Result<SeedSummary> {
    store
        .seed_catalog(&catalog::workout_days(), &catalog::exercise_library())
        .await
}
