use storage::{
    error::Result,
    models::{DayDefinition, Exercise},
    WorkoutStore,
};

/// Catalog definition for one rotation day.
pub async fn workout_day(store: &dyn WorkoutStore, day_number: u8) -> Result<DayDefinition> {
    store.day_definition(day_number).await
}

/// Exercises recommended for one rotation day.
pub async fn exercises_for_day(store: &dyn WorkoutStore, day_number: u8) -> Result<Vec<Exercise>> {
    store.exercises_for_day(day_number).await
}
