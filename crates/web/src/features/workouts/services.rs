use storage::cycle;
use storage::dto::workout::{
    BulkImportFailure, BulkImportResponse, LegacyCreateWorkoutRequest, LogWorkoutRequest,
    NewLoggedWorkout,
};
use storage::models::{CompletedExercise, LoggedWorkout, WorkoutMode};
use storage::{StorageError, WorkoutStore};
use validator::Validate;

use crate::error::{WebError, WebResult};
use crate::features::{validate_day, INVALID_DAY_MESSAGE};

/// The day's name as it reads right now, snapshotted onto the record. The
/// log keeps this copy verbatim even if the catalog entry is renamed later.
async fn snapshot_day_name(
    store: &dyn WorkoutStore,
    day_number: u8,
    supplied: Option<String>,
) -> Option<String> {
    match supplied {
        Some(name) => Some(name),
        None => store
            .day_definition(day_number)
            .await
            .ok()
            .map(|day| day.name),
    }
}

/// Log a completed session (quick or detailed).
pub async fn log_workout(
    store: &dyn WorkoutStore,
    user_id: &str,
    req: LogWorkoutRequest,
) -> WebResult<LoggedWorkout> {
    req.validate()?;

    let day_number = req
        .day_number
        .ok_or_else(|| WebError::BadRequest("Missing required field: dayNumber".to_string()))?;
    let day_number = validate_day(day_number)
        .ok_or_else(|| WebError::BadRequest(INVALID_DAY_MESSAGE.to_string()))?;

    let mode = req.mode.unwrap_or_default();
    let exercises = match mode {
        WorkoutMode::Quick => Vec::new(),
        WorkoutMode::Detailed => req.exercises.unwrap_or_default(),
    };

    let day_name = snapshot_day_name(store, day_number, req.day_name).await;

    let draft = NewLoggedWorkout {
        id: None,
        day_number,
        day_name,
        date: None,
        mode,
        exercises,
        timestamp: None,
    };

    Ok(store.create_logged_workout(user_id, draft).await?)
}

/// Full history, most recent first.
pub async fn list_history(
    store: &dyn WorkoutStore,
    user_id: &str,
) -> WebResult<Vec<LoggedWorkout>> {
    Ok(store.list_logged_workouts(user_id).await?)
}

/// History for one rotation day.
pub async fn list_history_for_day(
    store: &dyn WorkoutStore,
    user_id: &str,
    day_number: u8,
) -> WebResult<Vec<LoggedWorkout>> {
    Ok(store
        .list_logged_workouts_for_day(user_id, day_number)
        .await?)
}

/// Create a record through the pre-rotation single-exercise shape. Stored
/// as an ordinary detailed workout carrying one completed exercise.
pub async fn create_legacy_workout(
    store: &dyn WorkoutStore,
    user_id: &str,
    req: LegacyCreateWorkoutRequest,
) -> WebResult<LoggedWorkout> {
    req.validate()?;

    let (Some(day_number), Some(exercise)) = (req.day_number, req.exercise) else {
        return Err(WebError::BadRequest(
            "Missing required fields: dayNumber and exercise".to_string(),
        ));
    };
    let day_number = validate_day(day_number)
        .ok_or_else(|| WebError::BadRequest(INVALID_DAY_MESSAGE.to_string()))?;

    let day_name = snapshot_day_name(store, day_number, req.day_name).await;

    let draft = NewLoggedWorkout {
        id: None,
        day_number,
        day_name,
        // Backfilled entries are attributed to the day they were recorded.
        date: req.date.or_else(|| req.timestamp.map(|t| t.date_naive())),
        mode: WorkoutMode::Detailed,
        exercises: vec![CompletedExercise {
            name: exercise,
            weight: req.weight,
            reps: req.reps,
            sets: req.sets,
        }],
        timestamp: req.timestamp,
    };

    Ok(store.create_logged_workout(user_id, draft).await?)
}

/// Best-effort batch import. The payload must carry an array; each element
/// then succeeds or fails on its own.
pub async fn bulk_import(
    store: &dyn WorkoutStore,
    user_id: &str,
    payload: serde_json::Value,
) -> WebResult<BulkImportResponse> {
    let items = payload
        .get("workouts")
        .and_then(serde_json::Value::as_array)
        .cloned()
        .ok_or_else(|| {
            WebError::BadRequest("Request body must contain an array of workouts".to_string())
        })?;

    let mut rejected = Vec::new();
    let mut drafts = Vec::new();
    for item in items {
        match serde_json::from_value::<NewLoggedWorkout>(item.clone()) {
            Ok(draft) if cycle::is_valid_day(i64::from(draft.day_number)) => drafts.push(draft),
            Ok(_) => rejected.push(BulkImportFailure {
                workout: item,
                error: INVALID_DAY_MESSAGE.to_string(),
            }),
            Err(error) => rejected.push(BulkImportFailure {
                workout: item,
                error: error.to_string(),
            }),
        }
    }

    let mut outcome = store.bulk_create_logged_workouts(user_id, drafts).await;
    outcome.failures.extend(rejected);

    Ok(outcome.into())
}

/// Delete one record from the caller's partition.
pub async fn delete_workout(store: &dyn WorkoutStore, user_id: &str, id: &str) -> WebResult<()> {
    store
        .delete_logged_workout(user_id, id)
        .await
        .map_err(|e| match e {
            StorageError::NotFound => WebError::NotFound("Workout not found"),
            other => other.into(),
        })
}
