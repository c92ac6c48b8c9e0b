use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::Mutex;

use super::{day_document_id, exercise_document_id, WorkoutStore, CATALOG_PARTITION};
use crate::catalog;
use crate::cycle;
use crate::dto::admin::SeedSummary;
use crate::dto::workout::NewLoggedWorkout;
use crate::error::{Result, StorageError};
use crate::models::{DayDefinition, Exercise, LoggedWorkout, UserSettings};

enum Document {
    Day(DayDefinition),
    Exercise(Exercise),
    Workout(LoggedWorkout),
    Settings(UserSettings),
}

/// In-memory document store with the same addressing scheme as the
/// Postgres backend: one map keyed by (`user_id`, `id`). Backs the web
/// integration tests and local development.
#[derive(Default)]
pub struct MemoryWorkoutStore {
    documents: Mutex<HashMap<(String, String), Document>>,
}

fn key(user_id: &str, id: &str) -> (String, String) {
    (user_id.to_string(), id.to_string())
}

impl MemoryWorkoutStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with the shipped catalog.
    pub fn seeded() -> Self {
        let mut documents = HashMap::new();
        for day in catalog::workout_days() {
            documents.insert(
                key(CATALOG_PARTITION, &day_document_id(day.day_number)),
                Document::Day(day),
            );
        }
        for exercise in catalog::exercise_library() {
            documents.insert(
                key(CATALOG_PARTITION, &exercise_document_id(&exercise)),
                Document::Exercise(exercise),
            );
        }
        Self {
            documents: Mutex::new(documents),
        }
    }
}

#[async_trait]
impl WorkoutStore for MemoryWorkoutStore {
    async fn day_definition(&self, day_number: u8) -> Result<DayDefinition> {
        let documents = self.documents.lock().await;
        documents
            .values()
            .find_map(|doc| match doc {
                Document::Day(day) if day.day_number == day_number => Some(day.clone()),
                _ => None,
            })
            .ok_or(StorageError::NotFound)
    }

    async fn exercises_for_day(&self, day_number: u8) -> Result<Vec<Exercise>> {
        let documents = self.documents.lock().await;
        let mut entries: Vec<(&String, &Exercise)> = documents
            .iter()
            .filter_map(|((_, id), doc)| match doc {
                Document::Exercise(exercise) if exercise.day_number == day_number => {
                    Some((id, exercise))
                }
                _ => None,
            })
            .collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        Ok(entries.into_iter().map(|(_, e)| e.clone()).collect())
    }

    async fn list_logged_workouts(&self, user_id: &str) -> Result<Vec<LoggedWorkout>> {
        let documents = self.documents.lock().await;
        let mut workouts: Vec<LoggedWorkout> = documents
            .values()
            .filter_map(|doc| match doc {
                Document::Workout(w) if w.user_id == user_id => Some(w.clone()),
                _ => None,
            })
            .collect();
        workouts.sort_by(|a, b| {
            b.date
                .cmp(&a.date)
                .then_with(|| b.created_at.cmp(&a.created_at))
        });
        Ok(workouts)
    }

    async fn list_logged_workouts_for_day(
        &self,
        user_id: &str,
        day_number: u8,
    ) -> Result<Vec<LoggedWorkout>> {
        let documents = self.documents.lock().await;
        let mut workouts: Vec<LoggedWorkout> = documents
            .values()
            .filter_map(|doc| match doc {
                Document::Workout(w) if w.user_id == user_id && w.day_number == day_number => {
                    Some(w.clone())
                }
                _ => None,
            })
            .collect();
        workouts.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        Ok(workouts)
    }

    async fn create_logged_workout(
        &self,
        user_id: &str,
        draft: NewLoggedWorkout,
    ) -> Result<LoggedWorkout> {
        let workout = draft.into_workout(user_id, Utc::now());
        let mut documents = self.documents.lock().await;
        let entry = key(user_id, &workout.id);
        if documents.contains_key(&entry) {
            return Err(StorageError::ConstraintViolation(format!(
                "workout {} already exists",
                workout.id
            )));
        }
        documents.insert(entry, Document::Workout(workout.clone()));
        Ok(workout)
    }

    async fn delete_logged_workout(&self, user_id: &str, id: &str) -> Result<()> {
        let mut documents = self.documents.lock().await;
        let entry = key(user_id, id);
        match documents.get(&entry) {
            Some(Document::Workout(_)) => {
                documents.remove(&entry);
                Ok(())
            }
            _ => Err(StorageError::NotFound),
        }
    }

    async fn current_day(&self, user_id: &str) -> Result<u8> {
        let documents = self.documents.lock().await;
        let day = documents
            .get(&key(user_id, &UserSettings::document_id(user_id)))
            .and_then(|doc| match doc {
                Document::Settings(settings) => Some(settings.current_day),
                _ => None,
            })
            .unwrap_or(1);
        Ok(day)
    }

    async fn set_current_day(&self, user_id: &str, day: u8) -> Result<u8> {
        if !cycle::is_valid_day(i64::from(day)) {
            return Err(StorageError::ConstraintViolation(format!(
                "day {day} is outside the rotation"
            )));
        }

        let settings = UserSettings {
            id: UserSettings::document_id(user_id),
            user_id: user_id.to_string(),
            current_day: day,
            updated_at: Utc::now(),
        };
        let mut documents = self.documents.lock().await;
        documents.insert(key(user_id, &settings.id), Document::Settings(settings));
        Ok(day)
    }

    async fn seed_catalog(
        &self,
        days: &[DayDefinition],
        exercises: &[Exercise],
    ) -> Result<SeedSummary> {
        let mut documents = self.documents.lock().await;
        let mut summary = SeedSummary::default();
        for day in days {
            documents.insert(
                key(CATALOG_PARTITION, &day_document_id(day.day_number)),
                Document::Day(day.clone()),
            );
            summary.workout_days += 1;
        }
        for exercise in exercises {
            documents.insert(
                key(CATALOG_PARTITION, &exercise_document_id(exercise)),
                Document::Exercise(exercise.clone()),
            );
            summary.exercises += 1;
        }
        Ok(summary)
    }
}
