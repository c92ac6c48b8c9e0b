use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use super::{day_document_id, doc_type, exercise_document_id, WorkoutStore, CATALOG_PARTITION};
use crate::dto::admin::SeedSummary;
use crate::dto::workout::NewLoggedWorkout;
use crate::error::{Result, StorageError};
use crate::models::{DayDefinition, Exercise, LoggedWorkout, UserSettings};

/// Postgres-backed document store: every record kind shares one
/// `documents` table addressed by (`user_id`, `id`), with the full record
/// in a JSONB payload and the filtering/ordering attributes extracted into
/// columns.
#[derive(Clone)]
pub struct Database {
    pool: PgPool,
}

fn decode_all<T: serde::de::DeserializeOwned>(payloads: Vec<serde_json::Value>) -> Result<Vec<T>> {
    payloads
        .into_iter()
        .map(|payload| serde_json::from_value(payload).map_err(StorageError::from))
        .collect()
}

impl Database {
    pub async fn new(database_url: &str) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect(database_url)
            .await?;
        Ok(Self { pool })
    }

    pub async fn run_migrations(&self) -> Result<()> {
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        Ok(())
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    async fn upsert_document(
        &self,
        user_id: &str,
        id: &str,
        doc_type: &str,
        day_number: Option<i16>,
        date: Option<NaiveDate>,
        logged_at: Option<DateTime<Utc>>,
        payload: serde_json::Value,
    ) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO documents (id, user_id, doc_type, day_number, date, logged_at, payload)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            ON CONFLICT (user_id, id)
            DO UPDATE SET doc_type = EXCLUDED.doc_type,
                          day_number = EXCLUDED.day_number,
                          date = EXCLUDED.date,
                          logged_at = EXCLUDED.logged_at,
                          payload = EXCLUDED.payload
            "#,
        )
        .bind(id)
        .bind(user_id)
        .bind(doc_type)
        .bind(day_number)
        .bind(date)
        .bind(logged_at)
        .bind(payload)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}

#[async_trait]
impl WorkoutStore for Database {
    async fn day_definition(&self, day_number: u8) -> Result<DayDefinition> {
        let payload: Option<serde_json::Value> = sqlx::query_scalar(
            "SELECT payload FROM documents WHERE doc_type = $1 AND day_number = $2",
        )
        .bind(doc_type::DAY_DEFINITION)
        .bind(i16::from(day_number))
        .fetch_optional(&self.pool)
        .await?;

        let payload = payload.ok_or(StorageError::NotFound)?;
        Ok(serde_json::from_value(payload)?)
    }

    async fn exercises_for_day(&self, day_number: u8) -> Result<Vec<Exercise>> {
        let payloads: Vec<serde_json::Value> = sqlx::query_scalar(
            "SELECT payload FROM documents WHERE doc_type = $1 AND day_number = $2 ORDER BY id",
        )
        .bind(doc_type::EXERCISE)
        .bind(i16::from(day_number))
        .fetch_all(&self.pool)
        .await?;

        decode_all(payloads)
    }

    async fn list_logged_workouts(&self, user_id: &str) -> Result<Vec<LoggedWorkout>> {
        let payloads: Vec<serde_json::Value> = sqlx::query_scalar(
            r#"
            SELECT payload FROM documents
            WHERE doc_type = $1 AND user_id = $2
            ORDER BY date DESC, created_at DESC
            "#,
        )
        .bind(doc_type::LOGGED_WORKOUT)
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        decode_all(payloads)
    }

    async fn list_logged_workouts_for_day(
        &self,
        user_id: &str,
        day_number: u8,
    ) -> Result<Vec<LoggedWorkout>> {
        let payloads: Vec<serde_json::Value> = sqlx::query_scalar(
            r#"
            SELECT payload FROM documents
            WHERE doc_type = $1 AND user_id = $2 AND day_number = $3
            ORDER BY logged_at DESC
            "#,
        )
        .bind(doc_type::LOGGED_WORKOUT)
        .bind(user_id)
        .bind(i16::from(day_number))
        .fetch_all(&self.pool)
        .await?;

        decode_all(payloads)
    }

    async fn create_logged_workout(
        &self,
        user_id: &str,
        draft: NewLoggedWorkout,
    ) -> Result<LoggedWorkout> {
        let workout = draft.into_workout(user_id, Utc::now());

        let inserted = sqlx::query(
            r#"
            INSERT INTO documents (id, user_id, doc_type, day_number, date, logged_at, created_at, payload)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            ON CONFLICT (user_id, id) DO NOTHING
            "#,
        )
        .bind(&workout.id)
        .bind(user_id)
        .bind(doc_type::LOGGED_WORKOUT)
        .bind(i16::from(workout.day_number))
        .bind(workout.date)
        .bind(workout.timestamp)
        .bind(workout.created_at)
        .bind(serde_json::to_value(&workout)?)
        .execute(&self.pool)
        .await?;

        if inserted.rows_affected() == 0 {
            return Err(StorageError::ConstraintViolation(format!(
                "workout {} already exists",
                workout.id
            )));
        }

        Ok(workout)
    }

    async fn delete_logged_workout(&self, user_id: &str, id: &str) -> Result<()> {
        let result =
            sqlx::query("DELETE FROM documents WHERE user_id = $1 AND id = $2 AND doc_type = $3")
                .bind(user_id)
                .bind(id)
                .bind(doc_type::LOGGED_WORKOUT)
                .execute(&self.pool)
                .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }

    async fn current_day(&self, user_id: &str) -> Result<u8> {
        let payload: Option<serde_json::Value> = sqlx::query_scalar(
            "SELECT payload FROM documents WHERE user_id = $1 AND doc_type = $2",
        )
        .bind(user_id)
        .bind(doc_type::SETTINGS)
        .fetch_optional(&self.pool)
        .await?;

        match payload {
            Some(value) => {
                let settings: UserSettings = serde_json::from_value(value)?;
                Ok(settings.current_day)
            }
            None => Ok(1),
        }
    }

    async fn set_current_day(&self, user_id: &str, day: u8) -> Result<u8> {
        if !crate::cycle::is_valid_day(i64::from(day)) {
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

        self.upsert_document(
            user_id,
            &settings.id,
            doc_type::SETTINGS,
            None,
            None,
            None,
            serde_json::to_value(&settings)?,
        )
        .await?;

        Ok(day)
    }

    async fn seed_catalog(
        &self,
        days: &[DayDefinition],
        exercises: &[Exercise],
    ) -> Result<SeedSummary> {
        let mut summary = SeedSummary::default();

        for day in days {
            self.upsert_document(
                CATALOG_PARTITION,
                &day_document_id(day.day_number),
                doc_type::DAY_DEFINITION,
                Some(i16::from(day.day_number)),
                None,
                None,
                serde_json::to_value(day)?,
            )
            .await?;
            summary.workout_days += 1;
        }

        for exercise in exercises {
            self.upsert_document(
                CATALOG_PARTITION,
                &exercise_document_id(exercise),
                doc_type::EXERCISE,
                Some(i16::from(exercise.day_number)),
                None,
                None,
                serde_json::to_value(exercise)?,
            )
            .await?;
            summary.exercises += 1;
        }

        Ok(summary)
    }
}
