use std::sync::Arc;

use anyhow::Context;
use storage::{catalog, Database, WorkoutStore};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;
use web::config::Config;
use web::middleware::auth::AccessTokens;
use web::{build_router, AppState};

#[derive(OpenApi)]
#[openapi(
    paths(
        web::features::health::handlers::health_check,
        web::features::catalog::handlers::get_workout_day,
        web::features::catalog::handlers::list_exercises_for_day,
        web::features::workouts::handlers::list_logged_workouts,
        web::features::workouts::handlers::log_workout,
        web::features::workouts::handlers::list_workouts_legacy,
        web::features::workouts::handlers::list_workouts_by_day,
        web::features::workouts::handlers::create_workout,
        web::features::workouts::handlers::bulk_import_workouts,
        web::features::workouts::handlers::delete_workout,
        web::features::settings::handlers::get_current_day,
        web::features::settings::handlers::update_current_day,
        web::features::admin::handlers::init_database,
    ),
    components(
        schemas(
            storage::models::DayDefinition,
            storage::models::Exercise,
            storage::models::RepTarget,
            storage::models::LoggedWorkout,
            storage::models::CompletedExercise,
            storage::models::WorkoutMode,
            storage::models::UserSettings,
            storage::dto::catalog::WorkoutDayResponse,
            storage::dto::catalog::ExerciseListResponse,
            storage::dto::workout::LogWorkoutRequest,
            storage::dto::workout::LegacyCreateWorkoutRequest,
            storage::dto::workout::NewLoggedWorkout,
            storage::dto::workout::WorkoutResponse,
            storage::dto::workout::WorkoutListResponse,
            storage::dto::workout::LegacyWorkout,
            storage::dto::workout::LegacyWorkoutListResponse,
            storage::dto::workout::DeleteWorkoutResponse,
            storage::dto::workout::BulkImportFailure,
            storage::dto::workout::BulkImportResponse,
            storage::dto::settings::CurrentDayResponse,
            storage::dto::settings::UpdateCurrentDayRequest,
            storage::dto::admin::SeedSummary,
            storage::dto::admin::InitDatabaseResponse,
            web::features::health::handlers::HealthResponse,
        )
    ),
    tags(
        (name = "health", description = "Service health"),
        (name = "catalog", description = "Public rotation-day and exercise reference data"),
        (name = "workouts", description = "Per-user workout log"),
        (name = "settings", description = "Per-user rotation pointer"),
        (name = "admin", description = "Reference-data seeding"),
    ),
    modifiers(&SecurityAddon)
)]
struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                utoipa::openapi::security::SecurityScheme::Http(
                    utoipa::openapi::security::HttpBuilder::new()
                        .scheme(utoipa::openapi::security::HttpAuthScheme::Bearer)
                        .bearer_format("Token")
                        .build(),
                ),
            )
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    tracing::info!("Starting Workout Cycle Tracker API");

    let config = Config::from_env().context("Failed to load API configuration")?;
    tracing::info!("Configuration loaded successfully");

    tracing::info!(
        "Connecting to database at: {}",
        config
            .database_url
            .split('@')
            .next_back()
            .unwrap_or("unknown")
    );
    let db = Database::new(&config.database_url)
        .await
        .context("Failed to initialize database")?;
    tracing::info!("Database connection established");

    tracing::info!("Running database migrations");
    db.run_migrations()
        .await
        .context("Failed to run migrations")?;
    tracing::info!("Database migrations completed successfully");

    let seeded = db
        .seed_catalog(&catalog::workout_days(), &catalog::exercise_library())
        .await
        .context("Failed to seed the exercise catalog")?;
    tracing::info!(
        workout_days = seeded.workout_days,
        exercises = seeded.exercises,
        "Reference catalog seeded"
    );

    let state = AppState {
        store: Arc::new(db),
        tokens: AccessTokens::from_comma_separated(&config.access_tokens),
        database: config.database_name.clone(),
        container: config.container_name.clone(),
        allowed_origins: config.allowed_origins.clone(),
    };

    let bind_address = format!("{}:{}", config.host, config.port);
    tracing::info!("Starting server at http://{}", bind_address);
    tracing::info!(
        "Swagger UI available at http://{}/swagger-ui/",
        bind_address
    );

    let app = build_router(state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .context("Failed to bind server address")?;
    axum::serve(listener, app).await?;

    Ok(())
}
