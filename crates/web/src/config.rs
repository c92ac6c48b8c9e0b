use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    /// Logical database/collection names reported by the health endpoint.
    pub database_name: String,
    pub container_name: String,
    /// Origins allowed to call the API with credentials.
    pub allowed_origins: Vec<String>,
    /// Comma-separated `token:subject` pairs accepted as bearer tokens.
    pub access_tokens: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            host: std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .context("PORT must be a number")?,
            database_url: std::env::var("DATABASE_URL")
                .context("Cannot load DATABASE_URL env variable")?,
            database_name: std::env::var("DATABASE_NAME")
                .unwrap_or_else(|_| "WorkoutTrackerDB".to_string()),
            container_name: std::env::var("CONTAINER_NAME")
                .unwrap_or_else(|_| "workouts".to_string()),
            allowed_origins: std::env::var("ALLOWED_ORIGINS")
                .unwrap_or_else(|_| "http://localhost:5173".to_string())
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from)
                .collect(),
            access_tokens: std::env::var("ACCESS_TOKENS").unwrap_or_default(),
        })
    }
}
