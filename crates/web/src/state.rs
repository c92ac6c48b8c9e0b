use std::sync::Arc;

use storage::WorkoutStore;

use crate::middleware::auth::AccessTokens;

/// Shared application state. Handlers reach persistence only through the
/// `WorkoutStore` contract, so any backend satisfying it can serve the API.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn WorkoutStore>,
    pub tokens: AccessTokens,
    /// Logical database/collection names reported by the health endpoint.
    pub database: String,
    pub container: String,
    pub allowed_origins: Vec<String>,
}
