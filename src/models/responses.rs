use serde::{Deserialize, Serialize};
use crate::models::domain::Recipe;

/// One recommended recipe with its rounded score
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredRecipeOut {
    pub recipe: Recipe,
    pub score: f64,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    pub recipes: usize,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
