// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{Recipe, Preferences, User, ScoredRecipe, ScoringWeights};
pub use requests::{RecipeIn, RecommendRequest};
pub use responses::{ScoredRecipeOut, HealthResponse, ErrorResponse};
