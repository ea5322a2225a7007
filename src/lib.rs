//! Meal Recommender - preference-scored, diversity-aware recipe recommendations
//!
//! Every candidate recipe is scored against a user's preferences with a
//! hand-tuned linear model, then the sorted pool is re-ranked greedily so the
//! top-K list does not fill up with near-duplicates.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{Recommender, RecommendationResult, diversify, score_recipe, jaccard};
pub use crate::models::{Recipe, Preferences, ScoredRecipe, ScoringWeights, RecommendRequest, ScoredRecipeOut};
