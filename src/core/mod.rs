// Core algorithm exports
pub mod diversify;
pub mod penalties;
pub mod recommender;
pub mod scoring;
pub mod similarity;

pub use diversify::diversify;
pub use penalties::{soft_penalty_over, per_meal_budget, MEALS_PER_WEEK};
pub use recommender::{Recommender, RecommendationResult};
pub use scoring::{score_recipe, round_score};
pub use similarity::{jaccard, jaccard_sets, normalize_tags};
