use crate::models::{Recipe, Preferences, ScoredRecipe, ScoringWeights};
use crate::core::{diversify::diversify, scoring::score_recipe};

/// Result of a recommendation pass
#[derive(Debug)]
pub struct RecommendationResult<'a> {
    pub items: Vec<ScoredRecipe<'a>>,
    pub total_candidates: usize,
}

/// Recommendation orchestrator
///
/// # Pipeline Stages
/// 1. Score every candidate independently
/// 2. Sort by score (descending, stable)
/// 3. Diversify the sorted pool down to `k`
#[derive(Debug, Clone)]
pub struct Recommender {
    weights: ScoringWeights,
}

impl Recommender {
    pub fn new(weights: ScoringWeights) -> Self {
        Self { weights }
    }

    pub fn with_default_weights() -> Self {
        Self {
            weights: ScoringWeights::default(),
        }
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    /// Score all candidates and sort them by score, highest first
    ///
    /// Equal scores keep their input order.
    pub fn score_pool<'a>(
        &self,
        preferences: &Preferences,
        candidates: &'a [Recipe],
    ) -> Vec<ScoredRecipe<'a>> {
        let mut scored: Vec<ScoredRecipe<'a>> = candidates
            .iter()
            .map(|recipe| ScoredRecipe {
                recipe,
                score: score_recipe(recipe, preferences, &self.weights),
            })
            .collect();

        scored.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        scored
    }

    /// Recommend up to `k` recipes for the given preferences
    ///
    /// # Arguments
    /// * `preferences` - The user's (or request's) preferences
    /// * `candidates` - The whole candidate pool
    /// * `k` - Maximum number of recipes to return
    /// * `diversity` - Diversity weight in 0.0..=1.0, validated by the caller
    pub fn recommend<'a>(
        &self,
        preferences: &Preferences,
        candidates: &'a [Recipe],
        k: usize,
        diversity: f64,
    ) -> RecommendationResult<'a> {
        let scored = self.score_pool(preferences, candidates);
        let items = diversify(&scored, diversity, k);

        tracing::debug!(
            "Recommended {} of {} candidates (k: {}, diversity: {})",
            items.len(),
            candidates.len(),
            k,
            diversity
        );

        RecommendationResult {
            items,
            total_candidates: candidates.len(),
        }
    }
}

impl Default for Recommender {
    fn default() -> Self {
        Self::with_default_weights()
    }
}
