use crate::models::{Recipe, Preferences, ScoringWeights};
use crate::core::{
    penalties::{per_meal_budget, soft_penalty_over},
    similarity::{has_any_tag, jaccard_sets, normalize_tags},
};

/// Calculate a recipe score against a user's preferences
///
/// Scoring formula (default weights):
/// score = (
///     -10.0 if any allergy label is tagged +      # flat, not per label
///     -3.0 if any disliked label is tagged +      # flat, not per label
///     2.0 * jaccard(tags, diet_tags) +
///     1.5 * jaccard(tags, liked) +
///     0.8 if cuisine is one of diet_tags +
///     soft_penalty(prep + cook, max_prep_min) +
///     soft_penalty(cost, weekly_budget / 7)
/// )
///
/// The function is pure: the same inputs always give the same score.
pub fn score_recipe(
    recipe: &Recipe,
    preferences: &Preferences,
    weights: &ScoringWeights,
) -> f64 {
    let tags = normalize_tags(&recipe.tags);
    let mut score = 0.0;

    // Hard-avoid signals
    if has_any_tag(&tags, &preferences.allergies) {
        score += weights.allergy;
    }
    if has_any_tag(&tags, &preferences.disliked) {
        score += weights.disliked;
    }

    // Positive matches
    let diet_tags = normalize_tags(&preferences.diet_tags);
    score += weights.diet_tag * jaccard_sets(&tags, &diet_tags);
    score += weights.liked * jaccard_sets(&tags, &normalize_tags(&preferences.liked));

    if cuisine_matches(recipe.cuisine.as_deref(), &diet_tags) {
        score += weights.cuisine;
    }

    // Time and cost soft constraints
    score += soft_penalty_over(
        Some(recipe.total_minutes()),
        preferences.max_prep_min,
        weights.time,
    );
    score += soft_penalty_over(
        Some(recipe.cost_cents()),
        per_meal_budget(preferences.weekly_budget_cents),
        weights.cost,
    );

    score
}

/// Diet tags double as the cuisine preference, so an empty diet list never
/// earns the cuisine bonus.
#[inline]
fn cuisine_matches(cuisine: Option<&str>, diet_tags: &std::collections::HashSet<String>) -> bool {
    match cuisine {
        Some(c) if !c.is_empty() && !diet_tags.is_empty() => diet_tags.contains(&c.to_lowercase()),
        _ => false,
    }
}

/// Round a score to 4 decimal places for presentation
///
/// Rounds the exact binary value, so `2.00025` (stored as 2.000249999...) gives `2.0002`.
pub fn round_score(score: f64) -> f64 {
    format!("{:.4}", score).parse().unwrap_or(score)
}
