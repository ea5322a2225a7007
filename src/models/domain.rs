use serde::{Deserialize, Serialize};

/// A recipe in the candidate pool
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub cuisine: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub prep_minutes: Option<u32>,
    #[serde(default)]
    pub cook_minutes: Option<u32>,
    #[serde(default)]
    pub cost_cents_est: Option<u32>,
    #[serde(default)]
    pub image_url: Option<String>,
}

impl Recipe {
    /// Combined prep and cook time, missing parts count as zero
    pub fn total_minutes(&self) -> u32 {
        self.prep_minutes
            .unwrap_or(0)
            .saturating_add(self.cook_minutes.unwrap_or(0))
    }

    /// Estimated cost, defaulting to zero when unknown
    pub fn cost_cents(&self) -> u32 {
        self.cost_cents_est.unwrap_or(0)
    }
}

/// Recommendation preferences for a single user or an ad-hoc request
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Preferences {
    pub diet_tags: Vec<String>,
    pub allergies: Vec<String>,
    pub disliked: Vec<String>,
    pub liked: Vec<String>,
    pub weekly_budget_cents: Option<u32>,
    pub max_prep_min: Option<u32>,
}

/// Stored user with their preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    #[serde(flatten)]
    pub preferences: Preferences,
}

/// A recipe paired with its score
///
/// Scores have no fixed range and may be negative; only the ordering matters.
#[derive(Debug, Clone, Copy)]
pub struct ScoredRecipe<'a> {
    pub recipe: &'a Recipe,
    pub score: f64,
}

/// Scoring weights
///
/// Penalty weights are negative, bonus weights positive. The time and cost
/// entries are strengths of the quadratic soft penalties.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringWeights {
    pub allergy: f64,
    pub disliked: f64,
    pub diet_tag: f64,
    pub liked: f64,
    pub cuisine: f64,
    pub time: f64,
    pub cost: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            allergy: -10.0,
            disliked: -3.0,
            diet_tag: 2.0,
            liked: 1.5,
            cuisine: 0.8,
            time: 1.0,
            cost: 1.0,
        }
    }
}
