use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::domain::{Preferences, Recipe};

/// Request to add a recipe to the catalog
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RecipeIn {
    #[validate(length(min = 1, max = 200))]
    pub title: String,
    #[validate(length(max = 50))]
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
    #[validate(length(max = 400))]
    #[serde(default)]
    pub image_url: Option<String>,
}

impl RecipeIn {
    pub fn into_recipe(self, id: i64) -> Recipe {
        Recipe {
            id,
            title: self.title,
            cuisine: self.cuisine,
            tags: self.tags,
            prep_minutes: self.prep_minutes,
            cook_minutes: self.cook_minutes,
            cost_cents_est: self.cost_cents_est,
            image_url: self.image_url,
        }
    }
}

/// Request for recommendations
///
/// `user_id` takes precedence over inline `prefs`. When neither is present
/// the request is scored against empty preferences.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct RecommendRequest {
    #[serde(default)]
    pub user_id: Option<i64>,
    #[serde(default)]
    pub prefs: Option<Preferences>,
    #[serde(default)]
    pub k: Option<i64>,
    #[validate(range(min = 0.0, max = 1.0))]
    #[serde(default)]
    pub diversity: Option<f64>,
}
