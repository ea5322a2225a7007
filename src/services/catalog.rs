use crate::models::{Preferences, Recipe, RecipeIn, User};
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;
use tokio::sync::RwLock;
use validator::Validate;

/// Errors that can occur with catalog operations
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read seed file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse seed file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("User not found: {0}")]
    UserNotFound(i64),

    #[error("Invalid recipe: {0}")]
    InvalidRecipe(String),
}

/// In-memory recipe and user store
///
/// Stands in for the relational store: it hands out snapshots of the
/// candidate pool and resolves stored user preferences.
pub struct RecipeCatalog {
    recipes: RwLock<Vec<Recipe>>,
    users: RwLock<HashMap<i64, User>>,
}

impl RecipeCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::with_data(Vec::new(), Vec::new())
    }

    /// Create a catalog from already-built recipes and users
    pub fn with_data(recipes: Vec<Recipe>, users: Vec<User>) -> Self {
        Self {
            recipes: RwLock::new(recipes),
            users: RwLock::new(users.into_iter().map(|u| (u.id, u)).collect()),
        }
    }

    /// Create a catalog from seed files
    ///
    /// Either path may be omitted, leaving that part of the catalog empty.
    pub fn from_seed_files(
        recipes_path: Option<&Path>,
        users_path: Option<&Path>,
    ) -> Result<Self, CatalogError> {
        let recipes = match recipes_path {
            Some(path) => load_recipes(path)?,
            None => Vec::new(),
        };
        let users = match users_path {
            Some(path) => load_users(path)?,
            None => Vec::new(),
        };

        tracing::info!("Seeded catalog with {} recipes and {} users", recipes.len(), users.len());

        Ok(Self::with_data(recipes, users))
    }

    /// Snapshot of every recipe, in insertion order
    pub async fn recipes(&self) -> Vec<Recipe> {
        self.recipes.read().await.clone()
    }

    pub async fn recipe_count(&self) -> usize {
        self.recipes.read().await.len()
    }

    /// Validate and store a new recipe, assigning the next free id
    pub async fn add_recipe(&self, input: RecipeIn) -> Result<Recipe, CatalogError> {
        input
            .validate()
            .map_err(|e| CatalogError::InvalidRecipe(e.to_string()))?;

        let mut recipes = self.recipes.write().await;
        let id = recipes.iter().map(|r| r.id).max().unwrap_or(0) + 1;
        let recipe = input.into_recipe(id);
        recipes.push(recipe.clone());

        tracing::debug!("Stored recipe {} ({})", recipe.id, recipe.title);
        Ok(recipe)
    }

    /// Resolve the stored preferences of a user
    pub async fn user_preferences(&self, user_id: i64) -> Result<Preferences, CatalogError> {
        self.users
            .read()
            .await
            .get(&user_id)
            .map(|u| u.preferences.clone())
            .ok_or(CatalogError::UserNotFound(user_id))
    }
}

impl Default for RecipeCatalog {
    fn default() -> Self {
        Self::new()
    }
}

/// Load recipes from a JSON array, numbering them from 1 in file order
pub fn load_recipes(path: &Path) -> Result<Vec<Recipe>, CatalogError> {
    let raw = std::fs::read_to_string(path)?;
    let inputs: Vec<RecipeIn> = serde_json::from_str(&raw)?;

    inputs
        .into_iter()
        .zip(1..)
        .map(|(input, id)| -> Result<Recipe, CatalogError> {
            input.validate().map_err(|e| {
                CatalogError::InvalidRecipe(format!("entry {} in {}: {}", id, path.display(), e))
            })?;
            Ok(input.into_recipe(id))
        })
        .collect()
}

/// Load users from a JSON array
pub fn load_users(path: &Path) -> Result<Vec<User>, CatalogError> {
    let raw = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}
