use actix_web::{web, HttpResponse, Responder};
use validator::Validate;
use crate::config::RecommendSettings;
use crate::core::{round_score, Recommender};
use crate::models::{ErrorResponse, HealthResponse, RecipeIn, RecommendRequest, ScoredRecipeOut};
use crate::services::{CatalogError, RecipeCatalog};
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<RecipeCatalog>,
    pub recommender: Recommender,
    pub settings: RecommendSettings,
}

/// Configure all recipe and recommendation routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/recipes", web::get().to(list_recipes))
        .route("/recipes", web::post().to(create_recipe))
        .route("/recommend", web::post().to(recommend));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
        recipes: state.catalog.recipe_count().await,
    })
}

/// List all recipes
///
/// GET /api/v1/recipes
async fn list_recipes(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(state.catalog.recipes().await)
}

/// Add a recipe to the catalog
///
/// POST /api/v1/recipes
///
/// Request body:
/// ```json
/// {
///   "title": "string",
///   "cuisine": "string",
///   "tags": ["string"],
///   "prep_minutes": 10,
///   "cook_minutes": 20,
///   "cost_cents_est": 450,
///   "image_url": "string"
/// }
/// ```
async fn create_recipe(
    state: web::Data<AppState>,
    req: web::Json<RecipeIn>,
) -> impl Responder {
    match state.catalog.add_recipe(req.into_inner()).await {
        Ok(recipe) => {
            tracing::info!("Created recipe {} ({})", recipe.id, recipe.title);
            HttpResponse::Ok().json(recipe)
        }
        Err(e) => {
            tracing::info!("Rejected recipe: {}", e);
            HttpResponse::BadRequest().json(ErrorResponse {
                error: "Validation failed".to_string(),
                message: e.to_string(),
                status_code: 400,
            })
        }
    }
}

/// Recommend recipes
///
/// POST /api/v1/recommend
///
/// Request body:
/// ```json
/// {
///   "user_id": 1,
///   "prefs": { "diet_tags": ["vegan"], "max_prep_min": 30 },
///   "k": 10,
///   "diversity": 0.2
/// }
/// ```
async fn recommend(
    state: web::Data<AppState>,
    req: web::Json<RecommendRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for recommend request: {:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let req = req.into_inner();

    // Stored user preferences win over inline ones; id 0 means no user
    let preferences = match req.user_id.filter(|&id| id != 0) {
        Some(user_id) => match state.catalog.user_preferences(user_id).await {
            Ok(prefs) => prefs,
            Err(e @ CatalogError::UserNotFound(_)) => {
                return HttpResponse::NotFound().json(ErrorResponse {
                    error: "User not found".to_string(),
                    message: e.to_string(),
                    status_code: 404,
                });
            }
            Err(e) => {
                tracing::error!("Failed to resolve preferences for user {}: {}", user_id, e);
                return HttpResponse::InternalServerError().json(ErrorResponse {
                    error: "Failed to resolve preferences".to_string(),
                    message: e.to_string(),
                    status_code: 500,
                });
            }
        },
        None => req.prefs.unwrap_or_default(),
    };

    let k = match resolve_k(req.k, &state.settings) {
        Ok(k) => k,
        Err(message) => {
            tracing::info!("Rejected recommend request: {}", message);
            return HttpResponse::BadRequest().json(ErrorResponse {
                error: "Validation failed".to_string(),
                message,
                status_code: 400,
            });
        }
    };
    let diversity = req.diversity.unwrap_or(state.settings.default_diversity);

    let candidates = state.catalog.recipes().await;
    let result = state
        .recommender
        .recommend(&preferences, &candidates, k, diversity);

    let response: Vec<ScoredRecipeOut> = result
        .items
        .iter()
        .map(|item| ScoredRecipeOut {
            recipe: item.recipe.clone(),
            score: round_score(item.score),
        })
        .collect();

    tracing::info!(
        "Returning {} recommendations (from {} candidates, user: {:?})",
        response.len(),
        result.total_candidates,
        req.user_id
    );

    HttpResponse::Ok().json(response)
}

/// Apply the configured default; non-positive requests yield zero
///
/// A `k` above a configured `max_k` is an error rather than a silent truncation.
fn resolve_k(requested: Option<i64>, settings: &RecommendSettings) -> Result<usize, String> {
    let k = match requested {
        Some(k) if k <= 0 => return Ok(0),
        Some(k) => usize::try_from(k).unwrap_or(usize::MAX),
        None => return Ok(settings.max_k.map_or(settings.default_k, |max| settings.default_k.min(max))),
    };

    match settings.max_k {
        Some(max) if k > max => Err(format!("k must be at most {}, got {}", max, k)),
        _ => Ok(k),
    }
}
