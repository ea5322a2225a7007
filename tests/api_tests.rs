// HTTP API tests for the meal recommender

use actix_web::{http::StatusCode, test, web, App};
use meal_recommender::config::RecommendSettings;
use meal_recommender::core::Recommender;
use meal_recommender::models::{ErrorResponse, Preferences, Recipe, ScoredRecipeOut, User};
use meal_recommender::routes::{self, recommend::AppState};
use meal_recommender::services::RecipeCatalog;
use serde_json::json;
use std::sync::Arc;

fn recipe(id: i64, title: &str, tags: &[&str]) -> Recipe {
    Recipe {
        id,
        title: title.to_string(),
        cuisine: None,
        tags: tags.iter().map(|t| t.to_string()).collect(),
        prep_minutes: Some(10),
        cook_minutes: Some(10),
        cost_cents_est: Some(500),
        image_url: None,
    }
}

fn app_state() -> AppState {
    let recipes = vec![
        recipe(1, "Tofu Bowl", &["vegan", "quick"]),
        recipe(2, "Satay", &["peanut", "vegan"]),
        recipe(3, "Steak", &["beef"]),
    ];
    let users = vec![User {
        id: 9,
        name: "Robin".to_string(),
        preferences: Preferences {
            allergies: vec!["peanut".to_string()],
            liked: vec!["beef".to_string()],
            ..Default::default()
        },
    }];

    AppState {
        catalog: Arc::new(RecipeCatalog::with_data(recipes, users)),
        recommender: Recommender::with_default_weights(),
        settings: RecommendSettings::default(),
    }
}

macro_rules! init_app {
    () => {
        init_app!(app_state())
    };
    ($state:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new($state))
                .app_data(web::JsonConfig::default().error_handler(routes::handle_json_payload_error))
                .configure(routes::configure_routes),
        )
        .await
    };
}

#[actix_web::test]
async fn test_recommend_with_inline_prefs() {
    let app = init_app!();

    let req = test::TestRequest::post()
        .uri("/api/v1/recommend")
        .set_json(json!({
            "prefs": {"diet_tags": ["vegan"], "max_prep_min": 30, "weekly_budget_cents": 7000},
            "k": 2,
            "diversity": 0.0
        }))
        .to_request();
    let items: Vec<ScoredRecipeOut> = test::call_and_read_body_json(&app, req).await;

    assert_eq!(items.len(), 2);
    assert_eq!(items[0].recipe.id, 1);
    assert_eq!(items[0].score, 1.0);
    assert_eq!(items[1].recipe.id, 2);
}

#[actix_web::test]
async fn test_recommend_with_stored_user() {
    let app = init_app!();

    let req = test::TestRequest::post()
        .uri("/api/v1/recommend")
        .set_json(json!({"user_id": 9, "k": 3}))
        .to_request();
    let items: Vec<ScoredRecipeOut> = test::call_and_read_body_json(&app, req).await;

    assert_eq!(items.len(), 3);
    assert_eq!(items[0].recipe.id, 3);
    assert_eq!(items[0].score, 1.5);
    assert_eq!(items.last().map(|i| i.recipe.id), Some(2));
}

#[actix_web::test]
async fn test_recommend_without_prefs_uses_defaults() {
    let app = init_app!();

    let req = test::TestRequest::post()
        .uri("/api/v1/recommend")
        .set_json(json!({}))
        .to_request();
    let items: Vec<ScoredRecipeOut> = test::call_and_read_body_json(&app, req).await;

    assert_eq!(items.len(), 3);
    assert!(items.iter().all(|i| i.score == 0.0));
}

#[actix_web::test]
async fn test_recommend_user_id_zero_uses_inline_prefs() {
    let app = init_app!();

    let req = test::TestRequest::post()
        .uri("/api/v1/recommend")
        .set_json(json!({"user_id": 0, "prefs": {"liked": ["beef"]}, "k": 1}))
        .to_request();
    let items: Vec<ScoredRecipeOut> = test::call_and_read_body_json(&app, req).await;

    assert_eq!(items.len(), 1);
    assert_eq!(items[0].recipe.id, 3);
}

#[actix_web::test]
async fn test_recommend_k_covering_large_pool_returns_everything() {
    let recipes: Vec<Recipe> = (1..=150)
        .map(|id| recipe(id, &format!("Recipe {}", id), &["vegan"]))
        .collect();
    let state = AppState {
        catalog: Arc::new(RecipeCatalog::with_data(recipes, Vec::new())),
        recommender: Recommender::with_default_weights(),
        settings: RecommendSettings::default(),
    };
    let app = init_app!(state);

    let req = test::TestRequest::post()
        .uri("/api/v1/recommend")
        .set_json(json!({"k": 150}))
        .to_request();
    let items: Vec<ScoredRecipeOut> = test::call_and_read_body_json(&app, req).await;

    assert_eq!(items.len(), 150);
}

#[actix_web::test]
async fn test_recommend_rejects_k_above_configured_cap() {
    let mut state = app_state();
    state.settings.max_k = Some(2);
    let app = init_app!(state);

    let req = test::TestRequest::post()
        .uri("/api/v1/recommend")
        .set_json(json!({"k": 3}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: ErrorResponse = test::read_body_json(resp).await;
    assert_eq!(body.status_code, 400);
}

#[actix_web::test]
async fn test_recommend_unknown_user() {
    let app = init_app!();

    let req = test::TestRequest::post()
        .uri("/api/v1/recommend")
        .set_json(json!({"user_id": 404}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: ErrorResponse = test::read_body_json(resp).await;
    assert_eq!(body.status_code, 404);
}

#[actix_web::test]
async fn test_recommend_rejects_out_of_range_diversity() {
    let app = init_app!();

    let req = test::TestRequest::post()
        .uri("/api/v1/recommend")
        .set_json(json!({"diversity": 1.5}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_recommend_non_positive_k() {
    let app = init_app!();

    let req = test::TestRequest::post()
        .uri("/api/v1/recommend")
        .set_json(json!({"k": -1}))
        .to_request();
    let items: Vec<ScoredRecipeOut> = test::call_and_read_body_json(&app, req).await;

    assert!(items.is_empty());
}

#[actix_web::test]
async fn test_malformed_json_returns_error_body() {
    let app = init_app!();

    let req = test::TestRequest::post()
        .uri("/api/v1/recommend")
        .insert_header(("content-type", "application/json"))
        .set_payload("{not json")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: ErrorResponse = test::read_body_json(resp).await;
    assert_eq!(body.error, "invalid_json");
}

#[actix_web::test]
async fn test_create_and_list_recipes() {
    let app = init_app!();

    let req = test::TestRequest::post()
        .uri("/api/v1/recipes")
        .set_json(json!({"title": "Miso Soup", "cuisine": "japanese", "tags": ["vegan", "soup"]}))
        .to_request();
    let created: Recipe = test::call_and_read_body_json(&app, req).await;
    assert_eq!(created.id, 4);

    let req = test::TestRequest::get().uri("/api/v1/recipes").to_request();
    let recipes: Vec<Recipe> = test::call_and_read_body_json(&app, req).await;
    assert_eq!(recipes.len(), 4);
    assert_eq!(recipes[3].title, "Miso Soup");
}

#[actix_web::test]
async fn test_create_recipe_rejects_empty_title() {
    let app = init_app!();

    let req = test::TestRequest::post()
        .uri("/api/v1/recipes")
        .set_json(json!({"title": ""}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_health() {
    let app = init_app!();

    let req = test::TestRequest::get().uri("/api/v1/health").to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["status"], "healthy");
    assert_eq!(body["recipes"], 3);
}
