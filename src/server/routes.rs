// src/server/routes.rs
//! Axum router configuration for the Larder server
//!
//! Routes:
//! - `/health` - liveness probe
//! - `/recipes` - list and create
//! - `/recipes/:id` - fetch, replace, delete
//! - `/recipes/search/:filter` - substring search over title/description
//! - `/recipes/ingredients/:filter` - substring search over ingredients

use crate::server::handlers::recipes;
use crate::server::SharedState;
use axum::{
    routing::{delete, get, post, put},
    Router,
};
use tower_http::cors::{Any, CorsLayer};

/// Create the main application router
pub fn create_router(state: SharedState) -> Router {
    // CORS configuration - permissive for now
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health check
        .route("/health", get(health_check))
        // Recipe collection
        .route("/recipes", get(recipes::list_recipes))
        .route("/recipes", post(recipes::create_recipe))
        // Substring search (registered before :id so the literal segments win)
        .route("/recipes/search/:filter", get(recipes::search_text))
        .route("/recipes/ingredients/:filter", get(recipes::search_ingredients))
        // Single recipe
        .route("/recipes/:id", get(recipes::get_recipe))
        .route("/recipes/:id", put(recipes::update_recipe))
        .route("/recipes/:id", delete(recipes::delete_recipe))
        .with_state(state)
        .layer(cors)
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
