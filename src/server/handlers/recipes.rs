// src/server/handlers/recipes.rs
//! Recipe CRUD and search handlers
//!
//! Handlers are direct translations onto `RecipeStore` operations. Errors
//! surface as plain-text bodies with the matching status code; not-found
//! responses carry the exact message `Recipe with id {id} not found`.

use crate::model::{Recipe, RecipeDraft};
use crate::server::SharedState;
use crate::store::StoreError;
use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use tracing::{error, info};

/// Error response wrapper mapping store errors to HTTP responses
pub struct ApiError(StoreError);

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self.0 {
            StoreError::NotFound(_) => {
                (StatusCode::NOT_FOUND, self.0.to_string()).into_response()
            }
            StoreError::IdCollision(id) => {
                error!("identifier collision inserting recipe {id}");
                (StatusCode::INTERNAL_SERVER_ERROR, self.0.to_string()).into_response()
            }
        }
    }
}

/// Result type for API handlers
pub type ApiResult<T> = Result<T, ApiError>;

/// List all recipes
///
/// GET /recipes
pub async fn list_recipes(State(state): State<SharedState>) -> Json<Vec<Recipe>> {
    Json(state.store.list())
}

/// Fetch a single recipe
///
/// GET /recipes/:id
pub async fn get_recipe(
    State(state): State<SharedState>,
    Path(id): Path<u64>,
) -> ApiResult<Json<Recipe>> {
    let recipe = state.store.get(id)?;
    Ok(Json(recipe))
}

/// Search recipes by title or description substring
///
/// GET /recipes/search/:filter
pub async fn search_text(
    State(state): State<SharedState>,
    Path(filter): Path<String>,
) -> Json<Vec<Recipe>> {
    Json(state.store.search_text(&filter))
}

/// Search recipes by ingredient substring
///
/// GET /recipes/ingredients/:filter
pub async fn search_ingredients(
    State(state): State<SharedState>,
    Path(filter): Path<String>,
) -> Json<Vec<Recipe>> {
    Json(state.store.search_ingredients(&filter))
}

/// Create a new recipe
///
/// POST /recipes
///
/// Returns 201 Created with a Location header pointing at the new recipe.
/// A counter/insert collision is an invariant violation and answers 500.
pub async fn create_recipe(
    State(state): State<SharedState>,
    Json(draft): Json<RecipeDraft>,
) -> ApiResult<(StatusCode, [(header::HeaderName, String); 1], Json<Recipe>)> {
    let recipe = state.store.create(draft)?;
    info!("created recipe {} ({})", recipe.id, recipe.title);

    let location = format!("/recipes/{}", recipe.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(recipe),
    ))
}

/// Replace an existing recipe
///
/// PUT /recipes/:id
///
/// Full replacement: the stored record is rebuilt from the request body
/// with the path identifier re-asserted. 404 if the id does not exist.
pub async fn update_recipe(
    State(state): State<SharedState>,
    Path(id): Path<u64>,
    Json(draft): Json<RecipeDraft>,
) -> ApiResult<(StatusCode, [(header::HeaderName, String); 1], Json<Recipe>)> {
    let recipe = state.store.update(id, draft)?;
    info!("replaced recipe {id}");

    let location = format!("/recipes/{id}");
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(recipe),
    ))
}

/// Delete a recipe
///
/// DELETE /recipes/:id
pub async fn delete_recipe(
    State(state): State<SharedState>,
    Path(id): Path<u64>,
) -> ApiResult<StatusCode> {
    state.store.delete(id)?;
    info!("deleted recipe {id}");
    Ok(StatusCode::NO_CONTENT)
}
