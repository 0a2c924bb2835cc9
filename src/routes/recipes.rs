use axum::{Json, Router, extract::State, routing::post};

use crate::{
    dto::recipes::{RecipeList, SearchRequest},
    error::AppResult,
    response::ApiResponse,
    services::recipe_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new().route("/search", post(search_recipes))
}

#[utoipa::path(
    post,
    path = "/api/recipes/search",
    request_body = SearchRequest,
    responses(
        (status = 200, description = "Generated recipes, flagged when already favorited", body = ApiResponse<RecipeList>),
        (status = 400, description = "Blank query")
    ),
    tag = "Recipes"
)]
pub async fn search_recipes(
    State(state): State<AppState>,
    Json(payload): Json<SearchRequest>,
) -> AppResult<Json<ApiResponse<RecipeList>>> {
    let response = recipe_service::search_recipes(&state.recipes, payload).await?;
    Ok(Json(response))
}
