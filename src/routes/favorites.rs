use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::header,
    response::{IntoResponse, Redirect, Response},
    routing::get,
};

use crate::{
    dto::favorites::{AddFavoriteRequest, FavoriteList},
    error::{AppError, AppResult},
    image::ImageSource,
    models::Recipe,
    response::ApiResponse,
    routes::params::Pagination,
    services::favorite_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_favorites).post(add_favorite))
        .route("/{id}", get(get_favorite).delete(remove_favorite))
        .route("/{id}/image", get(favorite_image))
}

#[utoipa::path(
    get,
    path = "/api/favorites",
    params(Pagination),
    responses(
        (status = 200, description = "List favorites, newest first", body = ApiResponse<FavoriteList>)
    ),
    tag = "Favorites"
)]
pub async fn list_favorites(
    State(state): State<AppState>,
    Query(pagination): Query<Pagination>,
) -> AppResult<Json<ApiResponse<FavoriteList>>> {
    let response = favorite_service::list_favorites(&state.recipes, pagination).await?;
    Ok(Json(response))
}

#[utoipa::path(
    post,
    path = "/api/favorites",
    request_body = AddFavoriteRequest,
    responses(
        (status = 200, description = "Added to favorites", body = ApiResponse<Recipe>),
        (status = 400, description = "Bad Request")
    ),
    tag = "Favorites"
)]
pub async fn add_favorite(
    State(state): State<AppState>,
    Json(payload): Json<AddFavoriteRequest>,
) -> AppResult<Json<ApiResponse<Recipe>>> {
    let response = favorite_service::add_favorite(&state.recipes, payload).await?;
    Ok(Json(response))
}

#[utoipa::path(
    get,
    path = "/api/favorites/{id}",
    params(
        ("id" = i32, Path, description = "Favorite ID")
    ),
    responses(
        (status = 200, description = "Favorite recipe", body = ApiResponse<Recipe>),
        (status = 404, description = "Favorite not found")
    ),
    tag = "Favorites"
)]
pub async fn get_favorite(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<ApiResponse<Recipe>>> {
    let response = favorite_service::get_favorite(&state.recipes, id).await?;
    Ok(Json(response))
}

#[utoipa::path(
    delete,
    path = "/api/favorites/{id}",
    params(
        ("id" = i32, Path, description = "Favorite ID")
    ),
    responses(
        (status = 200, description = "Removed from favorites", body = ApiResponse<serde_json::Value>),
        (status = 404, description = "Favorite not found")
    ),
    tag = "Favorites"
)]
pub async fn remove_favorite(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    let response = favorite_service::remove_favorite(&state.recipes, id).await?;
    Ok(Json(response))
}

#[utoipa::path(
    get,
    path = "/api/favorites/{id}/image",
    params(
        ("id" = i32, Path, description = "Favorite ID")
    ),
    responses(
        (status = 200, description = "Inline image bytes"),
        (status = 307, description = "Redirect to the remote image"),
        (status = 404, description = "Favorite or image not found")
    ),
    tag = "Favorites"
)]
pub async fn favorite_image(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Response> {
    let response = match favorite_service::favorite_image(&state.recipes, id).await? {
        ImageSource::Inline { mime_type, bytes } => {
            ([(header::CONTENT_TYPE, mime_type)], bytes).into_response()
        }
        ImageSource::Remote(url) => Redirect::temporary(&url).into_response(),
        ImageSource::Missing => return Err(AppError::NotFound),
    };
    Ok(response)
}
