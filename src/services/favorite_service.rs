use crate::{
    dto::favorites::{AddFavoriteRequest, FavoriteList},
    error::{AppError, AppResult},
    generation::{ImageGenerator, TextGenerator},
    image::ImageSource,
    models::Recipe,
    repository::RecipeRepository,
    response::{ApiResponse, Meta},
    routes::params::Pagination,
};

pub async fn list_favorites<T, I>(
    repository: &RecipeRepository<T, I>,
    pagination: Pagination,
) -> AppResult<ApiResponse<FavoriteList>>
where
    T: TextGenerator,
    I: ImageGenerator + 'static,
{
    let (page, limit, offset) = pagination.normalize();
    let store = repository.store();
    let items = store.list_page(limit as u64, offset as u64).await?;
    let total = store.count().await?;

    let meta = Meta::new(page, limit, total as i64);
    Ok(ApiResponse::success("OK", FavoriteList { items }, Some(meta)))
}

pub async fn get_favorite<T, I>(
    repository: &RecipeRepository<T, I>,
    id: i32,
) -> AppResult<ApiResponse<Recipe>>
where
    T: TextGenerator,
    I: ImageGenerator + 'static,
{
    let recipe = repository.store().get(id).await?.ok_or(AppError::NotFound)?;
    Ok(ApiResponse::success("OK", recipe, Some(Meta::empty())))
}

pub async fn add_favorite<T, I>(
    repository: &RecipeRepository<T, I>,
    payload: AddFavoriteRequest,
) -> AppResult<ApiResponse<Recipe>>
where
    T: TextGenerator,
    I: ImageGenerator + 'static,
{
    if payload.title.trim().is_empty() {
        return Err(AppError::BadRequest("title must not be blank".to_string()));
    }

    let saved = repository.add_favorite(&Recipe::from(payload)).await?;

    Ok(ApiResponse::success(
        "Added to favorites",
        saved,
        Some(Meta::empty()),
    ))
}

pub async fn remove_favorite<T, I>(
    repository: &RecipeRepository<T, I>,
    id: i32,
) -> AppResult<ApiResponse<serde_json::Value>>
where
    T: TextGenerator,
    I: ImageGenerator + 'static,
{
    if !repository.remove_favorite(id).await? {
        return Err(AppError::NotFound);
    }

    Ok(ApiResponse::success(
        "Removed from favorites",
        serde_json::json!({}),
        Some(Meta::empty()),
    ))
}

/// Resolves the image of a stored favorite. Favorites without an image are `NotFound`.
pub async fn favorite_image<T, I>(
    repository: &RecipeRepository<T, I>,
    id: i32,
) -> AppResult<ImageSource>
where
    T: TextGenerator,
    I: ImageGenerator + 'static,
{
    let recipe = repository.store().get(id).await?.ok_or(AppError::NotFound)?;
    match ImageSource::from_url(&recipe.image_url) {
        ImageSource::Missing => Err(AppError::NotFound),
        source => Ok(source),
    }
}
