use std::collections::HashSet;

use crate::{
    dto::recipes::{RecipeList, SearchRequest},
    error::{AppError, AppResult},
    generation::{ImageGenerator, TextGenerator},
    models::mark_favorites,
    repository::RecipeRepository,
    response::{ApiResponse, Meta},
};

pub async fn search_recipes<T, I>(
    repository: &RecipeRepository<T, I>,
    payload: SearchRequest,
) -> AppResult<ApiResponse<RecipeList>>
where
    T: TextGenerator,
    I: ImageGenerator + 'static,
{
    let query = payload.query.trim();
    if query.is_empty() {
        return Err(AppError::BadRequest("query must not be blank".to_string()));
    }

    let mut items = repository.search(query).await?;

    let favorite_ids: HashSet<i32> = repository.favorites().borrow().iter().map(|r| r.id).collect();
    mark_favorites(&mut items, &favorite_ids);

    let message = if items.is_empty() {
        "No recipes found"
    } else {
        "OK"
    };
    let meta = Meta::total(items.len() as i64);
    Ok(ApiResponse::success(message, RecipeList { items }, Some(meta)))
}
