use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::Recipe;

/// A recipe to save. Any id the client holds is ignored, the store allocates a new one.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct AddFavoriteRequest {
    pub title: String,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub instructions: Vec<String>,
    #[serde(default)]
    pub duration: String,
}

impl From<AddFavoriteRequest> for Recipe {
    fn from(request: AddFavoriteRequest) -> Self {
        Recipe {
            id: 0,
            title: request.title,
            image_url: request.image_url,
            ingredients: request.ingredients,
            instructions: request.instructions,
            duration: request.duration,
            is_favorite: false,
        }
    }
}

impl From<&Recipe> for AddFavoriteRequest {
    fn from(recipe: &Recipe) -> Self {
        AddFavoriteRequest {
            title: recipe.title.clone(),
            image_url: recipe.image_url.clone(),
            ingredients: recipe.ingredients.clone(),
            instructions: recipe.instructions.clone(),
            duration: recipe.duration.clone(),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(transparent)]
pub struct FavoriteList {
    #[schema(value_type = Vec<Recipe>)]
    pub items: Vec<Recipe>,
}
