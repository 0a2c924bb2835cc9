use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::Recipe;

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct SearchRequest {
    pub query: String,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(transparent)]
pub struct RecipeList {
    #[schema(value_type = Vec<Recipe>)]
    pub items: Vec<Recipe>,
}
