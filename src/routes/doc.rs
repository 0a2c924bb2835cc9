use utoipa::{OpenApi, openapi::OpenApi as OpenApiSpec};
use utoipa_scalar::{Scalar, Servable};

use crate::{
    dto::{
        favorites::{AddFavoriteRequest, FavoriteList},
        recipes::{RecipeList, SearchRequest},
    },
    models::Recipe,
    response::{ApiResponse, Meta},
    routes::{favorites, health, params, recipes},
};

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        recipes::search_recipes,
        favorites::list_favorites,
        favorites::add_favorite,
        favorites::get_favorite,
        favorites::remove_favorite,
        favorites::favorite_image
    ),
    components(
        schemas(
            Recipe,
            SearchRequest,
            RecipeList,
            AddFavoriteRequest,
            FavoriteList,
            health::HealthData,
            params::Pagination,
            Meta,
            ApiResponse<Recipe>,
            ApiResponse<RecipeList>,
            ApiResponse<FavoriteList>
        )
    ),
    tags(
        (name = "Health", description = "Health check endpoint"),
        (name = "Recipes", description = "Recipe generation endpoints"),
        (name = "Favorites", description = "Saved recipe endpoints"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
