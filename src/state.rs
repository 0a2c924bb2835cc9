use std::sync::Arc;

use crate::{
    config::AppConfig,
    db::{create_orm_conn, run_migrations},
    generation::{FalImageClient, GeminiClient, RecipeGenerator},
    repository::RecipeRepository,
    store::FavoriteStore,
};

pub type LiveRepository = RecipeRepository<GeminiClient, FalImageClient>;

#[derive(Clone)]
pub struct AppState {
    pub recipes: Arc<LiveRepository>,
}

impl AppState {
    /// Opens the database, applies migrations and wires both upstream clients
    /// onto one shared HTTP client.
    pub async fn from_config(config: &AppConfig) -> anyhow::Result<Self> {
        let orm = create_orm_conn(&config.database_url).await?;
        run_migrations(&orm).await?;

        let http = reqwest::Client::builder()
            .connect_timeout(config.http_timeout)
            .timeout(config.http_timeout)
            .build()?;

        let generator = RecipeGenerator::new(
            GeminiClient::new(&config.gemini, http.clone()),
            FalImageClient::new(&config.image, http),
        );
        let recipes = RecipeRepository::new(FavoriteStore::new(orm), generator).await?;

        Ok(Self {
            recipes: Arc::new(recipes),
        })
    }
}
