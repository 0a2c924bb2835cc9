use tokio::sync::{Mutex, watch};

use crate::{
    error::AppResult,
    generation::{ImageGenerator, RecipeGenerator, TextGenerator},
    models::Recipe,
    store::FavoriteStore,
};

/// Single entry point for recipe data: generated suggestions and stored favorites.
pub struct RecipeRepository<T, I> {
    store: FavoriteStore,
    generator: RecipeGenerator<T, I>,
    favorites: watch::Sender<Vec<Recipe>>,
    // Held across a write and its republish so the last published list is the newest one.
    write_lock: Mutex<()>,
}

impl<T, I> RecipeRepository<T, I>
where
    T: TextGenerator,
    I: ImageGenerator + 'static,
{
    /// Loads the current favorites so that new subscribers start from the stored state.
    pub async fn new(store: FavoriteStore, generator: RecipeGenerator<T, I>) -> AppResult<Self> {
        let initial = store.list().await?;
        let (favorites, _) = watch::channel(initial);
        Ok(Self {
            store,
            generator,
            favorites,
            write_lock: Mutex::new(()),
        })
    }

    pub fn store(&self) -> &FavoriteStore {
        &self.store
    }

    /// Surrounding whitespace is not part of the query sent to the model.
    pub async fn search(&self, query: &str) -> AppResult<Vec<Recipe>> {
        Ok(self.generator.generate(query.trim()).await)
    }

    /// Live view of the favorites list; a new value is published after every write.
    pub fn favorites(&self) -> watch::Receiver<Vec<Recipe>> {
        self.favorites.subscribe()
    }

    pub async fn list_favorites(&self) -> AppResult<Vec<Recipe>> {
        self.store.list().await
    }

    pub async fn add_favorite(&self, recipe: &Recipe) -> AppResult<Recipe> {
        let _guard = self.write_lock.lock().await;
        let saved = self.store.insert(recipe).await?;
        tracing::info!(id = saved.id, title = %saved.title, "favorite added");
        self.publish_favorites().await?;
        Ok(saved)
    }

    /// Returns whether a row with that id existed.
    pub async fn remove_favorite(&self, id: i32) -> AppResult<bool> {
        let _guard = self.write_lock.lock().await;
        let removed = self.store.delete(id).await? > 0;
        if removed {
            tracing::info!(id, "favorite removed");
            self.publish_favorites().await?;
        }
        Ok(removed)
    }

    async fn publish_favorites(&self) -> AppResult<()> {
        let current = self.store.list().await?;
        self.favorites.send_replace(current);
        Ok(())
    }
}
