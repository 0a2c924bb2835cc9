use std::{collections::HashSet, sync::Arc};

use tokio::sync::watch;

use crate::{
    error::AppResult,
    generation::{ImageGenerator, TextGenerator},
    models::{Recipe, mark_favorites},
    notifications::{Notification, NotificationBus},
    repository::RecipeRepository,
};

pub const NO_RECIPES_FOUND: &str = "No recipes found for this search.";
pub const GENERATION_FAILED: &str = "Recipe generation failed, please try again.";

#[derive(Debug, Clone, PartialEq)]
pub struct BrowserState {
    pub query: String,
    pub selected: Option<Recipe>,
    pub loading: bool,
    /// Favorites are shown instead of suggestions while the query is empty.
    pub show_favorites: bool,
    pub recipes: Vec<Recipe>,
    pub favorites: Vec<Recipe>,
    pub favorite_ids: HashSet<i32>,
}

impl Default for BrowserState {
    fn default() -> Self {
        Self {
            query: String::new(),
            selected: None,
            loading: true,
            show_favorites: false,
            recipes: Vec::new(),
            favorites: Vec::new(),
            favorite_ids: HashSet::new(),
        }
    }
}

/// Reducer behind the search screen. All intents take `&mut self`, so state is
/// only ever changed from the task that owns the browser.
pub struct RecipeBrowser<T, I> {
    repository: Arc<RecipeRepository<T, I>>,
    favorites_rx: watch::Receiver<Vec<Recipe>>,
    notifications: NotificationBus,
    state: BrowserState,
}

impl<T, I> RecipeBrowser<T, I>
where
    T: TextGenerator,
    I: ImageGenerator + 'static,
{
    pub fn new(repository: Arc<RecipeRepository<T, I>>, notifications: NotificationBus) -> Self {
        let mut favorites_rx = repository.favorites();
        let initial = favorites_rx.borrow_and_update().clone();

        let mut browser = Self {
            repository,
            favorites_rx,
            notifications,
            state: BrowserState::default(),
        };
        browser.on_favorites_updated(initial);
        browser
    }

    pub fn state(&self) -> &BrowserState {
        &self.state
    }

    /// Waits for the favorites list to change and folds the new list into state.
    /// Returns `false` once the repository has been dropped.
    pub async fn next_favorites(&mut self) -> bool {
        if self.favorites_rx.changed().await.is_err() {
            return false;
        }
        let favorites = self.favorites_rx.borrow_and_update().clone();
        self.on_favorites_updated(favorites);
        true
    }

    pub fn on_favorites_updated(&mut self, favorites: Vec<Recipe>) {
        let state = &mut self.state;
        state.favorite_ids = favorites.iter().map(|r| r.id).collect();
        state.favorites = favorites;
        state.loading = false;
        state.show_favorites = state.query.is_empty() && !state.favorites.is_empty();
        mark_favorites(&mut state.recipes, &state.favorite_ids);
    }

    pub fn on_query_changed(&mut self, query: impl Into<String>) {
        let state = &mut self.state;
        state.query = query.into();
        if state.query.is_empty() {
            state.recipes.clear();
        }
        state.show_favorites = state.query.is_empty() && !state.favorites.is_empty();
    }

    pub async fn on_search(&mut self) {
        if self.state.query.trim().is_empty() {
            tracing::debug!("ignoring search for blank query");
            return;
        }

        self.state.loading = true;
        match self.repository.search(&self.state.query).await {
            Ok(mut recipes) => {
                if recipes.is_empty() {
                    self.notifications
                        .publish(Notification::error(NO_RECIPES_FOUND));
                }
                mark_favorites(&mut recipes, &self.state.favorite_ids);
                self.state.recipes = recipes;
            }
            Err(err) => {
                tracing::error!(error = %err, query = %self.state.query, "search failed");
                self.notifications
                    .publish(Notification::error(GENERATION_FAILED));
            }
        }
        self.state.loading = false;
    }

    pub fn on_recipe_selected(&mut self, recipe: Recipe) {
        self.state.selected = Some(recipe);
    }

    /// Removes `recipe` from favorites when `is_favorite`, adds it otherwise.
    pub async fn on_favorite_clicked(&mut self, recipe: &Recipe, is_favorite: bool) -> AppResult<()> {
        if is_favorite {
            self.repository.remove_favorite(recipe.id).await?;
            self.notifications
                .publish(Notification::info(format!("Removed \"{}\" from favorites", recipe.title)));
        } else {
            self.repository.add_favorite(recipe).await?;
            self.notifications
                .publish(Notification::info(format!("Saved \"{}\" to favorites", recipe.title)));
        }
        self.absorb_favorites();
        Ok(())
    }

    fn absorb_favorites(&mut self) {
        if self.favorites_rx.has_changed().unwrap_or(false) {
            let favorites = self.favorites_rx.borrow_and_update().clone();
            self.on_favorites_updated(favorites);
        }
    }
}
