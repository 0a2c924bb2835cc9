use std::sync::Arc;

use futures::future::join_all;
use uuid::Uuid;

use crate::models::{CandidateRecipe, Recipe};

pub mod fal;
pub mod gemini;
pub mod ports;
pub mod prompt;

pub use fal::FalImageClient;
pub use gemini::GeminiClient;
pub use ports::{ImageGenerator, TextGenerator};

/// Turns a query into illustrated recipes: one text call, then one image call per recipe.
pub struct RecipeGenerator<T, I> {
    text: T,
    images: Arc<I>,
}

impl<T, I> RecipeGenerator<T, I>
where
    T: TextGenerator,
    I: ImageGenerator + 'static,
{
    pub fn new(text: T, images: I) -> Self {
        Self {
            text,
            images: Arc::new(images),
        }
    }

    /// Never fails; every text-side failure produces an empty list.
    pub async fn generate(&self, query: &str) -> Vec<Recipe> {
        let prompt = prompt::build_recipe_prompt(query);

        let text = match self.text.generate_text(prompt).await {
            Ok(Some(text)) => text,
            Ok(None) => {
                tracing::warn!(query, "model returned no text");
                return Vec::new();
            }
            Err(err) => {
                tracing::error!(error = %err, query, "recipe generation failed");
                return Vec::new();
            }
        };

        let candidates = match prompt::parse_candidates(&text) {
            Ok(candidates) => candidates,
            Err(err) => {
                tracing::error!(error = %err, "failed to parse recipe JSON");
                return Vec::new();
            }
        };

        tracing::info!(query, count = candidates.len(), "recipes generated");
        self.illustrate(candidates).await
    }

    async fn illustrate(&self, candidates: Vec<CandidateRecipe>) -> Vec<Recipe> {
        let tasks = candidates
            .iter()
            .map(|candidate| {
                let images = Arc::clone(&self.images);
                let title = candidate.title.clone();
                let ingredients = candidate.ingredients.clone();
                tokio::spawn(async move { images.generate_image(title, ingredients).await })
            })
            .collect::<Vec<_>>();

        let urls = join_all(tasks).await;

        candidates
            .into_iter()
            .zip(urls)
            .map(|(candidate, url)| {
                let image_url = url.unwrap_or_else(|err| {
                    tracing::error!(error = %err, title = %candidate.title, "image task aborted");
                    String::new()
                });
                Recipe {
                    id: generate_recipe_id(),
                    image_url,
                    ..Recipe::from(candidate)
                }
            })
            .collect()
    }
}

/// Random id for a recipe that only lives in memory. Not checked against stored ids.
pub fn generate_recipe_id() -> i32 {
    let (high, _) = Uuid::new_v4().as_u64_pair();
    high as i32
}
