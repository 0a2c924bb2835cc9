#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use recipe_scout::{
    db::{create_orm_conn, run_migrations},
    error::AppResult,
    generation::{ImageGenerator, RecipeGenerator, TextGenerator},
    models::Recipe,
    repository::RecipeRepository,
    store::FavoriteStore,
};

pub const THREE_RECIPES: &str = r#"```json
[
  {"title": "Pad Thai", "ingredients": ["rice noodles", "tamarind", "peanuts"], "instructions": ["Soak noodles", "Stir-fry"], "duration": "30 min.", "imageUrl": ""},
  {"title": "Green Curry", "ingredients": ["coconut milk", "curry paste"], "instructions": ["Simmer"], "duration": "40 min.", "imageUrl": ""},
  {"title": "Mango Sticky Rice", "ingredients": ["glutinous rice", "mango"], "instructions": ["Steam", "Serve"], "duration": "1 h 10 min.", "imageUrl": ""}
]
```"#;

/// Prompts received by the scripted text model.
#[derive(Clone, Default)]
pub struct CallCounter(Arc<Mutex<Vec<String>>>);

impl CallCounter {
    pub fn get(&self) -> usize {
        self.0.lock().unwrap().len()
    }

    pub fn last_prompt(&self) -> Option<String> {
        self.0.lock().unwrap().last().cloned()
    }

    fn record(&self, prompt: String) {
        self.0.lock().unwrap().push(prompt);
    }
}

/// Text model that always answers with the same text.
pub struct ScriptedText {
    reply: Option<String>,
    calls: CallCounter,
}

impl TextGenerator for ScriptedText {
    async fn generate_text(&self, prompt: String) -> AppResult<Option<String>> {
        self.calls.record(prompt);
        Ok(self.reply.clone())
    }
}

/// Image model that derives a URL from the title.
pub struct SlugImages;

impl ImageGenerator for SlugImages {
    async fn generate_image(&self, title: String, _ingredients: Vec<String>) -> String {
        format!("https://img.test/{}.jpg", title.to_lowercase().replace(' ', "-"))
    }
}

pub type TestRepository = RecipeRepository<ScriptedText, SlugImages>;

pub async fn memory_store() -> anyhow::Result<FavoriteStore> {
    let orm = create_orm_conn("sqlite::memory:").await?;
    run_migrations(&orm).await?;
    Ok(FavoriteStore::new(orm))
}

/// Repository over a fresh in-memory database whose text model answers `reply`.
pub async fn memory_repository(
    reply: Option<&str>,
) -> anyhow::Result<(Arc<TestRepository>, CallCounter)> {
    let calls = CallCounter::default();
    let text = ScriptedText {
        reply: reply.map(str::to_string),
        calls: calls.clone(),
    };
    let repository = RecipeRepository::new(memory_store().await?, RecipeGenerator::new(text, SlugImages)).await?;
    Ok((Arc::new(repository), calls))
}

pub fn recipe(title: &str) -> Recipe {
    Recipe {
        id: 0,
        title: title.to_string(),
        image_url: String::new(),
        ingredients: vec!["salt".to_string()],
        instructions: vec!["Cook".to_string()],
        duration: "10 min.".to_string(),
        is_favorite: false,
    }
}
