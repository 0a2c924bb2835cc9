use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::entity::recipes::Model as RecipeModel;

/// A recipe as shown to the user, either freshly generated or loaded from favorites.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Recipe {
    pub id: i32,
    pub title: String,
    /// Remote URL, `data:image/...;base64,` URI, or empty.
    pub image_url: String,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    pub duration: String,
    #[serde(default)]
    pub is_favorite: bool,
}

/// A recipe record as produced by the text model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateRecipe {
    #[serde(default)]
    pub id: i32,
    pub title: String,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    #[serde(default = "default_duration")]
    pub duration: String,
    #[serde(default, rename = "imageUrl")]
    pub image_url: String,
}

fn default_duration() -> String {
    "30 min".to_string()
}

impl From<CandidateRecipe> for Recipe {
    fn from(candidate: CandidateRecipe) -> Self {
        Recipe {
            id: candidate.id,
            title: candidate.title,
            image_url: candidate.image_url,
            ingredients: candidate.ingredients,
            instructions: candidate.instructions,
            duration: candidate.duration,
            is_favorite: false,
        }
    }
}

impl From<RecipeModel> for Recipe {
    fn from(model: RecipeModel) -> Self {
        Recipe {
            id: model.id,
            title: model.title,
            image_url: model.image_url,
            ingredients: decode_list(&model.ingredients),
            instructions: decode_list(&model.instructions),
            duration: model.duration,
            is_favorite: true,
        }
    }
}

/// Sets `is_favorite` on every recipe by membership of its id in `favorite_ids`.
pub fn mark_favorites(recipes: &mut [Recipe], favorite_ids: &HashSet<i32>) {
    for recipe in recipes.iter_mut() {
        recipe.is_favorite = favorite_ids.contains(&recipe.id);
    }
}

pub fn encode_list(items: &[String]) -> String {
    serde_json::to_string(items).unwrap_or_else(|_| "[]".to_string())
}

/// Decodes a list column. Rows that do not hold a JSON array are read one item per line.
pub fn decode_list(value: &str) -> Vec<String> {
    if value.is_empty() {
        return Vec::new();
    }
    match serde_json::from_str::<Vec<String>>(value) {
        Ok(items) => items,
        Err(err) => {
            tracing::warn!(error = %err, raw = %value, "list column is not JSON, falling back to lines");
            value.lines().map(str::to_string).collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recipe(id: i32) -> Recipe {
        Recipe {
            id,
            title: format!("Recipe {id}"),
            image_url: String::new(),
            ingredients: vec![],
            instructions: vec![],
            duration: "10 min.".into(),
            is_favorite: false,
        }
    }

    #[test]
    fn list_column_keeps_order() {
        let items = vec!["2 eggs".to_string(), "salt, pepper".to_string()];
        assert_eq!(decode_list(&encode_list(&items)), items);
    }

    #[test]
    fn list_column_falls_back_to_lines() {
        assert_eq!(decode_list("flour\nwater"), vec!["flour", "water"]);
        assert!(decode_list("").is_empty());
    }

    #[test]
    fn favorites_marked_by_id_membership() {
        let mut recipes = vec![recipe(1), recipe(2), recipe(3)];
        recipes[0].is_favorite = true;
        let ids: HashSet<i32> = [2, 7].into_iter().collect();

        mark_favorites(&mut recipes, &ids);

        let flags: Vec<bool> = recipes.iter().map(|r| r.is_favorite).collect();
        assert_eq!(flags, vec![false, true, false]);
    }

    #[test]
    fn candidate_defaults_apply() {
        let candidate: CandidateRecipe =
            serde_json::from_str(r#"{"title":"Soup","ingredients":["leek"],"instructions":[],"extra":1}"#)
                .unwrap();
        assert_eq!(candidate.duration, "30 min");
        assert_eq!(candidate.image_url, "");
        assert_eq!(candidate.id, 0);
    }
}
