use chrono::Utc;
use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryOrder, QuerySelect,
};

use crate::{
    entity::recipes::{ActiveModel as RecipeActive, Column as RecipeColumn, Entity as RecipeEntity},
    error::AppResult,
    models::{Recipe, encode_list},
};

/// SQLite-backed table of favorited recipes.
#[derive(Debug, Clone)]
pub struct FavoriteStore {
    db: DatabaseConnection,
}

impl FavoriteStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Persists a copy of `recipe` under a newly allocated primary key.
    pub async fn insert(&self, recipe: &Recipe) -> AppResult<Recipe> {
        let model = RecipeActive {
            id: NotSet,
            title: Set(recipe.title.clone()),
            ingredients: Set(encode_list(&recipe.ingredients)),
            instructions: Set(encode_list(&recipe.instructions)),
            image_url: Set(recipe.image_url.clone()),
            duration: Set(recipe.duration.clone()),
            created_at: Set(Utc::now()),
        }
        .insert(&self.db)
        .await?;

        Ok(Recipe::from(model))
    }

    /// All rows, newest first.
    pub async fn list(&self) -> AppResult<Vec<Recipe>> {
        let rows = RecipeEntity::find()
            .order_by_desc(RecipeColumn::CreatedAt)
            .order_by_desc(RecipeColumn::Id)
            .all(&self.db)
            .await?;
        Ok(rows.into_iter().map(Recipe::from).collect())
    }

    pub async fn list_page(&self, limit: u64, offset: u64) -> AppResult<Vec<Recipe>> {
        let rows = RecipeEntity::find()
            .order_by_desc(RecipeColumn::CreatedAt)
            .order_by_desc(RecipeColumn::Id)
            .limit(limit)
            .offset(offset)
            .all(&self.db)
            .await?;
        Ok(rows.into_iter().map(Recipe::from).collect())
    }

    pub async fn count(&self) -> AppResult<u64> {
        Ok(RecipeEntity::find().count(&self.db).await?)
    }

    pub async fn get(&self, id: i32) -> AppResult<Option<Recipe>> {
        let row = RecipeEntity::find_by_id(id).one(&self.db).await?;
        Ok(row.map(Recipe::from))
    }

    /// Deletes the row with primary key `id`, returning how many rows went away.
    pub async fn delete(&self, id: i32) -> AppResult<u64> {
        let result = RecipeEntity::delete_by_id(id).exec(&self.db).await?;
        Ok(result.rows_affected)
    }
}
