pub mod favorite_service;
pub mod recipe_service;
