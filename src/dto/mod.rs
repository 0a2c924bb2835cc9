pub mod favorites;
pub mod recipes;
