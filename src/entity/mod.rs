pub mod recipes;

pub use recipes::Entity as Recipes;
