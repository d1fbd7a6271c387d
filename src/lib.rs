pub mod catalog;
pub mod cli;
pub mod error;
pub mod interface;
pub mod models;
pub mod planner;

pub use error::{Result, ShoppingError};
pub use models::{IngredientRequirement, Meal, MealCatalog, ShoppingList};
