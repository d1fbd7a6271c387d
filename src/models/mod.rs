mod meal;
mod shopping;

pub use meal::{IngredientRequirement, Meal, MealCatalog};
pub use shopping::{ShoppingItem, ShoppingList};
