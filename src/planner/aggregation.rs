use std::collections::HashMap;

use tracing::{debug, warn};

use crate::error::{Result, ShoppingError};
use crate::models::{Meal, ShoppingList};

/// How to treat one ingredient required in two different units.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UnitPolicy {
    /// Keep one shopping list entry per (ingredient, unit).
    #[default]
    SeparateEntries,
    /// Fail with `UnitMismatch`.
    Strict,
}

/// Sum the ingredients of `meals` into a shopping list.
///
/// Requirements are visited in meal order, then in requirement order, so the
/// list keeps the first-occurrence order of each ingredient.
pub fn aggregate_ingredients(meals: &[&Meal], policy: UnitPolicy) -> Result<ShoppingList> {
    let mut list = ShoppingList::new();
    let mut first_units: HashMap<&str, &str> = HashMap::new();

    for meal in meals {
        for req in &meal.ingredients {
            let first_unit = *first_units.entry(req.name.as_str()).or_insert(req.unit.as_str());
            if first_unit != req.unit {
                match policy {
                    UnitPolicy::Strict => {
                        return Err(ShoppingError::UnitMismatch {
                            ingredient: req.name.clone(),
                            first_unit: first_unit.to_string(),
                            other_unit: req.unit.clone(),
                        });
                    }
                    UnitPolicy::SeparateEntries => {
                        warn!(
                            ingredient = %req.name,
                            first_unit,
                            other_unit = %req.unit,
                            meal = %meal.name,
                            "ingredient needed in several units, keeping separate entries"
                        );
                    }
                }
            }
            list.add(&req.name, req.quantity, &req.unit);
        }
    }

    debug!(meals = meals.len(), items = list.len(), "aggregated ingredients");
    Ok(list)
}
