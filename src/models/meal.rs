use serde::Deserialize;

/// One ingredient needed by a meal.
///
/// The unit is an opaque label; two requirements can only be summed when
/// their units are byte-for-byte equal.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct IngredientRequirement {
    #[serde(rename = "ingredient")]
    pub name: String,

    pub quantity: f64,

    pub unit: String,
}

impl IngredientRequirement {
    pub fn new(name: impl Into<String>, quantity: f64, unit: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            quantity,
            unit: unit.into(),
        }
    }
}

/// A named dish and the ingredients it needs, in file order.
#[derive(Debug, Clone, PartialEq)]
pub struct Meal {
    pub name: String,
    pub ingredients: Vec<IngredientRequirement>,
}

impl Meal {
    pub fn new(name: impl Into<String>, ingredients: Vec<IngredientRequirement>) -> Self {
        Self {
            name: name.into(),
            ingredients,
        }
    }
}

/// The meals offered to the user, in presentation order.
#[derive(Debug, Clone, Default)]
pub struct MealCatalog {
    meals: Vec<Meal>,
}

impl MealCatalog {
    /// Build a catalog. Later meals with an already seen name are dropped.
    pub fn new(meals: Vec<Meal>) -> Self {
        let mut kept: Vec<Meal> = Vec::with_capacity(meals.len());
        for meal in meals {
            if kept.iter().all(|m| m.name != meal.name) {
                kept.push(meal);
            }
        }
        Self { meals: kept }
    }

    pub fn meals(&self) -> &[Meal] {
        &self.meals
    }

    /// Meal names in presentation order.
    pub fn names(&self) -> Vec<&str> {
        self.meals.iter().map(|m| m.name.as_str()).collect()
    }

    pub fn get(&self, name: &str) -> Option<&Meal> {
        self.meals.iter().find(|m| m.name == name)
    }

    pub fn len(&self) -> usize {
        self.meals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.meals.is_empty()
    }
}
