use std::collections::HashMap;

/// One line of the shopping list.
#[derive(Debug, Clone, PartialEq)]
pub struct ShoppingItem {
    pub ingredient: String,
    pub quantity: f64,
    pub unit: String,
}

/// Ingredient totals in first-occurrence order.
///
/// Entries are keyed by (ingredient, unit): the same ingredient needed in two
/// different units yields two items.
#[derive(Debug, Clone, Default)]
pub struct ShoppingList {
    items: Vec<ShoppingItem>,
    index: HashMap<(String, String), usize>,
}

impl ShoppingList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `quantity` of `ingredient`, summing into an existing entry with the
    /// same unit or appending a new one.
    pub fn add(&mut self, ingredient: &str, quantity: f64, unit: &str) {
        let key = (ingredient.to_string(), unit.to_string());
        match self.index.get(&key) {
            Some(&pos) => self.items[pos].quantity += quantity,
            None => {
                self.index.insert(key, self.items.len());
                self.items.push(ShoppingItem {
                    ingredient: ingredient.to_string(),
                    quantity,
                    unit: unit.to_string(),
                });
            }
        }
    }

    /// First item recorded for `ingredient`, whatever its unit.
    pub fn get(&self, ingredient: &str) -> Option<&ShoppingItem> {
        self.items.iter().find(|i| i.ingredient == ingredient)
    }

    pub fn get_with_unit(&self, ingredient: &str, unit: &str) -> Option<&ShoppingItem> {
        self.index
            .get(&(ingredient.to_string(), unit.to_string()))
            .map(|&pos| &self.items[pos])
    }

    pub fn items(&self) -> &[ShoppingItem] {
        &self.items
    }

    /// Length in characters of the longest ingredient name.
    pub fn longest_name(&self) -> usize {
        self.items
            .iter()
            .map(|i| i.ingredient.chars().count())
            .max()
            .unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_sums_same_unit() {
        let mut list = ShoppingList::new();
        list.add("flour", 2.0, "g");
        list.add("flour", 3.0, "g");
        assert_eq!(list.len(), 1);
        assert_eq!(list.get("flour").unwrap().quantity, 5.0);
    }

    #[test]
    fn test_add_splits_different_units() {
        let mut list = ShoppingList::new();
        list.add("milk", 1.0, "l");
        list.add("milk", 200.0, "ml");
        assert_eq!(list.len(), 2);
        assert_eq!(list.get_with_unit("milk", "ml").unwrap().quantity, 200.0);
    }

    #[test]
    fn test_longest_name_counts_chars() {
        let mut list = ShoppingList::new();
        list.add("œufs", 6.0, "unit");
        list.add("sel", 1.0, "pinch");
        assert_eq!(list.longest_name(), 4);
        assert_eq!(ShoppingList::new().longest_name(), 0);
    }
}
