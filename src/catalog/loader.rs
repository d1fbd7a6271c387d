use std::fs;
use std::path::Path;

use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::debug;

use crate::catalog::texts::TextAssets;
use crate::error::{Result, ShoppingError};
use crate::models::{IngredientRequirement, Meal, MealCatalog};

/// Load the meals file.
///
/// The root must be an object mapping each meal name to a list of
/// `{"ingredient", "quantity", "unit"}` objects. Meals keep the file order.
pub fn load_meals<P: AsRef<Path>>(path: P) -> Result<MealCatalog> {
    let path = path.as_ref();
    let root = read_json(path)?;
    let meals = check_meals(&root)
        .map_err(|reason| ShoppingError::file_format(file_name(path), reason))?;
    debug!(file = %path.display(), meals = meals.len(), "loaded meals");
    Ok(MealCatalog::new(meals))
}

/// Load a text assets file. Keys are checked against the ones the presenter
/// needs; unknown keys are ignored.
pub fn load_texts<P: AsRef<Path>>(path: P) -> Result<TextAssets> {
    let path = path.as_ref();
    let root = read_json(path)?;
    let texts = TextAssets::from_json(&root)
        .map_err(|reason| ShoppingError::file_format(file_name(path), reason))?;
    debug!(file = %path.display(), "loaded text assets");
    Ok(texts)
}

fn read_json(path: &Path) -> Result<Value> {
    let content = fs::read_to_string(path).map_err(|source| ShoppingError::ReadFile {
        file: file_name(path),
        source,
    })?;
    serde_json::from_str(&content).map_err(|e| {
        ShoppingError::file_format(
            file_name(path),
            format!("the content is not valid JSON ({e})"),
        )
    })
}

fn file_name(path: &Path) -> String {
    path.display().to_string()
}

pub(crate) fn as_object(root: &Value) -> std::result::Result<&Map<String, Value>, String> {
    root.as_object()
        .ok_or_else(|| "the root element is not a dictionary".to_string())
}

fn check_meals(root: &Value) -> std::result::Result<Vec<Meal>, String> {
    let mut meals = Vec::new();
    for (meal_name, value) in as_object(root)? {
        let entries = value
            .as_array()
            .ok_or_else(|| format!("the value of the key '{meal_name}' is not a list"))?;

        let mut ingredients = Vec::with_capacity(entries.len());
        for (i, entry) in entries.iter().enumerate() {
            ingredients.push(check_requirement(meal_name, i + 1, entry)?);
        }
        meals.push(Meal::new(meal_name.clone(), ingredients));
    }
    Ok(meals)
}

fn check_requirement(
    meal_name: &str,
    position: usize,
    entry: &Value,
) -> std::result::Result<IngredientRequirement, String> {
    let req = IngredientRequirement::deserialize(entry).map_err(|e| {
        format!("ingredient #{position} of the meal '{meal_name}' is invalid: {e}")
    })?;

    if req.quantity < 0.0 {
        return Err(format!(
            "the quantity of '{}' in the meal '{meal_name}' is negative",
            req.name
        ));
    }

    Ok(req)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_temp(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    fn reason_of(err: ShoppingError) -> String {
        match err {
            ShoppingError::FileFormat { reason, .. } => reason,
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_load_meals_keeps_file_order() {
        let file = write_temp(
            r#"{
                "Zucchini gratin": [{"ingredient": "zucchini", "quantity": 3, "unit": "unit"}],
                "Apple pie": [
                    {"ingredient": "apples", "quantity": 4, "unit": "unit"},
                    {"ingredient": "flour", "quantity": 250.5, "unit": "g"}
                ],
                "Toast": []
            }"#,
        );

        let catalog = load_meals(file.path()).unwrap();
        assert_eq!(catalog.names(), vec!["Zucchini gratin", "Apple pie", "Toast"]);
        let pie = catalog.get("Apple pie").unwrap();
        assert_eq!(pie.ingredients[1], IngredientRequirement::new("flour", 250.5, "g"));
    }

    #[test]
    fn test_root_not_a_dictionary() {
        let file = write_temp(r#"["Soup"]"#);
        let err = load_meals(file.path()).unwrap_err();
        assert_eq!(reason_of(err), "the root element is not a dictionary");
    }

    #[test]
    fn test_meal_value_not_a_list() {
        let file = write_temp(r#"{"Soup": "leeks"}"#);
        let err = load_meals(file.path()).unwrap_err();
        assert_eq!(reason_of(err), "the value of the key 'Soup' is not a list");
    }

    #[test]
    fn test_missing_unit() {
        let file = write_temp(r#"{"Soup": [{"ingredient": "leek", "quantity": 2}]}"#);
        let reason = reason_of(load_meals(file.path()).unwrap_err());
        assert!(reason.starts_with("ingredient #1 of the meal 'Soup' is invalid"));
        assert!(reason.contains("missing field `unit`"), "{reason}");
    }

    #[test]
    fn test_quantity_not_a_number() {
        let file = write_temp(
            r#"{"Soup": [
                {"ingredient": "leek", "quantity": 2, "unit": "unit"},
                {"ingredient": "salt", "quantity": "a pinch", "unit": "g"}
            ]}"#,
        );
        let reason = reason_of(load_meals(file.path()).unwrap_err());
        assert!(reason.starts_with("ingredient #2 of the meal 'Soup' is invalid"));
    }

    #[test]
    fn test_negative_quantity() {
        let file =
            write_temp(r#"{"Soup": [{"ingredient": "leek", "quantity": -2, "unit": "unit"}]}"#);
        let err = load_meals(file.path()).unwrap_err();
        assert_eq!(
            reason_of(err),
            "the quantity of 'leek' in the meal 'Soup' is negative"
        );
    }

    #[test]
    fn test_invalid_json_names_the_file() {
        let file = write_temp("{ not json");
        let err = load_meals(file.path()).unwrap_err();
        let expected = file.path().display().to_string();
        assert!(matches!(&err, ShoppingError::FileFormat { file: f, .. } if *f == expected));
        let shown = err.to_string();
        assert!(shown.contains(&file.path().display().to_string()));
        assert!(shown.contains("not valid JSON"));
    }

    #[test]
    fn test_missing_file_names_the_file() {
        let err = load_meals("/definitely/not/here.json").unwrap_err();
        match &err {
            ShoppingError::ReadFile { file, .. } => assert_eq!(file, "/definitely/not/here.json"),
            other => panic!("unexpected error: {other}"),
        }
        assert!(err.to_string().contains("'/definitely/not/here.json'"));

        let err = load_texts("/definitely/not/texts.json").unwrap_err();
        assert!(err.to_string().contains("'/definitely/not/texts.json'"));
    }

    #[test]
    fn test_load_texts_rejects_non_string() {
        let file = write_temp(r#"{"prompt_user": 3}"#);
        let err = load_texts(file.path()).unwrap_err();
        assert_eq!(
            reason_of(err),
            "the value of the key 'prompt_user' is not a string"
        );
    }
}
