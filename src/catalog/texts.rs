use std::collections::HashMap;

use serde_json::Value;

use crate::catalog::loader::as_object;

pub const INTRODUCE_AVAILABLE_MEALS: &str = "introduce_available_meals";
pub const PROMPT_USER: &str = "prompt_user";
pub const TRY_AGAIN: &str = "try_again";
pub const YOU_DIDNT_CHOOSE_ANY_MEAL: &str = "you_didnt_choose_any_meal";
pub const INTRODUCE_SELECTED_MEALS: &str = "introduce_selected_meals";
pub const INTRODUCE_REQUIRED_INGREDIENTS: &str = "introduce_required_ingredients";

/// Keys the presenter looks up.
pub const REQUIRED_KEYS: [&str; 6] = [
    INTRODUCE_AVAILABLE_MEALS,
    PROMPT_USER,
    TRY_AGAIN,
    YOU_DIDNT_CHOOSE_ANY_MEAL,
    INTRODUCE_SELECTED_MEALS,
    INTRODUCE_REQUIRED_INGREDIENTS,
];

const DEFAULT_TEXTS: &str = include_str!("../../assets/texts_en.json");

/// User-facing sentences, keyed by text key.
///
/// Swapping the file swaps the language. Construction guarantees that every
/// key in [`REQUIRED_KEYS`] is present.
#[derive(Debug, Clone)]
pub struct TextAssets {
    texts: HashMap<String, String>,
}

impl TextAssets {
    /// Validate a parsed text assets document.
    pub fn from_json(root: &Value) -> Result<Self, String> {
        let mut texts = HashMap::new();
        for (key, value) in as_object(root)? {
            let text = value
                .as_str()
                .ok_or_else(|| format!("the value of the key '{key}' is not a string"))?;
            texts.insert(key.clone(), text.to_string());
        }

        if let Some(missing) = REQUIRED_KEYS.iter().find(|k| !texts.contains_key(**k)) {
            return Err(format!("the key '{missing}' is missing"));
        }

        Ok(Self { texts })
    }

    /// Text for `key`, or the key itself when it is not a required one and
    /// the file did not define it.
    pub fn get<'a>(&'a self, key: &'a str) -> &'a str {
        self.texts.get(key).map(String::as_str).unwrap_or(key)
    }
}

impl Default for TextAssets {
    /// The built-in English texts.
    fn default() -> Self {
        let root: Value = serde_json::from_str(DEFAULT_TEXTS).unwrap_or(Value::Null);
        Self::from_json(&root).unwrap_or_else(|_| Self {
            texts: REQUIRED_KEYS
                .iter()
                .map(|k| (k.to_string(), k.to_string()))
                .collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_default_has_all_keys() {
        let texts = TextAssets::default();
        for key in REQUIRED_KEYS {
            assert_ne!(texts.get(key), key, "built-in text for {key} missing");
        }
    }

    #[test]
    fn test_missing_key() {
        let root = json!({ "prompt_user": "Which meals?" });
        let err = TextAssets::from_json(&root).unwrap_err();
        assert_eq!(err, "the key 'introduce_available_meals' is missing");
    }

    #[test]
    fn test_extra_keys_are_ignored() {
        let mut root = serde_json::to_value(
            REQUIRED_KEYS
                .iter()
                .map(|k| (k.to_string(), format!("fr:{k}")))
                .collect::<HashMap<_, _>>(),
        )
        .unwrap();
        root["farewell"] = json!("Au revoir");

        let texts = TextAssets::from_json(&root).unwrap();
        assert_eq!(texts.get(TRY_AGAIN), "fr:try_again");
    }

    #[test]
    fn test_root_not_a_dictionary() {
        let err = TextAssets::from_json(&json!("hello")).unwrap_err();
        assert_eq!(err, "the root element is not a dictionary");
    }
}
