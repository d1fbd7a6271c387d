use std::path::Path;

use tracing::info;

use crate::error::Result;
use crate::interface::format_quantity;
use crate::models::ShoppingList;

/// Write the shopping list as `ingredient,quantity,unit` rows.
pub fn write_shopping_csv(list: &ShoppingList, path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record(["ingredient", "quantity", "unit"])?;
    for item in list.items() {
        wtr.write_record([
            item.ingredient.as_str(),
            format_quantity(item.quantity).as_str(),
            item.unit.as_str(),
        ])?;
    }

    wtr.flush()?;
    info!(path = %path.display(), rows = list.len(), "wrote shopping list CSV");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::NamedTempFile;

    #[test]
    fn test_write_shopping_csv() {
        let mut list = ShoppingList::new();
        list.add("flour", 300.0, "g");
        list.add("olive oil", 1.5, "tbsp");

        let file = NamedTempFile::new().unwrap();
        write_shopping_csv(&list, file.path()).unwrap();

        let content = fs::read_to_string(file.path()).unwrap();
        assert_eq!(
            content,
            "ingredient,quantity,unit\nflour,300,g\nolive oil,1.5,tbsp\n"
        );
    }
}
