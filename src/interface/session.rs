use std::io::Write;

use tracing::info;

use crate::error::Result;
use crate::interface::prompts::{prompt_selected_meals, LineSource};
use crate::interface::render::Presenter;
use crate::models::{MealCatalog, ShoppingList};
use crate::planner::{aggregate_ingredients, UnitPolicy};

/// One shopping run: show the meals, read the selection, print the list.
///
/// Returns `None` when the user picked no meal. In that case the notice is
/// shown and nothing is aggregated.
pub fn run_session<W: Write>(
    catalog: &MealCatalog,
    presenter: &mut Presenter<W>,
    source: &mut impl LineSource,
    policy: UnitPolicy,
) -> Result<Option<ShoppingList>> {
    presenter.display_available_meals(&catalog.names())?;

    let selected = prompt_selected_meals(catalog, presenter.texts(), source)?;
    if selected.is_empty() {
        presenter.display_no_meal_chosen()?;
        return Ok(None);
    }

    presenter.display_selected_meals(&selected)?;
    let list = aggregate_ingredients(&selected, policy)?;
    presenter.display_shopping_list(&list)?;

    info!(meals = selected.len(), items = list.len(), "shopping list ready");
    Ok(Some(list))
}
