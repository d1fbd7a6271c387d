use std::io::{self, Stdout, Write};

use crate::catalog::texts::{
    INTRODUCE_AVAILABLE_MEALS, INTRODUCE_REQUIRED_INGREDIENTS, INTRODUCE_SELECTED_MEALS,
    YOU_DIDNT_CHOOSE_ANY_MEAL,
};
use crate::catalog::TextAssets;
use crate::error::Result;
use crate::models::{Meal, ShoppingList};

/// Dots added after the longest ingredient name.
const NAME_PADDING: usize = 4;

/// Format a quantity with at most three decimals and no trailing zeros.
pub fn format_quantity(quantity: f64) -> String {
    let rounded = (quantity * 1000.0).round() / 1000.0;
    format!("{}", rounded)
}

/// Numbered lines for the meals on offer, starting at 1.
pub fn available_meal_lines(names: &[&str]) -> Vec<String> {
    names
        .iter()
        .enumerate()
        .map(|(i, name)| format!("{}. {}", i + 1, name))
        .collect()
}

/// Shopping list lines, names padded with dots to a common width.
pub fn shopping_list_lines(list: &ShoppingList) -> Vec<String> {
    let width = list.longest_name() + NAME_PADDING;
    list.items()
        .iter()
        .map(|item| {
            format!(
                "- {:.<width$}{} {}",
                item.ingredient,
                format_quantity(item.quantity),
                item.unit,
                width = width
            )
        })
        .collect()
}

/// Console output, worded by the text assets it was built with.
#[derive(Debug)]
pub struct Presenter<W: Write = Stdout> {
    texts: TextAssets,
    out: W,
}

impl Presenter {
    /// A presenter writing to stdout.
    pub fn new(texts: TextAssets) -> Self {
        Self::with_writer(texts, io::stdout())
    }
}

impl<W: Write> Presenter<W> {
    pub fn with_writer(texts: TextAssets, out: W) -> Self {
        Self { texts, out }
    }

    pub fn texts(&self) -> &TextAssets {
        &self.texts
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn display_available_meals(&mut self, names: &[&str]) -> Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "{}", self.texts.get(INTRODUCE_AVAILABLE_MEALS))?;
        for line in available_meal_lines(names) {
            writeln!(self.out, "{line}")?;
        }
        writeln!(self.out)?;
        Ok(())
    }

    pub fn display_no_meal_chosen(&mut self) -> Result<()> {
        writeln!(self.out, "{}", self.texts.get(YOU_DIDNT_CHOOSE_ANY_MEAL))?;
        Ok(())
    }

    pub fn display_selected_meals(&mut self, meals: &[&Meal]) -> Result<()> {
        writeln!(self.out, "{}", self.texts.get(INTRODUCE_SELECTED_MEALS))?;
        for meal in meals {
            writeln!(self.out, "- {}", meal.name)?;
        }
        writeln!(self.out)?;
        Ok(())
    }

    pub fn display_shopping_list(&mut self, list: &ShoppingList) -> Result<()> {
        writeln!(self.out, "{}", self.texts.get(INTRODUCE_REQUIRED_INGREDIENTS))?;
        for line in shopping_list_lines(list) {
            writeln!(self.out, "{line}")?;
        }
        Ok(())
    }
}
