use std::path::PathBuf;

use clap::Parser;

/// Food shopping list — pick meals, get the ingredients to buy.
#[derive(Parser, Debug)]
#[command(name = "food_shopping_list")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the meals JSON file.
    #[arg(value_name = "MEALS_FILE")]
    pub meals_file: PathBuf,

    /// Path to a text assets JSON file (defaults to the built-in English texts).
    #[arg(long, value_name = "FILE", env = "SHOPPING_LIST_TEXTS")]
    pub texts: Option<PathBuf>,

    /// Fail when an ingredient is needed in two different units instead of
    /// listing it once per unit.
    #[arg(long)]
    pub strict_units: bool,

    /// Also write the shopping list to this CSV file.
    #[arg(long, value_name = "FILE")]
    pub csv: Option<PathBuf>,
}
