use clap::Parser;
use tracing::info;

use food_shopping_list_rs::catalog::{load_meals, load_texts, write_shopping_csv, TextAssets};
use food_shopping_list_rs::cli::Cli;
use food_shopping_list_rs::error::Result;
use food_shopping_list_rs::interface::{run_session, ConsoleInput, Presenter};
use food_shopping_list_rs::planner::UnitPolicy;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let texts = match &cli.texts {
        Some(path) => load_texts(path)?,
        None => TextAssets::default(),
    };
    let mut presenter = Presenter::new(texts);

    let catalog = load_meals(&cli.meals_file)?;
    info!(file = %cli.meals_file.display(), meals = catalog.len(), "meals loaded");

    let policy = if cli.strict_units {
        UnitPolicy::Strict
    } else {
        UnitPolicy::SeparateEntries
    };

    let list = run_session(&catalog, &mut presenter, &mut ConsoleInput, policy)?;

    if let (Some(list), Some(path)) = (list, &cli.csv) {
        write_shopping_csv(&list, path)?;
    }

    Ok(())
}
