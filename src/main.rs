//! Recipe Manager
//!
//! Interactive console tool for recording and viewing recipes.

use std::io;

use anyhow::Result;
use clap::Parser;
use recipe_manager::shell::log_calorie_warning;
use recipe_manager::{Catalog, DEFAULT_CALORIE_THRESHOLD, Shell, ShellError, logger, sample};

#[derive(Parser)]
#[command(name = "recipe-manager")]
#[command(about = "Record recipes and check their total calories")]
struct Cli {
    /// Warn when a recipe's total calories exceed this value
    #[arg(short, long, default_value_t = DEFAULT_CALORIE_THRESHOLD)]
    threshold: i64,

    /// Preload the built-in sample recipes
    #[arg(long)]
    sample: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logger::init_cli_logger(cli.verbose);

    let mut catalog = Catalog::new();
    if cli.sample {
        for mut recipe in sample::sample_recipes() {
            recipe.subscribe(log_calorie_warning);
            catalog.add(recipe);
        }
        println!("Loaded {} sample recipes", catalog.len());
    }

    let shell = Shell::new(io::stdin().lock(), io::stdout().lock(), catalog, cli.threshold);
    match shell.run() {
        Ok(catalog) => {
            tracing::debug!(recipes = catalog.len(), "session ended");
        }
        Err(ShellError::InputClosed) => {
            eprintln!("Input ended before the recipe was complete; it was not saved.");
        }
        Err(e) => return Err(e.into()),
    }

    Ok(())
}
