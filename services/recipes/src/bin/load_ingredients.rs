//! One-time ingredient catalog import.
//!
//! # Usage
//!
//! ```bash
//! cargo run -p platter-recipes --bin load_ingredients -- --file data/ingredients.csv
//! ```
//!
//! The file holds one `name,measurement_unit` row per line. The import
//! refuses to run when the catalog already holds data, so re-running it
//! cannot duplicate rows.

use std::path::PathBuf;

use anyhow::{Context as _, Result, bail};
use clap::Parser;
use sea_orm::Database;
use tracing::info;

use platter_core::tracing::init_tracing;
use platter_recipes::infra::db::DbIngredientRepository;
use platter_recipes::usecase::ingredient::{LoadIngredientsUseCase, LoadOutcome};

#[derive(Parser)]
#[command(about = "Load the ingredient catalog from a CSV file")]
struct Args {
    /// Path to the CSV file (`name,measurement_unit` per line)
    #[arg(long)]
    file: PathBuf,
}

fn parse_rows(content: &str) -> Result<Vec<(String, String)>> {
    let mut rows = Vec::new();
    for (number, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        // Ingredient names may contain commas; the unit never does.
        let Some((name, unit)) = line.rsplit_once(',') else {
            bail!("line {}: expected `name,measurement_unit`", number + 1);
        };
        rows.push((name.trim().to_owned(), unit.trim().to_owned()));
    }
    Ok(rows)
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();

    let content = std::fs::read_to_string(&args.file)
        .with_context(|| format!("read {}", args.file.display()))?;
    let rows = parse_rows(&content)?;
    if rows.is_empty() {
        bail!("no ingredient rows in {}", args.file.display());
    }

    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL")?;
    let db = Database::connect(&database_url)
        .await
        .context("connect to database")?;

    let usecase = LoadIngredientsUseCase {
        repo: DbIngredientRepository { db },
    };
    match usecase.execute(&rows).await? {
        LoadOutcome::Loaded(written) => info!("loaded {written} ingredients"),
        LoadOutcome::AlreadyLoaded => bail!("ingredient catalog already holds data; refusing"),
    }
    Ok(())
}
