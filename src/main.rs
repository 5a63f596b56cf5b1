use std::process::ExitCode;

use anyhow::Context;
use brewmaster::catalog::{Catalog, CategoryFilter};
use brewmaster::cli::{format_json, format_table, unknown_recipe_message, Cli};
use brewmaster::config::Config;
use brewmaster::logging::init_tracing;
use brewmaster::ui::runtime::{run, LaunchOptions};
use clap::Parser;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    match try_main(cli).await {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

async fn try_main(cli: Cli) -> anyhow::Result<ExitCode> {
    let mut config = match cli.config.as_deref() {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("failed to load config")?;
    if cli.no_animation {
        config.animation.enabled = false;
    }

    let catalog_path = cli.catalog.as_deref().or(config.catalog.path.as_deref());
    let catalog = Catalog::load(catalog_path).context("failed to load recipe catalog")?;

    if cli.list {
        let recipes = catalog.filtered(cli.category.unwrap_or(CategoryFilter::All));
        if cli.json {
            println!("{}", format_json(&recipes)?);
        } else {
            print!("{}", format_table(&recipes));
        }
        return Ok(ExitCode::SUCCESS);
    }

    if let Some(id) = cli.recipe.as_deref() {
        if !catalog.contains(id) {
            eprintln!("{}", unknown_recipe_message(id, &catalog));
            return Ok(ExitCode::FAILURE);
        }
    }

    let log_path = config.log_path();
    init_tracing(config.logging.level, &log_path)
        .with_context(|| format!("failed to open log file {}", log_path.display()))?;
    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        recipes = catalog.len(),
        animation = config.animation.enabled,
        "Starting brewmaster"
    );

    let launch = LaunchOptions {
        filter: cli.category,
        recipe: cli.recipe,
    };
    run(&config, catalog, launch).await?;
    Ok(ExitCode::SUCCESS)
}
