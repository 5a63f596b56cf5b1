//! Command line surface and the non-interactive `--list` output.

use std::path::PathBuf;

use clap::Parser;

use crate::catalog::{Catalog, CategoryFilter, CoffeeRecipe};

#[derive(Parser, Debug)]
#[command(
    name = "brewmaster",
    version,
    about = "Terminal coffee recipe catalog with animated layer pours"
)]
pub struct Cli {
    /// Config file (default: <config dir>/brewmaster/config.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Recipe catalog TOML, overrides the configured one
    #[arg(long, value_name = "PATH")]
    pub catalog: Option<PathBuf>,

    /// Category tab to start on
    #[arg(long, value_enum, value_name = "CATEGORY")]
    pub category: Option<CategoryFilter>,

    /// Open this recipe directly
    #[arg(long, value_name = "ID")]
    pub recipe: Option<String>,

    /// Show every layer at once instead of pouring them
    #[arg(long)]
    pub no_animation: bool,

    /// Print the catalog and exit
    #[arg(long)]
    pub list: bool,

    /// With --list, print JSON instead of a table
    #[arg(long, requires = "list")]
    pub json: bool,
}

/// Message printed when `--recipe` names an id missing from `catalog`.
pub fn unknown_recipe_message(id: &str, catalog: &Catalog) -> String {
    let available: Vec<&str> = catalog.ids().collect();
    format!(
        "Error: Recipe '{id}' not found in catalog\nAvailable recipes: {}",
        available.join(", ")
    )
}

pub fn format_table(recipes: &[&CoffeeRecipe]) -> String {
    let id_width = recipes
        .iter()
        .map(|r| r.id.chars().count())
        .max()
        .unwrap_or(0)
        .max("ID".len());
    let name_width = recipes
        .iter()
        .map(|r| r.english_name.chars().count())
        .max()
        .unwrap_or(0)
        .max("NAME".len());

    let mut out = format!(
        "{:<id_width$}  {:<name_width$}  {:<10}  {:<12}  LAYERS\n",
        "ID", "NAME", "CATEGORY", "DIFFICULTY"
    );
    for recipe in recipes {
        out.push_str(&format!(
            "{:<id_width$}  {:<name_width$}  {:<10}  {:<12}  {}\n",
            recipe.id,
            recipe.english_name,
            recipe.category.label(),
            recipe.difficulty.label(),
            recipe.ingredients.len()
        ));
    }
    out
}

pub fn format_json(recipes: &[&CoffeeRecipe]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(recipes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_flag_set() {
        let cli = Cli::try_parse_from([
            "brewmaster",
            "--category",
            "milk",
            "--recipe",
            "latte",
            "--no-animation",
        ])
        .expect("valid args");
        assert_eq!(cli.category, Some(CategoryFilter::Milk));
        assert_eq!(cli.recipe.as_deref(), Some("latte"));
        assert!(cli.no_animation);
        assert!(!cli.list);
    }

    #[test]
    fn json_requires_list() {
        assert!(Cli::try_parse_from(["brewmaster", "--json"]).is_err());
        assert!(Cli::try_parse_from(["brewmaster", "--list", "--json"]).is_ok());
    }

    #[test]
    fn unknown_category_is_rejected() {
        assert!(Cli::try_parse_from(["brewmaster", "--category", "tea"]).is_err());
    }

    #[test]
    fn table_has_one_row_per_recipe() {
        let catalog = Catalog::builtin().expect("built-in catalog");
        let recipes = catalog.filtered(CategoryFilter::Milk);
        let table = format_table(&recipes);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("ID"));
        assert!(lines[1].starts_with("latte"));
    }

    #[test]
    fn unknown_recipe_lists_ids() {
        let catalog = Catalog::builtin().expect("built-in catalog");
        let message = unknown_recipe_message("flat_white", &catalog);
        assert!(message.starts_with("Error: Recipe 'flat_white' not found in catalog"));
        assert!(message.contains("espresso, americano"));
    }
}
