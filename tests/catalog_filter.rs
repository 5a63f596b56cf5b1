use brewmaster::catalog::{Catalog, CatalogError, Category, CategoryFilter};

fn ids(recipes: &[&brewmaster::catalog::CoffeeRecipe]) -> Vec<String> {
    recipes.iter().map(|r| r.id.clone()).collect()
}

#[test]
fn builtin_catalog_has_ten_recipes_in_order() {
    let catalog = Catalog::builtin().expect("built-in catalog");
    let all: Vec<&str> = catalog.ids().collect();
    assert_eq!(
        all,
        vec![
            "espresso",
            "americano",
            "latte",
            "cappuccino",
            "mocha",
            "cinnamon_latte",
            "golden_coffee",
            "coconut_cold_brew",
            "plum_tea",
            "lemon_sparkling",
        ]
    );
}

#[test]
fn all_filter_returns_whole_catalog() {
    let catalog = Catalog::builtin().expect("built-in catalog");
    let filtered = catalog.filtered(CategoryFilter::All);
    assert_eq!(filtered.len(), catalog.len());
    let expected: Vec<String> = catalog.recipes().iter().map(|r| r.id.clone()).collect();
    assert_eq!(ids(&filtered), expected);
}

#[test]
fn milk_filter_keeps_catalog_order() {
    let catalog = Catalog::builtin().expect("built-in catalog");
    let milk = catalog.filtered(CategoryFilter::Milk);
    assert_eq!(ids(&milk), vec!["latte", "cappuccino", "mocha"]);
    assert!(milk.iter().all(|r| r.category == Category::Milk));
}

#[test]
fn every_builtin_recipe_has_layers_and_steps() {
    let catalog = Catalog::builtin().expect("built-in catalog");
    for recipe in catalog.recipes() {
        assert!(!recipe.ingredients.is_empty(), "{} has no layers", recipe.id);
        assert!(!recipe.steps.is_empty(), "{} has no steps", recipe.id);
    }
}

#[test]
fn filter_with_no_match_is_empty() {
    let catalog = Catalog::from_toml_str(
        r##"
[[recipe]]
id = "doppio"
name = "双份浓缩"
english_name = "Doppio"
description = "Two shots."
difficulty = "easy"
category = "classic"
steps = ["Pull two shots"]

[[recipe.ingredients]]
name = "Espresso"
color = "#3b2314"
height_percent = 60
"##,
    )
    .expect("valid catalog");
    assert!(catalog.filtered(CategoryFilter::Specialty).is_empty());
    assert_eq!(catalog.filtered(CategoryFilter::Classic).len(), 1);
}

#[test]
fn catalog_file_is_loaded_from_disk() {
    let dir = tempfile::TempDir::new().expect("temp dir");
    let path = dir.path().join("recipes.toml");
    std::fs::write(&path, "recipe = []\n").expect("write catalog");
    let catalog = Catalog::load(Some(&path)).expect("load catalog");
    assert!(catalog.is_empty());
}

#[test]
fn missing_catalog_file_is_a_read_error() {
    let dir = tempfile::TempDir::new().expect("temp dir");
    let err = Catalog::load(Some(&dir.path().join("nope.toml"))).unwrap_err();
    assert!(matches!(err, CatalogError::ReadError { .. }));
}
