use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::catalog::types::{CategoryFilter, CoffeeRecipe};

const BUILTIN_RECIPES: &str = include_str!("../../assets/recipes.toml");

/// Errors that can occur when loading a recipe catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse catalog: {source}")]
    ParseError {
        #[source]
        source: toml::de::Error,
    },

    #[error("Duplicate recipe id '{id}'")]
    DuplicateId { id: String },

    #[error("Recipe '{recipe}' has an empty {field}")]
    EmptyField {
        recipe: String,
        field: &'static str,
    },

    #[error("Recipe '{recipe}' layer {layer} has height {value}: expected 0-100")]
    InvalidHeight {
        recipe: String,
        layer: usize,
        value: f32,
    },
}

#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default, rename = "recipe")]
    recipes: Vec<CoffeeRecipe>,
}

/// Read-only, insertion-ordered recipe collection.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    recipes: Vec<CoffeeRecipe>,
}

impl Catalog {
    /// Builds a catalog after checking ids and layer heights.
    pub fn new(recipes: Vec<CoffeeRecipe>) -> Result<Self, CatalogError> {
        let catalog = Self { recipes };
        catalog.validate()?;
        Ok(catalog)
    }

    /// The drinks shipped with the binary.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_toml_str(BUILTIN_RECIPES)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile =
            toml::from_str(content).map_err(|source| CatalogError::ParseError { source })?;
        Self::new(file.recipes)
    }

    pub fn load_from(path: &Path) -> Result<Self, CatalogError> {
        let content = fs::read_to_string(path).map_err(|source| CatalogError::ReadError {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Loads `path` if given, the built-in catalog otherwise.
    pub fn load(path: Option<&Path>) -> Result<Self, CatalogError> {
        match path {
            Some(path) => Self::load_from(path),
            None => Self::builtin(),
        }
    }

    fn validate(&self) -> Result<(), CatalogError> {
        let mut seen = HashSet::new();
        for recipe in &self.recipes {
            if recipe.id.trim().is_empty() {
                return Err(CatalogError::EmptyField {
                    recipe: recipe.english_name.clone(),
                    field: "id",
                });
            }
            if !seen.insert(recipe.id.as_str()) {
                return Err(CatalogError::DuplicateId {
                    id: recipe.id.clone(),
                });
            }
            if recipe.name.trim().is_empty() {
                return Err(CatalogError::EmptyField {
                    recipe: recipe.id.clone(),
                    field: "name",
                });
            }
            for (layer, ingredient) in recipe.ingredients.iter().enumerate() {
                let value = ingredient.height_percent;
                if !value.is_finite() || !(0.0..=100.0).contains(&value) {
                    return Err(CatalogError::InvalidHeight {
                        recipe: recipe.id.clone(),
                        layer,
                        value,
                    });
                }
            }
        }
        Ok(())
    }

    pub fn recipes(&self) -> &[CoffeeRecipe] {
        &self.recipes
    }

    pub fn get(&self, id: &str) -> Option<&CoffeeRecipe> {
        self.recipes.iter().find(|recipe| recipe.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.recipes.iter().map(|recipe| recipe.id.as_str())
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    /// Recipes shown under `filter`, in catalog order.
    pub fn filtered(&self, filter: CategoryFilter) -> Vec<&CoffeeRecipe> {
        self.recipes
            .iter()
            .filter(|recipe| filter.matches(recipe.category))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TWO_RECIPES: &str = r##"
[[recipe]]
id = "a"
name = "A"
english_name = "Alpha"
description = "first"
difficulty = "easy"
category = "classic"

[[recipe.ingredients]]
name = "water"
color = "#bde0fe"
height_percent = 60

[[recipe]]
id = "b"
name = "B"
english_name = "Beta"
description = "second"
difficulty = "hard"
category = "milk"
steps = ["pour"]

[[recipe.ingredients]]
name = "milk"
color = "#fefae0"
height_percent = 40
texture = "foam"
"##;

    #[test]
    fn parses_recipes_in_file_order() {
        let catalog = Catalog::from_toml_str(TWO_RECIPES).unwrap();
        assert_eq!(catalog.ids().collect::<Vec<_>>(), vec!["a", "b"]);
        let b = catalog.get("b").unwrap();
        assert_eq!(b.steps, vec!["pour".to_string()]);
        assert!(b.tips.is_empty());
    }

    #[test]
    fn rejects_duplicate_ids() {
        let doubled = TWO_RECIPES.replace("id = \"b\"", "id = \"a\"");
        let err = Catalog::from_toml_str(&doubled).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateId { id } if id == "a"));
    }

    #[test]
    fn rejects_height_out_of_range() {
        let tall = TWO_RECIPES.replace("height_percent = 40", "height_percent = 140");
        let err = Catalog::from_toml_str(&tall).unwrap_err();
        assert!(matches!(
            err,
            CatalogError::InvalidHeight { ref recipe, layer: 0, .. } if recipe == "b"
        ));
    }

    #[test]
    fn rejects_bad_colour() {
        let bad = TWO_RECIPES.replace("#fefae0", "cream");
        assert!(matches!(
            Catalog::from_toml_str(&bad),
            Err(CatalogError::ParseError { .. })
        ));
    }

    #[test]
    fn empty_file_is_empty_catalog() {
        let catalog = Catalog::from_toml_str("").unwrap();
        assert!(catalog.is_empty());
        assert!(catalog.filtered(CategoryFilter::All).is_empty());
    }
}
