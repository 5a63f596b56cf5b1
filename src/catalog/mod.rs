//! Recipe catalog: the read-only drink data shown by the UI.

mod loader;
mod types;

pub use loader::{Catalog, CatalogError};
pub use types::{
    Category, CategoryFilter, CoffeeRecipe, ColorParseError, Difficulty, IngredientLayer, Rgb,
    Texture,
};
