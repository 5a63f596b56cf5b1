//! Intents for catalog/detail navigation.

use crate::catalog::CategoryFilter;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationIntent {
    SetFilter(CategoryFilter),
    /// Move the list focus by `delta`, wrapping over `len` entries.
    MoveFocus { delta: i32, len: usize },
    /// Put the list focus on `index` directly.
    Focus { index: usize },
    Open { recipe_id: String },
    Back,
    /// Scroll the guide, never past `max`.
    ScrollDetail { delta: i32, max: u16 },
}

impl Intent for NavigationIntent {}
