//! Catalog/detail navigation: filter, list focus and selected recipe.

mod intent;
mod reducer;
mod state;

pub use intent::NavigationIntent;
pub use reducer::NavigationReducer;
pub use state::NavigationState;
