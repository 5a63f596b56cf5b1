//! State for catalog/detail navigation.

use crate::catalog::CategoryFilter;
use crate::ui::mvi::UiState;

/// Which screen is up and what it points at.
///
/// `selected` only ever holds ids taken from the catalog; the owner checks
/// before dispatching `Open`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavigationState {
    pub filter: CategoryFilter,
    /// Index into the filtered list.
    pub focused: usize,
    pub selected: Option<String>,
    /// First visible line of the detail guide column.
    pub detail_scroll: u16,
}

impl UiState for NavigationState {}

impl NavigationState {
    pub fn is_detail(&self) -> bool {
        self.selected.is_some()
    }
}
