//! Reducer for catalog/detail navigation.

use crate::ui::mvi::Reducer;

use super::intent::NavigationIntent;
use super::state::NavigationState;

pub struct NavigationReducer;

impl Reducer for NavigationReducer {
    type State = NavigationState;
    type Intent = NavigationIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            NavigationIntent::SetFilter(filter) => NavigationState {
                filter,
                focused: 0,
                ..state
            },

            NavigationIntent::MoveFocus { delta, len } => {
                let focused = if len == 0 {
                    0
                } else {
                    let current = state.focused.min(len - 1) as i64;
                    (current + delta as i64).rem_euclid(len as i64) as usize
                };
                NavigationState { focused, ..state }
            }

            NavigationIntent::Focus { index } => NavigationState {
                focused: index,
                ..state
            },

            NavigationIntent::Open { recipe_id } => NavigationState {
                selected: Some(recipe_id),
                detail_scroll: 0,
                ..state
            },

            NavigationIntent::Back => NavigationState {
                selected: None,
                detail_scroll: 0,
                ..state
            },

            NavigationIntent::ScrollDetail { delta, max } => {
                if !state.is_detail() {
                    return state;
                }
                let detail_scroll = if delta.is_negative() {
                    state
                        .detail_scroll
                        .saturating_sub(u16::try_from(delta.unsigned_abs()).unwrap_or(u16::MAX))
                } else {
                    state
                        .detail_scroll
                        .saturating_add(u16::try_from(delta).unwrap_or(u16::MAX))
                };
                let detail_scroll = detail_scroll.min(max);
                NavigationState {
                    detail_scroll,
                    ..state
                }
            }
        }
    }
}
