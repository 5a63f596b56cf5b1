//! Reducer for the layer reveal sequencer.

use crate::ui::mvi::Reducer;

use super::intent::RevealIntent;
use super::state::RevealState;

/// Pure state transitions. Arming and aborting timers is done by the
/// caller with the generation found in the returned state.
pub struct RevealReducer;

impl Reducer for RevealReducer {
    type State = RevealState;
    type Intent = RevealIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            RevealIntent::Start { layer_count } => RevealState {
                generation: state.generation.wrapping_add(1),
                layer_count,
                visible: 0,
                playing: true,
            },

            RevealIntent::ShowAll { layer_count } => RevealState {
                generation: state.generation.wrapping_add(1),
                layer_count,
                visible: layer_count,
                playing: false,
            },

            RevealIntent::Reveal { generation } => {
                if generation != state.generation
                    || !state.playing
                    || state.visible >= state.layer_count
                {
                    return state;
                }
                RevealState {
                    visible: state.visible + 1,
                    ..state
                }
            }

            RevealIntent::PlaybackEnded { generation } => {
                if generation != state.generation || !state.playing {
                    return state;
                }
                RevealState {
                    visible: state.layer_count,
                    playing: false,
                    ..state
                }
            }

            RevealIntent::Cancel => RevealState {
                generation: state.generation.wrapping_add(1),
                playing: false,
                ..state
            },
        }
    }
}
