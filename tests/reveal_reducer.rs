//! Sequencer properties across layer counts.

use brewmaster::ui::mvi::Reducer;
use brewmaster::ui::reveal::{RevealIntent, RevealPhase, RevealReducer, RevealState};

fn reduce(state: RevealState, intent: RevealIntent) -> RevealState {
    RevealReducer::reduce(state, intent)
}

#[test]
fn visible_rises_by_one_and_caps_at_layer_count() {
    for n in 0..=8 {
        let mut state = reduce(RevealState::default(), RevealIntent::Start { layer_count: n });
        let generation = state.generation;

        for _ in 0..n + 3 {
            let before = state.visible;
            state = reduce(state, RevealIntent::Reveal { generation });
            assert!(state.visible <= n, "n={n} overshot");
            assert!(state.visible == before || state.visible == before + 1);
        }
        assert_eq!(state.visible, n);
        assert_eq!(state.phase(), RevealPhase::Settled);
    }
}

#[test]
fn retrigger_resets_and_counts_again() {
    let mut state = reduce(RevealState::default(), RevealIntent::Start { layer_count: 4 });
    let first = state.generation;
    state = reduce(state, RevealIntent::Reveal { generation: first });
    state = reduce(state, RevealIntent::Reveal { generation: first });
    assert_eq!(state.visible, 2);

    state = reduce(state, RevealIntent::Start { layer_count: 4 });
    let second = state.generation;
    assert_ne!(first, second);
    assert_eq!(state.visible, 0);

    let mut increments = 0;
    for round in 0..10 {
        let generation = if round % 2 == 0 { first } else { second };
        let before = state.visible;
        state = reduce(state, RevealIntent::Reveal { generation });
        if state.visible > before {
            increments += 1;
        }
    }
    assert_eq!(increments, 4);
    assert_eq!(state.visible, 4);
}

#[test]
fn static_display_is_settled_immediately() {
    let state = reduce(RevealState::default(), RevealIntent::ShowAll { layer_count: 3 });
    assert_eq!(state.visible, 3);
    assert!(!state.playing);
    assert!(!state.steam_enabled());
    assert_eq!(state.phase(), RevealPhase::Settled);
}

#[test]
fn steam_only_while_playing_and_complete() {
    let mut state = reduce(RevealState::default(), RevealIntent::Start { layer_count: 2 });
    let generation = state.generation;
    assert!(!state.steam_enabled());

    state = reduce(state, RevealIntent::Reveal { generation });
    assert!(!state.steam_enabled());
    state = reduce(state, RevealIntent::Reveal { generation });
    assert!(state.steam_enabled());

    state = reduce(state, RevealIntent::PlaybackEnded { generation });
    assert!(!state.steam_enabled());
    assert_eq!(state.visible, 2);
}

#[test]
fn cancel_invalidates_pending_events() {
    let mut state = reduce(RevealState::default(), RevealIntent::Start { layer_count: 3 });
    let generation = state.generation;
    state = reduce(state, RevealIntent::Reveal { generation });

    state = reduce(state, RevealIntent::Cancel);
    let frozen = state.clone();
    state = reduce(state, RevealIntent::Reveal { generation });
    state = reduce(state, RevealIntent::PlaybackEnded { generation });
    assert_eq!(state, frozen);
}

#[test]
fn empty_recipe_settles_at_zero() {
    let state = reduce(RevealState::default(), RevealIntent::Start { layer_count: 0 });
    assert_eq!(state.visible, 0);
    assert!(state.is_settled());
    assert!(state.steam_enabled());
}
