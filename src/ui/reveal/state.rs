//! State for the layer reveal sequencer.

use crate::ui::mvi::UiState;

/// Where a reveal run currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealPhase {
    /// Nothing shown yet.
    Idle,
    /// Some, not all, layers shown.
    Revealing,
    /// Every layer shown; no reveal pending.
    Settled,
}

/// Layer reveal sequencer.
///
/// `generation` identifies the current run. Reveal events carry the
/// generation they were armed for and are ignored once it moves on.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RevealState {
    pub generation: u64,
    pub layer_count: usize,
    /// Always within `0..=layer_count`.
    pub visible: usize,
    pub playing: bool,
}

impl UiState for RevealState {}

impl RevealState {
    pub fn phase(&self) -> RevealPhase {
        if self.visible >= self.layer_count {
            RevealPhase::Settled
        } else if self.visible == 0 {
            RevealPhase::Idle
        } else {
            RevealPhase::Revealing
        }
    }

    pub fn is_settled(&self) -> bool {
        self.phase() == RevealPhase::Settled
    }

    /// The steam cue only shows on a cup that is still playing and full.
    pub fn steam_enabled(&self) -> bool {
        self.playing && self.visible == self.layer_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(layer_count: usize, visible: usize, playing: bool) -> RevealState {
        RevealState {
            generation: 1,
            layer_count,
            visible,
            playing,
        }
    }

    #[test]
    fn phase_follows_visible_count() {
        assert_eq!(state(3, 0, true).phase(), RevealPhase::Idle);
        assert_eq!(state(3, 1, true).phase(), RevealPhase::Revealing);
        assert_eq!(state(3, 2, true).phase(), RevealPhase::Revealing);
        assert_eq!(state(3, 3, true).phase(), RevealPhase::Settled);
    }

    #[test]
    fn empty_recipe_is_settled() {
        assert_eq!(state(0, 0, true).phase(), RevealPhase::Settled);
    }

    #[test]
    fn steam_needs_playing_and_full_cup() {
        assert!(state(3, 3, true).steam_enabled());
        assert!(!state(3, 3, false).steam_enabled());
        assert!(!state(3, 2, true).steam_enabled());
    }
}
