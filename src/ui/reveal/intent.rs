//! Intents for the layer reveal sequencer.

use crate::ui::mvi::Intent;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RevealIntent {
    /// Start (or restart) an animated run over `layer_count` layers.
    /// Opens a new generation with nothing visible.
    Start { layer_count: usize },

    /// Static display: every layer at once, not playing.
    /// Opens a new generation so queued reveals are dropped.
    ShowAll { layer_count: usize },

    /// A reveal timer of `generation` fired.
    Reveal { generation: u64 },

    /// The settle hold of `generation` ran out.
    PlaybackEnded { generation: u64 },

    /// The owner stopped showing the cup. Freezes the current counts.
    Cancel,
}

impl Intent for RevealIntent {}
