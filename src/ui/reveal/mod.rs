//! Layer reveal sequencer.
//!
//! Reveals a recipe's layers one at a time and gates the steam cue on
//! completion.
//!
//! - `state.rs` - Generation, counts and phase (Idle → Revealing → Settled)
//! - `intent.rs` - Start, ShowAll, Reveal, PlaybackEnded, Cancel
//! - `reducer.rs` - State transitions (pure, generation checked)
//! - `scheduler.rs` - The cancellable timer task feeding `Reveal` events

mod intent;
mod reducer;
mod scheduler;
mod state;

pub use intent::RevealIntent;
pub use reducer::RevealReducer;
pub use scheduler::{RevealPlan, RevealScheduler};
pub use state::{RevealPhase, RevealState};
