//! Timer side of the sequencer.
//!
//! One tokio task per generation sleeps until precomputed absolute
//! deadlines and posts generation-tagged events into the UI channel. The
//! task never touches UI state; the reducer decides whether an event
//! still applies.

use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::{sleep_until, Instant};

use crate::ui::events::{AppEvent, EventSender};

/// What to arm for one generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealPlan {
    pub generation: u64,
    pub layer_count: usize,
    pub interval: Duration,
    /// Time between settling and `PlaybackEnded`. `None` never ends.
    pub settle_hold: Option<Duration>,
}

impl RevealPlan {
    /// Offset of the k-th reveal (zero based) from the trigger.
    ///
    /// The first layer lands one interval after the trigger, so an opened
    /// cup is shown empty for a full interval and `N` layers settle at
    /// `N * interval`.
    pub fn reveal_offset(&self, k: usize) -> Duration {
        self.interval.saturating_mul((k as u32).saturating_add(1))
    }

    /// Offset of the last reveal, i.e. when the cup settles.
    pub fn settle_offset(&self) -> Duration {
        self.interval.saturating_mul(self.layer_count as u32)
    }
}

/// Owns at most one armed reveal task.
pub struct RevealScheduler {
    events: EventSender,
    task: Option<JoinHandle<()>>,
}

impl RevealScheduler {
    pub fn new(events: EventSender) -> Self {
        Self { events, task: None }
    }

    /// Aborts whatever is armed, then arms `plan`.
    ///
    /// An empty layer list is settled already: it arms no reveals, only
    /// the playback hold when there is one.
    /// Must be called from within a tokio runtime.
    pub fn arm(&mut self, plan: RevealPlan) {
        self.cancel();
        if plan.layer_count == 0 && plan.settle_hold.is_none() {
            tracing::debug!(generation = plan.generation, "Empty layer list, nothing to arm");
            return;
        }

        tracing::debug!(
            generation = plan.generation,
            layers = plan.layer_count,
            interval_ms = plan.interval.as_millis() as u64,
            "Arming layer reveal"
        );
        let start = Instant::now();
        let events = self.events.clone();
        self.task = Some(tokio::spawn(run_plan(plan, start, events)));
    }

    /// Aborts the armed task, if any. Events it already queued are left to
    /// the generation check.
    pub fn cancel(&mut self) {
        if let Some(task) = self.task.take() {
            if !task.is_finished() {
                tracing::debug!("Cancelling pending layer reveal");
            }
            task.abort();
        }
    }

    /// True while a reveal task is still pending.
    pub fn is_armed(&self) -> bool {
        self.task.as_ref().is_some_and(|task| !task.is_finished())
    }
}

impl Drop for RevealScheduler {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Deadlines count from `start`, the moment the plan was armed.
async fn run_plan(plan: RevealPlan, start: Instant, events: EventSender) {
    let generation = plan.generation;

    for k in 0..plan.layer_count {
        sleep_until(start + plan.reveal_offset(k)).await;
        if events.send(AppEvent::LayerRevealed { generation }).is_err() {
            return;
        }
    }

    if let Some(hold) = plan.settle_hold {
        sleep_until(start + plan.settle_offset() + hold).await;
        let _ = events.send(AppEvent::PlaybackEnded { generation });
    }
}
