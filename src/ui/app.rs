use crate::catalog::{Catalog, CategoryFilter, CoffeeRecipe};
use crate::config::AnimationConfig;
use crate::ui::detail_view::guide_scroll_limit;
use crate::ui::events::EventSender;
use crate::ui::mvi::Reducer;
use crate::ui::navigation::{NavigationIntent, NavigationReducer, NavigationState};
use crate::ui::reveal::{RevealIntent, RevealPlan, RevealReducer, RevealScheduler, RevealState};

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

/// Lines moved by one scroll step in the detail guide.
const SCROLL_STEP: i32 = 1;

pub struct App {
    should_quit: bool,
    catalog: Catalog,
    animation: AnimationConfig,
    /// Filter, focus and selection (MVI pattern).
    navigation: NavigationState,
    /// Layer reveal sequencer (MVI pattern).
    reveal: RevealState,
    /// Timer resource behind `reveal`, managed outside MVI.
    scheduler: RevealScheduler,
    frame: u64,
}

impl App {
    pub fn new(catalog: Catalog, animation: AnimationConfig, events: EventSender) -> Self {
        Self {
            should_quit: false,
            catalog,
            animation,
            navigation: NavigationState::default(),
            reveal: RevealState::default(),
            scheduler: RevealScheduler::new(events),
            frame: 0,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn navigation(&self) -> &NavigationState {
        &self.navigation
    }

    pub fn reveal(&self) -> &RevealState {
        &self.reveal
    }

    /// True while reveal timers are pending.
    pub fn is_reveal_armed(&self) -> bool {
        self.scheduler.is_armed()
    }

    /// Tick counter driving the steam animation.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn on_tick(&mut self) {
        self.frame = self.frame.wrapping_add(1);
    }

    // ========================================================================
    // List screen
    // ========================================================================

    pub fn displayed_recipes(&self) -> Vec<&CoffeeRecipe> {
        self.catalog.filtered(self.navigation.filter)
    }

    pub fn focused_recipe(&self) -> Option<&CoffeeRecipe> {
        self.displayed_recipes()
            .get(self.navigation.focused)
            .copied()
    }

    pub fn set_filter(&mut self, filter: CategoryFilter) {
        if filter != self.navigation.filter {
            tracing::debug!(filter = filter.label(), "Category filter changed");
        }
        self.dispatch_navigation(NavigationIntent::SetFilter(filter));
    }

    pub fn cycle_filter(&mut self, delta: i32) {
        self.set_filter(self.navigation.filter.cycle(delta));
    }

    pub fn move_focus(&mut self, delta: i32) {
        let len = self.displayed_recipes().len();
        self.dispatch_navigation(NavigationIntent::MoveFocus { delta, len });
    }

    /// Opens the focused card. Returns false on an empty list.
    pub fn open_focused(&mut self) -> bool {
        let Some(id) = self.focused_recipe().map(|recipe| recipe.id.clone()) else {
            return false;
        };
        self.open_recipe(&id)
    }

    // ========================================================================
    // Detail screen
    // ========================================================================

    pub fn selected_recipe(&self) -> Option<&CoffeeRecipe> {
        self.navigation
            .selected
            .as_deref()
            .and_then(|id| self.catalog.get(id))
    }

    /// Switches to the detail screen of `id` and starts its reveal.
    ///
    /// Ids missing from the catalog are refused and leave state untouched.
    pub fn open_recipe(&mut self, id: &str) -> bool {
        let Some(layer_count) = self.catalog.get(id).map(|r| r.ingredients.len()) else {
            tracing::warn!(recipe = id, "Refusing to open unknown recipe");
            return false;
        };

        if let Some(index) = self.displayed_recipes().iter().position(|r| r.id == id) {
            self.dispatch_navigation(NavigationIntent::Focus { index });
        }

        tracing::info!(recipe = id, layers = layer_count, "Opening recipe");
        self.dispatch_navigation(NavigationIntent::Open {
            recipe_id: id.to_string(),
        });
        self.start_reveal(layer_count);
        true
    }

    /// Back to the list. Pending reveal timers are cancelled.
    pub fn back(&mut self) {
        if !self.navigation.is_detail() {
            return;
        }
        self.scheduler.cancel();
        self.dispatch_reveal(RevealIntent::Cancel);
        self.dispatch_navigation(NavigationIntent::Back);
        tracing::info!("Back to recipe list");
    }

    /// Restart the reveal of the open recipe from an empty cup.
    pub fn replay(&mut self) -> bool {
        let Some(layer_count) = self.selected_recipe().map(|r| r.ingredients.len()) else {
            return false;
        };
        tracing::debug!("Replaying layer reveal");
        self.start_reveal(layer_count);
        true
    }

    pub fn scroll_detail(&mut self, lines: i32) {
        let Some(max) = self.selected_recipe().map(guide_scroll_limit) else {
            return;
        };
        self.dispatch_navigation(NavigationIntent::ScrollDetail {
            delta: lines * SCROLL_STEP,
            max,
        });
    }

    // ========================================================================
    // Reveal sequencer (MVI pattern)
    // ========================================================================

    /// Called when a reveal timer fires.
    pub fn on_layer_revealed(&mut self, generation: u64) {
        if generation != self.reveal.generation {
            tracing::trace!(generation, current = self.reveal.generation, "Stale reveal");
        }
        self.dispatch_reveal(RevealIntent::Reveal { generation });
    }

    /// Called when the settle hold of a generation runs out.
    pub fn on_playback_ended(&mut self, generation: u64) {
        self.dispatch_reveal(RevealIntent::PlaybackEnded { generation });
    }

    fn start_reveal(&mut self, layer_count: usize) {
        if !self.animation.enabled {
            self.scheduler.cancel();
            self.dispatch_reveal(RevealIntent::ShowAll { layer_count });
            return;
        }

        self.dispatch_reveal(RevealIntent::Start { layer_count });
        self.scheduler.arm(RevealPlan {
            generation: self.reveal.generation,
            layer_count,
            interval: self.animation.layer_interval(),
            settle_hold: self.animation.settle_hold(),
        });
    }

    fn dispatch_reveal(&mut self, intent: RevealIntent) {
        dispatch_mvi!(self, reveal, RevealReducer, intent);
    }

    fn dispatch_navigation(&mut self, intent: NavigationIntent) {
        dispatch_mvi!(self, navigation, NavigationReducer, intent);
    }
}
