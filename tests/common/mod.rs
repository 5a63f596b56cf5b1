//! Shared test utilities.

#![allow(dead_code, unused_imports)]

use brewmaster::catalog::Catalog;
use brewmaster::config::AnimationConfig;
use brewmaster::ui::app::App;
use brewmaster::ui::events::AppEvent;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tokio::sync::mpsc;

pub type EventReceiver = mpsc::UnboundedReceiver<AppEvent>;

/// App over the built-in catalog with the default 800ms pour and no
/// playback hold.
pub fn make_app() -> (App, EventReceiver) {
    make_app_with(AnimationConfig {
        settle_hold_ms: 0,
        ..AnimationConfig::default()
    })
}

pub fn make_app_with(animation: AnimationConfig) -> (App, EventReceiver) {
    make_app_from(Catalog::builtin().expect("built-in catalog"), animation)
}

pub fn make_app_from(catalog: Catalog, animation: AnimationConfig) -> (App, EventReceiver) {
    let (tx, rx) = mpsc::unbounded_channel();
    (App::new(catalog, animation, tx), rx)
}

/// One classic recipe with no layers at all.
pub fn layerless_catalog() -> Catalog {
    Catalog::from_toml_str(
        r#"
[[recipe]]
id = "water"
name = "白水"
english_name = "Hot Water"
description = "An empty cup waiting for coffee."
difficulty = "easy"
category = "classic"
steps = ["Boil water"]
ingredients = []
"#,
    )
    .expect("valid catalog")
}

/// Waits for the next timer event and feeds it to the app.
pub async fn pump_one(app: &mut App, rx: &mut EventReceiver) {
    match rx.recv().await.expect("channel open") {
        AppEvent::LayerRevealed { generation } => app.on_layer_revealed(generation),
        AppEvent::PlaybackEnded { generation } => app.on_playback_ended(generation),
        _ => panic!("unexpected non-reveal event"),
    }
}

pub fn press_key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

pub fn ctrl_key(ch: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL)
}

pub fn release_key(code: KeyCode) -> KeyEvent {
    KeyEvent::new_with_kind(code, KeyModifiers::NONE, KeyEventKind::Release)
}
