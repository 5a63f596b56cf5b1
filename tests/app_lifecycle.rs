//! App-level reveal lifecycle driven by real scheduler timers on a paused
//! clock.

mod common;

use brewmaster::config::AnimationConfig;
use brewmaster::ui::reveal::RevealPhase;
use common::*;
use std::time::Duration;
use tokio::time::Instant;

#[tokio::test(start_paused = true)]
async fn three_layer_pour_timeline() {
    let (mut app, mut rx) = make_app();
    let start = Instant::now();
    assert!(app.open_recipe("latte"));
    assert_eq!(app.reveal().visible, 0);
    assert!(!app.reveal().steam_enabled());

    for expected in 1..=3 {
        pump_one(&mut app, &mut rx).await;
        assert_eq!(app.reveal().visible, expected);
        let due = Duration::from_millis(800 * expected as u64);
        let elapsed = start.elapsed();
        assert!(elapsed >= due && elapsed < due + Duration::from_millis(10));
    }

    assert_eq!(app.reveal().phase(), RevealPhase::Settled);
    assert!(app.reveal().playing);
    assert!(app.reveal().steam_enabled());

    tokio::time::sleep(Duration::from_secs(10)).await;
    assert!(rx.try_recv().is_err());
    assert_eq!(app.reveal().visible, 3);
}

#[tokio::test(start_paused = true)]
async fn switching_recipe_mid_pour_ignores_old_timers() {
    let (mut app, mut rx) = make_app();
    app.open_recipe("latte");
    let latte_generation = app.reveal().generation;

    pump_one(&mut app, &mut rx).await;
    assert_eq!(app.reveal().visible, 1);

    app.back();
    assert!(app.open_recipe("mocha"));
    assert_eq!(app.reveal().visible, 0);
    assert_eq!(app.reveal().layer_count, 4);

    // A late latte event must not move the mocha count.
    app.on_layer_revealed(latte_generation);
    assert_eq!(app.reveal().visible, 0);

    for expected in 1..=4 {
        pump_one(&mut app, &mut rx).await;
        assert_eq!(app.reveal().visible, expected);
    }

    tokio::time::sleep(Duration::from_secs(10)).await;
    assert!(rx.try_recv().is_err(), "exactly N increments");
    assert_eq!(app.reveal().visible, 4);
}

#[tokio::test(start_paused = true)]
async fn replay_restarts_from_empty_cup() {
    let (mut app, mut rx) = make_app();
    app.open_recipe("espresso");
    pump_one(&mut app, &mut rx).await;
    pump_one(&mut app, &mut rx).await;
    assert!(app.reveal().is_settled());

    assert!(app.replay());
    assert_eq!(app.reveal().visible, 0);
    assert!(app.is_reveal_armed());

    pump_one(&mut app, &mut rx).await;
    assert_eq!(app.reveal().visible, 1);
}

#[tokio::test(start_paused = true)]
async fn playback_hold_stops_steam() {
    let (mut app, mut rx) = make_app_with(AnimationConfig {
        settle_hold_ms: 3000,
        ..AnimationConfig::default()
    });
    app.open_recipe("espresso");
    pump_one(&mut app, &mut rx).await;
    pump_one(&mut app, &mut rx).await;
    assert!(app.reveal().steam_enabled());

    pump_one(&mut app, &mut rx).await;
    assert!(!app.reveal().playing);
    assert!(!app.reveal().steam_enabled());
    assert_eq!(app.reveal().visible, 2);
}

#[tokio::test(start_paused = true)]
async fn back_leaves_no_pending_events() {
    let (mut app, mut rx) = make_app();
    app.open_recipe("mocha");
    app.back();
    assert!(!app.is_reveal_armed());

    tokio::time::sleep(Duration::from_secs(10)).await;
    assert!(rx.try_recv().is_err());
}

#[tokio::test(start_paused = true)]
async fn layerless_recipe_stops_steaming_after_hold() {
    let (mut app, mut rx) = make_app_from(
        layerless_catalog(),
        AnimationConfig {
            settle_hold_ms: 3000,
            ..AnimationConfig::default()
        },
    );
    let start = Instant::now();
    assert!(app.open_recipe("water"));
    assert!(app.reveal().is_settled());
    assert!(app.reveal().steam_enabled());

    pump_one(&mut app, &mut rx).await;
    assert!(start.elapsed() >= Duration::from_millis(3000));
    assert!(!app.reveal().playing);
    assert!(!app.reveal().steam_enabled());
    assert_eq!(app.reveal().visible, 0);

    tokio::time::sleep(Duration::from_secs(60)).await;
    assert!(rx.try_recv().is_err());
}

#[tokio::test(start_paused = true)]
async fn layerless_recipe_without_hold_arms_nothing() {
    let (mut app, _rx) = make_app_from(layerless_catalog(), AnimationConfig {
        settle_hold_ms: 0,
        ..AnimationConfig::default()
    });
    assert!(app.open_recipe("water"));
    assert!(!app.is_reveal_armed());
    assert!(app.reveal().is_settled());
}
