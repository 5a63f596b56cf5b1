use crate::catalog::{Catalog, CategoryFilter};
use crate::config::Config;
use crate::shutdown::{ShutdownCoordinator, ShutdownHandle};
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler, EventSender};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;

/// Where the UI starts, as requested on the command line.
#[derive(Debug, Clone, Default)]
pub struct LaunchOptions {
    pub filter: Option<CategoryFilter>,
    /// Must already be known to exist in the catalog.
    pub recipe: Option<String>,
}

pub async fn run(config: &Config, catalog: Catalog, launch: LaunchOptions) -> anyhow::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let shutdown = ShutdownCoordinator::new();
    let mut events = EventHandler::new(config.ui.tick_rate(), shutdown.handle());
    spawn_signal_listener(events.sender(), shutdown.handle());

    let mut app = App::new(catalog, config.animation.clone(), events.sender());
    if let Some(filter) = launch.filter {
        app.set_filter(filter);
    }
    if let Some(id) = launch.recipe.as_deref() {
        app.open_recipe(id);
    }
    tracing::info!(recipes = app.catalog().len(), "UI started");

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        let Some(event) = events.next().await else {
            break;
        };
        match event {
            AppEvent::Key(key) => handle_key(&mut app, key),
            AppEvent::Tick => app.on_tick(),
            // Layout is recomputed from the frame area on every draw.
            AppEvent::Resize(_, _) => {}
            AppEvent::LayerRevealed { generation } => app.on_layer_revealed(generation),
            AppEvent::PlaybackEnded { generation } => app.on_playback_ended(generation),
            AppEvent::Shutdown => {
                tracing::info!("Termination signal received");
                app.request_quit();
            }
        }
    }

    shutdown.signal();
    drop(app);
    drop(guard);
    tracing::info!("UI stopped");
    Ok(())
}

fn spawn_signal_listener(events: EventSender, shutdown: ShutdownHandle) {
    tokio::spawn(async move {
        #[cfg(unix)]
        {
            use tokio::signal::unix::{signal, SignalKind};

            let mut sigterm = match signal(SignalKind::terminate()) {
                Ok(sigterm) => sigterm,
                Err(err) => {
                    tracing::warn!(error = %err, "Failed to install SIGTERM handler");
                    return;
                }
            };
            tokio::select! {
                _ = sigterm.recv() => {
                    let _ = events.send(AppEvent::Shutdown);
                }
                _ = shutdown.wait() => {}
            }
        }

        #[cfg(not(unix))]
        {
            tokio::select! {
                _ = tokio::signal::ctrl_c() => {
                    let _ = events.send(AppEvent::Shutdown);
                }
                _ = shutdown.wait() => {}
            }
        }
    });
}
