use std::thread;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyEvent};
use tokio::sync::mpsc;

use crate::shutdown::ShutdownHandle;

pub enum AppEvent {
    Key(KeyEvent),
    Tick,
    Resize(u16, u16),
    /// A reveal timer fired. Tagged with the reveal generation it was
    /// armed for so stale timers can be told apart.
    LayerRevealed { generation: u64 },
    /// The settle hold of a reveal generation ran out.
    PlaybackEnded { generation: u64 },
    /// OS signal received (SIGTERM)
    Shutdown,
}

pub type EventSender = mpsc::UnboundedSender<AppEvent>;

pub struct EventHandler {
    rx: mpsc::UnboundedReceiver<AppEvent>,
    tx: EventSender,
}

impl EventHandler {
    /// Spawns the input thread. It polls the terminal, emits a `Tick` every
    /// `tick_rate` and exits on shutdown or once the receiver is gone.
    pub fn new(tick_rate: Duration, shutdown: ShutdownHandle) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        let event_tx = tx.clone();

        thread::Builder::new()
            .name("input".to_string())
            .spawn(move || {
                let mut last_tick = Instant::now();
                loop {
                    if shutdown.is_shutting_down() {
                        break;
                    }

                    // Short poll timeout so the shutdown flag is seen quickly
                    let timeout = tick_rate
                        .saturating_sub(last_tick.elapsed())
                        .min(Duration::from_millis(50));

                    let forwarded = match event::poll(timeout) {
                        Ok(true) => match event::read() {
                            Ok(Event::Key(key)) => event_tx.send(AppEvent::Key(key)).is_ok(),
                            Ok(Event::Resize(cols, rows)) => {
                                event_tx.send(AppEvent::Resize(cols, rows)).is_ok()
                            }
                            Ok(_) => true,
                            Err(err) => {
                                tracing::error!(error = %err, "Terminal read failed");
                                false
                            }
                        },
                        Ok(false) => true,
                        Err(err) => {
                            tracing::error!(error = %err, "Terminal poll failed");
                            false
                        }
                    };
                    if !forwarded {
                        break;
                    }

                    if last_tick.elapsed() >= tick_rate {
                        if event_tx.send(AppEvent::Tick).is_err() {
                            break;
                        }
                        last_tick = Instant::now();
                    }
                }
                tracing::debug!("Input thread stopped");
            })
            .map_err(|err| tracing::error!(error = %err, "Failed to spawn input thread"))
            .ok();

        Self { rx, tx }
    }

    /// Next event; `None` once every sender is gone.
    pub async fn next(&mut self) -> Option<AppEvent> {
        self.rx.recv().await
    }

    pub fn sender(&self) -> EventSender {
        self.tx.clone()
    }
}
