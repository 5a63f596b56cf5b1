use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub animation: AnimationConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Layer reveal timing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimationConfig {
    /// When false, recipes open with every layer already shown.
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// Delay between two layer reveals in milliseconds (default: 800).
    #[serde(default = "default_layer_interval_ms")]
    pub layer_interval_ms: u64,
    /// How long a settled cup keeps steaming before playback stops
    /// (default: 3000). Zero keeps it playing until the next navigation.
    #[serde(default = "default_settle_hold_ms")]
    pub settle_hold_ms: u64,
}

/// Render loop settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Tick interval driving the steam animation (default: 250).
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

/// Where recipes come from.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Custom catalog file. The built-in drinks are used when unset.
    #[serde(default)]
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub level: LogLevel,
    /// Log file. Defaults to `<data dir>/brewmaster/brewmaster.log`.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

fn default_enabled() -> bool {
    true
}

fn default_layer_interval_ms() -> u64 {
    800
}

fn default_settle_hold_ms() -> u64 {
    3000
}

fn default_tick_rate_ms() -> u64 {
    250
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            layer_interval_ms: default_layer_interval_ms(),
            settle_hold_ms: default_settle_hold_ms(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}

impl AnimationConfig {
    pub fn layer_interval(&self) -> Duration {
        Duration::from_millis(self.layer_interval_ms)
    }

    /// `None` means the cup keeps playing once settled.
    pub fn settle_hold(&self) -> Option<Duration> {
        (self.settle_hold_ms > 0).then(|| Duration::from_millis(self.settle_hold_ms))
    }
}

impl UiConfig {
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }
}
