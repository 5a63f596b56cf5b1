mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{AnimationConfig, CatalogConfig, Config, LogLevel, LoggingConfig, UiConfig};
