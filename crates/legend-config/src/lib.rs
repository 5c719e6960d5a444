//! Configuration system for the color legend generator.
//!
//! Settings persist to disk as a RON file, accept CLI overrides via clap, and
//! deserialize forward/backward compatibly thanks to `#[serde(default)]`.

mod cli;
mod config;
mod error;

pub use cli::CliArgs;
pub use config::{LegendConfig, LogConfig, PathsConfig, RenderConfig};
pub use error::ConfigError;
