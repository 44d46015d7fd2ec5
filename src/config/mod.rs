//! Configuration file handling.
//!
//! The file lives at `<config_dir>/kpi-carousel/config.toml`. A missing file
//! yields [`Config::default`]; command-line flags are layered on top by the
//! binary.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{Config, EndpointConfig, UiConfig};
