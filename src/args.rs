//! Command-line flags, layered over the configuration file.

use clap::Parser;
use std::path::PathBuf;

use crate::config::{Config, ConfigError};

/// Terminal carousel of KPI graphs with a live exchange-rate table.
#[derive(Debug, Default, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Path to the config file (default: <config_dir>/kpi-carousel/config.toml).
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the backend base URL (e.g. http://127.0.0.1:5000).
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,

    /// Override the directory image sources are resolved against.
    #[arg(long, value_name = "DIR")]
    pub assets_dir: Option<PathBuf>,
}

impl Args {
    /// Loads the config file and applies flag overrides on top.
    ///
    /// The merged result is validated again, so a bad `--base-url` is
    /// reported the same way as a bad file value.
    pub fn resolve_config(&self) -> Result<Config, ConfigError> {
        let path = self.config.clone().unwrap_or_else(Config::config_path);
        let mut config = Config::load_from(&path)?;

        if let Some(base_url) = &self.base_url {
            config.endpoint.base_url = base_url.clone();
        }
        if let Some(assets_dir) = &self.assets_dir {
            config.ui.assets_dir = assets_dir.clone();
        }

        config.validate()?;
        Ok(config)
    }
}
