//! Command-line flags shared by every binary

use std::path::PathBuf;

use clap::Args;
use tracing::info;

use crate::config::Config;
use crate::errors::AppResult;
use crate::observability::init_tracing;

#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Configuration file path (defaults to catalog.toml in the catalog root when present)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Catalog root directory (overrides config file)
    #[arg(short, long, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Log level
    #[arg(short = 'v', long, default_value = "info")]
    pub log_level: String,
}

impl CommonArgs {
    /// Initialise logging and load the configuration with CLI overrides applied
    pub fn init(&self) -> AppResult<Config> {
        init_tracing(&self.log_level);

        let mut config = Config::load(self.config.as_deref(), self.root.as_deref())?;
        if let Some(root) = &self.root {
            config = config.with_root(root.clone());
        }
        info!("Catalog root: {}", config.paths.root.display());
        Ok(config)
    }
}
