//! CLI command implementations.

pub(crate) mod check;
pub(crate) mod menus;
pub(crate) mod sidebar;

use std::path::PathBuf;

use clap::Args;
use gwa_config::{CliSettings, Config};

use crate::error::CliError;

pub(crate) use check::CheckArgs;
pub(crate) use menus::MenusArgs;
pub(crate) use sidebar::SidebarArgs;

/// Options shared by every command.
#[derive(Args)]
pub(crate) struct SiteArgs {
    /// Path to configuration file (default: auto-discover gwa.toml).
    #[arg(short, long, env = "GWA_CONFIG")]
    config: Option<PathBuf>,

    /// Content tree file (overrides config).
    #[arg(short, long)]
    tree: Option<PathBuf>,
}

impl SiteArgs {
    /// Load configuration with CLI overrides applied.
    pub(crate) fn load_config(&self) -> Result<Config, CliError> {
        let cli_settings = CliSettings {
            tree: self.tree.clone(),
        };
        Ok(Config::load(self.config.as_deref(), Some(&cli_settings))?)
    }
}
