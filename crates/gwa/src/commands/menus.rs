//! `gwa menus` command implementation.

use clap::Args;
use gwa_config::Alert;
use gwa_nav::{Menus, PrimaryNav, primary_nav};
use serde::Serialize;

use super::SiteArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the menus command.
#[derive(Args)]
pub(crate) struct MenusArgs {
    #[command(flatten)]
    site: SiteArgs,

    /// URL of the current page, used to highlight the primary navigation.
    #[arg(long)]
    current: Option<String>,
}

#[derive(Serialize)]
struct MenusOutput {
    #[serde(flatten)]
    menus: Menus,
    primary_nav: PrimaryNav,
    alert: Option<Alert>,
}

impl MenusArgs {
    /// Execute the menus command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration or the tree cannot be loaded, or if
    /// `--current` names no page.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let config = self.site.load_config()?;
        let tree = config.load_tree()?;
        let current = match &self.current {
            Some(url) => Some(
                tree.find_by_url(url)
                    .ok_or_else(|| CliError::PageNotFound(url.clone()))?,
            ),
            None => None,
        };

        let navigation = config.navigation.bind(&tree);
        let result = MenusOutput {
            menus: Menus::resolve(&navigation),
            primary_nav: primary_nav(&navigation, current.as_ref()),
            alert: config.system_messages.alert(),
        };
        output.json(&result)
    }
}
