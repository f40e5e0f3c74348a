//! `gwa sidebar` command implementation.

use clap::Args;
use gwa_nav::Sidebar;

use super::SiteArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the sidebar command.
#[derive(Args)]
pub(crate) struct SidebarArgs {
    /// Page URL, e.g. `/about-us/our-people/`.
    url: String,

    #[command(flatten)]
    site: SiteArgs,
}

impl SidebarArgs {
    /// Execute the sidebar command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration or the tree cannot be loaded, or if
    /// no page has the given URL.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let config = self.site.load_config()?;
        let tree = config.load_tree()?;
        let page = tree
            .find_by_url(&self.url)
            .ok_or_else(|| CliError::PageNotFound(self.url.clone()))?;

        let settings = config.sidebar.bind(&tree);
        output.json(&Sidebar::for_page(&page, &settings))
    }
}
