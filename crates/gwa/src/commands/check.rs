//! `gwa check` command implementation.

use clap::Args;
use gwa_config::Config;
use gwa_nav::NavigationError;
use gwa_tree::ContentTree;

use super::SiteArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the check command.
#[derive(Args)]
pub(crate) struct CheckArgs {
    #[command(flatten)]
    site: SiteArgs,
}

impl CheckArgs {
    /// Execute the check command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded or any entry is invalid.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let config = self.site.load_config()?;
        if let Some(path) = &config.config_path {
            output.info(&format!("Config: {}", path.display()));
        } else {
            output.warning("No gwa.toml found, using defaults");
        }
        let tree = config.load_tree()?;
        output.info(&format!(
            "Tree: {} ({} pages)",
            config.site_resolved.tree.display(),
            tree.len()
        ));

        let errors = check_site(&config, &tree);
        if errors.is_empty() {
            output.success("All navigation entries are valid");
            return Ok(());
        }

        for error in &errors {
            output.error(&error.to_string());
        }
        Err(CliError::Validation(format!(
            "{} invalid navigation entries",
            errors.len()
        )))
    }
}

/// Validate menus and sidebar entries against `tree`.
///
/// Sidebar locations are prefixed with `sidebar.`.
pub(crate) fn check_site(config: &Config, tree: &ContentTree) -> Vec<NavigationError> {
    let mut errors = config
        .navigation
        .bind(tree)
        .validate()
        .err()
        .unwrap_or_default();
    let sidebar_errors = config.sidebar.bind(tree).validate().err().unwrap_or_default();
    errors.extend(sidebar_errors.into_iter().map(prefix_sidebar));
    errors
}

fn prefix_sidebar(error: NavigationError) -> NavigationError {
    match error {
        NavigationError::CallToAction { location, source } => NavigationError::CallToAction {
            location: format!("sidebar.{location}"),
            source,
        },
        other => other,
    }
}
