//! Site settings for the web archive navigation tools.
//!
//! Parses `gwa.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Sections
//!
//! - `[site]`: location of the content tree file
//! - `[navigation]`: primary, secondary and footer menus
//! - `[sidebar]`: sidebar calls-to-action
//! - `[social]`, `[system_messages]`, `[tracking]`: per-site settings
//!
//! ## Environment Variable Expansion
//!
//! `${VAR}` and `${VAR:-default}` are expanded in:
//! - `site.tree`
//! - `tracking.google_tag_manager_id`

mod expand;
mod site;

use std::path::{Path, PathBuf};

use gwa_nav::{NavigationSettings, SidebarSettings};
use gwa_tree::{ContentTree, PageId, TreeError};
use serde::Deserialize;

pub use site::{Alert, SocialSettings, SystemMessages, Tracking, clean_alert_description};

/// CLI settings that override configuration file values.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override content tree file.
    pub tree: Option<PathBuf>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "gwa.toml";

/// Default content tree filename, relative to the config file.
const DEFAULT_TREE: &str = "tree.yaml";

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Site section as parsed from TOML.
    site: SiteConfigRaw,
    /// Navigation menus.
    pub navigation: NavigationSettings<PageId>,
    /// Sidebar calls-to-action.
    pub sidebar: SidebarSettings<PageId>,
    /// Social media settings.
    pub social: SocialSettings,
    /// 404 page and alert banner.
    pub system_messages: SystemMessages,
    /// Analytics settings.
    pub tracking: Tracking,

    /// Resolved site configuration (set after loading).
    #[serde(skip)]
    pub site_resolved: SiteConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct SiteConfigRaw {
    tree: Option<String>,
}

/// Resolved site configuration with absolute paths.
#[derive(Debug, Default)]
pub struct SiteConfig {
    /// Content tree file.
    pub tree: PathBuf,
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`site.tree`").
        field: String,
        /// Error message (e.g., "${`GWA_TREE`} not set").
        message: String,
    },
    /// Content tree could not be loaded.
    #[error(transparent)]
    Tree(#[from] TreeError),
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `gwa.toml` in current directory and parents.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist or parsing fails.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default_with_cwd()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }

        Ok(config)
    }

    /// Parse configuration from TOML, resolving paths against `base`.
    ///
    /// # Errors
    ///
    /// Returns error if parsing, expansion or validation fails.
    pub fn from_toml(content: &str, base: &Path) -> Result<Self, ConfigError> {
        let mut config: Self = toml::from_str(content)?;
        config.expand_env_vars()?;
        config.resolve_paths(base);
        config.system_messages.clean();
        config.validate()?;
        Ok(config)
    }

    /// Load the content tree named by `site.tree`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Tree` if the file is missing or malformed.
    pub fn load_tree(&self) -> Result<ContentTree, ConfigError> {
        Ok(ContentTree::load(&self.site_resolved.tree)?)
    }

    /// Validate configuration values.
    ///
    /// Menu entries are checked separately, against the content tree.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let messages = &self.system_messages;
        if messages.title_404.trim().is_empty() {
            return Err(ConfigError::Validation(
                "system_messages.title_404 cannot be empty".to_owned(),
            ));
        }
        if messages.active_alert
            && messages
                .description_alert
                .as_deref()
                .is_none_or(|d| d.trim().is_empty())
        {
            return Err(ConfigError::Validation(
                "system_messages.description_alert is required for an active alert".to_owned(),
            ));
        }
        Ok(())
    }

    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(tree) = &settings.tree {
            self.site_resolved.tree.clone_from(tree);
        }
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    fn default_with_cwd() -> Self {
        let cwd = std::env::current_dir().unwrap_or_default();
        Self::default_with_base(&cwd)
    }

    fn default_with_base(base: &Path) -> Self {
        Self {
            site: SiteConfigRaw::default(),
            navigation: NavigationSettings::default(),
            sidebar: SidebarSettings::default(),
            social: SocialSettings::default(),
            system_messages: SystemMessages::default(),
            tracking: Tracking::default(),
            site_resolved: SiteConfig {
                tree: base.join(DEFAULT_TREE),
            },
            config_path: None,
        }
    }

    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config_dir = path.parent().unwrap_or(Path::new("."));
        let mut config = Self::from_toml(&content, config_dir)?;
        config.config_path = Some(path.to_path_buf());
        Ok(config)
    }

    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        if let Some(tree) = &self.site.tree {
            self.site.tree = Some(expand::expand_env(tree, "site.tree")?);
        }
        self.tracking.google_tag_manager_id = expand::expand_env(
            &self.tracking.google_tag_manager_id,
            "tracking.google_tag_manager_id",
        )?;
        Ok(())
    }

    fn resolve_paths(&mut self, config_dir: &Path) {
        self.site_resolved = SiteConfig {
            tree: config_dir.join(self.site.tree.as_deref().unwrap_or(DEFAULT_TREE)),
        };
    }
}

#[cfg(test)]
mod tests {
    use gwa_links::LinkBlock;
    use pretty_assertions::assert_eq;

    use super::*;

    const SAMPLE: &str = r#"
[site]
tree = "content/tree.yaml"

[[navigation.primary]]
page = 3

[[navigation.primary]]
page = 4
title = "Our research"

[[navigation.footer]]
heading = "About us"
links = [
    { page = 3 },
    { external_link = "https://www.nationalarchives.gov.uk", title = "The National Archives" },
]

[[navigation.footer_links]]
external_link = "https://www.gov.uk/help/cookies"
title = "Cookies"

[[navigation.logos]]
url = "https://www.nationalarchives.gov.uk"
logo = { image = { id = 12, title = "The National Archives logo" } }

[sidebar.default_call_to_action]
title = "Search the archive"

[[sidebar.default_call_to_action.link]]
type = "internal_link"
value = { page = 4 }

[social]
twitter_handle = "UKGWA"

[system_messages]
title_alert = "Maintenance"
description_alert = "<p>The archive is read-only<br/> this weekend.</p>"
active_alert = true

[tracking]
google_tag_manager_id = "GTM-TEST"
"#;

    #[test]
    fn test_default_config() {
        let config = Config::default_with_base(Path::new("/site"));

        assert_eq!(config.site_resolved.tree, PathBuf::from("/site/tree.yaml"));
        assert!(config.navigation.primary.is_empty());
        assert_eq!(config.social.site_name, "UK Government Web Archive");
        assert!(!config.system_messages.active_alert);
    }

    #[test]
    fn test_parse_empty_config() {
        let config = Config::from_toml("", Path::new("/site")).unwrap();

        assert_eq!(config.site_resolved.tree, PathBuf::from("/site/tree.yaml"));
        assert_eq!(config.system_messages.title_404, "Page not found");
    }

    #[test]
    fn test_parse_full_config() {
        let config = Config::from_toml(SAMPLE, Path::new("/site")).unwrap();

        assert_eq!(
            config.site_resolved.tree,
            PathBuf::from("/site/content/tree.yaml")
        );
        assert_eq!(config.navigation.primary.len(), 2);
        assert_eq!(config.navigation.primary[1].title.as_deref(), Some("Our research"));
        assert_eq!(config.navigation.footer[0].links.len(), 2);
        assert_eq!(config.navigation.logos[0].logo.image.as_ref().unwrap().id, 12);
        assert_eq!(config.social.twitter_handle, "UKGWA");
        assert_eq!(config.social.site_name, "UK Government Web Archive");
        assert_eq!(config.tracking.google_tag_manager_id, "GTM-TEST");
    }

    #[test]
    fn test_parse_sidebar_call_to_action() {
        let config = Config::from_toml(SAMPLE, Path::new("/site")).unwrap();

        let cta = config.sidebar.default_call_to_action.unwrap();
        assert_eq!(cta.title, "Search the archive");
        assert_eq!(
            cta.link,
            vec![LinkBlock::InternalLink {
                page: Some(PageId(4)),
                link_text: None,
            }]
        );
    }

    #[test]
    fn test_alert_description_is_cleaned() {
        let config = Config::from_toml(SAMPLE, Path::new("/site")).unwrap();

        let alert = config.system_messages.alert().unwrap();
        assert_eq!(alert.title.as_deref(), Some("Maintenance"));
        assert_eq!(alert.description, "The archive is read-only this weekend.");
    }

    #[test]
    fn test_active_alert_requires_description() {
        let toml = "[system_messages]\nactive_alert = true\n";

        let err = Config::from_toml(toml, Path::new("/site")).unwrap_err();

        assert!(matches!(err, ConfigError::Validation(_)));
        assert!(err.to_string().contains("description_alert"));
    }

    #[test]
    fn test_invalid_toml() {
        let err = Config::from_toml("[navigation\n", Path::new("/site")).unwrap_err();

        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_tree_path_env_expansion() {
        // SAFETY: variable name is unique to this test
        unsafe {
            std::env::set_var("GWA_TEST_TREE_DIR", "exports");
        }
        let toml = "[site]\ntree = \"${GWA_TEST_TREE_DIR}/tree.yaml\"\n";

        let config = Config::from_toml(toml, Path::new("/site")).unwrap();

        assert_eq!(
            config.site_resolved.tree,
            PathBuf::from("/site/exports/tree.yaml")
        );
        unsafe {
            std::env::remove_var("GWA_TEST_TREE_DIR");
        }
    }

    #[test]
    fn test_load_explicit_path() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config_path = temp_dir.path().join("gwa.toml");
        std::fs::write(&config_path, "[tracking]\ngoogle_tag_manager_id = \"GTM-1\"\n").unwrap();

        let config = Config::load(Some(&config_path), None).unwrap();

        assert_eq!(config.config_path.as_deref(), Some(config_path.as_path()));
        assert_eq!(config.site_resolved.tree, temp_dir.path().join("tree.yaml"));
    }

    #[test]
    fn test_load_missing_path() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config_path = temp_dir.path().join("missing.toml");

        let err = Config::load(Some(&config_path), None).unwrap_err();

        assert!(matches!(err, ConfigError::NotFound(_)));
    }

    #[test]
    fn test_cli_settings_override_tree() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config_path = temp_dir.path().join("gwa.toml");
        std::fs::write(&config_path, "").unwrap();
        let cli = CliSettings {
            tree: Some(PathBuf::from("/elsewhere/tree.yaml")),
        };

        let config = Config::load(Some(&config_path), Some(&cli)).unwrap();

        assert_eq!(config.site_resolved.tree, PathBuf::from("/elsewhere/tree.yaml"));
    }

    #[test]
    fn test_load_tree() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config_path = temp_dir.path().join("gwa.toml");
        std::fs::write(&config_path, "").unwrap();
        std::fs::write(
            temp_dir.path().join("tree.yaml"),
            "id: 1\ntitle: Root\nchildren:\n  - id: 2\n    title: Home\n",
        )
        .unwrap();

        let config = Config::load(Some(&config_path), None).unwrap();
        let tree = config.load_tree().unwrap();

        assert_eq!(tree.len(), 2);
    }

    #[test]
    fn test_load_tree_missing_file() {
        let config = Config::default_with_base(Path::new("/nonexistent"));

        let err = config.load_tree().unwrap_err();

        assert!(matches!(err, ConfigError::Tree(TreeError::Io { .. })));
    }
}
