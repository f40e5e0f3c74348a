//! Per-site settings other than navigation.

use std::sync::LazyLock;

use gwa_links::ImageInfo;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Tags that would break the alert banner onto several lines.
static LINE_BREAK_TAGS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)</?(?:p|br)\b[^>]*>").expect("invalid line break regex"));

/// Social media settings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SocialSettings {
    /// Twitter username without the `@`.
    pub twitter_handle: String,
    /// Facebook app id.
    pub facebook_app_id: String,
    /// Instagram username without the `@`.
    pub instagram_username: String,
    /// LinkedIn company id.
    pub linkedin_company_id: String,
    /// Sharing text for pages without their own.
    pub default_sharing_text: String,
    /// Sharing image for pages without their own.
    pub default_sharing_image: Option<ImageInfo>,
    /// Site name used by Open Graph.
    pub site_name: String,
}

impl Default for SocialSettings {
    fn default() -> Self {
        Self {
            twitter_handle: String::new(),
            facebook_app_id: String::new(),
            instagram_username: String::new(),
            linkedin_company_id: String::new(),
            default_sharing_text: String::new(),
            default_sharing_image: None,
            site_name: "UK Government Web Archive".to_owned(),
        }
    }
}

impl SocialSettings {
    /// Sharing text for a page: its own when set, else the site default.
    #[must_use]
    pub fn sharing_text<'a>(&'a self, page_text: Option<&'a str>) -> &'a str {
        page_text
            .filter(|t| !t.trim().is_empty())
            .unwrap_or(&self.default_sharing_text)
    }
}

/// 404 page text and the site-wide alert banner.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SystemMessages {
    /// 404 page title.
    pub title_404: String,
    /// 404 page body (HTML).
    pub body_404: String,
    /// Optional title shown next to the alert icon.
    pub title_alert: Option<String>,
    /// Alert text (HTML, links only).
    pub description_alert: Option<String>,
    /// Show the alert banner.
    pub active_alert: bool,
}

impl Default for SystemMessages {
    fn default() -> Self {
        Self {
            title_404: "Page not found".to_owned(),
            body_404: concat!(
                "<p>You may be trying to find a page that doesn&rsquo;t exist ",
                "or has been moved.</p>"
            )
            .to_owned(),
            title_alert: None,
            description_alert: None,
            active_alert: false,
        }
    }
}

/// Alert banner, ready to render.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Alert {
    /// Optional title.
    pub title: Option<String>,
    /// Single-line description.
    pub description: String,
}

impl SystemMessages {
    /// Strip paragraph and line break tags from the alert description.
    pub(crate) fn clean(&mut self) {
        if let Some(description) = &mut self.description_alert {
            *description = clean_alert_description(description);
        }
    }

    /// Alert banner to show, `None` when inactive or empty.
    #[must_use]
    pub fn alert(&self) -> Option<Alert> {
        if !self.active_alert {
            return None;
        }
        let description = self
            .description_alert
            .as_deref()
            .filter(|d| !d.trim().is_empty())?;
        Some(Alert {
            title: self.title_alert.clone().filter(|t| !t.trim().is_empty()),
            description: description.to_owned(),
        })
    }
}

/// Remove `<p>` and `<br>` tags, keeping their content.
#[must_use]
pub fn clean_alert_description(html: &str) -> String {
    LINE_BREAK_TAGS.replace_all(html, "").into_owned()
}

/// Analytics settings.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tracking {
    /// Google Tag Manager container id.
    pub google_tag_manager_id: String,
}
