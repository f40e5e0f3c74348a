//! Highlighted external links shown at the foot of information pages.

use serde::{Deserialize, Serialize};

use crate::error::{BlockError, require_count, require_non_empty};
use crate::link::{RawLink, ResolvedLink, validate};

/// Number of links a highlighted links section holds.
pub const HIGHLIGHTED_LINKS_COUNT: usize = 3;

/// External link with text, as stored in highlighted links.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExternalLinkValue {
    /// Target URL.
    pub url: String,
    /// Link text.
    pub link_text: String,
}

/// Heading plus exactly [`HIGHLIGHTED_LINKS_COUNT`] external links.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HighlightedLinks {
    /// Section heading.
    pub heading: String,
    /// Links in display order.
    pub links: Vec<ExternalLinkValue>,
}

impl HighlightedLinks {
    /// Edit-time validation.
    ///
    /// # Errors
    ///
    /// Returns `BlockError` for an empty heading, a link count other than
    /// three, or a link without a valid URL and text.
    pub fn validate(&self) -> Result<(), BlockError> {
        require_non_empty(&self.heading, "highlighted_links_heading")?;
        require_count(
            "highlighted_links",
            self.links.len(),
            HIGHLIGHTED_LINKS_COUNT,
            HIGHLIGHTED_LINKS_COUNT,
        )?;
        for (i, link) in self.links.iter().enumerate() {
            validate(RawLink::<()>::external(&link.url, &link.link_text)).map_err(|source| {
                BlockError::Link {
                    field: format!("highlighted_links[{i}]"),
                    source,
                }
            })?;
        }
        Ok(())
    }

    /// Resolve the links for rendering, skipping entries without a URL.
    #[must_use]
    pub fn resolve(&self) -> Vec<ResolvedLink> {
        self.links
            .iter()
            .filter(|link| !link.url.trim().is_empty())
            .map(|link| ResolvedLink {
                url: link.url.clone(),
                text: link.link_text.clone(),
                is_internal: false,
            })
            .collect()
    }
}
