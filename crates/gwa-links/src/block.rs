//! Content blocks carrying a single optional link.
//!
//! Quote, statistic and call-to-action blocks store their link as a stream
//! with at most one item. That content may predate validation, so rendering
//! goes through [`resolve_first`], which never fails.

use gwa_tree::PageRef;
use serde::{Deserialize, Serialize};

use crate::error::{BlockError, require_count, require_non_empty};
use crate::image::{ImageInfo, resolve_alt_text};
use crate::link::{RawLink, ResolvedLink, validate};

/// Maximum length of a statistic sentence.
const STAT_SENTENCE_MAX: usize = 100;
/// Number of statistics a stat block may hold.
const STATS_MIN: usize = 1;
const STATS_MAX: usize = 3;

/// One item of a link stream.
///
/// Serialized the way stream content is stored:
/// `{"type": "internal_link", "value": {"page": 3, "link_text": "About"}}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum LinkBlock<P> {
    /// Link to a page.
    InternalLink {
        /// Target page, `None` when the page was deleted.
        page: Option<P>,
        /// Text override. Call-to-action content stores it as `title`.
        #[serde(default, alias = "title")]
        link_text: Option<String>,
    },
    /// Link to an external URL.
    ExternalLink {
        /// Target URL.
        #[serde(default)]
        url: Option<String>,
        /// Link text, also read from `title`.
        #[serde(default, alias = "title")]
        link_text: Option<String>,
    },
}

impl<P> LinkBlock<P> {
    /// Replace the page target, e.g. to bind a stored id to a tree page.
    #[must_use]
    pub fn map_page<U>(self, f: impl FnOnce(P) -> Option<U>) -> LinkBlock<U> {
        match self {
            Self::InternalLink { page, link_text } => LinkBlock::InternalLink {
                page: page.and_then(f),
                link_text,
            },
            Self::ExternalLink { url, link_text } => LinkBlock::ExternalLink { url, link_text },
        }
    }

    fn to_raw(&self) -> RawLink<&P> {
        match self {
            Self::InternalLink { page, link_text } => RawLink {
                page: page.as_ref(),
                external_link: None,
                title: link_text.clone(),
            },
            Self::ExternalLink { url, link_text } => RawLink {
                page: None,
                external_link: url.clone(),
                title: link_text.clone(),
            },
        }
    }
}

impl<P: PageRef> LinkBlock<P> {
    /// Resolve this item, `None` if it has no usable target.
    #[must_use]
    pub fn resolve(&self) -> Option<ResolvedLink> {
        match self {
            Self::InternalLink { page, link_text } => {
                let page = page.as_ref()?;
                let text = link_text
                    .as_deref()
                    .filter(|t| !t.trim().is_empty())
                    .unwrap_or_else(|| page.title());
                Some(ResolvedLink {
                    url: page.url().to_owned(),
                    text: text.to_owned(),
                    is_internal: true,
                })
            }
            Self::ExternalLink { url, link_text } => {
                let url = url.as_deref().filter(|u| !u.trim().is_empty())?;
                Some(ResolvedLink {
                    url: url.to_owned(),
                    text: link_text.clone().unwrap_or_default(),
                    is_internal: false,
                })
            }
        }
    }
}

/// Resolve the first usable link of a stream.
///
/// Items without a target (deleted page, blank URL) are skipped. Returns the
/// empty [`ResolvedLink`] when nothing is usable.
#[must_use]
pub fn resolve_first<P: PageRef>(blocks: &[LinkBlock<P>]) -> ResolvedLink {
    let link = blocks.iter().find_map(LinkBlock::resolve);
    if link.is_none() && !blocks.is_empty() {
        tracing::debug!(items = blocks.len(), "Link stream has no usable target");
    }
    link.unwrap_or_default()
}

/// Edit-time check for a link stream holding at most one item.
fn validate_link_stream<P>(
    field: &str,
    blocks: &[LinkBlock<P>],
    min: usize,
) -> Result<(), BlockError> {
    require_count(field, blocks.len(), min, 1)?;
    for (i, block) in blocks.iter().enumerate() {
        validate(block.to_raw()).map_err(|source| BlockError::Link {
            field: format!("{field}[{i}]"),
            source,
        })?;
    }
    Ok(())
}

/// Quotation with optional attribution and link.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct QuoteBlock<P> {
    /// Quoted text.
    pub quote: String,
    /// Who said it.
    #[serde(default)]
    pub attribution: Option<String>,
    /// Optional link stream.
    #[serde(default = "Vec::new")]
    pub link: Vec<LinkBlock<P>>,
}

/// Render context of a [`QuoteBlock`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct QuoteContext {
    /// Quoted text.
    pub quote: String,
    /// Who said it.
    pub attribution: Option<String>,
    /// Attribution link, empty when absent.
    pub link: ResolvedLink,
}

impl<P: PageRef> QuoteBlock<P> {
    /// Build the render context.
    #[must_use]
    pub fn context(&self) -> QuoteContext {
        QuoteContext {
            quote: self.quote.clone(),
            attribution: self.attribution.clone(),
            link: resolve_first(&self.link),
        }
    }
}

impl<P> QuoteBlock<P> {
    /// Edit-time validation.
    ///
    /// # Errors
    ///
    /// Returns `BlockError` for an empty quote or an invalid link.
    pub fn validate(&self) -> Result<(), BlockError> {
        require_non_empty(&self.quote, "quote")?;
        validate_link_stream("link", &self.link, 0)
    }
}

/// A single statistic.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct StatSection<P> {
    /// Headline figure, shown large.
    #[serde(default)]
    pub number: Option<String>,
    /// Short description of the figure.
    #[serde(default)]
    pub sentence: Option<String>,
    /// Supporting text.
    #[serde(default)]
    pub text: Option<String>,
    /// Optional link stream.
    #[serde(default = "Vec::new")]
    pub link: Vec<LinkBlock<P>>,
}

/// Group of one to three statistics.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct StatBlock<P> {
    /// Statistics in display order.
    pub stats: Vec<StatSection<P>>,
}

/// Render context of a single statistic.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct StatContext {
    /// Headline figure.
    pub number: Option<String>,
    /// Short description.
    pub sentence: Option<String>,
    /// Supporting text.
    pub text: Option<String>,
    /// Link, empty when absent.
    pub link: ResolvedLink,
}

impl<P: PageRef> StatBlock<P> {
    /// Build one render context per statistic.
    #[must_use]
    pub fn context(&self) -> Vec<StatContext> {
        self.stats
            .iter()
            .map(|stat| StatContext {
                number: stat.number.clone(),
                sentence: stat.sentence.clone(),
                text: stat.text.clone(),
                link: resolve_first(&stat.link),
            })
            .collect()
    }
}

impl<P> StatBlock<P> {
    /// Edit-time validation.
    ///
    /// # Errors
    ///
    /// Returns `BlockError` for a wrong number of statistics, an overlong
    /// sentence or an invalid link.
    pub fn validate(&self) -> Result<(), BlockError> {
        require_count("stats", self.stats.len(), STATS_MIN, STATS_MAX)?;
        for (i, stat) in self.stats.iter().enumerate() {
            if let Some(sentence) = &stat.sentence
                && sentence.chars().count() > STAT_SENTENCE_MAX
            {
                return Err(BlockError::TooLong {
                    field: format!("stats[{i}].sentence"),
                    max: STAT_SENTENCE_MAX,
                });
            }
            validate_link_stream(&format!("stats[{i}].link"), &stat.link, 0)?;
        }
        Ok(())
    }
}

/// Reusable call-to-action snippet.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct CallToAction<P> {
    /// Heading.
    pub title: String,
    /// Short summary.
    #[serde(default)]
    pub summary: Option<String>,
    /// Illustration.
    #[serde(default)]
    pub image: Option<ImageInfo>,
    /// Alt text override for the illustration.
    #[serde(default)]
    pub image_alt_text: Option<String>,
    /// Illustration is decorative and gets empty alt text.
    #[serde(default)]
    pub image_is_decorative: bool,
    /// Required link stream with exactly one item.
    pub link: Vec<LinkBlock<P>>,
}

/// Render context of a [`CallToAction`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CallToActionContext {
    /// Heading.
    pub title: String,
    /// Short summary.
    pub summary: Option<String>,
    /// Illustration.
    pub image: Option<ImageInfo>,
    /// Resolved alt text for the illustration.
    pub image_alt_text: String,
    /// Resolved link, empty when the stored link is unusable.
    pub link: ResolvedLink,
}

impl<P: PageRef> CallToAction<P> {
    /// Resolve the call-to-action link.
    #[must_use]
    pub fn link(&self) -> ResolvedLink {
        resolve_first(&self.link)
    }

    /// Build the render context.
    #[must_use]
    pub fn context(&self) -> CallToActionContext {
        CallToActionContext {
            title: self.title.clone(),
            summary: self.summary.clone(),
            image: self.image.clone(),
            image_alt_text: self.image_alt_text(),
            link: self.link(),
        }
    }
}

impl<P> CallToAction<P> {
    /// Alt text for the illustration.
    ///
    /// Empty when decorative or when there is no image and no override.
    #[must_use]
    pub fn image_alt_text(&self) -> String {
        resolve_alt_text(
            self.image.as_ref(),
            self.image_alt_text.as_deref(),
            self.image_is_decorative,
        )
    }

    /// Edit-time validation.
    ///
    /// # Errors
    ///
    /// Returns `BlockError` for an empty title, a missing link or an invalid link.
    pub fn validate(&self) -> Result<(), BlockError> {
        require_non_empty(&self.title, "title")?;
        validate_link_stream("link", &self.link, 1)
    }

    /// Replace page targets, e.g. to bind stored ids to tree pages.
    #[must_use]
    pub fn map_pages<U>(self, mut f: impl FnMut(P) -> Option<U>) -> CallToAction<U> {
        CallToAction {
            title: self.title,
            summary: self.summary,
            image: self.image,
            image_alt_text: self.image_alt_text,
            image_is_decorative: self.image_is_decorative,
            link: self
                .link
                .into_iter()
                .map(|block| block.map_page(&mut f))
                .collect(),
        }
    }
}
