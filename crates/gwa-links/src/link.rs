//! Navigation link entries: validation and resolution.

use gwa_tree::PageRef;
use serde::{Deserialize, Serialize};

use crate::error::{LinkErrorKind, LinkField, ValidationError};

/// URL schemes accepted for external links, matched without regard to case.
const LINK_SCHEMES: &[&str] = &["http://", "https://", "ftp://", "ftps://", "mailto:", "tel:"];

/// Link entry as stored in settings, before validation.
///
/// `T` is whatever identifies the internal target: a
/// [`PageId`](gwa_tree::PageId) when loaded from configuration, a page handle
/// once bound to a content tree. Blank strings count as absent.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawLink<T> {
    /// Internal page target.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<T>,
    /// External URL target.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_link: Option<String>,
    /// Link text override.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl<T> Default for RawLink<T> {
    fn default() -> Self {
        Self {
            page: None,
            external_link: None,
            title: None,
        }
    }
}

impl<T> RawLink<T> {
    /// Link to an internal page with an optional text override.
    #[must_use]
    pub fn page(page: T, title: Option<&str>) -> Self {
        Self {
            page: Some(page),
            external_link: None,
            title: title.map(str::to_owned),
        }
    }

    /// Link to an external URL.
    #[must_use]
    pub fn external(url: &str, title: &str) -> Self {
        Self {
            page: None,
            external_link: Some(url.to_owned()),
            title: Some(title.to_owned()),
        }
    }

    /// Borrow the page target.
    #[must_use]
    pub fn as_ref(&self) -> RawLink<&T> {
        RawLink {
            page: self.page.as_ref(),
            external_link: self.external_link.clone(),
            title: self.title.clone(),
        }
    }

    /// Replace the page target, e.g. to bind a stored id to a tree page.
    ///
    /// A target that `f` cannot map becomes `None`.
    #[must_use]
    pub fn map_page<U>(self, f: impl FnOnce(T) -> Option<U>) -> RawLink<U> {
        RawLink {
            page: self.page.and_then(f),
            external_link: self.external_link,
            title: self.title,
        }
    }
}

/// Validated link entry.
///
/// Exactly one target is set by construction. Obtain one through
/// [`validate`] or [`validate_internal`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LinkEntry<P> {
    /// Link to a page of the content tree.
    Internal {
        /// Target page.
        target: P,
        /// Text override, the page title is used when absent.
        title: Option<String>,
    },
    /// Link to an external URL.
    External {
        /// Target URL.
        url: String,
        /// Link text.
        title: String,
    },
}

impl<P: PageRef> LinkEntry<P> {
    /// Resolve to a renderable link.
    #[must_use]
    pub fn resolve(&self) -> ResolvedLink {
        match self {
            Self::Internal { target, title } => ResolvedLink {
                url: target.url().to_owned(),
                text: title
                    .as_deref()
                    .and_then(non_blank)
                    .unwrap_or_else(|| target.title())
                    .to_owned(),
                is_internal: true,
            },
            Self::External { url, title } => ResolvedLink {
                url: url.clone(),
                text: title.clone(),
                is_internal: false,
            },
        }
    }
}

/// Renderable link descriptor.
///
/// The default value is the empty "no link" descriptor.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ResolvedLink {
    /// Link target.
    pub url: String,
    /// Display text.
    pub text: String,
    /// True when the link points into the content tree.
    pub is_internal: bool,
}

impl ResolvedLink {
    /// True for the "no link" descriptor.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.url.is_empty()
    }
}

fn non_blank(value: &str) -> Option<&str> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

fn take_non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// True if `url` starts with a scheme accepted for external links.
#[must_use]
pub fn has_link_scheme(url: &str) -> bool {
    LINK_SCHEMES.iter().any(|scheme| {
        url.len() > scheme.len()
            && url
                .get(..scheme.len())
                .is_some_and(|prefix| prefix.eq_ignore_ascii_case(scheme))
    })
}

/// Validate a raw link entry that may target a page or an external URL.
///
/// Target errors are reported first: when both or neither target is set,
/// the title is not checked.
///
/// # Errors
///
/// - `BothTargetsSpecified` on `page` and `external_link` when both are set
/// - `NoTargetSpecified` on `page` and `external_link` when neither is set
/// - `InvalidUrl` on `external_link` for URLs without a supported scheme
/// - `MissingExternalLinkTitle` on `title` for external links without text
pub fn validate<P>(raw: RawLink<P>) -> Result<LinkEntry<P>, ValidationError> {
    let RawLink {
        page,
        external_link,
        title,
    } = raw;
    let external_link = take_non_blank(external_link);
    let title = take_non_blank(title);

    match (page, external_link) {
        (Some(_), Some(_)) => Err(ValidationError::targets(
            LinkErrorKind::BothTargetsSpecified,
        )),
        (None, None) => Err(ValidationError::targets(LinkErrorKind::NoTargetSpecified)),
        (Some(target), None) => Ok(LinkEntry::Internal { target, title }),
        (None, Some(url)) => {
            let mut error = ValidationError::default();
            if !has_link_scheme(&url) {
                error.insert(LinkField::ExternalLink, LinkErrorKind::InvalidUrl);
            }
            if title.is_none() {
                error.insert(LinkField::Title, LinkErrorKind::MissingExternalLinkTitle);
            }
            match title {
                Some(title) if error.is_empty() => Ok(LinkEntry::External { url, title }),
                _ => Err(error),
            }
        }
    }
}

/// Validate a raw link entry that may only target a page.
///
/// # Errors
///
/// - `ExternalNotAllowed` on `external_link` when a URL is set
/// - `NoTargetSpecified` on `page` when no page is set
pub fn validate_internal<P>(raw: RawLink<P>) -> Result<LinkEntry<P>, ValidationError> {
    let mut error = ValidationError::default();
    if take_non_blank(raw.external_link).is_some() {
        error.insert(LinkField::ExternalLink, LinkErrorKind::ExternalNotAllowed);
    }
    match raw.page {
        Some(target) if error.is_empty() => Ok(LinkEntry::Internal {
            target,
            title: take_non_blank(raw.title),
        }),
        Some(_) => Err(error),
        None => {
            error.insert(LinkField::Page, LinkErrorKind::NoTargetSpecified);
            Err(error)
        }
    }
}

/// Resolve a validated link entry.
///
/// Pure and total: the same entry always yields the same link.
#[must_use]
pub fn resolve<P: PageRef>(entry: &LinkEntry<P>) -> ResolvedLink {
    entry.resolve()
}
