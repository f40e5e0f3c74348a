//! Link and block validation errors.
//!
//! Validation errors are raised when content is edited and are meant for
//! content authors. Rendering never produces them.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

/// Field of a link entry an error is attached to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkField {
    /// Internal page chooser.
    Page,
    /// External URL.
    ExternalLink,
    /// Link text override.
    Title,
}

impl LinkField {
    /// Field name as stored in settings.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Page => "page",
            Self::ExternalLink => "external_link",
            Self::Title => "title",
        }
    }
}

impl fmt::Display for LinkField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reason a link entry was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, thiserror::Error)]
pub enum LinkErrorKind {
    /// Both an internal page and an external URL were given.
    #[error("You must specify either a page or an external link, not both")]
    BothTargetsSpecified,
    /// Neither an internal page nor an external URL was given.
    #[error("You must specify either a page or an external link")]
    NoTargetSpecified,
    /// External URL without a link title.
    #[error("You must specify the link title for external links")]
    MissingExternalLinkTitle,
    /// External URL without a supported scheme.
    #[error("Enter a valid URL")]
    InvalidUrl,
    /// External URL where only internal pages are accepted.
    #[error("Only internal pages can be linked here")]
    ExternalNotAllowed,
}

/// Validation failure for a single link entry, keyed by field.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationError {
    errors: BTreeMap<LinkField, LinkErrorKind>,
}

impl ValidationError {
    /// Error attached to both target fields.
    pub(crate) fn targets(kind: LinkErrorKind) -> Self {
        let mut error = Self::default();
        error.insert(LinkField::Page, kind);
        error.insert(LinkField::ExternalLink, kind);
        error
    }

    pub(crate) fn insert(&mut self, field: LinkField, kind: LinkErrorKind) {
        self.errors.insert(field, kind);
    }

    /// Error kind attached to a field, if any.
    #[must_use]
    pub fn kind(&self, field: LinkField) -> Option<LinkErrorKind> {
        self.errors.get(&field).copied()
    }

    /// True if any field carries the given error kind.
    #[must_use]
    pub fn contains(&self, kind: LinkErrorKind) -> bool {
        self.errors.values().any(|&k| k == kind)
    }

    /// Iterate over field errors in field order.
    pub fn iter(&self) -> impl Iterator<Item = (LinkField, LinkErrorKind)> + '_ {
        self.errors.iter().map(|(&field, &kind)| (field, kind))
    }

    /// True if no field has an error.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (field, kind)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{field}: {kind}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

/// Edit-time error for content blocks.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum BlockError {
    /// Required field left empty.
    #[error("{field} cannot be empty")]
    Required {
        /// Field path.
        field: String,
    },
    /// Text longer than the field allows.
    #[error("{field} cannot exceed {max} characters")]
    TooLong {
        /// Field path.
        field: String,
        /// Maximum number of characters.
        max: usize,
    },
    /// List with too few or too many items.
    #[error("{field} must contain between {min} and {max} items, found {found}")]
    ItemCount {
        /// Field path.
        field: String,
        /// Minimum number of items.
        min: usize,
        /// Maximum number of items.
        max: usize,
        /// Actual number of items.
        found: usize,
    },
    /// Invalid link inside a block.
    #[error("{field}: {source}")]
    Link {
        /// Field path.
        field: String,
        /// Link validation failure.
        source: ValidationError,
    },
}

/// Require a list length within `min..=max`.
pub(crate) fn require_count(
    field: &str,
    found: usize,
    min: usize,
    max: usize,
) -> Result<(), BlockError> {
    if found < min || found > max {
        return Err(BlockError::ItemCount {
            field: field.to_owned(),
            min,
            max,
            found,
        });
    }
    Ok(())
}

/// Require a string field to be non-blank.
pub(crate) fn require_non_empty(value: &str, field: &str) -> Result<(), BlockError> {
    if value.trim().is_empty() {
        return Err(BlockError::Required {
            field: field.to_owned(),
        });
    }
    Ok(())
}
