//! Navigation settings errors.

use gwa_links::{BlockError, ValidationError};

/// Invalid entry in navigation or sidebar settings.
///
/// `location` is the path of the entry, e.g. `footer[1].links[0]`.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum NavigationError {
    /// Menu link failed validation.
    #[error("{location}: {source}")]
    Link {
        /// Entry path.
        location: String,
        /// Field errors.
        source: ValidationError,
    },
    /// Logo without an image.
    #[error("{location}: logo image is missing")]
    MissingLogo {
        /// Entry path.
        location: String,
    },
    /// Logo link that is not a valid URL.
    #[error("{location}: Enter a valid URL")]
    InvalidLogoUrl {
        /// Entry path.
        location: String,
        /// Rejected URL.
        url: String,
    },
    /// Sidebar call-to-action failed validation.
    #[error("{location}: {source}")]
    CallToAction {
        /// Entry path.
        location: String,
        /// Block error.
        source: BlockError,
    },
}

impl NavigationError {
    /// Path of the failing entry.
    #[must_use]
    pub fn location(&self) -> &str {
        match self {
            Self::Link { location, .. }
            | Self::MissingLogo { location }
            | Self::InvalidLogoUrl { location, .. }
            | Self::CallToAction { location, .. } => location,
        }
    }
}
