//! Link validation and resolution for navigation and content blocks.
//!
//! Two resolution policies live here:
//!
//! - **Strict** ([`validate`] + [`resolve`]): navigation entries are checked
//!   when they are edited. A [`LinkEntry`] can only be obtained through
//!   validation, so resolving one never fails.
//! - **Lenient** ([`resolve_first`]): quote, statistic and call-to-action
//!   blocks may hold legacy content that was never validated. Resolution
//!   picks the first usable link and otherwise yields an empty
//!   [`ResolvedLink`].
//!
//! # Example
//!
//! ```
//! use gwa_links::{RawLink, validate};
//! use gwa_tree::TreePage;
//!
//! let raw = RawLink::<TreePage<'_>>::external("https://www.gov.uk", "GOV.UK");
//! let link = validate(raw).unwrap().resolve();
//!
//! assert_eq!(link.url, "https://www.gov.uk");
//! assert_eq!(link.text, "GOV.UK");
//! assert!(!link.is_internal);
//! ```

mod block;
mod error;
mod highlighted;
mod image;
mod link;

pub use block::{
    CallToAction, CallToActionContext, LinkBlock, QuoteBlock, QuoteContext, StatBlock,
    StatContext, StatSection, resolve_first,
};
pub use error::{BlockError, LinkErrorKind, LinkField, ValidationError};
pub use highlighted::{ExternalLinkValue, HIGHLIGHTED_LINKS_COUNT, HighlightedLinks};
pub use image::{ImageBlock, ImageContext, ImageInfo, resolve_alt_text};
pub use link::{
    LinkEntry, RawLink, ResolvedLink, has_link_scheme, resolve, validate, validate_internal,
};
