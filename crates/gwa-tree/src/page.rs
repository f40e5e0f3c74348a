//! Page identifiers and the page accessor contract.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Stable identifier of a page in the content tree.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PageId(pub u64);

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for PageId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// Handle to a node of the content tree.
///
/// Implementations are cheap to clone and expose read-only accessors.
/// Navigation code never mutates the tree, it only walks it.
///
/// Accessors backed by a remote store may block; callers resolve a whole
/// render pass against one handle set and do not re-query per item.
pub trait PageRef: Clone {
    /// Page identifier.
    fn id(&self) -> PageId;

    /// Public URL of the page (e.g. `/about/team/`).
    fn url(&self) -> &str;

    /// Page title.
    fn title(&self) -> &str;

    /// Tree depth, 1 for the root.
    fn depth(&self) -> usize;

    /// Ancestors ordered root-first, excluding the page itself.
    fn ancestors(&self) -> Vec<Self>;

    /// Parent page, `None` for a tree root.
    fn parent(&self) -> Option<Self>;

    /// Children that pass the provider's visibility filter, in tree order.
    fn children(&self) -> Vec<Self>;

    /// Pages sharing this page's parent (the page itself included) that pass
    /// the provider's visibility filter, in tree order.
    fn siblings(&self) -> Vec<Self>;
}
