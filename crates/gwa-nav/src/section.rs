//! Section lookup for the sidebar.
//!
//! A section is the page at [`SECTION_DEPTH`]; the sidebar of every page
//! below it lists the section's children. Pages above section depth fall
//! back to their own siblings.

use std::collections::BTreeSet;

use gwa_tree::{PageId, PageRef};
use serde::Serialize;

/// Tree depth of top-level sections (root = 1, home = 2, section = 3).
pub const SECTION_DEPTH: usize = 3;

/// Pages listed in a sidebar.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SectionContext<P> {
    /// Section the page belongs to, `None` above section depth.
    pub section: Option<P>,
    /// Visible pages to list.
    pub siblings: Vec<P>,
    /// Page heading the list: the section, else the page's parent.
    pub parent: Option<P>,
    /// Identifiers of the page's ancestors, for highlighting the active branch.
    pub ancestor_ids: BTreeSet<PageId>,
}

impl<P: PageRef> SectionContext<P> {
    /// True if `page` is one of the ancestors of the located page.
    #[must_use]
    pub fn is_ancestor(&self, page: &P) -> bool {
        self.ancestor_ids.contains(&page.id())
    }
}

/// Locate the section of `page` and the pages its sidebar lists.
///
/// Never fails: a page above section depth, including a tree root without a
/// parent, gets its own siblings and parent.
#[must_use]
pub fn locate_section<P: PageRef>(page: &P) -> SectionContext<P> {
    let depth = page.depth();
    let ancestors = page.ancestors();
    let ancestor_ids: BTreeSet<PageId> = ancestors.iter().map(PageRef::id).collect();

    let mut section = None;
    if depth >= SECTION_DEPTH {
        section = ancestors
            .into_iter()
            .find(|ancestor| ancestor.depth() == SECTION_DEPTH);
        if section.is_none() && depth == SECTION_DEPTH {
            section = Some(page.clone());
        }
    }

    let (siblings, parent) = match &section {
        Some(section) => (section.children(), Some(section.clone())),
        None => (page.siblings(), page.parent()),
    };

    tracing::debug!(
        page = %page.id(),
        depth,
        section = ?section.as_ref().map(PageRef::id),
        siblings = siblings.len(),
        "Located section"
    );

    SectionContext {
        section,
        siblings,
        parent,
        ancestor_ids,
    }
}
