//! In-memory content tree.
//!
//! # Architecture
//!
//! Pages are stored in a flat `Vec<PageNode>` with parent/children relationships
//! tracked by indices. This provides:
//! - O(1) page id and URL lookups via `HashMap` indexes
//! - O(d) ancestor walks where d is the page depth
//!
//! Depths and URLs are computed once at build time, so [`TreePage`] handles
//! are plain `(tree, index)` pairs and every accessor is a slice lookup.

use std::collections::HashMap;
use std::fmt;

use serde::ser::{Serialize, SerializeStruct, Serializer};

use crate::error::TreeError;
use crate::page::{PageId, PageRef};
use crate::visibility::{Visibility, VisibilityFilter};

/// Stored page data.
#[derive(Clone, Debug, PartialEq, Eq)]
struct PageNode {
    id: PageId,
    title: String,
    slug: String,
    visibility: Visibility,
}

/// Immutable page tree with efficient lookups.
///
/// Built with [`ContentTreeBuilder`] or loaded from YAML with
/// [`ContentTree::from_yaml`] / [`ContentTree::load`].
pub struct ContentTree {
    pages: Vec<PageNode>,
    children: Vec<Vec<usize>>,
    parents: Vec<Option<usize>>,
    roots: Vec<usize>,
    depths: Vec<usize>,
    urls: Vec<String>,
    id_index: HashMap<PageId, usize>,
    url_index: HashMap<String, usize>,
    filter: VisibilityFilter,
}

impl fmt::Debug for ContentTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContentTree")
            .field("pages", &self.pages.len())
            .field("roots", &self.roots)
            .field("filter", &self.filter)
            .finish_non_exhaustive()
    }
}

/// Compute the public URL of every page.
///
/// The root has no URL, the home page (depth 2) is served at `/`, and deeper
/// pages append their slug to the parent URL.
fn compute_urls(pages: &[PageNode], parents: &[Option<usize>], depths: &[usize]) -> Vec<String> {
    let mut urls: Vec<String> = Vec::with_capacity(pages.len());

    // Parents are always added before their children, so a single forward pass works
    for (idx, page) in pages.iter().enumerate() {
        let url = match (depths[idx], parents[idx]) {
            (1, _) | (_, None) => String::new(),
            (2, _) => "/".to_owned(),
            (_, Some(parent)) => format!("{}{}/", urls[parent], page.slug),
        };
        urls.push(url);
    }

    urls
}

impl ContentTree {
    fn new(
        pages: Vec<PageNode>,
        children: Vec<Vec<usize>>,
        parents: Vec<Option<usize>>,
        roots: Vec<usize>,
        filter: VisibilityFilter,
    ) -> Self {
        let mut depths = Vec::with_capacity(pages.len());
        for parent in &parents {
            let depth = parent.map_or(1, |p: usize| depths[p] + 1);
            depths.push(depth);
        }

        let urls = compute_urls(&pages, &parents, &depths);

        let id_index = pages
            .iter()
            .enumerate()
            .map(|(i, page)| (page.id, i))
            .collect();

        let mut url_index = HashMap::new();
        for (i, url) in urls.iter().enumerate() {
            if url.is_empty() {
                continue;
            }
            if url_index.insert(url.clone(), i).is_some() {
                tracing::warn!(url = %url, id = %pages[i].id, "Duplicate page URL, later page wins");
            }
        }

        Self {
            pages,
            children,
            parents,
            roots,
            depths,
            urls,
            id_index,
            url_index,
            filter,
        }
    }

    /// Number of pages in the tree.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    /// True if the tree holds no pages.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Visibility filter applied to children and siblings.
    #[must_use]
    pub fn filter(&self) -> VisibilityFilter {
        self.filter
    }

    /// Get page by identifier.
    #[must_use]
    pub fn get(&self, id: PageId) -> Option<TreePage<'_>> {
        self.id_index.get(&id).map(|&idx| self.page(idx))
    }

    /// Get page by public URL.
    ///
    /// Leading and trailing slashes are optional (`about/team`, `/about/team/`
    /// and `/about/team` all match the same page).
    #[must_use]
    pub fn find_by_url(&self, url: &str) -> Option<TreePage<'_>> {
        let trimmed = url.trim_matches('/');
        let normalized = if trimmed.is_empty() {
            "/".to_owned()
        } else {
            format!("/{trimmed}/")
        };
        self.url_index.get(&normalized).map(|&idx| self.page(idx))
    }

    /// Tree roots (depth 1), unfiltered.
    #[must_use]
    pub fn roots(&self) -> Vec<TreePage<'_>> {
        self.roots.iter().map(|&idx| self.page(idx)).collect()
    }

    /// Visibility flags of a page.
    #[must_use]
    pub fn visibility(&self, id: PageId) -> Option<Visibility> {
        self.id_index.get(&id).map(|&idx| self.pages[idx].visibility)
    }

    fn page(&self, idx: usize) -> TreePage<'_> {
        TreePage { tree: self, idx }
    }

    fn visible(&self, indices: &[usize]) -> Vec<TreePage<'_>> {
        indices
            .iter()
            .filter(|&&i| self.filter.admits(&self.pages[i].visibility))
            .map(|&i| self.page(i))
            .collect()
    }
}

/// Borrowed handle to a page of a [`ContentTree`].
#[derive(Clone, Copy)]
pub struct TreePage<'a> {
    tree: &'a ContentTree,
    idx: usize,
}

impl<'a> TreePage<'a> {
    /// Visibility flags of this page.
    #[must_use]
    pub fn visibility(&self) -> Visibility {
        self.node().visibility
    }

    /// URL slug of this page.
    #[must_use]
    pub fn slug(&self) -> &'a str {
        &self.tree.pages[self.idx].slug
    }

    fn node(&self) -> &'a PageNode {
        &self.tree.pages[self.idx]
    }
}

impl PartialEq for TreePage<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.tree, other.tree) && self.idx == other.idx
    }
}

impl Eq for TreePage<'_> {}

impl fmt::Debug for TreePage<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TreePage")
            .field("id", &self.node().id)
            .field("title", &self.node().title)
            .field("url", &self.tree.urls[self.idx])
            .finish()
    }
}

impl Serialize for TreePage<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("TreePage", 4)?;
        state.serialize_field("id", &self.id())?;
        state.serialize_field("title", self.title())?;
        state.serialize_field("url", self.url())?;
        state.serialize_field("depth", &self.depth())?;
        state.end()
    }
}

impl PageRef for TreePage<'_> {
    fn id(&self) -> PageId {
        self.node().id
    }

    fn url(&self) -> &str {
        &self.tree.urls[self.idx]
    }

    fn title(&self) -> &str {
        &self.node().title
    }

    fn depth(&self) -> usize {
        self.tree.depths[self.idx]
    }

    fn ancestors(&self) -> Vec<Self> {
        let mut ancestors = Vec::with_capacity(self.depth().saturating_sub(1));
        let mut current = self.tree.parents[self.idx];
        while let Some(i) = current {
            ancestors.push(self.tree.page(i));
            current = self.tree.parents[i];
        }
        ancestors.reverse();
        ancestors
    }

    fn parent(&self) -> Option<Self> {
        self.tree.parents[self.idx].map(|i| self.tree.page(i))
    }

    fn children(&self) -> Vec<Self> {
        self.tree.visible(&self.tree.children[self.idx])
    }

    fn siblings(&self) -> Vec<Self> {
        match self.tree.parents[self.idx] {
            Some(parent) => self.tree.visible(&self.tree.children[parent]),
            None => self.tree.visible(&self.tree.roots),
        }
    }
}

/// Builder for constructing [`ContentTree`] instances.
pub struct ContentTreeBuilder {
    pages: Vec<PageNode>,
    children: Vec<Vec<usize>>,
    parents: Vec<Option<usize>>,
    roots: Vec<usize>,
    ids: HashMap<PageId, usize>,
    filter: VisibilityFilter,
}

impl Default for ContentTreeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ContentTreeBuilder {
    /// Create a new tree builder with the menu visibility filter.
    #[must_use]
    pub fn new() -> Self {
        Self {
            pages: Vec::new(),
            children: Vec::new(),
            parents: Vec::new(),
            roots: Vec::new(),
            ids: HashMap::new(),
            filter: VisibilityFilter::menu(),
        }
    }

    /// Replace the visibility filter used for children and siblings.
    #[must_use]
    pub fn with_filter(mut self, filter: VisibilityFilter) -> Self {
        self.filter = filter;
        self
    }

    /// Add a page to the tree.
    ///
    /// # Arguments
    ///
    /// * `id` - Page identifier, unique within the tree
    /// * `title` - Page title
    /// * `slug` - URL segment
    /// * `visibility` - Visibility flags
    /// * `parent_idx` - Index of parent page, `None` for a root
    ///
    /// # Returns
    ///
    /// Index of the added page.
    pub fn add_page(
        &mut self,
        id: impl Into<PageId>,
        title: impl Into<String>,
        slug: impl Into<String>,
        visibility: Visibility,
        parent_idx: Option<usize>,
    ) -> Result<usize, TreeError> {
        let id = id.into();
        if self.ids.contains_key(&id) {
            return Err(TreeError::DuplicateId(id));
        }
        if let Some(parent) = parent_idx
            && parent >= self.pages.len()
        {
            return Err(TreeError::UnknownParent(parent));
        }

        let idx = self.pages.len();
        self.ids.insert(id, idx);
        self.pages.push(PageNode {
            id,
            title: title.into(),
            slug: slug.into(),
            visibility,
        });
        self.children.push(Vec::new());
        self.parents.push(parent_idx);

        if let Some(parent) = parent_idx {
            self.children[parent].push(idx);
        } else {
            self.roots.push(idx);
        }

        Ok(idx)
    }

    /// Build the [`ContentTree`] instance.
    #[must_use]
    pub fn build(self) -> ContentTree {
        ContentTree::new(
            self.pages,
            self.children,
            self.parents,
            self.roots,
            self.filter,
        )
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    static_assertions::assert_impl_all!(super::ContentTree: Send, Sync);

    /// Root(1) > Home(2) > About(3, section) > Team(4) > Leaders(5)
    ///                   > News(6, section, hidden from menus)
    fn sample_tree() -> ContentTree {
        let mut builder = ContentTreeBuilder::new();
        let root = builder
            .add_page(1, "Root", "root", Visibility::default(), None)
            .unwrap();
        let home = builder
            .add_page(2, "Home", "home", Visibility::menu(), Some(root))
            .unwrap();
        let about = builder
            .add_page(3, "About", "about", Visibility::menu(), Some(home))
            .unwrap();
        let team = builder
            .add_page(4, "Team", "team", Visibility::menu(), Some(about))
            .unwrap();
        builder
            .add_page(5, "Leaders", "leaders", Visibility::menu(), Some(team))
            .unwrap();
        builder
            .add_page(6, "News", "news", Visibility::default(), Some(home))
            .unwrap();
        builder.build()
    }

    fn ids(pages: &[TreePage<'_>]) -> Vec<u64> {
        pages.iter().map(|p| p.id().0).collect()
    }

    #[test]
    fn test_get_returns_page() {
        let tree = sample_tree();

        let page = tree.get(PageId(4)).unwrap();

        assert_eq!(page.title(), "Team");
        assert_eq!(page.url(), "/about/team/");
        assert_eq!(page.depth(), 4);
    }

    #[test]
    fn test_get_unknown_returns_none() {
        let tree = sample_tree();

        assert!(tree.get(PageId(99)).is_none());
    }

    #[test]
    fn test_urls_follow_depth_convention() {
        let tree = sample_tree();

        assert_eq!(tree.get(PageId(1)).unwrap().url(), "");
        assert_eq!(tree.get(PageId(2)).unwrap().url(), "/");
        assert_eq!(tree.get(PageId(3)).unwrap().url(), "/about/");
        assert_eq!(tree.get(PageId(5)).unwrap().url(), "/about/team/leaders/");
    }

    #[test]
    fn test_find_by_url_normalizes_slashes() {
        let tree = sample_tree();

        assert_eq!(tree.find_by_url("/about/team/").unwrap().id(), PageId(4));
        assert_eq!(tree.find_by_url("about/team").unwrap().id(), PageId(4));
        assert_eq!(tree.find_by_url("/about/team").unwrap().id(), PageId(4));
        assert_eq!(tree.find_by_url("/").unwrap().id(), PageId(2));
        assert_eq!(tree.find_by_url("").unwrap().id(), PageId(2));
    }

    #[test]
    fn test_find_by_url_miss() {
        let tree = sample_tree();

        assert!(tree.find_by_url("/missing/").is_none());
    }

    #[test]
    fn test_ancestors_are_root_first() {
        let tree = sample_tree();

        let leaders = tree.get(PageId(5)).unwrap();

        assert_eq!(ids(&leaders.ancestors()), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_root_has_no_ancestors_or_parent() {
        let tree = sample_tree();

        let root = tree.get(PageId(1)).unwrap();

        assert!(root.ancestors().is_empty());
        assert!(root.parent().is_none());
    }

    #[test]
    fn test_children_are_filtered() {
        let tree = sample_tree();

        let home = tree.get(PageId(2)).unwrap();

        assert_eq!(ids(&home.children()), vec![3]);
    }

    #[test]
    fn test_children_unfiltered_with_all_filter() {
        let mut builder = ContentTreeBuilder::new().with_filter(VisibilityFilter::all());
        let home = builder
            .add_page(2, "Home", "home", Visibility::default(), None)
            .unwrap();
        builder
            .add_page(3, "Hidden", "hidden", Visibility::draft(), Some(home))
            .unwrap();
        let tree = builder.build();

        let home = tree.get(PageId(2)).unwrap();

        assert_eq!(ids(&home.children()), vec![3]);
    }

    #[test]
    fn test_siblings_include_self() {
        let tree = sample_tree();

        let about = tree.get(PageId(3)).unwrap();

        assert_eq!(ids(&about.siblings()), vec![3]);
    }

    #[test]
    fn test_siblings_of_root_are_visible_roots() {
        let mut builder = ContentTreeBuilder::new();
        builder
            .add_page(1, "A", "a", Visibility::menu(), None)
            .unwrap();
        builder
            .add_page(2, "B", "b", Visibility::default(), None)
            .unwrap();
        let tree = builder.build();

        let a = tree.get(PageId(1)).unwrap();

        assert_eq!(ids(&a.siblings()), vec![1]);
    }

    #[test]
    fn test_add_page_rejects_duplicate_id() {
        let mut builder = ContentTreeBuilder::new();
        builder
            .add_page(1, "A", "a", Visibility::menu(), None)
            .unwrap();

        let result = builder.add_page(1, "B", "b", Visibility::menu(), None);

        assert!(matches!(result, Err(TreeError::DuplicateId(PageId(1)))));
    }

    #[test]
    fn test_add_page_rejects_unknown_parent() {
        let mut builder = ContentTreeBuilder::new();

        let result = builder.add_page(1, "A", "a", Visibility::menu(), Some(3));

        assert!(matches!(result, Err(TreeError::UnknownParent(3))));
    }

    #[test]
    fn test_add_page_returns_index() {
        let mut builder = ContentTreeBuilder::new();

        let first = builder
            .add_page(10, "A", "a", Visibility::menu(), None)
            .unwrap();
        let second = builder
            .add_page(20, "B", "b", Visibility::menu(), Some(first))
            .unwrap();

        assert_eq!(first, 0);
        assert_eq!(second, 1);
    }

    #[test]
    fn test_tree_page_serializes_summary() {
        let tree = sample_tree();

        let json = serde_json::to_value(tree.get(PageId(3)).unwrap()).unwrap();

        assert_eq!(
            json,
            serde_json::json!({"id": 3, "title": "About", "url": "/about/", "depth": 3})
        );
    }

    #[test]
    fn test_empty_tree() {
        let tree = ContentTreeBuilder::new().build();

        assert!(tree.is_empty());
        assert_eq!(tree.len(), 0);
        assert!(tree.roots().is_empty());
    }
}
