//! YAML content tree loading.
//!
//! The tree file is a nested YAML document: one mapping per page with an
//! optional `children` list. A top-level list is accepted for forests.
//!
//! ```yaml
//! id: 1
//! title: Root
//! children:
//!   - id: 2
//!     title: Home
//!     children:
//!       - id: 3
//!         title: About
//!         show_in_menus: true
//! ```
//!
//! `slug` defaults to a slugified title, or `page-<id>` when the title has no
//! letters or digits; `live` and `public` default to `true`, `show_in_menus`
//! to `false`.

use std::path::Path;

use serde::Deserialize;

use crate::error::TreeError;
use crate::page::PageId;
use crate::tree::{ContentTree, ContentTreeBuilder};
use crate::visibility::Visibility;

/// Page entry of a tree file.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct TreeNode {
    /// Page identifier.
    pub id: PageId,
    /// Page title.
    pub title: String,
    /// URL segment (defaults to the slugified title).
    #[serde(default)]
    pub slug: Option<String>,
    /// Page is published.
    #[serde(default = "default_true")]
    pub live: bool,
    /// Page has no view restrictions.
    #[serde(default = "default_true")]
    pub public: bool,
    /// Page appears in menus.
    #[serde(default)]
    pub show_in_menus: bool,
    /// Child pages in menu order.
    #[serde(default)]
    pub children: Vec<TreeNode>,
}

fn default_true() -> bool {
    true
}

impl TreeNode {
    fn visibility(&self) -> Visibility {
        Visibility {
            live: self.live,
            public: self.public,
            show_in_menus: self.show_in_menus,
        }
    }

    /// URL segment, never empty: falls back to `page-<id>` when neither the
    /// slug nor the title yields one.
    fn slug(&self) -> String {
        let slug = match self.slug.as_deref().map(str::trim) {
            Some(slug) if !slug.is_empty() => slug.to_owned(),
            _ => slugify(&self.title),
        };
        if slug.is_empty() {
            format!("page-{}", self.id.0)
        } else {
            slug
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum TreeDocument {
    Single(TreeNode),
    Forest(Vec<TreeNode>),
}

/// Lowercase the title and join alphanumeric runs with hyphens.
fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    for c in title.chars() {
        if c.is_alphanumeric() {
            slug.extend(c.to_lowercase());
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    while slug.ends_with('-') {
        slug.pop();
    }
    slug
}

impl ContentTreeBuilder {
    /// Add a node and its whole subtree.
    ///
    /// # Errors
    ///
    /// Returns `TreeError::DuplicateId` if any id in the subtree is already present.
    pub fn add_node(&mut self, node: &TreeNode, parent_idx: Option<usize>) -> Result<usize, TreeError> {
        let idx = self.add_page(
            node.id,
            node.title.clone(),
            node.slug(),
            node.visibility(),
            parent_idx,
        )?;
        for child in &node.children {
            self.add_node(child, Some(idx))?;
        }
        Ok(idx)
    }
}

impl ContentTree {
    /// Parse a content tree from YAML.
    ///
    /// # Errors
    ///
    /// Returns `TreeError::Parse` for malformed YAML and
    /// `TreeError::DuplicateId` when two pages share an id.
    pub fn from_yaml(content: &str) -> Result<Self, TreeError> {
        let document: TreeDocument = serde_yaml::from_str(content)?;
        let roots = match document {
            TreeDocument::Single(node) => vec![node],
            TreeDocument::Forest(nodes) => nodes,
        };

        let mut builder = ContentTreeBuilder::new();
        for root in &roots {
            builder.add_node(root, None)?;
        }
        Ok(builder.build())
    }

    /// Load a content tree from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns `TreeError::Io` if the file cannot be read, otherwise the
    /// errors of [`ContentTree::from_yaml`].
    pub fn load(path: &Path) -> Result<Self, TreeError> {
        let content = std::fs::read_to_string(path).map_err(|source| TreeError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let tree = Self::from_yaml(&content)?;
        tracing::info!(path = %path.display(), pages = tree.len(), "Loaded content tree");
        Ok(tree)
    }
}
