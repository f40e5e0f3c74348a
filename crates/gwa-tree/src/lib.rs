//! Content tree provider for the web archive site.
//!
//! This crate provides:
//! - [`PageRef`]: the accessor contract navigation code relies on
//! - [`ContentTree`]: an in-memory page tree with O(1) id and URL lookups
//! - [`Visibility`] and [`VisibilityFilter`]: the published / public / in-menu predicates
//!
//! # Tree Convention
//!
//! Depth is 1-based: the tree root sits at depth 1, the home page at depth 2
//! and top-level sections at depth 3.
//!
//! # Quick Start
//!
//! ```
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use gwa_tree::{ContentTree, PageRef};
//!
//! let tree = ContentTree::from_yaml(
//!     r"
//! id: 1
//! title: Root
//! children:
//!   - id: 2
//!     title: Home
//!     children:
//!       - id: 3
//!         title: About us
//!         show_in_menus: true
//! ",
//! )?;
//!
//! let about = tree.find_by_url("/about-us/").unwrap();
//! assert_eq!(about.depth(), 3);
//! # Ok(())
//! # }
//! ```

mod error;
mod loader;
mod page;
mod tree;
mod visibility;

pub use error::TreeError;
pub use loader::TreeNode;
pub use page::{PageId, PageRef};
pub use tree::{ContentTree, ContentTreeBuilder, TreePage};
pub use visibility::{Visibility, VisibilityFilter};
