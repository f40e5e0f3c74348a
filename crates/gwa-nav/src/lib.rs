//! Section sidebar and site menus.
//!
//! This crate provides:
//! - [`locate_section`]: finds the section a page belongs to and the pages
//!   listed in its sidebar
//! - [`Sidebar`]: section context plus the call-to-action shown beside it
//! - [`NavigationSettings`]: primary, secondary and footer menu entries
//! - [`Menus`] and [`primary_nav`]: render-time menu resolution
//!
//! Settings are loaded with [`PageId`](gwa_tree::PageId) targets and bound
//! to a content tree before rendering:
//!
//! ```
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use gwa_links::RawLink;
//! use gwa_nav::{Menus, NavigationSettings};
//! use gwa_tree::{ContentTree, PageId};
//!
//! let tree = ContentTree::from_yaml(
//!     "id: 1\ntitle: Root\nchildren:\n  - id: 2\n    title: Home\n    children:\n      - id: 3\n        title: About us\n",
//! )?;
//! let settings = NavigationSettings {
//!     primary: vec![RawLink::page(PageId(3), None)],
//!     ..NavigationSettings::default()
//! };
//!
//! let menus = Menus::resolve(&settings.bind(&tree));
//! assert_eq!(menus.primary[0].url, "/about-us/");
//! # Ok(())
//! # }
//! ```

mod error;
mod menu;
mod section;
mod settings;
mod sidebar;

pub use error::NavigationError;
pub use menu::{FooterColumn, LogoContext, Menus, NavItem, PrimaryNav, primary_nav};
pub use section::{SECTION_DEPTH, SectionContext, locate_section};
pub use settings::{LinkColumn, LogoLink, NavigationSettings};
pub use sidebar::{PageCallToAction, Sidebar, SidebarSettings};
