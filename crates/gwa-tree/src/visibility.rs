//! Page visibility flags and the menu filter built from them.

use serde::{Deserialize, Serialize};

/// Visibility flags stored on each page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Visibility {
    /// Page is published.
    pub live: bool,
    /// Page has no view restrictions.
    pub public: bool,
    /// Page is flagged to appear in menus.
    pub show_in_menus: bool,
}

impl Default for Visibility {
    fn default() -> Self {
        Self {
            live: true,
            public: true,
            show_in_menus: false,
        }
    }
}

impl Visibility {
    /// Published, public page shown in menus.
    #[must_use]
    pub fn menu() -> Self {
        Self {
            show_in_menus: true,
            ..Self::default()
        }
    }

    /// Unpublished page.
    #[must_use]
    pub fn draft() -> Self {
        Self {
            live: false,
            ..Self::menu()
        }
    }
}

/// Conjunction of visibility predicates applied to children and siblings.
///
/// Each enabled flag requires the corresponding [`Visibility`] flag to be set.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VisibilityFilter {
    /// Require `live`.
    pub live: bool,
    /// Require `public`.
    pub public: bool,
    /// Require `show_in_menus`.
    pub in_menu: bool,
}

impl Default for VisibilityFilter {
    fn default() -> Self {
        Self::menu()
    }
}

impl VisibilityFilter {
    /// Published, public and in-menu pages only.
    #[must_use]
    pub fn menu() -> Self {
        Self {
            live: true,
            public: true,
            in_menu: true,
        }
    }

    /// Admit every page.
    #[must_use]
    pub fn all() -> Self {
        Self {
            live: false,
            public: false,
            in_menu: false,
        }
    }

    /// Check whether a page with the given flags passes the filter.
    #[must_use]
    pub fn admits(&self, visibility: &Visibility) -> bool {
        (!self.live || visibility.live)
            && (!self.public || visibility.public)
            && (!self.in_menu || visibility.show_in_menus)
    }
}
