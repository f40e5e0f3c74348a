//! Render-time menu resolution.
//!
//! Stored menus may hold entries that predate validation or point to pages
//! deleted since. Rendering skips such entries with a warning instead of
//! failing.

use std::collections::BTreeSet;

use gwa_links::{
    ImageContext, LinkEntry, RawLink, ResolvedLink, ValidationError, validate, validate_internal,
};
use gwa_tree::{PageId, PageRef};
use serde::Serialize;

use crate::settings::{LinkColumn, NavigationSettings};

/// Resolved footer column.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FooterColumn {
    /// Column heading.
    pub heading: Option<String>,
    /// Usable links.
    pub links: Vec<ResolvedLink>,
}

/// Resolved footer logo.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LogoContext {
    /// Logo image with alt text.
    pub image: ImageContext,
    /// Link target.
    pub url: Option<String>,
}

/// All site menus, ready to render.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Menus {
    /// Main navigation.
    pub primary: Vec<ResolvedLink>,
    /// Alternative navigation.
    pub secondary: Vec<ResolvedLink>,
    /// Footer columns.
    pub footer: Vec<FooterColumn>,
    /// Links at the base of the page.
    pub footer_links: Vec<ResolvedLink>,
    /// Logo cloud.
    pub logos: Vec<LogoContext>,
}

impl Menus {
    /// Resolve every menu of `settings`.
    #[must_use]
    pub fn resolve<P: PageRef>(settings: &NavigationSettings<P>) -> Self {
        Self {
            primary: resolve_links("primary", &settings.primary, validate_internal),
            secondary: resolve_links("secondary", &settings.secondary, validate),
            footer: settings
                .footer
                .iter()
                .enumerate()
                .map(|(i, column)| resolve_column(i, column))
                .collect(),
            footer_links: resolve_links("footer_links", &settings.footer_links, validate),
            logos: settings
                .logos
                .iter()
                .enumerate()
                .filter_map(|(i, logo)| {
                    let Some(image) = logo.logo.context() else {
                        let location = format!("logos[{i}]");
                        tracing::warn!(%location, "Skipping logo without image");
                        return None;
                    };
                    Some(LogoContext {
                        image,
                        url: logo.url.clone().filter(|u| !u.trim().is_empty()),
                    })
                })
                .collect(),
        }
    }
}

fn resolve_column<P: PageRef>(i: usize, column: &LinkColumn<P>) -> FooterColumn {
    FooterColumn {
        heading: column.heading.clone().filter(|h| !h.trim().is_empty()),
        links: resolve_links(&format!("footer[{i}].links"), &column.links, validate),
    }
}

type Check<P> = fn(RawLink<P>) -> Result<LinkEntry<P>, ValidationError>;

fn resolve_entries<P: PageRef>(
    location: &str,
    links: &[RawLink<P>],
    check: Check<P>,
) -> Vec<LinkEntry<P>> {
    links
        .iter()
        .enumerate()
        .filter_map(|(i, link)| match check(link.clone()) {
            Ok(entry) => Some(entry),
            Err(error) => {
                let location = format!("{location}[{i}]");
                tracing::warn!(%location, %error, "Skipping invalid menu entry");
                None
            }
        })
        .collect()
}

fn resolve_links<P: PageRef>(
    location: &str,
    links: &[RawLink<P>],
    check: Check<P>,
) -> Vec<ResolvedLink> {
    resolve_entries(location, links, check)
        .iter()
        .map(LinkEntry::resolve)
        .collect()
}

/// Primary navigation item.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NavItem {
    /// Resolved link.
    #[serde(flatten)]
    pub link: ResolvedLink,
    /// Target page.
    pub page: PageId,
    /// Target is the current page or one of its ancestors.
    pub active: bool,
}

/// Primary navigation for one page.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct PrimaryNav {
    /// Items in display order.
    pub items: Vec<NavItem>,
    /// Identifiers of the current page's ancestors.
    pub ancestor_ids: BTreeSet<PageId>,
}

/// Resolve the primary navigation, marking the branch of `current`.
#[must_use]
pub fn primary_nav<P: PageRef>(
    settings: &NavigationSettings<P>,
    current: Option<&P>,
) -> PrimaryNav {
    let ancestor_ids: BTreeSet<PageId> = current
        .map(|page| page.ancestors().iter().map(PageRef::id).collect())
        .unwrap_or_default();
    let current_id = current.map(PageRef::id);

    let items = resolve_entries("primary", &settings.primary, validate_internal)
        .into_iter()
        .filter_map(|entry| {
            let LinkEntry::Internal { target, .. } = &entry else {
                return None;
            };
            let page = target.id();
            Some(NavItem {
                link: entry.resolve(),
                page,
                active: current_id == Some(page) || ancestor_ids.contains(&page),
            })
        })
        .collect();

    PrimaryNav {
        items,
        ancestor_ids,
    }
}
