//! Site navigation settings.

use gwa_links::{ImageBlock, RawLink, has_link_scheme, validate, validate_internal};
use gwa_tree::{ContentTree, PageId, TreePage};
use serde::Deserialize;

use crate::error::NavigationError;

/// Footer column: optional heading plus links.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct LinkColumn<T> {
    /// Column heading, omitted when blank.
    #[serde(default)]
    pub heading: Option<String>,
    /// Links in display order.
    #[serde(default = "Vec::new")]
    pub links: Vec<RawLink<T>>,
}

/// Logo shown in the footer logo cloud.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct LogoLink {
    /// Logo image.
    pub logo: ImageBlock,
    /// Optional link target.
    #[serde(default)]
    pub url: Option<String>,
}

/// Per-site navigation menus.
///
/// `T` identifies internal targets: [`PageId`] as loaded from configuration,
/// a tree page after [`NavigationSettings::bind`].
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct NavigationSettings<T> {
    /// Main site navigation, internal pages only.
    #[serde(default = "Vec::new")]
    pub primary: Vec<RawLink<T>>,
    /// Alternative navigation.
    #[serde(default = "Vec::new")]
    pub secondary: Vec<RawLink<T>>,
    /// Footer link columns.
    #[serde(default = "Vec::new")]
    pub footer: Vec<LinkColumn<T>>,
    /// Single list of links at the base of the page.
    #[serde(default = "Vec::new")]
    pub footer_links: Vec<RawLink<T>>,
    /// Logo cloud at the base of the page.
    #[serde(default = "Vec::new")]
    pub logos: Vec<LogoLink>,
}

impl<T> Default for NavigationSettings<T> {
    fn default() -> Self {
        Self {
            primary: Vec::new(),
            secondary: Vec::new(),
            footer: Vec::new(),
            footer_links: Vec::new(),
            logos: Vec::new(),
        }
    }
}

impl NavigationSettings<PageId> {
    /// Bind stored page ids to pages of `tree`.
    ///
    /// Ids missing from the tree are logged and dropped, leaving the entry
    /// without a page target.
    #[must_use]
    pub fn bind<'t>(&self, tree: &'t ContentTree) -> NavigationSettings<TreePage<'t>> {
        NavigationSettings {
            primary: bind_links(tree, "primary", &self.primary),
            secondary: bind_links(tree, "secondary", &self.secondary),
            footer: self
                .footer
                .iter()
                .enumerate()
                .map(|(i, column)| LinkColumn {
                    heading: column.heading.clone(),
                    links: bind_links(tree, &format!("footer[{i}].links"), &column.links),
                })
                .collect(),
            footer_links: bind_links(tree, "footer_links", &self.footer_links),
            logos: self.logos.clone(),
        }
    }
}

pub(crate) fn bind_page<'t>(
    tree: &'t ContentTree,
    location: &str,
    id: PageId,
) -> Option<TreePage<'t>> {
    let page = tree.get(id);
    if page.is_none() {
        tracing::warn!(%location, page = %id, "Navigation entry points to a missing page");
    }
    page
}

fn bind_links<'t>(
    tree: &'t ContentTree,
    location: &str,
    links: &[RawLink<PageId>],
) -> Vec<RawLink<TreePage<'t>>> {
    links
        .iter()
        .enumerate()
        .map(|(i, link)| {
            link.clone()
                .map_page(|id| bind_page(tree, &format!("{location}[{i}]"), id))
        })
        .collect()
}

impl<T> NavigationSettings<T> {
    /// Edit-time validation of every entry.
    ///
    /// # Errors
    ///
    /// Returns every failing entry with its location. Primary entries must
    /// link to a page; logo links must be valid URLs.
    pub fn validate(&self) -> Result<(), Vec<NavigationError>> {
        let mut errors = Vec::new();

        for (i, link) in self.primary.iter().enumerate() {
            if let Err(source) = validate_internal(link.as_ref()) {
                errors.push(NavigationError::Link {
                    location: format!("primary[{i}]"),
                    source,
                });
            }
        }
        check_links(&mut errors, "secondary", &self.secondary);
        for (i, column) in self.footer.iter().enumerate() {
            check_links(&mut errors, &format!("footer[{i}].links"), &column.links);
        }
        check_links(&mut errors, "footer_links", &self.footer_links);

        for (i, logo) in self.logos.iter().enumerate() {
            let location = format!("logos[{i}]");
            if logo.logo.image.is_none() {
                errors.push(NavigationError::MissingLogo {
                    location: location.clone(),
                });
            }
            if let Some(url) = logo.url.as_deref().filter(|u| !u.trim().is_empty())
                && !has_link_scheme(url)
            {
                errors.push(NavigationError::InvalidLogoUrl {
                    location,
                    url: url.to_owned(),
                });
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

fn check_links<T>(errors: &mut Vec<NavigationError>, location: &str, links: &[RawLink<T>]) {
    for (i, link) in links.iter().enumerate() {
        if let Err(source) = validate(link.as_ref()) {
            errors.push(NavigationError::Link {
                location: format!("{location}[{i}]"),
                source,
            });
        }
    }
}
