//! Sidebar context and call-to-action settings.

use gwa_links::{CallToAction, CallToActionContext};
use gwa_tree::{ContentTree, PageId, PageRef, TreePage};
use serde::{Deserialize, Serialize};

use crate::error::NavigationError;
use crate::section::{SectionContext, locate_section};
use crate::settings::bind_page;

/// Call-to-action shown in the sidebar of one page.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct PageCallToAction<T> {
    /// Page the call-to-action belongs to.
    pub page: PageId,
    /// The call-to-action.
    pub call_to_action: CallToAction<T>,
}

/// Sidebar call-to-action settings.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct SidebarSettings<T> {
    /// Shown on pages without their own call-to-action.
    pub default_call_to_action: Option<CallToAction<T>>,
    /// Page-specific calls-to-action.
    #[serde(default = "Vec::new")]
    pub pages: Vec<PageCallToAction<T>>,
}

impl<T> Default for SidebarSettings<T> {
    fn default() -> Self {
        Self {
            default_call_to_action: None,
            pages: Vec::new(),
        }
    }
}

impl<T> SidebarSettings<T> {
    /// Call-to-action for a page: its own, else the default.
    #[must_use]
    pub fn call_to_action_for(&self, page: PageId) -> Option<&CallToAction<T>> {
        self.pages
            .iter()
            .find(|entry| entry.page == page)
            .map(|entry| &entry.call_to_action)
            .or(self.default_call_to_action.as_ref())
    }

    /// Edit-time validation of every call-to-action.
    ///
    /// # Errors
    ///
    /// Returns every failing call-to-action with its location.
    pub fn validate(&self) -> Result<(), Vec<NavigationError>> {
        let mut errors = Vec::new();
        if let Some(cta) = &self.default_call_to_action
            && let Err(source) = cta.validate()
        {
            errors.push(NavigationError::CallToAction {
                location: "default_call_to_action".to_owned(),
                source,
            });
        }
        for (i, entry) in self.pages.iter().enumerate() {
            if let Err(source) = entry.call_to_action.validate() {
                errors.push(NavigationError::CallToAction {
                    location: format!("pages[{i}].call_to_action"),
                    source,
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

impl SidebarSettings<PageId> {
    /// Bind stored page ids to pages of `tree`.
    #[must_use]
    pub fn bind<'t>(&self, tree: &'t ContentTree) -> SidebarSettings<TreePage<'t>> {
        SidebarSettings {
            default_call_to_action: self.default_call_to_action.clone().map(|cta| {
                cta.map_pages(|id| bind_page(tree, "default_call_to_action", id))
            }),
            pages: self
                .pages
                .iter()
                .enumerate()
                .map(|(i, entry)| {
                    let location = format!("pages[{i}].call_to_action");
                    PageCallToAction {
                        page: entry.page,
                        call_to_action: entry
                            .call_to_action
                            .clone()
                            .map_pages(|id| bind_page(tree, &location, id)),
                    }
                })
                .collect(),
        }
    }
}

/// Everything the sidebar of a page renders.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Sidebar<P> {
    /// Page being rendered.
    pub current: P,
    /// Section and listed pages.
    #[serde(flatten)]
    pub context: SectionContext<P>,
    /// Call-to-action beside the list.
    pub call_to_action: Option<CallToActionContext>,
}

impl<P: PageRef> Sidebar<P> {
    /// Build the sidebar of `page` with an explicit call-to-action.
    #[must_use]
    pub fn new(page: &P, call_to_action: Option<&CallToAction<P>>) -> Self {
        Self {
            current: page.clone(),
            context: locate_section(page),
            call_to_action: call_to_action.map(CallToAction::context),
        }
    }

    /// Build the sidebar of `page`, taking the call-to-action from settings.
    #[must_use]
    pub fn for_page(page: &P, settings: &SidebarSettings<P>) -> Self {
        Self::new(page, settings.call_to_action_for(page.id()))
    }

    /// True if `page` is the current page or contains it.
    #[must_use]
    pub fn is_active(&self, page: &P) -> bool {
        page.id() == self.current.id() || self.context.is_ancestor(page)
    }
}

#[cfg(test)]
mod tests {
    use gwa_links::LinkBlock;
    use gwa_tree::{ContentTreeBuilder, Visibility};
    use pretty_assertions::assert_eq;

    use super::*;

    /// Root(1) > Home(2) > Collections(3) > Web(4) > Twitter(5)
    ///                                    > Social(6)
    fn tree() -> ContentTree {
        let mut builder = ContentTreeBuilder::new();
        let root = builder
            .add_page(1, "Root", "root", Visibility::default(), None)
            .unwrap();
        let home = builder
            .add_page(2, "Home", "home", Visibility::menu(), Some(root))
            .unwrap();
        let collections = builder
            .add_page(3, "Collections", "collections", Visibility::menu(), Some(home))
            .unwrap();
        let web = builder
            .add_page(4, "Web", "web", Visibility::menu(), Some(collections))
            .unwrap();
        builder
            .add_page(5, "Twitter", "twitter", Visibility::menu(), Some(web))
            .unwrap();
        builder
            .add_page(6, "Social", "social", Visibility::menu(), Some(collections))
            .unwrap();
        builder.build()
    }

    fn cta<T>(title: &str, page: T) -> CallToAction<T> {
        CallToAction {
            title: title.to_owned(),
            summary: None,
            image: None,
            image_alt_text: None,
            image_is_decorative: false,
            link: vec![LinkBlock::InternalLink {
                page: Some(page),
                link_text: None,
            }],
        }
    }

    fn settings() -> SidebarSettings<PageId> {
        SidebarSettings {
            default_call_to_action: Some(cta("Search the archive", PageId(3))),
            pages: vec![PageCallToAction {
                page: PageId(5),
                call_to_action: cta("Browse social media", PageId(6)),
            }],
        }
    }

    #[test]
    fn test_page_call_to_action_wins() {
        let tree = tree();
        let settings = settings().bind(&tree);
        let twitter = tree.get(PageId(5)).unwrap();

        let sidebar = Sidebar::for_page(&twitter, &settings);

        let cta = sidebar.call_to_action.unwrap();
        assert_eq!(cta.title, "Browse social media");
        assert_eq!(cta.link.url, "/collections/social/");
    }

    #[test]
    fn test_default_call_to_action() {
        let tree = tree();
        let settings = settings().bind(&tree);
        let web = tree.get(PageId(4)).unwrap();

        let sidebar = Sidebar::for_page(&web, &settings);

        let cta = sidebar.call_to_action.unwrap();
        assert_eq!(cta.title, "Search the archive");
        assert_eq!(cta.link.text, "Collections");
    }

    #[test]
    fn test_no_call_to_action() {
        let tree = tree();
        let web = tree.get(PageId(4)).unwrap();

        let sidebar = Sidebar::for_page(&web, &SidebarSettings::default());

        assert_eq!(sidebar.call_to_action, None);
    }

    #[test]
    fn test_is_active_marks_branch() {
        let tree = tree();
        let twitter = tree.get(PageId(5)).unwrap();

        let sidebar = Sidebar::new(&twitter, None);
        let active: Vec<_> = sidebar
            .context
            .siblings
            .iter()
            .map(|p| (p.id().0, sidebar.is_active(p)))
            .collect();

        assert_eq!(active, vec![(4, true), (6, false)]);
    }

    #[test]
    fn test_bind_missing_cta_page_resolves_to_no_link() {
        let tree = tree();
        let settings = SidebarSettings {
            default_call_to_action: Some(cta("Gone", PageId(99))),
            pages: Vec::new(),
        }
        .bind(&tree);
        let web = tree.get(PageId(4)).unwrap();

        let sidebar = Sidebar::for_page(&web, &settings);

        assert!(sidebar.call_to_action.unwrap().link.is_empty());
    }

    #[test]
    fn test_validate_reports_location() {
        let mut settings = settings();
        settings.pages[0].call_to_action.link.clear();

        let errors = settings.validate().unwrap_err();

        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].location(), "pages[0].call_to_action");
    }

    #[test]
    fn test_sidebar_serializes_flat() {
        let tree = tree();
        let web = tree.get(PageId(4)).unwrap();

        let json = serde_json::to_value(Sidebar::new(&web, None)).unwrap();

        assert_eq!(json["current"]["url"], "/collections/web/");
        assert_eq!(json["parent"]["title"], "Collections");
        assert_eq!(json["siblings"].as_array().unwrap().len(), 2);
        assert!(json["call_to_action"].is_null());
    }
}
