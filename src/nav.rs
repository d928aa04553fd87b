//! Page Navigation
//!
//! Memory-only state machine over the fixed set of pages, plus the sidebar
//! visibility flag. Nothing here touches the DOM; the views derive their
//! `active` classes from this state.

use reactive_stores::Store;

/// Top-level views; exactly one is active at a time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Home,
    Results,
    Details,
}

impl Page {
    pub const ALL: [Page; 3] = [Page::Home, Page::Results, Page::Details];

    /// Identifier used in `data-page` attributes
    pub fn as_str(&self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::Results => "results",
            Page::Details => "details",
        }
    }

    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|page| page.as_str() == name)
    }

    /// DOM id of the page container
    pub fn element_id(&self) -> String {
        format!("{}-page", self.as_str())
    }

    /// Sidebar entry label; details has no nav marker
    pub fn nav_label(&self) -> Option<&'static str> {
        match self {
            Page::Home => Some("Home"),
            Page::Results => Some("Results"),
            Page::Details => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Store)]
pub struct Navigation {
    pub page: Page,
    pub sidebar_open: bool,
    /// Bumped on every successful navigation so the view can scroll to top
    pub scroll_resets: u32,
}

impl Navigation {
    /// Navigate by `data-page` name. Unknown names leave everything as is.
    pub fn show_page(&mut self, name: &str) -> bool {
        match Page::parse(name) {
            Some(page) => {
                self.navigate(page);
                true
            }
            None => {
                log::debug!("Ignoring navigation to unknown page {:?}", name);
                false
            }
        }
    }

    pub fn navigate(&mut self, page: Page) {
        self.page = page;
        self.scroll_resets = self.scroll_resets.wrapping_add(1);
    }

    pub fn is_active(&self, page: Page) -> bool {
        self.page == page
    }

    /// Set the sidebar explicitly, or flip it when `show` is `None`
    pub fn toggle_sidebar(&mut self, show: Option<bool>) {
        self.sidebar_open = show.unwrap_or(!self.sidebar_open);
    }

    /// Sidebar entry click: navigate and close the sidebar together
    pub fn select_nav_entry(&mut self, name: &str) -> bool {
        let moved = self.show_page(name);
        self.toggle_sidebar(Some(false));
        moved
    }
}
