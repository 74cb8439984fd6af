//! Route table and navigation menu.

use serde::Serialize;

/// A dashboard page reachable from the menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Page {
    Home,
    Emotion,
}

/// Where the empty path and unknown paths land
pub const DEFAULT_PAGE: Page = Page::Home;

impl Page {
    pub const ALL: [Page; 2] = [Page::Home, Page::Emotion];

    pub fn slug(&self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::Emotion => "emotion",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Emotion => "Emotion",
        }
    }

    pub fn path(&self) -> String {
        format!("/{}", self.slug())
    }

    pub fn from_slug(slug: &str) -> Option<Page> {
        Page::ALL.into_iter().find(|p| p.slug() == slug)
    }
}

/// Outcome of resolving a path against the route table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    Render(Page),
    Redirect(Page),
}

/// Match the first path segment; anything else goes to [`DEFAULT_PAGE`]
pub fn resolve(path: &str) -> Navigation {
    let trimmed = path.trim_matches('/');
    match Page::from_slug(trimmed) {
        Some(page) => Navigation::Render(page),
        None => Navigation::Redirect(DEFAULT_PAGE),
    }
}

/// One entry of the navigation menu
#[derive(Debug, Clone, Serialize)]
pub struct MenuItem {
    pub key: &'static str,
    pub title: &'static str,
    pub path: String,
}

pub fn menu() -> Vec<MenuItem> {
    Page::ALL
        .iter()
        .map(|page| MenuItem {
            key: page.slug(),
            title: page.title(),
            path: page.path(),
        })
        .collect()
}
