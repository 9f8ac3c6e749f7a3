//! Navigation and sidebar data structures.
//!
//! These types mirror the shape the documentation framework reads at site
//! build time: plain nav links, dropdown groups, and per-section sidebar
//! descriptors keyed by section root path.

use std::collections::BTreeMap;

use serde::Serialize;

/// A single navigation bar link.
///
/// `link` is either an internal site path (leading `/`) or an absolute
/// external URL.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NavItem {
    /// Display text.
    pub text: String,
    /// Link target.
    pub link: String,
}

impl NavItem {
    /// Create a nav item from display text and link target.
    #[must_use]
    pub fn new(text: &str, link: &str) -> Self {
        Self {
            text: text.to_owned(),
            link: link.to_owned(),
        }
    }
}

/// A dropdown group of navigation links.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NavGroup {
    /// Display text of the dropdown.
    pub text: String,
    /// Links shown when the dropdown is open.
    pub items: Vec<NavItem>,
}

/// A top-level navigation entry: either a plain link or a dropdown group.
///
/// Serializes untagged, so a plain entry is `{text, link}` and a group is
/// `{text, items}` on the wire.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum NavEntry {
    /// Plain link.
    Item(NavItem),
    /// Dropdown group.
    Group(NavGroup),
}

impl NavEntry {
    /// Create a plain link entry.
    #[must_use]
    pub fn item(text: &str, link: &str) -> Self {
        Self::Item(NavItem::new(text, link))
    }

    /// Create a dropdown group entry.
    #[must_use]
    pub fn group(text: &str, items: Vec<NavItem>) -> Self {
        Self::Group(NavGroup {
            text: text.to_owned(),
            items,
        })
    }

    /// Plain link of this entry, `None` for groups.
    #[must_use]
    pub fn as_item(&self) -> Option<&NavItem> {
        match self {
            Self::Item(item) => Some(item),
            Self::Group(_) => None,
        }
    }
}

/// Sidebar descriptor for one documentation section.
///
/// `children` holds page slugs relative to the section root, in rendered
/// order; the empty slug denotes the section's index page. The field name
/// `collapsable` is the framework's literal spelling.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SidebarSection {
    /// Section heading shown above the page list.
    pub title: String,
    /// Whether the section can be collapsed in the UI.
    pub collapsable: bool,
    /// Ordered page slugs, relative to the section root.
    pub children: Vec<String>,
}

/// Sidebar configuration keyed by section root path (e.g. `/rdf-ex/`).
///
/// Each root maps to the ordered sections rendered for that part of the
/// site; in this data every root carries exactly one section. The map keys
/// correspond 1:1 with the internal links in the navigation bar. A
/// `BTreeMap` keeps iteration deterministic; the framework looks sections up
/// by root path, so map-key order is not rendered order.
pub type SidebarMap = BTreeMap<String, Vec<SidebarSection>>;
