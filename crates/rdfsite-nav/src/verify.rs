//! Site map consistency checks.
//!
//! A sidebar root with no matching nav link, or a malformed nav link, only
//! surfaces as a broken link in the rendered site. These checks catch those
//! defects at build time instead.

use std::collections::HashSet;

use crate::map::{NavEntry, NavItem, SidebarMap};

/// Consistency defect in a nav/sidebar pair.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum SiteMapError {
    /// Nav link is empty or neither an internal path nor an absolute URL.
    #[error("nav entry '{text}' has invalid link '{link}' (must start with '/' or 'http')")]
    InvalidLink {
        /// Display text of the offending entry.
        text: String,
        /// The rejected link value.
        link: String,
    },
    /// Sidebar root path has no plain nav entry linking to it.
    #[error("sidebar root '{root}' is not linked from the nav bar")]
    UnlinkedSection {
        /// The orphaned sidebar key.
        root: String,
    },
    /// A sidebar section lists the same slug twice.
    #[error("sidebar section '{title}' lists slug '{slug}' more than once")]
    DuplicateSlug {
        /// Title of the offending section.
        title: String,
        /// The repeated slug.
        slug: String,
    },
}

/// Check a nav/sidebar pair for dangling references and malformed links.
///
/// Verifies that every nav link (including dropdown items) is well-formed,
/// that every sidebar root is reachable from a plain nav entry, and that no
/// section repeats a slug. Returns the first defect found.
pub fn verify_site_map(nav: &[NavEntry], sidebar: &SidebarMap) -> Result<(), SiteMapError> {
    for entry in nav {
        match entry {
            NavEntry::Item(item) => check_link(item)?,
            NavEntry::Group(group) => {
                for item in &group.items {
                    check_link(item)?;
                }
            }
        }
    }

    let linked_roots: HashSet<&str> = nav
        .iter()
        .filter_map(NavEntry::as_item)
        .map(|item| item.link.as_str())
        .collect();

    for (root, sections) in sidebar {
        if !linked_roots.contains(root.as_str()) {
            return Err(SiteMapError::UnlinkedSection { root: root.clone() });
        }
        for section in sections {
            let mut seen = HashSet::new();
            for slug in &section.children {
                if !seen.insert(slug.as_str()) {
                    return Err(SiteMapError::DuplicateSlug {
                        title: section.title.clone(),
                        slug: slug.clone(),
                    });
                }
            }
        }
    }

    Ok(())
}

fn check_link(item: &NavItem) -> Result<(), SiteMapError> {
    if item.link.starts_with('/') || item.link.starts_with("http") {
        return Ok(());
    }
    Err(SiteMapError::InvalidLink {
        text: item.text.clone(),
        link: item.link.clone(),
    })
}
