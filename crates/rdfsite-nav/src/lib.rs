//! Site map types and builders for the RDF on Elixir documentation site.
//!
//! This crate provides:
//! - [`NavEntry`] / [`SidebarSection`]: the navigation and sidebar data
//!   structures the documentation framework consumes
//! - [`PROJECTS`]: the literal table describing the documented sub-projects
//! - [`build_nav`] / [`build_sidebar`]: pure builders deriving the site map
//!   from a project table
//! - [`verify_site_map`]: consistency checks catching dangling references
//!   before the framework renders broken links
//!
//! Construction is infallible and idempotent; the site map is built once per
//! site build and never mutated afterwards.
//!
//! # Example
//!
//! ```
//! use rdfsite_nav::{site_nav, site_sidebar, verify_site_map};
//!
//! let nav = site_nav();
//! let sidebar = site_sidebar();
//! verify_site_map(&nav, &sidebar).expect("site map is consistent");
//! ```

mod builder;
mod map;
mod projects;
mod verify;

pub use builder::{build_nav, build_sidebar, site_nav, site_sidebar};
pub use map::{NavEntry, NavGroup, NavItem, SidebarMap, SidebarSection};
pub use projects::{ApiLink, EXTRA_API_DOCS, PROJECTS, Project};
pub use verify::{SiteMapError, verify_site_map};
