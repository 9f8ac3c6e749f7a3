//! Pure builders deriving the nav bar and sidebar from the project table.
//!
//! Both builders take the project table as input so the site map follows
//! table edits without touching construction logic. [`site_nav`] and
//! [`site_sidebar`] apply them to the static [`PROJECTS`] table.

use crate::map::{NavEntry, NavItem, SidebarMap, SidebarSection};
use crate::projects::{ApiLink, EXTRA_API_DOCS, PROJECTS, Project};

/// Display text of the API reference dropdown.
const API_DOCS_LABEL: &str = "API Documentation";

/// Build the top navigation list: one plain entry per project, in table
/// order, followed by one dropdown grouping every API reference.
#[must_use]
pub fn build_nav(projects: &[Project], extra_api_docs: &[ApiLink]) -> Vec<NavEntry> {
    let mut nav: Vec<NavEntry> = projects
        .iter()
        .map(|project| NavEntry::item(project.name, project.root))
        .collect();

    let api_items = projects
        .iter()
        .map(|project| NavItem::new(project.name, project.api_docs))
        .chain(extra_api_docs.iter().map(|link| NavItem::new(link.text, link.url)))
        .collect();
    nav.push(NavEntry::group(API_DOCS_LABEL, api_items));

    nav
}

/// Build the sidebar map: each project's root path maps to a single section
/// carrying the project's ordered page slugs.
#[must_use]
pub fn build_sidebar(projects: &[Project]) -> SidebarMap {
    projects
        .iter()
        .map(|project| {
            let section = SidebarSection {
                title: project.name.to_owned(),
                collapsable: project.collapsable,
                children: project.pages.iter().map(|&slug| slug.to_owned()).collect(),
            };
            (project.root.to_owned(), vec![section])
        })
        .collect()
}

/// Navigation list for the current site, from the static [`PROJECTS`] table.
#[must_use]
pub fn site_nav() -> Vec<NavEntry> {
    build_nav(PROJECTS, EXTRA_API_DOCS)
}

/// Sidebar map for the current site, from the static [`PROJECTS`] table.
#[must_use]
pub fn site_sidebar() -> SidebarMap {
    build_sidebar(PROJECTS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn test_projects() -> &'static [Project] {
        const TABLE: &[Project] = &[
            Project {
                name: "RDF.ex",
                root: "/rdf-ex/",
                api_docs: "https://hexdocs.pm/rdf/",
                collapsable: false,
                pages: &["", "installation"],
            },
            Project {
                name: "SPARQL.ex",
                root: "/sparql-ex/",
                api_docs: "https://hexdocs.pm/sparql/",
                collapsable: true,
                pages: &["", "executing-queries"],
            },
        ];
        TABLE
    }

    #[test]
    fn test_build_nav_orders_projects_before_api_group() {
        let nav = build_nav(test_projects(), &[]);

        assert_eq!(nav.len(), 3);
        assert_eq!(nav[0], NavEntry::item("RDF.ex", "/rdf-ex/"));
        assert_eq!(nav[1], NavEntry::item("SPARQL.ex", "/sparql-ex/"));
        match &nav[2] {
            NavEntry::Group(group) => {
                assert_eq!(group.text, "API Documentation");
                assert_eq!(group.items.len(), 2);
                assert_eq!(group.items[0].link, "https://hexdocs.pm/rdf/");
            }
            NavEntry::Item(item) => panic!("expected group, got item {item:?}"),
        }
    }

    #[test]
    fn test_build_nav_appends_extra_api_links_after_projects() {
        let extras = [ApiLink {
            text: "SPARQL.Client",
            url: "https://hexdocs.pm/sparql_client/",
        }];

        let nav = build_nav(test_projects(), &extras);

        let NavEntry::Group(group) = nav.last().unwrap() else {
            panic!("last nav entry must be the API group");
        };
        assert_eq!(group.items.len(), 3);
        assert_eq!(group.items[2].text, "SPARQL.Client");
    }

    #[test]
    fn test_build_sidebar_wraps_each_project_in_one_section() {
        let sidebar = build_sidebar(test_projects());

        assert_eq!(sidebar.len(), 2);
        let sections = &sidebar["/sparql-ex/"];
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].title, "SPARQL.ex");
        assert!(sections[0].collapsable);
        assert_eq!(sections[0].children, vec!["", "executing-queries"]);
    }

    #[test]
    fn test_build_sidebar_preserves_slug_order() {
        let sidebar = build_sidebar(PROJECTS);

        let rdf = &sidebar["/rdf-ex/"][0];
        assert_eq!(rdf.children[0], "");
        assert_eq!(rdf.children[1], "installation");
        assert_eq!(*rdf.children.last().unwrap(), "serializations");
    }

    #[test]
    fn test_empty_project_table_yields_only_api_group() {
        let nav = build_nav(&[], &[]);
        assert_eq!(nav.len(), 1);
        let NavEntry::Group(group) = &nav[0] else {
            panic!("expected group");
        };
        assert!(group.items.is_empty());

        assert!(build_sidebar(&[]).is_empty());
    }

    #[test]
    fn test_site_nav_matches_final_snapshot() {
        let nav = site_nav();

        // 4 plain project entries plus the API dropdown
        assert_eq!(nav.len(), 5);
        let plain: Vec<_> = nav.iter().filter_map(NavEntry::as_item).collect();
        assert_eq!(plain.len(), 4);
        let roots: Vec<_> = plain.iter().map(|item| item.link.as_str()).collect();
        assert_eq!(roots, vec!["/rdf-ex/", "/sparql-ex/", "/shex-ex/", "/grax/"]);

        let NavEntry::Group(group) = &nav[4] else {
            panic!("expected API group last");
        };
        assert_eq!(group.items.len(), 6);
    }

    #[test]
    fn test_site_sidebar_covers_all_four_roots() {
        let sidebar = site_sidebar();

        let keys: Vec<_> = sidebar.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["/grax/", "/rdf-ex/", "/shex-ex/", "/sparql-ex/"]);
    }

    #[test]
    fn test_building_twice_is_deterministic() {
        assert_eq!(site_nav(), site_nav());
        assert_eq!(site_sidebar(), site_sidebar());
    }
}
