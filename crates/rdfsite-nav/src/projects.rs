//! The literal project table behind the site map.
//!
//! Earlier revisions of the site kept a hand-maintained copy of the nav and
//! sidebar literals per sub-project; those copies drifted as projects were
//! added. The table here is the single source the builders derive both
//! structures from: adding a documented sub-project means adding one row.

/// One documented sub-project of the site.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Project {
    /// Display name used in the nav bar and as sidebar section title.
    pub name: &'static str,
    /// Section root path, with leading and trailing slash.
    pub root: &'static str,
    /// External API reference for the project.
    pub api_docs: &'static str,
    /// Whether the sidebar section can be collapsed.
    pub collapsable: bool,
    /// Ordered page slugs under the section root; `""` is the index page.
    pub pages: &'static [&'static str],
}

/// An external API reference without a hosted guide section.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ApiLink {
    /// Display text in the API dropdown.
    pub text: &'static str,
    /// Absolute URL of the API reference.
    pub url: &'static str,
}

/// The documented sub-projects, in nav bar order.
pub const PROJECTS: &[Project] = &[
    Project {
        name: "RDF.ex",
        root: "/rdf-ex/",
        api_docs: "https://hexdocs.pm/rdf/",
        collapsable: false,
        pages: &[
            "",
            "installation",
            "iris",
            "vocabularies",
            "blank-nodes",
            "literals",
            "statements",
            "data-structures",
            "lists",
            "mapping-between-rdf-and-elixir",
            "serializations",
        ],
    },
    Project {
        name: "SPARQL.ex",
        root: "/sparql-ex/",
        api_docs: "https://hexdocs.pm/sparql/",
        collapsable: false,
        pages: &[
            "",
            "feature-limitations",
            "installation",
            "executing-queries",
            "defining-extension-functions",
        ],
    },
    Project {
        name: "ShEx.ex",
        root: "/shex-ex/",
        api_docs: "https://hexdocs.pm/shex/",
        collapsable: false,
        pages: &["", "installation", "shex-schemas", "validation"],
    },
    Project {
        name: "Grax",
        root: "/grax/",
        api_docs: "https://hexdocs.pm/grax/",
        collapsable: false,
        pages: &["", "installation", "schemas", "loading-and-storing", "api"],
    },
];

/// API references listed in the dropdown without a guide section of their
/// own. SPARQL.Client and RDF-XML.ex ship as separate hex packages but are
/// documented inside the SPARQL.ex and RDF.ex guides.
pub const EXTRA_API_DOCS: &[ApiLink] = &[
    ApiLink {
        text: "SPARQL.Client",
        url: "https://hexdocs.pm/sparql_client/",
    },
    ApiLink {
        text: "RDF-XML.ex",
        url: "https://hexdocs.pm/rdf_xml/",
    },
];
