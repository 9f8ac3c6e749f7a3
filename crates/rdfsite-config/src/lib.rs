//! Site configuration for the RDF on Elixir documentation site.
//!
//! Builds the configuration object the documentation framework reads once at
//! site build time: site title and description, injected head tags, theme
//! settings with the nav/sidebar site map, and the plugin list.
//!
//! The canonical configuration is a pure literal; [`SiteConfig::validate`]
//! catches malformed literals (dangling sidebar roots, broken links) before
//! the framework turns them into broken-link defects in the rendered site.
//!
//! # Example
//!
//! ```
//! use rdfsite_config::SiteConfig;
//!
//! let config = SiteConfig::rdf_on_elixir();
//! config.validate().expect("canonical config is consistent");
//! let json = config.to_json_pretty().expect("config serializes");
//! assert!(json.contains("themeConfig"));
//! ```

mod head;
mod plugins;

use serde::Serialize;

use rdfsite_nav::{NavEntry, SidebarMap, SiteMapError, site_nav, site_sidebar, verify_site_map};

pub use head::HeadTag;
pub use plugins::Plugin;

/// Theme settings consumed by the framework under the `themeConfig` key.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeConfig {
    /// Repository slug shown in the "edit this page" links.
    pub repo: String,
    /// Directory holding the page sources, relative to the repository root.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub docs_dir: Option<String>,
    /// Whether per-page edit links are rendered.
    pub edit_links: bool,
    /// Top navigation bar entries.
    pub nav: Vec<NavEntry>,
    /// Per-section sidebar map.
    pub sidebar: SidebarMap,
}

/// The complete site configuration object.
///
/// Built once per site build and held as read-only data; the framework reads
/// it at startup and this crate never touches it again.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SiteConfig {
    /// Site title.
    pub title: String,
    /// Site description used in page metadata.
    pub description: String,
    /// Head tags injected into every page.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub head: Vec<HeadTag>,
    /// Theme settings, including the nav/sidebar site map.
    #[serde(rename = "themeConfig")]
    pub theme: ThemeConfig,
    /// Enabled framework plugins.
    pub plugins: Vec<Plugin>,
}

/// Defect found while validating a [`SiteConfig`].
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// Site title is empty.
    #[error("site title cannot be empty")]
    EmptyTitle,
    /// A head tag has no tag name.
    #[error("head tag at position {0} has an empty tag name")]
    EmptyHeadTag(usize),
    /// A plugin entry has no name.
    #[error("plugin at position {0} has an empty name")]
    EmptyPluginName(usize),
    /// The nav/sidebar pair is inconsistent.
    #[error(transparent)]
    SiteMap(#[from] SiteMapError),
}

impl SiteConfig {
    /// The canonical configuration of the RDF on Elixir site.
    #[must_use]
    pub fn rdf_on_elixir() -> Self {
        Self {
            title: "RDF on Elixir".to_owned(),
            description: "Implementation of the Linked Data and Semantic Standards for Elixir"
                .to_owned(),
            head: default_head(),
            theme: ThemeConfig {
                repo: "marcelotto/rdf-elixir-website".to_owned(),
                docs_dir: Some("content".to_owned()),
                edit_links: true,
                nav: site_nav(),
                sidebar: site_sidebar(),
            },
            plugins: vec![
                Plugin::enabled("@vuepress/back-to-top"),
                Plugin::with_options(
                    "@vuepress/pwa",
                    serde_json::json!({
                        "serviceWorker": true,
                        "updatePopup": true,
                    }),
                ),
            ],
        }
    }

    /// Check the configuration for malformed literals.
    ///
    /// Construction itself cannot fail; this catches the defects that would
    /// otherwise surface as broken links in the rendered site.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.title.is_empty() {
            return Err(ConfigError::EmptyTitle);
        }
        if let Some(position) = self.head.iter().position(|tag| tag.tag.is_empty()) {
            return Err(ConfigError::EmptyHeadTag(position));
        }
        if let Some(position) = self.plugins.iter().position(|plugin| plugin.name.is_empty()) {
            return Err(ConfigError::EmptyPluginName(position));
        }
        verify_site_map(&self.theme.nav, &self.theme.sidebar)?;
        Ok(())
    }

    /// The configuration as the JSON value the framework reads.
    pub fn to_json_value(&self) -> Result<serde_json::Value, serde_json::Error> {
        tracing::debug!(
            nav_entries = self.theme.nav.len(),
            sidebar_roots = self.theme.sidebar.len(),
            plugins = self.plugins.len(),
            "Emitting site configuration"
        );
        serde_json::to_value(self)
    }

    /// The configuration as pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        let value = self.to_json_value()?;
        serde_json::to_string_pretty(&value)
    }
}

/// PWA and icon head tags of the site.
fn default_head() -> Vec<HeadTag> {
    vec![
        HeadTag::link(&[("rel", "manifest"), ("href", "/icons/manifest.json")]),
        // Multisize ico for current browsers
        HeadTag::link(&[
            ("rel", "icon"),
            ("type", "image/x-icon"),
            ("sizes", "16x16 32x32"),
            ("href", "/icons/favicon.ico"),
        ]),
        // Chrome for Android
        HeadTag::link(&[
            ("rel", "icon"),
            ("sizes", "192x192"),
            ("href", "/icons/favicon-192.png"),
        ]),
        // iPhone 6+, downscaled for other devices
        HeadTag::link(&[
            ("rel", "apple-touch-icon"),
            ("sizes", "180x180"),
            ("href", "/icons/favicon-180-precomposed.png"),
        ]),
        // IE10 Metro
        HeadTag::meta(&[
            ("name", "msapplication-TileImage"),
            ("content", "/icons/favicon-144.png"),
        ]),
        HeadTag::meta(&[("name", "msapplication-TileColor"), ("content", "#FFFFFF")]),
        HeadTag::meta(&[("name", "theme-color"), ("content", "#3eaf7c")]),
        HeadTag::meta(&[("name", "apple-mobile-web-app-capable"), ("content", "yes")]),
        HeadTag::meta(&[
            ("name", "apple-mobile-web-app-status-bar-style"),
            ("content", "black"),
        ]),
    ]
}
