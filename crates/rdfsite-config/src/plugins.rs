//! Framework plugin declarations.
//!
//! Plugins are passed to the framework as positional `[name, options]`
//! pairs, where options are either a bare `true` or an options object.

use serde::ser::SerializeSeq;
use serde::{Serialize, Serializer};

/// A framework plugin with its options.
#[derive(Clone, Debug, PartialEq)]
pub struct Plugin {
    /// Plugin package name, e.g. `@vuepress/pwa`.
    pub name: String,
    /// Plugin options; `true` enables the plugin with defaults.
    pub options: serde_json::Value,
}

impl Plugin {
    /// Enable a plugin with its default options.
    #[must_use]
    pub fn enabled(name: &str) -> Self {
        Self {
            name: name.to_owned(),
            options: serde_json::Value::Bool(true),
        }
    }

    /// Enable a plugin with explicit options.
    #[must_use]
    pub fn with_options(name: &str, options: serde_json::Value) -> Self {
        Self {
            name: name.to_owned(),
            options,
        }
    }
}

impl Serialize for Plugin {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut pair = serializer.serialize_seq(Some(2))?;
        pair.serialize_element(&self.name)?;
        pair.serialize_element(&self.options)?;
        pair.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_enabled_plugin_serializes_with_bare_true() {
        let plugin = Plugin::enabled("@vuepress/back-to-top");

        let json = serde_json::to_value(&plugin).unwrap();

        assert_eq!(json, serde_json::json!(["@vuepress/back-to-top", true]));
    }

    #[test]
    fn test_plugin_options_serialize_as_object() {
        let plugin = Plugin::with_options(
            "@vuepress/pwa",
            serde_json::json!({"serviceWorker": true, "updatePopup": true}),
        );

        let json = serde_json::to_value(&plugin).unwrap();

        assert_eq!(json[0], "@vuepress/pwa");
        assert_eq!(json[1]["serviceWorker"], true);
        assert_eq!(json[1]["updatePopup"], true);
    }
}
