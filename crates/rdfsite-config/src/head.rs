//! HTML head tags injected into every page.
//!
//! The framework expects each tag as a positional `[tag-name, attributes]`
//! pair. Attribute order is preserved as written, so the tags serialize
//! exactly as they appear in the source.

use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};

/// A `<link>` or `<meta>` tag injected into the page head.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HeadTag {
    /// Tag name, e.g. `link` or `meta`.
    pub tag: String,
    /// Ordered attribute name/value pairs.
    pub attrs: Vec<(String, String)>,
}

impl HeadTag {
    /// Create a `<link>` tag from attribute pairs.
    #[must_use]
    pub fn link(attrs: &[(&str, &str)]) -> Self {
        Self::new("link", attrs)
    }

    /// Create a `<meta>` tag from attribute pairs.
    #[must_use]
    pub fn meta(attrs: &[(&str, &str)]) -> Self {
        Self::new("meta", attrs)
    }

    fn new(tag: &str, attrs: &[(&str, &str)]) -> Self {
        Self {
            tag: tag.to_owned(),
            attrs: attrs
                .iter()
                .map(|&(name, value)| (name.to_owned(), value.to_owned()))
                .collect(),
        }
    }
}

impl Serialize for HeadTag {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut pair = serializer.serialize_seq(Some(2))?;
        pair.serialize_element(&self.tag)?;
        pair.serialize_element(&AttrMap(&self.attrs))?;
        pair.end()
    }
}

/// Serializes attribute pairs as a JSON object, preserving order.
struct AttrMap<'a>(&'a [(String, String)]);

impl Serialize for AttrMap<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (name, value) in self.0 {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}
