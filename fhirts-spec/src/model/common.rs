//! Shapes shared by several document kinds.

use serde::Deserialize;

/// A JSON field that is normally a list but is sometimes written as a single value.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    Many(Vec<T>),
    One(T),
}

impl<T> OneOrMany<T> {
    /// View the value as a slice, whichever form it was written in.
    pub fn as_slice(&self) -> &[T] {
        match self {
            OneOrMany::Many(items) => items,
            OneOrMany::One(item) => std::slice::from_ref(item),
        }
    }

    /// True if the value was written as a single item instead of a list.
    pub fn is_scalar(&self) -> bool {
        matches!(self, OneOrMany::One(_))
    }
}

/// An extension attached to an element.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Extension {
    pub url: String,
    pub value_string: Option<String>,
}

/// A literal reference to another resource.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Reference {
    pub reference: Option<String>,
}

/// Find the string value of the first extension with the given URL.
pub fn extension_value_string<'a>(extensions: &'a [Extension], url: &str) -> Option<&'a str> {
    extensions
        .iter()
        .find(|ext| ext.url == url)
        .and_then(|ext| ext.value_string.as_deref())
}
