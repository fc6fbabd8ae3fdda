//! Parsed scene-node records
//!
//! A [`Record`] is one scene-node definition: an insertion-ordered mapping
//! from field name to field value. Field order is preserved so that
//! downstream output is deterministic for a given input.

use indexmap::IndexMap;
use std::fmt;

/// Field key holding the record's node type.
pub const KEY_TYPE: &str = "type";

/// Field key holding the record's id.
pub const KEY_ID: &str = "id";

/// Field key referencing the record's scene-graph parent.
pub const KEY_PARENT: &str = "parent";

/// Derived field key carrying comment text attached to a body.
///
/// Never present in raw input; inserted by the extractor when a comment
/// run immediately precedes the body.
pub const KEY_COMMENT: &str = "comment";

/// One parsed scene-node definition.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Record {
    fields: IndexMap<String, String>,
}

impl Record {
    /// Create an empty record
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a field, returning the previous value if the key existed.
    ///
    /// Duplicate keys keep their original position but take the new value
    /// (last write wins), matching the source format's semantics.
    pub fn insert<K: Into<String>, V: Into<String>>(&mut self, key: K, value: V) -> Option<String> {
        self.fields.insert(key.into(), value.into())
    }

    /// Look up a field value by key
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    /// Check whether a field is present
    pub fn contains(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    /// Number of fields
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the record has no fields (empty braces in the source)
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterate fields in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// The record's node type, if present
    pub fn record_type(&self) -> Option<&str> {
        self.get(KEY_TYPE)
    }

    /// The record's id, if present
    pub fn id(&self) -> Option<&str> {
        self.get(KEY_ID)
    }

    /// The comment text attached to this record, if any
    pub fn comment(&self) -> Option<&str> {
        self.get(KEY_COMMENT)
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{ ")?;
        for (i, (key, value)) in self.iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{key}={value}")?;
        }
        write!(f, " }}")
    }
}
