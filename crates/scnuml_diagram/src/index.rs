//! Node-type indices for cross-reference resolution
//!
//! Cross-reference fields carry only an id; resolving the target node
//! name needs the target's type. The indices map id to type, partitioned
//! by whether the record's type is `object`, and are built once per run
//! before any rendering starts.

use crate::refs::RefKind;
use log::debug;
use scnuml_errors::error::{DiagramErrorKind, Error, Result};
use scnuml_parser::Record;
use scnuml_parser::record::{KEY_ID, KEY_TYPE};
use std::collections::HashMap;

/// The node type that gets its own reference partition.
pub const OBJECT_TYPE: &str = "object";

/// Derive a record's globally unique diagram node name (`type_id`)
pub fn node_name(record: &Record) -> Result<String> {
    let ty = require_field(record, KEY_TYPE)?;
    let id = require_field(record, KEY_ID)?;
    Ok(format!("{ty}_{id}"))
}

fn require_field<'a>(record: &'a Record, key: &str) -> Result<&'a str> {
    record.get(key).ok_or_else(|| {
        Error::diagram(
            format!("record {record} is missing the '{key}' field"),
            DiagramErrorKind::MissingField,
        )
        .with_field(key)
    })
}

/// Read-only id-to-type maps, partitioned by object vs. non-object type.
#[derive(Debug, Default)]
pub struct NodeTypeIndex {
    objects: HashMap<String, String>,
    others: HashMap<String, String>,
}

impl NodeTypeIndex {
    /// Scan all records once and build both partitions.
    ///
    /// Every record must carry `type` and `id`; a record missing either
    /// is a fatal [`DiagramErrorKind::MissingField`] error.
    pub fn build(records: &[Record]) -> Result<Self> {
        let mut index = NodeTypeIndex::default();
        for record in records {
            let ty = require_field(record, KEY_TYPE)?;
            let id = require_field(record, KEY_ID)?;
            let partition = if ty == OBJECT_TYPE {
                &mut index.objects
            } else {
                &mut index.others
            };
            partition.insert(id.to_string(), ty.to_string());
        }
        debug!(
            "built node-type index: {} objects, {} others",
            index.objects.len(),
            index.others.len()
        );
        Ok(index)
    }

    /// Resolve a referenced id to its node type.
    ///
    /// `object` references resolve strictly against the object partition;
    /// all other references prefer the non-object partition and fall back
    /// to objects (a `parent` may legitimately be an `object` record).
    pub fn resolve(&self, kind: RefKind, id: &str) -> Option<&str> {
        match kind {
            RefKind::Object => self.objects.get(id).map(String::as_str),
            RefKind::Other => self
                .others
                .get(id)
                .or_else(|| self.objects.get(id))
                .map(String::as_str),
        }
    }

    /// Number of records in the object partition
    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    /// Number of records in the non-object partition
    pub fn other_count(&self) -> usize {
        self.others.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(fields: &[(&str, &str)]) -> Record {
        let mut record = Record::new();
        for (key, value) in fields {
            record.insert(*key, *value);
        }
        record
    }

    #[test]
    fn test_partitions_by_object_type() {
        let records = vec![
            record(&[("type", "object"), ("id", "1")]),
            record(&[("type", "shader"), ("id", "2")]),
        ];
        let index = NodeTypeIndex::build(&records).unwrap();

        assert_eq!(index.object_count(), 1);
        assert_eq!(index.other_count(), 1);
        assert_eq!(index.resolve(RefKind::Object, "1"), Some("object"));
        assert_eq!(index.resolve(RefKind::Other, "2"), Some("shader"));
    }

    #[test]
    fn test_other_lookup_falls_back_to_objects() {
        let records = vec![record(&[("type", "object"), ("id", "1")])];
        let index = NodeTypeIndex::build(&records).unwrap();

        assert_eq!(index.resolve(RefKind::Other, "1"), Some("object"));
    }

    #[test]
    fn test_object_lookup_does_not_see_others() {
        let records = vec![record(&[("type", "shader"), ("id", "2")])];
        let index = NodeTypeIndex::build(&records).unwrap();

        assert_eq!(index.resolve(RefKind::Object, "2"), None);
    }

    #[test]
    fn test_missing_type_is_fatal() {
        let records = vec![record(&[("id", "1")])];
        let err = NodeTypeIndex::build(&records).unwrap_err();

        assert!(err.is_diagram());
        assert_eq!(err.field(), Some("type"));
    }

    #[test]
    fn test_node_name_concatenates_type_and_id() {
        let rec = record(&[("type", "cave_camera"), ("id", "12")]);
        assert_eq!(node_name(&rec).unwrap(), "cave_camera_12");
    }

    #[test]
    fn test_node_name_missing_id_is_fatal() {
        let rec = record(&[("type", "camera")]);
        let err = node_name(&rec).unwrap_err();
        assert_eq!(err.field(), Some("id"));
    }
}
