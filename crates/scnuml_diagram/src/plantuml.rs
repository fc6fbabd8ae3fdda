//! PlantUML class-diagram script generation
//!
//! One class per record, one directed arrow per recognized cross-reference
//! field. The script is assembled fully in memory; any failed lookup
//! aborts before a single byte reaches disk.

use crate::index::{NodeTypeIndex, node_name};
use crate::palette::{DEFAULT_NODE_COLOR, NODE_COLORS};
use crate::refs::{Direction, REFERENCE_FIELDS, RefSpec};
use log::debug;
use scnuml_errors::error::{DiagramErrorKind, Error, Result};
use scnuml_parser::Record;
use scnuml_parser::record::{KEY_COMMENT, KEY_ID, KEY_PARENT, KEY_TYPE};
use std::fmt::Write;

/// Renders a record sequence into one PlantUML class-diagram script.
///
/// The color palette and the reference-field table are immutable
/// configuration owned by the renderer; there is no process-wide state.
pub struct DiagramRenderer {
    palette: &'static [(&'static str, &'static str)],
    fallback_color: &'static str,
    reference_fields: &'static [RefSpec],
}

impl Default for DiagramRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl DiagramRenderer {
    /// Create a renderer with the standard palette and reference table
    pub fn new() -> Self {
        DiagramRenderer {
            palette: &NODE_COLORS,
            fallback_color: DEFAULT_NODE_COLOR,
            reference_fields: &REFERENCE_FIELDS,
        }
    }

    /// Render the full diagram script for a record sequence
    pub fn render(&self, records: &[Record]) -> Result<String> {
        let index = NodeTypeIndex::build(records)?;

        let mut script = String::new();
        script.push_str("@startuml class\n\n");
        script.push_str("hide circle\n\n");

        let mut edge_count = 0usize;
        for record in records {
            let name = node_name(record)?;
            self.write_node(&mut script, &name, record);
            edge_count += self.write_edges(&mut script, &name, record, &index)?;
        }

        script.push_str("@enduml\n");
        debug!("rendered {} nodes and {edge_count} edges", records.len());
        Ok(script)
    }

    fn color_for(&self, node_type: &str) -> &'static str {
        self.palette
            .iter()
            .find(|(ty, _)| *ty == node_type)
            .map(|(_, color)| *color)
            .unwrap_or(self.fallback_color)
    }

    /// Emit one class declaration with the record's displayable fields
    fn write_node(&self, script: &mut String, name: &str, record: &Record) {
        // node_name() already checked that `type` is present
        let color = self.color_for(record.record_type().unwrap_or_default());

        let _ = writeln!(script, "class {name} {color} {{");
        for (key, value) in record.iter() {
            match key {
                // Structural fields, not displayable attributes
                KEY_TYPE | KEY_ID | KEY_PARENT => {}
                KEY_COMMENT => {
                    for line in value.lines() {
                        let _ = writeln!(script, "  .. {line} ..");
                    }
                }
                _ => {
                    let _ = writeln!(script, "  {key}: {value}");
                }
            }
        }
        script.push_str("}\n\n");
    }

    /// Emit one directed arrow per recognized reference field present
    fn write_edges(
        &self,
        script: &mut String,
        name: &str,
        record: &Record,
        index: &NodeTypeIndex,
    ) -> Result<usize> {
        let mut written = 0usize;
        for spec in self.reference_fields {
            let Some(target_id) = record.get(spec.field) else {
                continue;
            };
            let target_type = index.resolve(spec.kind, target_id).ok_or_else(|| {
                Error::diagram(
                    format!(
                        "reference field '{}' on {name} points at unknown id '{target_id}'",
                        spec.field
                    ),
                    DiagramErrorKind::DanglingReference,
                )
                .with_field(spec.field)
                .with_reference(target_id)
            })?;
            let target = format!("{target_type}_{target_id}");
            match spec.direction {
                Direction::Outgoing => {
                    let _ = writeln!(script, "{name} --> {target}");
                }
                Direction::Incoming => {
                    let _ = writeln!(script, "{target} --> {name}");
                }
            }
            written += 1;
        }
        if written > 0 {
            script.push('\n');
        }
        Ok(written)
    }
}
