//! # scnuml_diagram
//!
//! Diagram generation engine for parsed `.scn` scene graphs.
//!
//! Each record becomes one colored PlantUML class node; a fixed table of
//! recognized cross-reference fields induces directed edges between
//! nodes. The whole script is assembled in memory and returned as a
//! single string, so a failing lookup never leaves a partial artifact
//! behind.
//!
//! ## Example
//!
//! ```rust,no_run
//! use scnuml_diagram::DiagramRenderer;
//! use scnuml_parser::from_path;
//!
//! # fn main() -> scnuml_diagram::Result<()> {
//! let records = from_path("diablo_scene.scn")?;
//! let script = DiagramRenderer::new().render(&records)?;
//! std::fs::write("scene_graph.puml", script)?;
//! # Ok(())
//! # }
//! ```

pub mod index;
pub mod palette;
pub mod plantuml;
pub mod refs;

// Re-export key types
pub use index::{NodeTypeIndex, node_name};
pub use palette::{DEFAULT_NODE_COLOR, NODE_COLORS, color_for};
pub use plantuml::DiagramRenderer;
pub use refs::{Direction, REFERENCE_FIELDS, RefKind, RefSpec};

// Re-export from dependencies
pub use scnuml_errors::error::{Error, Result};
