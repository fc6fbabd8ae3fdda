//! # scnuml_parser
//!
//! Record extraction engine for `.scn` scene-description files.
//!
//! A scene file is a flat sequence of brace-delimited bodies of
//! `key=value;` assignments, each optionally preceded by a run of
//! `//`-delimited comment segments:
//!
//! ```text
//! // root transform //
//! {
//!     type = transform;
//!     id = 1;
//! }
//! { type=geometry; id=2; parent=1; }
//! ```
//!
//! Whitespace, newlines and tabs are insignificant. Parsing is lenient:
//! anything outside a comment-run/body span is ignored, and an empty body
//! yields an empty record.
//!
//! ## Example
//!
//! ```rust,no_run
//! use scnuml_parser::from_path;
//!
//! # fn main() -> scnuml_parser::Result<()> {
//! let records = from_path("diablo_scene.scn")?;
//! for record in &records {
//!     println!("{record}");
//! }
//! # Ok(())
//! # }
//! ```

pub mod extract;
pub mod record;

// Re-export key types and entry points
pub use extract::{from_path, from_str};
pub use record::Record;

// Re-export from dependencies
pub use scnuml_errors::error::{Error, Result};
