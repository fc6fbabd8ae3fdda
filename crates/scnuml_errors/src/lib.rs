//! # scnuml_errors - Error Hub
//!
//! This crate provides the unified error system for the scnuml toolkit:
//!
//! - Centralized error taxonomy and Result aliasing
//! - Per-domain error kinds with rich contextual information
//! - Context helpers for ergonomic error decoration at call sites

pub mod error;

// Re-export commonly used types
pub use error::{ContextExt, Error, Result};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::{
        CliErrorKind, ContextExt, DiagramErrorKind, Error, ParseErrorKind, Result,
    };
}
