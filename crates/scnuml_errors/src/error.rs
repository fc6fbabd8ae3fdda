//! Error types and Result alias for the scnuml toolkit
//!
//! This module contains the unified error system shared by every crate in
//! the workspace, providing hierarchical error types organized by domain
//! with contextual information attached where it is known.

use std::path::PathBuf;
use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Specific kinds of record parse errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ParseErrorKind {
    #[error("Field assignment missing '=' separator")]
    MissingSeparator,
}

/// Specific kinds of diagram generation errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DiagramErrorKind {
    #[error("Required record field missing")]
    MissingField,
    #[error("Reference to unknown record id")]
    DanglingReference,
}

/// Specific kinds of CLI errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CliErrorKind {
    #[error("Invalid command arguments")]
    InvalidArguments,
    #[error("Command execution failed")]
    ExecutionFailed,
    #[error("Output formatting failed")]
    OutputFormatError,
}

/// The main unified error type for the scnuml toolkit
#[derive(Error, Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Error {
    /// File system and I/O related errors
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
        file_path: Option<PathBuf>,
        #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
        source_message: Option<String>,
    },

    /// Scene-file record extraction errors
    #[error("Parse error: {message}")]
    Parse {
        message: String,
        #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
        file_path: Option<PathBuf>,
        #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
        fragment: Option<String>,
        kind: ParseErrorKind,
    },

    /// Diagram generation errors
    #[error("Diagram error: {message}")]
    Diagram {
        message: String,
        #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
        file_path: Option<PathBuf>,
        #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
        field: Option<String>,
        #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
        reference: Option<String>,
        kind: DiagramErrorKind,
    },

    /// CLI and user interface errors
    #[error("CLI error: {message}")]
    Cli {
        message: String,
        #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
        command: Option<String>,
        kind: CliErrorKind,
    },
}

/// Convenient result type for scnuml operations
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait for adding context to Results
pub trait ContextExt<T> {
    /// Add context message to an error
    fn context<C: Into<String>>(self, ctx: C) -> Result<T>;

    /// Add context message via closure (lazy evaluation)
    fn with_context<C, F>(self, f: F) -> Result<T>
    where
        C: Into<String>,
        F: FnOnce() -> C;
}

impl<T, E> ContextExt<T> for std::result::Result<T, E>
where
    E: Into<Error>,
{
    fn context<C: Into<String>>(self, ctx: C) -> Result<T> {
        self.map_err(|e| {
            let mut error = e.into();
            match error {
                Error::Io {
                    ref mut message, ..
                } => {
                    *message = format!("{}: {}", ctx.into(), message);
                }
                Error::Parse {
                    ref mut message, ..
                } => {
                    *message = format!("{}: {}", ctx.into(), message);
                }
                Error::Diagram {
                    ref mut message, ..
                } => {
                    *message = format!("{}: {}", ctx.into(), message);
                }
                Error::Cli {
                    ref mut message, ..
                } => {
                    *message = format!("{}: {}", ctx.into(), message);
                }
            }
            error
        })
    }

    fn with_context<C, F>(self, f: F) -> Result<T>
    where
        C: Into<String>,
        F: FnOnce() -> C,
    {
        self.context(f())
    }
}

// === From implementations for standard library types ===

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: err.to_string(),
            file_path: None,
            source_message: Some(format!("IO Error: {err}")),
        }
    }
}

// === Helper constructors ===

impl Error {
    /// Create a new I/O error with optional context
    pub fn io<M: Into<String>>(message: M) -> Self {
        Self::Io {
            message: message.into(),
            file_path: None,
            source_message: None,
        }
    }

    /// Create a new parse error
    pub fn parse<M: Into<String>>(message: M, kind: ParseErrorKind) -> Self {
        Self::Parse {
            message: message.into(),
            file_path: None,
            fragment: None,
            kind,
        }
    }

    /// Create a new diagram error
    pub fn diagram<M: Into<String>>(message: M, kind: DiagramErrorKind) -> Self {
        Self::Diagram {
            message: message.into(),
            file_path: None,
            field: None,
            reference: None,
            kind,
        }
    }

    /// Create a new CLI error
    pub fn cli<M: Into<String>>(message: M, kind: CliErrorKind) -> Self {
        Self::Cli {
            message: message.into(),
            command: None,
            kind,
        }
    }
}

// === Contextual builder methods ===

impl Error {
    /// Add file path context to any error type that carries one
    pub fn with_file_path<P: Into<PathBuf>>(mut self, path: P) -> Self {
        match &mut self {
            Self::Io { file_path, .. } => *file_path = Some(path.into()),
            Self::Parse { file_path, .. } => *file_path = Some(path.into()),
            Self::Diagram { file_path, .. } => *file_path = Some(path.into()),
            Self::Cli { .. } => {}
        }
        self
    }

    /// Add the offending source fragment to parse errors
    pub fn with_fragment<F: Into<String>>(mut self, fragment: F) -> Self {
        if let Self::Parse { fragment: frag, .. } = &mut self {
            *frag = Some(fragment.into());
        }
        self
    }

    /// Add the offending field name to diagram errors
    pub fn with_field<F: Into<String>>(mut self, field: F) -> Self {
        if let Self::Diagram { field: fld, .. } = &mut self {
            *fld = Some(field.into());
        }
        self
    }

    /// Add the unresolved reference id to diagram errors
    pub fn with_reference<R: Into<String>>(mut self, reference: R) -> Self {
        if let Self::Diagram { reference: id, .. } = &mut self {
            *id = Some(reference.into());
        }
        self
    }

    /// Add command context to CLI errors
    pub fn with_command<C: Into<String>>(mut self, command: C) -> Self {
        if let Self::Cli { command: cmd, .. } = &mut self {
            *cmd = Some(command.into());
        }
        self
    }
}

// === Type checking methods ===

impl Error {
    /// Check if this error is an I/O error
    pub fn is_io(&self) -> bool {
        matches!(self, Self::Io { .. })
    }

    /// Check if this error is a parse error
    pub fn is_parse(&self) -> bool {
        matches!(self, Self::Parse { .. })
    }

    /// Check if this error is a diagram error
    pub fn is_diagram(&self) -> bool {
        matches!(self, Self::Diagram { .. })
    }

    /// Check if this error is a CLI error
    pub fn is_cli(&self) -> bool {
        matches!(self, Self::Cli { .. })
    }
}

// === Context accessor methods ===

impl Error {
    /// Get the file path associated with this error, if any
    pub fn file_path(&self) -> Option<&PathBuf> {
        match self {
            Self::Io { file_path, .. } => file_path.as_ref(),
            Self::Parse { file_path, .. } => file_path.as_ref(),
            Self::Diagram { file_path, .. } => file_path.as_ref(),
            Self::Cli { .. } => None,
        }
    }

    /// Get the offending field name for diagram errors, if any
    pub fn field(&self) -> Option<&str> {
        if let Self::Diagram { field, .. } = self {
            field.as_deref()
        } else {
            None
        }
    }

    /// Get the unresolved reference id for diagram errors, if any
    pub fn reference(&self) -> Option<&str> {
        if let Self::Diagram { reference, .. } = self {
            reference.as_deref()
        } else {
            None
        }
    }
}

// === User-friendly message generation ===

impl Error {
    /// Generate a user-friendly error message with context
    pub fn user_message(&self) -> String {
        match self {
            Self::Io {
                message, file_path, ..
            } => {
                if let Some(path) = file_path {
                    format!("File operation failed on '{}': {}", path.display(), message)
                } else {
                    format!("File operation failed: {message}")
                }
            }
            Self::Parse {
                message,
                file_path,
                fragment,
                ..
            } => {
                let mut msg = format!("Scene file parsing failed: {message}");
                if let Some(frag) = fragment {
                    msg.push_str(&format!(" (fragment: {frag:?})"));
                }
                if let Some(path) = file_path {
                    msg.push_str(&format!(" (file: {})", path.display()));
                }
                msg
            }
            Self::Diagram {
                message,
                file_path,
                field,
                reference,
                ..
            } => {
                let mut msg = format!("Diagram generation failed: {message}");
                if let Some(field) = field {
                    msg.push_str(&format!(" (field: {field})"));
                }
                if let Some(id) = reference {
                    msg.push_str(&format!(" (id: {id})"));
                }
                if let Some(path) = file_path {
                    msg.push_str(&format!(" (file: {})", path.display()));
                }
                msg
            }
            Self::Cli {
                message, command, ..
            } => {
                if let Some(cmd) = command {
                    format!("Command '{cmd}' failed: {message}")
                } else {
                    format!("Command failed: {message}")
                }
            }
        }
    }
}
