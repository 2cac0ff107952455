//! Error types for the HAL navigator.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.
//! Only startup work (building the map, loading files, opening the terminal)
//! produces these errors. Commands typed during a session never fail; they
//! answer with an explanatory message instead.

use std::fmt;

use thiserror::Error;

/// Convenience alias used across the workspace.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for HAL navigator operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Creates an error for a room that could not be added.
    #[must_use]
    pub fn invalid_room(name: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidRoom(name.into()))
    }

    /// Creates an error for a door that could not be added.
    #[must_use]
    pub fn invalid_door(
        name: impl Into<String>,
        from: impl Into<String>,
        to: impl Into<String>,
    ) -> Self {
        Self::new(ErrorKind::InvalidDoor {
            name: name.into(),
            from: from.into(),
            to: to.into(),
        })
    }

    /// Creates an error for a start room missing from the map.
    #[must_use]
    pub fn unknown_start_room(name: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnknownStartRoom(name.into()))
    }

    /// Creates an error for a malformed topology description.
    #[must_use]
    pub fn topology(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Topology(message.into()))
    }

    /// Creates an I/O error.
    #[must_use]
    pub fn io(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Io(message.into()))
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal(message.into()))
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// A room name was empty, not in normal form, or already taken.
    #[error("invalid room: '{0}' is empty, not lowercase with single spaces, or already exists")]
    InvalidRoom(String),

    /// A door name was empty, not in normal form, already taken, or referenced
    /// a missing room.
    #[error("invalid door '{name}' between '{from}' and '{to}'")]
    InvalidDoor {
        /// The door name.
        name: String,
        /// First endpoint.
        from: String,
        /// Second endpoint.
        to: String,
    },

    /// The configured start room does not exist.
    #[error("unknown start room: '{0}'")]
    UnknownStartRoom(String),

    /// The topology source could not be understood.
    #[error("topology error: {0}")]
    Topology(String),

    /// Reading or writing a file or terminal failed.
    #[error("i/o error: {0}")]
    Io(String),

    /// Internal error (should not happen).
    #[error("internal error: {0}")]
    Internal(String),
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// Source file the error came from.
    pub source: Option<String>,
    /// Line number in source.
    pub line: Option<usize>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the source location.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Sets the line.
    #[must_use]
    pub fn with_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(source) = &self.source {
            write!(f, "at {source}")?;
            if let Some(line) = self.line {
                write!(f, ":{line}")?;
            }
        }
        Ok(())
    }
}
