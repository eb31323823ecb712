//! Error types for the Parlance system.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.
//!
//! These are the failures of the surfaces around the parser (terminal input,
//! lexicon definition files, configuration). Clause and line parse outcomes
//! are ordinary values in `parlance_parser` and never become an [`Error`].

use std::fmt;

use thiserror::Error;

/// The main error type for Parlance operations.
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

    /// Creates an I/O error from anything displayable.
    #[must_use]
    pub fn io(message: impl fmt::Display) -> Self {
        Self::new(ErrorKind::Io(message.to_string()))
    }

    /// Creates a lexicon definition error at the given 1-indexed line.
    #[must_use]
    pub fn lexicon(line: usize, message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Lexicon {
            line,
            message: message.into(),
        })
    }

    /// Creates a configuration error.
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Config(message.into()))
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// Reading from the input device failed.
    #[error("input error: {0}")]
    Io(String),

    /// A lexicon definition source could not be read.
    #[error("lexicon error at line {line}: {message}")]
    Lexicon {
        /// Line number (1-indexed).
        line: usize,
        /// Description of the problem.
        message: String,
    },

    /// Invalid runtime or command-line configuration.
    #[error("configuration error: {0}")]
    Config(String),

    /// Internal error (should not happen).
    #[error("internal error: {0}")]
    Internal(String),
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// Source file or stream name.
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

    /// Sets the source name.
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
