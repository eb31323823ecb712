//! Shared error types for Parlance.
//!
//! This crate provides:
//! - [`Error`] - Rich error types with context
//! - [`ErrorKind`] - Categorized failures of the surfaces around the parser
//! - [`Result`] - Convenience alias

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;

pub use error::{Error, ErrorContext, ErrorKind};

/// Result type alias using Parlance's Error type.
pub type Result<T> = std::result::Result<T, Error>;
