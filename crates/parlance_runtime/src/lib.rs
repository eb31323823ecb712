//! Line editor, bounded input, REPL and CLI for Parlance.
//!
//! This crate provides:
//! - [`Repl`] - Interactive read-parse-dispatch loop
//! - [`BoundedInput`] - Prompted line reads with a length limit
//! - [`ReplConfig`] - Prompt, limits, output and lexicon settings
//! - CLI argument parsing and execution

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod editor;
pub mod highlight;
pub mod input;
pub mod repl;

pub use config::ReplConfig;
pub use editor::{LineEditor, ReadResult, RustylineEditor};
pub use input::{BoundedInput, InputLine};
pub use repl::{EchoHandler, Repl};
