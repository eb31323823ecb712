//! Parlance - Imperative sentence parser for text adventure games
//!
//! This crate re-exports all layers of the Parlance system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 2: parlance_runtime    — Line editor, bounded input, REPL, CLI
//! Layer 1: parlance_parser     — Lexicon, classifier, clause parser, compound splitter
//! Layer 0: parlance_foundation — Core error types
//! ```

pub use parlance_foundation as foundation;
pub use parlance_parser as parser;
pub use parlance_runtime as runtime;
