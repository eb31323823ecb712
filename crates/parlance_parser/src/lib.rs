//! Imperative sentence parser for text adventure games.
//!
//! This crate transforms player input like "take sword and kill monster
//! viciously" into one command per clause for whatever executes them.
//!
//! # Architecture
//!
//! ```text
//! "Take sword and kill monster viciously"
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ COMPOUND        │  → "take sword", "kill monster viciously"
//! │ SPLITTER        │
//! └─────────────────┘
//!          │  (each clause)
//!          ▼
//! ┌─────────────────┐
//! │   TOKENIZER     │  → ["kill", "monster", "viciously", End]
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ LEXICON         │  → [Verb, Noun, Adverb, End]
//! │ CLASSIFIER      │
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ CLAUSE          │  → Command { action: kill, direct_object: monster,
//! │ PARSER          │              mode: viciously }
//! └─────────────────┘
//!          │
//!          ▼
//!    CommandHandler
//! ```
//!
//! # Modules
//!
//! - [`lexeme`] - Word categories and their priority order
//! - [`lexicon`] - Word tables and the classifier
//! - [`stdlib`] - Standard vocabulary
//! - [`tokenizer`] - Split a clause into tokens
//! - [`command`] - The parsed command and the executor boundary
//! - [`clause`] - Single clause parsing
//! - [`compound`] - Line normalization and clause splitting
//! - [`parser`] - Pipeline orchestration
//! - [`error`] - Outcomes that produce no command

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod clause;
pub mod command;
pub mod compound;
pub mod error;
pub mod lexeme;
pub mod lexicon;
pub mod parser;
pub mod stdlib;
pub mod tokenizer;

// Re-export main types for convenience
pub use command::{Command, CommandHandler};
pub use compound::{ClauseReport, LineReport};
pub use error::ParseError;
pub use lexeme::LexemeCategory;
pub use lexicon::{Conflict, Lexicon, LexiconBuilder};
pub use parser::SentenceParser;
