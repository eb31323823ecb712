//! Bounded line input.
//!
//! Reads one line with a prompt and checks it against a maximum length
//! before the parser ever sees it.

use crate::editor::{LineEditor, ReadResult};
use parlance_foundation::Result;

/// Default prompt shown before each line.
pub const DEFAULT_PROMPT: &str = " > ";

/// Default maximum line length, in characters.
pub const DEFAULT_MAX_LENGTH: usize = 80;

/// A line read from the input device.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InputLine {
    /// A line within bounds.
    Line(String),
    /// The line exceeded the maximum length and was cut to it.
    TooLong {
        /// The first `max_length` characters
        truncated: String,
    },
    /// Nothing but whitespace (or an interrupted read).
    Empty,
    /// No more input is available.
    Eof,
}

impl InputLine {
    /// The text to parse, if any.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Line(line) | Self::TooLong { truncated: line } => Some(line.as_str()),
            Self::Empty | Self::Eof => None,
        }
    }
}

/// Reads lines of bounded length.
#[derive(Clone, Copy, Debug)]
pub struct BoundedInput {
    max_length: usize,
}

impl Default for BoundedInput {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_LENGTH)
    }
}

impl BoundedInput {
    /// Creates a reader accepting at most `max_length` characters per line.
    #[must_use]
    pub const fn new(max_length: usize) -> Self {
        Self { max_length }
    }

    /// The maximum accepted length.
    #[must_use]
    pub const fn max_length(&self) -> usize {
        self.max_length
    }

    /// Reads one line from `editor`.
    ///
    /// # Errors
    ///
    /// Returns an error if the editor fails to read.
    pub fn read<E: LineEditor + ?Sized>(&self, editor: &mut E, prompt: &str) -> Result<InputLine> {
        Ok(match editor.read_line(prompt)? {
            ReadResult::Line(line) => self.bound(line),
            ReadResult::Interrupted => InputLine::Empty,
            ReadResult::Eof => InputLine::Eof,
        })
    }

    /// Checks a raw line against the bounds.
    #[must_use]
    pub fn bound(&self, line: String) -> InputLine {
        if line.trim().is_empty() {
            return InputLine::Empty;
        }

        match line.char_indices().nth(self.max_length) {
            Some((cut, _)) => InputLine::TooLong {
                truncated: line[..cut].to_string(),
            },
            None => InputLine::Line(line),
        }
    }
}
