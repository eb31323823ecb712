//! Parse outcomes that do not produce a command.
//!
//! None of these are fatal: they are reported per clause (or per line for
//! [`ParseError::EmptyInput`]) and parsing carries on.

use thiserror::Error;

use crate::command::Command;

/// Why a clause or line produced no command.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The line was absent or only whitespace.
    #[error("empty input")]
    EmptyInput,

    /// At least one word matched no category.
    #[error("{}", describe_unknown(.words))]
    UnknownToken {
        /// Every unrecognized word, in order of appearance
        words: Vec<String>,
        /// What was recognized around them
        partial: Command,
    },

    /// The clause had no verb (including empty clauses around a stray "and").
    #[error("incomplete command: no action")]
    IncompleteCommand {
        /// What was recognized
        partial: Command,
    },
}

fn describe_unknown(words: &[String]) -> String {
    let plural = if words.len() == 1 { "" } else { "s" };
    format!("unknown word{plural}: {}", words.join(", "))
}

impl ParseError {
    /// The roles recognized before the clause was rejected, if any.
    #[must_use]
    pub fn partial(&self) -> Option<&Command> {
        match self {
            Self::EmptyInput => None,
            Self::UnknownToken { partial, .. } | Self::IncompleteCommand { partial } => {
                Some(partial)
            }
        }
    }
}
