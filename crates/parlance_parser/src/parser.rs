//! Main parser pipeline.
//!
//! Orchestrates the full flow from raw line to dispatched commands.

use tracing::debug;

use crate::clause::ClauseParser;
use crate::command::{Command, CommandHandler};
use crate::compound::{CompoundSplitter, LineReport};
use crate::error::ParseError;
use crate::lexeme::LexemeCategory;
use crate::lexicon::Lexicon;

/// The sentence parser.
///
/// Holds nothing but its lexicon, so a single parser can serve any number
/// of sessions.
#[derive(Clone, Debug)]
pub struct SentenceParser {
    lexicon: Lexicon,
}

impl Default for SentenceParser {
    fn default() -> Self {
        Self::new(Lexicon::standard())
    }
}

impl SentenceParser {
    /// Creates a new parser with the given lexicon.
    #[must_use]
    pub fn new(lexicon: Lexicon) -> Self {
        Self { lexicon }
    }

    /// Gets a reference to the lexicon.
    #[must_use]
    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Classifies a single token.
    #[must_use]
    pub fn classify(&self, word: Option<&str>) -> LexemeCategory {
        self.lexicon.classify(word)
    }

    /// Parses a single clause, without normalization or splitting.
    ///
    /// # Errors
    ///
    /// See [`ClauseParser::parse`].
    pub fn parse_clause(&self, clause: &str) -> Result<Command, ParseError> {
        ClauseParser::parse(&self.lexicon, clause)
    }

    /// Parses a line into per-clause outcomes.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::EmptyInput`] if the line is absent or blank.
    pub fn parse_line(&self, line: Option<&str>) -> Result<LineReport, ParseError> {
        CompoundSplitter::parse(&self.lexicon, line)
    }

    /// Parses a line and hands every completed command to `handler`, in
    /// clause order.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::EmptyInput`] if the line is absent or blank.
    pub fn dispatch_line<H>(&self, line: Option<&str>, handler: &mut H) -> Result<LineReport, ParseError>
    where
        H: CommandHandler + ?Sized,
    {
        let report = self.parse_line(line)?;

        for command in report.commands() {
            debug!(
                action = command.action.as_deref(),
                mode = command.mode.as_deref(),
                quantity = command.quantity.as_deref(),
                quality = command.quality.as_deref(),
                direct_object = command.direct_object.as_deref(),
                indirect_object = command.indirect_object.as_deref(),
                "dispatching command"
            );
            handler.execute(command.clone());
        }

        Ok(report)
    }
}
