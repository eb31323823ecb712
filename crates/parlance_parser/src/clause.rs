//! Single clause parsing.
//!
//! Walks the token stream of one clause, classifying every token and
//! filling the command field its category maps to:
//!
//! | Category | Field |
//! |----------|-------|
//! | Verb | `action` |
//! | Adverb | `mode` |
//! | Number | `quantity` |
//! | Adjective | `quality` |
//! | Noun | `direct_object` |
//! | Pronoun | `indirect_object` |
//!
//! Articles, prepositions and conjunctions are consumed without effect.
//! A later word of the same category replaces an earlier one.

use tracing::{debug, trace};

use crate::command::Command;
use crate::error::ParseError;
use crate::lexeme::LexemeCategory;
use crate::lexicon::Lexicon;
use crate::tokenizer::InputTokenizer;

/// Parses one clause into a command.
pub struct ClauseParser;

impl ClauseParser {
    /// Parses a clause.
    ///
    /// An unknown word does not stop the scan: the remaining words are still
    /// classified so the partial command shows everything that was understood.
    ///
    /// # Errors
    ///
    /// - [`ParseError::UnknownToken`] if any word matched no category
    /// - [`ParseError::IncompleteCommand`] otherwise, if no verb was found
    pub fn parse(lexicon: &Lexicon, clause: &str) -> Result<Command, ParseError> {
        let mut command = Command::new();
        let mut unknown = Vec::new();
        let mut tokens = InputTokenizer::tokenize(clause).into_iter();

        loop {
            let word = tokens.next().and_then(|token| token.as_word());
            let category = lexicon.classify(word);
            trace!(?word, %category, "classified token");

            let Some(word) = word else {
                break;
            };

            match category {
                LexemeCategory::Verb => command.action = Some(word.to_string()),
                LexemeCategory::Adverb => command.mode = Some(word.to_string()),
                LexemeCategory::Number => command.quantity = Some(word.to_string()),
                LexemeCategory::Adjective => command.quality = Some(word.to_string()),
                LexemeCategory::Noun => command.direct_object = Some(word.to_string()),
                LexemeCategory::Pronoun => command.indirect_object = Some(word.to_string()),
                LexemeCategory::Article
                | LexemeCategory::Preposition
                | LexemeCategory::Conjunction
                | LexemeCategory::Empty => {}
                LexemeCategory::Unknown => {
                    debug!(word, "unknown word");
                    unknown.push(word.to_string());
                }
                LexemeCategory::End => break,
            }
        }

        if !unknown.is_empty() {
            return Err(ParseError::UnknownToken {
                words: unknown,
                partial: command,
            });
        }

        if !command.is_complete() {
            return Err(ParseError::IncompleteCommand { partial: command });
        }

        Ok(command)
    }
}
