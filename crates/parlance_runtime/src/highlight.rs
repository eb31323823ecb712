//! Word highlighting for the prompt.

use std::borrow::Cow;

use parlance_parser::tokenizer::is_delimiter;
use parlance_parser::{LexemeCategory, Lexicon};

const RESET: &str = "\x1b[0m";

/// Colours each word of the input line by its lexeme category.
pub struct LexemeHighlighter {
    lexicon: Lexicon,
}

impl LexemeHighlighter {
    /// Creates a highlighter over a lexicon.
    #[must_use]
    pub fn new(lexicon: Lexicon) -> Self {
        Self { lexicon }
    }

    /// Replaces the lexicon.
    pub fn set_lexicon(&mut self, lexicon: Lexicon) {
        self.lexicon = lexicon;
    }

    /// Highlight a line of input.
    pub fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        if line.is_empty() {
            return Cow::Borrowed(line);
        }

        let mut result = String::with_capacity(line.len() * 2);
        let mut word_start = None;

        for (i, ch) in line.char_indices() {
            if is_delimiter(ch) {
                if let Some(start) = word_start.take() {
                    self.push_word(&mut result, &line[start..i]);
                }
                result.push(ch);
            } else if word_start.is_none() {
                word_start = Some(i);
            }
        }

        if let Some(start) = word_start {
            self.push_word(&mut result, &line[start..]);
        }

        Cow::Owned(result)
    }

    fn push_word(&self, out: &mut String, word: &str) {
        let category = self.lexicon.classify_word(&word.to_lowercase());
        match colour(category) {
            Some(code) => {
                out.push_str(code);
                out.push_str(word);
                out.push_str(RESET);
            }
            None => out.push_str(word),
        }
    }
}

fn colour(category: LexemeCategory) -> Option<&'static str> {
    match category {
        LexemeCategory::Verb => Some("\x1b[1;32m"), // bold green
        LexemeCategory::Noun => Some("\x1b[36m"),   // cyan
        LexemeCategory::Pronoun => Some("\x1b[35m"), // magenta
        LexemeCategory::Adverb | LexemeCategory::Adjective | LexemeCategory::Number => {
            Some("\x1b[33m") // yellow
        }
        LexemeCategory::Article | LexemeCategory::Preposition | LexemeCategory::Conjunction => {
            Some("\x1b[2m") // dim
        }
        LexemeCategory::Unknown => Some("\x1b[31m"), // red
        LexemeCategory::Empty | LexemeCategory::End => None,
    }
}
