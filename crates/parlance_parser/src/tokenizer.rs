//! Input tokenization.
//!
//! Converts one clause into a stream of tokens borrowed from it.

/// Characters that separate words, besides whitespace.
pub const DELIMITERS: &str = " .,;:!-'\"(){}[]<>";

/// Returns true if `ch` ends a word.
#[must_use]
pub fn is_delimiter(ch: char) -> bool {
    ch.is_whitespace() || DELIMITERS.contains(ch)
}

/// A token from a clause.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputToken<'a> {
    /// A word, exactly as it appears in the clause
    Word(&'a str),
    /// Nothing between two adjacent delimiters
    Empty,
    /// End of input
    End,
}

impl<'a> InputToken<'a> {
    /// The token as the classifier sees it: `None` for the end of the
    /// stream, `Some("")` for an empty token.
    #[must_use]
    pub const fn as_word(self) -> Option<&'a str> {
        match self {
            Self::Word(word) => Some(word),
            Self::Empty => Some(""),
            Self::End => None,
        }
    }
}

/// Tokenizes clauses.
pub struct InputTokenizer;

impl InputTokenizer {
    /// Tokenizes a clause.
    ///
    /// - Every delimiter is a boundary, so adjacent delimiters yield
    ///   [`InputToken::Empty`]
    /// - Case is left untouched
    /// - The stream always ends with a single [`InputToken::End`]
    #[must_use]
    pub fn tokenize(clause: &str) -> Vec<InputToken<'_>> {
        let mut tokens: Vec<_> = clause
            .split(is_delimiter)
            .map(|piece| {
                if piece.is_empty() {
                    InputToken::Empty
                } else {
                    InputToken::Word(piece)
                }
            })
            .collect();

        tokens.push(InputToken::End);
        tokens
    }

    /// Returns only the words of a clause.
    pub fn words(clause: &str) -> impl Iterator<Item = &str> {
        clause.split(is_delimiter).filter(|piece| !piece.is_empty())
    }
}
