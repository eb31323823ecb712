//! Lexeme categories.
//!
//! The grammatical role class a single word is assigned to.

use std::fmt;

/// The category a word belongs to.
///
/// The nine word categories are listed in [`LexemeCategory::PRIORITY`];
/// `Empty`, `Unknown` and `End` are signals produced by the classifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LexemeCategory {
    /// Action word ("take", "ask")
    Verb,
    /// Manner of the action ("gently")
    Adverb,
    /// "a", "an", "the"
    Article,
    /// Quality of the object ("red")
    Adjective,
    /// Quantity of the object ("three", "3")
    Number,
    /// Common noun, the direct object ("key")
    Noun,
    /// "about", "to", "with"
    Preposition,
    /// Indirect object ("him")
    Pronoun,
    /// "and", "then"
    Conjunction,
    /// An empty token between two adjacent delimiters
    Empty,
    /// A non-empty token that matched no category
    Unknown,
    /// No token at all: the end of the stream
    End,
}

impl LexemeCategory {
    /// Word categories in the order the classifier tests them.
    ///
    /// When a word is listed under several categories the first one here wins.
    pub const PRIORITY: [Self; 9] = [
        Self::Verb,
        Self::Adverb,
        Self::Article,
        Self::Adjective,
        Self::Number,
        Self::Noun,
        Self::Preposition,
        Self::Pronoun,
        Self::Conjunction,
    ];

    /// Returns the lowercase name used in lexicon definitions.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Verb => "verb",
            Self::Adverb => "adverb",
            Self::Article => "article",
            Self::Adjective => "adjective",
            Self::Number => "number",
            Self::Noun => "noun",
            Self::Preposition => "preposition",
            Self::Pronoun => "pronoun",
            Self::Conjunction => "conjunction",
            Self::Empty => "empty",
            Self::Unknown => "unknown",
            Self::End => "end",
        }
    }

    /// Parses a word category name, singular or plural.
    ///
    /// Only the nine word categories have names here; the classifier signals
    /// cannot be declared in a lexicon.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim().to_lowercase();
        let singular = name.strip_suffix('s').unwrap_or(&name);
        Self::PRIORITY
            .into_iter()
            .find(|category| category.name() == name || category.name() == singular)
    }

    /// Returns true for categories that carry a word (not a classifier signal).
    #[must_use]
    pub const fn is_word(self) -> bool {
        !matches!(self, Self::Empty | Self::Unknown | Self::End)
    }
}

impl fmt::Display for LexemeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
