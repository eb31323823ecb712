//! Standard vocabulary for adventure games.
//!
//! Every surface form appears verbatim and in exactly one list.

use crate::lexeme::LexemeCategory;

/// Standard verbs.
pub const VERBS: &[&str] = &[
    "ask", "give", "run", "fly", "put", "eat", "drink", "catch", "take", "drop", "open", "kill",
];

/// Standard adverbs.
pub const ADVERBS: &[&str] = &["gently", "softly", "viciously"];

/// Standard articles.
pub const ARTICLES: &[&str] = &["a", "an", "the"];

/// Standard adjectives (colours and materials).
pub const ADJECTIVES: &[&str] = &[
    "red", "blue", "green", "yellow", "white", "black", "silver",
];

/// Standard numbers, spelled and digits.
pub const NUMBERS: &[&str] = &["one", "two", "three", "four", "five", "1", "2", "3"];

/// Standard nouns.
pub const NOUNS: &[&str] = &[
    "dog", "cat", "birds", "mouse", "potion", "key", "lock", "sword", "monster",
];

/// Standard prepositions.
pub const PREPOSITIONS: &[&str] = &[
    "about", "to", "for", "at", "in", "on", "of", "with", "from",
];

/// Standard pronouns.
pub const PRONOUNS: &[&str] = &["him", "her", "his", "its", "self"];

/// Standard conjunctions.
///
/// Only "and" splits a line into clauses; the rest are discarded in place.
pub const CONJUNCTIONS: &[&str] = &["and", "then"];

/// Returns the standard word list for a category.
///
/// Classifier signals have no words.
#[must_use]
pub const fn words_for(category: LexemeCategory) -> &'static [&'static str] {
    match category {
        LexemeCategory::Verb => VERBS,
        LexemeCategory::Adverb => ADVERBS,
        LexemeCategory::Article => ARTICLES,
        LexemeCategory::Adjective => ADJECTIVES,
        LexemeCategory::Number => NUMBERS,
        LexemeCategory::Noun => NOUNS,
        LexemeCategory::Preposition => PREPOSITIONS,
        LexemeCategory::Pronoun => PRONOUNS,
        LexemeCategory::Conjunction => CONJUNCTIONS,
        LexemeCategory::Empty | LexemeCategory::Unknown | LexemeCategory::End => &[],
    }
}
