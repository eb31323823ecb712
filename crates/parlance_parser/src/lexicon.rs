//! Lexicon of known words and the word classifier.
//!
//! A [`Lexicon`] maps each word category to the set of surface forms that
//! belong to it. It is immutable once built, so one lexicon can be shared
//! by any number of parses.
//!
//! # Definition format
//!
//! [`Lexicon::parse`] reads one category per line:
//!
//! ```text
//! ;; Actions
//! verb: take drop open
//! noun: key lock
//! ```
//!
//! Category names may be singular or plural. Blank lines and lines starting
//! with `;;` are ignored. Words are lowercased.

use std::collections::{BTreeSet, HashMap};

use parlance_foundation::{Error, Result};

use crate::lexeme::LexemeCategory;
use crate::stdlib;

/// A word listed under more than one category.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Conflict {
    /// The surface form
    pub word: String,
    /// Every category listing it, in priority order
    pub categories: Vec<LexemeCategory>,
}

/// Immutable category → word-set table.
#[derive(Clone, Debug, Default)]
pub struct Lexicon {
    tables: HashMap<LexemeCategory, BTreeSet<String>>,
}

impl Lexicon {
    /// Creates an empty lexicon. Every non-empty word classifies as `Unknown`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts building a lexicon.
    #[must_use]
    pub fn builder() -> LexiconBuilder {
        LexiconBuilder::default()
    }

    /// The built-in adventure vocabulary.
    #[must_use]
    pub fn standard() -> Self {
        LexemeCategory::PRIORITY
            .into_iter()
            .fold(Self::builder(), |builder, category| {
                builder.words(category, stdlib::words_for(category).iter().copied())
            })
            .build()
    }

    /// Parses a lexicon definition source.
    ///
    /// # Errors
    ///
    /// Returns a lexicon error carrying the 1-indexed line number when a
    /// line has no `:` or names an unknown category.
    pub fn parse(source: &str) -> Result<Self> {
        let mut builder = Self::builder();

        for (index, raw) in source.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with(";;") {
                continue;
            }

            let Some((name, words)) = line.split_once(':') else {
                return Err(Error::lexicon(
                    index + 1,
                    format!("expected 'category: words', got '{line}'"),
                ));
            };

            let category = LexemeCategory::from_name(name).ok_or_else(|| {
                Error::lexicon(index + 1, format!("unknown category '{}'", name.trim()))
            })?;

            builder = builder.words(category, words.split_whitespace().map(str::to_lowercase));
        }

        Ok(builder.build())
    }

    /// Classifies a token.
    ///
    /// An absent token is `End`, an empty one is `Empty`. Otherwise the
    /// categories are tested in [`LexemeCategory::PRIORITY`] order and the
    /// first one listing the word wins; a word listed nowhere is `Unknown`.
    #[must_use]
    pub fn classify(&self, word: Option<&str>) -> LexemeCategory {
        match word {
            None => LexemeCategory::End,
            Some("") => LexemeCategory::Empty,
            Some(word) => LexemeCategory::PRIORITY
                .into_iter()
                .find(|category| self.contains(*category, word))
                .unwrap_or(LexemeCategory::Unknown),
        }
    }

    /// Classifies a present token.
    #[must_use]
    pub fn classify_word(&self, word: &str) -> LexemeCategory {
        self.classify(Some(word))
    }

    /// Checks whether a category lists a word.
    #[must_use]
    pub fn contains(&self, category: LexemeCategory, word: &str) -> bool {
        self.tables
            .get(&category)
            .is_some_and(|words| words.contains(word))
    }

    /// Returns the words of a category in sorted order.
    pub fn words(&self, category: LexemeCategory) -> impl Iterator<Item = &str> {
        self.tables
            .get(&category)
            .into_iter()
            .flat_map(|words| words.iter().map(String::as_str))
    }

    /// Returns every distinct word in the lexicon, sorted.
    #[must_use]
    pub fn all_words(&self) -> Vec<&str> {
        let words: BTreeSet<&str> = self
            .tables
            .values()
            .flat_map(|words| words.iter().map(String::as_str))
            .collect();
        words.into_iter().collect()
    }

    /// Total number of (category, word) entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tables.values().map(BTreeSet::len).sum()
    }

    /// Returns true if no category lists any word.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Lists every word that appears under more than one category.
    #[must_use]
    pub fn conflicts(&self) -> Vec<Conflict> {
        self.all_words()
            .into_iter()
            .filter_map(|word| {
                let categories: Vec<_> = LexemeCategory::PRIORITY
                    .into_iter()
                    .filter(|category| self.contains(*category, word))
                    .collect();
                (categories.len() > 1).then(|| Conflict {
                    word: word.to_string(),
                    categories,
                })
            })
            .collect()
    }
}

/// Builder for [`Lexicon`].
///
/// Words may be added to several categories; the classifier's priority
/// order decides between them.
#[derive(Clone, Debug, Default)]
pub struct LexiconBuilder {
    tables: HashMap<LexemeCategory, BTreeSet<String>>,
}

impl LexiconBuilder {
    /// Adds words to a category.
    ///
    /// Classifier signals (`Empty`, `Unknown`, `End`) cannot hold words and
    /// are ignored.
    #[must_use]
    pub fn words<I, S>(mut self, category: LexemeCategory, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if !category.is_word() {
            return self;
        }
        let table = self.tables.entry(category).or_default();
        table.extend(
            words
                .into_iter()
                .map(Into::into)
                .filter(|word: &String| !word.is_empty()),
        );
        self
    }

    /// Adds a single word to a category.
    #[must_use]
    pub fn word(self, category: LexemeCategory, word: impl Into<String>) -> Self {
        self.words(category, [word.into()])
    }

    /// Finishes the lexicon.
    #[must_use]
    pub fn build(self) -> Lexicon {
        Lexicon {
            tables: self.tables,
        }
    }
}
