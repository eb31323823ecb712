//! Parsed commands and the executor boundary.
//!
//! All sentences are imperative:
//!
//! ```text
//! <action> [<mode>] [<quantity>] [<quality>] [<direct object>] [<indirect object>]
//!   VERB    ADVERB    NUMBER      ADJECTIVE      NOUN             PRONOUN
//! ```
//!
//! Only the action is required. Articles, prepositions and conjunctions
//! leave no trace in the command.

use std::fmt;

/// A command parsed from one clause.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Command {
    /// Verb
    pub action: Option<String>,
    /// Adverb
    pub mode: Option<String>,
    /// Number
    pub quantity: Option<String>,
    /// Adjective
    pub quality: Option<String>,
    /// Noun
    pub direct_object: Option<String>,
    /// Pronoun
    pub indirect_object: Option<String>,
}

impl Command {
    /// Creates an empty command.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the action.
    #[must_use]
    pub fn with_action(mut self, action: impl Into<String>) -> Self {
        self.action = Some(action.into());
        self
    }

    /// Sets the mode.
    #[must_use]
    pub fn with_mode(mut self, mode: impl Into<String>) -> Self {
        self.mode = Some(mode.into());
        self
    }

    /// Sets the quantity.
    #[must_use]
    pub fn with_quantity(mut self, quantity: impl Into<String>) -> Self {
        self.quantity = Some(quantity.into());
        self
    }

    /// Sets the quality.
    #[must_use]
    pub fn with_quality(mut self, quality: impl Into<String>) -> Self {
        self.quality = Some(quality.into());
        self
    }

    /// Sets the direct object.
    #[must_use]
    pub fn with_direct_object(mut self, object: impl Into<String>) -> Self {
        self.direct_object = Some(object.into());
        self
    }

    /// Sets the indirect object.
    #[must_use]
    pub fn with_indirect_object(mut self, object: impl Into<String>) -> Self {
        self.indirect_object = Some(object.into());
        self
    }

    /// A command is complete once it has an action.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.action.as_deref().is_some_and(|action| !action.is_empty())
    }

    /// Returns true if no field is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields().all(|(_, value)| value.is_none())
    }

    /// Iterates over `(name, value)` for every field, in sentence order.
    pub fn fields(&self) -> impl Iterator<Item = (&'static str, Option<&str>)> {
        [
            ("action", self.action.as_deref()),
            ("mode", self.mode.as_deref()),
            ("quantity", self.quantity.as_deref()),
            ("quality", self.quality.as_deref()),
            ("direct_object", self.direct_object.as_deref()),
            ("indirect_object", self.indirect_object.as_deref()),
        ]
        .into_iter()
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for value in self.fields().filter_map(|(_, value)| value) {
            if !first {
                f.write_str(" ")?;
            }
            f.write_str(value)?;
            first = false;
        }
        Ok(())
    }
}

/// Receives completed commands.
///
/// This is the only thing the parser needs from whatever executes commands.
pub trait CommandHandler {
    /// Executes one completed command.
    fn execute(&mut self, command: Command);
}

impl<F> CommandHandler for F
where
    F: FnMut(Command),
{
    fn execute(&mut self, command: Command) {
        self(command);
    }
}
