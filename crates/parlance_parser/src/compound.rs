//! Compound sentence splitting.
//!
//! A line such as "take sword and kill monster viciously" holds several
//! clauses joined by [`SEPARATOR`]. The line is normalized once, cut at
//! every standalone separator, and each clause is parsed on its own.

use tracing::debug;

use crate::clause::ClauseParser;
use crate::command::Command;
use crate::error::ParseError;
use crate::lexicon::Lexicon;
use crate::tokenizer::is_delimiter;

/// The conjunction that joins clauses.
pub const SEPARATOR: &str = "and";

/// Lowercases and trims a line.
#[must_use]
pub fn normalize(line: &str) -> String {
    line.to_lowercase().trim().to_string()
}

/// Cuts a normalized line into trimmed clauses.
///
/// Only a standalone separator splits: "band" or "android" do not. `N`
/// separators always give `N + 1` clauses, some possibly empty.
#[must_use]
pub fn split_clauses(line: &str) -> Vec<&str> {
    let mut clauses = Vec::new();
    let mut start = 0;

    for (at, _) in line.match_indices(SEPARATOR) {
        let end = at + SEPARATOR.len();
        let bounded_before = line[..at].chars().next_back().is_none_or(is_delimiter);
        let bounded_after = line[end..].chars().next().is_none_or(is_delimiter);

        if bounded_before && bounded_after {
            clauses.push(line[start..at].trim());
            start = end;
        }
    }

    clauses.push(line[start..].trim());
    clauses
}

/// One clause of a line and what came of it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClauseReport {
    /// The clause as it was parsed
    pub text: String,
    /// The command, or why there is none
    pub outcome: Result<Command, ParseError>,
}

/// Outcomes of every clause of one line, in order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LineReport {
    clauses: Vec<ClauseReport>,
}

impl LineReport {
    /// All clause reports.
    #[must_use]
    pub fn clauses(&self) -> &[ClauseReport] {
        &self.clauses
    }

    /// The completed commands, in clause order.
    pub fn commands(&self) -> impl Iterator<Item = &Command> {
        self.clauses
            .iter()
            .filter_map(|clause| clause.outcome.as_ref().ok())
    }

    /// Why each rejected clause was rejected.
    pub fn errors(&self) -> impl Iterator<Item = &ParseError> {
        self.clauses
            .iter()
            .filter_map(|clause| clause.outcome.as_ref().err())
    }

    /// Number of clauses that produced a command.
    #[must_use]
    pub fn dispatched_count(&self) -> usize {
        self.commands().count()
    }

    /// Number of clauses that produced no command.
    #[must_use]
    pub fn error_count(&self) -> usize {
        self.errors().count()
    }

    /// Consumes the report, keeping only the completed commands.
    #[must_use]
    pub fn into_commands(self) -> Vec<Command> {
        self.clauses
            .into_iter()
            .filter_map(|clause| clause.outcome.ok())
            .collect()
    }
}

/// Parses whole lines.
pub struct CompoundSplitter;

impl CompoundSplitter {
    /// Parses a line of any number of clauses.
    ///
    /// A rejected clause never stops the ones after it.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::EmptyInput`] if the line is absent or blank.
    pub fn parse(lexicon: &Lexicon, line: Option<&str>) -> Result<LineReport, ParseError> {
        let Some(line) = line.filter(|line| !line.trim().is_empty()) else {
            return Err(ParseError::EmptyInput);
        };

        let normalized = normalize(line);
        let clauses = split_clauses(&normalized)
            .into_iter()
            .map(|clause| ClauseReport {
                text: clause.to_string(),
                outcome: ClauseParser::parse(lexicon, clause),
            })
            .collect::<Vec<_>>();

        let report = LineReport { clauses };
        debug!(
            clauses = report.clauses.len(),
            dispatched = report.dispatched_count(),
            errors = report.error_count(),
            "parsed line"
        );
        Ok(report)
    }
}
