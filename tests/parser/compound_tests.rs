//! Compound splitter tests.
//!
//! Tests for normalizing lines and cutting them into clauses.

use parlance_parser::compound::{CompoundSplitter, SEPARATOR, normalize, split_clauses};
use parlance_parser::{Command, Lexicon, ParseError};

#[test]
fn normalize_is_idempotent() {
    for line in ["  Take KEY ", "AND", "\tRun\n", "", "ask HIM about the 3 red birds"] {
        let once = normalize(line);
        assert_eq!(normalize(&once), once);
    }
}

#[test]
fn separator_is_and() {
    assert_eq!(SEPARATOR, "and");
}

#[test]
fn n_separators_give_n_plus_one_clauses() {
    for n in 0..6 {
        let line = vec!["take key"; n + 1].join(" and ");
        assert_eq!(split_clauses(&line).len(), n + 1);
    }
}

#[test]
fn separator_inside_words_does_not_split() {
    for line in ["brandy", "and1", "handle key", "take wand", "android and"] {
        let clauses = split_clauses(line);
        assert_eq!(clauses[0], line.strip_suffix(" and").unwrap_or(line), "{line}");
    }
}

#[test]
fn separator_between_delimiters_splits() {
    assert_eq!(split_clauses("take key.and.run"), vec!["take key.", ".run"]);
    assert_eq!(split_clauses("(and)"), vec!["(", ")"]);
}

#[test]
fn clauses_are_trimmed() {
    assert_eq!(
        split_clauses("take key    and     drop key"),
        vec!["take key", "drop key"]
    );
}

#[test]
fn lone_separator_parses_to_two_incomplete_clauses() {
    let report = CompoundSplitter::parse(&Lexicon::standard(), Some("and")).unwrap();

    assert_eq!(report.dispatched_count(), 0);
    assert_eq!(report.error_count(), 2);
    for clause in report.clauses() {
        assert_eq!(clause.text, "");
        assert_eq!(
            clause.outcome,
            Err(ParseError::IncompleteCommand {
                partial: Command::new()
            })
        );
    }
}

#[test]
fn uppercase_separator_splits_after_normalization() {
    let report = CompoundSplitter::parse(&Lexicon::standard(), Some("TAKE KEY AND RUN")).unwrap();

    assert_eq!(report.dispatched_count(), 2);
    let texts: Vec<_> = report.clauses().iter().map(|c| c.text.as_str()).collect();
    assert_eq!(texts, vec!["take key", "run"]);
}

#[test]
fn then_does_not_split() {
    let report = CompoundSplitter::parse(&Lexicon::standard(), Some("take key then run")).unwrap();

    assert_eq!(report.clauses().len(), 1);
    assert_eq!(
        report.into_commands(),
        vec![Command::new().with_action("run").with_direct_object("key")]
    );
}
