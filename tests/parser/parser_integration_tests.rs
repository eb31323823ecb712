//! Parser integration tests.
//!
//! End-to-end tests from raw line to dispatched commands.

use parlance_parser::{Command, CommandHandler, LexemeCategory, Lexicon, ParseError, SentenceParser};

fn commands(line: &str) -> Vec<Command> {
    SentenceParser::default()
        .parse_line(Some(line))
        .map(parlance_parser::LineReport::into_commands)
        .unwrap_or_default()
}

// =============================================================================
// Single Clauses
// =============================================================================

#[test]
fn take_key() {
    assert_eq!(
        commands("take key"),
        vec![Command::new().with_action("take").with_direct_object("key")]
    );
}

#[test]
fn every_role_from_one_clause() {
    assert_eq!(
        commands("ask him about the three red birds"),
        vec![
            Command::new()
                .with_action("ask")
                .with_indirect_object("him")
                .with_quantity("three")
                .with_quality("red")
                .with_direct_object("birds")
        ]
    );
}

#[test]
fn case_and_padding_are_ignored() {
    assert_eq!(commands("   TAKE the Key!  "), commands("take the key"));
}

#[test]
fn unknown_word_dispatches_nothing() {
    let report = SentenceParser::default().parse_line(Some("xyzzy")).unwrap();

    assert_eq!(report.dispatched_count(), 0);
    assert!(matches!(
        report.errors().next(),
        Some(ParseError::UnknownToken { words, .. }) if words == &["xyzzy".to_string()]
    ));
}

// =============================================================================
// Compound Lines
// =============================================================================

#[test]
fn two_clauses_in_order() {
    assert_eq!(
        commands("take sword and kill monster viciously"),
        vec![
            Command::new().with_action("take").with_direct_object("sword"),
            Command::new()
                .with_action("kill")
                .with_direct_object("monster")
                .with_mode("viciously"),
        ]
    );
}

#[test]
fn lone_and_dispatches_nothing() {
    let report = SentenceParser::default().parse_line(Some("and")).unwrap();

    assert_eq!(report.clauses().len(), 2);
    assert_eq!(report.dispatched_count(), 0);
}

#[test]
fn trailing_and_keeps_first_clause() {
    let report = SentenceParser::default().parse_line(Some("take key and")).unwrap();

    assert_eq!(report.dispatched_count(), 1);
    assert_eq!(report.error_count(), 1);
    assert!(matches!(
        report.clauses()[1].outcome,
        Err(ParseError::IncompleteCommand { .. })
    ));
}

#[test]
fn failed_clause_does_not_block_later_ones() {
    assert_eq!(
        commands("xyzzy and gently and drop key"),
        vec![Command::new().with_action("drop").with_direct_object("key")]
    );
}

#[test]
fn empty_input() {
    let parser = SentenceParser::default();

    assert_eq!(parser.parse_line(Some("")), Err(ParseError::EmptyInput));
    assert_eq!(parser.parse_line(Some(" \t ")), Err(ParseError::EmptyInput));
    assert_eq!(parser.parse_line(None), Err(ParseError::EmptyInput));
}

// =============================================================================
// Dispatch
// =============================================================================

#[derive(Default)]
struct Journal {
    seen: Vec<Command>,
}

impl CommandHandler for Journal {
    fn execute(&mut self, command: Command) {
        self.seen.push(command);
    }
}

#[test]
fn dispatch_reaches_handler_in_order() {
    let mut journal = Journal::default();
    let report = SentenceParser::default()
        .dispatch_line(Some("eat potion and xyzzy and drink potion"), &mut journal)
        .unwrap();

    let actions: Vec<_> = journal.seen.iter().filter_map(|c| c.action.as_deref()).collect();
    assert_eq!(actions, vec!["eat", "drink"]);
    assert_eq!(report.dispatched_count(), 2);
}

#[test]
fn closure_as_handler() {
    let mut count = 0;
    let mut handler = |_: Command| count += 1;
    SentenceParser::default()
        .dispatch_line(Some("run and fly and and"), &mut handler)
        .unwrap();

    assert_eq!(count, 2);
}

#[test]
fn dispatch_of_empty_line_calls_nothing() {
    let mut journal = Journal::default();
    let result = SentenceParser::default().dispatch_line(None, &mut journal);

    assert_eq!(result, Err(ParseError::EmptyInput));
    assert!(journal.seen.is_empty());
}

// =============================================================================
// Custom Vocabulary
// =============================================================================

#[test]
fn custom_lexicon_end_to_end() {
    let lexicon = Lexicon::parse(
        ";; a tiny vocabulary\n\
         verb: toma suelta\n\
         noun: llave\n\
         conjunction: and\n",
    )
    .unwrap();
    let parser = SentenceParser::new(lexicon);

    assert_eq!(parser.classify(Some("llave")), LexemeCategory::Noun);
    assert_eq!(
        parser.parse_line(Some("toma llave and suelta llave")).unwrap().into_commands(),
        vec![
            Command::new().with_action("toma").with_direct_object("llave"),
            Command::new().with_action("suelta").with_direct_object("llave"),
        ]
    );
}
