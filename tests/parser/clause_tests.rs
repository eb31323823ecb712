//! Clause parser tests.
//!
//! Tests for turning a single clause into a command.

use parlance_parser::clause::ClauseParser;
use parlance_parser::{Command, LexemeCategory, Lexicon, ParseError};

fn parse(clause: &str) -> Result<Command, ParseError> {
    ClauseParser::parse(&Lexicon::standard(), clause)
}

#[test]
fn verb_alone_is_complete() {
    assert_eq!(parse("run"), Ok(Command::new().with_action("run")));
}

#[test]
fn every_role_is_filled() {
    assert_eq!(
        parse("give him two silver potion gently"),
        Ok(Command::new()
            .with_action("give")
            .with_indirect_object("him")
            .with_quantity("two")
            .with_quality("silver")
            .with_direct_object("potion")
            .with_mode("gently"))
    );
}

#[test]
fn word_order_does_not_matter() {
    assert_eq!(parse("key take"), parse("take key"));
}

#[test]
fn later_words_replace_earlier_ones() {
    let cmd = parse("eat drink one two red blue dog cat him her softly gently").unwrap();

    assert_eq!(cmd.action.as_deref(), Some("drink"));
    assert_eq!(cmd.quantity.as_deref(), Some("two"));
    assert_eq!(cmd.quality.as_deref(), Some("blue"));
    assert_eq!(cmd.direct_object.as_deref(), Some("cat"));
    assert_eq!(cmd.indirect_object.as_deref(), Some("her"));
    assert_eq!(cmd.mode.as_deref(), Some("gently"));
}

#[test]
fn conjunctions_inside_a_clause_are_discarded() {
    assert_eq!(
        parse("take key then"),
        Ok(Command::new().with_action("take").with_direct_object("key"))
    );
}

#[test]
fn unknown_words_are_all_collected() {
    let err = parse("open the xyzzy lock with plugh").unwrap_err();

    assert_eq!(
        err,
        ParseError::UnknownToken {
            words: vec!["xyzzy".to_string(), "plugh".to_string()],
            partial: Command::new().with_action("open").with_direct_object("lock"),
        }
    );
}

#[test]
fn punctuation_only_is_incomplete() {
    assert_eq!(
        parse("...!?"),
        Err(ParseError::UnknownToken {
            words: vec!["?".to_string()],
            partial: Command::new(),
        })
    );
    assert_eq!(
        parse(". , ;"),
        Err(ParseError::IncompleteCommand {
            partial: Command::new()
        })
    );
}

#[test]
fn injected_lexicon_changes_roles() {
    let lexicon = Lexicon::builder()
        .word(LexemeCategory::Verb, "xyzzy")
        .word(LexemeCategory::Noun, "lamp")
        .build();

    assert_eq!(
        ClauseParser::parse(&lexicon, "xyzzy lamp"),
        Ok(Command::new().with_action("xyzzy").with_direct_object("lamp"))
    );
    assert!(ClauseParser::parse(&lexicon, "take lamp").is_err());
}
