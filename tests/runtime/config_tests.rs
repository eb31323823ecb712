//! Configuration tests.

use std::fs;

use parlance_foundation::ErrorKind;
use parlance_parser::LexemeCategory;
use parlance_runtime::ReplConfig;

#[test]
fn builders_set_every_field() {
    let config = ReplConfig::default()
        .with_prompt("? ")
        .with_max_line_length(40)
        .with_banner(false)
        .with_echo(false)
        .with_lexicon_path("words.lex");

    assert_eq!(config.prompt, "? ");
    assert_eq!(config.max_line_length, 40);
    assert!(!config.show_banner);
    assert!(!config.echo_commands);
    assert_eq!(
        config.lexicon_path.as_deref(),
        Some(std::path::Path::new("words.lex"))
    );
}

#[test]
fn malformed_lexicon_file_reports_line() {
    let path = std::env::temp_dir().join(format!("parlance-bad-{}.lex", std::process::id()));
    fs::write(&path, "verb: take\nwidget: sprocket\n").unwrap();

    let err = ReplConfig::default()
        .with_lexicon_path(&path)
        .load_lexicon()
        .unwrap_err();
    fs::remove_file(&path).unwrap();

    assert!(matches!(err.kind, ErrorKind::Lexicon { line: 2, .. }));
}

#[test]
fn conflicting_lexicon_still_loads() {
    let path = std::env::temp_dir().join(format!("parlance-conflict-{}.lex", std::process::id()));
    fs::write(&path, "noun: fly\nverb: fly\n").unwrap();

    let lexicon = ReplConfig::default()
        .with_lexicon_path(&path)
        .load_lexicon()
        .unwrap();
    fs::remove_file(&path).unwrap();

    assert_eq!(lexicon.classify_word("fly"), LexemeCategory::Verb);
    assert_eq!(lexicon.conflicts().len(), 1);
}
