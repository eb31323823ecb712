//! Bounded input tests.

use crate::ScriptedEditor;
use parlance_runtime::input::{DEFAULT_MAX_LENGTH, DEFAULT_PROMPT};
use parlance_runtime::{BoundedInput, InputLine, ReadResult};

#[test]
fn defaults() {
    assert_eq!(DEFAULT_PROMPT, " > ");
    assert_eq!(BoundedInput::default().max_length(), DEFAULT_MAX_LENGTH);
    assert_eq!(DEFAULT_MAX_LENGTH, 80);
}

#[test]
fn read_passes_prompt_to_editor() {
    let mut editor = ScriptedEditor::lines(&["take key"]);
    let line = BoundedInput::default().read(&mut editor, "? ").unwrap();

    assert_eq!(line, InputLine::Line("take key".to_string()));
    assert_eq!(editor.prompts, vec!["? "]);
}

#[test]
fn read_maps_every_editor_outcome() {
    let mut editor = ScriptedEditor::new(vec![
        ReadResult::Line("   ".to_string()),
        ReadResult::Interrupted,
        ReadResult::Line("x".repeat(100)),
    ]);
    let input = BoundedInput::default();

    assert_eq!(input.read(&mut editor, ">").unwrap(), InputLine::Empty);
    assert_eq!(input.read(&mut editor, ">").unwrap(), InputLine::Empty);
    assert_eq!(
        input.read(&mut editor, ">").unwrap(),
        InputLine::TooLong {
            truncated: "x".repeat(80)
        }
    );
    assert_eq!(input.read(&mut editor, ">").unwrap(), InputLine::Eof);
}

#[test]
fn truncated_text_is_still_parseable() {
    let line = BoundedInput::new(12).bound("drop the key and run".to_string());

    assert_eq!(line.text(), Some("drop the key"));
}
