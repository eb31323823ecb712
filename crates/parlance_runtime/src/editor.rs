//! Terminal line editing.
//!
//! The REPL only talks to [`LineEditor`]; [`RustylineEditor`] backs it with
//! rustyline, completing and colouring words from the active lexicon.

use crate::highlight::LexemeHighlighter;
use parlance_foundation::{Error, Result};
use parlance_parser::Lexicon;
use parlance_parser::tokenizer::is_delimiter;
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::{CmdKind, Highlighter};
use rustyline::hint::HistoryHinter;
use rustyline::history::DefaultHistory;
use rustyline::{Completer, Config, Context, Editor, Helper, Hinter, Validator};
use std::borrow::Cow;

/// What a single read produced.
#[derive(Debug)]
pub enum ReadResult {
    /// The raw line, without its newline.
    Line(String),
    /// Ctrl+C: the current line was abandoned.
    Interrupted,
    /// Ctrl+D or closed input.
    Eof,
}

/// Source of prompted input lines.
///
/// Tests drive the REPL with a scripted implementation.
pub trait LineEditor {
    /// Shows `prompt` and reads one line.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the terminal cannot be read.
    fn read_line(&mut self, prompt: &str) -> Result<ReadResult>;

    /// Remembers a line for recall.
    fn add_history(&mut self, line: &str);

    /// Replace the lexicon used for completion and highlighting.
    fn set_lexicon(&mut self, lexicon: &Lexicon);
}

/// Helper for rustyline that provides completion, hints and highlighting.
#[derive(Helper, Completer, Hinter, Validator)]
struct ParlanceHelper {
    #[rustyline(Completer)]
    completer: WordCompleter,
    #[rustyline(Hinter)]
    hinter: HistoryHinter,
    highlighter: LexemeHighlighter,
}

impl Highlighter for ParlanceHelper {
    fn highlight<'l>(&self, line: &'l str, pos: usize) -> Cow<'l, str> {
        self.highlighter.highlight(line, pos)
    }

    fn highlight_prompt<'b, 's: 'b, 'p: 'b>(
        &'s self,
        prompt: &'p str,
        default: bool,
    ) -> Cow<'b, str> {
        if default {
            Cow::Owned(format!("\x1b[1m{prompt}\x1b[0m"))
        } else {
            Cow::Borrowed(prompt)
        }
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _kind: CmdKind) -> bool {
        true
    }

    fn highlight_hint<'h>(&self, hint: &'h str) -> Cow<'h, str> {
        Cow::Owned(format!("\x1b[2m{hint}\x1b[0m"))
    }
}

/// Completes the word under the cursor from the lexicon.
struct WordCompleter {
    words: Vec<String>,
}

impl WordCompleter {
    fn new(lexicon: &Lexicon) -> Self {
        Self {
            words: lexicon.all_words().into_iter().map(String::from).collect(),
        }
    }

    fn candidates(&self, prefix: &str) -> Vec<Pair> {
        let prefix = prefix.to_lowercase();
        self.words
            .iter()
            .filter(|word| word.starts_with(&prefix))
            .map(|word| Pair {
                display: word.clone(),
                replacement: word.clone(),
            })
            .collect()
    }
}

impl Completer for WordCompleter {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        // Start of the word under the cursor
        let start = line[..pos]
            .char_indices()
            .rev()
            .find(|&(_, ch)| is_delimiter(ch))
            .map_or(0, |(i, ch)| i + ch.len_utf8());

        Ok((start, self.candidates(&line[start..pos])))
    }
}

/// [`LineEditor`] on top of rustyline.
pub struct RustylineEditor {
    editor: Editor<ParlanceHelper, DefaultHistory>,
}

impl RustylineEditor {
    /// Creates a new rustyline-based editor completing words from `lexicon`.
    ///
    /// # Errors
    ///
    /// Returns an error if rustyline initialization fails.
    pub fn new(lexicon: &Lexicon) -> Result<Self> {
        let config = Config::builder()
            .auto_add_history(false)
            .max_history_size(1000)
            .map_err(Error::io)?
            .build();

        let helper = ParlanceHelper {
            completer: WordCompleter::new(lexicon),
            hinter: HistoryHinter::new(),
            highlighter: LexemeHighlighter::new(lexicon.clone()),
        };

        let mut editor = Editor::with_config(config).map_err(Error::io)?;
        editor.set_helper(Some(helper));

        Ok(Self { editor })
    }
}

impl LineEditor for RustylineEditor {
    fn read_line(&mut self, prompt: &str) -> Result<ReadResult> {
        match self.editor.readline(prompt) {
            Ok(line) => Ok(ReadResult::Line(line)),
            Err(ReadlineError::Interrupted) => Ok(ReadResult::Interrupted),
            Err(ReadlineError::Eof) => Ok(ReadResult::Eof),
            Err(e) => Err(Error::io(e)),
        }
    }

    fn add_history(&mut self, line: &str) {
        let _ = self.editor.add_history_entry(line);
    }

    fn set_lexicon(&mut self, lexicon: &Lexicon) {
        if let Some(helper) = self.editor.helper_mut() {
            helper.completer = WordCompleter::new(lexicon);
            helper.highlighter.set_lexicon(lexicon.clone());
        }
    }
}
