//! The main REPL implementation.

use crate::config::ReplConfig;
use crate::editor::{LineEditor, RustylineEditor};
use crate::input::{BoundedInput, InputLine};
use parlance_foundation::{Error, Result};
use parlance_parser::compound::normalize;
use parlance_parser::{Command, CommandHandler, LineReport, ParseError, SentenceParser};
use std::io::{self, Write};
use tracing::warn;

/// Typing this line ends the session.
pub const QUIT: &str = "quit";

/// Default command handler: prints every dispatched command.
#[derive(Clone, Copy, Debug)]
pub struct EchoHandler {
    echo: bool,
}

impl EchoHandler {
    /// Creates a handler that prints commands if `echo` is set.
    #[must_use]
    pub const fn new(echo: bool) -> Self {
        Self { echo }
    }
}

impl CommandHandler for EchoHandler {
    fn execute(&mut self, command: Command) {
        if self.echo {
            println!("{}", describe_command(&command));
        }
    }
}

/// Renders a command one field per line, skipping unset fields.
#[must_use]
pub fn describe_command(command: &Command) -> String {
    command
        .fields()
        .filter_map(|(name, value)| value.map(|value| (name, value)))
        .map(|(name, value)| format!("{:.<16} {value}", format!("{}?", name.replace('_', " "))))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Player-facing messages for the clauses of a line that produced nothing.
#[must_use]
pub fn diagnostics(report: &LineReport) -> Vec<String> {
    let mut messages = Vec::new();
    for error in report.errors() {
        match error {
            ParseError::UnknownToken { words, .. } => {
                messages.extend(words.iter().map(|word| format!("I don't understand '{word}'.")));
            }
            ParseError::IncompleteCommand { .. } => {
                messages.push("What do you want to do?".to_string());
            }
            ParseError::EmptyInput => {}
        }
    }
    messages
}

/// Returns true if the line asks to end the session.
#[must_use]
pub fn is_quit(line: &str) -> bool {
    normalize(line) == QUIT
}

/// The interactive REPL.
pub struct Repl<E: LineEditor = RustylineEditor, H: CommandHandler = EchoHandler> {
    /// The line editor for input.
    editor: E,

    /// The sentence parser.
    parser: SentenceParser,

    /// Receives dispatched commands.
    handler: H,

    /// Line length bounds.
    input: BoundedInput,

    /// Prompt, banner and output settings.
    config: ReplConfig,
}

impl Repl<RustylineEditor, EchoHandler> {
    /// Creates a new REPL with the default rustyline editor.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid, the lexicon cannot
    /// be loaded, or the editor fails to initialize.
    pub fn new(config: ReplConfig) -> Result<Self> {
        config.validate()?;
        let lexicon = config.load_lexicon()?;
        let editor = RustylineEditor::new(&lexicon)?;
        let handler = EchoHandler::new(config.echo_commands);
        Ok(Self::with_parts(
            editor,
            SentenceParser::new(lexicon),
            handler,
            config,
        ))
    }
}

impl<E: LineEditor, H: CommandHandler> Repl<E, H> {
    /// Creates a new REPL from its parts.
    pub fn with_parts(editor: E, parser: SentenceParser, handler: H, config: ReplConfig) -> Self {
        Self {
            editor,
            parser,
            handler,
            input: BoundedInput::new(config.max_line_length),
            config,
        }
    }

    /// Disables the welcome banner.
    #[must_use]
    pub fn without_banner(mut self) -> Self {
        self.config.show_banner = false;
        self
    }

    /// Returns a reference to the parser.
    #[must_use]
    pub const fn parser(&self) -> &SentenceParser {
        &self.parser
    }

    /// Returns a reference to the command handler.
    #[must_use]
    pub const fn handler(&self) -> &H {
        &self.handler
    }

    /// Returns a reference to the configuration.
    #[must_use]
    pub const fn config(&self) -> &ReplConfig {
        &self.config
    }

    /// Runs the REPL loop until EOF or `quit`.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input fails.
    pub fn run(&mut self) -> Result<()> {
        if self.config.show_banner {
            self.print_banner();
        }

        while self.read_eval_print()? {}

        println!("\nGoodbye!");
        Ok(())
    }

    /// Executes one read-eval-print iteration.
    ///
    /// Returns `Ok(true)` to continue, `Ok(false)` to exit.
    fn read_eval_print(&mut self) -> Result<bool> {
        let line = match self.input.read(&mut self.editor, &self.config.prompt)? {
            InputLine::Eof => return Ok(false),
            InputLine::Empty => return Ok(true),
            InputLine::TooLong { truncated } => {
                warn!(max = self.input.max_length(), "input line truncated");
                eprintln!(
                    "\x1b[33mThat's too long; only the first {} characters were read.\x1b[0m",
                    self.input.max_length()
                );
                truncated
            }
            InputLine::Line(line) => line,
        };

        if is_quit(&line) {
            return Ok(false);
        }

        self.editor.add_history(&line);
        let _ = self.eval(&line);
        Ok(true)
    }

    /// Parses one line, dispatches its commands and prints a message for
    /// every clause that produced nothing.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::EmptyInput`] if the line is blank.
    pub fn eval(&mut self, line: &str) -> std::result::Result<LineReport, ParseError> {
        let report = self.parser.dispatch_line(Some(line), &mut self.handler)?;
        for message in diagnostics(&report) {
            println!("{message}");
        }
        Ok(report)
    }

    /// Evaluates several lines without reading input, stopping at `quit`.
    ///
    /// # Errors
    ///
    /// Returns an error if a line exceeds the maximum length.
    pub fn eval_batch<'a, I>(&mut self, lines: I) -> Result<Vec<LineReport>>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut reports = Vec::new();
        for line in lines {
            if is_quit(line) {
                break;
            }
            let text = match self.input.bound(line.to_string()) {
                InputLine::TooLong { .. } => {
                    return Err(Error::config(format!(
                        "line exceeds {} characters: '{line}'",
                        self.input.max_length()
                    )));
                }
                InputLine::Line(text) => text,
                InputLine::Empty | InputLine::Eof => continue,
            };
            if let Ok(report) = self.eval(&text) {
                reports.push(report);
            }
        }
        Ok(reports)
    }

    /// Prints the welcome banner.
    #[allow(clippy::unused_self)]
    fn print_banner(&self) {
        println!("\x1b[1;36mParlance v{}\x1b[0m", env!("CARGO_PKG_VERSION"));
        println!(" Type '{QUIT}' to exit\n");

        // Flush to ensure banner appears
        let _ = io::stdout().flush();
    }
}
