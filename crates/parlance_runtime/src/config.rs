//! Configuration for the REPL.

use std::fs;
use std::path::{Path, PathBuf};

use parlance_foundation::{Error, ErrorContext, Result};
use parlance_parser::Lexicon;
use tracing::{info, warn};

use crate::input::{DEFAULT_MAX_LENGTH, DEFAULT_PROMPT};

/// Configuration for the REPL.
///
/// Controls the prompt, input bounds, output and vocabulary.
#[derive(Clone, Debug)]
pub struct ReplConfig {
    /// Prompt shown before each line.
    pub prompt: String,

    /// Longest accepted line, in characters.
    pub max_line_length: usize,

    /// Whether to show the welcome banner.
    pub show_banner: bool,

    /// Print each dispatched command.
    pub echo_commands: bool,

    /// Lexicon definition file, or `None` for the standard vocabulary.
    pub lexicon_path: Option<PathBuf>,
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self {
            prompt: DEFAULT_PROMPT.to_string(),
            max_line_length: DEFAULT_MAX_LENGTH,
            show_banner: true,
            echo_commands: true,
            lexicon_path: None,
        }
    }
}

impl ReplConfig {
    /// Builder method to set the prompt.
    #[must_use]
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Builder method to set the maximum line length.
    #[must_use]
    pub fn with_max_line_length(mut self, max: usize) -> Self {
        self.max_line_length = max;
        self
    }

    /// Builder method to enable or disable the banner.
    #[must_use]
    pub fn with_banner(mut self, show: bool) -> Self {
        self.show_banner = show;
        self
    }

    /// Builder method to enable or disable command echo.
    #[must_use]
    pub fn with_echo(mut self, echo: bool) -> Self {
        self.echo_commands = echo;
        self
    }

    /// Builder method to set the lexicon file.
    #[must_use]
    pub fn with_lexicon_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.lexicon_path = Some(path.into());
        self
    }

    /// Checks that the configuration is usable.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the maximum line length is zero.
    pub fn validate(&self) -> Result<()> {
        if self.max_line_length == 0 {
            return Err(Error::config("max line length must be positive"));
        }
        Ok(())
    }

    /// Loads the configured lexicon.
    ///
    /// Words listed under several categories are logged; the classifier's
    /// priority order still decides between them.
    ///
    /// # Errors
    ///
    /// Returns an error if the lexicon file cannot be read or parsed.
    pub fn load_lexicon(&self) -> Result<Lexicon> {
        let Some(path) = &self.lexicon_path else {
            return Ok(Lexicon::standard());
        };

        let lexicon = load_lexicon_file(path)?;
        info!(path = %path.display(), words = lexicon.len(), "loaded lexicon");

        for conflict in lexicon.conflicts() {
            warn!(
                word = %conflict.word,
                categories = ?conflict.categories,
                "word listed under several categories"
            );
        }

        Ok(lexicon)
    }
}

fn load_lexicon_file(path: &Path) -> Result<Lexicon> {
    let context = || ErrorContext::new().with_source(path.display().to_string());

    let source = fs::read_to_string(path).map_err(|e| Error::io(e).with_context(context()))?;

    Lexicon::parse(&source).map_err(|e| e.with_context(context()))
}
