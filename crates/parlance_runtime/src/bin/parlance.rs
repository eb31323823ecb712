//! Parlance CLI entry point.

use parlance_runtime::{Repl, ReplConfig};
use std::env;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// CLI configuration parsed from arguments.
#[derive(Default)]
struct CliConfig {
    prompt: Option<String>,
    max_length: Option<usize>,
    lexicon: Option<PathBuf>,
    commands: Vec<String>,
    quiet: bool,
    verbose: bool,
    show_help: bool,
    show_version: bool,
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\x1b[31mError: {e}\x1b[0m");
            ExitCode::FAILURE
        }
    }
}

fn parse_args(args: Vec<String>) -> Result<CliConfig, Box<dyn std::error::Error>> {
    let mut config = CliConfig::default();
    let mut args = args.into_iter().skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => config.show_help = true,
            "-V" | "--version" => config.show_version = true,
            "-q" | "--quiet" => config.quiet = true,
            "-v" | "--verbose" => config.verbose = true,
            "-p" | "--prompt" => {
                config.prompt = Some(args.next().ok_or("--prompt requires a value")?);
            }
            "--max-length" => {
                let value = args.next().ok_or("--max-length requires a value")?;
                config.max_length = Some(
                    value
                        .parse()
                        .map_err(|_| format!("invalid --max-length value: {value}"))?,
                );
            }
            "-l" | "--lexicon" => {
                let path = args.next().ok_or("--lexicon requires a path")?;
                config.lexicon = Some(PathBuf::from(path));
            }
            "-c" | "--command" => {
                config
                    .commands
                    .push(args.next().ok_or("--command requires a line")?);
            }
            other => return Err(format!("unknown option: {other}").into()),
        }
    }

    Ok(config)
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run(args: Vec<String>) -> Result<(), Box<dyn std::error::Error>> {
    let cli = parse_args(args)?;

    if cli.show_help {
        print_help();
        return Ok(());
    }

    if cli.show_version {
        println!("parlance {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    init_logging(cli.verbose);

    let mut config = ReplConfig::default().with_banner(!cli.quiet && cli.commands.is_empty());
    if let Some(prompt) = cli.prompt {
        config = config.with_prompt(prompt);
    }
    if let Some(max) = cli.max_length {
        config = config.with_max_line_length(max);
    }
    if let Some(path) = cli.lexicon {
        config = config.with_lexicon_path(path);
    }

    let mut repl = Repl::new(config)?;

    // Batch mode: parse the given lines and exit
    if !cli.commands.is_empty() {
        repl.eval_batch(cli.commands.iter().map(String::as_str))?;
        return Ok(());
    }

    repl.run()?;
    Ok(())
}

fn print_help() {
    println!(
        "\x1b[1mParlance\x1b[0m - Imperative sentence parser for text adventures

\x1b[1mUSAGE:\x1b[0m
    parlance [OPTIONS]

\x1b[1mOPTIONS:\x1b[0m
    -h, --help             Print help information
    -V, --version          Print version information
    -p, --prompt TEXT      Prompt shown before each line (default ' > ')
        --max-length N     Longest accepted line in characters (default 80)
    -l, --lexicon FILE     Load the vocabulary from FILE
    -c, --command LINE     Parse LINE and exit (repeatable)
    -q, --quiet            Do not print the banner
    -v, --verbose          Log parser decisions to stderr

\x1b[1mLEXICON FILES:\x1b[0m
    One category per line, ';;' starts a comment:
        verb: take drop open
        noun: key lock

\x1b[1mEXAMPLES:\x1b[0m
    parlance                                   Start interactive session
    parlance -c 'take sword and kill monster'  Parse one line and exit
    parlance -l words.lex                      Use a custom vocabulary
    RUST_LOG=trace parlance                    Show every classified token

Type 'quit' or press Ctrl+D to exit."
    );
}
