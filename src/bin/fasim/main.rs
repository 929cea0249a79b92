//! Fasim CLI - run a finite automaton from the command line
//!
//! The automaton comes either from the individual field flags or from a
//! JSON form file; the trace and verdict are printed to stdout.

use clap::{Parser, ValueEnum};
use fasim::parse::{parse_input, parse_transitions, AutomatonForm, ParseError};
use fasim::{Automaton, AutomatonDefinition, Mode, RunOutcome};
use std::path::{Path, PathBuf};
use std::process;
use thiserror::Error;
use tracing::{debug, info};

mod logging;

use crate::logging::LogFormat;

/// Output format for the run result
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Trace lines followed by the verdict
    Text,
    /// The full run outcome as JSON
    Json,
}

#[derive(Parser)]
#[command(
    name = "fasim",
    about = "Run a DFA or NFA over an input string and explain every step",
    version
)]
struct Cli {
    /// Input string, one symbol per character
    #[arg(value_name = "INPUT", default_value = "")]
    input: String,

    /// JSON file holding states, alphabet, start, accept, transitions and deterministic
    #[arg(
        long,
        value_name = "FILE",
        conflicts_with_all = ["states", "alphabet", "start", "accept", "transitions", "transitions_file"]
    )]
    form: Option<PathBuf>,

    /// States, comma-separated
    #[arg(long, default_value = "")]
    states: String,

    /// Alphabet, comma-separated
    #[arg(long, default_value = "")]
    alphabet: String,

    /// Start state
    #[arg(long, default_value = "")]
    start: String,

    /// Accept states, comma-separated
    #[arg(long, default_value = "")]
    accept: String,

    /// Transition in the form state,symbol->next1,next2 (repeatable)
    #[arg(long = "transition", value_name = "LINE")]
    transitions: Vec<String>,

    /// File with one transition per line
    #[arg(long, value_name = "FILE")]
    transitions_file: Option<PathBuf>,

    /// Run as a nondeterministic automaton (enables ε transitions)
    #[arg(long)]
    nfa: bool,

    /// Reject malformed automata before running
    #[arg(long)]
    strict: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Log filter directive, e.g. "debug" or "fasim=trace" (default: $FASIM_LOG or warn)
    #[arg(long, value_name = "LEVEL")]
    log_level: Option<String>,

    /// Log format
    #[arg(long, value_enum, default_value_t = LogFormat::Compact)]
    log_format: LogFormat,
}

#[derive(Debug, Error)]
enum CliError {
    #[error("Cannot read '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid form file '{}': {source}", path.display())]
    Form {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("In transitions file '{}': {source}", path.display())]
    TransitionsFile { path: PathBuf, source: ParseError },

    #[error("Automaton failed strict validation:\n{0}")]
    Invalid(String),

    #[error("Invalid log level: {0}")]
    LogLevel(String),

    #[error("Cannot encode result: {0}")]
    Encode(#[from] serde_json::Error),
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("error: {e}");
        process::exit(2);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let filter = logging::filter(cli.log_level.as_deref()).map_err(CliError::LogLevel)?;
    logging::init(filter, cli.log_format);

    let form = match &cli.form {
        Some(path) => read_form(path, cli.nfa)?,
        None => form_from_flags(&cli)?,
    };
    debug!(deterministic = form.deterministic, "collected automaton form");

    let automaton = build_automaton(form.into_definition()?, cli.strict)?;

    let input = parse_input(&cli.input)?;
    let outcome = automaton.run(&input);
    info!(accepted = outcome.accepted, "simulation complete");

    match cli.format {
        OutputFormat::Text => println!("{}", render_text(&outcome)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&outcome)?),
    }

    Ok(())
}

fn read_text(path: &Path) -> Result<String, CliError> {
    std::fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })
}

fn read_form(path: &Path, nfa: bool) -> Result<AutomatonForm, CliError> {
    let text = read_text(path)?;
    let mut form: AutomatonForm =
        serde_json::from_str(&text).map_err(|source| CliError::Form {
            path: path.to_path_buf(),
            source,
        })?;
    if nfa {
        form.deterministic = false;
    }
    Ok(form)
}

fn build_automaton(definition: AutomatonDefinition, strict: bool) -> Result<Automaton, CliError> {
    if !strict {
        return Ok(Automaton::new(definition));
    }
    Automaton::validated(definition).map_err(|violations| {
        let lines: Vec<String> = violations.iter().map(|v| format!("  - {v}")).collect();
        CliError::Invalid(lines.join("\n"))
    })
}

fn render_text(outcome: &RunOutcome) -> String {
    let verdict = if outcome.accepted { "ACCEPTED" } else { "REJECTED" };
    format!("{}\n\nResult: {verdict}", outcome.trace)
}

fn form_from_flags(cli: &Cli) -> Result<AutomatonForm, CliError> {
    let deterministic = !cli.nfa;
    let mut pieces: Vec<String> = cli.transitions.clone();

    if let Some(path) = &cli.transitions_file {
        let text = read_text(path)?;
        // Parsed alone first so errors carry line numbers within the file.
        parse_transitions(&text, Mode::from_deterministic(deterministic)).map_err(|source| {
            CliError::TransitionsFile {
                path: path.clone(),
                source,
            }
        })?;
        pieces.push(text);
    }

    let transitions = pieces
        .iter()
        .map(|piece| piece.trim_end_matches('\n'))
        .filter(|piece| !piece.trim().is_empty())
        .collect::<Vec<_>>()
        .join("\n");

    Ok(AutomatonForm {
        states: cli.states.clone(),
        alphabet: cli.alphabet.clone(),
        start: cli.start.clone(),
        accept: cli.accept.clone(),
        transitions,
        deterministic,
    })
}
