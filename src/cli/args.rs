use crate::constants::{exit_codes, verbosity, ANSWERS_FILE_ENV, DEFAULT_ANSWERS_FILE};
use clap::{error::ErrorKind, CommandFactory, Parser, Subcommand};
use log::LevelFilter;
use std::path::PathBuf;

const HELP_TEMPLATE: &str = r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#;

/// Inspect and edit the answers saved by the library starter kit.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Answers file to read and write.
    #[arg(short, long, env = ANSWERS_FILE_ENV, default_value = DEFAULT_ANSWERS_FILE)]
    pub file: PathBuf,

    /// Increase logging verbosity (`-v`, `-vv`, `-vvv`).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Commands {
    /// Print every token name, one per line.
    Tokens,
    /// Print all answers as they would be saved.
    Show,
    /// Print the value of a single answer.
    Get {
        /// Token name, e.g. `packageName`.
        field: String,
    },
    /// Change a single answer and save.
    ///
    /// VALUE is read as JSON when it parses (`true`, `null`, `["a", "b"]`),
    /// otherwise as a plain string.
    Set {
        /// Token name, e.g. `packageName`.
        field: String,
        /// New value.
        value: String,
    },
    /// Overwrite the answers file with the defaults.
    Reset,
}

/// Parse command line arguments, printing help when a subcommand is missing.
pub fn parse_cli() -> Cli {
    Cli::try_parse().unwrap_or_else(|e| {
        if e.kind() == ErrorKind::MissingSubcommand
            || e.kind() == ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
        {
            let mut command = Cli::command().help_template(HELP_TEMPLATE);
            if let Err(print_err) = command.print_help() {
                eprintln!("Failed to display help information: {print_err}");
            } else {
                println!();
            }
            std::process::exit(exit_codes::FAILURE);
        } else {
            e.exit();
        }
    })
}

/// Map `-v` counts to the appropriate log level.
pub fn get_log_level_from_verbose(verbose_count: u8) -> LevelFilter {
    match verbose_count {
        verbosity::OFF => LevelFilter::Error,
        verbosity::INFO => LevelFilter::Info,
        verbosity::DEBUG => LevelFilter::Debug,
        verbosity::TRACE.. => LevelFilter::Trace,
    }
}
