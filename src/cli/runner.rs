use crate::{
    answers::Answers,
    cli::{Cli, Commands},
    error::{Error, Result},
    filesystem::{Filesystem, LocalFilesystem},
};
use serde_json::Value;
use std::io::Write;

/// Runs a single subcommand against the answers file.
pub struct Runner<'a, F: Filesystem> {
    cli: &'a Cli,
    filesystem: F,
}

impl<'a, F: Filesystem> Runner<'a, F> {
    pub fn new(cli: &'a Cli, filesystem: F) -> Self {
        Self { cli, filesystem }
    }

    /// Executes the subcommand, writing any output to `out`.
    pub fn run<W: Write>(self, out: &mut W) -> Result<()> {
        let path = self.cli.file.clone();
        log::debug!("Using answers file {}", path.display());

        match &self.cli.command {
            Commands::Tokens => {
                let answers = Answers::new(path, self.filesystem)?;
                for token in answers.tokens() {
                    writeln!(out, "{token}")?;
                }
            }
            Commands::Show => {
                let answers = Answers::new(path, self.filesystem)?;
                writeln!(out, "{}", answers.to_json_pretty()?)?;
            }
            Commands::Get { field } => {
                let answers = Answers::new(path, self.filesystem)?;
                let value =
                    answers.get(field).ok_or_else(|| Error::UnknownField(field.clone()))?;
                writeln!(out, "{}", render_value(&value))?;
            }
            Commands::Set { field, value } => {
                let mut answers = Answers::new(path, self.filesystem)?;
                answers.set(field, parse_value(value))?;
                save(&answers)?;
                log::info!("Set '{field}' in {}", answers.path().display());
            }
            Commands::Reset => {
                let answers = Answers::fresh(path, self.filesystem);
                save(&answers)?;
                log::info!("Reset answers in {}", answers.path().display());
            }
        }
        Ok(())
    }
}

/// Reads a command-line value as JSON, falling back to the raw string.
fn parse_value(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
}

/// Strings print bare; everything else prints as compact JSON.
fn render_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn save<F: Filesystem>(answers: &Answers<F>) -> Result<()> {
    if let Some(parent) = answers.path().parent() {
        if !parent.as_os_str().is_empty() {
            answers.filesystem().create_dir_all(parent)?;
        }
    }
    answers.save_to_file()
}

/// Main entry point for CLI execution
pub fn run(cli: &Cli) -> Result<()> {
    let stdout = std::io::stdout();
    Runner::new(cli, LocalFilesystem).run(&mut stdout.lock())
}
