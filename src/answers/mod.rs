//! Answers collected while scaffolding a library, and their persistence.

mod record;
mod value;

pub use record::AnswerRecord;
pub use value::{AnswerValue, FieldKind, FieldSpec};

use crate::constants::JSON_INDENT;
use crate::error::{Error, Result};
use crate::filesystem::{Filesystem, LocalFilesystem};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::Value;
use std::ops::{Deref, DerefMut};
use std::path::{Path, PathBuf};

/// An [`AnswerRecord`] bound to the file it is loaded from and saved to.
///
/// Fields are reachable directly through `Deref`, so `answers.package_name`
/// reads and writes the underlying record.
#[derive(Debug)]
pub struct Answers<F: Filesystem = LocalFilesystem> {
    record: AnswerRecord,
    path: PathBuf,
    filesystem: F,
}

impl<F: Filesystem> Answers<F> {
    /// Creates the store and loads any answers already saved at `path`.
    ///
    /// # Arguments
    /// * `path` - File the answers are read from and saved to
    /// * `filesystem` - Storage used for both
    ///
    /// # Returns
    /// * `Result<Self>` - Store with saved answers applied over the defaults.
    ///   A missing file is not an error; a file that is not a JSON object, or
    ///   that holds a wrongly typed answer, is.
    pub fn new<P: Into<PathBuf>>(path: P, filesystem: F) -> Result<Self> {
        let mut answers = Self::fresh(path, filesystem);
        answers.load_file()?;
        Ok(answers)
    }

    /// Creates the store with defaults only, ignoring anything saved at `path`.
    pub fn fresh<P: Into<PathBuf>>(path: P, filesystem: F) -> Self {
        Self { record: AnswerRecord::default(), path: path.into(), filesystem }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn record(&self) -> &AnswerRecord {
        &self.record
    }

    pub fn filesystem(&self) -> &F {
        &self.filesystem
    }

    /// Serializes every field as pretty-printed JSON.
    ///
    /// Indentation is four spaces; `/` and non-ASCII text are written as-is.
    pub fn to_json_pretty(&self) -> Result<String> {
        let mut buf = Vec::new();
        let formatter = PrettyFormatter::with_indent(JSON_INDENT);
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.record.to_map().serialize(&mut serializer)?;
        // serde_json only ever emits valid UTF-8
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }

    /// Writes every field to the configured path, replacing its contents.
    pub fn save_to_file(&self) -> Result<()> {
        let contents = self.to_json_pretty()?;
        self.filesystem.write(&self.path, &contents)?;
        log::debug!("Saved answers to {}", self.path.display());
        Ok(())
    }

    fn load_file(&mut self) -> Result<()> {
        if !self.filesystem.exists(&self.path) {
            log::debug!("No answers file at {}, using defaults", self.path.display());
            return Ok(());
        }

        let contents = self.filesystem.read_to_string(&self.path)?;
        let answers = match serde_json::from_str::<Value>(&contents)? {
            Value::Object(map) => map,
            _ => {
                return Err(Error::AnswersFileNotObject {
                    path: self.path.display().to_string(),
                })
            }
        };

        log::debug!("Loading {} answers from {}", answers.len(), self.path.display());
        self.record.hydrate(answers)
    }
}

impl<F: Filesystem> Deref for Answers<F> {
    type Target = AnswerRecord;

    fn deref(&self) -> &Self::Target {
        &self.record
    }
}

impl<F: Filesystem> DerefMut for Answers<F> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.record
    }
}
