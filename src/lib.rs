/// Answer record, field table and JSON persistence.
pub mod answers;

/// Handles argument parsing and subcommand dispatch.
pub mod cli;

/// Constants shared across the crate.
pub mod constants;

/// Defines custom error types.
pub mod error;

/// Storage abstraction the answers are read from and written to.
pub mod filesystem;

pub use answers::{AnswerRecord, Answers};
pub use filesystem::{Filesystem, LocalFilesystem, MemoryFilesystem};
