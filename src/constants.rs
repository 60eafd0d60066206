//! Constants used throughout the answer store

/// File the answers are persisted to when no path is given
pub const DEFAULT_ANSWERS_FILE: &str = ".starter-kit-answers";

/// Environment variable overriding the answers file location
pub const ANSWERS_FILE_ENV: &str = "STARTER_KIT_ANSWERS";

/// Code of conduct selected until the user picks one
pub const DEFAULT_CODE_OF_CONDUCT: &str = "None";

/// License selected until the user picks one
pub const DEFAULT_LICENSE: &str = "Proprietary";

/// Indentation used when writing the answers file
pub const JSON_INDENT: &[u8] = b"    ";

/// Exit codes
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const FAILURE: i32 = 1;
}

/// Verbosity levels
pub mod verbosity {
    pub const OFF: u8 = 0;
    pub const INFO: u8 = 1;
    pub const DEBUG: u8 = 2;
    pub const TRACE: u8 = 3;
}
