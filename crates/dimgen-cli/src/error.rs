/// CLI error types with associated exit codes.
///
/// [`CliError`] is the top-level error type for the `dimgen` binary.
/// Every variant maps to a stable exit code (1 or 2) via
/// [`CliError::exit_code`]:
///
/// - Exit code **2** — input failure: the tool could not read or parse
///   the input at all (missing file, unreadable stdin, malformed PGM).
/// - Exit code **1** — configuration failure: the input was read but
///   describes an invalid instance (out-of-range counts, conflicting
///   mode flags). Any partial output on stdout must be discarded.
use std::fmt;
use std::path::PathBuf;

use dimgen_core::{ConfigError, PgmError};

// ---------------------------------------------------------------------------
// CliError
// ---------------------------------------------------------------------------

/// All error conditions that the `dimgen` CLI can produce.
///
/// Use [`CliError::exit_code`] to obtain the exit code associated with
/// each variant. [`CliError::message`] returns the human-readable error
/// string that should be printed to stderr before exiting.
#[derive(Debug)]
pub enum CliError {
    // --- Exit code 2: input failures ---
    /// A file argument could not be found on the filesystem.
    FileNotFound {
        /// The path that was not found.
        path: PathBuf,
    },

    /// The process lacks permission to read a file.
    PermissionDenied {
        /// The path that could not be read.
        path: PathBuf,
    },

    /// An I/O error occurred while reading from stdin.
    StdinReadError {
        /// The underlying I/O error message.
        detail: String,
    },

    /// A generic I/O error not covered by the more specific variants.
    IoError {
        /// A human-readable label for the source.
        source: String,
        /// The underlying I/O error message.
        detail: String,
    },

    /// A command script that is not valid UTF-8.
    InvalidUtf8 {
        /// A human-readable label for the source.
        source: String,
        /// The byte offset of the first invalid byte sequence.
        byte_offset: usize,
    },

    /// A PGM input that could not be decoded.
    Pgm {
        /// A human-readable label for the source.
        source: String,
        /// The decode failure.
        error: PgmError,
    },

    /// Writing the instance to stdout failed.
    WriteFailed {
        /// The underlying I/O error message.
        detail: String,
    },

    // --- Exit code 1: configuration failures ---
    /// The command script describes an invalid instance.
    Config {
        /// The validation failure.
        error: ConfigError,
    },
}

impl CliError {
    /// Returns the process exit code for this error.
    ///
    /// - `2` — input failure (file not found, malformed PGM, etc.).
    /// - `1` — configuration failure (invalid or conflicting commands).
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::FileNotFound { .. }
            | Self::PermissionDenied { .. }
            | Self::StdinReadError { .. }
            | Self::IoError { .. }
            | Self::InvalidUtf8 { .. }
            | Self::Pgm { .. }
            | Self::WriteFailed { .. } => 2,

            Self::Config { .. } => 1,
        }
    }

    /// Returns a human-readable error message suitable for printing to
    /// stderr.
    pub fn message(&self) -> String {
        match self {
            Self::FileNotFound { path } => {
                format!("error: file not found: {}", path.display())
            }
            Self::PermissionDenied { path } => {
                format!("error: permission denied: {}", path.display())
            }
            Self::StdinReadError { detail } => {
                format!("error: failed to read stdin: {detail}")
            }
            Self::IoError { source, detail } => {
                format!("error: I/O error reading {source}: {detail}")
            }
            Self::InvalidUtf8 {
                source,
                byte_offset,
            } => {
                format!(
                    "error: invalid UTF-8 in {source}: first invalid byte at offset {byte_offset}"
                )
            }
            Self::Pgm { source, error } => {
                format!("error: {source}: {error}")
            }
            Self::WriteFailed { detail } => {
                format!("error: failed to write instance: {detail}")
            }
            Self::Config { error } => {
                format!("error: {error}")
            }
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

impl std::error::Error for CliError {}

impl From<ConfigError> for CliError {
    fn from(error: ConfigError) -> Self {
        CliError::Config { error }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
