//! Clap CLI definition: root struct, subcommands, and shared argument types.
use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// A CLI argument that is either a filesystem path or the stdin sentinel `"-"`.
///
/// Parsing `"-"` yields [`PathOrStdin::Stdin`]; anything else yields
/// [`PathOrStdin::Path`]. This avoids stringly-typed handling of the
/// stdin sentinel throughout the codebase.
#[derive(Clone, Debug)]
pub enum PathOrStdin {
    /// Read from standard input.
    Stdin,
    /// Read from the given filesystem path.
    Path(PathBuf),
}

impl PathOrStdin {
    /// Human-readable label for diagnostics (`"-"` for stdin).
    pub fn label(&self) -> String {
        match self {
            PathOrStdin::Stdin => "-".to_owned(),
            PathOrStdin::Path(path) => path.display().to_string(),
        }
    }
}

impl std::str::FromStr for PathOrStdin {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "-" {
            Ok(PathOrStdin::Stdin)
        } else {
            Ok(PathOrStdin::Path(PathBuf::from(s)))
        }
    }
}

/// Root of the `dimgen` command line.
#[derive(Parser)]
#[command(name = "dimgen", about = "Generators for DIMACS-format benchmark instances")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// All top-level subcommands exposed by the `dimgen` binary.
#[derive(Subcommand)]
pub enum Command {
    /// Generate a bipartite assignment instance from a command script
    Asn {
        /// Path to a command script, or `-` for stdin (the default).
        #[arg(value_name = "SCRIPT", default_value = "-")]
        script: PathOrStdin,
    },

    /// Generate a geometric matching instance from a command script
    Geom {
        /// Path to a command script, or `-` for stdin (the default).
        #[arg(value_name = "SCRIPT", default_value = "-")]
        script: PathOrStdin,
    },

    /// Convert a P5 greymap into an assignment instance
    Pgm {
        /// Path to a binary PGM file, or `-` for stdin (the default).
        #[arg(value_name = "FILE", default_value = "-")]
        file: PathOrStdin,
    },

    /// Print the dimgen-core library version
    Version,
}
