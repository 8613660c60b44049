//! Implementation of `dimgen asn [SCRIPT]`.
//!
//! Reads an assignment-family command script (file or stdin), validates
//! it, and streams the generated instance to stdout. Unknown commands
//! in the script are reported on stderr and skipped; validation errors
//! abort with exit code 1 before any instance line is written.

use dimgen_core::{parse_asn, write_assignment};

use crate::cli::PathOrStdin;
use crate::error::CliError;

pub fn run(script: &PathOrStdin) -> Result<(), CliError> {
    let text = crate::io::read_text(script)?;
    let (config, warnings) = parse_asn(&text)?;
    for warning in &warnings {
        eprintln!("warning: {warning}");
    }
    super::emit(|out| write_assignment(&config, out))
}
