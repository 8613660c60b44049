//! Implementation of `dimgen geom [SCRIPT]`.
//!
//! Same contract as `asn`: command script in, instance on stdout,
//! warnings on stderr, validation failures abort with exit code 1.

use dimgen_core::{parse_geom, write_geometric};

use crate::cli::PathOrStdin;
use crate::error::CliError;

pub fn run(script: &PathOrStdin) -> Result<(), CliError> {
    let text = crate::io::read_text(script)?;
    let (config, warnings) = parse_geom(&text)?;
    for warning in &warnings {
        eprintln!("warning: {warning}");
    }
    super::emit(|out| write_geometric(&config, out))
}
