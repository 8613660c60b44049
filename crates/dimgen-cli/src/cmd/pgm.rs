//! Implementation of `dimgen pgm [FILE]`.
//!
//! Decodes a binary P5 greymap and streams the pixel-adjacency
//! assignment instance to stdout. Decode failures are fatal with exit
//! code 2; an odd-sized grid is repaired by dropping one row, with a
//! warning on stderr.

use dimgen_core::{pgm, write_pixel_assignment};

use crate::cli::PathOrStdin;
use crate::error::CliError;

pub fn run(file: &PathOrStdin) -> Result<(), CliError> {
    let bytes = crate::io::read_bytes(file)?;
    let image = pgm::parse(&bytes).map_err(|error| CliError::Pgm {
        source: file.label(),
        error,
    })?;
    let stats = super::emit(|out| write_pixel_assignment(&image, out))?;
    if stats.dropped_row {
        eprintln!("warning: deleting one row for feasibility");
    }
    Ok(())
}
