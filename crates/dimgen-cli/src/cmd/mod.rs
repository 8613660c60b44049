/// Command modules for the `dimgen` CLI.
///
/// Each submodule implements one subcommand. The `run` function in each
/// module takes the parsed arguments and returns `Ok(())` on success or
/// a [`crate::error::CliError`] on failure. Instances go to stdout,
/// warnings and diagnostics to stderr.
use std::io::{BufWriter, StdoutLock, Write as _};

use crate::error::CliError;

pub mod asn;
pub mod geom;
pub mod pgm;

/// Streams an instance to buffered stdout, mapping write failures
/// (including a closed pipe) to [`CliError::WriteFailed`].
fn emit<T, F>(write: F) -> Result<T, CliError>
where
    F: FnOnce(&mut BufWriter<StdoutLock<'static>>) -> std::io::Result<T>,
{
    let stdout = std::io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let value = write(&mut out).map_err(|e| CliError::WriteFailed {
        detail: e.to_string(),
    })?;
    out.flush().map_err(|e| CliError::WriteFailed {
        detail: e.to_string(),
    })?;
    Ok(value)
}
