/// File and stdin reading for the `dimgen` binary.
///
/// This module is the single entry point for all input I/O.
/// `dimgen-core` never touches the filesystem; command scripts and PGM
/// bytes are read here and handed to the library as values.
///
/// Key behaviours:
/// - Command scripts are validated as UTF-8 with byte-offset reporting.
/// - PGM inputs stay raw bytes (pixel data is arbitrary binary).
/// - All I/O errors are converted to [`CliError`] variants with exit
///   code 2.
use std::io::Read as _;
use std::path::Path;

use crate::cli::PathOrStdin;
use crate::error::CliError;

/// Reads `source` fully and validates it as a UTF-8 command script.
///
/// # Errors
///
/// Returns [`CliError`] (exit code 2) for a missing or unreadable file,
/// a failed stdin read, or invalid UTF-8.
pub fn read_text(source: &PathOrStdin) -> Result<String, CliError> {
    let bytes = read_bytes(source)?;
    match std::str::from_utf8(&bytes) {
        Ok(s) => Ok(s.to_owned()),
        Err(e) => Err(CliError::InvalidUtf8 {
            source: source.label(),
            byte_offset: e.valid_up_to(),
        }),
    }
}

/// Reads `source` fully as raw bytes.
///
/// # Errors
///
/// Returns [`CliError`] (exit code 2) for a missing or unreadable file
/// or a failed stdin read.
pub fn read_bytes(source: &PathOrStdin) -> Result<Vec<u8>, CliError> {
    match source {
        PathOrStdin::Path(path) => {
            std::fs::read(path).map_err(|e| io_error_to_cli(&e, path))
        }
        PathOrStdin::Stdin => {
            let mut buf = Vec::new();
            std::io::stdin()
                .lock()
                .read_to_end(&mut buf)
                .map_err(|e| CliError::StdinReadError {
                    detail: e.to_string(),
                })?;
            Ok(buf)
        }
    }
}

/// Maps a `std::io::Error` arising from a disk-file operation to a
/// [`CliError`].
fn io_error_to_cli(e: &std::io::Error, path: &Path) -> CliError {
    let kind = e.kind();
    if kind == std::io::ErrorKind::NotFound {
        CliError::FileNotFound {
            path: path.to_path_buf(),
        }
    } else if kind == std::io::ErrorKind::PermissionDenied {
        CliError::PermissionDenied {
            path: path.to_path_buf(),
        }
    } else {
        CliError::IoError {
            source: path.display().to_string(),
            detail: e.to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]
    #![allow(clippy::panic)]

    use std::io::Write as _;
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn missing_file_maps_to_file_not_found() {
        let source = PathOrStdin::Path(PathBuf::from("definitely/not/here.script"));
        match read_text(&source) {
            Err(CliError::FileNotFound { path }) => {
                assert_eq!(path, PathBuf::from("definitely/not/here.script"));
            }
            other => panic!("expected FileNotFound, got {other:?}"),
        }
    }

    #[test]
    fn reads_a_script_file() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(b"nodes 10\nseed 1\n").expect("write");
        let source = PathOrStdin::Path(file.path().to_path_buf());
        assert_eq!(read_text(&source).expect("read"), "nodes 10\nseed 1\n");
    }

    #[test]
    fn non_utf8_script_reports_offset() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(b"nodes \xff 10\n").expect("write");
        let source = PathOrStdin::Path(file.path().to_path_buf());
        match read_text(&source) {
            Err(CliError::InvalidUtf8 { byte_offset, .. }) => assert_eq!(byte_offset, 6),
            other => panic!("expected InvalidUtf8, got {other:?}"),
        }
    }

    #[test]
    fn binary_input_reads_as_bytes() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(&[0, 159, 255, 10]).expect("write");
        let source = PathOrStdin::Path(file.path().to_path_buf());
        assert_eq!(read_bytes(&source).expect("read"), vec![0, 159, 255, 10]);
    }
}
