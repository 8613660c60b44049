//! Minimal decoder for binary (`P5`) PGM grayscale images.
//!
//! Just enough of the netpbm format for the pixel-adjacency generator:
//! the `P5` magic, `#` comments anywhere in the header, width, height,
//! a maxval up to 255, then one byte per pixel in row-major order.
//! Each malformed-input cause gets its own error variant so the CLI
//! can print a distinct diagnostic.

use std::fmt;

/// A decoded grayscale image, one byte per pixel, row-major.
#[derive(Debug, Clone)]
pub struct PgmImage {
    /// Number of pixel rows.
    pub rows: usize,
    /// Number of pixel columns.
    pub cols: usize,
    /// Maximum gray value declared by the header (1..=255).
    pub maxval: u32,
    pixels: Vec<u8>,
}

impl PgmImage {
    /// Builds an image from raw parts. `pixels` must hold exactly
    /// `rows * cols` bytes.
    ///
    /// # Errors
    ///
    /// Returns [`PgmError`] under the same rules as [`parse`]: zero
    /// dimensions, out-of-range maxval, or a payload of the wrong size.
    pub fn from_parts(
        rows: usize,
        cols: usize,
        maxval: u32,
        pixels: Vec<u8>,
    ) -> Result<Self, PgmError> {
        if rows == 0 || cols == 0 {
            return Err(PgmError::ZeroDimension { rows, cols });
        }
        if maxval == 0 || maxval > 255 {
            return Err(PgmError::UnsupportedMaxval {
                maxval: u64::from(maxval),
            });
        }
        let expected = rows
            .checked_mul(cols)
            .ok_or(PgmError::TooBig { rows, cols })?;
        if pixels.len() != expected {
            return Err(PgmError::TruncatedPixels {
                expected,
                found: pixels.len(),
            });
        }
        Ok(PgmImage {
            rows,
            cols,
            maxval,
            pixels,
        })
    }

    /// Intensity of the pixel at `(row, col)`.
    pub fn intensity(&self, row: usize, col: usize) -> u8 {
        self.pixels[row * self.cols + col]
    }
}

// ---------------------------------------------------------------------------
// PgmError
// ---------------------------------------------------------------------------

/// Everything that can go wrong while decoding a P5 stream. All of
/// these are fatal; there is no recovery or resynchronization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PgmError {
    /// The stream does not start with the `P5` magic.
    BadMagic {
        /// What was found instead, lossily decoded.
        found: String,
    },
    /// The header ended before a required field.
    MissingField {
        /// The field that was being read.
        field: &'static str,
    },
    /// A header field that is not an unsigned decimal number.
    MalformedField {
        /// The field that was being read.
        field: &'static str,
        /// The offending token, lossily decoded.
        value: String,
    },
    /// Width or height of zero.
    ZeroDimension {
        /// Declared row count.
        rows: usize,
        /// Declared column count.
        cols: usize,
    },
    /// A maxval of zero or above 255 (two-byte samples unsupported).
    UnsupportedMaxval {
        /// The declared maxval.
        maxval: u64,
    },
    /// The image is too large to address in memory.
    TooBig {
        /// Declared row count.
        rows: usize,
        /// Declared column count.
        cols: usize,
    },
    /// The pixel payload is shorter than `rows * cols`.
    TruncatedPixels {
        /// Bytes the header promised.
        expected: usize,
        /// Bytes actually present.
        found: usize,
    },
}

impl fmt::Display for PgmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BadMagic { found } => {
                write!(f, "not a P5 greymap: magic is `{found}`")
            }
            Self::MissingField { field } => {
                write!(f, "file format error: header ended before {field}")
            }
            Self::MalformedField { field, value } => {
                write!(f, "file format error: {field} is not a number: `{value}`")
            }
            Self::ZeroDimension { rows, cols } => {
                write!(f, "file format error: image is {rows}x{cols}")
            }
            Self::UnsupportedMaxval { maxval } => {
                write!(f, "unsupported maxval {maxval} (must be in [1, 255])")
            }
            Self::TooBig { rows, cols } => {
                write!(f, "image too big: {rows}x{cols} pixels")
            }
            Self::TruncatedPixels { expected, found } => {
                write!(f, "file length incorrect: expected {expected} greys, found {found}")
            }
        }
    }
}

impl std::error::Error for PgmError {}

// ---------------------------------------------------------------------------
// Parsing
// ---------------------------------------------------------------------------

struct Scanner<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Scanner<'a> {
    /// Advances past whitespace and `#` comments (which run to the end
    /// of their line).
    fn skip_separators(&mut self) {
        while self.pos < self.bytes.len() {
            let b = self.bytes[self.pos];
            if b.is_ascii_whitespace() {
                self.pos += 1;
            } else if b == b'#' {
                while self.pos < self.bytes.len() && self.bytes[self.pos] != b'\n' {
                    self.pos += 1;
                }
            } else {
                break;
            }
        }
    }

    fn token(&mut self) -> Option<&'a [u8]> {
        self.skip_separators();
        let start = self.pos;
        while self.pos < self.bytes.len() && !self.bytes[self.pos].is_ascii_whitespace() {
            self.pos += 1;
        }
        if self.pos == start {
            None
        } else {
            Some(&self.bytes[start..self.pos])
        }
    }

    fn number(&mut self, field: &'static str) -> Result<u64, PgmError> {
        let tok = self.token().ok_or(PgmError::MissingField { field })?;
        let s = std::str::from_utf8(tok).map_err(|_| PgmError::MalformedField {
            field,
            value: String::from_utf8_lossy(tok).into_owned(),
        })?;
        s.parse::<u64>().map_err(|_| PgmError::MalformedField {
            field,
            value: s.to_owned(),
        })
    }
}

/// Decodes a P5 byte stream.
///
/// # Errors
///
/// Returns a [`PgmError`] naming the first thing wrong with the
/// stream: bad magic, missing or malformed header fields, zero
/// dimensions, an out-of-range maxval, or a short pixel payload.
pub fn parse(bytes: &[u8]) -> Result<PgmImage, PgmError> {
    let mut scanner = Scanner { bytes, pos: 0 };

    let magic = scanner.token().ok_or(PgmError::MissingField { field: "magic" })?;
    if magic != b"P5" {
        return Err(PgmError::BadMagic {
            found: String::from_utf8_lossy(magic).into_owned(),
        });
    }

    let cols = scanner.number("width")? as usize;
    let rows = scanner.number("height")? as usize;
    let maxval = scanner.number("maxval")?;
    if maxval == 0 || maxval > 255 {
        return Err(PgmError::UnsupportedMaxval { maxval });
    }
    if rows == 0 || cols == 0 {
        return Err(PgmError::ZeroDimension { rows, cols });
    }
    let expected = rows
        .checked_mul(cols)
        .ok_or(PgmError::TooBig { rows, cols })?;

    // Exactly one whitespace byte separates the header from the pixel
    // payload; anything after it, including 0x0a values, is data.
    if scanner.pos >= bytes.len() || !bytes[scanner.pos].is_ascii_whitespace() {
        return Err(PgmError::MissingField { field: "pixel data" });
    }
    let data = &bytes[scanner.pos + 1..];

    if data.len() < expected {
        return Err(PgmError::TruncatedPixels {
            expected,
            found: data.len(),
        });
    }

    PgmImage::from_parts(rows, cols, maxval as u32, data[..expected].to_vec())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]

    use super::*;

    fn p5(header: &str, pixels: &[u8]) -> Vec<u8> {
        let mut bytes = header.as_bytes().to_vec();
        bytes.extend_from_slice(pixels);
        bytes
    }

    #[test]
    fn decodes_a_plain_image() {
        let img = parse(&p5("P5 3 2 255\n", &[10, 20, 30, 40, 50, 60])).expect("parse");
        assert_eq!(img.cols, 3);
        assert_eq!(img.rows, 2);
        assert_eq!(img.maxval, 255);
        assert_eq!(img.intensity(0, 0), 10);
        assert_eq!(img.intensity(1, 2), 60);
    }

    #[test]
    fn header_comments_are_skipped() {
        let bytes = p5("P5\n# made by hand\n2 2\n# another\n128\n", &[1, 2, 3, 4]);
        let img = parse(&bytes).expect("parse");
        assert_eq!((img.rows, img.cols, img.maxval), (2, 2, 128));
    }

    #[test]
    fn pixel_values_equal_to_newline_survive() {
        let img = parse(&p5("P5 2 1 255\n", &[b'\n', b'\n'])).expect("parse");
        assert_eq!(img.intensity(0, 0), b'\n');
    }

    #[test]
    fn wrong_magic_is_rejected() {
        let err = parse(&p5("P2 2 2 255\n", &[0; 4])).expect_err("should fail");
        assert_eq!(
            err,
            PgmError::BadMagic {
                found: "P2".to_owned()
            }
        );
    }

    #[test]
    fn truncated_payload_is_rejected_with_counts() {
        let err = parse(&p5("P5 4 4 255\n", &[0; 9])).expect_err("should fail");
        assert_eq!(
            err,
            PgmError::TruncatedPixels {
                expected: 16,
                found: 9
            }
        );
    }

    #[test]
    fn missing_header_field_is_rejected() {
        let err = parse(b"P5 4").expect_err("should fail");
        assert_eq!(err, PgmError::MissingField { field: "height" });
    }

    #[test]
    fn non_numeric_dimension_is_rejected() {
        let err = parse(b"P5 x 4 255\n").expect_err("should fail");
        assert_eq!(
            err,
            PgmError::MalformedField {
                field: "width",
                value: "x".to_owned()
            }
        );
    }

    #[test]
    fn sixteen_bit_samples_are_unsupported() {
        let err = parse(&p5("P5 2 2 65535\n", &[0; 8])).expect_err("should fail");
        assert_eq!(err, PgmError::UnsupportedMaxval { maxval: 65_535 });
    }

    #[test]
    fn zero_dimension_is_rejected() {
        let err = parse(b"P5 0 4 255\n").expect_err("should fail");
        assert_eq!(err, PgmError::ZeroDimension { rows: 4, cols: 0 });
    }

    #[test]
    fn every_error_has_a_distinct_message() {
        let errors = [
            PgmError::BadMagic { found: "P6".to_owned() },
            PgmError::MissingField { field: "width" },
            PgmError::MalformedField { field: "width", value: "x".to_owned() },
            PgmError::ZeroDimension { rows: 0, cols: 3 },
            PgmError::UnsupportedMaxval { maxval: 300 },
            PgmError::TooBig { rows: usize::MAX, cols: 2 },
            PgmError::TruncatedPixels { expected: 4, found: 1 },
        ];
        let messages: Vec<String> = errors.iter().map(ToString::to_string).collect();
        for (i, a) in messages.iter().enumerate() {
            for b in &messages[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
