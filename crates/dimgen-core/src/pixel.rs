//! Pixel-adjacency instance writer: grayscale image to assignment graph.
//!
//! Grid cells are split into two classes by checkerboard parity of
//! `row + col`; the even class takes ids `1..=half`, the odd class
//! `half+1..=total`, with `node_id(r, c) = offset + (cols*r + c) / 2`.
//! Every even-parity cell emits one arc to each in-bounds 4-neighbor
//! with cost equal to the absolute intensity difference, giving a
//! planar bipartite graph with deterministic costs. If the cell count
//! is odd the last row is dropped so the two classes stay equal-sized,
//! which the assignment format requires.

use std::io::{self, Write};

use crate::pgm::PgmImage;

/// What the writer did, for the caller's diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelStats {
    /// Rows actually used (one less than the image if a row was dropped).
    pub rows: usize,
    /// Columns used.
    pub cols: usize,
    /// True when an odd cell count forced the last row out.
    pub dropped_row: bool,
    /// Nodes in the instance (`rows * cols`).
    pub nodes: usize,
    /// Arcs in the instance (`2*rows*cols - rows - cols`).
    pub arcs: usize,
}

fn node_id(half: usize, cols: usize, r: usize, c: usize) -> usize {
    let pos = cols * r + c;
    let offset = if (r + c) & 1 == 1 { half + 1 } else { 1 };
    offset + pos / 2
}

fn cost(img: &PgmImage, a: (usize, usize), b: (usize, usize)) -> i32 {
    (i32::from(img.intensity(a.0, a.1)) - i32::from(img.intensity(b.0, b.1))).abs()
}

/// Writes the pixel-adjacency assignment instance for `img` to `out`.
///
/// Returns the effective grid shape and counts; the caller is expected
/// to warn when `dropped_row` is set.
///
/// # Errors
///
/// Returns any error from the output sink.
pub fn write_pixel_assignment<W: Write>(img: &PgmImage, out: &mut W) -> io::Result<PixelStats> {
    let cols = img.cols;
    let mut rows = img.rows;
    let mut cells = rows * cols;
    let mut dropped_row = false;
    if cells & 1 == 1 {
        // Odd cell count cannot split into two equal sides.
        cells -= cols;
        rows -= 1;
        dropped_row = true;
    }

    let half = cells / 2;
    // A single odd-width row drops to an empty grid; every non-empty
    // grid has 2*r*c >= r + c.
    let arcs = if cells == 0 { 0 } else { 2 * cells - rows - cols };
    writeln!(out, "p asn {cells} {arcs}")?;
    writeln!(out, "c From {rows} x {cols} picture")?;
    for id in 1..=half {
        writeln!(out, "n {id}")?;
    }

    for r in 0..rows {
        // Even-parity cells only; their neighbors are all odd-parity.
        let mut c = r & 1;
        while c < cols {
            let from = node_id(half, cols, r, c);
            if c != 0 {
                writeln!(out, "a {} {} {}", from, node_id(half, cols, r, c - 1), cost(img, (r, c), (r, c - 1)))?;
            }
            if c != cols - 1 {
                writeln!(out, "a {} {} {}", from, node_id(half, cols, r, c + 1), cost(img, (r, c), (r, c + 1)))?;
            }
            if r != 0 {
                writeln!(out, "a {} {} {}", from, node_id(half, cols, r - 1, c), cost(img, (r, c), (r - 1, c)))?;
            }
            if r != rows - 1 {
                writeln!(out, "a {} {} {}", from, node_id(half, cols, r + 1, c), cost(img, (r, c), (r + 1, c)))?;
            }
            c += 2;
        }
    }

    Ok(PixelStats {
        rows,
        cols,
        dropped_row,
        nodes: cells,
        arcs,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
