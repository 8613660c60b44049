//! Geometric-family instance writer.
//!
//! Emits `nodes` points uniform in d-space, coordinates integer in
//! `[1, maxloc]`, as `v` lines in node order after the `p geom`
//! problem line and the parameter report.

use std::io::{self, Write};

use crate::config::{GeomConfig, SeedMode};
use crate::rng::PortableRng;
use crate::sampler::uniform_int;

/// Writes a complete geometric matching instance to `out`.
///
/// # Errors
///
/// Returns any error from the output sink.
pub fn write_geometric<W: Write>(config: &GeomConfig, out: &mut W) -> io::Result<()> {
    let mut rng = PortableRng::new(config.seed.resolve());

    writeln!(out, "p geom {} {}", config.nodes, config.dimension)?;
    writeln!(out, "c Geometric Matching Problem")?;
    writeln!(out, "c nodes {}", config.nodes)?;
    writeln!(out, "c dimension {}", config.dimension)?;
    writeln!(out, "c max index value {}", config.max_loc)?;
    match config.seed {
        SeedMode::Given(seed) => writeln!(out, "c seed {seed}")?,
        SeedMode::FromTime => writeln!(out, "c random seed")?,
    }

    for _ in 0..config.nodes {
        write!(out, "v")?;
        for _ in 0..config.dimension {
            write!(out, " {}", uniform_int(&mut rng, config.max_loc))?;
        }
        writeln!(out)?;
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
