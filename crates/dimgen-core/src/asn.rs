//! Assignment-family instance writer.
//!
//! Emits a bipartite assignment instance in DIMACS format: the `p asn`
//! problem line, a parameter report in comments, one `n` line per
//! source, then the arcs. Sources are numbered `1..=sources`, sinks
//! `sources+1..=nodes`. Complete mode emits every source-sink pair;
//! fixed-degree mode picks distinct sinks per source through the
//! no-replacement selector, so a source never gets duplicate arcs.

use std::io::{self, Write};

use crate::config::{AsnConfig, CostMode, DegreeMode, SeedMode};
use crate::rng::PortableRng;
use crate::sampler::uniform_int;
use crate::select::Selector;

/// Cost of the arc `src -> sink`.
///
/// Product mode multiplies in 128-bit so the structured cost surface
/// stays exact even at the node and cost limits.
fn arc_cost(rng: &mut PortableRng, config: &AsnConfig, src: i64, sink: i64) -> i128 {
    match config.costs {
        CostMode::Random => i128::from(uniform_int(rng, config.max_cost)),
        CostMode::Product => i128::from(src) * i128::from(sink) * i128::from(config.max_cost),
    }
}

/// Writes a complete assignment instance to `out`.
///
/// Generation is a pure function of `config` and the seed it resolves:
/// the same config with a `seed` command produces byte-identical
/// output on every run and platform.
///
/// # Errors
///
/// Returns any error from the output sink.
pub fn write_assignment<W: Write>(config: &AsnConfig, out: &mut W) -> io::Result<()> {
    let mut rng = PortableRng::new(config.seed.resolve());

    writeln!(out, "p asn {} {}", config.nodes, config.arc_count())?;
    writeln!(out, "c Assignment flow problem")?;
    writeln!(out, "c Max arc cost {}", config.max_cost)?;
    writeln!(out, "c nodes {}", config.nodes)?;
    writeln!(out, "c sources {}", config.sources)?;
    writeln!(out, "c out-degree {}", config.out_degree())?;
    match config.seed {
        SeedMode::Given(seed) => writeln!(out, "c seed {seed}")?,
        SeedMode::FromTime => writeln!(out, "c random seed")?,
    }

    for src in 1..=config.sources {
        writeln!(out, "n {src}")?;
    }

    match config.degree {
        DegreeMode::Complete => write_complete(config, &mut rng, out),
        DegreeMode::Fixed(degree) => write_fixed_degree(config, degree, &mut rng, out),
    }
}

fn write_complete<W: Write>(config: &AsnConfig, rng: &mut PortableRng, out: &mut W) -> io::Result<()> {
    for src in 1..=config.sources {
        for sink in config.sources + 1..=config.nodes {
            let cost = arc_cost(rng, config, src, sink);
            writeln!(out, "a {src} {sink} {cost}")?;
        }
    }
    Ok(())
}

fn write_fixed_degree<W: Write>(
    config: &AsnConfig,
    degree: i64,
    rng: &mut PortableRng,
    out: &mut W,
) -> io::Result<()> {
    let sinks = config.sinks();
    let mut selector = Selector::new();
    for src in 1..=config.sources {
        // The selector yields sink offsets in [1, sinks]; the sink id
        // adds the source block. Cost draws interleave with candidate
        // draws, one arc at a time.
        selector.select(rng, degree, sinks, |rng, offset| {
            let sink = config.sources + offset;
            let cost = arc_cost(rng, config, src, sink);
            writeln!(out, "a {src} {sink} {cost}")
        })?;
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
