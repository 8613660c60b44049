//! Deterministic generators for DIMACS-format benchmark instances.
//!
//! Three instance families, all streamed as line-oriented DIMACS text
//! to any `std::io::Write` sink:
//!
//! - **assignment** ([`asn`]): bipartite assignment graphs, complete
//!   or fixed out-degree, random or structured arc costs;
//! - **geometric** ([`geom`]): uniform integer point sets in d-space
//!   for matching problems;
//! - **pixel adjacency** ([`pixel`]): assignment graphs derived from
//!   P5 grayscale images, costs from neighboring intensity
//!   differences.
//!
//! All randomness comes from [`rng::PortableRng`], a self-contained
//! lagged-Fibonacci generator whose stream is identical on every
//! platform for a given seed, so instances are bit-reproducible. This
//! crate performs no process I/O: configuration arrives as parsed
//! structs or command-stream text, diagnostics leave as typed errors
//! or returned warnings.
#![deny(clippy::print_stdout, clippy::print_stderr)]

pub mod asn;
pub mod config;
pub mod geom;
pub mod pgm;
pub mod pixel;
pub mod rng;
pub mod sampler;
pub mod select;

pub use asn::write_assignment;
pub use config::{
    AsnConfig, ConfigError, CostMode, DegreeMode, GeomConfig, SeedMode, parse_asn, parse_geom,
};
pub use geom::write_geometric;
pub use pgm::{PgmError, PgmImage};
pub use pixel::{PixelStats, write_pixel_assignment};
pub use rng::{PRAND_MAX, PortableRng};
pub use sampler::{uniform_float, uniform_int};
pub use select::{ProbeTable, Selector};

/// Returns the crate version string.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
