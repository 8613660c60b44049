//! Generator configuration: command streams, defaults, validation.
//!
//! Instances are configured through a small line-oriented command
//! stream (`nodes 1000`, `seed 828272727`, ...), historically fed on
//! stdin. Commands may appear in any order; unknown commands produce a
//! warning and are skipped; range and conflict checks run once after
//! the whole stream is read, so option order cannot mask an error.
//!
//! The configs are plain immutable structs; all generation downstream
//! is a pure function of a config plus the generator stream.

use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::rng::PRAND_MAX;

/// Practical node limit for assignment instances. Containers are sized
/// dynamically; this bound only caps accidental multi-gigabyte output.
pub const MAX_ASN_NODES: i64 = 10_000_000;

/// Practical node limit for geometric instances.
pub const MAX_GEOM_NODES: i64 = 1_000_000;

/// Default `maxcost` for assignment instances.
pub const DEFAULT_MAX_COST: i64 = 100_000;

// ---------------------------------------------------------------------------
// Config types
// ---------------------------------------------------------------------------

/// Where the generator seed comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedMode {
    /// An explicit seed from the `seed` command.
    Given(i64),
    /// No seed supplied; derive one from the wall clock at generation
    /// time. The instance records which mode was used in a comment.
    FromTime,
}

impl SeedMode {
    /// Resolves to a concrete seed value.
    pub fn resolve(self) -> i64 {
        match self {
            SeedMode::Given(seed) => seed,
            SeedMode::FromTime => SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_secs() as i64)
                .unwrap_or(0),
        }
    }
}

/// Out-degree mode for assignment instances.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DegreeMode {
    /// Every source connects to every sink.
    Complete,
    /// Every source connects to exactly this many distinct sinks.
    Fixed(i64),
}

/// Arc cost function.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CostMode {
    /// One fresh `uniform_int(max_cost)` per arc.
    Random,
    /// Deterministic `source_id * sink_id * max_cost` surface
    /// (the `multiple` command), for structured stress instances.
    Product,
}

/// Validated configuration for the assignment family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AsnConfig {
    /// Total node count; sources are `1..=sources`, sinks the rest.
    pub nodes: i64,
    /// Number of source (supply) nodes.
    pub sources: i64,
    /// Maximum arc cost.
    pub max_cost: i64,
    /// Complete bipartite graph or fixed out-degree.
    pub degree: DegreeMode,
    /// Random or deterministic arc costs.
    pub costs: CostMode,
    /// Seed source.
    pub seed: SeedMode,
}

impl AsnConfig {
    /// Number of sink nodes.
    pub fn sinks(&self) -> i64 {
        self.nodes - self.sources
    }

    /// Effective out-degree per source.
    pub fn out_degree(&self) -> i64 {
        match self.degree {
            DegreeMode::Complete => self.sinks(),
            DegreeMode::Fixed(d) => d,
        }
    }

    /// Total arcs the instance will contain.
    pub fn arc_count(&self) -> i64 {
        self.sources * self.out_degree()
    }
}

/// Validated configuration for the geometric family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeomConfig {
    /// Number of points.
    pub nodes: i64,
    /// Coordinate dimensionality.
    pub dimension: i64,
    /// Upper bound for each coordinate (inclusive).
    pub max_loc: i64,
    /// Seed source.
    pub seed: SeedMode,
}

// ---------------------------------------------------------------------------
// ConfigError
// ---------------------------------------------------------------------------

/// Fatal configuration problems. Any of these aborts the run; partial
/// output must not be trusted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The required `nodes` command never appeared.
    MissingNodes,
    /// `nodes` outside `[1, limit]`.
    NodesOutOfRange {
        /// The rejected value.
        nodes: i64,
        /// The practical limit for this family.
        limit: i64,
    },
    /// `sources` outside `[1, nodes]`.
    SourcesOutOfRange {
        /// The rejected value.
        sources: i64,
        /// The configured node count.
        nodes: i64,
    },
    /// `maxcost` below 1.
    MaxCostNotPositive {
        /// The rejected value.
        max_cost: i64,
    },
    /// `degree` below 1 or larger than the sink count.
    DegreeOutOfRange {
        /// The rejected value.
        degree: i64,
        /// Number of available sinks.
        sinks: i64,
    },
    /// Both `complete` and `degree` were given.
    CompleteAndDegree,
    /// `dimension` below 1.
    DimensionNotPositive {
        /// The rejected value.
        dimension: i64,
    },
    /// `maxloc` outside `[1, PRAND_MAX]`.
    MaxLocOutOfRange {
        /// The rejected value.
        max_loc: i64,
    },
    /// A command that needs a value appeared without one.
    MissingValue {
        /// The command name.
        option: String,
    },
    /// A command value that did not parse as an integer.
    InvalidValue {
        /// The command name.
        option: String,
        /// The unparsable token.
        value: String,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingNodes => write!(f, "nodes: required command is missing"),
            Self::NodesOutOfRange { nodes, limit } => {
                write!(f, "nodes out of range: {nodes} (must be in [1, {limit}])")
            }
            Self::SourcesOutOfRange { sources, nodes } => {
                write!(f, "sources out of range: {sources} (must be in [1, {nodes}])")
            }
            Self::MaxCostNotPositive { max_cost } => {
                write!(f, "maxcost must be positive, got {max_cost}")
            }
            Self::DegreeOutOfRange { degree, sinks } => {
                write!(f, "degree out of range: {degree} (must be in [1, {sinks}])")
            }
            Self::CompleteAndDegree => {
                write!(f, "either complete or degree may be given, not both")
            }
            Self::DimensionNotPositive { dimension } => {
                write!(f, "dimension must be positive, got {dimension}")
            }
            Self::MaxLocOutOfRange { max_loc } => {
                write!(f, "maxloc out of range: {max_loc} (must be in [1, {PRAND_MAX}])")
            }
            Self::MissingValue { option } => {
                write!(f, "{option}: missing value")
            }
            Self::InvalidValue { option, value } => {
                write!(f, "{option}: invalid value `{value}`")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

// ---------------------------------------------------------------------------
// Command-stream parsers
// ---------------------------------------------------------------------------

fn int_value(option: &str, token: Option<&str>) -> Result<i64, ConfigError> {
    let raw = token.ok_or_else(|| ConfigError::MissingValue {
        option: option.to_owned(),
    })?;
    raw.parse::<i64>().map_err(|_| ConfigError::InvalidValue {
        option: option.to_owned(),
        value: raw.to_owned(),
    })
}

/// Parses an assignment-family command stream.
///
/// Recognized commands: `nodes N` (required), `sources S` (default 1),
/// `maxcost C` (default 100000), `degree D` (default 1), `complete`,
/// `multiple`, `seed X` (default: time-derived). Unknown commands are
/// returned as warnings, one message per skipped line.
///
/// # Errors
///
/// Returns [`ConfigError`] for a missing `nodes` command, any value out
/// of range, a `complete`/`degree` conflict, or an unparsable value.
pub fn parse_asn(input: &str) -> Result<(AsnConfig, Vec<String>), ConfigError> {
    let mut nodes: Option<i64> = None;
    let mut sources = 1_i64;
    let mut max_cost = DEFAULT_MAX_COST;
    let mut degree: Option<i64> = None;
    let mut complete = false;
    let mut costs = CostMode::Random;
    let mut seed = SeedMode::FromTime;
    let mut warnings = Vec::new();

    for line in input.lines() {
        let mut tokens = line.split_whitespace();
        let Some(cmd) = tokens.next() else { continue };
        match cmd {
            "nodes" => nodes = Some(int_value(cmd, tokens.next())?),
            "sources" => sources = int_value(cmd, tokens.next())?,
            "maxcost" => max_cost = int_value(cmd, tokens.next())?,
            "degree" => degree = Some(int_value(cmd, tokens.next())?),
            "seed" => seed = SeedMode::Given(int_value(cmd, tokens.next())?),
            "complete" => complete = true,
            "multiple" => costs = CostMode::Product,
            unknown => warnings.push(format!("{unknown}: unknown command, ignored")),
        }
    }

    let nodes = nodes.ok_or(ConfigError::MissingNodes)?;
    if !(1..=MAX_ASN_NODES).contains(&nodes) {
        return Err(ConfigError::NodesOutOfRange {
            nodes,
            limit: MAX_ASN_NODES,
        });
    }
    if !(1..=nodes).contains(&sources) {
        return Err(ConfigError::SourcesOutOfRange { sources, nodes });
    }
    if max_cost < 1 {
        return Err(ConfigError::MaxCostNotPositive { max_cost });
    }
    if complete && degree.is_some() {
        return Err(ConfigError::CompleteAndDegree);
    }

    let sinks = nodes - sources;
    let degree = if complete {
        DegreeMode::Complete
    } else {
        let d = degree.unwrap_or(1);
        if d < 1 || d > sinks {
            return Err(ConfigError::DegreeOutOfRange { degree: d, sinks });
        }
        DegreeMode::Fixed(d)
    };

    Ok((
        AsnConfig {
            nodes,
            sources,
            max_cost,
            degree,
            costs,
            seed,
        },
        warnings,
    ))
}

/// Parses a geometric-family command stream.
///
/// Recognized commands: `nodes N` (required), `dimension D` (default
/// 2), `maxloc M` (default [`PRAND_MAX`]), `seed X` (default:
/// time-derived). Unknown commands are returned as warnings.
///
/// # Errors
///
/// Returns [`ConfigError`] for a missing `nodes` command, any value out
/// of range, or an unparsable value.
pub fn parse_geom(input: &str) -> Result<(GeomConfig, Vec<String>), ConfigError> {
    let mut nodes: Option<i64> = None;
    let mut dimension = 2_i64;
    let mut max_loc = PRAND_MAX;
    let mut seed = SeedMode::FromTime;
    let mut warnings = Vec::new();

    for line in input.lines() {
        let mut tokens = line.split_whitespace();
        let Some(cmd) = tokens.next() else { continue };
        match cmd {
            "nodes" => nodes = Some(int_value(cmd, tokens.next())?),
            "dimension" => dimension = int_value(cmd, tokens.next())?,
            "maxloc" => max_loc = int_value(cmd, tokens.next())?,
            "seed" => seed = SeedMode::Given(int_value(cmd, tokens.next())?),
            unknown => warnings.push(format!("{unknown}: unknown command, ignored")),
        }
    }

    let nodes = nodes.ok_or(ConfigError::MissingNodes)?;
    if !(1..=MAX_GEOM_NODES).contains(&nodes) {
        return Err(ConfigError::NodesOutOfRange {
            nodes,
            limit: MAX_GEOM_NODES,
        });
    }
    if dimension < 1 {
        return Err(ConfigError::DimensionNotPositive { dimension });
    }
    if !(1..=PRAND_MAX).contains(&max_loc) {
        return Err(ConfigError::MaxLocOutOfRange { max_loc });
    }

    Ok((
        GeomConfig {
            nodes,
            dimension,
            max_loc,
            seed,
        },
        warnings,
    ))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
