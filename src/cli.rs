//! Command-line surface for `pt`.

use clap::Parser;

use crate::sort::PhaseOrder;

/// Scans a build log (CMake by default, others via --unit-line) for the
/// per-unit reports produced by GCC's -ftime-report flag and prints each
/// unit's compilation phase timings, filtered and sorted.
///
/// With a second log, prints a side-by-side comparison of the two runs
/// instead, ordered by the per-unit deltas.
#[derive(Debug, Parser)]
#[command(name = "pt", version, max_term_width = 100)]
pub struct Cli {
    /// Path to the build log file; `-` reads standard input
    pub path: String,

    /// Second build log to compare against; enables comparison mode
    pub path2: Option<String>,

    /// Process only units whose path matches this regex; repeatable
    #[arg(long, value_name = "PATTERN")]
    pub include: Vec<String>,

    /// Skip units whose path matches this regex; repeatable, wins over
    /// --include
    #[arg(long, value_name = "PATTERN")]
    pub exclude: Vec<String>,

    /// Show only phases matching this regex; repeatable
    #[arg(long, value_name = "PATTERN")]
    pub include_phase: Vec<String>,

    /// Hide phases matching this regex; repeatable, wins over
    /// --include-phase
    #[arg(long, value_name = "PATTERN")]
    pub exclude_phase: Vec<String>,

    /// Process log lines starting from this 1-based index (inclusive)
    #[arg(long, value_name = "N")]
    pub from_line: Option<usize>,

    /// Process log lines up to this 1-based index (inclusive)
    #[arg(long, value_name = "N")]
    pub to_line: Option<usize>,

    /// Phase to sort units by, or `total` or `path`; append `%` to a phase
    /// name to sort by its percentage share instead of its time
    #[arg(short = 's', long, default_value = "total", value_name = "KEY")]
    pub sort: String,

    /// Sort units in descending order (the default)
    #[arg(long, overrides_with = "asc")]
    pub desc: bool,

    /// Sort units in ascending order
    #[arg(long, overrides_with = "desc")]
    pub asc: bool,

    /// Print at most this many units; suppresses the summary block
    #[arg(short = 'l', long, value_name = "N")]
    pub limit: Option<usize>,

    /// Order phases within a unit by time or by name
    #[arg(long, value_enum, default_value = "time")]
    pub sort_phases: PhaseOrder,

    /// Consider phase percentages only for units at least this many seconds
    /// long in total
    #[arg(long, default_value_t = 5.0, value_name = "SECONDS")]
    pub min_valuable_unit_time: f64,

    /// Consider phase percentages only for phases at least this many seconds
    /// long
    #[arg(long, default_value_t = 1.0, value_name = "SECONDS")]
    pub min_valuable_phase_time: f64,

    /// Regex that detects the line starting a unit's compilation and
    /// captures its path; must have exactly one capture group. Defaults to
    /// the CMake "[ N%] Building ... object <path>" progress line
    #[arg(long, value_name = "PATTERN")]
    pub unit_line: Option<String>,

    /// Log every line classification decision
    #[arg(short = 'v', long)]
    pub verbose: bool,
}
