//! Regex matchers for the four line shapes of a `-ftime-report` block.
//!
//! Three of the shapes are fixed GCC output; the unit-start shape defaults to
//! CMake's progress line but can be swapped for any pattern with a single
//! capture group, so logs from other build tools stay parseable.

use anyhow::{Context, Result, ensure};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::stats::PhaseStat;

/// CMake progress line announcing the compilation of one object file.
pub const DEFAULT_UNIT_START: &str = r"\[[\d ]+%\] Building [^ ]+ object (.+)$";

static UNIT_START: Lazy<Regex> = Lazy::new(|| Regex::new(DEFAULT_UNIT_START).unwrap());

static EXECUTION_HEADER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"Execution times \(seconds\)$").unwrap());

// One `-ftime-report` phase row: usr, sys and wall (value, percent) pairs
// followed by the ggc memory column. Only the wall pair is retained.
static PHASE_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"([()|\w -]+):[ ]*([\d.]+)[ ]*\([ ]*([\d.]+)%\)[ ]+usr[ ]+([\d.]+)[ ]*\([ ]*([\d.]+)%\)[ ]+sys[ ]+([\d.]+)[ ]*\([ ]*([\d.]+)%\)[ ]+wall[ ]+([\d.]+)[ ]*([a-zA-Z]+)[ ]*\([ ]*([\d.]+)%\)[ ]+ggc",
    )
    .unwrap()
});

// Closing row of a report block; the third numeric field is the wall total.
static TOTAL_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"TOTAL[ ]+:[ ]+([\d.]+)[ ]+([\d.]+)[ ]+([\d.]+)[ ]+([\d.]+)[ ]+([a-zA-Z]+)")
        .unwrap()
});

/// The compiled line matchers for one run.
#[derive(Debug, Clone)]
pub struct LineGrammar {
    unit_start: Regex,
}

impl Default for LineGrammar {
    fn default() -> Self {
        Self {
            unit_start: UNIT_START.clone(),
        }
    }
}

impl LineGrammar {
    /// Build a grammar whose unit-start matcher is the given pattern.
    ///
    /// The pattern must compile and contain exactly one capture group (the
    /// unit's path); anything else is a fatal configuration error.
    pub fn with_unit_start(pattern: &str) -> Result<Self> {
        let unit_start = Regex::new(pattern)
            .with_context(|| format!("invalid --unit-line pattern '{pattern}'"))?;
        ensure!(
            unit_start.captures_len() == 2,
            "--unit-line pattern must have exactly one capture group, found {}",
            unit_start.captures_len() - 1
        );
        Ok(Self { unit_start })
    }

    /// Path of the unit whose compilation this line announces.
    pub fn unit_start(&self, line: &str) -> Option<String> {
        self.unit_start
            .captures(line)
            .map(|caps| caps[1].trim().to_string())
    }

    /// Does this line introduce a profiling report?
    pub fn execution_header(&self, line: &str) -> bool {
        EXECUTION_HEADER.is_match(line)
    }

    /// Phase name and wall-clock pair of one phase row.
    ///
    /// The usr/sys/ggc fields are matched for shape but discarded. A row
    /// whose wall fields fail numeric parsing is treated as no match.
    pub fn phase(&self, line: &str) -> Option<(String, PhaseStat)> {
        let caps = PHASE_LINE.captures(line)?;
        let name = caps[1].trim().to_string();
        let wall_seconds = caps[6].parse().ok()?;
        let wall_percents = caps[7].parse().ok()?;
        Some((
            name,
            PhaseStat {
                wall_seconds,
                wall_percents,
            },
        ))
    }

    /// Wall-clock total of a closing TOTAL row.
    pub fn total(&self, line: &str) -> Option<f64> {
        let caps = TOTAL_LINE.captures(line)?;
        caps[3].parse().ok()
    }
}
