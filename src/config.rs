//! Run configuration resolved once from the command line.

use anyhow::Result;
use log::debug;

use crate::cli::Cli;
use crate::filter::PatternFilter;
use crate::grammar::LineGrammar;
use crate::sort::{PhaseOrder, SortKey};

/// Everything the pipeline reads, validated and compiled up front.
///
/// Every regex (the filters and the unit-start override) compiles here, so an
/// invalid pattern fails the run before any input is opened. Components only
/// ever see this as a shared reference.
#[derive(Debug)]
pub struct Config {
    pub grammar: LineGrammar,
    pub unit_filter: PatternFilter,
    pub phase_filter: PatternFilter,
    pub from_line: Option<usize>,
    pub to_line: Option<usize>,
    pub sort: SortKey,
    pub descending: bool,
    pub limit: Option<usize>,
    pub phase_order: PhaseOrder,
    pub min_valuable_unit_time: f64,
    pub min_valuable_phase_time: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            grammar: LineGrammar::default(),
            unit_filter: PatternFilter::default(),
            phase_filter: PatternFilter::default(),
            from_line: None,
            to_line: None,
            sort: SortKey::Total,
            descending: true,
            limit: None,
            phase_order: PhaseOrder::Time,
            min_valuable_unit_time: 5.0,
            min_valuable_phase_time: 1.0,
        }
    }
}

impl Config {
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let grammar = match &cli.unit_line {
            Some(pattern) => LineGrammar::with_unit_start(pattern)?,
            None => LineGrammar::default(),
        };

        let config = Self {
            grammar,
            unit_filter: PatternFilter::new(&cli.include, &cli.exclude)?,
            phase_filter: PatternFilter::new(&cli.include_phase, &cli.exclude_phase)?,
            from_line: cli.from_line,
            to_line: cli.to_line,
            sort: SortKey::parse(&cli.sort),
            descending: !cli.asc,
            limit: cli.limit,
            phase_order: cli.sort_phases,
            min_valuable_unit_time: cli.min_valuable_unit_time,
            min_valuable_phase_time: cli.min_valuable_phase_time,
        };

        debug!(
            "sorting by {:?}, {}",
            config.sort,
            if config.descending {
                "descending"
            } else {
                "ascending"
            }
        );
        Ok(config)
    }
}
