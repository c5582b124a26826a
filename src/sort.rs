//! Unit and phase ordering.

use clap::ValueEnum;

use crate::config::Config;
use crate::stats::{UnitMap, UnitStat};

/// What the unit listing is ordered by.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SortKey {
    /// The unit's total wall time.
    Total,
    /// The unit's path, lexically.
    Path,
    /// One phase's wall seconds, or its percentage share when `percents`
    /// is set.
    Phase { name: String, percents: bool },
}

impl SortKey {
    /// Parse the `--sort` argument: `total`, `path`, `<phase>` or `<phase>%`.
    pub fn parse(key: &str) -> Self {
        match key {
            "total" => SortKey::Total,
            "path" => SortKey::Path,
            _ => SortKey::Phase {
                name: key.trim_end_matches('%').to_string(),
                percents: key.contains('%'),
            },
        }
    }
}

/// How phases are ordered inside one printed unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PhaseOrder {
    /// Longest wall time first.
    Time,
    /// Alphabetical.
    Name,
}

/// Numeric sort value of one unit under a total/phase key.
///
/// Percentage keys are suppressed to 0 below the valuable-time thresholds so
/// negligible units and phases cannot dominate a percentage sort.
pub fn unit_sort_value(config: &Config, unit: &UnitStat) -> f64 {
    match &config.sort {
        SortKey::Total => unit.total(),
        SortKey::Path => 0.0,
        SortKey::Phase { name, percents } => {
            let Some(phase) = unit.phases.get(name) else {
                return 0.0;
            };
            if !percents {
                phase.wall_seconds
            } else if phase.wall_seconds >= config.min_valuable_phase_time
                && unit.total() >= config.min_valuable_unit_time
            {
                phase.wall_percents
            } else {
                0.0
            }
        }
    }
}

/// Unit paths in presentation order.
///
/// Sorting is stable, so equal keys keep the order units appeared in the log.
pub fn sorted_unit_names(config: &Config, units: &UnitMap) -> Vec<String> {
    let mut names: Vec<String> = units.keys().cloned().collect();
    match &config.sort {
        SortKey::Path => {
            if config.descending {
                names.sort_by(|a, b| b.cmp(a));
            } else {
                names.sort();
            }
        }
        _ => {
            let value = |name: &str| unit_sort_value(config, &units[name]);
            if config.descending {
                names.sort_by(|a, b| value(b).total_cmp(&value(a)));
            } else {
                names.sort_by(|a, b| value(a).total_cmp(&value(b)));
            }
        }
    }
    names
}

/// Phase names of `unit` in presentation order.
pub fn sorted_phase_names(order: PhaseOrder, unit: &UnitStat) -> Vec<String> {
    let mut names: Vec<String> = unit.phases.keys().cloned().collect();
    match order {
        PhaseOrder::Name => names.sort(),
        PhaseOrder::Time => names.sort_by(|a, b| {
            unit.phases[b.as_str()]
                .wall_seconds
                .total_cmp(&unit.phases[a.as_str()].wall_seconds)
        }),
    }
    names
}
