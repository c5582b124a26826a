//! Per-unit timing records and the derived summary/diff aggregates.

use indexmap::{IndexMap, IndexSet};

/// Path label of the synthetic record summing every unit.
pub const SUMMARY_LABEL: &str = "PHASES SUMMARY";

/// Wall-clock timing of one compilation phase within one unit.
///
/// Raw records carry non-negative seconds; diff records may go negative
/// (a phase that got faster) and always carry a zero percentage.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhaseStat {
    pub wall_seconds: f64,
    pub wall_percents: f64,
}

/// One compilation unit's aggregated profiling data.
#[derive(Debug, Clone)]
pub struct UnitStat {
    pub path: String,
    pub phases: IndexMap<String, PhaseStat>,
    /// Set when the closing TOTAL line is seen. A unit that never reaches a
    /// TOTAL line stays `None` and is never committed to the result map.
    pub wall_total: Option<f64>,
}

impl UnitStat {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            phases: IndexMap::new(),
            wall_total: None,
        }
    }

    /// Total wall time, treating an uncommitted record as zero.
    pub fn total(&self) -> f64 {
        self.wall_total.unwrap_or(0.0)
    }
}

/// Committed units of one parse, keyed by path, in log order.
pub type UnitMap = IndexMap<String, UnitStat>;

/// Sum every unit into one synthetic record.
///
/// Phase seconds are summed per name across all units; percentages are then
/// recomputed against the summed total (0 when the total itself is 0).
pub fn summary_unit(units: &UnitMap) -> UnitStat {
    let mut summary = UnitStat::new(SUMMARY_LABEL);
    let mut total = 0.0;

    for unit in units.values() {
        total += unit.total();
        for (name, phase) in &unit.phases {
            summary
                .phases
                .entry(name.clone())
                .and_modify(|p| p.wall_seconds += phase.wall_seconds)
                .or_insert(PhaseStat {
                    wall_seconds: phase.wall_seconds,
                    wall_percents: 0.0,
                });
        }
    }

    for phase in summary.phases.values_mut() {
        phase.wall_percents = if total > 0.0 {
            phase.wall_seconds * 100.0 / total
        } else {
            0.0
        };
    }
    summary.wall_total = Some(total);
    summary
}

/// Arithmetic delta between two records for the same path: second minus
/// first, over the union of their phase names.
///
/// A missing side contributes zero everywhere, so a unit present in only one
/// log diffs against an all-zero counterpart. Percentages are not diffed and
/// stay 0.
pub fn diff_unit(path: &str, first: Option<&UnitStat>, second: Option<&UnitStat>) -> UnitStat {
    let mut diff = UnitStat::new(path);
    let first_total = first.map_or(0.0, UnitStat::total);
    let second_total = second.map_or(0.0, UnitStat::total);
    diff.wall_total = Some(second_total - first_total);

    let mut names: IndexSet<&String> = first.iter().flat_map(|u| u.phases.keys()).collect();
    names.extend(second.iter().flat_map(|u| u.phases.keys()));

    for name in names {
        let seconds = |unit: Option<&UnitStat>| {
            unit.and_then(|u| u.phases.get(name))
                .map_or(0.0, |p| p.wall_seconds)
        };
        diff.phases.insert(
            name.clone(),
            PhaseStat {
                wall_seconds: seconds(second) - seconds(first),
                wall_percents: 0.0,
            },
        );
    }
    diff
}

/// Per-path diff records across the union of both parses' path sets.
pub fn diff_units(first: &UnitMap, second: &UnitMap) -> UnitMap {
    let mut keys: IndexSet<&String> = first.keys().collect();
    keys.extend(second.keys());

    keys.into_iter()
        .map(|key| {
            (
                key.clone(),
                diff_unit(key, first.get(key), second.get(key)),
            )
        })
        .collect()
}
