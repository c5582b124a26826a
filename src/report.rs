//! Plain-text rendering of unit listings and two-log comparisons.

use std::fmt::Write as _;

use crate::config::Config;
use crate::sort::{sorted_phase_names, sorted_unit_names};
use crate::stats::{PhaseStat, SUMMARY_LABEL, UnitMap, UnitStat, diff_unit, diff_units, summary_unit};

const DIFF_ARROW: &str = "  --->  ";

/// `{:>6.1} s.` plus minutes when asked for; `None` renders as blanks of the
/// same width so absent values in a comparison stay visually distinct from
/// zero.
fn time_str(seconds: Option<f64>, with_minutes: bool) -> String {
    let Some(sec) = seconds else {
        return " ".repeat(if with_minutes { 19 } else { 9 });
    };
    let mut s = format!("{sec:>6.1} s.");
    if with_minutes {
        write!(s, " = {:>4.1} m.", sec / 60.0).unwrap();
    }
    s
}

fn time_diff_str(first: f64, second: f64, with_minutes: bool) -> String {
    format!(
        "{}{DIFF_ARROW}{}",
        time_str(Some(first), with_minutes),
        time_str(Some(second), with_minutes)
    )
}

fn timing_str(phase: Option<&PhaseStat>, with_minutes: bool) -> String {
    match phase {
        None => format!("{}{}", time_str(None, with_minutes), " ".repeat(8)),
        Some(p) => format!(
            "{} ({:>3.0} %)",
            time_str(Some(p.wall_seconds), with_minutes),
            p.wall_percents
        ),
    }
}

fn render_unit(out: &mut String, config: &Config, unit: &UnitStat, index: Option<usize>) {
    match index {
        Some(i) => writeln!(out, "{i} : {}", unit.path).unwrap(),
        None => writeln!(out, "{}", unit.path).unwrap(),
    }
    // Minutes only appear on unindexed rows, i.e. in the summary block.
    let with_minutes = index.is_none();
    for name in sorted_phase_names(config.phase_order, unit) {
        let phase = &unit.phases[name.as_str()];
        writeln!(
            out,
            "   {name:<40} : {}",
            timing_str(Some(phase), with_minutes)
        )
        .unwrap();
    }
    writeln!(out, "  TOTAL : {}", time_str(unit.wall_total, true)).unwrap();
    writeln!(out).unwrap();
}

fn render_unit_diff(
    out: &mut String,
    config: &Config,
    first: Option<&UnitStat>,
    second: Option<&UnitStat>,
    diff: &UnitStat,
    index: Option<usize>,
) {
    match index {
        Some(i) => writeln!(out, "{i} : {}", diff.path).unwrap(),
        None => writeln!(out, "{}", diff.path).unwrap(),
    }
    let with_minutes = index.is_none();
    // The diff record orders the rows; each side shows its own values, with
    // blanks where a side never ran the phase.
    for name in sorted_phase_names(config.phase_order, diff) {
        fn side<'a>(unit: Option<&'a UnitStat>, name: &str) -> Option<&'a PhaseStat> {
            unit.and_then(|u| u.phases.get(name))
        }
        writeln!(
            out,
            "   {name:<40} : {}{DIFF_ARROW}{}",
            timing_str(side(first, name.as_str()), with_minutes),
            timing_str(side(second, name.as_str()), with_minutes)
        )
        .unwrap();
    }
    let total = |unit: Option<&UnitStat>| unit.map_or(0.0, UnitStat::total);
    writeln!(
        out,
        "  TOTAL : {}",
        time_diff_str(total(first), total(second), true)
    )
    .unwrap();
    writeln!(out).unwrap();
}

fn summary_enabled(config: &Config) -> bool {
    matches!(config.limit, None | Some(0))
}

fn shown_count(config: &Config, available: usize) -> usize {
    match config.limit {
        Some(limit) if limit > 0 => limit.min(available),
        _ => available,
    }
}

/// Render the sorted, limited unit listing of one log. Without a limit the
/// summary record is appended after the listing.
pub fn render_units(config: &Config, units: &UnitMap) -> String {
    let mut out = String::new();
    let names = sorted_unit_names(config, units);

    for (index, name) in names.iter().take(shown_count(config, names.len())).enumerate() {
        render_unit(&mut out, config, &units[name.as_str()], Some(index));
    }
    if summary_enabled(config) {
        render_unit(&mut out, config, &summary_unit(units), None);
    }
    out
}

/// Render the two-log comparison: units ordered by their diff records, each
/// row showing `first  --->  second`.
pub fn render_units_diff(config: &Config, first: &UnitMap, second: &UnitMap) -> String {
    let mut out = String::new();
    let diffs = diff_units(first, second);
    let names = sorted_unit_names(config, &diffs);

    for (index, name) in names.iter().take(shown_count(config, names.len())).enumerate() {
        render_unit_diff(
            &mut out,
            config,
            first.get(name.as_str()),
            second.get(name.as_str()),
            &diffs[name.as_str()],
            Some(index),
        );
    }
    if summary_enabled(config) {
        let first_sum = summary_unit(first);
        let second_sum = summary_unit(second);
        let diff = diff_unit(SUMMARY_LABEL, Some(&first_sum), Some(&second_sum));
        render_unit_diff(&mut out, config, Some(&first_sum), Some(&second_sum), &diff, None);
    }
    out
}
