//! Single-pass collector that walks log lines and accumulates unit records.

use log::debug;

use crate::config::Config;
use crate::stats::{UnitMap, UnitStat};

/// Collector state: between units, waiting for the profiling header of an
/// announced unit, or accumulating phase rows until a TOTAL closes the block.
#[derive(Debug)]
enum State {
    Idle,
    PathKnown(String),
    Collecting(UnitStat),
}

/// The parse state machine for one log.
///
/// Lines that match nothing are ignored; a unit-start line arriving before
/// the previous block's TOTAL discards the unfinished block. A unit is
/// committed only when its TOTAL row is seen and its path passes the filter.
pub struct Collector<'a> {
    config: &'a Config,
    state: State,
    units: UnitMap,
}

impl<'a> Collector<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self {
            config,
            state: State::Idle,
            units: UnitMap::new(),
        }
    }

    /// Classify one line and advance the state machine.
    pub fn accept(&mut self, line: &str) {
        if matches!(self.state, State::Collecting(_)) {
            if let Some((name, stat)) = self.config.grammar.phase(line) {
                debug!("parsed as phase line");
                if let State::Collecting(unit) = &mut self.state {
                    if self.config.phase_filter.allows(&name) {
                        unit.phases.insert(name, stat);
                    } else {
                        debug!("phase '{name}' dropped by filter");
                    }
                }
                return;
            }
            if let Some(total) = self.config.grammar.total(line) {
                debug!("parsed as total line");
                if let State::Collecting(mut unit) =
                    std::mem::replace(&mut self.state, State::Idle)
                {
                    unit.wall_total = Some(total);
                    if self.config.unit_filter.allows(&unit.path) {
                        self.units.insert(unit.path.clone(), unit);
                    } else {
                        debug!("unit '{}' dropped by filter", unit.path);
                    }
                }
                return;
            }
        } else if matches!(self.state, State::PathKnown(_)) {
            if self.config.grammar.execution_header(line) {
                debug!("parsed as execution times header");
                if let State::PathKnown(path) = std::mem::replace(&mut self.state, State::Idle) {
                    self.state = State::Collecting(UnitStat::new(path));
                }
                return;
            }
        }

        // Tried last in every state: a new unit-start line resets the
        // machine, discarding an unfinished block.
        if let Some(path) = self.config.grammar.unit_start(line) {
            debug!("parsed as unit start for '{path}'");
            if matches!(self.state, State::Collecting(_)) {
                debug!("unit start before TOTAL; discarding unfinished block");
            }
            self.state = State::PathKnown(path);
        }
    }

    /// Committed units, dropping any block still in progress.
    pub fn finish(self) -> UnitMap {
        self.units
    }
}

/// Parse a whole log into committed unit records, honoring the configured
/// 1-based inclusive line window.
pub fn collect_units(config: &Config, input: &str) -> UnitMap {
    let mut collector = Collector::new(config);
    for (index, line) in input.lines().enumerate() {
        let line_number = index + 1;
        if config.from_line.is_some_and(|from| line_number < from) {
            continue;
        }
        if config.to_line.is_some_and(|to| line_number > to) {
            break;
        }
        debug!("processing line {line_number}: {line}");
        collector.accept(line);
    }
    collector.finish()
}
