//! Include/exclude pattern filtering for unit paths and phase names.

use anyhow::{Context, Result};
use regex::Regex;

/// A pair of pattern lists with include-then-exclude semantics.
///
/// An empty include list admits everything; exclusion always wins over
/// inclusion. Patterns match anywhere in the candidate (search, not
/// full-match) and are compiled once at construction.
#[derive(Debug, Default)]
pub struct PatternFilter {
    include: Vec<Regex>,
    exclude: Vec<Regex>,
}

impl PatternFilter {
    pub fn new(include: &[String], exclude: &[String]) -> Result<Self> {
        Ok(Self {
            include: compile_all(include)?,
            exclude: compile_all(exclude)?,
        })
    }

    pub fn allows(&self, candidate: &str) -> bool {
        if !self.include.is_empty() && !self.include.iter().any(|re| re.is_match(candidate)) {
            return false;
        }
        !self.exclude.iter().any(|re| re.is_match(candidate))
    }
}

fn compile_all(patterns: &[String]) -> Result<Vec<Regex>> {
    patterns
        .iter()
        .map(|pattern| {
            Regex::new(pattern).with_context(|| format!("invalid filter pattern '{pattern}'"))
        })
        .collect()
}
