//! Fingerprint-keyed cache for summary recomputation.
//!
//! Holds at most one [`GridSummary`]. The key is a hash of every input that
//! can influence the output; any change produces a new key and the cached
//! entry is replaced wholesale. Nothing is ever patched in place.

use rustc_hash::FxHasher;
use std::hash::{Hash, Hasher};

use crate::config::GridSummaryConfig;
use crate::log_debug;
use crate::models::{Assignments, ShiftCategory, ShiftType};

use super::aggregate::{summarize, GridSummary};

/// Hash the summary inputs.
///
/// Only the roster x day-range projection of `assignments` is hashed: entries
/// for other employees or dates cannot change the output.
pub fn fingerprint(
    employees: &[String],
    assignments: &Assignments,
    days: &[String],
    shift_types: &[ShiftType],
    categories: &[ShiftCategory],
    config: &GridSummaryConfig,
) -> u64 {
    let mut hasher = FxHasher::default();

    employees.hash(&mut hasher);
    days.hash(&mut hasher);
    for employee in employees {
        let by_day = assignments.get(employee);
        for day in days {
            by_day.and_then(|m| m.get(day)).hash(&mut hasher);
        }
    }
    shift_types.hash(&mut hasher);
    categories.hash(&mut hasher);
    config.hash(&mut hasher);

    hasher.finish()
}

/// Single-entry summary cache.
#[derive(Debug, Default)]
pub struct SummaryCache {
    entry: Option<(u64, GridSummary)>,
    hits: u64,
    misses: u64,
}

impl SummaryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached summary when the inputs are unchanged, otherwise
    /// recompute and replace the entry.
    pub fn get_or_compute(
        &mut self,
        employees: &[String],
        assignments: &Assignments,
        days: &[String],
        shift_types: &[ShiftType],
        categories: &[ShiftCategory],
        config: &GridSummaryConfig,
    ) -> &GridSummary {
        let key = fingerprint(employees, assignments, days, shift_types, categories, config);

        let fresh = matches!(&self.entry, Some((cached, _)) if *cached == key);
        if fresh {
            self.hits += 1;
            log_debug!(config.verbosity, "Summary cache hit {:016x}", key);
        } else {
            self.misses += 1;
            log_debug!(config.verbosity, "Summary cache miss {:016x}", key);
            self.entry = None;
        }

        let (_, summary) = self.entry.get_or_insert_with(|| {
            (
                key,
                summarize(employees, assignments, days, shift_types, categories, config),
            )
        });
        summary
    }

    /// Drop the cached entry.
    pub fn invalidate(&mut self) {
        self.entry = None;
    }

    pub fn is_empty(&self) -> bool {
        self.entry.is_none()
    }

    pub fn hits(&self) -> u64 {
        self.hits
    }

    pub fn misses(&self) -> u64 {
        self.misses
    }
}
