//! Per-day staffing aggregation for the schedule grid.
//!
//! Row layout, top to bottom:
//!   [tracked shifts] -> [OFF] -> [categories] -> [TOTAL]
//! with one count per visible day in every row.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::config::GridSummaryConfig;
use crate::models::{Assignments, ShiftCategory, ShiftType};
use crate::{log_debug, log_detail, log_summary};

use super::alert::AlertLevel;
use super::catalogue::{category_lookup, tracked_categories, tracked_shifts, CategoryLookup};

/// Kind of summary row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RowKind {
    Shift,
    Off,
    Category,
    Total,
}

/// One aggregated line of the staffing grid.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryRow {
    pub key: String,
    pub label: String,
    pub kind: RowKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_code: Option<String>,
    /// One count per visible day, in day-range order.
    pub counts: Vec<u32>,
    /// Staffing threshold; set on category rows only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_required: Option<u32>,
}

/// Raw aggregates for one visible day.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyCounts {
    /// Every assigned code, tracked or not.
    pub shifts: BTreeMap<String, u32>,
    /// Tracked category code -> summed shift counts.
    pub categories: BTreeMap<String, u32>,
    pub off: u32,
    pub total: u32,
}

impl DailyCounts {
    pub fn shift(&self, code: &str) -> u32 {
        self.shifts.get(code).copied().unwrap_or(0)
    }

    pub fn category(&self, code: &str) -> u32 {
        self.categories.get(code).copied().unwrap_or(0)
    }
}

/// Result of one summary pass.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridSummary {
    pub rows: Vec<SummaryRow>,
    pub daily: Vec<DailyCounts>,
    pub tracked_shifts: Vec<ShiftType>,
    pub tracked_categories: Vec<ShiftCategory>,
}

impl GridSummary {
    /// Index of the OFF row, i.e. the number of shift rows above it.
    pub fn shift_row_count(&self) -> usize {
        self.tracked_shifts.len()
    }

    pub fn day_count(&self) -> usize {
        self.daily.len()
    }

    pub fn row(&self, key: &str) -> Option<&SummaryRow> {
        self.rows.iter().find(|r| r.key == key)
    }

    /// Alert for a `(row, day)` cell; `None` if the row index is out of range.
    pub fn classify(&self, row_index: usize, day_index: usize) -> Option<AlertLevel> {
        self.rows.get(row_index).map(|row| row.alert(day_index))
    }

    /// Alert matrix, one inner vector per row.
    pub fn alerts(&self) -> Vec<Vec<AlertLevel>> {
        self.rows
            .iter()
            .map(|row| (0..row.counts.len()).map(|day| row.alert(day)).collect())
            .collect()
    }
}

/// Aggregate one day across the roster.
fn count_day(
    day: &str,
    employees: &[String],
    assignments: &Assignments,
    lookup: &CategoryLookup,
    categories: &[ShiftCategory],
    config: &GridSummaryConfig,
) -> DailyCounts {
    let mut counts = DailyCounts::default();

    for employee in employees {
        let Some(code) = assignments.get(employee).and_then(|by_day| by_day.get(day)) else {
            continue;
        };
        if code.is_empty() {
            continue;
        }
        if !lookup.contains_key(code) {
            log_debug!(config.verbosity, "  {}: unknown code {} for {}", day, code, employee);
        }
        *counts.shifts.entry(code.clone()).or_insert(0) += 1;
        if config.is_off(code) {
            counts.off += 1;
        }
        counts.total += 1;
    }

    for category in categories {
        counts.categories.insert(category.code.clone(), 0);
    }
    for (code, count) in &counts.shifts {
        if let Some(Some(category)) = lookup.get(code) {
            if let Some(total) = counts.categories.get_mut(category) {
                *total += count;
            }
        }
    }

    counts
}

/// Summarize staffing per visible day.
///
/// * `employees` - Roster in display order (already filtered by the caller)
/// * `assignments` - Employee id -> ISO date -> shift code
/// * `days` - Visible ISO dates; every row has one count per entry
/// * `shift_types` / `categories` - Catalogues
/// * `config` - Taxonomy (category ranking, OFF code, excluded categories)
///
/// Pure: identical inputs give identical output, and nothing from a previous
/// pass is reused.
pub fn summarize(
    employees: &[String],
    assignments: &Assignments,
    days: &[String],
    shift_types: &[ShiftType],
    categories: &[ShiftCategory],
    config: &GridSummaryConfig,
) -> GridSummary {
    let lookup = category_lookup(shift_types);
    let shifts = tracked_shifts(shift_types, config);
    let cats = tracked_categories(categories, config);

    let daily: Vec<DailyCounts> = days
        .iter()
        .map(|day| {
            let counts = count_day(day, employees, assignments, &lookup, &cats, config);
            log_detail!(
                config.verbosity,
                "  {}: total={} off={} codes={}",
                day,
                counts.total,
                counts.off,
                counts.shifts.len()
            );
            counts
        })
        .collect();

    let mut rows: Vec<SummaryRow> = Vec::with_capacity(shifts.len() + cats.len() + 2);

    for st in &shifts {
        rows.push(SummaryRow {
            key: format!("shift-{}", st.code),
            label: st.code.clone(),
            kind: RowKind::Shift,
            category_code: st.category_code.clone().filter(|c| !c.is_empty()),
            counts: daily.iter().map(|d| d.shift(&st.code)).collect(),
            min_required: None,
        });
    }

    rows.push(SummaryRow {
        key: "off".to_string(),
        label: config.off_code.clone(),
        kind: RowKind::Off,
        category_code: None,
        counts: daily.iter().map(|d| d.off).collect(),
        min_required: None,
    });

    for cat in &cats {
        rows.push(SummaryRow {
            key: format!("cat-{}", cat.code),
            label: cat.code.clone(),
            kind: RowKind::Category,
            category_code: None,
            counts: daily.iter().map(|d| d.category(&cat.code)).collect(),
            min_required: Some(cat.min_traders),
        });
    }

    rows.push(SummaryRow {
        key: "total".to_string(),
        label: "TOTAL".to_string(),
        kind: RowKind::Total,
        category_code: None,
        counts: daily.iter().map(|d| d.total).collect(),
        min_required: None,
    });

    log_summary!(
        config.verbosity,
        "Summary: {} employees x {} days -> {} rows",
        employees.len(),
        days.len(),
        rows.len()
    );

    GridSummary {
        rows,
        daily,
        tracked_shifts: shifts,
        tracked_categories: cats,
    }
}
