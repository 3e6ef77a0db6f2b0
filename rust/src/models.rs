//! Catalogue and roster entities consumed by the grid engine.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Assignment map: employee id -> (ISO date -> shift code).
///
/// Sparse: a missing entry means the employee is unassigned that day. Plain
/// std `HashMap` so it deserializes straight from the wire JSON and converts
/// from Python dicts.
pub type Assignments = HashMap<String, HashMap<String, String>>;

/// Shift code of the vacation status.
pub const VACATION_CODE: &str = "VAC";

/// A shift type from the catalogue.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ShiftType {
    pub id: i64,
    pub code: String,
    pub name: String,
    pub category_code: Option<String>,
    /// `HH:MM[:SS]`
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub is_working_shift: bool,
    pub color_code: String,
    pub is_active: bool,
}

impl ShiftType {
    /// Minimal catalogue entry, used mostly by tests and bindings.
    pub fn new(
        code: &str,
        category_code: Option<&str>,
        is_active: bool,
        is_working_shift: bool,
    ) -> Self {
        Self {
            code: code.to_string(),
            name: code.to_string(),
            category_code: category_code.map(str::to_string),
            is_active,
            is_working_shift,
            ..Default::default()
        }
    }

    /// `"07:00-15:00"`, or empty when either bound is missing.
    pub fn time_range(&self) -> String {
        format_time_range(self.start_time.as_deref(), self.end_time.as_deref())
    }

    /// Code with its time range, e.g. `"AM (07:00-15:00)"`.
    pub fn label(&self) -> String {
        let range = self.time_range();
        if range.is_empty() {
            self.code.clone()
        } else {
            format!("{} ({})", self.code, range)
        }
    }

    /// Whether this is the vacation status.
    pub fn is_vacation(&self) -> bool {
        self.code == VACATION_CODE
    }

    /// Whether this is the given OFF sentinel (see [`crate::GridSummaryConfig::off_code`]).
    pub fn is_off(&self, off_code: &str) -> bool {
        self.code == off_code
    }
}

/// A shift category with its minimum staffing threshold.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ShiftCategory {
    pub id: i64,
    pub code: String,
    pub name: String,
    pub min_traders: u32,
    pub display_order: i32,
    pub typical_start_time: Option<String>,
    pub typical_end_time: Option<String>,
}

impl ShiftCategory {
    pub fn new(code: &str, min_traders: u32, display_order: i32) -> Self {
        Self {
            code: code.to_string(),
            name: code.to_string(),
            min_traders,
            display_order,
            ..Default::default()
        }
    }

    pub fn time_range(&self) -> String {
        format_time_range(
            self.typical_start_time.as_deref(),
            self.typical_end_time.as_deref(),
        )
    }

    /// Code and display name, for pickers.
    pub fn label(&self) -> String {
        format!("{} \u{2014} {}", self.code, self.name)
    }
}

/// Employee fields needed to decide grid membership.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RosterEntry {
    pub uuid: String,
    pub is_active: bool,
    #[serde(default)]
    pub exclude_from_grid: bool,
}

/// Employee ids shown in the grid: active and not excluded, input order kept.
pub fn grid_roster(entries: &[RosterEntry]) -> Vec<String> {
    entries
        .iter()
        .filter(|e| e.is_active && !e.exclude_from_grid)
        .map(|e| e.uuid.clone())
        .collect()
}

fn format_time_range(start: Option<&str>, end: Option<&str>) -> String {
    match (start, end) {
        (Some(s), Some(e)) if !s.is_empty() && !e.is_empty() => {
            format!("{}-{}", truncate_hhmm(s), truncate_hhmm(e))
        }
        _ => String::new(),
    }
}

fn truncate_hhmm(time: &str) -> &str {
    time.get(..5).unwrap_or(time)
}
