//! Configuration types for the grid summary engine.
//!
//! The shift taxonomy (category ranking, the OFF sentinel, non-operational
//! categories) differs between deployments, so none of it is baked into the
//! aggregation code.

use serde::{Deserialize, Serialize};

/// Rank given to shifts whose category is absent from `category_priority`.
pub const DEFAULT_UNRANKED_PRIORITY: usize = 99;

/// Taxonomy and logging settings for [`crate::summarize`].
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GridSummaryConfig {
    /// Category codes in display priority order. Shift rows are ranked by the
    /// position of their category in this list.
    pub category_priority: Vec<String>,
    /// Rank for shifts whose category is missing from `category_priority`.
    pub unranked_priority: usize,
    /// Shift code that marks a day off.
    pub off_code: String,
    /// Category codes that never get a category row (non-operational).
    pub excluded_categories: Vec<String>,
    /// Verbosity level: 0=silent, 1=summary, 2=detail, 3=debug.
    pub verbosity: u8,
}

impl Default for GridSummaryConfig {
    fn default() -> Self {
        Self {
            category_priority: ["AM", "INS", "MID", "NS", "HO"]
                .iter()
                .map(|c| c.to_string())
                .collect(),
            unranked_priority: DEFAULT_UNRANKED_PRIORITY,
            off_code: "OFF".to_string(),
            excluded_categories: vec!["STATUS".to_string()],
            verbosity: 0,
        }
    }
}

impl GridSummaryConfig {
    /// Rank of a category code in the priority list (lower sorts first).
    pub fn category_rank(&self, category_code: Option<&str>) -> usize {
        category_code
            .and_then(|code| self.category_priority.iter().position(|c| c == code))
            .unwrap_or(self.unranked_priority)
    }

    /// Whether a category is excluded from the category rows.
    pub fn is_excluded_category(&self, category_code: &str) -> bool {
        self.excluded_categories.iter().any(|c| c == category_code)
    }

    /// Whether a shift code is the OFF sentinel.
    #[inline]
    pub fn is_off(&self, shift_code: &str) -> bool {
        self.off_code == shift_code
    }
}
