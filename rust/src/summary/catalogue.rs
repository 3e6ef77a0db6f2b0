//! Catalogue projections: which shifts and categories get rows, and in what order.

use rustc_hash::FxHashMap;

use crate::config::GridSummaryConfig;
use crate::models::{ShiftCategory, ShiftType};

/// Shift code -> category code lookup (`None` = uncategorized).
pub type CategoryLookup = FxHashMap<String, Option<String>>;

/// Build the code -> category lookup. Later catalogue entries win on duplicate codes.
pub fn category_lookup(shift_types: &[ShiftType]) -> CategoryLookup {
    let mut lookup = FxHashMap::with_capacity_and_hasher(shift_types.len(), Default::default());
    for st in shift_types {
        let category = st.category_code.clone().filter(|c| !c.is_empty());
        lookup.insert(st.code.clone(), category);
    }
    lookup
}

/// Active working shifts, ordered by category rank then code.
pub fn tracked_shifts(shift_types: &[ShiftType], config: &GridSummaryConfig) -> Vec<ShiftType> {
    let mut tracked: Vec<(usize, &ShiftType)> = shift_types
        .iter()
        .filter(|st| st.is_active && st.is_working_shift)
        .map(|st| (config.category_rank(st.category_code.as_deref()), st))
        .collect();

    tracked.sort_by(|(rank_a, a), (rank_b, b)| rank_a.cmp(rank_b).then(a.code.cmp(&b.code)));

    tracked.into_iter().map(|(_, st)| st.clone()).collect()
}

/// Operational categories ordered by `display_order` (stable on ties).
pub fn tracked_categories(
    categories: &[ShiftCategory],
    config: &GridSummaryConfig,
) -> Vec<ShiftCategory> {
    let mut tracked: Vec<ShiftCategory> = categories
        .iter()
        .filter(|c| !config.is_excluded_category(&c.code))
        .cloned()
        .collect();
    tracked.sort_by_key(|c| c.display_order);
    tracked
}
