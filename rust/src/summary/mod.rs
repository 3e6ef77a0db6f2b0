//! Staffing summary for the schedule grid.
//!
//! Given a roster, its per-day shift assignments and the shift catalogues,
//! derives per-day counts by shift, by category and in total, plus alert
//! levels for understaffed cells. Every pass is a pure function of its inputs.

mod aggregate;
mod alert;
mod cache;
mod catalogue;

pub use aggregate::{summarize, DailyCounts, GridSummary, RowKind, SummaryRow};
pub use alert::{classify, classify_count, AlertLevel};
pub use cache::{fingerprint, SummaryCache};
pub use catalogue::{category_lookup, tracked_categories, tracked_shifts, CategoryLookup};
