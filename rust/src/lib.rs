//! Scheduling-grid projection engine.
//!
//! Two independent, pure components consumed by a shift-scheduling UI:
//! - [`calendar`]: Monday-first month grids and month/week navigation
//! - [`summary`]: per-day staffing counts and understaffing alerts
//!
//! Nothing here performs I/O or reads a clock; callers recompute whenever an
//! input changes and replace the previous output.

pub mod calendar;
mod config;
pub mod logging;
mod models;
#[cfg(feature = "python")]
mod python;
pub mod summary;

pub use calendar::{
    build_month, iso_date, iso_days, parse_iso_date, week_days, CalendarError, DayCell,
    MonthGrid, MonthNavigator, MonthStep, YearMonth,
};
pub use config::GridSummaryConfig;
pub use models::{grid_roster, Assignments, RosterEntry, ShiftCategory, ShiftType};
pub use summary::{
    classify, summarize, AlertLevel, DailyCounts, GridSummary, RowKind, SummaryCache, SummaryRow,
};
