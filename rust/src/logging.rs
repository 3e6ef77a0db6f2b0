//! Logging macros for the grid engine with verbosity level control.
//!
//! Provides zero-cost logging when disabled (verbosity=0).
//! Levels:
//! - 0: SILENT
//! - 1: SUMMARY (one line per recomputation or navigation step)
//! - 2: DETAIL (per-day aggregates, catalogue projections)
//! - 3: DEBUG (per-employee lookups, cache fingerprints)

/// Verbosity level constants.
pub const VERBOSITY_SILENT: u8 = 0;
pub const VERBOSITY_SUMMARY: u8 = 1;
pub const VERBOSITY_DETAIL: u8 = 2;
pub const VERBOSITY_DEBUG: u8 = 3;

/// Log at SUMMARY level (verbosity >= 1).
///
/// Used for: month changes, finished recomputations.
#[macro_export]
macro_rules! log_summary {
    ($verbosity:expr, $($arg:tt)*) => {
        if $verbosity >= $crate::logging::VERBOSITY_SUMMARY {
            eprintln!($($arg)*);
        }
    };
}

/// Log at DETAIL level (verbosity >= 2).
///
/// Used for: daily totals, tracked shift and category lists.
#[macro_export]
macro_rules! log_detail {
    ($verbosity:expr, $($arg:tt)*) => {
        if $verbosity >= $crate::logging::VERBOSITY_DETAIL {
            eprintln!($($arg)*);
        }
    };
}

/// Log at DEBUG level (verbosity >= 3).
#[macro_export]
macro_rules! log_debug {
    ($verbosity:expr, $($arg:tt)*) => {
        if $verbosity >= $crate::logging::VERBOSITY_DEBUG {
            eprintln!($($arg)*);
        }
    };
}
