//! Month-view calendar layout.
//!
//! Turns a `(year, month)` reference into a fixed-size, Monday-first grid of
//! day cells, and tracks navigation between months without ever carrying a
//! day-of-month.

mod grid;
mod navigation;
mod year_month;

use chrono::NaiveDate;

pub use grid::{
    build_month, build_month_grid, iso_days, DayCell, MonthGrid, FIVE_WEEKS, SIX_WEEKS,
};
pub use navigation::{shift_week, week_days, week_start, MonthNavigator, MonthStep};
pub use year_month::{CalendarError, YearMonth};

/// `YYYY-MM-DD`, the key format of assignment maps and day ranges.
pub fn iso_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Parse a `YYYY-MM-DD` string.
pub fn parse_iso_date(s: &str) -> Result<NaiveDate, CalendarError> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| CalendarError::InvalidDate(s.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iso_round_trip() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        assert_eq!(iso_date(date), "2024-03-05");
        assert_eq!(parse_iso_date("2024-03-05").unwrap(), date);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(
            parse_iso_date("2024-02-30"),
            Err(CalendarError::InvalidDate("2024-02-30".to_string()))
        );
        assert!(parse_iso_date("15/02/2024").is_err());
        assert!(parse_iso_date("").is_err());
    }
}
