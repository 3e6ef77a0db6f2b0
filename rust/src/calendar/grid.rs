//! Month-view grid construction.

use chrono::{Datelike, Days, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use super::year_month::{CalendarError, YearMonth};

/// Cells in a five-week grid.
pub const FIVE_WEEKS: usize = 35;
/// Cells in a six-week grid.
pub const SIX_WEEKS: usize = 42;

/// One rendered day of a month view.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayCell {
    /// Serialized as `YYYY-MM-DD`.
    pub date: NaiveDate,
    /// 1-31
    pub day_number: u32,
    pub is_current_month: bool,
    pub is_today: bool,
    pub is_weekend: bool,
}

impl DayCell {
    fn new(date: NaiveDate, month: &YearMonth, today: NaiveDate) -> Self {
        let is_current_month = month.contains(date);
        Self {
            date,
            day_number: date.day(),
            is_current_month,
            // Padding cells never carry the today marker
            is_today: is_current_month && date == today,
            is_weekend: matches!(date.weekday(), Weekday::Sat | Weekday::Sun),
        }
    }

    /// ISO date string used as the assignment-map key.
    pub fn key(&self) -> String {
        super::iso_date(self.date)
    }
}

/// Monday-first grid of 35 or 42 day cells for one month.
///
/// Invariants: `cells.len()` is 35 or 42, the first cell is a Monday and the
/// last cell is a Sunday.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MonthGrid {
    pub month: YearMonth,
    pub cells: Vec<DayCell>,
}

impl MonthGrid {
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Number of week rows (5 or 6).
    pub fn week_count(&self) -> usize {
        self.cells.len() / 7
    }

    /// Cells grouped into Monday..Sunday rows.
    pub fn weeks(&self) -> impl Iterator<Item = &[DayCell]> {
        self.cells.chunks(7)
    }

    /// The cell flagged as today, if the grid shows it.
    pub fn today_cell(&self) -> Option<&DayCell> {
        self.cells.iter().find(|c| c.is_today)
    }

    /// ISO date keys of every cell, in grid order.
    pub fn iso_days(&self) -> Vec<String> {
        iso_days(&self.cells)
    }
}

/// ISO date keys of `cells`, in order. Accepts any slice, e.g. one week row.
pub fn iso_days(cells: &[DayCell]) -> Vec<String> {
    cells.iter().map(DayCell::key).collect()
}

/// Number of leading cells borrowed from the previous month.
///
/// Monday-first: Monday -> 0, ..., Sunday -> 6.
fn leading_offset(first_of_month: NaiveDate) -> usize {
    first_of_month.weekday().num_days_from_monday() as usize
}

/// Build the grid for an already validated month.
///
/// Layout: `offset` trailing days of the previous month, every day of the
/// month, then days 1, 2, ... of the next month until the grid holds 35
/// cells, or 42 when `offset + days_in_month` exceeds 35.
pub fn build_month_grid(month: YearMonth, today: NaiveDate) -> MonthGrid {
    let first = month.first_day();
    let offset = leading_offset(first);
    let days = month.days_in_month() as usize;
    let target_len = if offset + days > FIVE_WEEKS {
        SIX_WEEKS
    } else {
        FIVE_WEEKS
    };

    let start = first
        .checked_sub_days(Days::new(offset as u64))
        .expect("grid start validated by YearMonth");

    let cells = start
        .iter_days()
        .take(target_len)
        .map(|date| DayCell::new(date, &month, today))
        .collect();

    MonthGrid { month, cells }
}

/// Build the month grid for `(year, month)` with `today` marked.
///
/// `today` is compared by calendar date only, and only cells of the month
/// itself can be flagged.
pub fn build_month(year: i32, month: u32, today: NaiveDate) -> Result<MonthGrid, CalendarError> {
    Ok(build_month_grid(YearMonth::new(year, month)?, today))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_february_2024_leap_year() {
        let grid = build_month(2024, 2, d(2024, 2, 15)).unwrap();

        assert_eq!(grid.len(), 35);
        // Feb 1 2024 is a Thursday: Jan 29, 30, 31 lead
        assert_eq!(grid.cells[0].date, d(2024, 1, 29));
        assert_eq!(grid.cells[2].date, d(2024, 1, 31));
        assert!(!grid.cells[2].is_current_month);
        assert_eq!(grid.cells[3].date, d(2024, 2, 1));
        assert!(grid.cells[3].is_current_month);

        let current: Vec<_> = grid.cells.iter().filter(|c| c.is_current_month).collect();
        assert_eq!(current.len(), 29);
        assert_eq!(current.last().unwrap().day_number, 29);

        let today = grid.today_cell().unwrap();
        assert_eq!(today.date, d(2024, 2, 15));
        assert_eq!(grid.cells.iter().filter(|c| c.is_today).count(), 1);

        // Trailing days restart at 1
        assert_eq!(grid.cells[32].date, d(2024, 3, 1));
        assert_eq!(grid.cells[34].date, d(2024, 3, 3));
    }

    #[test]
    fn test_february_2023_non_leap_year() {
        let grid = build_month(2023, 2, d(2023, 2, 1)).unwrap();
        let current = grid.cells.iter().filter(|c| c.is_current_month).count();
        assert_eq!(current, 28);
        assert_eq!(grid.len(), 35);
    }

    #[test]
    fn test_february_starting_monday_still_five_weeks() {
        // Feb 1 2021 is a Monday and the month fills exactly four rows
        let grid = build_month(2021, 2, d(2021, 2, 1)).unwrap();
        assert_eq!(grid.len(), 35);
        assert_eq!(grid.cells[0].date, d(2021, 2, 1));
        assert_eq!(grid.cells[28].date, d(2021, 3, 1));
        assert_eq!(grid.cells[34].date, d(2021, 3, 7));
    }

    #[test]
    fn test_december_2024_six_weeks() {
        let grid = build_month(2024, 12, d(2025, 1, 1)).unwrap();

        // Dec 1 2024 is a Sunday: six November days lead
        assert_eq!(grid.len(), 42);
        assert_eq!(grid.week_count(), 6);
        assert_eq!(grid.cells[0].date, d(2024, 11, 25));
        assert_eq!(grid.cells[6].date, d(2024, 12, 1));
        assert_eq!(grid.cells.iter().filter(|c| c.is_current_month).count(), 31);
        assert_eq!(grid.cells[41].date, d(2025, 1, 5));
        // Jan 1 2025 is shown as a trailing cell but belongs to the January view
        assert!(grid.cells.iter().any(|c| c.date == d(2025, 1, 1)));
        assert!(grid.today_cell().is_none());
    }

    #[test]
    fn test_today_outside_grid_not_flagged() {
        let grid = build_month(2024, 12, d(2025, 3, 10)).unwrap();
        assert!(grid.today_cell().is_none());
    }

    #[test]
    fn test_grid_shape_for_all_months() {
        let today = d(2024, 6, 15);
        for year in [1999, 2000, 2023, 2024, 2025, 2100] {
            for month in 1..=12 {
                let grid = build_month(year, month, today).unwrap();
                assert!(grid.len() == FIVE_WEEKS || grid.len() == SIX_WEEKS);
                assert_eq!(grid.len() % 7, 0);
                assert_eq!(grid.cells.first().unwrap().date.weekday(), Weekday::Mon);
                assert_eq!(grid.cells.last().unwrap().date.weekday(), Weekday::Sun);

                let ym = YearMonth::new(year, month).unwrap();
                let today_count = grid.cells.iter().filter(|c| c.is_today).count();
                let expected = if ym.contains(today) { 1 } else { 0 };
                assert_eq!(today_count, expected, "{}-{}", year, month);

                // Consecutive dates
                for pair in grid.cells.windows(2) {
                    assert_eq!(pair[0].date.succ_opt().unwrap(), pair[1].date);
                }
            }
        }
    }

    #[test]
    fn test_weekend_flags() {
        let grid = build_month(2024, 2, d(2024, 2, 15)).unwrap();
        for week in grid.weeks() {
            let flags: Vec<bool> = week.iter().map(|c| c.is_weekend).collect();
            assert_eq!(flags, vec![false, false, false, false, false, true, true]);
        }
    }

    #[test]
    fn test_invalid_month() {
        assert_eq!(
            build_month(2024, 13, d(2024, 1, 1)),
            Err(CalendarError::InvalidMonth(13))
        );
    }

    #[test]
    fn test_iso_days_and_json_shape() {
        let grid = build_month(2024, 2, d(2024, 2, 15)).unwrap();
        let days = grid.iso_days();
        assert_eq!(days[0], "2024-01-29");
        assert_eq!(days[17], "2024-02-15");

        let json = serde_json::to_value(&grid.cells[17]).unwrap();
        assert_eq!(json["date"], "2024-02-15");
        assert_eq!(json["dayNumber"], 15);
        assert_eq!(json["isCurrentMonth"], true);
        assert_eq!(json["isToday"], true);
        assert_eq!(json["isWeekend"], false);
    }

    #[test]
    fn test_iso_days_of_week_row() {
        let grid = build_month(2024, 12, d(2024, 12, 10)).unwrap();
        let last_week = grid.weeks().last().unwrap();
        assert_eq!(
            iso_days(last_week),
            vec![
                "2024-12-30",
                "2024-12-31",
                "2025-01-01",
                "2025-01-02",
                "2025-01-03",
                "2025-01-04",
                "2025-01-05",
            ]
        );
        assert!(iso_days(&[]).is_empty());
        assert_eq!(iso_days(&grid.cells), grid.iso_days());
    }

    #[test]
    fn test_rebuild_is_identical() {
        let a = build_month(2024, 3, d(2024, 3, 31)).unwrap();
        let b = build_month(2024, 3, d(2024, 3, 31)).unwrap();
        assert_eq!(a, b);
    }
}
