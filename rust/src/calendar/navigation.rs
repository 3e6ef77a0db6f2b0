//! Month navigation and week ranges.

use chrono::{Datelike, Days, NaiveDate};

use crate::log_summary;

use super::grid::{build_month_grid, MonthGrid};
use super::year_month::{CalendarError, YearMonth};

/// Direction of a one-month navigation step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MonthStep {
    Back,
    Forward,
}

impl TryFrom<i32> for MonthStep {
    type Error = CalendarError;

    fn try_from(direction: i32) -> Result<Self, Self::Error> {
        match direction {
            1 => Ok(Self::Forward),
            -1 => Ok(Self::Back),
            other => Err(CalendarError::InvalidStep(other)),
        }
    }
}

/// Tracks the month shown by a month view.
///
/// The reference is a [`YearMonth`], never a full date, and `today` is
/// supplied by the caller rather than read from a clock.
#[derive(Clone, Debug)]
pub struct MonthNavigator {
    current: YearMonth,
    today: NaiveDate,
    verbosity: u8,
}

impl MonthNavigator {
    /// Start on the month containing `today`.
    pub fn new(today: NaiveDate) -> Result<Self, CalendarError> {
        Ok(Self {
            current: YearMonth::from_date(today)?,
            today,
            verbosity: 0,
        })
    }

    /// Start on an explicit month.
    pub fn at(current: YearMonth, today: NaiveDate) -> Self {
        Self {
            current,
            today,
            verbosity: 0,
        }
    }

    pub fn with_verbosity(mut self, verbosity: u8) -> Self {
        self.verbosity = verbosity;
        self
    }

    pub fn current(&self) -> YearMonth {
        self.current
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    /// Replace the reference date used for `is_today` and [`Self::go_to_today`].
    ///
    /// The displayed month is left alone.
    pub fn set_today(&mut self, today: NaiveDate) {
        self.today = today;
    }

    pub fn label(&self) -> String {
        self.current.label()
    }

    /// Grid for the current month.
    pub fn grid(&self) -> MonthGrid {
        build_month_grid(self.current, self.today)
    }

    /// Move one month and rebuild. On error the navigator is unchanged.
    pub fn advance(&mut self, step: MonthStep) -> Result<MonthGrid, CalendarError> {
        let next = match step {
            MonthStep::Forward => self.current.succ()?,
            MonthStep::Back => self.current.pred()?,
        };
        log_summary!(self.verbosity, "Month: {} -> {}", self.current, next);
        self.current = next;
        Ok(self.grid())
    }

    /// [`Self::advance`] taking `+1` / `-1`.
    pub fn advance_by(&mut self, direction: i32) -> Result<MonthGrid, CalendarError> {
        self.advance(MonthStep::try_from(direction)?)
    }

    /// Jump back to the month containing `today` and rebuild.
    pub fn go_to_today(&mut self) -> Result<MonthGrid, CalendarError> {
        let target = YearMonth::from_date(self.today)?;
        log_summary!(self.verbosity, "Month: {} -> {} (today)", self.current, target);
        self.current = target;
        Ok(self.grid())
    }
}

/// The Monday on or before `date`.
pub fn week_start(date: NaiveDate) -> Result<NaiveDate, CalendarError> {
    let back = date.weekday().num_days_from_monday() as u64;
    date.checked_sub_days(Days::new(back))
        .ok_or(CalendarError::YearOutOfRange(date.year()))
}

/// ISO dates Monday..Sunday of the week containing `anchor`.
///
/// This is the usual day range for the weekly staffing grid.
pub fn week_days(anchor: NaiveDate) -> Result<Vec<String>, CalendarError> {
    let monday = week_start(anchor)?;
    if monday.checked_add_days(Days::new(6)).is_none() {
        return Err(CalendarError::YearOutOfRange(anchor.year()));
    }
    Ok(monday.iter_days().take(7).map(super::iso_date).collect())
}

/// `anchor` moved by whole weeks (negative moves back).
pub fn shift_week(anchor: NaiveDate, weeks: i64) -> Result<NaiveDate, CalendarError> {
    let days = Days::new(weeks.unsigned_abs().saturating_mul(7));
    let moved = if weeks >= 0 {
        anchor.checked_add_days(days)
    } else {
        anchor.checked_sub_days(days)
    };
    moved.ok_or(CalendarError::YearOutOfRange(anchor.year()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn ym(year: i32, month: u32) -> YearMonth {
        YearMonth::new(year, month).unwrap()
    }

    #[test]
    fn test_step_from_direction() {
        assert_eq!(MonthStep::try_from(1), Ok(MonthStep::Forward));
        assert_eq!(MonthStep::try_from(-1), Ok(MonthStep::Back));
        assert_eq!(MonthStep::try_from(2), Err(CalendarError::InvalidStep(2)));
        assert_eq!(MonthStep::try_from(0), Err(CalendarError::InvalidStep(0)));
    }

    #[test]
    fn test_advance_from_31st_does_not_skip_month() {
        let mut nav = MonthNavigator::new(d(2024, 1, 31)).unwrap();
        let grid = nav.advance(MonthStep::Forward).unwrap();
        assert_eq!(nav.current(), ym(2024, 2));
        assert_eq!(grid.month, ym(2024, 2));
        assert_eq!(grid.cells.iter().filter(|c| c.is_current_month).count(), 29);

        nav.advance(MonthStep::Forward).unwrap();
        assert_eq!(nav.current(), ym(2024, 3));
    }

    #[test]
    fn test_advance_across_year_boundary() {
        let mut nav = MonthNavigator::at(ym(2024, 12), d(2024, 12, 31));
        nav.advance_by(1).unwrap();
        assert_eq!(nav.current(), ym(2025, 1));
        nav.advance_by(-1).unwrap();
        nav.advance_by(-1).unwrap();
        assert_eq!(nav.current(), ym(2024, 11));
    }

    #[test]
    fn test_invalid_step_leaves_state() {
        let mut nav = MonthNavigator::at(ym(2024, 5), d(2024, 5, 1));
        assert!(nav.advance_by(3).is_err());
        assert_eq!(nav.current(), ym(2024, 5));
    }

    #[test]
    fn test_go_to_today() {
        let mut nav = MonthNavigator::new(d(2024, 2, 15)).unwrap();
        nav.advance(MonthStep::Back).unwrap();
        nav.advance(MonthStep::Back).unwrap();
        assert_eq!(nav.current(), ym(2023, 12));
        assert!(nav.grid().today_cell().is_none());

        let grid = nav.go_to_today().unwrap();
        assert_eq!(nav.current(), ym(2024, 2));
        assert_eq!(grid.today_cell().unwrap().date, d(2024, 2, 15));
        assert_eq!(nav.label(), "February 2024");
    }

    #[test]
    fn test_set_today_keeps_month() {
        let mut nav = MonthNavigator::at(ym(2024, 6), d(2024, 6, 10));
        nav.set_today(d(2024, 8, 1));
        assert_eq!(nav.current(), ym(2024, 6));
        assert!(nav.grid().today_cell().is_none());
        nav.go_to_today().unwrap();
        assert_eq!(nav.current(), ym(2024, 8));
    }

    #[test]
    fn test_week_days_monday_first() {
        // Thursday
        let days = week_days(d(2024, 2, 15)).unwrap();
        assert_eq!(
            days,
            vec![
                "2024-02-12",
                "2024-02-13",
                "2024-02-14",
                "2024-02-15",
                "2024-02-16",
                "2024-02-17",
                "2024-02-18"
            ]
        );
        // Sunday belongs to the week that started the previous Monday
        assert_eq!(week_days(d(2024, 12, 1)).unwrap()[0], "2024-11-25");
        assert_eq!(week_start(d(2024, 11, 25)).unwrap(), d(2024, 11, 25));
    }

    #[test]
    fn test_shift_week() {
        assert_eq!(shift_week(d(2024, 12, 30), 1).unwrap(), d(2025, 1, 6));
        assert_eq!(shift_week(d(2024, 1, 3), -1).unwrap(), d(2023, 12, 27));
        assert_eq!(shift_week(d(2024, 1, 3), 0).unwrap(), d(2024, 1, 3));
    }
}
