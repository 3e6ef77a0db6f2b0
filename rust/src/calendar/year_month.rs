//! The (year, month) reference tracked by month views.

use chrono::{Datelike, Days, Month, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Errors from calendar construction and navigation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalendarError {
    #[error("Invalid month: {0} (expected 1-12)")]
    InvalidMonth(u32),
    #[error("Year out of supported range: {0}")]
    YearOutOfRange(i32),
    #[error("Invalid navigation step: {0} (expected 1 or -1)")]
    InvalidStep(i32),
    #[error("Invalid ISO date: {0:?}")]
    InvalidDate(String),
}

/// A calendar month without a day-of-month.
///
/// Month arithmetic only ever touches `(year, month)`, so stepping from the
/// 31st of one month can never land two months ahead.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "RawYearMonth")]
pub struct YearMonth {
    year: i32,
    month: u32,
}

/// Unchecked wire form; deserialization goes through [`YearMonth::new`].
#[derive(Deserialize)]
struct RawYearMonth {
    year: i32,
    month: u32,
}

impl TryFrom<RawYearMonth> for YearMonth {
    type Error = CalendarError;

    fn try_from(raw: RawYearMonth) -> Result<Self, Self::Error> {
        Self::new(raw.year, raw.month)
    }
}

impl YearMonth {
    /// Create a month reference.
    ///
    /// Fails for months outside 1-12, or for years so close to the limits of
    /// the date range that the padded month grid cannot be represented.
    pub fn new(year: i32, month: u32) -> Result<Self, CalendarError> {
        if !(1..=12).contains(&month) {
            return Err(CalendarError::InvalidMonth(month));
        }
        let first =
            NaiveDate::from_ymd_opt(year, month, 1).ok_or(CalendarError::YearOutOfRange(year))?;
        // Leading cells reach at most 6 days back, trailing cells at most 41 days ahead.
        if first.checked_sub_days(Days::new(6)).is_none()
            || first.checked_add_days(Days::new(41)).is_none()
        {
            return Err(CalendarError::YearOutOfRange(year));
        }
        Ok(Self { year, month })
    }

    /// The month containing `date`.
    pub fn from_date(date: NaiveDate) -> Result<Self, CalendarError> {
        Self::new(date.year(), date.month())
    }

    #[inline]
    pub fn year(&self) -> i32 {
        self.year
    }

    /// 1-12
    #[inline]
    pub fn month(&self) -> u32 {
        self.month
    }

    /// The following month (December rolls into January of the next year).
    pub fn succ(&self) -> Result<Self, CalendarError> {
        if self.month == 12 {
            Self::new(self.year + 1, 1)
        } else {
            Self::new(self.year, self.month + 1)
        }
    }

    /// The preceding month (January rolls back into December of the previous year).
    pub fn pred(&self) -> Result<Self, CalendarError> {
        if self.month == 1 {
            Self::new(self.year - 1, 12)
        } else {
            Self::new(self.year, self.month - 1)
        }
    }

    pub fn first_day(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
            .expect("year and month validated on construction")
    }

    pub fn last_day(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, self.days_in_month())
            .expect("year and month validated on construction")
    }

    /// 28-31
    pub fn days_in_month(&self) -> u32 {
        match self.month {
            4 | 6 | 9 | 11 => 30,
            2 if NaiveDate::from_ymd_opt(self.year, 2, 29).is_some() => 29,
            2 => 28,
            _ => 31,
        }
    }

    /// Whether `date` falls inside this month.
    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    /// English month name and year, e.g. `"February 2024"`.
    pub fn label(&self) -> String {
        let name = u8::try_from(self.month)
            .ok()
            .and_then(|m| Month::try_from(m).ok())
            .map(|m| m.name())
            .unwrap_or("?");
        format!("{} {}", name, self.year)
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}
