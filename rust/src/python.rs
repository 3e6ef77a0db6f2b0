//! PyO3 bindings exposing the grid engine as the `roster_grid` Python module.

// Allow clippy warning triggered by PyO3 macro expansion
#![allow(clippy::useless_conversion)]

use chrono::NaiveDate;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use std::collections::HashMap;

use crate::calendar::{self, CalendarError, DayCell, MonthGrid, MonthNavigator, YearMonth};
use crate::config::GridSummaryConfig;
use crate::models::{ShiftCategory, ShiftType};
use crate::summary::{self, AlertLevel, GridSummary, RowKind, SummaryRow};

fn value_error(err: CalendarError) -> PyErr {
    PyValueError::new_err(err.to_string())
}

fn kind_name(kind: RowKind) -> &'static str {
    match kind {
        RowKind::Shift => "shift",
        RowKind::Off => "off",
        RowKind::Category => "category",
        RowKind::Total => "total",
    }
}

fn alert_name(alert: AlertLevel) -> &'static str {
    match alert {
        AlertLevel::Danger => "danger",
        AlertLevel::Warning => "warning",
        AlertLevel::Low => "low",
        AlertLevel::Ok => "ok",
    }
}

/// Taxonomy configuration (PyO3 wrapper).
#[pyclass(name = "GridSummaryConfig")]
#[derive(Clone, Debug)]
pub struct PyGridSummaryConfig {
    inner: GridSummaryConfig,
}

#[pymethods]
impl PyGridSummaryConfig {
    #[new]
    #[pyo3(signature = (
        category_priority=None,
        unranked_priority=None,
        off_code=None,
        excluded_categories=None,
        verbosity=None
    ))]
    fn new(
        category_priority: Option<Vec<String>>,
        unranked_priority: Option<usize>,
        off_code: Option<String>,
        excluded_categories: Option<Vec<String>>,
        verbosity: Option<u8>,
    ) -> Self {
        let defaults = GridSummaryConfig::default();
        Self {
            inner: GridSummaryConfig {
                category_priority: category_priority.unwrap_or(defaults.category_priority),
                unranked_priority: unranked_priority.unwrap_or(defaults.unranked_priority),
                off_code: off_code.unwrap_or(defaults.off_code),
                excluded_categories: excluded_categories.unwrap_or(defaults.excluded_categories),
                verbosity: verbosity.unwrap_or(defaults.verbosity),
            },
        }
    }

    #[getter]
    fn off_code(&self) -> String {
        self.inner.off_code.clone()
    }

    #[getter]
    fn category_priority(&self) -> Vec<String> {
        self.inner.category_priority.clone()
    }

    fn __repr__(&self) -> String {
        format!(
            "GridSummaryConfig(category_priority={:?}, off_code={:?}, excluded_categories={:?})",
            self.inner.category_priority, self.inner.off_code, self.inner.excluded_categories
        )
    }
}

/// Shift type catalogue entry (PyO3 wrapper).
#[pyclass(name = "ShiftType")]
#[derive(Clone, Debug)]
pub struct PyShiftType {
    #[pyo3(get, set)]
    pub code: String,
    #[pyo3(get, set)]
    pub category_code: Option<String>,
    #[pyo3(get, set)]
    pub is_active: bool,
    #[pyo3(get, set)]
    pub is_working_shift: bool,
    #[pyo3(get, set)]
    pub start_time: Option<String>,
    #[pyo3(get, set)]
    pub end_time: Option<String>,
}

#[pymethods]
impl PyShiftType {
    #[new]
    #[pyo3(signature = (code, category_code=None, is_active=true, is_working_shift=true, start_time=None, end_time=None))]
    fn new(
        code: String,
        category_code: Option<String>,
        is_active: bool,
        is_working_shift: bool,
        start_time: Option<String>,
        end_time: Option<String>,
    ) -> Self {
        Self {
            code,
            category_code,
            is_active,
            is_working_shift,
            start_time,
            end_time,
        }
    }

    #[getter]
    fn label(&self) -> String {
        self.to_model().label()
    }

    fn __repr__(&self) -> String {
        format!(
            "ShiftType(code={:?}, category_code={:?}, active={}, working={})",
            self.code, self.category_code, self.is_active, self.is_working_shift
        )
    }
}

impl PyShiftType {
    fn to_model(&self) -> ShiftType {
        let mut st = ShiftType::new(
            &self.code,
            self.category_code.as_deref(),
            self.is_active,
            self.is_working_shift,
        );
        st.start_time = self.start_time.clone();
        st.end_time = self.end_time.clone();
        st
    }
}

/// Shift category catalogue entry (PyO3 wrapper).
#[pyclass(name = "ShiftCategory")]
#[derive(Clone, Debug)]
pub struct PyShiftCategory {
    #[pyo3(get, set)]
    pub code: String,
    #[pyo3(get, set)]
    pub min_traders: u32,
    #[pyo3(get, set)]
    pub display_order: i32,
}

#[pymethods]
impl PyShiftCategory {
    #[new]
    #[pyo3(signature = (code, min_traders=0, display_order=0))]
    fn new(code: String, min_traders: u32, display_order: i32) -> Self {
        Self {
            code,
            min_traders,
            display_order,
        }
    }

    fn __repr__(&self) -> String {
        format!(
            "ShiftCategory(code={:?}, min_traders={}, display_order={})",
            self.code, self.min_traders, self.display_order
        )
    }
}

/// One month-view day (PyO3 wrapper).
#[pyclass(name = "DayCell")]
#[derive(Clone, Debug)]
pub struct PyDayCell {
    #[pyo3(get)]
    pub date: NaiveDate,
    #[pyo3(get)]
    pub day_number: u32,
    #[pyo3(get)]
    pub is_current_month: bool,
    #[pyo3(get)]
    pub is_today: bool,
    #[pyo3(get)]
    pub is_weekend: bool,
}

#[pymethods]
impl PyDayCell {
    #[getter]
    fn key(&self) -> String {
        calendar::iso_date(self.date)
    }

    fn __repr__(&self) -> String {
        format!(
            "DayCell(date={}, current={}, today={}, weekend={})",
            self.date, self.is_current_month, self.is_today, self.is_weekend
        )
    }
}

impl From<&DayCell> for PyDayCell {
    fn from(cell: &DayCell) -> Self {
        Self {
            date: cell.date,
            day_number: cell.day_number,
            is_current_month: cell.is_current_month,
            is_today: cell.is_today,
            is_weekend: cell.is_weekend,
        }
    }
}

fn grid_cells(grid: &MonthGrid) -> Vec<PyDayCell> {
    grid.cells.iter().map(PyDayCell::from).collect()
}

/// Build the Monday-first month grid for `(year, month)`.
///
/// # Raises
/// * ValueError if month is outside 1-12 or the year is out of range
#[pyfunction]
fn build_month(year: i32, month: u32, today: NaiveDate) -> PyResult<Vec<PyDayCell>> {
    let grid = calendar::build_month(year, month, today).map_err(value_error)?;
    Ok(grid_cells(&grid))
}

/// ISO dates Monday..Sunday of the week containing `anchor`.
#[pyfunction]
fn week_days(anchor: NaiveDate) -> PyResult<Vec<String>> {
    calendar::week_days(anchor).map_err(value_error)
}

/// Month navigator (PyO3 wrapper).
#[pyclass(name = "MonthNavigator")]
pub struct PyMonthNavigator {
    inner: MonthNavigator,
}

#[pymethods]
impl PyMonthNavigator {
    #[new]
    #[pyo3(signature = (today, year=None, month=None, verbosity=0))]
    fn new(today: NaiveDate, year: Option<i32>, month: Option<u32>, verbosity: u8) -> PyResult<Self> {
        let inner = match (year, month) {
            (Some(y), Some(m)) => {
                MonthNavigator::at(YearMonth::new(y, m).map_err(value_error)?, today)
            }
            _ => MonthNavigator::new(today).map_err(value_error)?,
        };
        Ok(Self {
            inner: inner.with_verbosity(verbosity),
        })
    }

    #[getter]
    fn year(&self) -> i32 {
        self.inner.current().year()
    }

    #[getter]
    fn month(&self) -> u32 {
        self.inner.current().month()
    }

    #[getter]
    fn label(&self) -> String {
        self.inner.label()
    }

    fn grid(&self) -> Vec<PyDayCell> {
        grid_cells(&self.inner.grid())
    }

    /// Move by +1 or -1 month and return the rebuilt grid.
    fn advance(&mut self, direction: i32) -> PyResult<Vec<PyDayCell>> {
        let grid = self.inner.advance_by(direction).map_err(value_error)?;
        Ok(grid_cells(&grid))
    }

    fn go_to_today(&mut self) -> PyResult<Vec<PyDayCell>> {
        let grid = self.inner.go_to_today().map_err(value_error)?;
        Ok(grid_cells(&grid))
    }

    fn set_today(&mut self, today: NaiveDate) {
        self.inner.set_today(today);
    }

    fn __repr__(&self) -> String {
        format!(
            "MonthNavigator(current={}, today={})",
            self.inner.current(),
            self.inner.today()
        )
    }
}

/// Summary row (PyO3 wrapper).
#[pyclass(name = "SummaryRow")]
#[derive(Clone, Debug)]
pub struct PySummaryRow {
    inner: SummaryRow,
}

#[pymethods]
impl PySummaryRow {
    #[getter]
    fn key(&self) -> String {
        self.inner.key.clone()
    }

    #[getter]
    fn label(&self) -> String {
        self.inner.label.clone()
    }

    #[getter]
    fn kind(&self) -> &'static str {
        kind_name(self.inner.kind)
    }

    #[getter]
    fn category_code(&self) -> Option<String> {
        self.inner.category_code.clone()
    }

    #[getter]
    fn counts(&self) -> Vec<u32> {
        self.inner.counts.clone()
    }

    #[getter]
    fn min_required(&self) -> Option<u32> {
        self.inner.min_required
    }

    /// Alert level name for the day at `day_index`.
    fn alert(&self, day_index: usize) -> &'static str {
        alert_name(self.inner.alert(day_index))
    }

    fn __repr__(&self) -> String {
        format!(
            "SummaryRow(key={:?}, kind={}, counts={:?})",
            self.inner.key,
            kind_name(self.inner.kind),
            self.inner.counts
        )
    }
}

/// Result of a summary pass (PyO3 wrapper).
#[pyclass(name = "GridSummary")]
pub struct PyGridSummary {
    inner: GridSummary,
}

#[pymethods]
impl PyGridSummary {
    #[getter]
    fn rows(&self) -> Vec<PySummaryRow> {
        self.inner
            .rows
            .iter()
            .map(|row| PySummaryRow { inner: row.clone() })
            .collect()
    }

    #[getter]
    fn shift_row_count(&self) -> usize {
        self.inner.shift_row_count()
    }

    /// Per-day `(shift code -> count)` maps, tracked or not.
    #[getter]
    fn daily_shifts(&self) -> Vec<HashMap<String, u32>> {
        self.inner
            .daily
            .iter()
            .map(|d| d.shifts.iter().map(|(k, v)| (k.clone(), *v)).collect())
            .collect()
    }

    /// Alert level name for `(row_index, day_index)`, or None for an unknown row.
    fn classify(&self, row_index: usize, day_index: usize) -> Option<&'static str> {
        self.inner.classify(row_index, day_index).map(alert_name)
    }

    fn __repr__(&self) -> String {
        format!(
            "GridSummary(rows={}, days={})",
            self.inner.rows.len(),
            self.inner.day_count()
        )
    }
}

/// Summarize staffing per visible day.
///
/// # Arguments
/// * `employees` - Roster ids in display order
/// * `assignments` - Dict employee id -> dict ISO date -> shift code
/// * `days` - Visible ISO dates
/// * `shift_types` / `categories` - Catalogues
/// * `config` - Optional taxonomy (defaults to AM/INS/MID/NS/HO, OFF, STATUS)
#[pyfunction]
#[pyo3(signature = (employees, assignments, days, shift_types, categories, config=None))]
fn summarize(
    employees: Vec<String>,
    assignments: HashMap<String, HashMap<String, String>>,
    days: Vec<String>,
    shift_types: Vec<PyShiftType>,
    categories: Vec<PyShiftCategory>,
    config: Option<PyGridSummaryConfig>,
) -> PyGridSummary {
    let shift_types: Vec<ShiftType> = shift_types.iter().map(PyShiftType::to_model).collect();
    let categories: Vec<ShiftCategory> = categories
        .into_iter()
        .map(|c| ShiftCategory::new(&c.code, c.min_traders, c.display_order))
        .collect();
    let config = config.map(|c| c.inner).unwrap_or_default();

    PyGridSummary {
        inner: summary::summarize(
            &employees,
            &assignments,
            &days,
            &shift_types,
            &categories,
            &config,
        ),
    }
}

/// The roster_grid Python module.
#[pymodule]
fn roster_grid(m: &Bound<'_, PyModule>) -> PyResult<()> {
    // Data types
    m.add_class::<PyShiftType>()?;
    m.add_class::<PyShiftCategory>()?;
    m.add_class::<PyDayCell>()?;
    m.add_class::<PySummaryRow>()?;
    m.add_class::<PyGridSummary>()?;

    // Config and stateful helpers
    m.add_class::<PyGridSummaryConfig>()?;
    m.add_class::<PyMonthNavigator>()?;

    // Algorithms
    m.add_function(wrap_pyfunction!(build_month, m)?)?;
    m.add_function(wrap_pyfunction!(week_days, m)?)?;
    m.add_function(wrap_pyfunction!(summarize, m)?)?;

    Ok(())
}
