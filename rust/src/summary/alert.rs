//! Alert levels for conditional formatting of summary cells.

use serde::{Deserialize, Serialize};

use super::aggregate::{RowKind, SummaryRow};

/// Visual emphasis for one summary cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertLevel {
    /// Category with a threshold and nobody on it.
    Danger,
    /// Category staffed below its threshold.
    Warning,
    /// Shift with nobody on it.
    Low,
    Ok,
}

/// Classify a count against a row's kind and threshold.
///
/// A threshold of 0 means the category is never flagged.
pub fn classify_count(row: &SummaryRow, count: u32) -> AlertLevel {
    match (row.kind, row.min_required) {
        (RowKind::Category, Some(min)) if min > 0 => {
            if count == 0 {
                AlertLevel::Danger
            } else if count < min {
                AlertLevel::Warning
            } else {
                AlertLevel::Ok
            }
        }
        (RowKind::Shift, _) if count == 0 => AlertLevel::Low,
        _ => AlertLevel::Ok,
    }
}

/// Alert for `row` on the day at `day_index`. Out-of-range days are `Ok`.
pub fn classify(row: &SummaryRow, day_index: usize) -> AlertLevel {
    match row.counts.get(day_index) {
        Some(&count) => classify_count(row, count),
        None => AlertLevel::Ok,
    }
}

impl SummaryRow {
    /// See [`classify`].
    #[inline]
    pub fn alert(&self, day_index: usize) -> AlertLevel {
        classify(self, day_index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(kind: RowKind, counts: Vec<u32>, min_required: Option<u32>) -> SummaryRow {
        SummaryRow {
            key: "r".to_string(),
            label: "R".to_string(),
            kind,
            category_code: None,
            counts,
            min_required,
        }
    }

    #[test]
    fn test_category_thresholds() {
        let cat = row(RowKind::Category, vec![0, 1, 2, 3], Some(2));
        assert_eq!(cat.alert(0), AlertLevel::Danger);
        assert_eq!(cat.alert(1), AlertLevel::Warning);
        assert_eq!(cat.alert(2), AlertLevel::Ok);
        assert_eq!(cat.alert(3), AlertLevel::Ok);
    }

    #[test]
    fn test_zero_threshold_never_alerts() {
        let cat = row(RowKind::Category, vec![0, 1, 7], Some(0));
        for day in 0..3 {
            assert_eq!(cat.alert(day), AlertLevel::Ok);
        }
        let no_threshold = row(RowKind::Category, vec![0], None);
        assert_eq!(no_threshold.alert(0), AlertLevel::Ok);
    }

    #[test]
    fn test_empty_shift_is_low() {
        let shift = row(RowKind::Shift, vec![0, 1], None);
        assert_eq!(shift.alert(0), AlertLevel::Low);
        assert_eq!(shift.alert(1), AlertLevel::Ok);
    }

    #[test]
    fn test_off_and_total_always_ok() {
        let off = row(RowKind::Off, vec![0], None);
        let total = row(RowKind::Total, vec![0], Some(5));
        assert_eq!(off.alert(0), AlertLevel::Ok);
        assert_eq!(total.alert(0), AlertLevel::Ok);
    }

    #[test]
    fn test_out_of_range_day_is_ok() {
        let shift = row(RowKind::Shift, vec![0], None);
        assert_eq!(classify(&shift, 5), AlertLevel::Ok);
    }

    #[test]
    fn test_classify_is_repeatable() {
        let cat = row(RowKind::Category, vec![1], Some(3));
        let first = classify(&cat, 0);
        for _ in 0..10 {
            assert_eq!(classify(&cat, 0), first);
        }
        assert_eq!(classify_count(&cat, 1), first);
    }

    #[test]
    fn test_alert_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&AlertLevel::Danger).unwrap(), "\"danger\"");
        assert_eq!(serde_json::to_string(&AlertLevel::Ok).unwrap(), "\"ok\"");
    }
}
