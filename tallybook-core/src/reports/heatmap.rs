//! Trailing-year daily spending heatmap

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::domain::money::to_f64;
use crate::domain::period::add_days;
use crate::domain::{DateWindow, ExpenseRecord};

/// Number of days covered by the heatmap, ending today
pub const HEATMAP_DAYS: i64 = 365;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Intensity {
    None,
    Low,
    Medium,
    High,
    VeryHigh,
}

impl Intensity {
    pub fn for_amount(amount: Decimal) -> Self {
        if amount <= Decimal::ZERO {
            Intensity::None
        } else if amount < Decimal::new(50, 0) {
            Intensity::Low
        } else if amount < Decimal::new(200, 0) {
            Intensity::Medium
        } else if amount < Decimal::new(500, 0) {
            Intensity::High
        } else {
            Intensity::VeryHigh
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeatmapCell {
    pub amount: f64,
    pub intensity: Intensity,
}

/// The lookback window, independent of any report range
pub fn heatmap_window(today: NaiveDate) -> DateWindow {
    DateWindow::new(add_days(today, -(HEATMAP_DAYS - 1)), today)
}

/// One cell per day of the lookback window, keyed by ISO date
pub fn build(today: NaiveDate, expenses: &[ExpenseRecord]) -> BTreeMap<String, HeatmapCell> {
    let window = heatmap_window(today);

    let mut daily: BTreeMap<NaiveDate, Decimal> = BTreeMap::new();
    for expense in expenses.iter().filter(|e| window.contains(e.date)) {
        *daily.entry(expense.date).or_insert(Decimal::ZERO) += expense.amount;
    }

    (0..HEATMAP_DAYS)
        .map(|offset| {
            let day = add_days(window.from, offset);
            let amount = daily.get(&day).copied().unwrap_or(Decimal::ZERO);
            (
                day.format("%Y-%m-%d").to_string(),
                HeatmapCell {
                    amount: to_f64(amount),
                    intensity: Intensity::for_amount(amount),
                },
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_intensity_tiers() {
        assert_eq!(Intensity::for_amount(Decimal::ZERO), Intensity::None);
        assert_eq!(Intensity::for_amount(Decimal::new(4999, 2)), Intensity::Low);
        assert_eq!(Intensity::for_amount(Decimal::new(50, 0)), Intensity::Medium);
        assert_eq!(Intensity::for_amount(Decimal::new(199, 0)), Intensity::Medium);
        assert_eq!(Intensity::for_amount(Decimal::new(200, 0)), Intensity::High);
        assert_eq!(Intensity::for_amount(Decimal::new(500, 0)), Intensity::VeryHigh);
    }

    #[test]
    fn test_heatmap_covers_trailing_year() {
        let today = date(2026, 10, 14);
        let map = build(today, &[]);
        assert_eq!(map.len(), 365);
        assert!(map.contains_key("2026-10-14"));
        assert!(map.contains_key("2025-10-15"));
        assert!(!map.contains_key("2025-10-14"));
        assert!(map.values().all(|c| c.intensity == Intensity::None));
    }

    #[test]
    fn test_heatmap_sums_same_day_expenses() {
        let today = date(2026, 10, 14);
        let day = date(2026, 9, 1);
        let expenses = vec![
            ExpenseRecord::new("1", day, "A", "food", Decimal::new(120, 0)),
            ExpenseRecord::new("2", day, "B", "travel", Decimal::new(100, 0)),
            ExpenseRecord::new("3", date(2024, 1, 1), "C", "travel", Decimal::new(900, 0)),
        ];
        let map = build(today, &expenses);
        assert_eq!(map.len(), 365);
        let cell = &map["2026-09-01"];
        assert_eq!(cell.amount, 220.0);
        assert_eq!(cell.intensity, Intensity::High);
    }

    #[test]
    fn test_intensity_serializes_kebab_case() {
        assert_eq!(serde_json::to_string(&Intensity::VeryHigh).unwrap(), "\"very-high\"");
    }
}
