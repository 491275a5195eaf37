//! Inclusive date windows and calendar helpers

use chrono::{Datelike, Duration, Months, NaiveDate};
use serde::Serialize;

/// An inclusive `[from, to]` date window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateWindow {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

impl DateWindow {
    pub fn new(from: NaiveDate, to: NaiveDate) -> Self {
        Self { from, to }
    }

    /// Window covering every representable date
    pub fn everything() -> Self {
        Self::new(NaiveDate::MIN, NaiveDate::MAX)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.from && date <= self.to
    }

    /// Inclusive day count, never less than 1
    pub fn num_days(&self) -> i64 {
        ((self.to - self.from).num_days() + 1).max(1)
    }

    pub fn to_period(&self) -> ReportPeriod {
        ReportPeriod {
            from: self.from,
            to: self.to,
            num_days: self.num_days(),
        }
    }
}

/// Serialised form of a resolved window
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportPeriod {
    pub from: NaiveDate,
    pub to: NaiveDate,
    pub num_days: i64,
}

pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

pub fn end_of_month(date: NaiveDate) -> NaiveDate {
    add_months(first_of_month(date), 1)
        .pred_opt()
        .unwrap_or(date)
}

pub fn is_month_end(date: NaiveDate) -> bool {
    end_of_month(date) == date
}

/// Move back `n` calendar months, clamping the day to the target month's length
pub fn sub_months(date: NaiveDate, n: u32) -> NaiveDate {
    date.checked_sub_months(Months::new(n))
        .unwrap_or(NaiveDate::MIN)
}

/// Move forward `n` calendar months, clamping the day to the target month's length
pub fn add_months(date: NaiveDate, n: u32) -> NaiveDate {
    date.checked_add_months(Months::new(n))
        .unwrap_or(NaiveDate::MAX)
}

pub fn add_days(date: NaiveDate, n: i64) -> NaiveDate {
    date.checked_add_signed(Duration::days(n))
        .unwrap_or(if n < 0 { NaiveDate::MIN } else { NaiveDate::MAX })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_num_days_is_inclusive() {
        let window = DateWindow::new(date(2026, 1, 1), date(2026, 1, 31));
        assert_eq!(window.num_days(), 31);
    }

    #[test]
    fn test_num_days_never_below_one() {
        let inverted = DateWindow::new(date(2026, 3, 10), date(2026, 3, 1));
        assert_eq!(inverted.num_days(), 1);
    }

    #[test]
    fn test_month_helpers() {
        assert_eq!(end_of_month(date(2024, 2, 10)), date(2024, 2, 29));
        assert_eq!(end_of_month(date(2026, 12, 31)), date(2026, 12, 31));
        assert_eq!(first_of_month(date(2026, 7, 19)), date(2026, 7, 1));
        assert_eq!(sub_months(date(2026, 3, 31), 1), date(2026, 2, 28));
        assert!(is_month_end(date(2026, 4, 30)));
        assert!(!is_month_end(date(2026, 4, 29)));
    }
}
