//! Date range resolution and previous-period comparison

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::period::{end_of_month, first_of_month, is_month_end, sub_months};
use crate::domain::result::Error;
use crate::domain::DateWindow;

/// Named report range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RangeSelector {
    #[serde(rename = "month")]
    Month,
    #[serde(rename = "last-month")]
    LastMonth,
    #[serde(rename = "3-months")]
    ThreeMonths,
    #[serde(rename = "custom")]
    Custom,
}

impl RangeSelector {
    pub fn as_str(&self) -> &'static str {
        match self {
            RangeSelector::Month => "month",
            RangeSelector::LastMonth => "last-month",
            RangeSelector::ThreeMonths => "3-months",
            RangeSelector::Custom => "custom",
        }
    }
}

impl fmt::Display for RangeSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RangeSelector {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "month" => Ok(RangeSelector::Month),
            "last-month" => Ok(RangeSelector::LastMonth),
            "3-months" => Ok(RangeSelector::ThreeMonths),
            "custom" => Ok(RangeSelector::Custom),
            other => Err(Error::validation(format!(
                "unknown range '{}' (expected month, last-month, 3-months or custom)",
                other
            ))),
        }
    }
}

/// A report request: a named range and/or explicit bounds
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportQuery {
    #[serde(default)]
    pub range: Option<RangeSelector>,
    #[serde(default)]
    pub from: Option<NaiveDate>,
    #[serde(default)]
    pub to: Option<NaiveDate>,
}

impl ReportQuery {
    pub fn range(range: RangeSelector) -> Self {
        Self {
            range: Some(range),
            ..Self::default()
        }
    }

    pub fn custom(from: Option<NaiveDate>, to: Option<NaiveDate>) -> Self {
        Self {
            range: Some(RangeSelector::Custom),
            from,
            to,
        }
    }
}

/// Resolve a query into a concrete inclusive window relative to `today`
///
/// Explicit bounds take precedence over the named range. Without either, the
/// window is the trailing 12 calendar months ending with the current month.
pub fn resolve_window(query: &ReportQuery, today: NaiveDate) -> DateWindow {
    if query.from.is_some() || query.to.is_some() {
        let from = query.from.unwrap_or_else(|| sub_months(today, 12));
        let to = query.to.unwrap_or(today);
        return DateWindow::new(from, to);
    }

    let month_start = first_of_month(today);
    match query.range {
        Some(RangeSelector::Month) => DateWindow::new(month_start, end_of_month(today)),
        Some(RangeSelector::LastMonth) => {
            let previous = sub_months(month_start, 1);
            DateWindow::new(previous, end_of_month(previous))
        }
        Some(RangeSelector::ThreeMonths) => {
            DateWindow::new(sub_months(month_start, 2), end_of_month(today))
        }
        Some(RangeSelector::Custom) | None => {
            DateWindow::new(sub_months(month_start, 11), end_of_month(today))
        }
    }
}

/// The window one calendar month before `current`
///
/// A `to` bound sitting on a month end stays on the previous month's end, so
/// a full month compares against the full month before it.
pub fn previous_window(current: &DateWindow) -> DateWindow {
    let from = sub_months(current.from, 1);
    let to = if is_month_end(current.to) {
        end_of_month(sub_months(first_of_month(current.to), 1))
    } else {
        sub_months(current.to, 1)
    };
    DateWindow::new(from, to)
}

/// Percentage change from `previous` to `current`
///
/// When there is no positive baseline the change is 100 for any positive
/// current value and 0 otherwise.
pub fn percent_change(current: Decimal, previous: Decimal) -> Decimal {
    if previous > Decimal::ZERO {
        ((current - previous) / previous * Decimal::ONE_HUNDRED).round_dp(2)
    } else if current > Decimal::ZERO {
        Decimal::ONE_HUNDRED
    } else {
        Decimal::ZERO
    }
}
