//! Time-series bucketing for the spending and profit/loss trends
//!
//! Every granularity partitions time into inclusive `[start, end]` buckets and
//! sums the records whose date falls inside each one. The spending series uses
//! expense amounts; the profit/loss series adds realised income dated by
//! `paidDate ?? issueDate`.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::domain::money::to_f64;
use crate::domain::period::{add_days, add_months, end_of_month, first_of_month};
use crate::domain::{DateWindow, ExpenseRecord, InvoiceRecord};

/// A labelled inclusive sub-interval of a report window
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bucket {
    pub label: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl Bucket {
    fn new(label: impl Into<String>, start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            label: label.into(),
            start,
            end,
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    /// Sum `amount_of` over the records dated inside this bucket
    pub fn sum<T>(
        &self,
        records: &[T],
        date_of: impl Fn(&T) -> NaiveDate,
        amount_of: impl Fn(&T) -> Decimal,
    ) -> Decimal {
        records
            .iter()
            .filter(|r| self.contains(date_of(*r)))
            .map(amount_of)
            .sum()
    }
}

/// One series per granularity
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendSet<T> {
    #[serde(rename = "7D")]
    pub seven_days: Vec<T>,
    #[serde(rename = "30D")]
    pub thirty_days: Vec<T>,
    #[serde(rename = "3M")]
    pub three_months: Vec<T>,
    #[serde(rename = "1Y")]
    pub one_year: Vec<T>,
}

impl<T> TrendSet<T> {
    fn build(window: &DateWindow, point: impl Fn(&Bucket) -> T) -> Self {
        let series = |buckets: Vec<Bucket>| -> Vec<T> { buckets.iter().map(&point).collect() };
        Self {
            seven_days: series(daily_buckets(window)),
            thirty_days: series(weekly_buckets(window)),
            three_months: series(month_buckets(window, 3, false)),
            one_year: series(month_buckets(window, 12, true)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpendingPoint {
    pub label: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub amount: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfitLossPoint {
    pub label: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub income: f64,
    pub expenses: f64,
    pub net: f64,
}

/// Monthly income against expenses
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyIncomeExpense {
    pub month: String,
    pub income: f64,
    pub expenses: f64,
    pub net_profit: f64,
}

/// The 7 days ending at the window's `to`, oldest first
pub fn daily_buckets(window: &DateWindow) -> Vec<Bucket> {
    (0..7)
        .rev()
        .map(|back| {
            let day = add_days(window.to, -back);
            Bucket::new(day.format("%a").to_string(), day, day)
        })
        .collect()
}

/// Four consecutive 7-day buckets starting at the window's `from`
pub fn weekly_buckets(window: &DateWindow) -> Vec<Bucket> {
    (0..4)
        .map(|week| {
            let start = add_days(window.from, week * 7);
            Bucket::new(format!("Week {}", week + 1), start, add_days(start, 6))
        })
        .collect()
}

/// Up to `count` calendar months starting with the month of `from`
///
/// With `stop_after_to`, months starting after the window's `to` are dropped.
pub fn month_buckets(window: &DateWindow, count: u32, stop_after_to: bool) -> Vec<Bucket> {
    let first = first_of_month(window.from);
    (0..count)
        .map(|offset| add_months(first, offset))
        .take_while(|start| !stop_after_to || *start <= window.to)
        .map(|start| Bucket::new(start.format("%b").to_string(), start, end_of_month(start)))
        .collect()
}

pub fn spending_trend(window: &DateWindow, expenses: &[ExpenseRecord]) -> TrendSet<SpendingPoint> {
    TrendSet::build(window, |bucket| SpendingPoint {
        label: bucket.label.clone(),
        start: bucket.start,
        end: bucket.end,
        amount: to_f64(sum_expenses(bucket, expenses)),
    })
}

pub fn profit_loss_trend(
    window: &DateWindow,
    expenses: &[ExpenseRecord],
    invoices: &[InvoiceRecord],
) -> TrendSet<ProfitLossPoint> {
    TrendSet::build(window, |bucket| profit_loss_point(bucket, expenses, invoices))
}

/// Monthly income vs expenses over the 1Y buckets
pub fn income_vs_expenses(trend: &TrendSet<ProfitLossPoint>) -> Vec<MonthlyIncomeExpense> {
    trend
        .one_year
        .iter()
        .map(|point| MonthlyIncomeExpense {
            month: point.label.clone(),
            income: point.income,
            expenses: point.expenses,
            net_profit: point.net,
        })
        .collect()
}

pub(crate) fn sum_expenses(bucket: &Bucket, expenses: &[ExpenseRecord]) -> Decimal {
    bucket.sum(expenses, |e| e.date, |e| e.amount)
}

fn profit_loss_point(
    bucket: &Bucket,
    expenses: &[ExpenseRecord],
    invoices: &[InvoiceRecord],
) -> ProfitLossPoint {
    let income = bucket.sum(invoices, InvoiceRecord::income_date, |i| i.amount);
    let spent = sum_expenses(bucket, expenses);
    ProfitLossPoint {
        label: bucket.label.clone(),
        start: bucket.start,
        end: bucket.end,
        income: to_f64(income),
        expenses: to_f64(spent),
        net: to_f64(income - spent),
    }
}
