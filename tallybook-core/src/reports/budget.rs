//! Budget reconciliation of the category distribution

use rust_decimal::Decimal;
use serde::Serialize;

use crate::domain::money::{percent_of, to_f64, to_f64_2dp};
use crate::domain::BudgetTable;

use super::categories::{CategoryGroup, CategorySlice};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetLine {
    pub category: String,
    pub budgeted: f64,
    pub spent: f64,
    pub remaining: f64,
    pub progress: f64,
    pub over_budget: bool,
}

/// One budget line per category group, in distribution order
///
/// Several categories mapped onto the same budget entry are each compared
/// against that entry's full amount.
pub fn compare(groups: &[CategoryGroup<'_>], table: &BudgetTable) -> Vec<BudgetLine> {
    groups
        .iter()
        .map(|group| line(&group.name, group.total, table.budget_for(&group.name)))
        .collect()
}

/// Copy the budgeted amounts onto the matching distribution slices
pub fn annotate_distribution(slices: &mut [CategorySlice], lines: &[BudgetLine]) {
    for (slice, line) in slices.iter_mut().zip(lines) {
        slice.budget = line.budgeted;
    }
}

fn line(category: &str, spent: Decimal, budgeted: Decimal) -> BudgetLine {
    let progress = percent_of(spent, budgeted);
    BudgetLine {
        category: category.to_string(),
        budgeted: to_f64(budgeted),
        spent: to_f64(spent),
        remaining: to_f64(budgeted - spent),
        progress: to_f64_2dp(progress),
        over_budget: progress > Decimal::ONE_HUNDRED,
    }
}
