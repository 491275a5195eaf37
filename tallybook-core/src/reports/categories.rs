//! Category aggregation: distribution, top category, drilldowns, top transactions

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::domain::money::{average, to_f64};
use crate::domain::{CategoryNames, DateWindow, ExpenseRecord, ExpenseStatus};

use super::buckets::{weekly_buckets, SpendingPoint};

/// Shown as the highest category when there is no spending
pub const NO_CATEGORY: &str = "-";

/// Colour used when the configured palette is empty
const FALLBACK_COLOR: &str = "#9ca3af";

const TOP_MERCHANTS: usize = 5;

/// Expenses of one category within the report window
#[derive(Debug, Clone)]
pub struct CategoryGroup<'a> {
    pub category_id: &'a str,
    pub name: String,
    pub total: Decimal,
    pub expenses: Vec<&'a ExpenseRecord>,
}

/// One slice of the category distribution
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategorySlice {
    pub name: String,
    pub value: f64,
    pub color: String,
    /// Budget reconciled against this category, filled in by the budget comparison
    pub budget: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MerchantTotal {
    pub name: String,
    pub amount: f64,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryDrilldown {
    pub total: f64,
    pub avg_transaction: f64,
    pub weekly_data: Vec<SpendingPoint>,
    pub top_merchants: Vec<MerchantTotal>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TopTransaction {
    pub id: String,
    pub date: NaiveDate,
    pub description: String,
    pub category_id: String,
    pub category: String,
    pub amount: f64,
    pub payment_method: String,
    pub status: ExpenseStatus,
}

/// Group expenses by category id, largest total first
///
/// Ties keep category id order, so the result is stable across runs.
pub fn group_by_category<'a>(
    expenses: &'a [ExpenseRecord],
    names: &CategoryNames,
) -> Vec<CategoryGroup<'a>> {
    let mut by_id: BTreeMap<&'a str, Vec<&'a ExpenseRecord>> = BTreeMap::new();
    for expense in expenses {
        by_id.entry(expense.category_id.as_str()).or_default().push(expense);
    }

    let mut groups: Vec<CategoryGroup<'a>> = by_id
        .into_iter()
        .map(|(category_id, expenses)| CategoryGroup {
            category_id,
            name: names.resolve(category_id).to_string(),
            total: expenses.iter().map(|e| e.amount).sum(),
            expenses,
        })
        .collect();

    groups.sort_by(|a, b| b.total.cmp(&a.total));
    groups
}

pub fn distribution(groups: &[CategoryGroup<'_>], palette: &[String]) -> Vec<CategorySlice> {
    groups
        .iter()
        .enumerate()
        .map(|(index, group)| CategorySlice {
            name: group.name.clone(),
            value: to_f64(group.total),
            color: palette_color(palette, index),
            budget: 0.0,
        })
        .collect()
}

pub fn highest_category(groups: &[CategoryGroup<'_>]) -> String {
    groups
        .first()
        .map(|g| g.name.clone())
        .unwrap_or_else(|| NO_CATEGORY.to_string())
}

/// Per-category detail keyed by display name
pub fn drilldowns(
    groups: &[CategoryGroup<'_>],
    window: &DateWindow,
) -> BTreeMap<String, CategoryDrilldown> {
    let mut details = BTreeMap::new();
    for group in groups {
        details
            .entry(group.name.clone())
            .or_insert_with(|| drilldown(group, window));
    }
    details
}

pub fn drilldown(group: &CategoryGroup<'_>, window: &DateWindow) -> CategoryDrilldown {
    let weekly_data = weekly_buckets(window)
        .iter()
        .map(|bucket| SpendingPoint {
            label: bucket.label.clone(),
            start: bucket.start,
            end: bucket.end,
            amount: to_f64(bucket.sum(&group.expenses, |e| e.date, |e| e.amount)),
        })
        .collect();

    CategoryDrilldown {
        total: to_f64(group.total),
        avg_transaction: to_f64(average(group.total, group.expenses.len())),
        weekly_data,
        top_merchants: top_merchants(&group.expenses, TOP_MERCHANTS),
    }
}

/// Merchants keyed by expense description, largest total first
pub fn top_merchants(expenses: &[&ExpenseRecord], limit: usize) -> Vec<MerchantTotal> {
    let mut by_merchant: BTreeMap<&str, (Decimal, usize)> = BTreeMap::new();
    for expense in expenses {
        let entry = by_merchant
            .entry(expense.description.as_str())
            .or_insert((Decimal::ZERO, 0));
        entry.0 += expense.amount;
        entry.1 += 1;
    }

    let mut merchants: Vec<(&str, Decimal, usize)> = by_merchant
        .into_iter()
        .map(|(name, (amount, count))| (name, amount, count))
        .collect();
    merchants.sort_by(|a, b| b.1.cmp(&a.1));

    merchants
        .into_iter()
        .take(limit)
        .map(|(name, amount, count)| MerchantTotal {
            name: name.to_string(),
            amount: to_f64(amount),
            count,
        })
        .collect()
}

/// Largest expenses first; ties go to the most recent, then by id
pub fn top_transactions(
    expenses: &[ExpenseRecord],
    names: &CategoryNames,
    limit: usize,
) -> Vec<TopTransaction> {
    let mut ranked: Vec<&ExpenseRecord> = expenses.iter().collect();
    ranked.sort_by(|a, b| {
        b.amount
            .cmp(&a.amount)
            .then_with(|| b.date.cmp(&a.date))
            .then_with(|| a.id.cmp(&b.id))
    });

    ranked
        .into_iter()
        .take(limit)
        .map(|e| TopTransaction {
            id: e.id.clone(),
            date: e.date,
            description: e.description.clone(),
            category_id: e.category_id.clone(),
            category: names.resolve(&e.category_id).to_string(),
            amount: to_f64(e.amount),
            payment_method: e.payment_method.clone(),
            status: e.status,
        })
        .collect()
}

fn palette_color(palette: &[String], index: usize) -> String {
    if palette.is_empty() {
        FALLBACK_COLOR.to_string()
    } else {
        palette[index % palette.len()].clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Category;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn expense(id: &str, day: u32, merchant: &str, category: &str, amount: i64) -> ExpenseRecord {
        ExpenseRecord::new(id, date(2026, 1, day), merchant, category, Decimal::new(amount, 0))
    }

    fn names() -> CategoryNames {
        CategoryNames::from_categories(&[
            Category::new("food", "Food & Dining"),
            Category::new("travel", "Travel"),
        ])
    }

    fn palette() -> Vec<String> {
        vec!["#111111".to_string(), "#222222".to_string()]
    }

    #[test]
    fn test_distribution_sorted_with_cycling_colors() {
        let expenses = vec![
            expense("1", 3, "Cafe", "food", 40),
            expense("2", 4, "Airline", "travel", 300),
            expense("3", 5, "Printer Ink", "office", 60),
        ];
        let names = names();
        let groups = group_by_category(&expenses, &names);
        let slices = distribution(&groups, &palette());

        let order: Vec<&str> = slices.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(order, vec!["Travel", "office", "Food & Dining"]);
        assert_eq!(slices[0].color, "#111111");
        assert_eq!(slices[1].color, "#222222");
        assert_eq!(slices[2].color, "#111111");
        assert_eq!(highest_category(&groups), "Travel");
    }

    #[test]
    fn test_empty_input_has_sentinel_category() {
        let groups = group_by_category(&[], &names());
        assert!(distribution(&groups, &palette()).is_empty());
        assert_eq!(highest_category(&groups), NO_CATEGORY);
    }

    #[test]
    fn test_empty_palette_uses_fallback_color() {
        let expenses = vec![expense("1", 3, "Cafe", "food", 40)];
        let names = names();
        let groups = group_by_category(&expenses, &names);
        assert_eq!(distribution(&groups, &[])[0].color, FALLBACK_COLOR);
    }

    #[test]
    fn test_drilldown_merges_merchants() {
        let expenses = vec![
            expense("1", 2, "Corner Cafe", "food", 20),
            expense("2", 9, "Corner Cafe", "food", 30),
            expense("3", 10, "Bistro", "food", 25),
        ];
        let names = names();
        let groups = group_by_category(&expenses, &names);
        let window = DateWindow::new(date(2026, 1, 1), date(2026, 1, 31));
        let detail = drilldown(&groups[0], &window);

        assert_eq!(detail.total, 75.0);
        assert_eq!(detail.avg_transaction, 25.0);
        assert_eq!(
            detail.top_merchants[0],
            MerchantTotal { name: "Corner Cafe".to_string(), amount: 50.0, count: 2 }
        );
        assert_eq!(detail.top_merchants.len(), 2);

        let weekly: Vec<f64> = detail.weekly_data.iter().map(|p| p.amount).collect();
        assert_eq!(weekly, vec![20.0, 55.0, 0.0, 0.0]);
    }

    #[test]
    fn test_top_merchants_limit() {
        let expenses: Vec<ExpenseRecord> = (1..=7)
            .map(|i| expense(&i.to_string(), i, &format!("Shop {}", i), "food", i as i64 * 10))
            .collect();
        let refs: Vec<&ExpenseRecord> = expenses.iter().collect();
        let merchants = top_merchants(&refs, 5);
        assert_eq!(merchants.len(), 5);
        assert_eq!(merchants[0].name, "Shop 7");
        assert_eq!(merchants[4].name, "Shop 3");
    }

    #[test]
    fn test_top_transactions_ordering() {
        let expenses = vec![
            expense("a", 3, "Cafe", "food", 40),
            expense("b", 8, "Airline", "travel", 300),
            expense("c", 9, "Bistro", "food", 40),
        ];
        let top = top_transactions(&expenses, &names(), 2);
        let ids: Vec<&str> = top.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "c"]);
        assert_eq!(top[0].category, "Travel");
    }
}
