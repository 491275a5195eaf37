//! Budget allocations and the category → budget taxonomy mapping

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Budgeted amount for one budget category over a report period
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetAllocation {
    pub category: String,
    pub amount: Decimal,
}

impl BudgetAllocation {
    pub fn new(category: impl Into<String>, amount: Decimal) -> Self {
        Self {
            category: category.into(),
            amount,
        }
    }
}

/// Budget allocations plus the many-to-one translation from category display
/// names onto the budget taxonomy
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetTable {
    pub budgets: Vec<BudgetAllocation>,
    pub budget_mapping: BTreeMap<String, String>,
}

impl BudgetTable {
    pub fn new(budgets: Vec<BudgetAllocation>, budget_mapping: BTreeMap<String, String>) -> Self {
        Self {
            budgets,
            budget_mapping,
        }
    }

    /// Budget category a display name is reconciled against
    pub fn budget_category<'a>(&'a self, category_name: &'a str) -> &'a str {
        self.budget_mapping
            .get(category_name)
            .map(String::as_str)
            .unwrap_or(category_name)
    }

    /// Budgeted amount for a category display name, 0 when nothing matches
    pub fn budget_for(&self, category_name: &str) -> Decimal {
        let target = self.budget_category(category_name);
        self.budgets
            .iter()
            .find(|b| b.category == target)
            .map(|b| b.amount)
            .unwrap_or(Decimal::ZERO)
    }
}

impl Default for BudgetTable {
    fn default() -> Self {
        Self::new(default_budgets(), default_budget_mapping())
    }
}

/// Built-in budget taxonomy
pub fn default_budgets() -> Vec<BudgetAllocation> {
    vec![
        BudgetAllocation::new("Meals & Entertainment", Decimal::new(800, 0)),
        BudgetAllocation::new("Software", Decimal::new(1200, 0)),
        BudgetAllocation::new("Office", Decimal::new(600, 0)),
        BudgetAllocation::new("Facilities", Decimal::new(3500, 0)),
        BudgetAllocation::new("Travel", Decimal::new(1500, 0)),
        BudgetAllocation::new("Marketing", Decimal::new(2000, 0)),
        BudgetAllocation::new("Professional Services", Decimal::new(1000, 0)),
    ]
}

/// Built-in translation from category names onto [`default_budgets`]
pub fn default_budget_mapping() -> BTreeMap<String, String> {
    [
        ("Food & Dining", "Meals & Entertainment"),
        ("Entertainment", "Meals & Entertainment"),
        ("Software & Subscriptions", "Software"),
        ("Office Supplies", "Office"),
        ("Equipment", "Office"),
        ("Rent & Facilities", "Facilities"),
        ("Utilities", "Facilities"),
        ("Advertising", "Marketing"),
        ("Legal & Accounting", "Professional Services"),
    ]
    .into_iter()
    .map(|(from, to)| (from.to_string(), to.to_string()))
    .collect()
}
