//! Report service - assembles a reports snapshot per request

use std::sync::Arc;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::config::ReportSettings;
use crate::domain::money::{percent_of, to_f64, to_f64_2dp};
use crate::domain::result::Result;
use crate::domain::{BudgetTable, CategoryNames, ExpenseRecord, InvoiceRecord};
use crate::ports::{Clock, ReportRepository};
use crate::reports::insights::Figures;
use crate::reports::range::{percent_change, previous_window, resolve_window};
use crate::reports::{budget, buckets, categories, heatmap, insights};
use crate::reports::{ReportQuery, ReportStats, ReportsSnapshot};

/// Largest number of expenses listed under top transactions
pub const TOP_TRANSACTIONS: usize = 20;

/// Report service for the dashboard reports
///
/// Holds no per-request state, so one instance can serve concurrent requests.
pub struct ReportService {
    repository: Arc<dyn ReportRepository>,
    clock: Arc<dyn Clock>,
    palette: Vec<String>,
    budget_table: BudgetTable,
}

impl ReportService {
    pub fn new(
        repository: Arc<dyn ReportRepository>,
        clock: Arc<dyn Clock>,
        settings: &ReportSettings,
    ) -> Self {
        Self {
            repository,
            clock,
            palette: settings.palette.clone(),
            budget_table: settings.budget_table(),
        }
    }

    /// Build the snapshot for `query` relative to the clock's today
    pub fn generate(&self, query: &ReportQuery) -> Result<ReportsSnapshot> {
        self.generate_for(query, self.clock.today())
    }

    /// Build the snapshot for `query` relative to an explicit today
    pub fn generate_for(&self, query: &ReportQuery, today: NaiveDate) -> Result<ReportsSnapshot> {
        let window = resolve_window(query, today);
        let previous = previous_window(&window);

        let span = tracing::debug_span!(
            "report",
            range = query.range.map(|r| r.as_str()).unwrap_or("default"),
            from = %window.from,
            to = %window.to,
        );
        let _enter = span.enter();

        let names = CategoryNames::from_categories(&self.repository.list_categories()?);
        let expenses = self.repository.list_expenses(&window)?;
        let invoices = self.repository.list_paid_invoices(&window)?;
        let previous_expenses = self.repository.list_expenses(&previous)?;
        let previous_invoices = self.repository.list_paid_invoices(&previous)?;
        let heatmap_expenses = self.repository.list_expenses(&heatmap::heatmap_window(today))?;

        tracing::debug!(
            expenses = expenses.len(),
            invoices = invoices.len(),
            previous_expenses = previous_expenses.len(),
            previous_invoices = previous_invoices.len(),
            heatmap_expenses = heatmap_expenses.len(),
            "records loaded"
        );

        let current = Totals::of(&expenses, &invoices);
        let prior = Totals::of(&previous_expenses, &previous_invoices);

        let groups = categories::group_by_category(&expenses, &names);
        let highest_category = categories::highest_category(&groups);
        let mut category_distribution = categories::distribution(&groups, &self.palette);
        let budget_comparison = budget::compare(&groups, &self.budget_table);
        budget::annotate_distribution(&mut category_distribution, &budget_comparison);

        let figures = Figures {
            income: current.income,
            expenses: current.expenses,
            net_savings: current.net_savings,
            savings_rate: current.savings_rate,
            highest_category: &highest_category,
        };
        let insights = insights::insights(&figures);
        let suggestions = insights::suggestions(&figures);

        let avg_daily_spend =
            (current.expenses / Decimal::from(window.num_days())).round_dp(2);
        let stats = ReportStats {
            total_income: to_f64(current.income),
            total_expenses: to_f64(current.expenses),
            net_savings: to_f64(current.net_savings),
            savings_rate: to_f64_2dp(current.savings_rate),
            avg_daily_spend: to_f64(avg_daily_spend),
            highest_category: highest_category.clone(),
            income_change: to_f64(percent_change(current.income, prior.income)),
            expense_change: to_f64(percent_change(current.expenses, prior.expenses)),
            savings_change: to_f64(percent_change(current.net_savings, prior.net_savings)),
        };

        let profit_loss_trend = buckets::profit_loss_trend(&window, &expenses, &invoices);
        let income_vs_expenses = buckets::income_vs_expenses(&profit_loss_trend);

        Ok(ReportsSnapshot {
            period: window.to_period(),
            previous_period: previous.to_period(),
            stats,
            category_distribution,
            spending_trend: buckets::spending_trend(&window, &expenses),
            profit_loss_trend,
            income_vs_expenses,
            budget_comparison,
            insights,
            suggestions,
            category_drilldown: categories::drilldowns(&groups, &window),
            top_transactions: categories::top_transactions(&expenses, &names, TOP_TRANSACTIONS),
            heatmap_data: heatmap::build(today, &heatmap_expenses),
        })
    }
}

/// Headline totals for one window
struct Totals {
    income: Decimal,
    expenses: Decimal,
    net_savings: Decimal,
    savings_rate: Decimal,
}

impl Totals {
    fn of(expenses: &[ExpenseRecord], invoices: &[InvoiceRecord]) -> Self {
        let income: Decimal = invoices.iter().map(|i| i.amount).sum();
        let spent: Decimal = expenses.iter().map(|e| e.amount).sum();
        let net_savings = income - spent;
        Self {
            income,
            expenses: spent,
            net_savings,
            savings_rate: percent_of(net_savings, income),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemoryStore;
    use crate::domain::Category;
    use crate::ports::FixedClock;
    use crate::reports::RangeSelector;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn service(store: InMemoryStore, today: NaiveDate) -> ReportService {
        ReportService::new(Arc::new(store), Arc::new(FixedClock(today)), &ReportSettings::default())
    }

    #[test]
    fn test_previous_period_changes() {
        let store = InMemoryStore::with_records(
            vec![
                ExpenseRecord::new("1", date(2026, 2, 10), "Vendor", "office", Decimal::new(200, 0)),
                ExpenseRecord::new("2", date(2026, 1, 10), "Vendor", "office", Decimal::new(100, 0)),
            ],
            vec![InvoiceRecord::paid("i", "Acme", Decimal::new(500, 0), date(2026, 2, 1), date(2026, 2, 3))],
            vec![Category::new("office", "Office Supplies")],
        );
        let snapshot = service(store, date(2026, 2, 20))
            .generate(&ReportQuery::range(RangeSelector::Month))
            .unwrap();

        assert_eq!(snapshot.previous_period.from, date(2026, 1, 1));
        assert_eq!(snapshot.previous_period.to, date(2026, 1, 31));
        assert_eq!(snapshot.stats.expense_change, 100.0);
        assert_eq!(snapshot.stats.income_change, 100.0);
        assert_eq!(snapshot.stats.savings_change, 100.0);
        assert_eq!(snapshot.stats.avg_daily_spend, 7.14);
    }

    #[test]
    fn test_distribution_carries_budget() {
        let store = InMemoryStore::with_records(
            vec![ExpenseRecord::new("1", date(2026, 2, 10), "Vendor", "office", Decimal::new(900, 0))],
            vec![],
            vec![Category::new("office", "Office Supplies")],
        );
        let snapshot = service(store, date(2026, 2, 20))
            .generate(&ReportQuery::range(RangeSelector::Month))
            .unwrap();

        assert_eq!(snapshot.category_distribution[0].budget, 600.0);
        assert_eq!(snapshot.budget_comparison[0].progress, 150.0);
        assert!(snapshot.budget_comparison[0].over_budget);
        assert_eq!(snapshot.stats.savings_rate, 0.0);
    }

    #[test]
    fn test_savings_rate_rounds_only_on_output() {
        let store = InMemoryStore::with_records(
            vec![ExpenseRecord::new("1", date(2026, 2, 10), "Vendor", "office", Decimal::new(800040, 2))],
            vec![InvoiceRecord::paid("i", "Acme", Decimal::new(10000, 0), date(2026, 2, 1), date(2026, 2, 3))],
            vec![Category::new("office", "Office Supplies")],
        );
        let snapshot = service(store, date(2026, 2, 20))
            .generate(&ReportQuery::range(RangeSelector::Month))
            .unwrap();

        assert_eq!(snapshot.stats.savings_rate, 20.0);
        assert!(snapshot
            .insights
            .iter()
            .all(|a| a.kind != crate::reports::AnnotationKind::Positive));
    }
}
