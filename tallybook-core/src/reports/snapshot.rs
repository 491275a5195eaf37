//! The assembled report returned to callers

use std::collections::BTreeMap;

use serde::Serialize;

use crate::domain::ReportPeriod;

use super::budget::BudgetLine;
use super::buckets::{MonthlyIncomeExpense, ProfitLossPoint, SpendingPoint, TrendSet};
use super::categories::{CategoryDrilldown, CategorySlice, TopTransaction};
use super::heatmap::HeatmapCell;
use super::insights::Annotation;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportStats {
    pub total_income: f64,
    pub total_expenses: f64,
    pub net_savings: f64,
    pub savings_rate: f64,
    pub avg_daily_spend: f64,
    pub highest_category: String,
    pub income_change: f64,
    pub expense_change: f64,
    pub savings_change: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportsSnapshot {
    pub period: ReportPeriod,
    pub previous_period: ReportPeriod,
    pub stats: ReportStats,
    pub category_distribution: Vec<CategorySlice>,
    pub spending_trend: TrendSet<SpendingPoint>,
    pub profit_loss_trend: TrendSet<ProfitLossPoint>,
    pub income_vs_expenses: Vec<MonthlyIncomeExpense>,
    pub budget_comparison: Vec<BudgetLine>,
    pub insights: Vec<Annotation>,
    pub suggestions: Vec<Annotation>,
    pub category_drilldown: BTreeMap<String, CategoryDrilldown>,
    pub top_transactions: Vec<TopTransaction>,
    pub heatmap_data: BTreeMap<String, HeatmapCell>,
}
