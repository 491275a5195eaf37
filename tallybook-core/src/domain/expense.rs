//! Expense domain model

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Settlement state of an expense
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExpenseStatus {
    Paid,
    Pending,
    Overdue,
}

/// A single business expense
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseRecord {
    pub id: String,
    pub date: NaiveDate,
    /// Free-text description, also used as the merchant key in drilldowns
    pub description: String,
    pub category_id: String,
    pub amount: Decimal,
    pub payment_method: String,
    pub status: ExpenseStatus,
}

impl ExpenseRecord {
    /// Create a paid card expense with the required fields
    pub fn new(
        id: impl Into<String>,
        date: NaiveDate,
        description: impl Into<String>,
        category_id: impl Into<String>,
        amount: Decimal,
    ) -> Self {
        Self {
            id: id.into(),
            date,
            description: description.into(),
            category_id: category_id.into(),
            amount,
            payment_method: "card".to_string(),
            status: ExpenseStatus::Paid,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expense_wire_format() {
        let json = r#"{
            "id": "exp-1",
            "date": "2026-01-05",
            "description": "Corner Cafe",
            "categoryId": "food",
            "amount": 12.5,
            "paymentMethod": "cash",
            "status": "pending"
        }"#;
        let expense: ExpenseRecord = serde_json::from_str(json).unwrap();
        assert_eq!(expense.date, NaiveDate::from_ymd_opt(2026, 1, 5).unwrap());
        assert_eq!(expense.amount, Decimal::new(125, 1));
        assert_eq!(expense.status, ExpenseStatus::Pending);
        assert_eq!(expense.category_id, "food");
    }
}
