//! Invoice domain model

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceStatus {
    Draft,
    Pending,
    Paid,
    Overdue,
}

/// An invoice issued to a client
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceRecord {
    pub id: String,
    pub client: String,
    pub amount: Decimal,
    pub status: InvoiceStatus,
    pub issue_date: NaiveDate,
    #[serde(default)]
    pub paid_date: Option<NaiveDate>,
}

impl InvoiceRecord {
    /// Create a paid invoice settled on `paid_date`
    pub fn paid(
        id: impl Into<String>,
        client: impl Into<String>,
        amount: Decimal,
        issue_date: NaiveDate,
        paid_date: NaiveDate,
    ) -> Self {
        Self {
            id: id.into(),
            client: client.into(),
            amount,
            status: InvoiceStatus::Paid,
            issue_date,
            paid_date: Some(paid_date),
        }
    }

    /// Only paid invoices count as realised income
    pub fn is_paid(&self) -> bool {
        self.status == InvoiceStatus::Paid
    }

    /// Date the income is booked on: the paid date, else the issue date
    pub fn income_date(&self) -> NaiveDate {
        self.paid_date.unwrap_or(self.issue_date)
    }
}
