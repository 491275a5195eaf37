//! Demo data provider
//!
//! Generates a small consulting business's books laid out relative to a
//! given "today":
//! - 9 expense categories
//! - 400 days of expenses with recurring bills and everyday spending
//! - 14 months of client invoices, most of them paid

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;

use crate::domain::period::{add_days, first_of_month, sub_months};
use crate::domain::{Category, ExpenseRecord, ExpenseStatus, InvoiceRecord, InvoiceStatus};

const DEMO_DAYS: i64 = 400;
const DEMO_INVOICE_MONTHS: u32 = 14;

pub fn generate_demo_categories() -> Vec<Category> {
    vec![
        Category::new("food", "Food & Dining"),
        Category::new("software", "Software & Subscriptions"),
        Category::new("office", "Office Supplies"),
        Category::new("rent", "Rent & Facilities"),
        Category::new("utilities", "Utilities"),
        Category::new("travel", "Travel"),
        Category::new("marketing", "Marketing"),
        Category::new("legal", "Legal & Accounting"),
        Category::new("equipment", "Equipment"),
    ]
}

/// Generate demo expenses for the 400 days up to and including `today`
pub fn generate_demo_expenses(today: NaiveDate) -> Vec<ExpenseRecord> {
    let mut expenses = DemoExpenses::default();

    for days_ago in (0..DEMO_DAYS).rev() {
        let date = add_days(today, -days_ago);
        let day_of_month = date.day();

        // Rent on the 1st
        if day_of_month == 1 {
            expenses.push(date, "Harbor Point Properties", "rent", 240000, "bank-transfer", days_ago);
        }

        // Subscriptions on fixed days
        if day_of_month == 3 {
            expenses.push(date, "Figma", "software", 4500, "card", days_ago);
        }
        if day_of_month == 7 {
            expenses.push(date, "Slack", "software", 8750, "card", days_ago);
        }
        if day_of_month == 12 {
            expenses.push(date, "Google Workspace", "software", 7200, "card", days_ago);
        }

        // Utilities on the 10th
        if day_of_month == 10 {
            expenses.push(date, "City Power & Light", "utilities", 18000, "bank-transfer", days_ago);
            expenses.push(date, "Metro Fiber Internet", "utilities", 9500, "bank-transfer", days_ago);
        }

        // Ads on the 18th and 25th
        if day_of_month == 18 {
            expenses.push(date, "Google Ads", "marketing", 60000, "card", days_ago);
        }
        if day_of_month == 25 {
            expenses.push(date, "LinkedIn Ads", "marketing", 25000, "card", days_ago);
        }

        // Quarterly bookkeeping
        if day_of_month == 28 && date.month() % 3 == 0 {
            expenses.push(date, "Ledger & Co CPA", "legal", 35000, "bank-transfer", days_ago);
        }

        // Team meals every 3 days
        if days_ago % 3 == 0 {
            let meals = [
                ("Corner Cafe", 2350i64),
                ("Bluebird Bistro", 6420),
                ("Corner Cafe", 1875),
                ("Sakura Sushi", 9310),
                ("Green Bowl", 2740),
            ];
            let (merchant, cents) = meals[(days_ago / 3) as usize % meals.len()];
            expenses.push(date, merchant, "food", cents, "card", days_ago);
        }

        // Office supplies weekly
        if days_ago % 7 == 2 {
            let cents = [3499i64, 1250, 5875, 2199][(days_ago / 7) as usize % 4];
            expenses.push(date, "Staples", "office", cents, "card", days_ago);
        }

        // Client travel roughly every six weeks
        if days_ago % 45 == 0 {
            expenses.push(date, "Delta Air Lines", "travel", 48000, "card", days_ago);
        }
        if days_ago % 45 == 2 {
            expenses.push(date, "Marriott", "travel", 32000, "card", days_ago);
        }

        // Hardware refresh each quarter
        if days_ago % 90 == 30 {
            expenses.push(date, "Apple Store", "equipment", 129900, "card", days_ago);
        }
    }

    expenses.records
}

/// Generate 14 months of invoices ending with the month of `today`
pub fn generate_demo_invoices(today: NaiveDate) -> Vec<InvoiceRecord> {
    let clients = [
        ("Northwind Traders", 420000i64),
        ("Globex Corporation", 265000),
        ("Initech", 180000),
    ];

    let mut invoices = Vec::new();
    let current_month = first_of_month(today);

    for months_ago in (0..DEMO_INVOICE_MONTHS).rev() {
        let month_start = sub_months(current_month, months_ago);
        for (index, (client, cents)) in clients.iter().enumerate() {
            let issue_date = add_days(month_start, 4 + index as i64 * 6);
            if issue_date > today {
                continue;
            }
            let paid_date = add_days(issue_date, 18 + index as i64 * 3);

            let (status, paid_date) = if paid_date <= today {
                (InvoiceStatus::Paid, Some(paid_date))
            } else if months_ago == 0 {
                (InvoiceStatus::Pending, None)
            } else {
                (InvoiceStatus::Overdue, None)
            };

            invoices.push(InvoiceRecord {
                id: format!("inv-{:04}", invoices.len() + 1),
                client: client.to_string(),
                amount: Decimal::new(*cents, 2),
                status,
                issue_date,
                paid_date,
            });
        }
    }

    invoices
}

#[derive(Default)]
struct DemoExpenses {
    records: Vec<ExpenseRecord>,
}

impl DemoExpenses {
    fn push(
        &mut self,
        date: NaiveDate,
        merchant: &str,
        category_id: &str,
        cents: i64,
        payment_method: &str,
        days_ago: i64,
    ) {
        // The last few days are not settled yet
        let status = if days_ago < 5 {
            ExpenseStatus::Pending
        } else {
            ExpenseStatus::Paid
        };

        self.records.push(ExpenseRecord {
            id: format!("exp-{:05}", self.records.len() + 1),
            date,
            description: merchant.to_string(),
            category_id: category_id.to_string(),
            amount: Decimal::new(cents, 2),
            payment_method: payment_method.to_string(),
            status,
        });
    }
}
