//! Rule-based insights and suggestions
//!
//! Rules run in a fixed order and do not exclude each other. When none of
//! them fires the list gets a single default entry.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::domain::money::format_currency;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AnnotationKind {
    Positive,
    Warning,
    Info,
    Tip,
}

/// A short text annotation attached to a report
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Annotation {
    pub id: u32,
    pub text: String,
    #[serde(rename = "type")]
    pub kind: AnnotationKind,
}

/// The figures the rules look at
#[derive(Debug, Clone)]
pub struct Figures<'a> {
    pub income: Decimal,
    pub expenses: Decimal,
    pub net_savings: Decimal,
    pub savings_rate: Decimal,
    pub highest_category: &'a str,
}

pub const DEFAULT_INSIGHT: &str = "Add income and expenses to start seeing insights about your finances.";
pub const DEFAULT_SUGGESTION: &str = "Keep recording transactions regularly to get tailored suggestions.";

pub fn insights(figures: &Figures<'_>) -> Vec<Annotation> {
    let mut list = Annotations::default();

    if figures.savings_rate >= Decimal::new(20, 0) && figures.income > Decimal::ZERO {
        list.push(
            AnnotationKind::Positive,
            format!(
                "Great job! You're saving {}% of your income this period.",
                figures.savings_rate.round_dp(1)
            ),
        );
    }

    if figures.expenses > figures.income
        && figures.expenses > Decimal::ZERO
        && figures.income > Decimal::ZERO
    {
        list.push(
            AnnotationKind::Warning,
            "Your expenses exceed your income this period. Review your spending to avoid a shortfall.",
        );
    }

    if figures.net_savings > Decimal::ZERO {
        list.push(
            AnnotationKind::Info,
            format!("You saved {} this period.", format_currency(figures.net_savings)),
        );
    }

    list.finish(AnnotationKind::Info, DEFAULT_INSIGHT)
}

pub fn suggestions(figures: &Figures<'_>) -> Vec<Annotation> {
    let mut list = Annotations::default();

    if figures.expenses > Decimal::ZERO {
        list.push(
            AnnotationKind::Tip,
            format!(
                "Review your {} expenses, your largest category, for possible savings.",
                figures.highest_category
            ),
        );
    }

    if figures.savings_rate >= Decimal::ZERO && figures.savings_rate < Decimal::new(10, 0) {
        list.push(
            AnnotationKind::Tip,
            "Aim to set aside at least 10% of your income each month.",
        );
    }

    list.finish(AnnotationKind::Tip, DEFAULT_SUGGESTION)
}

#[derive(Default)]
struct Annotations {
    items: Vec<Annotation>,
}

impl Annotations {
    fn push(&mut self, kind: AnnotationKind, text: impl Into<String>) {
        self.items.push(Annotation {
            id: self.items.len() as u32 + 1,
            text: text.into(),
            kind,
        });
    }

    fn finish(mut self, kind: AnnotationKind, default_text: &str) -> Vec<Annotation> {
        if self.items.is_empty() {
            self.push(kind, default_text);
        }
        self.items
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn figures(income: i64, expenses: i64, rate: i64) -> Figures<'static> {
        Figures {
            income: Decimal::new(income, 0),
            expenses: Decimal::new(expenses, 0),
            net_savings: Decimal::new(income - expenses, 0),
            savings_rate: Decimal::new(rate, 0),
            highest_category: "Travel",
        }
    }

    #[test]
    fn test_healthy_savings_fires_positive_and_info() {
        let list = insights(&figures(300, 150, 50));
        let kinds: Vec<AnnotationKind> = list.iter().map(|a| a.kind).collect();
        assert_eq!(kinds, vec![AnnotationKind::Positive, AnnotationKind::Info]);
        assert!(list[0].text.contains("50"));
        assert!(list[1].text.contains("$150.00"));
        assert_eq!(list[1].id, 2);
    }

    #[test]
    fn test_overspending_warns() {
        let list = insights(&figures(100, 250, -150));
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].kind, AnnotationKind::Warning);
    }

    #[test]
    fn test_no_data_gives_single_default() {
        let list = insights(&figures(0, 0, 0));
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].text, DEFAULT_INSIGHT);
        assert_eq!(list[0].id, 1);
    }

    #[test]
    fn test_suggestions() {
        let low_saver = suggestions(&figures(1000, 950, 5));
        let kinds: Vec<AnnotationKind> = low_saver.iter().map(|a| a.kind).collect();
        assert_eq!(kinds, vec![AnnotationKind::Tip, AnnotationKind::Tip]);
        assert!(low_saver[0].text.contains("Travel"));

        let overspent = suggestions(&Figures { expenses: Decimal::ZERO, ..figures(100, 0, -20) });
        assert_eq!(overspent.len(), 1);
        assert_eq!(overspent[0].text, DEFAULT_SUGGESTION);
    }

    #[test]
    fn test_positive_threshold_at_twenty_percent() {
        let at_threshold = insights(&figures(1000, 800, 20));
        assert_eq!(at_threshold[0].kind, AnnotationKind::Positive);

        let just_under = insights(&Figures { savings_rate: Decimal::new(1999, 2), ..figures(1000, 800, 20) });
        assert!(just_under.iter().all(|a| a.kind != AnnotationKind::Positive));

        let rounds_up = insights(&Figures { savings_rate: Decimal::new(19996, 3), ..figures(1000, 800, 20) });
        assert!(rounds_up.iter().all(|a| a.kind != AnnotationKind::Positive));
    }

    #[test]
    fn test_save_ten_percent_bounds() {
        let saves_ten = |list: &[Annotation]| list.iter().any(|a| a.text.contains("10%"));

        assert!(!saves_ten(&suggestions(&figures(1000, 900, 10))));
        assert!(!saves_ten(&suggestions(&figures(100, 250, -150))));
        assert!(saves_ten(&suggestions(&figures(1000, 1000, 0))));

        let just_under = suggestions(&Figures { savings_rate: Decimal::new(999, 2), ..figures(1000, 900, 10) });
        assert!(saves_ten(&just_under));
        assert_eq!(just_under[1].kind, AnnotationKind::Tip);

        let rounds_up = suggestions(&Figures { savings_rate: Decimal::new(9996, 3), ..figures(1000, 900, 10) });
        assert!(saves_ten(&rounds_up));
    }

    #[test]
    fn test_annotation_wire_format() {
        let list = insights(&figures(0, 0, 0));
        let json = serde_json::to_value(&list[0]).unwrap();
        assert_eq!(json["type"], "info");
        assert_eq!(json["id"], 1);
    }
}
