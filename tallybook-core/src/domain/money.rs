//! Decimal helpers shared by the report components

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

/// Wire representation of a monetary or percentage value
pub fn to_f64(value: Decimal) -> f64 {
    value.to_f64().unwrap_or(0.0)
}

/// `numerator / denominator * 100`, or 0 when the denominator is not positive
///
/// Unrounded: threshold rules compare this value, output goes through
/// [`to_f64_2dp`].
pub fn percent_of(numerator: Decimal, denominator: Decimal) -> Decimal {
    if denominator > Decimal::ZERO {
        numerator / denominator * Decimal::ONE_HUNDRED
    } else {
        Decimal::ZERO
    }
}

/// Wire representation rounded to cents / hundredths of a percent
pub fn to_f64_2dp(value: Decimal) -> f64 {
    to_f64(value.round_dp(2))
}

/// `numerator / count`, or 0 when the count is 0
pub fn average(total: Decimal, count: usize) -> Decimal {
    if count == 0 {
        Decimal::ZERO
    } else {
        (total / Decimal::from(count as u64)).round_dp(2)
    }
}

/// Format an amount as `$1,234.56`
pub fn format_currency(amount: Decimal) -> String {
    let rounded = amount.round_dp(2);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() { "-" } else { "" };
    let text = format!("{:.2}", rounded.abs());
    let (whole, cents) = text.split_once('.').unwrap_or((text.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    format!("{}${}.{}", sign, grouped, cents)
}
