use rust_decimal::{Decimal, RoundingStrategy};

use crate::constants::{DISPLAY_MAX_FRACTION_DIGITS, THOUSANDS_SEPARATOR};

/// Formats a fee amount the way an en-US locale renders a plain number.
///
/// Thousands are grouped with commas, there is no currency symbol, and at
/// most three fraction digits are kept (midpoints round away from zero).
/// Trailing fraction zeros are dropped, so `1500.50` renders as `1,500.5`.
pub fn format_amount(value: Decimal) -> String {
    let rounded = value
        .round_dp_with_strategy(
            DISPLAY_MAX_FRACTION_DIGITS,
            RoundingStrategy::MidpointAwayFromZero,
        )
        .normalize();

    let digits = rounded.abs().to_string();
    let (integer, fraction) = match digits.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (digits.as_str(), None),
    };

    let mut formatted = String::with_capacity(digits.len() + integer.len() / 3 + 1);
    if rounded.is_sign_negative() && !rounded.is_zero() {
        formatted.push('-');
    }
    formatted.push_str(&group_thousands(integer));
    if let Some(fraction) = fraction {
        formatted.push('.');
        formatted.push_str(fraction);
    }
    formatted
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(THOUSANDS_SEPARATOR);
        }
        grouped.push(ch);
    }
    grouped
}
