use rust_decimal::prelude::*;

use crate::config::CurrencyFormat;
use crate::types::{FormattedLoanResult, LoanResult, Money};

const CENTS_DP: u32 = 2;

// ---------------------------------------------------------------------------
// Currency output
// ---------------------------------------------------------------------------

/// Round a raw figure to cents, half away from zero, on its exact binary
/// value. Returns `None` for non-finite values and magnitudes beyond
/// `Decimal::MAX`.
pub fn round_to_cents(value: Money) -> Option<Decimal> {
    let exact = Decimal::from_f64_retain(value)?;
    let rounded = exact.round_dp_with_strategy(CENTS_DP, RoundingStrategy::MidpointAwayFromZero);
    // -0.004 rounds to a signed zero; display it unsigned.
    if rounded.is_zero() {
        Some(Decimal::ZERO)
    } else {
        Some(rounded)
    }
}

/// Render a figure as `RM 1,234.56`: symbol, one space, grouped integer
/// digits, exactly two fraction digits.
pub fn format_currency(value: Money, fmt: &CurrencyFormat) -> String {
    if value.is_nan() {
        return format!("{} NaN", fmt.symbol);
    }
    if value.is_infinite() {
        let sign = if value < 0.0 { "-" } else { "" };
        return format!("{} {}∞", fmt.symbol, sign);
    }

    let (negative, plain) = match round_to_cents(value) {
        Some(cents) => {
            let mut abs = cents.abs();
            abs.rescale(CENTS_DP);
            (cents.is_sign_negative(), abs.to_string())
        }
        // Finite but too large for Decimal; f64 formatting is exact enough.
        None => (value < 0.0, format!("{:.2}", value.abs())),
    };

    let (int_part, frac_part) = plain.split_once('.').unwrap_or((plain.as_str(), "00"));
    let sign = if negative { "-" } else { "" };

    format!(
        "{} {}{}{}{}",
        fmt.symbol,
        sign,
        group_digits(int_part, &fmt.grouping_separator),
        fmt.decimal_separator,
        frac_part
    )
}

/// Format all three figures of a calculation.
pub fn format_result(result: &LoanResult, fmt: &CurrencyFormat) -> FormattedLoanResult {
    FormattedLoanResult {
        total_interest: format_currency(result.total_interest, fmt),
        total_repayment: format_currency(result.total_repayment, fmt),
        monthly_payment: format_currency(result.monthly_payment, fmt),
    }
}

// ---------------------------------------------------------------------------
// Amount field editing
// ---------------------------------------------------------------------------

/// Insert `separator` between groups of three, counting from the right.
/// `digits` is expected to hold ASCII digits only.
pub fn group_digits(digits: &str, separator: &str) -> String {
    let len = digits.chars().count();
    let mut out = String::with_capacity(len + separator.len() * (len / 3));

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push_str(separator);
        }
        out.push(c);
    }

    out
}

/// Reformat the raw amount text after a keystroke: drop every non-digit and
/// regroup, so `"400000"` and `"4,0000,0"` both become `"400,000"`.
pub fn format_amount_input(raw: &str, fmt: &CurrencyFormat) -> String {
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return String::new();
    }
    group_digits(&digits, &fmt.grouping_separator)
}

/// Strip grouping separators so the amount can be parsed.
pub fn unformat_amount_input(display: &str, fmt: &CurrencyFormat) -> String {
    if fmt.grouping_separator.is_empty() {
        return display.to_string();
    }
    display.replace(fmt.grouping_separator.as_str(), "")
}
