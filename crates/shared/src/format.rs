//! Display formatting for report amounts.
//!
//! For consistency, uses the en locale ('.' as decimal mark, ',' as
//! thousands separator) regardless of the user's locale.

use num_format::{Locale, ToFormattedString as _};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

/// Formats an amount with two decimal places and thousands separators.
#[must_use]
pub fn amount(value: Decimal) -> String {
    let rounded = value.round_dp(2);
    let sign = if rounded.is_sign_negative() { "-" } else { "" };
    let magnitude = rounded.abs();

    let integer_part = magnitude
        .trunc()
        .to_i128()
        .unwrap_or(0)
        .to_formatted_string(&Locale::en);
    // Already rounded to 2dp, so the scaled fraction is an exact integer.
    let fraction = (magnitude.fract() * Decimal::ONE_HUNDRED)
        .to_i128()
        .unwrap_or(0);

    format!("{sign}{integer_part}.{fraction:02}")
}

/// Formats a fraction as a percentage with two decimal places.
///
/// `0.1234` renders as `"12.34%"`.
#[must_use]
pub fn percent(fraction: Decimal) -> String {
    format!("{}%", amount(fraction * Decimal::ONE_HUNDRED))
}
