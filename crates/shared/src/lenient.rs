//! Lenient numeric parsing for tolerant data entry.
//!
//! Trial-balance cells hold whatever the user typed. Parsing never fails:
//! unreadable input is repaired to zero and flagged, so callers can surface
//! data-quality warnings without rejecting the row.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Result of leniently parsing a raw amount cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LenientAmount {
    /// The parsed value, zero when the input was unreadable.
    pub value: Decimal,
    /// True when the input failed to parse and was repaired to zero.
    pub defaulted: bool,
}

impl LenientAmount {
    /// Parses raw cell text into a decimal amount.
    ///
    /// A blank cell is an intentional zero and is not flagged. Thousands
    /// separators are accepted. Anything else unreadable yields zero with
    /// the `defaulted` flag set.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Self {
                value: Decimal::ZERO,
                defaulted: false,
            };
        }

        match trimmed.replace(',', "").parse::<Decimal>() {
            Ok(value) => Self {
                value,
                defaulted: false,
            },
            Err(_) => Self {
                value: Decimal::ZERO,
                defaulted: true,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    #[rstest]
    #[case("1000", dec!(1000))]
    #[case("1,234.56", dec!(1234.56))]
    #[case(" 42.5 ", dec!(42.5))]
    #[case("-10", dec!(-10))]
    #[case("0", dec!(0))]
    fn parses_numeric_input(#[case] raw: &str, #[case] expected: Decimal) {
        let parsed = LenientAmount::parse(raw);
        assert_eq!(parsed.value, expected);
        assert!(!parsed.defaulted);
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    fn blank_is_intentional_zero(#[case] raw: &str) {
        let parsed = LenientAmount::parse(raw);
        assert_eq!(parsed.value, Decimal::ZERO);
        assert!(!parsed.defaulted);
    }

    #[rstest]
    #[case("abc")]
    #[case("12.34.56")]
    #[case("ten")]
    #[case("$100")]
    fn unreadable_input_is_repaired_and_flagged(#[case] raw: &str) {
        let parsed = LenientAmount::parse(raw);
        assert_eq!(parsed.value, Decimal::ZERO);
        assert!(parsed.defaulted);
    }
}
