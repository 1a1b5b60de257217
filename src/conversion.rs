//! Currency normalisation ahead of change computation.
//!
//! Foreign-currency input is converted to the base currency with a fixed
//! exchange rate. The output uses the same `owed,paid` line format with
//! exactly two decimal places, so it can be fed straight to the processor.

use crate::error::{ChangeError, ParseAmountError, Result};
use crate::money::AMOUNT_PATTERN;
use crate::transaction::split_fields;
use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;

/// Converts one amount by `rate`, rounding half away from zero to cents.
///
/// # Examples
///
/// ```
/// use cash_register::convert_amount;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let rate = Decimal::from_str("1.1").unwrap();
/// assert_eq!(convert_amount("2.50", rate).unwrap(), "2.75");
/// ```
pub fn convert_amount(text: &str, rate: Decimal) -> std::result::Result<String, ParseAmountError> {
    let malformed = || ParseAmountError {
        raw: text.to_string(),
    };

    let trimmed = text.trim();
    if !AMOUNT_PATTERN.is_match(trimmed) {
        return Err(malformed());
    }

    let amount = Decimal::from_str(trimmed).map_err(|_| malformed())?;
    let converted = amount
        .checked_mul(rate)
        .ok_or_else(malformed)?
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);

    Ok(format!("{:.2}", converted))
}

/// Converts every `owed,paid` line of `input` by `rate`.
///
/// Blank lines are kept as empty lines. Field and amount checks match the
/// processor's, with the same line-numbered errors.
pub fn convert_input(input: &str, rate: Decimal) -> Result<String> {
    if rate <= Decimal::ZERO {
        return Err(ChangeError::InvalidExchangeRate(rate.to_string()));
    }

    let mut converted = Vec::new();
    for (idx, raw) in input.split('\n').enumerate() {
        let line_number = idx + 1;
        let raw = raw.strip_suffix('\r').unwrap_or(raw);

        match split_fields(raw, line_number)? {
            Some((owed, paid)) => {
                let owed = convert_amount(owed, rate).map_err(|e| e.at_line(line_number))?;
                let paid = convert_amount(paid, rate).map_err(|e| e.at_line(line_number))?;
                converted.push(format!("{},{}", owed, paid));
            }
            None => converted.push(String::new()),
        }
    }

    Ok(converted.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rate(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_unit_rate_normalises_scale() {
        assert_eq!(convert_amount("3", rate("1")).unwrap(), "3.00");
        assert_eq!(convert_amount("2.1", rate("1")).unwrap(), "2.10");
    }

    #[test]
    fn test_rounds_half_away_from_zero() {
        assert_eq!(convert_amount("1.00", rate("1.005")).unwrap(), "1.01");
        assert_eq!(convert_amount("1.00", rate("1.0049")).unwrap(), "1.00");
    }

    #[test]
    fn test_rejects_malformed_amount() {
        let err = convert_amount("1.234", rate("2")).unwrap_err();
        assert_eq!(err.raw, "1.234");
        assert!(convert_amount("-1", rate("2")).is_err());
    }

    #[test]
    fn test_convert_input_preserves_lines() {
        let converted = convert_input("2.00,3.00\r\n\n1.50,2", rate("0.5")).unwrap();
        assert_eq!(converted, "1.00,1.50\n\n0.75,1.00");
    }

    #[test]
    fn test_convert_input_rejects_non_positive_rate() {
        assert!(matches!(
            convert_input("1,2", Decimal::ZERO),
            Err(ChangeError::InvalidExchangeRate(_))
        ));
        assert!(matches!(
            convert_input("1,2", rate("-1.2")),
            Err(ChangeError::InvalidExchangeRate(_))
        ));
    }

    #[test]
    fn test_convert_input_reports_line_numbers() {
        let err = convert_input("1,2\n1,2,3", rate("2")).unwrap_err();
        assert!(matches!(err, ChangeError::MalformedLine { line: 2 }));

        let err = convert_input("1,2\n\nx,2", rate("2")).unwrap_err();
        assert_eq!(err.to_string(), "Line 3: invalid amount \"x\"");
    }
}
