//! Minor-unit currency amounts.
//!
//! Amounts are held as an integer count of cents so that change arithmetic
//! never touches floating point.

use crate::error::ParseAmountError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Integer part, then an optional one or two digit fraction. No sign, no separators.
pub(crate) static AMOUNT_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d+)(?:\.(\d{1,2}))?$").expect("amount pattern is valid"));

/// A non-negative amount in minor currency units (cents).
///
/// # Examples
///
/// ```
/// use cash_register::MinorAmount;
///
/// let amount: MinorAmount = "12.3".parse().unwrap();
/// assert_eq!(amount.cents(), 1230);
/// assert_eq!(amount.to_string(), "12.30");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
#[serde(transparent)]
pub struct MinorAmount(u64);

impl MinorAmount {
    /// Minor units per whole currency unit.
    pub const SCALE: u64 = 100;

    /// Zero value.
    pub const ZERO: Self = MinorAmount(0);

    /// Wraps a raw count of minor units.
    pub const fn from_cents(cents: u64) -> Self {
        MinorAmount(cents)
    }

    /// Raw count of minor units.
    pub const fn cents(self) -> u64 {
        self.0
    }

    /// Returns `true` if this amount is zero.
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Returns `None` when `rhs` is larger than `self`.
    pub fn checked_sub(self, rhs: Self) -> Option<Self> {
        self.0.checked_sub(rhs.0).map(MinorAmount)
    }
}

/// Parses a decimal amount such as `"12"`, `"12.3"` or `"12.34"` into cents.
///
/// A single fractional digit counts as tenths. Surrounding whitespace is ignored.
pub fn parse_amount(text: &str) -> Result<MinorAmount, ParseAmountError> {
    let malformed = || ParseAmountError {
        raw: text.to_string(),
    };

    let captures = AMOUNT_PATTERN.captures(text.trim()).ok_or_else(malformed)?;
    let whole: u64 = captures[1].parse().map_err(|_| malformed())?;
    let fraction = match captures.get(2) {
        Some(digits) => format!("{:0<2}", digits.as_str())
            .parse::<u64>()
            .map_err(|_| malformed())?,
        None => 0,
    };

    whole
        .checked_mul(MinorAmount::SCALE)
        .and_then(|cents| cents.checked_add(fraction))
        .map(MinorAmount)
        .ok_or_else(malformed)
}

impl FromStr for MinorAmount {
    type Err = ParseAmountError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        parse_amount(s)
    }
}

impl fmt::Display for MinorAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{:02}",
            self.0 / Self::SCALE,
            self.0 % Self::SCALE
        )
    }
}
