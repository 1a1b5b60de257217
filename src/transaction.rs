//! Owed/paid input lines.

use crate::error::{ChangeError, Result};
use crate::money::{parse_amount, MinorAmount};

/// One `owed,paid` record.
///
/// # Invariants
///
/// - `paid >= owed`, so [`TransactionLine::change`] never underflows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransactionLine {
    line_number: usize,
    owed: MinorAmount,
    paid: MinorAmount,
}

impl TransactionLine {
    /// Creates a line, rejecting a payment smaller than the amount owed.
    pub fn new(line_number: usize, owed: MinorAmount, paid: MinorAmount) -> Result<Self> {
        if paid < owed {
            return Err(ChangeError::InsufficientPayment { line: line_number });
        }

        Ok(TransactionLine {
            line_number,
            owed,
            paid,
        })
    }

    /// 1-based position in the input.
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    /// Amount owed.
    pub fn owed(&self) -> MinorAmount {
        self.owed
    }

    /// Amount paid.
    pub fn paid(&self) -> MinorAmount {
        self.paid
    }

    /// Change due: `paid - owed`.
    pub fn change(&self) -> MinorAmount {
        MinorAmount::from_cents(self.paid.cents() - self.owed.cents())
    }
}

/// Splits a non-blank line into its two raw fields.
///
/// Returns `None` for a blank line.
pub(crate) fn split_fields(raw: &str, line_number: usize) -> Result<Option<(&str, &str)>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    let mut fields = trimmed.split(',');
    match (fields.next(), fields.next(), fields.next()) {
        (Some(owed), Some(paid), None) if !owed.trim().is_empty() && !paid.trim().is_empty() => {
            Ok(Some((owed, paid)))
        }
        _ => Err(ChangeError::MalformedLine { line: line_number }),
    }
}

/// Parses one input line.
///
/// Returns `Ok(None)` for a blank line, which is not an error.
pub fn parse_line(raw: &str, line_number: usize) -> Result<Option<TransactionLine>> {
    let (owed_raw, paid_raw) = match split_fields(raw, line_number)? {
        Some(fields) => fields,
        None => return Ok(None),
    };

    let owed = parse_amount(owed_raw).map_err(|e| e.at_line(line_number))?;
    let paid = parse_amount(paid_raw).map_err(|e| e.at_line(line_number))?;

    TransactionLine::new(line_number, owed, paid).map(Some)
}
