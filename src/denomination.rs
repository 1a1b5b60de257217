//! Physical currency denominations and the validated table the engine works from.

use crate::error::{ChangeError, Result};
use log::warn;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::ops::Deref;

/// A fixed-value unit of physical currency with its display labels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Denomination {
    /// Value in minor units. Must be positive.
    pub value: u64,

    /// Label used when exactly one piece is handed back.
    pub singular: String,

    /// Label used for any other count.
    pub plural: String,
}

impl Denomination {
    /// Creates a denomination from its value and labels.
    pub fn new(value: u64, singular: impl Into<String>, plural: impl Into<String>) -> Self {
        Denomination {
            value,
            singular: singular.into(),
            plural: plural.into(),
        }
    }

    /// Picks the label matching `count`.
    pub fn label(&self, count: u64) -> &str {
        if count == 1 {
            &self.singular
        } else {
            &self.plural
        }
    }
}

/// An ordered, immutable denomination table.
///
/// # Invariants
///
/// - Non-empty, every value positive, no duplicate values
/// - Contains a unit (value 1) denomination, so any amount can be paid exactly
///
/// Descending order is expected for minimum-count change but is not enforced;
/// a table out of order is accepted and logged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Denomination>", into = "Vec<Denomination>")]
pub struct DenominationTable(Vec<Denomination>);

impl DenominationTable {
    /// Validates and wraps a denomination list.
    pub fn new(denominations: Vec<Denomination>) -> Result<Self> {
        if denominations.is_empty() {
            return Err(ChangeError::InvalidDenominations(
                "table is empty".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        for denomination in &denominations {
            if denomination.value == 0 {
                return Err(ChangeError::InvalidDenominations(format!(
                    "\"{}\" has a zero value",
                    denomination.singular
                )));
            }
            if !seen.insert(denomination.value) {
                return Err(ChangeError::InvalidDenominations(format!(
                    "duplicate value {}",
                    denomination.value
                )));
            }
        }

        if !seen.contains(&1) {
            return Err(ChangeError::InvalidDenominations(
                "no unit (value 1) denomination".to_string(),
            ));
        }

        if denominations.windows(2).any(|w| w[0].value < w[1].value) {
            warn!("Denomination table is not in descending order; minimum-count change may not be minimal");
        }

        Ok(DenominationTable(denominations))
    }

    /// The standard US dollar table, largest bill first.
    pub fn usd() -> Self {
        DenominationTable(vec![
            Denomination::new(10000, "hundred dollar bill", "hundred dollar bills"),
            Denomination::new(5000, "fifty dollar bill", "fifty dollar bills"),
            Denomination::new(2000, "twenty dollar bill", "twenty dollar bills"),
            Denomination::new(1000, "ten dollar bill", "ten dollar bills"),
            Denomination::new(500, "five dollar bill", "five dollar bills"),
            Denomination::new(100, "dollar", "dollars"),
            Denomination::new(25, "quarter", "quarters"),
            Denomination::new(10, "dime", "dimes"),
            Denomination::new(5, "nickel", "nickels"),
            Denomination::new(1, "penny", "pennies"),
        ])
    }
}

impl Default for DenominationTable {
    fn default() -> Self {
        Self::usd()
    }
}

impl Deref for DenominationTable {
    type Target = [Denomination];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl TryFrom<Vec<Denomination>> for DenominationTable {
    type Error = ChangeError;

    fn try_from(denominations: Vec<Denomination>) -> Result<Self> {
        Self::new(denominations)
    }
}

impl From<DenominationTable> for Vec<Denomination> {
    fn from(table: DenominationTable) -> Self {
        table.0
    }
}
