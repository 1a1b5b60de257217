//! Register configuration.
//!
//! Loaded once from JSON and passed by reference into every call. Keys are
//! camelCase; every key is optional:
//!
//! ```json
//! {
//!   "randomDivisor": 3,
//!   "denominations": [{ "value": 1, "singular": "penny", "plural": "pennies" }],
//!   "exchangeRate": "1.08"
//! }
//! ```

use crate::denomination::DenominationTable;
use crate::error::Result;
use crate::processor::{ProcessOptions, DEFAULT_RANDOM_DIVISOR};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::fs;
use std::num::NonZeroU64;
use std::path::Path;

fn default_random_divisor() -> NonZeroU64 {
    DEFAULT_RANDOM_DIVISOR
}

/// Denomination table, random divisor and optional exchange rate for a register.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct RegisterConfig {
    /// Non-zero change amounts divisible by this are handed back at random.
    #[serde(default = "default_random_divisor")]
    pub random_divisor: NonZeroU64,

    /// Validated on load; defaults to US dollars.
    #[serde(default)]
    pub denominations: DenominationTable,

    /// Multiplier from the input currency to the base currency, if the input is foreign.
    #[serde(default)]
    pub exchange_rate: Option<Decimal>,
}

impl RegisterConfig {
    /// Parses a configuration from JSON text, validating the table and divisor.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a JSON configuration file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    /// Processing options derived from this configuration.
    pub fn options(&self) -> ProcessOptions {
        ProcessOptions {
            random_divisor: self.random_divisor,
        }
    }
}

impl Default for RegisterConfig {
    fn default() -> Self {
        RegisterConfig {
            random_divisor: DEFAULT_RANDOM_DIVISOR,
            denominations: DenominationTable::usd(),
            exchange_rate: None,
        }
    }
}
