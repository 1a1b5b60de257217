//! Change breakdown engine.
//!
//! Decides how many of each denomination to hand back. Change is computed
//! greedily (fewest pieces) unless the amount is a non-zero multiple of the
//! configured random divisor, in which case denominations are drawn at random
//! until the amount is exhausted.
//!
//! Both modes maintain `sum(value * count) == change` exactly. They terminate
//! because a [`DenominationTable`] always contains a unit denomination.

use crate::denomination::DenominationTable;
use crate::money::MinorAmount;
use rand::Rng;
use serde::Serialize;
use std::collections::BTreeMap;
use std::num::NonZeroU64;

/// Per-denomination counts for one change amount.
///
/// Keys are denomination values in minor units; zero counts are never stored.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeBreakdown {
    pub counts: BTreeMap<u64, u64>,
    pub random_mode: bool,
}

impl ChangeBreakdown {
    /// Count handed back for a denomination value, zero if absent.
    pub fn count(&self, value: u64) -> u64 {
        self.counts.get(&value).copied().unwrap_or(0)
    }

    /// Value-weighted sum of all counts.
    pub fn total(&self) -> MinorAmount {
        MinorAmount::from_cents(self.counts.iter().map(|(value, count)| value * count).sum())
    }

    /// Number of physical pieces handed back.
    pub fn piece_count(&self) -> u64 {
        self.counts.values().sum()
    }

    /// Returns `true` when no change is handed back.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

/// Returns `true` when `change` is a non-zero multiple of `divisor`.
pub fn is_random_case(change: MinorAmount, divisor: NonZeroU64) -> bool {
    !change.is_zero() && change.cents() % divisor.get() == 0
}

/// Largest-denomination-first change, in table order.
pub fn minimum_change(change: MinorAmount, table: &DenominationTable) -> BTreeMap<u64, u64> {
    let mut remaining = change.cents();
    let mut counts = BTreeMap::new();

    for denomination in table.iter() {
        if remaining == 0 {
            break;
        }

        let quantity = remaining / denomination.value;
        if quantity > 0 {
            counts.insert(denomination.value, quantity);
            remaining -= quantity * denomination.value;
        }
    }

    debug_assert_eq!(remaining, 0, "unit denomination guarantees exact change");
    counts
}

/// Draws one eligible denomination at a time, uniformly, until nothing remains.
pub fn random_change<R: Rng>(
    change: MinorAmount,
    table: &DenominationTable,
    rng: &mut R,
) -> BTreeMap<u64, u64> {
    let mut remaining = change.cents();
    let mut counts = BTreeMap::new();
    let mut eligible = Vec::with_capacity(table.len());

    while remaining > 0 {
        eligible.clear();
        eligible.extend(
            table
                .iter()
                .map(|d| d.value)
                .filter(|&value| value <= remaining),
        );

        // The unit denomination is always eligible while remaining > 0.
        if eligible.is_empty() {
            break;
        }

        let selected = eligible[rng.random_range(0..eligible.len())];
        *counts.entry(selected).or_insert(0) += 1;
        remaining -= selected;
    }

    counts
}

/// Computes the breakdown for `change`, choosing the mode from `divisor`.
pub fn compute_breakdown<R: Rng>(
    change: MinorAmount,
    table: &DenominationTable,
    divisor: NonZeroU64,
    rng: &mut R,
) -> ChangeBreakdown {
    let random_mode = is_random_case(change, divisor);
    let counts = if random_mode {
        random_change(change, table, rng)
    } else {
        minimum_change(change, table)
    };

    ChangeBreakdown {
        counts,
        random_mode,
    }
}
