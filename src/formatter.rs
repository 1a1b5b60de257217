//! Human-readable rendering of a change breakdown.

use crate::breakdown::ChangeBreakdown;
use crate::denomination::DenominationTable;

/// Rendered text when no change is due.
pub const NO_CHANGE: &str = "no change";

/// Renders `breakdown` as `"<count> <label>"` pieces in table order, comma separated.
///
/// # Examples
///
/// ```
/// use cash_register::{format_breakdown, minimum_change, ChangeBreakdown, DenominationTable, MinorAmount};
///
/// let table = DenominationTable::usd();
/// let breakdown = ChangeBreakdown {
///     counts: minimum_change(MinorAmount::from_cents(88), &table),
///     random_mode: false,
/// };
/// assert_eq!(format_breakdown(&breakdown, &table), "3 quarters,1 dime,3 pennies");
/// ```
pub fn format_breakdown(breakdown: &ChangeBreakdown, table: &DenominationTable) -> String {
    let pieces: Vec<String> = table
        .iter()
        .filter_map(|denomination| {
            let count = breakdown.count(denomination.value);
            (count > 0).then(|| format!("{} {}", count, denomination.label(count)))
        })
        .collect();

    if pieces.is_empty() {
        NO_CHANGE.to_string()
    } else {
        pieces.join(",")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn breakdown(counts: &[(u64, u64)]) -> ChangeBreakdown {
        ChangeBreakdown {
            counts: counts.iter().copied().collect(),
            random_mode: false,
        }
    }

    #[test]
    fn test_empty_breakdown_is_no_change() {
        let table = DenominationTable::usd();
        assert_eq!(format_breakdown(&ChangeBreakdown::default(), &table), "no change");
    }

    #[test]
    fn test_zero_counts_are_skipped() {
        let table = DenominationTable::usd();
        let zeroes = ChangeBreakdown {
            counts: BTreeMap::from([(25, 0), (1, 0)]),
            random_mode: false,
        };
        assert_eq!(format_breakdown(&zeroes, &table), "no change");
    }

    #[test]
    fn test_singular_and_plural_labels() {
        let table = DenominationTable::usd();
        assert_eq!(
            format_breakdown(&breakdown(&[(100, 1), (1, 2)]), &table),
            "1 dollar,2 pennies"
        );
        assert_eq!(
            format_breakdown(&breakdown(&[(10000, 2), (5, 1)]), &table),
            "2 hundred dollar bills,1 nickel"
        );
    }

    #[test]
    fn test_follows_table_order_not_key_order() {
        let table = DenominationTable::usd();
        let text = format_breakdown(&breakdown(&[(1, 3), (10, 1), (25, 3)]), &table);
        assert_eq!(text, "3 quarters,1 dime,3 pennies");
    }

    #[test]
    fn test_ignores_values_missing_from_table() {
        let table = DenominationTable::usd();
        assert_eq!(format_breakdown(&breakdown(&[(7, 1), (1, 1)]), &table), "1 penny");
    }
}
