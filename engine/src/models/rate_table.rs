//! Rate table model and lookup
//!
//! A `RateTable` is the normalized, in-memory form of one carrier's
//! negotiated rate sheet: an ascending sequence of weight brackets, each
//! holding per-zone rates. Tables are built once at engine
//! initialization and never mutated afterward, so concurrent readers
//! share them without locking.
//!
//! Lookup is total: every path that cannot resolve a definite
//! answer resolves to a safe default (zero rate, heaviest bracket)
//! rather than an error, so a single bad record never aborts a batch.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use super::carrier::Carrier;
use super::zone::Zone;

/// One weight-indexed row of a carrier's rate sheet.
///
/// `max_weight_lbs` is the inclusive upper bound of the bracket; a
/// shipment weighing exactly the bound selects this bracket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightBracket {
    /// Inclusive upper weight bound in pounds
    pub max_weight_lbs: f64,

    /// Negotiated rate per zone, in currency units
    ///
    /// A missing zone means the source sheet had no column for it; a
    /// `0.0` entry means the source cell was blank or unparsable. The
    /// two are distinguishable here but both resolve to a zero rate at
    /// lookup time (except for the USPS zone-9 fallback, which only
    /// triggers on a missing entry).
    pub zone_rates: BTreeMap<Zone, f64>,
}

impl WeightBracket {
    pub fn new(max_weight_lbs: f64, zone_rates: BTreeMap<Zone, f64>) -> Self {
        Self {
            max_weight_lbs,
            zone_rates,
        }
    }
}

/// Normalized rate table for a single carrier.
///
/// # Invariants
///
/// 1. `brackets` is non-empty
/// 2. `brackets` is strictly ascending in `max_weight_lbs`
///
/// Both are established by [`RateTable::new`], which sorts its input and
/// drops exact duplicate weights (keeping the first occurrence, a silent
/// structural decision in the same spirit as malformed-row skips during
/// loading).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateTable {
    carrier: Carrier,
    brackets: Vec<WeightBracket>,
}

impl RateTable {
    /// Build a table from parsed brackets.
    ///
    /// Sorts by weight and drops exact duplicates.
    ///
    /// # Panics
    /// Panics if `brackets` is empty; a loaded table is never empty
    /// (the loader reports `NoRateRows` instead of constructing one).
    pub fn new(carrier: Carrier, mut brackets: Vec<WeightBracket>) -> Self {
        assert!(!brackets.is_empty(), "rate table must have at least one bracket");

        brackets.sort_by(|a, b| {
            a.max_weight_lbs
                .partial_cmp(&b.max_weight_lbs)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        brackets.dedup_by(|next, kept| next.max_weight_lbs == kept.max_weight_lbs);

        Self { carrier, brackets }
    }

    /// Carrier this table belongs to.
    pub fn carrier(&self) -> Carrier {
        self.carrier
    }

    /// Brackets in ascending weight order.
    pub fn brackets(&self) -> &[WeightBracket] {
        &self.brackets
    }

    /// Number of weight brackets.
    pub fn len(&self) -> usize {
        self.brackets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.brackets.is_empty()
    }

    /// Look up the negotiated rate for a weight and zone token.
    ///
    /// Total: never fails. A lookup that cannot resolve returns `0.0`,
    /// which callers treat as "no negotiated rate available".
    ///
    /// # Resolution policy
    ///
    /// 1. **Bracket**: the smallest `max_weight_lbs >= weight_lbs`
    ///    (closest-above match). A shipment heavier than every bracket
    ///    falls back to the single heaviest bracket; best effort, never
    ///    refuse.
    /// 2. **Zone**: direct lookup of the parsed token. USPS only: if
    ///    zone 9 has no entry in the selected bracket, the bracket's
    ///    zone 8 rate is used instead (USPS Ground-tier sheets commonly
    ///    stop at zone 8). No other carrier/zone pair falls back.
    /// 3. An unparsable zone token, or a zone with no entry after
    ///    fallback, resolves to `0.0`.
    ///
    /// # Example
    /// ```
    /// use rate_comparison_core_rs::{load_rate_table, Carrier};
    ///
    /// let rows: Vec<Vec<String>> = vec![
    ///     vec!["".into()],
    ///     vec!["".into(), "2".into(), "5".into()],
    ///     vec!["1".into(), "$4.10".into(), "$5.20".into()],
    ///     vec!["2".into(), "$4.90".into(), "$6.05".into()],
    /// ];
    /// let table = load_rate_table(Carrier::FedEx, &rows).unwrap();
    ///
    /// assert_eq!(table.rate_for(1.5, "2"), 4.90);
    /// assert_eq!(table.rate_for(50.0, "5"), 6.05); // heaviest bracket
    /// assert_eq!(table.rate_for(1.0, "7"), 0.0);   // zone not tabulated
    /// ```
    pub fn rate_for(&self, weight_lbs: f64, zone_token: &str) -> f64 {
        let Some(zone) = Zone::parse_token(zone_token) else {
            tracing::debug!(
                carrier = %self.carrier,
                token = zone_token,
                "unparsable zone token, resolving to zero rate"
            );
            return 0.0;
        };

        let bracket = self
            .brackets
            .iter()
            .find(|b| b.max_weight_lbs >= weight_lbs)
            .or_else(|| self.brackets.last());

        let Some(bracket) = bracket else {
            return 0.0;
        };

        let rate = match bracket.zone_rates.get(&zone) {
            Some(rate) => Some(*rate),
            None if self.carrier == Carrier::Usps && zone == Zone::Nine => {
                // USPS Ground-tier sheets often stop at zone 8
                bracket.zone_rates.get(&Zone::Eight).copied()
            }
            None => None,
        };

        rate.unwrap_or(0.0)
    }
}

/// The engine's full set of loaded rate tables, keyed by carrier.
///
/// Built once during the load phase and immutable afterward. Carriers
/// whose table failed to load are simply absent; lookups against them
/// return `0.0` so a partial load still serves the whole batch.
#[derive(Debug, Clone, Default)]
pub struct RateTableSet {
    tables: HashMap<Carrier, RateTable>,
}

impl RateTableSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a loaded table. Load phase only; the set is shared
    /// immutably once lookups begin.
    pub fn insert(&mut self, table: RateTable) {
        self.tables.insert(table.carrier(), table);
    }

    /// Table for a carrier, if it loaded.
    pub fn get(&self, carrier: Carrier) -> Option<&RateTable> {
        self.tables.get(&carrier)
    }

    /// Carriers with a loaded table.
    pub fn carriers(&self) -> impl Iterator<Item = Carrier> + '_ {
        self.tables.keys().copied()
    }

    /// Look up a negotiated rate, returning `0.0` when the carrier has
    /// no loaded table.
    pub fn rate_for(&self, carrier: Carrier, weight_lbs: f64, zone_token: &str) -> f64 {
        match self.tables.get(&carrier) {
            Some(table) => table.rate_for(weight_lbs, zone_token),
            None => 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bracket(max_weight_lbs: f64, rates: &[(Zone, f64)]) -> WeightBracket {
        WeightBracket::new(max_weight_lbs, rates.iter().copied().collect())
    }

    #[test]
    fn test_brackets_sorted_and_deduped() {
        let table = RateTable::new(
            Carrier::Usps,
            vec![
                bracket(5.0, &[(Zone::Two, 9.0)]),
                bracket(1.0, &[(Zone::Two, 5.0)]),
                bracket(5.0, &[(Zone::Two, 99.0)]), // duplicate weight, dropped
                bracket(3.0, &[(Zone::Two, 7.0)]),
            ],
        );

        let weights: Vec<f64> = table.brackets().iter().map(|b| b.max_weight_lbs).collect();
        assert_eq!(weights, vec![1.0, 3.0, 5.0]);
        assert_eq!(table.rate_for(4.0, "2"), 9.0); // first occurrence kept
    }

    #[test]
    fn test_closest_above_bracket() {
        let table = RateTable::new(
            Carrier::FedEx,
            vec![
                bracket(1.0, &[(Zone::Two, 4.0)]),
                bracket(2.0, &[(Zone::Two, 5.0)]),
                bracket(10.0, &[(Zone::Two, 11.0)]),
            ],
        );

        assert_eq!(table.rate_for(0.5, "2"), 4.0);
        assert_eq!(table.rate_for(1.0, "2"), 4.0); // exact bound selects bracket
        assert_eq!(table.rate_for(1.2, "2"), 5.0);
        assert_eq!(table.rate_for(9.9, "2"), 11.0);
    }

    #[test]
    fn test_overweight_falls_to_heaviest_bracket() {
        let table = RateTable::new(
            Carrier::Ups,
            vec![
                bracket(1.0, &[(Zone::Three, 4.0)]),
                bracket(5.0, &[(Zone::Three, 8.0)]),
            ],
        );

        assert_eq!(table.rate_for(150.0, "3"), 8.0);
    }

    #[test]
    fn test_usps_zone_nine_falls_back_to_eight() {
        let table = RateTable::new(
            Carrier::Usps,
            vec![bracket(2.0, &[(Zone::Eight, 12.5)])],
        );

        assert_eq!(table.rate_for(1.0, "9"), 12.5);
    }

    #[test]
    fn test_zone_nine_fallback_is_usps_only() {
        let table = RateTable::new(
            Carrier::FedEx,
            vec![bracket(2.0, &[(Zone::Eight, 12.5)])],
        );

        assert_eq!(table.rate_for(1.0, "9"), 0.0);
    }

    #[test]
    fn test_recorded_zero_does_not_trigger_fallback() {
        // Blank source cell loads as 0.0, which is a recorded rate
        let table = RateTable::new(
            Carrier::Usps,
            vec![bracket(2.0, &[(Zone::Eight, 12.5), (Zone::Nine, 0.0)])],
        );

        assert_eq!(table.rate_for(1.0, "9"), 0.0);
    }

    #[test]
    fn test_unparsable_zone_token_is_zero() {
        let table = RateTable::new(Carrier::FedEx, vec![bracket(1.0, &[(Zone::Two, 4.0)])]);

        assert_eq!(table.rate_for(0.5, "TWO_DAYS"), 0.0);
        assert_eq!(table.rate_for(0.5, ""), 0.0);
    }

    #[test]
    fn test_missing_carrier_table_is_zero() {
        let mut set = RateTableSet::new();
        set.insert(RateTable::new(
            Carrier::Usps,
            vec![bracket(1.0, &[(Zone::Two, 4.0)])],
        ));

        assert_eq!(set.rate_for(Carrier::Usps, 0.5, "2"), 4.0);
        assert_eq!(set.rate_for(Carrier::FedEx, 0.5, "2"), 0.0);
    }
}
