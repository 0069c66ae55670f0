//! Savings calculation
//!
//! Combines a shipment's declared weight and currently-paid rate with a
//! negotiated rate looked up from the carrier's table, producing the
//! per-shipment verdict. Stateless and total: every shipment gets a
//! result, even when the carrier is unrecognized or its table failed to
//! load (those resolve to a zero negotiated rate).

use crate::loader::clean_rate;
use crate::models::{Carrier, RateTableSet, SavingsResult, ShipmentRecord};

/// Grams per pound. Exact conversion constant; weight conversion must
/// match bit-for-bit across implementations for test determinism.
pub const GRAMS_PER_POUND: f64 = 453.592;

/// Compute the savings verdict for one shipment against a known zone.
///
/// - Weight: `PKG_WEIGHT_IN_GRAMS / 453.592` pounds; an unparsable
///   weight behaves as zero grams (the lightest bracket answers).
/// - Current rate: the shopper-currency field when it parses, else the
///   USD field, else zero. Both fields pass through the same currency
///   sanitizer as rate-table cells, so `"$9.50"` is `9.50`.
/// - Negotiated rate: substring carrier dispatch into the table set.
///   Unlike zone estimation, an unrecognized carrier does **not**
///   default to USPS; it yields a zero negotiated rate, since charging
///   another carrier's table against it would be meaningless.
/// - `savings = current - negotiated`; favorable (`is_loop`) only when
///   strictly positive. A tie is not favorable.
///
/// # Example
/// ```
/// use rate_comparison_core_rs::{calculate_savings, RateTableSet, ShipmentRecord};
///
/// let shipment = ShipmentRecord {
///     carrier: "DHL".to_string(),
///     origin_zip: "10001".to_string(),
///     destination_zip: "94105".to_string(),
///     weight_grams: "907.18".to_string(),
///     rate_shopper_currency: "$9.50".to_string(),
///     rate_usd: String::new(),
/// };
///
/// // Unrecognized carrier: negotiated rate 0, verdict unfavorable
/// let result = calculate_savings(&RateTableSet::new(), &shipment, "4");
/// assert_eq!(result.negotiated_rate, 0.0);
/// assert_eq!(result.savings, 9.50);
/// assert!(result.is_loop);
/// ```
pub fn calculate_savings(
    tables: &RateTableSet,
    shipment: &ShipmentRecord,
    zone_token: &str,
) -> SavingsResult {
    let weight_lbs = parse_number(&shipment.weight_grams).unwrap_or(0.0) / GRAMS_PER_POUND;

    let current_rate = parse_number(&shipment.rate_shopper_currency)
        .or_else(|| parse_number(&shipment.rate_usd))
        .unwrap_or(0.0);

    let negotiated_rate = match Carrier::match_name(&shipment.carrier) {
        Some(carrier) => tables.rate_for(carrier, weight_lbs, zone_token),
        None => 0.0,
    };

    let savings = current_rate - negotiated_rate;

    SavingsResult {
        zone: zone_token.to_string(),
        negotiated_rate,
        savings,
        is_loop: savings > 0.0,
    }
}

/// Sanitize-and-parse a numeric field; `None` when absent or unparsable.
fn parse_number(raw: &str) -> Option<f64> {
    if raw.trim().is_empty() {
        return None;
    }
    clean_rate(raw).parse::<f64>().ok()
}
