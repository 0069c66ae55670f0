//! Shipment input and savings output
//!
//! `ShipmentRecord` mirrors one row of the upstream shipment export. The
//! engine never mutates a record; it derives a `SavingsResult` per call.
//! Field names bind the upstream export's exact case-sensitive column
//! headers, and every value arrives as a string; numeric interpretation
//! (weight, rates) happens inside the engine with its own sanitization.

use serde::{Deserialize, Serialize};

/// One shipment row as delivered by the surrounding application.
///
/// Read-only input. Fields other than `CARRIER` default to empty when
/// the upstream export omits the column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShipmentRecord {
    /// Free-text carrier name ("FedEx Ground", "usps", ...)
    #[serde(rename = "CARRIER")]
    pub carrier: String,

    /// Origin ZIP code (5 digits expected, not enforced)
    #[serde(rename = "ORIGIN_ZIP", default)]
    pub origin_zip: String,

    /// Destination ZIP code
    #[serde(rename = "DESTINATION_ZIP", default)]
    pub destination_zip: String,

    /// Declared package weight in grams
    #[serde(rename = "PKG_WEIGHT_IN_GRAMS", default)]
    pub weight_grams: String,

    /// Rate actually paid, in the shopper's currency (preferred)
    #[serde(rename = "TOTAL_LABEL_RATE_SHOPPER_CURRENCY", default)]
    pub rate_shopper_currency: String,

    /// Rate actually paid, in USD (fallback)
    #[serde(rename = "TOTAL_LABEL_RATE_USD", default)]
    pub rate_usd: String,
}

/// Per-shipment savings verdict.
///
/// Produced by [`calculate_savings`](crate::calculate_savings) once a
/// zone is known. "Not yet computed" is represented by absence: callers
/// hold `Option<SavingsResult>` per record and must distinguish `None`
/// (never computed) from a result with `is_loop == false` (computed, not
/// favorable).
///
/// A shipment whose carrier table failed to load, or whose carrier name
/// is unrecognized, still receives a result: the negotiated rate
/// resolves to 0, so any positive paid rate reads as savings. Such a
/// verdict is indistinguishable from a genuine full saving; a known
/// limitation of the zero-rate policy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavingsResult {
    /// Zone token the lookup was performed against
    pub zone: String,

    /// Negotiated rate resolved from the carrier's table (0 when none)
    pub negotiated_rate: f64,

    /// `current_rate - negotiated_rate`
    pub savings: f64,

    /// True when `savings > 0` strictly; a tie is not favorable
    pub is_loop: bool,
}
