//! Rate comparison engine
//!
//! The engine ties the components together behind the three call
//! surfaces the surrounding application uses:
//!
//! 1. rate-table loading: once, at construction, per carrier
//! 2. zone estimation: when no external zone authority is configured,
//!    or after one fails
//! 3. savings calculation: per shipment, once a zone is known
//!
//! # Partial loading
//!
//! Carrier tables load independently. A malformed sheet fails that one
//! carrier, recorded in the [`LoadReport`] and logged, while the
//! engine keeps serving the carriers that did load. Lookups against a
//! failed carrier return a zero negotiated rate.
//!
//! # Concurrency
//!
//! Construction is single-threaded and happens once; afterward the
//! engine is immutable (`&self` everywhere, no interior mutability), so
//! a batch caller may fan shipments out across threads against a shared
//! reference with no locking.
//!
//! # Example
//!
//! ```
//! use rate_comparison_core_rs::engine::{CarrierTableConfig, EngineConfig, RateEngine};
//! use rate_comparison_core_rs::{Carrier, ShipmentRecord};
//!
//! let config = EngineConfig {
//!     carriers: vec![CarrierTableConfig {
//!         carrier: Carrier::FedEx,
//!         rows: vec![
//!             vec!["FedEx negotiated rates".into()],
//!             vec!["".into(), "2".into(), "5".into()],
//!             vec!["1".into(), "$4.10".into(), "$5.20".into()],
//!             vec!["2".into(), "$4.90".into(), "$6.05".into()],
//!         ],
//!     }],
//! };
//!
//! let engine = RateEngine::new(config);
//! assert!(engine.load_report().failed().is_empty());
//!
//! let shipment = ShipmentRecord {
//!     carrier: "FedEx Ground".into(),
//!     origin_zip: "10001".into(),
//!     destination_zip: "10002".into(),
//!     weight_grams: "453.592".into(),
//!     rate_shopper_currency: "$7.50".into(),
//!     rate_usd: String::new(),
//! };
//!
//! let zone = engine.estimate_zone(&shipment.carrier, &shipment.origin_zip, &shipment.destination_zip);
//! let result = engine.calculate_savings(&shipment, zone.as_token());
//! assert_eq!(result.negotiated_rate, 4.10);
//! assert!(result.is_loop);
//! ```

use serde::{Deserialize, Serialize};

use crate::loader::{load_rate_table, MalformedTableError};
use crate::models::{Carrier, RateTableSet, SavingsResult, ShipmentRecord, Zone};
use crate::savings::calculate_savings;
use crate::zones::estimate_zone;

/// Raw table data for one carrier.
///
/// `rows` are rows of cells; splitting the raw text into cells is the
/// job of the surrounding application's CSV layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CarrierTableConfig {
    pub carrier: Carrier,
    pub rows: Vec<Vec<String>>,
}

/// Complete engine configuration: one raw table per carrier.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EngineConfig {
    pub carriers: Vec<CarrierTableConfig>,
}

/// Per-carrier load outcome, reported once at load time.
#[derive(Debug)]
pub struct CarrierLoadStatus {
    pub carrier: Carrier,
    /// Bracket count on success, the table's failure otherwise
    pub result: Result<usize, MalformedTableError>,
}

/// Outcomes of the load phase, one entry per configured carrier.
#[derive(Debug, Default)]
pub struct LoadReport {
    statuses: Vec<CarrierLoadStatus>,
}

impl LoadReport {
    /// All per-carrier outcomes, in configuration order.
    pub fn statuses(&self) -> &[CarrierLoadStatus] {
        &self.statuses
    }

    /// Carriers whose table loaded.
    pub fn loaded(&self) -> Vec<Carrier> {
        self.statuses
            .iter()
            .filter(|s| s.result.is_ok())
            .map(|s| s.carrier)
            .collect()
    }

    /// Carriers whose table failed, with the failure.
    pub fn failed(&self) -> Vec<(Carrier, &MalformedTableError)> {
        self.statuses
            .iter()
            .filter_map(|s| s.result.as_ref().err().map(|e| (s.carrier, e)))
            .collect()
    }
}

/// The estimation-and-lookup engine.
///
/// Holds the immutable set of loaded rate tables; everything else is
/// stateless per call.
#[derive(Debug)]
pub struct RateEngine {
    tables: RateTableSet,
    load_report: LoadReport,
}

impl RateEngine {
    /// Build the engine, loading every configured carrier table.
    ///
    /// Never fails as a whole: each carrier loads independently and the
    /// per-carrier outcomes land in the [`LoadReport`]. An engine with
    /// zero loaded tables is still usable; every lookup just resolves
    /// to a zero negotiated rate.
    pub fn new(config: EngineConfig) -> Self {
        let mut tables = RateTableSet::new();
        let mut statuses = Vec::with_capacity(config.carriers.len());

        for carrier_config in &config.carriers {
            let result = match load_rate_table(carrier_config.carrier, &carrier_config.rows) {
                Ok(table) => {
                    tracing::info!(
                        carrier = %carrier_config.carrier,
                        brackets = table.len(),
                        "loaded rate table"
                    );
                    let count = table.len();
                    tables.insert(table);
                    Ok(count)
                }
                Err(error) => {
                    tracing::warn!(
                        carrier = %carrier_config.carrier,
                        %error,
                        "rate table failed to load, lookups will return zero"
                    );
                    Err(error)
                }
            };

            statuses.push(CarrierLoadStatus {
                carrier: carrier_config.carrier,
                result,
            });
        }

        Self {
            tables,
            load_report: LoadReport { statuses },
        }
    }

    /// Estimate a zone from ZIP-code distance.
    ///
    /// The fallback path when no external zone authority is configured
    /// or its call failed; see [`crate::zones::estimate_zone`].
    pub fn estimate_zone(&self, carrier_name: &str, origin_zip: &str, destination_zip: &str) -> Zone {
        estimate_zone(carrier_name, origin_zip, destination_zip)
    }

    /// Compute the savings verdict for one shipment against a zone.
    ///
    /// The zone token may come from [`RateEngine::estimate_zone`] or
    /// from an external authoritative source (in which case it may be a
    /// raw transit token that simply resolves to a zero rate).
    pub fn calculate_savings(&self, shipment: &ShipmentRecord, zone_token: &str) -> SavingsResult {
        calculate_savings(&self.tables, shipment, zone_token)
    }

    /// The loaded tables.
    pub fn tables(&self) -> &RateTableSet {
        &self.tables
    }

    /// Load-phase outcomes, one per configured carrier.
    pub fn load_report(&self) -> &LoadReport {
        &self.load_report
    }
}
