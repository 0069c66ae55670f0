//! Rate Comparison Core - Rust Engine
//!
//! Estimates carrier zones between ZIP codes and compares paid shipment
//! rates against negotiated carrier rate tables, producing per-shipment
//! savings verdicts.
//!
//! # Architecture
//!
//! - **models**: Domain types (Carrier, Zone, RateTable, ShipmentRecord)
//! - **loader**: Raw tabular carrier data → normalized RateTable
//! - **zones**: Distance-band zone estimation (pure, total)
//! - **savings**: Per-shipment savings verdict
//! - **engine**: Load phase with partial-failure tolerance + the three
//!   public call surfaces
//!
//! # Critical Invariants
//!
//! 1. Rate tables are built once at initialization and never mutated;
//!    concurrent readers share them without locking
//! 2. Zone estimation, rate lookup, and savings calculation are total;
//!    unresolvable paths yield safe defaults (zero rate, widest zone,
//!    heaviest bracket), never errors, so one bad record cannot abort a
//!    batch
//! 3. Only whole-carrier load failure is surfaced; malformed rows are
//!    skipped silently

// Module declarations
pub mod engine;
pub mod loader;
pub mod models;
pub mod savings;
pub mod zones;

// Re-exports for convenience
pub use engine::{CarrierLoadStatus, CarrierTableConfig, EngineConfig, LoadReport, RateEngine};
pub use loader::{clean_rate, load_rate_table, parse_rate, MalformedTableError};
pub use models::{
    Carrier, RateTable, RateTableSet, SavingsResult, ShipmentRecord, WeightBracket, Zone,
};
pub use savings::{calculate_savings, GRAMS_PER_POUND};
pub use zones::estimate_zone;

// FFI module (when feature enabled)
#[cfg(feature = "pyo3")]
pub mod ffi;

// PyO3 exports (when feature enabled)
#[cfg(feature = "pyo3")]
use pyo3::prelude::*;

#[cfg(feature = "pyo3")]
#[pymodule]
fn rate_comparison_core_rs(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<ffi::PyRateEngine>()?;
    Ok(())
}
