//! Domain models for the rate comparison engine

pub mod carrier;
pub mod rate_table;
pub mod shipment;
pub mod zone;

// Re-exports
pub use carrier::Carrier;
pub use rate_table::{RateTable, RateTableSet, WeightBracket};
pub use shipment::{SavingsResult, ShipmentRecord};
pub use zone::Zone;
