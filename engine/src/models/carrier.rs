//! Carrier identification
//!
//! Carriers are a closed set: USPS, FedEx, and UPS. Upstream shipment
//! exports carry the carrier as free text with inconsistent casing and
//! formatting ("FedEx Ground", "usps", "UPS®"), so resolution is by
//! case-insensitive substring match.
//!
//! CRITICAL: match order is fedex → usps → ups. "usps" contains "ups"
//! as a substring, so USPS must be tested before UPS or every USPS
//! shipment would resolve as UPS.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Supported carrier families.
///
/// Zones and rate tables are scoped to a carrier: zone 5 under USPS and
/// zone 5 under FedEx use different distance thresholds and index into
/// different tables. They must never be compared across carriers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Carrier {
    Usps,
    FedEx,
    Ups,
}

impl Carrier {
    /// Resolve a free-text carrier name to a carrier.
    ///
    /// Case-insensitive substring match, tested in order: `"fedex"`,
    /// `"usps"`, `"ups"`. Returns `None` for unrecognized names; the
    /// caller decides the default (zone estimation falls back to USPS
    /// bands, savings calculation falls back to a zero negotiated rate).
    ///
    /// # Example
    /// ```
    /// use rate_comparison_core_rs::Carrier;
    ///
    /// assert_eq!(Carrier::match_name("FedEx Ground"), Some(Carrier::FedEx));
    /// assert_eq!(Carrier::match_name("USPS"), Some(Carrier::Usps));
    /// assert_eq!(Carrier::match_name("UPS SurePost"), Some(Carrier::Ups));
    /// assert_eq!(Carrier::match_name("DHL"), None);
    /// ```
    pub fn match_name(name: &str) -> Option<Carrier> {
        let lowered = name.to_ascii_lowercase();
        if lowered.contains("fedex") {
            Some(Carrier::FedEx)
        } else if lowered.contains("usps") {
            Some(Carrier::Usps)
        } else if lowered.contains("ups") {
            Some(Carrier::Ups)
        } else {
            None
        }
    }

    /// Canonical display name.
    pub fn name(&self) -> &'static str {
        match self {
            Carrier::Usps => "USPS",
            Carrier::FedEx => "FedEx",
            Carrier::Ups => "UPS",
        }
    }
}

impl fmt::Display for Carrier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_is_case_insensitive() {
        assert_eq!(Carrier::match_name("fedex"), Some(Carrier::FedEx));
        assert_eq!(Carrier::match_name("FEDEX"), Some(Carrier::FedEx));
        assert_eq!(Carrier::match_name("FedEx Home Delivery"), Some(Carrier::FedEx));
    }

    #[test]
    fn test_usps_matched_before_ups() {
        // "usps" contains "ups"; order of checks must keep these distinct
        assert_eq!(Carrier::match_name("USPS Ground Advantage"), Some(Carrier::Usps));
        assert_eq!(Carrier::match_name("usps"), Some(Carrier::Usps));
        assert_eq!(Carrier::match_name("UPS Ground"), Some(Carrier::Ups));
    }

    #[test]
    fn test_unrecognized_name_is_none() {
        assert_eq!(Carrier::match_name("DHL Express"), None);
        assert_eq!(Carrier::match_name(""), None);
    }
}
