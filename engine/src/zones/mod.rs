//! Zone estimation from ZIP-code distance
//!
//! Used when no authoritative zone source is configured, or as the
//! fallback after an external zone service fails or returns nothing.
//! Pure and total: every input, including garbage ZIPs and unknown
//! carrier names, resolves to a zone.
//!
//! The estimate is a coarse approximation: the absolute difference of
//! the two three-digit ZIP prefixes is mapped through ascending distance
//! bands calibrated per carrier family. USPS uses narrow bands; FedEx
//! and UPS share a wider, coarser banding.

use crate::models::{Carrier, Zone};

/// USPS distance bands: inclusive upper bound of the prefix difference
/// per zone. Differences past the last band are zone 9.
const USPS_BANDS: [(i64, Zone); 7] = [
    (50, Zone::Two),
    (100, Zone::Three),
    (200, Zone::Four),
    (300, Zone::Five),
    (400, Zone::Six),
    (500, Zone::Seven),
    (600, Zone::Eight),
];

/// FedEx/UPS distance bands (wider granularity).
const EXPRESS_BANDS: [(i64, Zone); 7] = [
    (50, Zone::Two),
    (150, Zone::Three),
    (300, Zone::Four),
    (600, Zone::Five),
    (1000, Zone::Six),
    (1400, Zone::Seven),
    (1800, Zone::Eight),
];

/// Estimate the zone between two ZIP codes for a carrier.
///
/// Carrier dispatch uses the same case-insensitive substring policy as
/// the rest of the engine, with one deliberate difference: an
/// *unrecognized* carrier name estimates with the USPS bands rather than
/// refusing. External data supplies carrier names with inconsistent
/// casing and formatting, and an estimate is always more useful than
/// none here.
///
/// ZIP prefixes take the leading digits of the first three characters;
/// a prefix with no digits at all (or an empty ZIP) makes the distance
/// incomputable, which resolves to the widest band, zone 9.
///
/// # Example
/// ```
/// use rate_comparison_core_rs::{estimate_zone, Zone};
///
/// assert_eq!(estimate_zone("FedEx", "10001", "10001"), Zone::Two);
/// assert_eq!(estimate_zone("USPS", "10001", "99501"), Zone::Nine);
/// assert_eq!(estimate_zone("SomeRegionalCarrier", "10001", "10002"), Zone::Two);
/// ```
pub fn estimate_zone(carrier_name: &str, origin_zip: &str, destination_zip: &str) -> Zone {
    let bands: &[(i64, Zone)] = match Carrier::match_name(carrier_name) {
        Some(Carrier::FedEx) | Some(Carrier::Ups) => &EXPRESS_BANDS,
        Some(Carrier::Usps) | None => &USPS_BANDS,
    };

    let difference = match (zip_prefix(origin_zip), zip_prefix(destination_zip)) {
        (Some(origin), Some(destination)) => (origin - destination).abs(),
        // Incomputable distance resolves to the widest band
        _ => return Zone::Nine,
    };

    for (bound, zone) in bands {
        if difference <= *bound {
            return *zone;
        }
    }

    Zone::Nine
}

/// Leading-digit integer value of a ZIP's first three characters.
fn zip_prefix(zip: &str) -> Option<i64> {
    let digits: String = zip
        .chars()
        .take(3)
        .take_while(|c| c.is_ascii_digit())
        .collect();

    digits.parse::<i64>().ok()
}
