//! Integration tests for the savings calculation
//!
//! Covers weight conversion, current-rate field preference, carrier
//! dispatch (no USPS default here, unlike zone estimation), and the
//! strict-inequality favorable verdict.

use rate_comparison_core_rs::{
    calculate_savings, load_rate_table, Carrier, RateTableSet, ShipmentRecord, GRAMS_PER_POUND,
};

fn row(cells: &[&str]) -> Vec<String> {
    cells.iter().map(|c| c.to_string()).collect()
}

fn usps_tables() -> RateTableSet {
    let rows = vec![
        row(&[
            "", "Weight Not Over", "Zone 1", "Zone 2", "Zone 3", "Zone 4", "Zone 5", "Zone 6",
            "Zone 7", "Zone 8", "Zone 9",
        ]),
        row(&[
            "", "1 lb", "$4.05", "$4.10", "$4.30", "$4.55", "$4.85", "$5.20", "$5.60", "$6.05",
            "$6.55",
        ]),
        row(&[
            "", "2 lb", "$5.50", "$5.60", "$5.90", "$6.25", "$6.65", "$7.10", "$7.60", "$8.15",
            "$8.75",
        ]),
    ];

    let mut set = RateTableSet::new();
    set.insert(load_rate_table(Carrier::Usps, &rows).unwrap());
    set
}

fn shipment(carrier: &str, grams: &str, shopper: &str, usd: &str) -> ShipmentRecord {
    ShipmentRecord {
        carrier: carrier.to_string(),
        origin_zip: "10001".to_string(),
        destination_zip: "30301".to_string(),
        weight_grams: grams.to_string(),
        rate_shopper_currency: shopper.to_string(),
        rate_usd: usd.to_string(),
    }
}

// ============================================================================
// Weight conversion
// ============================================================================

#[test]
fn test_grams_convert_exactly_to_pounds() {
    // 453.592 g is exactly 1 lb under the fixed conversion constant
    assert_eq!(GRAMS_PER_POUND, 453.592);

    let tables = usps_tables();
    let result = calculate_savings(&tables, &shipment("USPS", "453.592", "$9.50", ""), "2");

    // Exactly 1.0 lb selects the 1 lb bracket, zone 2
    assert_eq!(result.negotiated_rate, 4.10);
}

#[test]
fn test_unparsable_weight_behaves_as_zero_grams() {
    let tables = usps_tables();
    let result = calculate_savings(&tables, &shipment("USPS", "unknown", "$9.50", ""), "2");

    // Zero pounds selects the lightest bracket
    assert_eq!(result.negotiated_rate, 4.10);
}

// ============================================================================
// Current rate preference
// ============================================================================

#[test]
fn test_shopper_currency_rate_preferred() {
    let tables = usps_tables();
    let result = calculate_savings(&tables, &shipment("USPS", "453.592", "$9.50", "$12.00"), "2");

    assert_eq!(result.savings, 9.50 - 4.10);
}

#[test]
fn test_usd_rate_used_when_shopper_rate_absent_or_unparsable() {
    let tables = usps_tables();

    let result = calculate_savings(&tables, &shipment("USPS", "453.592", "", "$12.00"), "2");
    assert_eq!(result.savings, 12.00 - 4.10);

    let result = calculate_savings(&tables, &shipment("USPS", "453.592", "pending", "$12.00"), "2");
    assert_eq!(result.savings, 12.00 - 4.10);
}

#[test]
fn test_missing_both_rate_fields_is_zero_current_rate() {
    let tables = usps_tables();
    let result = calculate_savings(&tables, &shipment("USPS", "453.592", "", ""), "2");

    assert_eq!(result.savings, 0.0 - 4.10);
    assert!(!result.is_loop);
}

// ============================================================================
// Verdict
// ============================================================================

#[test]
fn test_end_to_end_usps_two_pound_zone_four() {
    // 907.18 g ≈ 2 lb; zone 4, 2 lb bracket rate $6.25 against $9.50 paid
    let tables = usps_tables();
    let result = calculate_savings(&tables, &shipment("USPS", "907.18", "$9.50", ""), "4");

    assert_eq!(result.zone, "4");
    assert_eq!(result.negotiated_rate, 6.25);
    assert_eq!(result.savings, 3.25);
    assert!(result.is_loop);
}

#[test]
fn test_tie_is_not_favorable() {
    let tables = usps_tables();
    let result = calculate_savings(&tables, &shipment("USPS", "453.592", "$4.10", ""), "2");

    assert_eq!(result.savings, 0.0);
    assert!(!result.is_loop); // strictly greater than zero required
}

#[test]
fn test_negative_savings_is_not_favorable() {
    let tables = usps_tables();
    let result = calculate_savings(&tables, &shipment("USPS", "453.592", "$3.00", ""), "2");

    assert!(result.savings < 0.0);
    assert!(!result.is_loop);
}

// ============================================================================
// Carrier dispatch
// ============================================================================

#[test]
fn test_unrecognized_carrier_yields_zero_negotiated_rate() {
    // Unlike zone estimation, savings has no USPS default for unknown
    // carriers; pricing against another carrier's table is meaningless
    let tables = usps_tables();
    let result = calculate_savings(&tables, &shipment("DHL Express", "453.592", "$9.50", ""), "2");

    assert_eq!(result.negotiated_rate, 0.0);
    assert_eq!(result.savings, 9.50);
    assert!(result.is_loop);
}

#[test]
fn test_carrier_without_loaded_table_yields_zero_negotiated_rate() {
    // FedEx table never loaded: any positive current rate looks like
    // savings, indistinguishable from "genuinely no savings", a known
    // limitation of the zero-rate policy
    let tables = usps_tables();
    let result = calculate_savings(&tables, &shipment("FedEx Ground", "453.592", "$9.50", ""), "2");

    assert_eq!(result.negotiated_rate, 0.0);
    assert_eq!(result.savings, 9.50);
    assert!(result.is_loop);
}

#[test]
fn test_carrier_name_substring_dispatch() {
    let tables = usps_tables();

    // Decorated USPS names still hit the USPS table
    let result = calculate_savings(
        &tables,
        &shipment("usps ground advantage", "453.592", "$9.50", ""),
        "2",
    );
    assert_eq!(result.negotiated_rate, 4.10);

    // UPS must not be confused with USPS despite the substring overlap
    let result = calculate_savings(&tables, &shipment("UPS Ground", "453.592", "$9.50", ""), "2");
    assert_eq!(result.negotiated_rate, 0.0);
}

#[test]
fn test_result_carries_the_zone_token() {
    let tables = usps_tables();
    let result = calculate_savings(&tables, &shipment("USPS", "453.592", "$9.50", ""), "TWO_DAYS");

    // Raw external tokens pass through untouched and price to zero
    assert_eq!(result.zone, "TWO_DAYS");
    assert_eq!(result.negotiated_rate, 0.0);
}
