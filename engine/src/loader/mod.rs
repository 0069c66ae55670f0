//! Rate table loading
//!
//! Turns raw tabular carrier data (rows of string cells, as produced by
//! the surrounding application's CSV layer) into a normalized
//! [`RateTable`]. The two source shapes:
//!
//! - **USPS**: the header row is not at a fixed position and must be
//!   discovered by scanning for a marker phrase; zone columns are at
//!   fixed offsets (columns 2..=10 are zones 1..=9); weights may be in
//!   ounces and are converted to pounds.
//! - **FedEx / UPS**: a fixed preamble, then a header row naming the
//!   zone per column; every later row is `{weight, rate per zone...}`.
//!
//! Dirty source sheets are expected: individual malformed rows are
//! skipped silently, and only whole-table failures surface as a
//! [`MalformedTableError`]. One carrier's failure never blocks another
//! carrier's load.

use std::collections::BTreeMap;

use thiserror::Error;

use crate::models::{Carrier, RateTable, WeightBracket, Zone};

/// Marker phrase identifying the USPS weight column header.
const USPS_HEADER_MARKER: &str = "weight not over";

/// Minimum column count for a USPS data row (weight + 9 zone columns,
/// offset by the sheet's leading blank column).
const USPS_MIN_COLUMNS: usize = 11;

/// Whole-table load failure for a single carrier.
///
/// Recoverable at the system level: the engine keeps operating with
/// whichever carriers loaded, and lookups against a failed carrier
/// return a zero negotiated rate.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MalformedTableError {
    #[error("no header row found after scanning {rows_scanned} rows")]
    HeaderNotFound { rows_scanned: usize },

    #[error("table has only {found} rows, need at least {minimum}")]
    TooFewRows { found: usize, minimum: usize },

    #[error("header row names no recognizable zone columns")]
    NoZoneColumns,

    #[error("no usable rate rows after the header")]
    NoRateRows,
}

/// Load one carrier's rate table from raw rows of cells.
///
/// Invoked once per carrier at startup. Dispatches on the carrier's
/// source format: USPS sheets use marker-based header discovery and
/// fixed zone columns; FedEx and UPS sheets carry their zone labels in
/// a header row.
///
/// # Errors
///
/// [`MalformedTableError`] when the header cannot be found, the sheet is
/// too short, no zone column is recognizable, or no data row survives
/// the per-row checks. Individual bad rows are skipped, not reported.
pub fn load_rate_table(
    carrier: Carrier,
    rows: &[Vec<String>],
) -> Result<RateTable, MalformedTableError> {
    let brackets = match carrier {
        Carrier::Usps => parse_usps_rows(rows)?,
        Carrier::FedEx | Carrier::Ups => parse_zone_headed_rows(rows)?,
    };

    if brackets.is_empty() {
        return Err(MalformedTableError::NoRateRows);
    }

    Ok(RateTable::new(carrier, brackets))
}

/// Strip currency symbols, thousands separators, and whitespace from a
/// rate cell.
///
/// An empty cell sanitizes to `"0"`: blank source cells become a zero
/// rate, indistinguishable from a true zero-dollar rate (a preserved
/// modeling gap, not an error channel).
pub fn clean_rate(raw: &str) -> String {
    let cleaned: String = raw
        .chars()
        .filter(|c| *c != '$' && *c != ',' && !c.is_whitespace())
        .collect();

    if cleaned.is_empty() {
        "0".to_string()
    } else {
        cleaned
    }
}

/// Sanitize and parse a rate cell; unparsable cells are a zero rate.
///
/// # Example
/// ```
/// use rate_comparison_core_rs::loader::parse_rate;
///
/// assert_eq!(parse_rate("$1,234.56"), 1234.56);
/// assert_eq!(parse_rate(""), 0.0);
/// assert_eq!(parse_rate("N/A"), 0.0);
/// ```
pub fn parse_rate(raw: &str) -> f64 {
    clean_rate(raw).parse::<f64>().unwrap_or(0.0)
}

/// Extract a numeric weight from a cell, keeping only digits and dots.
fn parse_weight_cell(raw: &str) -> Option<f64> {
    let digits: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();

    digits.parse::<f64>().ok()
}

/// Round to 3 decimal places (ounce→pound conversions).
fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

// ============================================================================
// USPS format
// ============================================================================

/// Locate the USPS header row.
///
/// Primary: first row whose first five cells contain the marker phrase,
/// case-insensitive. Fallback heuristic: the first row past index 2 with
/// more than 8 columns whose first two cells carry an "oz"/"lb" unit
/// marker is taken as the first data row, and the row before it as the
/// header, which must itself have more than 8 columns.
fn find_usps_header(rows: &[Vec<String>]) -> Option<usize> {
    let marker_row = rows.iter().position(|row| {
        row.iter()
            .take(5)
            .any(|cell| cell.to_ascii_lowercase().contains(USPS_HEADER_MARKER))
    });
    if marker_row.is_some() {
        return marker_row;
    }

    let first_data_row = rows.iter().enumerate().position(|(index, row)| {
        index > 2 && row.len() > 8 && row.iter().take(2).any(|cell| has_unit_marker(cell))
    })?;

    let header = first_data_row.checked_sub(1)?;
    (rows[header].len() > 8).then_some(header)
}

fn has_unit_marker(cell: &str) -> bool {
    let lowered = cell.to_ascii_lowercase();
    lowered.contains("oz") || lowered.contains("lb")
}

fn parse_usps_rows(rows: &[Vec<String>]) -> Result<Vec<WeightBracket>, MalformedTableError> {
    let header = find_usps_header(rows).ok_or(MalformedTableError::HeaderNotFound {
        rows_scanned: rows.len(),
    })?;

    let mut brackets = Vec::new();

    for row in &rows[header + 1..] {
        // Sheet layout: leading blank column, weight in column 1,
        // zones 1..=9 in columns 2..=10
        if row.len() < USPS_MIN_COLUMNS || row[1].is_empty() {
            continue;
        }

        let Some(raw_weight) = parse_weight_cell(&row[1]) else {
            continue;
        };

        let weight_lbs = if row[1].to_ascii_lowercase().contains("oz") {
            round3(raw_weight / 16.0)
        } else {
            raw_weight
        };

        let mut zone_rates = BTreeMap::new();
        for (offset, zone) in Zone::ALL.iter().enumerate() {
            zone_rates.insert(*zone, parse_rate(&row[offset + 2]));
        }

        brackets.push(WeightBracket::new(weight_lbs, zone_rates));
    }

    Ok(brackets)
}

// ============================================================================
// FedEx / UPS format (zone labels in a header row)
// ============================================================================

fn parse_zone_headed_rows(rows: &[Vec<String>]) -> Result<Vec<WeightBracket>, MalformedTableError> {
    const MIN_ROWS: usize = 3;

    if rows.len() < MIN_ROWS {
        return Err(MalformedTableError::TooFewRows {
            found: rows.len(),
            minimum: MIN_ROWS,
        });
    }

    // Row 0 is preamble; row 1 names the zone per column, starting at
    // column 1 (column 0 is the weight column). Labels that do not parse
    // as a zone are skipped, their columns ignored.
    let zone_columns: Vec<(usize, Zone)> = rows[1]
        .iter()
        .enumerate()
        .skip(1)
        .filter_map(|(column, label)| Zone::parse_token(label).map(|zone| (column, zone)))
        .collect();

    if zone_columns.is_empty() {
        return Err(MalformedTableError::NoZoneColumns);
    }

    let mut brackets = Vec::new();

    for row in &rows[2..] {
        if row.len() < 2 || row[0].trim().is_empty() {
            continue;
        }

        let Some(weight_lbs) = parse_weight_cell(&row[0]) else {
            continue;
        };

        let mut zone_rates = BTreeMap::new();
        for (column, zone) in &zone_columns {
            if let Some(cell) = row.get(*column) {
                zone_rates.insert(*zone, parse_rate(cell));
            }
        }

        brackets.push(WeightBracket::new(weight_lbs, zone_rates));
    }

    Ok(brackets)
}
