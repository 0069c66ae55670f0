//! Type conversion utilities for FFI boundary
//!
//! Converts between Rust types and PyO3-compatible types (PyDict,
//! PyList). No engine logic lives here; the FFI layer only translates.

use pyo3::prelude::*;
use pyo3::types::{PyDict, PyList};

use crate::engine::{CarrierTableConfig, EngineConfig, LoadReport};
use crate::models::{Carrier, SavingsResult, ShipmentRecord};

/// Extract a required field from a Python dict with a clear error.
fn extract_required<'py, T>(dict: &Bound<'py, PyDict>, key: &str) -> PyResult<T>
where
    T: FromPyObject<'py>,
{
    dict.get_item(key)?
        .ok_or_else(|| {
            PyErr::new::<pyo3::exceptions::PyValueError, _>(format!(
                "Missing required field '{}'",
                key
            ))
        })?
        .extract()
}

/// Extract an optional string field, defaulting to empty when missing.
fn extract_string_or_empty(dict: &Bound<'_, PyDict>, key: &str) -> PyResult<String> {
    match dict.get_item(key)? {
        Some(value) => value.extract(),
        None => Ok(String::new()),
    }
}

/// Parse an engine configuration from a Python dict.
///
/// Expected shape:
///
/// ```python
/// {
///     "carriers": [
///         {"carrier": "USPS", "rows": [["cell", ...], ...]},
///     ],
/// }
/// ```
pub fn parse_engine_config(dict: &Bound<'_, PyDict>) -> PyResult<EngineConfig> {
    let carriers_list: Bound<'_, PyList> = extract_required(dict, "carriers")?;

    let mut carriers = Vec::with_capacity(carriers_list.len());
    for entry in carriers_list.iter() {
        let entry: Bound<'_, PyDict> = entry.extract()?;

        let carrier_name: String = extract_required(&entry, "carrier")?;
        let carrier = Carrier::match_name(&carrier_name).ok_or_else(|| {
            PyErr::new::<pyo3::exceptions::PyValueError, _>(format!(
                "Unknown carrier '{}'",
                carrier_name
            ))
        })?;

        let rows: Vec<Vec<String>> = extract_required(&entry, "rows")?;

        carriers.push(CarrierTableConfig { carrier, rows });
    }

    Ok(EngineConfig { carriers })
}

/// Parse a shipment record from a Python dict keyed by the upstream
/// export's column names.
pub fn parse_shipment(dict: &Bound<'_, PyDict>) -> PyResult<ShipmentRecord> {
    Ok(ShipmentRecord {
        carrier: extract_required(dict, "CARRIER")?,
        origin_zip: extract_string_or_empty(dict, "ORIGIN_ZIP")?,
        destination_zip: extract_string_or_empty(dict, "DESTINATION_ZIP")?,
        weight_grams: extract_string_or_empty(dict, "PKG_WEIGHT_IN_GRAMS")?,
        rate_shopper_currency: extract_string_or_empty(dict, "TOTAL_LABEL_RATE_SHOPPER_CURRENCY")?,
        rate_usd: extract_string_or_empty(dict, "TOTAL_LABEL_RATE_USD")?,
    })
}

/// Convert a savings result to a Python dict.
pub fn savings_result_to_py<'py>(
    py: Python<'py>,
    result: &SavingsResult,
) -> PyResult<Bound<'py, PyDict>> {
    let dict = PyDict::new_bound(py);
    dict.set_item("zone", &result.zone)?;
    dict.set_item("negotiated_rate", result.negotiated_rate)?;
    dict.set_item("savings", result.savings)?;
    dict.set_item("is_loop", result.is_loop)?;
    Ok(dict)
}

/// Convert the load report to a Python list of per-carrier dicts.
pub fn load_report_to_py<'py>(py: Python<'py>, report: &LoadReport) -> PyResult<Bound<'py, PyList>> {
    let list = PyList::empty_bound(py);
    for status in report.statuses() {
        let entry = PyDict::new_bound(py);
        entry.set_item("carrier", status.carrier.name())?;
        match &status.result {
            Ok(brackets) => {
                entry.set_item("loaded", true)?;
                entry.set_item("brackets", brackets)?;
            }
            Err(error) => {
                entry.set_item("loaded", false)?;
                entry.set_item("error", error.to_string())?;
            }
        }
        list.append(entry)?;
    }
    Ok(list)
}
