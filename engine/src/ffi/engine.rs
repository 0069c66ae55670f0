//! PyO3 wrapper for RateEngine
//!
//! Provides the Python interface to the Rust engine.

use pyo3::prelude::*;
use pyo3::types::{PyDict, PyList};

use super::types::{load_report_to_py, parse_engine_config, parse_shipment, savings_result_to_py};
use crate::engine::RateEngine as RustRateEngine;
use crate::zones::estimate_zone;

/// Python wrapper for the Rust rate comparison engine.
///
/// # Example (from Python)
///
/// ```python
/// from rate_comparison._core import RateEngine
///
/// config = {
///     "carriers": [
///         {"carrier": "USPS", "rows": usps_rows},
///         {"carrier": "FedEx", "rows": fedex_rows},
///     ],
/// }
///
/// engine = RateEngine.new(config)
/// zone = engine.estimate_zone("USPS", "10001", "94105")
/// result = engine.calculate_savings(record, zone)
/// print(result["savings"], result["is_loop"])
/// ```
#[pyclass(name = "RateEngine")]
pub struct PyRateEngine {
    inner: RustRateEngine,
}

#[pymethods]
impl PyRateEngine {
    /// Create an engine from a configuration dict.
    ///
    /// Never raises for malformed carrier tables; per-carrier outcomes
    /// are available from `load_report()`. Raises ValueError only for a
    /// structurally invalid configuration (missing keys, unknown
    /// carrier names).
    #[staticmethod]
    fn new(config: &Bound<'_, PyDict>) -> PyResult<Self> {
        let rust_config = parse_engine_config(config)?;
        Ok(PyRateEngine {
            inner: RustRateEngine::new(rust_config),
        })
    }

    /// Estimate a zone token from ZIP-code distance.
    fn estimate_zone(&self, carrier: &str, origin_zip: &str, destination_zip: &str) -> String {
        estimate_zone(carrier, origin_zip, destination_zip)
            .as_token()
            .to_string()
    }

    /// Compute the savings verdict for one shipment dict and zone token.
    fn calculate_savings<'py>(
        &self,
        py: Python<'py>,
        shipment: &Bound<'py, PyDict>,
        zone: &str,
    ) -> PyResult<Bound<'py, PyDict>> {
        let record = parse_shipment(shipment)?;
        let result = self.inner.calculate_savings(&record, zone);
        savings_result_to_py(py, &result)
    }

    /// Per-carrier load outcomes as a list of dicts.
    fn load_report<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyList>> {
        load_report_to_py(py, self.inner.load_report())
    }
}
