//! FFI boundary (PyO3)
//!
//! Minimal and safe: type conversion only, no engine logic.

pub mod engine;
pub mod types;

pub use engine::PyRateEngine;
