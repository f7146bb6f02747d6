//! Validation of divamp results against bench measurements.
//!
//! This crate provides:
//! - The readings taken on the assembled board, and JSON loading of others
//! - Tolerance configuration
//! - Measured-vs-computed comparison with text and JSON reports

pub mod compare;
pub mod error;
pub mod measured;

pub use compare::{
    ComparisonReport, ComparisonSummary, Tolerances, VariableComparison, compare_measurements,
};
pub use error::{Error as ValidationError, Result as ValidationResult};
pub use measured::{Measurement, MeasurementSet, bench_measurements, load_measurement_file};
