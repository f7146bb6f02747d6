//! Comparison of computed results against measurements, with configurable
//! tolerances.

pub mod readings;
pub mod report;
pub mod tolerances;

pub use readings::compare_measurements;
pub use report::{ComparisonReport, ComparisonSummary, VariableComparison};
pub use tolerances::{Tolerances, relative_error, values_match};
