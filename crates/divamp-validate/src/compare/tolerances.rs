//! Tolerance configuration for measured-vs-computed comparison.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Voltage tolerances. A value passes if it is within either bound.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tolerances {
    /// Absolute voltage tolerance (V).
    pub voltage_abs: f64,
    /// Relative voltage tolerance (fraction of the measured value).
    pub voltage_rel: f64,
}

impl Default for Tolerances {
    /// Handheld-multimeter grade: 10 mV or 1 %.
    fn default() -> Self {
        Self {
            voltage_abs: 0.01,
            voltage_rel: 0.01,
        }
    }
}

impl Tolerances {
    /// Create tolerances from explicit bounds.
    pub fn new(voltage_abs: f64, voltage_rel: f64) -> Self {
        Self {
            voltage_abs,
            voltage_rel,
        }
    }

    /// Both bounds must be finite and non-negative.
    pub fn validate(&self) -> Result<()> {
        for (label, value) in [
            ("voltage_abs", self.voltage_abs),
            ("voltage_rel", self.voltage_rel),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(Error::InvalidTolerance(format!("{} = {}", label, value)));
            }
        }
        Ok(())
    }

    /// Load tolerances from a JSON file. Missing fields take their defaults.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::FileNotFound {
                path: path.to_path_buf(),
            });
        }

        let content = std::fs::read_to_string(path)?;
        let tol: Tolerances = serde_json::from_str(&content)?;
        tol.validate()?;
        Ok(tol)
    }
}

/// Check if two values match within absolute and relative tolerances.
pub fn values_match(expected: f64, actual: f64, abs_tol: f64, rel_tol: f64) -> bool {
    let abs_diff = (expected - actual).abs();

    if abs_diff <= abs_tol {
        return true;
    }

    expected.abs() > 0.0 && abs_diff / expected.abs() <= rel_tol
}

/// Calculate relative error between two values.
pub fn relative_error(expected: f64, actual: f64) -> f64 {
    if expected.abs() < 1e-15 {
        if actual.abs() < 1e-15 {
            0.0
        } else {
            f64::INFINITY
        }
    } else {
        (actual - expected).abs() / expected.abs()
    }
}
