//! Bench measurements taken on the physical board.
//!
//! The built-in set is what the multimeter read on the assembled circuit.
//! Other sets can be loaded from JSON:
//!
//! ```json
//! {
//!   "description": "second board",
//!   "measurements": [
//!     { "name": "Vcc", "value": 2.11 },
//!     { "name": "Vp", "value": 1.69, "note": "probe at R-network tap" }
//!   ]
//! }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A single measured voltage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    /// Quantity name as used by the readout ("Vsupply", "Vcc", "Vp", "Vout").
    pub name: String,
    /// Measured value (V).
    pub value: f64,
    /// Free-form remark.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl Measurement {
    /// Create a measurement without a note.
    pub fn new(name: impl Into<String>, value: f64) -> Self {
        Self {
            name: name.into(),
            value,
            note: None,
        }
    }

    /// Attach a note.
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }
}

/// A named group of measurements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeasurementSet {
    /// Where and how the values were taken.
    #[serde(default)]
    pub description: String,
    /// The readings.
    pub measurements: Vec<Measurement>,
}

impl MeasurementSet {
    /// Reject entries that cannot be compared.
    pub fn validate(&self) -> Result<()> {
        for m in &self.measurements {
            if m.name.trim().is_empty() {
                return Err(Error::InvalidMeasurement("empty name".to_string()));
            }
            if !m.value.is_finite() {
                return Err(Error::InvalidMeasurement(format!(
                    "{}: value is not finite",
                    m.name
                )));
            }
        }
        Ok(())
    }
}

/// Readings from the assembled board.
///
/// The model has no node between the supply and the LED, so the 4.85 V read
/// there is kept as a note on the supply reading.
pub fn bench_measurements() -> MeasurementSet {
    MeasurementSet {
        description: "bench board, handheld multimeter".to_string(),
        measurements: vec![
            Measurement::new("Vsupply", 5.05).with_note("4.85 V before LED"),
            Measurement::new("Vcc", 2.15).with_note("after LED"),
            Measurement::new("Vp", 1.71),
        ],
    }
}

/// Load a measurement set from a JSON file.
pub fn load_measurement_file(path: &Path) -> Result<MeasurementSet> {
    if !path.exists() {
        return Err(Error::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let content = std::fs::read_to_string(path)?;
    let set: MeasurementSet = serde_json::from_str(&content)?;
    set.validate()?;

    log::debug!(
        "loaded {} measurements from {}",
        set.measurements.len(),
        path.display()
    );

    Ok(set)
}
