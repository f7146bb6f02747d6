//! Passive elements: resistors and series combinations.

use serde::Serialize;

/// A resistor element.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Resistor {
    /// Reference designator (e.g., "Ra").
    pub name: String,
    /// Resistance value in ohms.
    pub resistance: f64,
}

impl Resistor {
    /// Create a new resistor.
    pub fn new(name: impl Into<String>, resistance: f64) -> Self {
        Self {
            name: name.into(),
            resistance,
        }
    }

    /// Build a resistor from parts wired in series.
    ///
    /// Parts are summed left to right, so `series("Ra", &[1000.0, 200.0])`
    /// holds exactly `1000.0 + 200.0`.
    pub fn series(name: impl Into<String>, parts: &[f64]) -> Self {
        let resistance = parts.iter().fold(0.0, |acc, r| acc + r);
        Self::new(name, resistance)
    }
}
