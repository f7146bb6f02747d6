//! Resistive voltage divider.
//!
//! ```text
//!   Vin ──[ Ra ]──┬── Vout
//!                 │
//!               [ Rb ]
//!                 │
//!                GND
//! ```

use serde::Serialize;

use crate::passive::Resistor;

/// Two resistors in series with the output taken across the bottom one.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VoltageDivider {
    /// Upper leg, between the input and the tap.
    pub top: Resistor,
    /// Lower leg, between the tap and ground.
    pub bottom: Resistor,
}

impl VoltageDivider {
    /// Create a new divider.
    pub fn new(top: Resistor, bottom: Resistor) -> Self {
        Self { top, bottom }
    }

    /// Sum of both legs in ohms.
    pub fn total_resistance(&self) -> f64 {
        self.top.resistance + self.bottom.resistance
    }

    /// Fraction of the input seen at the tap.
    pub fn ratio(&self) -> f64 {
        self.bottom.resistance / self.total_resistance()
    }

    /// Tap voltage for the given input: `Vin * Rb / (Ra + Rb)`.
    pub fn output(&self, vin: f64) -> f64 {
        vin * self.bottom.resistance / (self.top.resistance + self.bottom.resistance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn divider(ra: f64, rb: f64) -> VoltageDivider {
        VoltageDivider::new(Resistor::new("Ra", ra), Resistor::new("Rb", rb))
    }

    #[test]
    fn test_equal_legs_halve_input() {
        let d = divider(1000.0, 1000.0);
        assert!((d.output(10.0) - 5.0).abs() < 1e-12);
        assert!((d.ratio() - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_bench_divider() {
        let d = divider(1200.0, 4000.0);
        assert_eq!(d.total_resistance(), 5200.0);
        let vp = d.output(2.15);
        assert!((vp - 2.15 * 4000.0 / 5200.0).abs() < 1e-12);
    }

    #[test]
    fn test_output_scales_linearly_with_input() {
        let d = divider(1200.0, 4000.0);
        assert!((d.output(4.3) - 2.0 * d.output(2.15)).abs() < 1e-12);
        assert_eq!(d.output(0.0), 0.0);
    }

    #[test]
    fn test_larger_bottom_leg_raises_output() {
        let low = divider(1200.0, 4000.0).output(2.15);
        let high = divider(1200.0, 4100.0).output(2.15);
        assert!(high > low);
    }

    #[test]
    fn test_larger_top_leg_lowers_output() {
        let base = divider(1200.0, 4000.0).output(2.15);
        let raised = divider(1300.0, 4000.0).output(2.15);
        assert!(raised < base);
    }
}
