//! Non-inverting operational amplifier with finite open-loop gain.
//!
//! R1 runs from the inverting input to ground and R2 from the output back to
//! the inverting input. With feedback factor `B = R1 / (R1 + R2)` and open-loop
//! gain `A`, the closed-loop transfer is
//!
//! ```text
//! Vout = Vp / (B + 1/A)
//! ```
//!
//! which tends to the ideal `Vp * (1 + R2/R1)` as `A` grows.

use serde::Serialize;

use crate::passive::Resistor;

/// Non-inverting amplifier stage.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NonInvertingAmplifier {
    /// Resistor from the inverting input to ground.
    pub r1: Resistor,
    /// Feedback resistor from the output to the inverting input.
    pub r2: Resistor,
    /// Open-loop gain of the op-amp (dimensionless).
    pub open_loop_gain: f64,
}

impl NonInvertingAmplifier {
    /// Create a new amplifier stage.
    pub fn new(r1: Resistor, r2: Resistor, open_loop_gain: f64) -> Self {
        Self {
            r1,
            r2,
            open_loop_gain,
        }
    }

    /// Fraction of the output fed back to the inverting input.
    pub fn feedback_factor(&self) -> f64 {
        self.r1.resistance / (self.r1.resistance + self.r2.resistance)
    }

    /// Gain with an infinite open-loop gain: `1 + R2/R1`.
    pub fn ideal_gain(&self) -> f64 {
        1.0 + self.r2.resistance / self.r1.resistance
    }

    /// Gain including the finite open-loop correction.
    pub fn closed_loop_gain(&self) -> f64 {
        1.0 / (self.feedback_factor() + 1.0 / self.open_loop_gain)
    }

    /// Relative shortfall of the closed-loop gain against the ideal gain.
    pub fn gain_error(&self) -> f64 {
        let ideal = self.ideal_gain();
        (ideal - self.closed_loop_gain()) / ideal
    }

    /// Output voltage for the given non-inverting input voltage.
    pub fn output(&self, vp: f64) -> f64 {
        let r1 = self.r1.resistance;
        let r2 = self.r2.resistance;
        vp / (r1 / (r1 + r2) + 1.0 / self.open_loop_gain)
    }
}
