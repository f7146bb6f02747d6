//! The bench circuit: LED-dropped supply, divider, non-inverting amplifier.

use serde::Serialize;

use crate::amplifier::NonInvertingAmplifier;
use crate::divider::VoltageDivider;
use crate::passive::Resistor;
use crate::readout::Readout;
use crate::units::format_value;

/// Raw supply voltage (V).
pub const SUPPLY_VOLTAGE: f64 = 5.05;
/// Forward drop of the indicator LED in the supply path (V).
pub const LED_FORWARD_DROP: f64 = 2.9;
/// Series parts making up the upper divider leg (ohms).
pub const RA_PARTS: [f64; 2] = [1000.0, 200.0];
/// Series parts making up the lower divider leg (ohms).
pub const RB_PARTS: [f64; 2] = [2500.0, 1500.0];
/// Amplifier ground resistor (ohms).
pub const R1_OHMS: f64 = 10000.0;
/// Amplifier feedback resistor (ohms).
pub const R2_OHMS: f64 = 10000.0;
/// Op-amp open-loop gain.
pub const OPEN_LOOP_GAIN: f64 = 100000.0;

/// Complete circuit description.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Circuit {
    /// Raw supply voltage before the LED (V).
    pub supply: f64,
    /// Voltage dropped across the LED (V).
    pub led_drop: f64,
    /// Divider producing the amplifier input.
    pub divider: VoltageDivider,
    /// Amplifier stage.
    pub amplifier: NonInvertingAmplifier,
}

impl Default for Circuit {
    /// The circuit as built on the bench.
    fn default() -> Self {
        Self {
            supply: SUPPLY_VOLTAGE,
            led_drop: LED_FORWARD_DROP,
            divider: VoltageDivider::new(
                Resistor::series("Ra", &RA_PARTS),
                Resistor::series("Rb", &RB_PARTS),
            ),
            amplifier: NonInvertingAmplifier::new(
                Resistor::new("R1", R1_OHMS),
                Resistor::new("R2", R2_OHMS),
                OPEN_LOOP_GAIN,
            ),
        }
    }
}

impl Circuit {
    /// Supply voltage after the LED drop.
    pub fn vcc(&self) -> f64 {
        self.supply - self.led_drop
    }

    /// Evaluate the divider and amplifier in order.
    pub fn evaluate(&self) -> Readout {
        let vcc = self.vcc();
        let vp = self.divider.output(vcc);
        let vout = self.amplifier.output(vp);

        log::debug!(
            "divider: Ra={} Rb={} ratio={:.6}",
            format_value(self.divider.top.resistance),
            format_value(self.divider.bottom.resistance),
            self.divider.ratio()
        );
        log::debug!(
            "amplifier: R1={} R2={} A={} gain={:.6} (ideal {:.6})",
            format_value(self.amplifier.r1.resistance),
            format_value(self.amplifier.r2.resistance),
            format_value(self.amplifier.open_loop_gain),
            self.amplifier.closed_loop_gain(),
            self.amplifier.ideal_gain()
        );

        Readout {
            supply: self.supply,
            vcc,
            vp,
            vout,
        }
    }
}
