//! Evaluated circuit voltages and their printed form.

use std::fmt;
use std::io::{self, Write};

use serde::Serialize;

/// Voltages computed for one evaluation of the circuit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Readout {
    /// Raw supply voltage (V).
    pub supply: f64,
    /// Supply after the LED drop (V).
    pub vcc: f64,
    /// Divider tap, the amplifier's non-inverting input (V).
    pub vp: f64,
    /// Amplifier output (V).
    pub vout: f64,
}

impl Readout {
    /// Look up a quantity by name.
    pub fn quantity(&self, name: &str) -> Option<f64> {
        match name {
            "Vsupply" => Some(self.supply),
            "Vcc" => Some(self.vcc),
            "Vp" => Some(self.vp),
            "Vout" => Some(self.vout),
            _ => None,
        }
    }

    /// The printed quantities, in print order.
    pub fn lines(&self) -> [(&'static str, f64); 3] {
        [("Vcc", self.vcc), ("Vp", self.vp), ("Vout", self.vout)]
    }

    /// Write the three printed lines.
    pub fn write_to<W: Write>(&self, mut writer: W) -> io::Result<()> {
        write!(writer, "{}", self)?;
        writer.flush()
    }
}

impl fmt::Display for Readout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (name, value) in self.lines() {
            writeln!(f, "{:<4} = {:.3} V", name, value)?;
        }
        Ok(())
    }
}
