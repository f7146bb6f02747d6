//! Divider and amplifier models for the divamp bias-point calculator.
//!
//! A 5.05 V supply passes through an indicator LED, then a resistive divider
//! (Ra over Rb) whose tap drives a non-inverting op-amp stage (R1, R2, finite
//! open-loop gain A). [`Circuit::default`] holds the values as built and
//! [`Circuit::evaluate`] produces the [`Readout`].
//!
//! ```rust
//! use divamp_core::Circuit;
//!
//! let readout = Circuit::default().evaluate();
//! assert_eq!(
//!     readout.to_string(),
//!     "Vcc  = 2.150 V\nVp   = 1.654 V\nVout = 3.308 V\n"
//! );
//! ```

pub mod amplifier;
pub mod circuit;
pub mod divider;
pub mod passive;
pub mod readout;
pub mod units;

pub use amplifier::NonInvertingAmplifier;
pub use circuit::Circuit;
pub use divider::VoltageDivider;
pub use passive::Resistor;
pub use readout::Readout;
