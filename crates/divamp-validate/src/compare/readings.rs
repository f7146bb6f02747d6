//! Comparison of computed voltages against bench readings.

use divamp_core::Readout;

use crate::compare::report::{ComparisonReport, VariableComparison};
use crate::compare::tolerances::{Tolerances, relative_error, values_match};
use crate::measured::MeasurementSet;

/// Compare a readout with a set of measurements.
///
/// Measurements naming a quantity the readout does not carry fail as missing.
pub fn compare_measurements(
    readout: &Readout,
    set: &MeasurementSet,
    tolerances: &Tolerances,
) -> ComparisonReport {
    let title = if set.description.is_empty() {
        "Measured vs Computed".to_string()
    } else {
        format!("Measured vs Computed ({})", set.description)
    };
    let mut report = ComparisonReport::new(&title);

    for m in &set.measurements {
        let Some(computed) = readout.quantity(&m.name) else {
            log::warn!("{}: no computed counterpart", m.name);
            report.add_comparison(VariableComparison {
                name: m.name.clone(),
                passed: false,
                measured: m.value,
                computed: None,
                error: None,
                rel_error: None,
                note: m.note.clone(),
            });
            continue;
        };

        let passed = values_match(
            m.value,
            computed,
            tolerances.voltage_abs,
            tolerances.voltage_rel,
        );
        let rel = relative_error(m.value, computed);

        if passed {
            log::debug!("{}: measured {} computed {} ok", m.name, m.value, computed);
        } else {
            log::warn!(
                "{}: measured {:.3} V, computed {:.3} V ({:.2}% off)",
                m.name,
                m.value,
                computed,
                rel * 100.0
            );
        }

        report.add_comparison(VariableComparison {
            name: m.name.clone(),
            passed,
            measured: m.value,
            computed: Some(computed),
            error: Some(computed - m.value),
            rel_error: Some(rel),
            note: m.note.clone(),
        });
    }

    report.finalize();
    report
}
