//! divamp command-line interface.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use divamp_core::units::format_with_unit;
use divamp_core::{Circuit, Readout};
use divamp_validate::{
    ComparisonReport, MeasurementSet, Tolerances, bench_measurements, compare_measurements,
    load_measurement_file,
};
use log::LevelFilter;
use serde::Serialize;

#[derive(Parser)]
#[command(name = "divamp")]
#[command(
    about = "Bias-point calculator for an LED-dropped divider feeding a non-inverting op-amp",
    long_about = None
)]
#[command(version)]
struct Cli {
    /// Compare the computed voltages against bench measurements
    #[arg(short, long)]
    compare: bool,

    /// JSON measurement file to compare against (implies --compare)
    #[arg(short, long, value_name = "FILE")]
    measurements: Option<PathBuf>,

    /// JSON tolerance file for the comparison
    #[arg(short, long, value_name = "FILE")]
    tolerances: Option<PathBuf>,

    /// Emit JSON instead of text
    #[arg(long)]
    json: bool,

    /// Diagnostics on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn comparing(&self) -> bool {
        self.compare || self.measurements.is_some()
    }

    fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

#[derive(Serialize)]
struct JsonOutput<'a> {
    readout: &'a Readout,
    #[serde(skip_serializing_if = "Option::is_none")]
    report: Option<&'a ComparisonReport>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(cli.log_level())
        .format_timestamp(None)
        .init();

    let circuit = Circuit::default();
    log_circuit(&circuit);

    let readout = circuit.evaluate();

    let report = if cli.comparing() {
        Some(run_comparison(&cli, &readout)?)
    } else {
        None
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if cli.json {
        let payload = JsonOutput {
            readout: &readout,
            report: report.as_ref(),
        };
        serde_json::to_writer_pretty(&mut out, &payload).context("Failed to write JSON")?;
        writeln!(out).context("Failed to write output")?;
    } else {
        readout
            .write_to(&mut out)
            .context("Failed to write output")?;
        if let Some(ref report) = report {
            write!(out, "\n{}", report.to_text()).context("Failed to write report")?;
        }
    }

    out.flush().context("Failed to write output")?;
    Ok(())
}

fn log_circuit(circuit: &Circuit) {
    log::info!(
        "supply {} minus LED {}",
        format_with_unit(circuit.supply, "V"),
        format_with_unit(circuit.led_drop, "V")
    );
    log::info!(
        "divider {} / {}, amplifier {} / {}",
        format_with_unit(circuit.divider.top.resistance, "Ω"),
        format_with_unit(circuit.divider.bottom.resistance, "Ω"),
        format_with_unit(circuit.amplifier.r1.resistance, "Ω"),
        format_with_unit(circuit.amplifier.r2.resistance, "Ω")
    );
    log::debug!(
        "closed-loop gain error vs ideal: {:.3e}",
        circuit.amplifier.gain_error()
    );
}

fn run_comparison(cli: &Cli, readout: &Readout) -> Result<ComparisonReport> {
    let set = match cli.measurements {
        Some(ref path) => load_measurements(path)?,
        None => bench_measurements(),
    };

    let tolerances = match cli.tolerances {
        Some(ref path) => Tolerances::from_json_file(path)
            .with_context(|| format!("Failed to load tolerances: {}", path.display()))?,
        None => Tolerances::default(),
    };

    log::info!(
        "comparing {} measurements (abs {} V, rel {}%)",
        set.measurements.len(),
        tolerances.voltage_abs,
        tolerances.voltage_rel * 100.0
    );

    Ok(compare_measurements(readout, &set, &tolerances))
}

fn load_measurements(path: &Path) -> Result<MeasurementSet> {
    load_measurement_file(path)
        .with_context(|| format!("Failed to load measurements: {}", path.display()))
}
