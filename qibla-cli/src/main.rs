//! Qibla CLI - prints the direction to the Kaaba for the given position.

use std::process::ExitCode;

use clap::Parser;
use qibla::QiblaReport;
use tracing::info;

use crate::{
    cli::{Args, Command},
    error::CliError,
};

mod cli;
mod error;
mod logging;

fn render_json(report: &QiblaReport) -> Result<String, CliError> {
    let view = serde_json::json!({
        "report": report,
        "latitude": report.latitude_text(),
        "longitude": report.longitude_text(),
        "qibla": report.bearing_text(),
        "hint": report.hint(),
    });
    Ok(serde_json::to_string_pretty(&view)?)
}

fn run(command: &Command, json: bool) -> Result<QiblaReport, CliError> {
    let report = QiblaReport::calculate(&command.input());
    info!(valid = report.is_valid(), "Report ready");

    if json {
        println!("{}", render_json(&report)?);
    } else {
        println!("{report}");
    }
    Ok(report)
}

fn main() -> ExitCode {
    let args = Args::parse();

    if let Err(err) = logging::init_logging(args.verbose) {
        err.exit();
    }

    match run(&args.command, args.json) {
        Ok(report) if report.is_valid() => ExitCode::SUCCESS,
        Ok(_) => ExitCode::FAILURE,
        Err(err) => err.exit(),
    }
}
