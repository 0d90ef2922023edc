//! quaterp: print LERP and SLERP sample paths between two quaternions.
//!
//! Run with `RUST_LOG=debug` to see shortest-path and fallback decisions.

mod args;
mod report;
mod view;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use quaterp_core::Interpolator;

use crate::args::{Args, CliConfig, Format, Settings};
use crate::report::Report;

fn main() -> Result<()> {
    use env_logger::{Builder, Env};

    Builder::from_env(Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let file = match &args.config {
        Some(path) => CliConfig::load(path)?,
        None => CliConfig::default(),
    };
    let settings = Settings::resolve(&args, file)?;
    info!(
        "q1={:?} q2={:?} n={} view={:?}",
        settings.q1, settings.q2, settings.samples, settings.view
    );

    let samples = Interpolator::new(settings.interp.clone())
        .interpolate(settings.q1, settings.q2, settings.samples)
        .context("interpolation failed")?;
    let report = Report::build(&samples, &settings);

    match settings.format {
        Format::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        Format::Table => print!("{}", report.render_table()),
    }
    Ok(())
}
