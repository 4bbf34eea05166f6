mod input;
mod logging;
mod model;
mod pipeline;
mod report;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use thiserror::Error;

use crate::input::{InputError, dataset_label, load_measurements};
use crate::model::InvalidInputError;
use crate::pipeline::stage3_reduce::reduce_rows;
use crate::pipeline::stage4_report::{ReportError, Stage4Input, write_reports};

const DEFAULT_WAVELENGTH_NM: f64 = 980.0;

#[derive(Debug, Error)]
enum RunError {
    #[error(transparent)]
    Input(#[from] InputError),
    #[error("invalid input: {0}")]
    Invalid(#[from] InvalidInputError),
    #[error(transparent)]
    Report(#[from] ReportError),
}

#[derive(Debug, Parser)]
#[command(
    name = "phantom-transmission",
    version,
    about = "Average optical transmission of tissue phantoms across repeated trials"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Reduce a measurement file and write the table, reports and plot.
    Run(RunArgs),
}

#[derive(Debug, Args)]
struct RunArgs {
    /// Comma-separated file: thickness,trial1,...,trialN (may be .gz).
    #[arg(long)]
    input: PathBuf,
    /// Output directory; created if missing.
    #[arg(long)]
    out: PathBuf,
    /// Raw source power [mW].
    #[arg(long, allow_negative_numbers = true)]
    raw_power: f64,
    /// Power measured from ambient light [mW].
    #[arg(long, allow_negative_numbers = true)]
    ambient_power: f64,
    /// Plot label; defaults to the input file name without extension.
    #[arg(long)]
    label: Option<String>,
    /// Source wavelength [nm] shown in the plot title.
    #[arg(long, default_value_t = DEFAULT_WAVELENGTH_NM)]
    wavelength_nm: f64,
    /// Skip rendering the PNG plot.
    #[arg(long)]
    no_plot: bool,
}

#[derive(Debug, Clone, PartialEq)]
struct RunConfig {
    input_path: PathBuf,
    out_dir: PathBuf,
    raw_power: f64,
    ambient_power: f64,
    label: String,
    wavelength_nm: f64,
    plot: bool,
}

impl From<RunArgs> for RunConfig {
    fn from(args: RunArgs) -> Self {
        let label = args
            .label
            .filter(|l| !l.trim().is_empty())
            .unwrap_or_else(|| dataset_label(&args.input));
        Self {
            input_path: args.input,
            out_dir: args.out,
            raw_power: args.raw_power,
            ambient_power: args.ambient_power,
            label,
            wavelength_nm: args.wavelength_nm,
            plot: !args.no_plot,
        }
    }
}

fn main() {
    logging::init_logging();
    let config = match parse_args(std::env::args_os()) {
        Ok(config) => config,
        Err(err) => err.exit(),
    };
    if let Err(err) = run(&config) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn parse_args<I, T>(args: I) -> Result<RunConfig, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let cli = Cli::try_parse_from(args)?;
    match cli.command {
        Command::Run(args) => Ok(RunConfig::from(args)),
    }
}

fn run(config: &RunConfig) -> Result<(), RunError> {
    tracing::info!(
        raw_power = config.raw_power,
        ambient_power = config.ambient_power,
        label = %config.label,
        "starting transmission reduction"
    );

    let rows = load_measurements(&config.input_path)?;
    let stage3 = reduce_rows(&rows, config.raw_power, config.ambient_power)?;
    tracing::info!(
        samples = stage3.reduced.len(),
        trials = stage3.matrix.n_trials,
        "reduced measurement table"
    );

    for row in &stage3.reduced {
        tracing::debug!(
            thickness = row.thickness,
            avg = row.transmission_avg,
            stdev = row.transmission_stdev,
            "reduced sample"
        );
    }

    let input = Stage4Input {
        input_path: &config.input_path,
        label: &config.label,
        wavelength_nm: config.wavelength_nm,
        reference: &stage3.reference,
        matrix: &stage3.matrix,
        reduced: &stage3.reduced,
        tool_name: env!("CARGO_PKG_NAME").to_string(),
        tool_version: env!("CARGO_PKG_VERSION").to_string(),
    };
    let paths = write_reports(&input, &config.out_dir, config.plot)?;

    println!("{}", paths.table.display());
    println!("{}", paths.report.display());
    println!("{}", paths.summary.display());
    if let Some(plot) = &paths.plot {
        println!("{}", plot.display());
    }

    Ok(())
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
