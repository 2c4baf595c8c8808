use crate::cli::args::{ConverterCli, ExporterCli, LogArgs};
use crate::config::ProviderConfig;
use crate::error::Result;
use crate::processors::{csv_to_line, TemperatureExporter};
use crate::provider::MeteostatClient;
use crate::utils::constants::{CONVERTER_INPUT_FILE, CONVERTER_OUTPUT_FILE};
use crate::utils::progress::ProgressReporter;
use chrono::Local;
use clap::error::ErrorKind;
use clap::Parser;
use std::fs::File;
use std::path::Path;
use std::sync::Mutex;
use tracing::{debug, info};
use tracing_subscriber::{fmt, EnvFilter};

pub const EXPORTER_USAGE: &str = "Usage: export-temps <City Name>";

/// Set up the global subscriber: stderr by default, or the given log file.
pub fn init_logging(args: &LogArgs) -> Result<()> {
    let default_level = if args.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let builder = fmt().with_env_filter(filter).with_target(false);
    let installed = match &args.log_file {
        Some(path) => {
            let file = File::create(path)?;
            builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
        }
        None => builder.with_writer(std::io::stderr).try_init(),
    };

    // A subscriber may already be installed (e.g. in tests)
    if installed.is_err() {
        debug!("Global subscriber already set");
    }
    Ok(())
}

/// Parse exporter arguments, printing the usage line and exiting with 1 on misuse.
pub fn parse_exporter_args() -> ExporterCli {
    match ExporterCli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(_) => {
            println!("{}", EXPORTER_USAGE);
            std::process::exit(1);
        }
    }
}

pub fn run_converter(cli: ConverterCli) -> Result<()> {
    init_logging(&cli.log)?;

    let count = csv_to_line(Path::new(CONVERTER_INPUT_FILE), Path::new(CONVERTER_OUTPUT_FILE))?;
    info!(values = count, output = CONVERTER_OUTPUT_FILE, "Conversion complete");
    Ok(())
}

pub async fn run_exporter(cli: ExporterCli) -> Result<()> {
    init_logging(&cli.log)?;

    let config = ProviderConfig::load()?;
    debug!(base_url = %config.base_url(), "Using Meteostat bulk data");

    if !cli.output_dir.as_os_str().is_empty() {
        std::fs::create_dir_all(&cli.output_dir)?;
    }

    let client = MeteostatClient::new(config)?;
    let exporter = TemperatureExporter::new(&client)
        .with_output_dir(cli.output_dir)
        .with_fill_gaps(cli.fill_gaps);

    let progress = ProgressReporter::new_spinner("Fetching station directory...", cli.log.verbose);
    let exports = exporter
        .export_all(&cli.city, Local::now().date_naive(), Some(&progress))
        .await?;

    let rows: usize = exports.iter().map(|e| e.rows).sum();
    progress.finish_with_message(&format!("Exported {} files ({} rows)", exports.len(), rows));
    Ok(())
}
