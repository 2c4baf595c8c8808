pub mod args;
pub mod commands;

pub use args::{ConverterCli, ExporterCli, LogArgs};
pub use commands::{init_logging, parse_exporter_args, run_converter, run_exporter};
