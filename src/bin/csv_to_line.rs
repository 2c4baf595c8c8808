use clap::Parser;
use meteo_export::cli::{run_converter, ConverterCli};
use meteo_export::error::Result;

fn main() -> Result<()> {
    let cli = ConverterCli::parse();
    run_converter(cli)
}
