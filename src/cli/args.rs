use clap::{Args, Parser};
use std::path::PathBuf;

/// Flags shared by both tools
#[derive(Args, Debug, Clone, Default)]
pub struct LogArgs {
    #[arg(short, long, help = "Enable verbose logging")]
    pub verbose: bool,

    #[arg(long, help = "Log file path")]
    pub log_file: Option<PathBuf>,
}

#[derive(Parser, Debug)]
#[command(name = "csv-to-line")]
#[command(
    about = "Join the first column of Marseille_average_temps_for_5_years.csv into Marseille_data.txt"
)]
#[command(version)]
pub struct ConverterCli {
    #[command(flatten)]
    pub log: LogArgs,
}

#[derive(Parser, Debug)]
#[command(name = "export-temps")]
#[command(about = "Export Meteostat daily average temperatures for a city over 2^10..2^15 day windows")]
#[command(version)]
pub struct ExporterCli {
    #[arg(value_name = "City Name", help = "City to look up, matched case-insensitively against station names")]
    pub city: String,

    #[arg(long, help = "Write one line per calendar day, using nan for days without a record")]
    pub fill_gaps: bool,

    #[arg(short, long, default_value = ".", help = "Directory for the exported CSV files")]
    pub output_dir: PathBuf,

    #[command(flatten)]
    pub log: LogArgs,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definitions() {
        ConverterCli::command().debug_assert();
        ExporterCli::command().debug_assert();
    }

    #[test]
    fn test_exporter_args() {
        let cli = ExporterCli::try_parse_from(["export-temps", "Marseille", "--fill-gaps", "-v"]).unwrap();
        assert_eq!(cli.city, "Marseille");
        assert!(cli.fill_gaps);
        assert!(cli.log.verbose);
        assert_eq!(cli.output_dir, PathBuf::from("."));
    }

    #[test]
    fn test_exporter_requires_city() {
        assert!(ExporterCli::try_parse_from(["export-temps"]).is_err());
        assert!(ExporterCli::try_parse_from(["export-temps", "Marseille", "Lyon"]).is_err());
    }

    #[test]
    fn test_converter_takes_no_positionals() {
        assert!(ConverterCli::try_parse_from(["csv-to-line"]).is_ok());
        assert!(ConverterCli::try_parse_from(["csv-to-line", "input.csv"]).is_err());
    }
}
