use meteo_export::cli::{parse_exporter_args, run_exporter};
use meteo_export::error::Result;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = parse_exporter_args();
    run_exporter(cli).await
}
