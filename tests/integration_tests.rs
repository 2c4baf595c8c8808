use meteo_export::models::find_by_name;
use meteo_export::readers::StationReader;
use meteo_export::utils::constants::{CONVERTER_INPUT_FILE, CONVERTER_OUTPUT_FILE};
use pretty_assertions::assert_eq;
use std::process::Command;
use tempfile::TempDir;

fn converter() -> Command {
    Command::new(env!("CARGO_BIN_EXE_csv-to-line"))
}

fn exporter() -> Command {
    Command::new(env!("CARGO_BIN_EXE_export-temps"))
}

#[test]
fn test_converter_cli() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    std::fs::write(
        temp_dir.path().join(CONVERTER_INPUT_FILE),
        "14.2,a\n15.0,b\n13.9,c\n",
    )
    .unwrap();

    let status = converter().current_dir(temp_dir.path()).status().unwrap();
    assert!(status.success());

    let output_path = temp_dir.path().join(CONVERTER_OUTPUT_FILE);
    let first = std::fs::read(&output_path).unwrap();
    assert_eq!(String::from_utf8_lossy(&first), "14.2,15.0,13.9");

    // Second run gives byte-identical output
    let status = converter().current_dir(temp_dir.path()).status().unwrap();
    assert!(status.success());
    assert_eq!(std::fs::read(&output_path).unwrap(), first);
}

#[test]
fn test_converter_fails_without_input() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");

    let output = converter().current_dir(temp_dir.path()).output().unwrap();

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("InputNotFound"));
    assert!(!temp_dir.path().join(CONVERTER_OUTPUT_FILE).exists());
}

#[test]
fn test_converter_fails_on_empty_row() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    std::fs::write(temp_dir.path().join(CONVERTER_INPUT_FILE), "1\n\n2\n").unwrap();

    let status = converter().current_dir(temp_dir.path()).status().unwrap();

    assert!(!status.success());
    assert!(!temp_dir.path().join(CONVERTER_OUTPUT_FILE).exists());
}

#[test]
fn test_exporter_usage_without_city() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");

    let output = exporter().current_dir(temp_dir.path()).output().unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        String::from_utf8_lossy(&output.stdout).trim(),
        "Usage: export-temps <City Name>"
    );
    assert_eq!(std::fs::read_dir(temp_dir.path()).unwrap().count(), 0);
}

#[test]
fn test_exporter_network_failure_writes_nothing() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");

    let status = exporter()
        .arg("Marseille")
        .current_dir(temp_dir.path())
        .env("METEO_EXPORT_BASE_URL", "http://127.0.0.1:9")
        .env("METEO_EXPORT_TIMEOUT_SECS", "2")
        .status()
        .unwrap();

    assert!(!status.success());
    assert_eq!(std::fs::read_dir(temp_dir.path()).unwrap().count(), 0);
}

#[test]
fn test_exporter_default_level_keeps_progress_quiet() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");

    let output = exporter()
        .arg("Marseille")
        .current_dir(temp_dir.path())
        .env_remove("RUST_LOG")
        .env("METEO_EXPORT_BASE_URL", "http://127.0.0.1:9")
        .env("METEO_EXPORT_TIMEOUT_SECS", "2")
        .output()
        .unwrap();

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!output.status.success());
    assert!(!stderr.contains("Using Meteostat bulk data"));
}

#[test]
fn test_station_lookup_from_directory() {
    let json = r#"[
        {"id": "10637", "name": {"en": "Frankfurt Airport"}, "country": "DE", "region": "HE",
         "location": {"latitude": 50.05, "longitude": 8.6, "elevation": 111}},
        {"id": "07650", "name": {"en": "Marseille / Marignane"}, "country": "FR", "region": "PAC",
         "location": {"latitude": 43.4333, "longitude": 5.2167, "elevation": 9}}
    ]"#;
    let stations = StationReader::new().parse_json(json.as_bytes()).unwrap();

    let exact = find_by_name(&stations, "Marseille").unwrap();
    let lower = find_by_name(&stations, "marseille").unwrap();
    let upper = find_by_name(&stations, "MARSEILLE").unwrap();

    assert_eq!(exact.id, "07650");
    assert_eq!(exact, lower);
    assert_eq!(exact, upper);
    assert_eq!(exact.point().latitude, 43.4333);
}
