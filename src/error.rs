use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ExportError>;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status} from {url}")]
    HttpStatus {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Date parsing error: {0}")]
    DateParse(#[from] chrono::ParseError),

    #[error("Input file not found: {}", path.display())]
    InputNotFound { path: PathBuf },

    #[error("Row {line} has no fields")]
    EmptyRow { line: usize },

    #[error("Could not write {}: {source}", path.display())]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("No station name contains '{query}'")]
    StationNotFound { query: String },

    #[error("No station with daily data within {radius_km} km of ({lat}, {lon})")]
    NoStationNearby { radius_km: f64, lat: f64, lon: f64 },

    #[error("None of the {stations_tried} stations near ({lat}, {lon}) returned daily data")]
    NoDailyData {
        lat: f64,
        lon: f64,
        stations_tried: usize,
    },

    #[error("Invalid data format: {0}")]
    InvalidFormat(String),
}

impl ExportError {
    pub fn config(message: impl Into<String>) -> Self {
        ExportError::Config(config::ConfigError::Message(message.into()))
    }
}
