/// Converter file names
pub const CONVERTER_INPUT_FILE: &str = "Marseille_average_temps_for_5_years.csv";
pub const CONVERTER_OUTPUT_FILE: &str = "Marseille_data.txt";
pub const FIELD_SEPARATOR: &str = ",";

/// Exporter window exponents: 2^10 ..= 2^15 days
pub const MIN_WINDOW_EXPONENT: u32 = 10;
pub const MAX_WINDOW_EXPONENT: u32 = 15;

/// Rendering of a missing temperature reading
pub const MISSING_VALUE: &str = "nan";

/// Meteostat bulk data defaults
pub const DEFAULT_BASE_URL: &str = "https://bulk.meteostat.net/v2";
pub const STATIONS_PATH: &str = "stations/lite.json.gz";
pub const DAILY_PATH: &str = "daily";
pub const DEFAULT_MAX_DISTANCE_KM: f64 = 35.0;
pub const DEFAULT_STATION_LIMIT: u64 = 4;
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Environment variable prefix for provider settings
pub const ENV_PREFIX: &str = "METEO_EXPORT";
