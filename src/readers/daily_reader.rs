use crate::error::{ExportError, Result};
use crate::models::{DailyRecord, DailySeries, DateWindow};
use chrono::NaiveDate;
use tracing::debug;

use super::gunzip;

/// Column positions in Meteostat's daily bulk CSV:
/// date,tavg,tmin,tmax,prcp,snow,wdir,wspd,wpgt,pres,tsun
const DATE_COLUMN: usize = 0;
const TAVG_COLUMN: usize = 1;

pub struct DailyReader {
    date_format: String,
}

impl DailyReader {
    pub fn new() -> Self {
        Self {
            date_format: "%Y-%m-%d".to_string(),
        }
    }

    /// Parse a gzip-compressed daily file, keeping rows inside `window`
    pub fn parse(&self, station_id: &str, compressed: &[u8], window: &DateWindow) -> Result<DailySeries> {
        let csv = gunzip(compressed)?;
        self.parse_csv(station_id, &csv, window)
    }

    pub fn parse_csv(&self, station_id: &str, csv: &[u8], window: &DateWindow) -> Result<DailySeries> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(csv);

        let mut records = Vec::new();
        let mut total = 0usize;
        for result in reader.records() {
            let row = result?;
            total += 1;

            let date_field = row.get(DATE_COLUMN).unwrap_or_default();
            let date = NaiveDate::parse_from_str(date_field.trim(), &self.date_format)?;
            if !window.contains(date) {
                continue;
            }

            let tavg = parse_optional(row.get(TAVG_COLUMN))?;
            records.push(DailyRecord::new(date, tavg));
        }

        debug!(
            station = station_id,
            total,
            in_window = records.len(),
            days = window.days,
            "Parsed daily data"
        );
        Ok(DailySeries::new(station_id.to_string(), records))
    }
}

impl Default for DailyReader {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_optional(field: Option<&str>) -> Result<Option<f64>> {
    match field.map(str::trim) {
        None | Some("") => Ok(None),
        Some(text) => text
            .parse::<f64>()
            .map(Some)
            .map_err(|_| ExportError::InvalidFormat(format!("Invalid temperature: '{}'", text))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::write::GzEncoder;
    use flate2::Compression;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    const DAILY: &str = "\
2023-12-30,9.1,5.0,13.2,0.0,,,12.1,,1021.3,
2023-12-31,,4.1,11.0,,,,,,,
2024-01-01,10.4,6.2,14.8,1.2,,210,15.5,40.7,1015.0,
2024-01-02,11.0,7.0,15.1,,,,,,,
2024-01-03,8.7,3.9,12.6,,,,,,,
";

    fn window() -> DateWindow {
        DateWindow::ending_at(NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(), 3)
    }

    #[test]
    fn test_parse_csv_filters_window() -> Result<()> {
        let series = DailyReader::new().parse_csv("07650", DAILY.as_bytes(), &window())?;

        assert_eq!(series.station_id, "07650");
        assert_eq!(series.average_temperatures(), vec![None, Some(10.4), Some(11.0)]);
        Ok(())
    }

    #[test]
    fn test_parse_compressed() -> Result<()> {
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(DAILY.as_bytes())?;
        let compressed = encoder.finish()?;

        let series = DailyReader::new().parse("07650", &compressed, &window())?;
        assert_eq!(series.len(), 3);
        Ok(())
    }

    #[test]
    fn test_invalid_rows() {
        let reader = DailyReader::new();
        assert!(reader
            .parse_csv("x", b"2024-13-01,1.0\n", &window())
            .is_err());
        assert!(reader
            .parse_csv("x", b"2024-01-01,warm\n", &window())
            .is_err());
    }

    #[test]
    fn test_not_gzip() {
        assert!(DailyReader::new().parse("x", b"plain text", &window()).is_err());
    }
}
