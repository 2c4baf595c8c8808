use crate::error::{ExportError, Result};
use crate::models::window::doubling_window_sizes;
use crate::models::{find_by_name, DateWindow, Station};
use crate::provider::WeatherProvider;
use crate::utils::filename::temperature_export_path;
use crate::utils::progress::ProgressReporter;
use crate::writers::write_values;
use chrono::NaiveDate;
use std::path::PathBuf;
use tracing::debug;

/// One file written by the exporter.
#[derive(Debug, Clone, PartialEq)]
pub struct WindowExport {
    pub days: u32,
    pub path: PathBuf,
    pub rows: usize,
    pub missing: usize,
}

/// Writes daily mean temperatures for a city over each doubling window.
pub struct TemperatureExporter<'a, P: WeatherProvider> {
    provider: &'a P,
    output_dir: PathBuf,
    fill_gaps: bool,
}

impl<'a, P: WeatherProvider> TemperatureExporter<'a, P> {
    pub fn new(provider: &'a P) -> Self {
        Self {
            provider,
            output_dir: PathBuf::from("."),
            fill_gaps: false,
        }
    }

    pub fn with_output_dir(mut self, output_dir: PathBuf) -> Self {
        self.output_dir = output_dir;
        self
    }

    pub fn with_fill_gaps(mut self, fill_gaps: bool) -> Self {
        self.fill_gaps = fill_gaps;
        self
    }

    /// First station whose name contains `city`, ignoring case
    pub async fn resolve_station(&self, city: &str) -> Result<Station> {
        let stations = self.provider.fetch_stations().await?;
        debug!(stations = stations.len(), city, "Resolving city");

        let station = find_by_name(&stations, city)
            .cloned()
            .ok_or_else(|| ExportError::StationNotFound {
                query: city.to_string(),
            })?;

        debug!(
            city,
            station = %station.id,
            name = %station.name,
            latitude = station.latitude,
            longitude = station.longitude,
            "Resolved station"
        );
        Ok(station)
    }

    /// Fetch one window and write it. The file is only created once the data is in hand.
    pub async fn export_window(
        &self,
        city: &str,
        station: &Station,
        window: &DateWindow,
    ) -> Result<WindowExport> {
        let series = self.provider.fetch_daily(&station.point(), window).await?;
        let series = if self.fill_gaps {
            series.fill_gaps(window)
        } else {
            series
        };

        let path = temperature_export_path(&self.output_dir, city, window.days);
        let rows = write_values(&path, &series.average_temperatures())?;

        Ok(WindowExport {
            days: window.days,
            path,
            rows,
            missing: series.missing_count(),
        })
    }

    /// Resolve `city` once, then export every window ending on `end`.
    ///
    /// Stops at the first failure; files from earlier windows are kept.
    pub async fn export_all(
        &self,
        city: &str,
        end: NaiveDate,
        progress: Option<&ProgressReporter>,
    ) -> Result<Vec<WindowExport>> {
        if let Some(p) = progress {
            p.set_message(&format!("Looking up station for '{}'...", city));
        }
        let station = self.resolve_station(city).await?;

        let mut exports = Vec::new();
        for days in doubling_window_sizes() {
            let window = DateWindow::ending_at(end, days);
            if let Some(p) = progress {
                p.set_message(&format!("Fetching {} days of data...", days));
            }

            let export = self.export_window(city, &station, &window).await?;
            let message = format!("Data saved to {}", export.path.display());
            match progress {
                Some(p) => p.println(&message),
                None => println!("{}", message),
            }
            debug!(days, rows = export.rows, missing = export.missing, "Window exported");
            exports.push(export);
        }

        Ok(exports)
    }
}
