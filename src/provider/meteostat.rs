use crate::config::ProviderConfig;
use crate::error::{ExportError, Result};
use crate::models::{DailySeries, DateWindow, GeoPoint, Station};
use crate::readers::{DailyReader, StationReader};
use crate::utils::constants::{DAILY_PATH, STATIONS_PATH};
use crate::utils::coordinates::validate_coordinates;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{Mutex, OnceCell};
use tracing::{debug, warn};

use super::WeatherProvider;

/// Client for the Meteostat bulk data service.
pub struct MeteostatClient {
    client: reqwest::Client,
    config: ProviderConfig,
    stations: OnceCell<Vec<Station>>,
    /// Compressed daily files by station id; every window reuses the same download
    daily_files: Mutex<HashMap<String, Arc<Vec<u8>>>>,
}

impl MeteostatClient {
    pub fn new(config: ProviderConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            config,
            stations: OnceCell::new(),
            daily_files: Mutex::new(HashMap::new()),
        })
    }

    pub fn stations_url(&self) -> String {
        format!("{}/{}", self.config.base_url(), STATIONS_PATH)
    }

    pub fn daily_url(&self, station_id: &str) -> String {
        format!("{}/{}/{}.csv.gz", self.config.base_url(), DAILY_PATH, station_id)
    }

    async fn download(&self, url: &str) -> Result<Vec<u8>> {
        debug!(url, "GET");
        let resp = self.client.get(url).send().await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(ExportError::HttpStatus {
                url: url.to_string(),
                status,
            });
        }

        Ok(resp.bytes().await?.to_vec())
    }

    /// Station directory, downloaded on first use
    async fn directory(&self) -> Result<&[Station]> {
        let stations = self
            .stations
            .get_or_try_init(|| async {
                let url = self.stations_url();
                debug!(url = %url, "Fetching station directory");
                let bytes = self.download(&url).await?;
                StationReader::new().parse_directory(&bytes)
            })
            .await?;
        Ok(stations.as_slice())
    }

    async fn daily_for_station(&self, station_id: &str, window: &DateWindow) -> Result<DailySeries> {
        let cached = self.daily_files.lock().await.get(station_id).cloned();
        let bytes = match cached {
            Some(bytes) => bytes,
            None => {
                let bytes = Arc::new(self.download(&self.daily_url(station_id)).await?);
                self.daily_files
                    .lock()
                    .await
                    .insert(station_id.to_string(), Arc::clone(&bytes));
                bytes
            }
        };
        DailyReader::new().parse(station_id, &bytes, window)
    }
}

#[async_trait]
impl WeatherProvider for MeteostatClient {
    async fn fetch_stations(&self) -> Result<Vec<Station>> {
        Ok(self.directory().await?.to_vec())
    }

    async fn fetch_daily(&self, point: &GeoPoint, window: &DateWindow) -> Result<DailySeries> {
        validate_coordinates(point.latitude, point.longitude)?;
        let stations = self.directory().await?;
        let candidates = nearby_candidates(
            stations,
            point,
            window,
            self.config.max_distance_km,
            self.config.station_limit as usize,
        );

        if candidates.is_empty() {
            return Err(ExportError::NoStationNearby {
                radius_km: self.config.max_distance_km,
                lat: point.latitude,
                lon: point.longitude,
            });
        }

        for (station, distance_km) in &candidates {
            match self.daily_for_station(&station.id, window).await {
                Ok(series) => {
                    debug!(
                        station = %station.id,
                        name = %station.name,
                        distance_km = *distance_km,
                        records = series.len(),
                        days = window.days,
                        "Fetched daily data"
                    );
                    return Ok(series);
                }
                Err(e) => warn!(station = %station.id, error = %e, "No daily data from station"),
            }
        }

        Err(ExportError::NoDailyData {
            lat: point.latitude,
            lon: point.longitude,
            stations_tried: candidates.len(),
        })
    }
}

/// Stations with daily data covering `window` within `max_distance_km` of `point`,
/// nearest first.
pub fn nearby_candidates<'a>(
    stations: &'a [Station],
    point: &GeoPoint,
    window: &DateWindow,
    max_distance_km: f64,
    limit: usize,
) -> Vec<(&'a Station, f64)> {
    let mut nearby: Vec<(&Station, f64)> = stations
        .iter()
        .filter(|s| s.has_daily_data_in(window))
        .map(|s| (s, point.distance_km(&s.point())))
        .filter(|(_, distance)| *distance <= max_distance_km)
        .collect();

    nearby.sort_by(|a, b| a.1.total_cmp(&b.1));
    nearby.truncate(limit);
    nearby
}
