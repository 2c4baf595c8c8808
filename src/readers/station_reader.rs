use crate::error::Result;
use crate::models::Station;
use chrono::NaiveDate;
use serde::Deserialize;
use std::collections::HashMap;
use tracing::{debug, warn};
use validator::Validate;

use super::gunzip;

// --- Meteostat station directory (stations/lite.json.gz) ---

#[derive(Debug, Deserialize)]
struct RawStation {
    id: String,
    #[serde(default)]
    name: HashMap<String, String>,
    #[serde(default)]
    country: String,
    region: Option<String>,
    location: RawLocation,
    #[serde(default)]
    inventory: Option<RawInventory>,
}

#[derive(Debug, Deserialize)]
struct RawLocation {
    latitude: f64,
    longitude: f64,
    elevation: Option<i32>,
}

#[derive(Debug, Deserialize)]
struct RawInventory {
    daily: Option<RawDateRange>,
}

#[derive(Debug, Deserialize)]
struct RawDateRange {
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
}

/// Language key of the station name used for matching
const NAME_LANGUAGE: &str = "en";

pub struct StationReader;

impl StationReader {
    pub fn new() -> Self {
        Self
    }

    /// Parse the gzip-compressed station directory
    pub fn parse_directory(&self, compressed: &[u8]) -> Result<Vec<Station>> {
        let json = gunzip(compressed)?;
        self.parse_json(&json)
    }

    /// Parse an uncompressed station directory, keeping file order
    pub fn parse_json(&self, json: &[u8]) -> Result<Vec<Station>> {
        let raw: Vec<RawStation> = serde_json::from_slice(json)?;
        let total = raw.len();

        let mut stations = Vec::with_capacity(total);
        for raw_station in raw {
            let station = self.convert(raw_station);
            match station.validate() {
                Ok(()) => stations.push(station),
                Err(e) => warn!(station = %station.id, error = %e, "Skipping invalid station"),
            }
        }

        debug!(total, kept = stations.len(), "Parsed station directory");
        Ok(stations)
    }

    fn convert(&self, raw: RawStation) -> Station {
        let name = raw.name.get(NAME_LANGUAGE).cloned().unwrap_or_default();

        let (daily_start, daily_end) = raw
            .inventory
            .and_then(|inv| inv.daily)
            .map_or((None, None), |range| (range.start, range.end));

        let mut station = Station::new(
            raw.id,
            name,
            raw.country,
            raw.location.latitude,
            raw.location.longitude,
        )
        .with_daily_inventory(daily_start, daily_end);
        station.region = raw.region;
        station.elevation = raw.location.elevation;
        station
    }
}

impl Default for StationReader {
    fn default() -> Self {
        Self::new()
    }
}
