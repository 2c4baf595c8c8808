use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::{DateWindow, GeoPoint};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Station {
    pub id: String,

    #[validate(length(min = 1))]
    pub name: String,

    pub country: String,

    pub region: Option<String>,

    #[validate(range(min = -90.0, max = 90.0))]
    pub latitude: f64,

    #[validate(range(min = -180.0, max = 180.0))]
    pub longitude: f64,

    pub elevation: Option<i32>,

    /// First and last day the provider reports daily data for.
    pub daily_start: Option<NaiveDate>,
    pub daily_end: Option<NaiveDate>,
}

impl Station {
    pub fn new(id: String, name: String, country: String, latitude: f64, longitude: f64) -> Self {
        Self {
            id,
            name,
            country,
            region: None,
            latitude,
            longitude,
            elevation: None,
            daily_start: None,
            daily_end: None,
        }
    }

    pub fn with_daily_inventory(mut self, start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        self.daily_start = start;
        self.daily_end = end;
        self
    }

    /// Case-insensitive substring match against the station name.
    pub fn name_contains(&self, query: &str) -> bool {
        self.name.to_lowercase().contains(&query.to_lowercase())
    }

    pub fn has_daily_data(&self) -> bool {
        self.daily_start.is_some() || self.daily_end.is_some()
    }

    /// Whether the daily inventory overlaps `window`. Open ends count as unbounded.
    pub fn has_daily_data_in(&self, window: &DateWindow) -> bool {
        self.has_daily_data()
            && self.daily_start.map_or(true, |start| start <= window.end)
            && self.daily_end.map_or(true, |end| end > window.start)
    }

    pub fn point(&self) -> GeoPoint {
        GeoPoint::new(self.latitude, self.longitude)
    }
}

/// First station, in directory order, whose name contains `query`.
pub fn find_by_name<'a>(stations: &'a [Station], query: &str) -> Option<&'a Station> {
    stations.iter().find(|s| s.name_contains(query))
}
