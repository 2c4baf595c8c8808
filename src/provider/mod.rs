pub mod meteostat;

pub use meteostat::{nearby_candidates, MeteostatClient};

use crate::error::Result;
use crate::models::{DailySeries, DateWindow, GeoPoint, Station};
use async_trait::async_trait;

/// Source of station metadata and daily observations.
#[async_trait]
pub trait WeatherProvider: Send + Sync {
    /// The full station directory, in the provider's order.
    async fn fetch_stations(&self) -> Result<Vec<Station>>;

    /// Daily records for the location closest to `point` inside `window`.
    async fn fetch_daily(&self, point: &GeoPoint, window: &DateWindow) -> Result<DailySeries>;
}
