use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::DateWindow;
use crate::utils::constants::MISSING_VALUE;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyRecord {
    pub date: NaiveDate,
    /// Daily mean temperature in °C.
    pub tavg: Option<f64>,
}

impl DailyRecord {
    pub fn new(date: NaiveDate, tavg: Option<f64>) -> Self {
        Self { date, tavg }
    }
}

/// Daily records for one station, oldest first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DailySeries {
    pub station_id: String,
    pub records: Vec<DailyRecord>,
}

impl DailySeries {
    pub fn new(station_id: String, mut records: Vec<DailyRecord>) -> Self {
        records.sort_by_key(|r| r.date);
        Self {
            station_id,
            records,
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn average_temperatures(&self) -> Vec<Option<f64>> {
        self.records.iter().map(|r| r.tavg).collect()
    }

    pub fn missing_count(&self) -> usize {
        self.records.iter().filter(|r| r.tavg.is_none()).count()
    }

    /// One record per date of `window`; dates the provider skipped get no value.
    pub fn fill_gaps(&self, window: &DateWindow) -> DailySeries {
        let by_date: HashMap<NaiveDate, Option<f64>> =
            self.records.iter().map(|r| (r.date, r.tavg)).collect();

        let records = window
            .dates()
            .map(|date| DailyRecord::new(date, by_date.get(&date).copied().flatten()))
            .collect();

        DailySeries {
            station_id: self.station_id.clone(),
            records,
        }
    }
}

/// Render a temperature for output: `nan` when missing, otherwise always with
/// a fractional part (`12.0`, `-3.4`).
pub fn format_temperature(value: Option<f64>) -> String {
    match value {
        Some(v) if v.is_finite() => {
            let text = v.to_string();
            if text.contains('.') {
                text
            } else {
                format!("{}.0", text)
            }
        }
        _ => MISSING_VALUE.to_string(),
    }
}
