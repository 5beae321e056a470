//! Shapes shared across resources.
//!
//! Most endpoints repeat the same few structures (a station list, a
//! coordinate, a per-station reading), differing only in the reading type.
//! They are defined once here and parameterized where needed.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// API metadata carried on nearly every envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiInfo {
    /// Health of the upstream API, e.g. `"healthy"`. Passed through as-is.
    pub status: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoCoordinate {
    pub latitude: f64,
    pub longitude: f64,
}

/// A named area or region with the coordinates of its map label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedArea {
    pub name: String,
    pub label_location: GeoCoordinate,
}

/// A weather station.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Station {
    pub id: String,
    /// Usually the same as `id`.
    pub device_id: String,
    pub name: String,
    pub location: GeoCoordinate,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StationMetadata {
    pub stations: Vec<Station>,
    /// What the reading measures, e.g. `"DBT 1M F"`.
    pub reading_type: String,
    /// Measurement unit, e.g. `"deg C"` or `"mm"`.
    pub reading_unit: String,
}

/// One reading from one station.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StationReading<T> {
    pub station_id: String,
    pub value: T,
}

/// All station readings taken at one point in time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimestampedReadings<T> {
    pub timestamp: String,
    pub readings: Vec<StationReading<T>>,
}

/// Envelope for the station-based datasets (air temperature, rainfall,
/// relative humidity, wind direction, wind speed).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StationReadings<T> {
    pub api_info: ApiInfo,
    pub metadata: StationMetadata,
    pub items: Vec<TimestampedReadings<T>>,
}

/// Readings keyed by region name (`national`, `north`, `south`, ...).
pub type RegionReadings<T> = BTreeMap<String, T>;

/// A validity window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Period {
    pub start: String,
    pub end: String,
}

/// Lowest and highest forecast values within a period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForecastRange {
    pub low: i64,
    pub high: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindForecast {
    /// Compass direction, e.g. `"NNE"`.
    pub direction: String,
    pub speed: ForecastRange,
}
