//! Environment datasets: weather forecasts, air quality and station readings.

use serde::{Deserialize, Serialize};

use crate::client::Client;
use crate::error::Result;
use crate::models::{
    ApiInfo, ForecastRange, NamedArea, Period, RegionReadings, StationReadings, WindForecast,
};
use crate::query::QueryOption;

/// Two-hour nowcast per area.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TwoHourWeatherForecast {
    pub api_info: ApiInfo,
    pub area_metadata: Vec<NamedArea>,
    pub items: Vec<TwoHourForecastItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TwoHourForecastItem {
    pub update_timestamp: String,
    pub timestamp: String,
    pub valid_period: Period,
    pub forecasts: Vec<AreaForecast>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AreaForecast {
    pub area: String,
    pub forecast: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TwentyFourHourWeatherForecast {
    pub api_info: ApiInfo,
    pub items: Vec<TwentyFourHourForecastItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TwentyFourHourForecastItem {
    pub update_timestamp: String,
    pub timestamp: String,
    pub valid_period: Period,
    pub general: GeneralForecast,
    /// Breakdown of the forecast over regions and sub-periods.
    pub periods: Vec<RegionalForecast>,
}

/// Island-wide outlook for the whole valid period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneralForecast {
    pub forecast: String,
    pub relative_humidity: ForecastRange,
    pub temperature: ForecastRange,
    pub wind: WindForecast,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionalForecast {
    pub time: Period,
    /// Forecast text keyed by region (`west`, `east`, `central`, `south`, `north`).
    pub regions: RegionReadings<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FourDayWeatherForecast {
    pub api_info: ApiInfo,
    pub items: Vec<FourDayForecastItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FourDayForecastItem {
    pub update_timestamp: String,
    pub timestamp: String,
    pub forecasts: Vec<DailyForecast>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyForecast {
    pub date: String,
    pub timestamp: String,
    pub forecast: String,
    pub relative_humidity: ForecastRange,
    pub temperature: ForecastRange,
    pub wind: WindForecast,
}

/// Envelope for the regional air-quality datasets, parameterized by the
/// readings block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AirQuality<R> {
    pub api_info: ApiInfo,
    #[serde(default)]
    pub region_metadata: Vec<NamedArea>,
    pub items: Vec<AirQualityItem<R>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AirQualityItem<R> {
    pub timestamp: String,
    pub update_timestamp: String,
    pub readings: R,
}

/// Pollutant Standards Index and its sub-components, per region.
///
/// The carbon monoxide readings are fractional; every other component is
/// reported as a whole number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PsiReadings {
    pub psi_twenty_four_hourly: RegionReadings<i64>,

    pub pm10_sub_index: RegionReadings<i64>,
    pub pm10_twenty_four_hourly: RegionReadings<i64>,

    pub pm25_sub_index: RegionReadings<i64>,
    pub pm25_twenty_four_hourly: RegionReadings<i64>,

    pub o3_sub_index: RegionReadings<i64>,
    pub o3_eight_hour_max: RegionReadings<i64>,

    pub co_sub_index: RegionReadings<f64>,
    pub co_eight_hour_max: RegionReadings<f64>,

    pub so2_sub_index: RegionReadings<i64>,
    pub so2_twenty_four_hourly: RegionReadings<i64>,

    // No sub-index is published for NO2.
    pub no2_one_hour_max: RegionReadings<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pm25Readings {
    pub pm25_one_hourly: RegionReadings<i64>,
}

pub type Psi = AirQuality<PsiReadings>;
pub type Pm25 = AirQuality<Pm25Readings>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UvIndex {
    pub api_info: ApiInfo,
    pub items: Vec<UvIndexItem>,
}

/// UV index readings for the day, up to `timestamp`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UvIndexItem {
    pub timestamp: String,
    pub update_timestamp: String,
    pub index: Vec<UvIndexReading>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UvIndexReading {
    pub timestamp: String,
    pub value: i64,
}

pub type AirTemperature = StationReadings<f64>;
pub type Rainfall = StationReadings<f64>;
pub type RelativeHumidity = StationReadings<f64>;
pub type WindDirection = StationReadings<f64>;
pub type WindSpeed = StationReadings<f64>;

impl Client {
    /// Two-hour weather forecast, updated half-hourly.
    pub fn two_hour_weather_forecast(
        &self,
        options: &[QueryOption],
    ) -> Result<TwoHourWeatherForecast> {
        self.get_resource(
            "2-hour-weather-forecast",
            "/v1/environment/2-hour-weather-forecast/",
            options,
        )
    }

    /// 24-hour weather forecast, updated multiple times a day.
    pub fn twenty_four_hour_weather_forecast(
        &self,
        options: &[QueryOption],
    ) -> Result<TwentyFourHourWeatherForecast> {
        self.get_resource(
            "24-hour-weather-forecast",
            "/v1/environment/24-hour-weather-forecast/",
            options,
        )
    }

    /// 4-day weather outlook, updated twice a day.
    pub fn four_day_weather_forecast(
        &self,
        options: &[QueryOption],
    ) -> Result<FourDayWeatherForecast> {
        self.get_resource(
            "4-day-weather-forecast",
            "/v1/environment/4-day-weather-forecast/",
            options,
        )
    }

    /// Per-minute air temperature readings across stations.
    pub fn air_temperature(&self, options: &[QueryOption]) -> Result<AirTemperature> {
        self.get_resource("air-temperature", "/v1/environment/air-temperature/", options)
    }

    /// Hourly PM2.5 concentration per region.
    pub fn pm25(&self, options: &[QueryOption]) -> Result<Pm25> {
        self.get_resource("pm25", "/v1/environment/pm25/", options)
    }

    /// Pollutant Standards Index per region.
    pub fn psi(&self, options: &[QueryOption]) -> Result<Psi> {
        self.get_resource("psi", "/v1/environment/psi/", options)
    }

    /// Five-minute rainfall readings across stations.
    pub fn rainfall(&self, options: &[QueryOption]) -> Result<Rainfall> {
        self.get_resource("rainfall", "/v1/environment/rainfall/", options)
    }

    pub fn relative_humidity(&self, options: &[QueryOption]) -> Result<RelativeHumidity> {
        self.get_resource(
            "relative-humidity",
            "/v1/environment/relative-humidity/",
            options,
        )
    }

    /// UV index, updated hourly between 7 AM and 7 PM.
    pub fn uv_index(&self, options: &[QueryOption]) -> Result<UvIndex> {
        self.get_resource("uv-index", "/v1/environment/uv-index/", options)
    }

    pub fn wind_direction(&self, options: &[QueryOption]) -> Result<WindDirection> {
        self.get_resource("wind-direction", "/v1/environment/wind-direction/", options)
    }

    pub fn wind_speed(&self, options: &[QueryOption]) -> Result<WindSpeed> {
        self.get_resource("wind-speed", "/v1/environment/wind-speed/", options)
    }
}
