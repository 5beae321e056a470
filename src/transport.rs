//! Transport datasets: carpark lots, taxi positions and traffic cameras.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::client::Client;
use crate::error::Result;
use crate::models::{ApiInfo, GeoCoordinate};
use crate::query::QueryOption;
use crate::util::guess_filename_from_url;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarparkAvailability {
    pub api_info: ApiInfo,
    pub items: Vec<CarparkSnapshot>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarparkSnapshot {
    /// Time the data was acquired.
    pub timestamp: String,
    pub carpark_data: Vec<Carpark>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Carpark {
    pub carpark_number: String,
    pub update_datetime: String,
    pub carpark_info: Vec<CarparkLots>,
}

/// Lot counts for one lot type. Counts are strings upstream and are kept
/// that way.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarparkLots {
    pub total_lots: String,
    pub lot_type: String,
    pub lots_available: String,
}

/// Available taxis as a GeoJSON `FeatureCollection`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxiAvailability {
    #[serde(rename = "type")]
    pub kind: String,
    pub crs: CoordinateReferenceSystem,
    pub features: Vec<TaxiFeature>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoordinateReferenceSystem {
    #[serde(rename = "type")]
    pub kind: String,
    pub properties: CrsProperties,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrsProperties {
    #[serde(rename = "type")]
    pub kind: String,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxiFeature {
    #[serde(rename = "type")]
    pub kind: String,
    pub geometry: TaxiGeometry,
    pub properties: TaxiProperties,
}

/// A GeoJSON `MultiPoint`; each position is `[longitude, latitude]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxiGeometry {
    #[serde(rename = "type")]
    pub kind: String,
    pub coordinates: Vec<[f64; 2]>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxiProperties {
    pub timestamp: String,
    pub taxi_count: i64,
    pub api_info: ApiInfo,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrafficImages {
    pub api_info: ApiInfo,
    pub items: Vec<TrafficSnapshot>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrafficSnapshot {
    pub timestamp: String,
    pub cameras: Vec<TrafficCamera>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrafficCamera {
    /// Time the image was taken.
    pub timestamp: String,
    /// Image URL.
    pub image: String,
    pub location: GeoCoordinate,
    pub camera_id: String,
    pub image_metadata: ImageMetadata,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageMetadata {
    pub height: i64,
    pub width: i64,
    pub md5: String,
}

impl Client {
    /// Lot availability across all HDB carparks.
    pub fn carpark_availability(&self) -> Result<CarparkAvailability> {
        self.get_resource(
            "carpark-availability",
            "/v1/transport/carpark-availability/",
            &[],
        )
    }

    /// Positions of all available taxis.
    pub fn taxi_availability(&self, options: &[QueryOption]) -> Result<TaxiAvailability> {
        self.get_resource(
            "taxi-availability",
            "/v1/transport/taxi-availability/",
            options,
        )
    }

    /// Latest images from the traffic cameras.
    pub fn traffic_images(&self, options: &[QueryOption]) -> Result<TrafficImages> {
        self.get_resource("traffic-images", "/v1/transport/traffic-images/", options)
    }

    /// Saves a camera's current image into `dir` and returns the file path.
    ///
    /// The file is named after the image URL, or `<camera_id>.jpg` when the
    /// URL has no usable file name.
    pub fn download_camera_image(&self, camera: &TrafficCamera, dir: &Path) -> Result<PathBuf> {
        let name = guess_filename_from_url(&camera.image)
            .unwrap_or_else(|| format!("{}.jpg", camera.camera_id));
        self.download(&camera.image, &dir.join(name))
    }
}
