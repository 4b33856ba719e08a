use crate::core::projection::LatLon;
use helpers::geometry::{Bounds, Point2d};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct GeoJsonFeatureCollection {
    #[serde(default)]
    pub features: Vec<GeoJsonFeature>,
}

#[derive(Debug, Deserialize)]
pub struct GeoJsonFeature {
    pub geometry: Option<GeoJsonGeometry>,
}

/// Only line-like geometries describe a track outline, positions can carry an altitude that is
/// ignored.
#[derive(Debug, Deserialize)]
#[serde(tag = "type")]
pub enum GeoJsonGeometry {
    LineString { coordinates: Vec<Vec<f64>> },
    MultiLineString { coordinates: Vec<Vec<Vec<f64>>> },
    Polygon { coordinates: Vec<Vec<Vec<f64>>> },
    #[serde(other)]
    Unsupported,
}

impl GeoJsonGeometry {
    fn outline_positions(&self) -> &[Vec<f64>] {
        match self {
            GeoJsonGeometry::LineString { coordinates } => coordinates.as_slice(),
            GeoJsonGeometry::MultiLineString { coordinates }
            | GeoJsonGeometry::Polygon { coordinates } => coordinates
                .first()
                .map(|part| part.as_slice())
                .unwrap_or(&[]),
            GeoJsonGeometry::Unsupported => &[],
        }
    }
}

/// TrackGeometry is the track outline as an ordered sequence of geographic coordinates.
#[derive(Debug, Clone)]
pub struct TrackGeometry {
    pub outline: Vec<LatLon>,
}

impl TrackGeometry {
    /// from_geojson uses the first feature that contains a non-empty line-like geometry. Returns
    /// None if there is no such feature.
    pub fn from_geojson(collection: &GeoJsonFeatureCollection) -> Option<TrackGeometry> {
        collection
            .features
            .iter()
            .filter_map(|feature| feature.geometry.as_ref())
            .map(|geometry| {
                geometry
                    .outline_positions()
                    .iter()
                    .filter(|pos| pos.len() >= 2)
                    .map(|pos| LatLon {
                        lat: pos[1],
                        lon: pos[0],
                    })
                    .collect::<Vec<LatLon>>()
            })
            .find(|outline| !outline.is_empty())
            .map(|outline| TrackGeometry { outline })
    }

    /// get_bounds returns the bounding box of the outline with x: longitude, y: latitude.
    pub fn get_bounds(&self) -> Option<Bounds> {
        let points: Vec<Point2d> = self
            .outline
            .iter()
            .map(|latlon| Point2d {
                x: latlon.lon,
                y: latlon.lat,
            })
            .collect();

        Bounds::from_points(&points)
    }
}
