use helpers::geometry::Point2d;
use serde::Serialize;
use std::f64::consts::{FRAC_PI_2, FRAC_PI_4};

/// (m) Earth radius of the spherical Mercator projection (EPSG:3857)
pub const EARTH_RADIUS: f64 = 6_378_137.0;

/// (deg) Latitude limit of the spherical Mercator projection, beyond that the projection diverges
pub const MAX_LATITUDE: f64 = 85.051_128_779_806_6;

/// Geographic coordinates in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LatLon {
    pub lat: f64,
    pub lon: f64,
}

/// unproject converts a point of the spherical Mercator space (m) to geographic coordinates.
pub fn unproject(p: &Point2d) -> LatLon {
    LatLon {
        lat: (2.0 * (p.y / EARTH_RADIUS).exp().atan() - FRAC_PI_2).to_degrees(),
        lon: (p.x / EARTH_RADIUS).to_degrees(),
    }
}

/// project converts geographic coordinates to a point of the spherical Mercator space (m). The
/// latitude is limited to the valid range of the projection.
pub fn project(latlon: &LatLon) -> Point2d {
    let lat = latlon.lat.max(-MAX_LATITUDE).min(MAX_LATITUDE).to_radians();

    Point2d {
        x: EARTH_RADIUS * latlon.lon.to_radians(),
        y: EARTH_RADIUS * (FRAC_PI_4 + lat / 2.0).tan().ln(),
    }
}
