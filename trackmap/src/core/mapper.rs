use crate::core::projection::{unproject, LatLon};
use crate::core::track::TrackGeometry;
use helpers::general::lin_rescale;
use helpers::geometry::{Bounds, Point2d, Vector2d};
use serde::Deserialize;
use std::fmt;

/// SimilarityTransform maps planar track coordinates into the spherical Mercator space (uniform
/// scale, rotation, translation).
///
/// * `s` - Scale factor
/// * `cos` - Cosine of the rotation angle
/// * `sin` - Sine of the rotation angle
/// * `tx` - (m) Translation along the projected x axis
/// * `ty` - (m) Translation along the projected y axis
#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
pub struct SimilarityTransform {
    pub s: f64,
    pub cos: f64,
    pub sin: f64,
    pub tx: f64,
    pub ty: f64,
}

impl SimilarityTransform {
    /// A transform is only usable if all of its components are finite.
    pub fn is_valid(&self) -> bool {
        [self.s, self.cos, self.sin, self.tx, self.ty]
            .iter()
            .all(|val| val.is_finite())
    }

    /// apply returns the projected coordinates of the inserted planar point.
    pub fn apply(&self, p: &Point2d) -> Point2d {
        p.as_vector2d()
            .rotate(self.cos, self.sin)
            .mult(self.s)
            .add(&Vector2d {
                dx: self.tx,
                dy: self.ty,
            })
            .as_point2d()
    }
}

/// BboxMapping linearly rescales planar coordinates from the bounding box of a source point set to
/// the bounding box of the track outline (x to longitude, y to latitude, both axes independently).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BboxMapping {
    pub src: Bounds,
    /// x: longitude, y: latitude
    pub dst: Bounds,
}

impl BboxMapping {
    pub fn new(source_points: &[Point2d], outline: &TrackGeometry) -> Option<BboxMapping> {
        Some(BboxMapping {
            src: Bounds::from_points(source_points)?,
            dst: outline.get_bounds()?,
        })
    }

    pub fn apply(&self, p: &Point2d) -> LatLon {
        LatLon {
            lat: lin_rescale(
                p.y,
                self.src.y_min,
                self.src.y_max,
                self.dst.y_min,
                self.dst.y_max,
            ),
            lon: lin_rescale(
                p.x,
                self.src.x_min,
                self.src.x_max,
                self.dst.x_min,
                self.dst.x_max,
            ),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CoordMapper {
    Transform(SimilarityTransform),
    Bbox(BboxMapping),
    Unavailable,
}

impl CoordMapper {
    /// new selects the mapping strategy for a set of planar points: the precomputed transform if
    /// there is a valid one, else the bounding box mapping into the track outline. If neither is
    /// possible the mapper is unavailable and maps nothing.
    pub fn new(
        transform: Option<&SimilarityTransform>,
        source_points: &[Point2d],
        outline: Option<&TrackGeometry>,
    ) -> CoordMapper {
        if let Some(transform) = transform.filter(|t| t.is_valid()) {
            return CoordMapper::Transform(*transform);
        }

        outline
            .and_then(|outline| BboxMapping::new(source_points, outline))
            .map_or(CoordMapper::Unavailable, CoordMapper::Bbox)
    }

    pub fn map_point(&self, p: &Point2d) -> Option<LatLon> {
        match self {
            CoordMapper::Transform(transform) => Some(unproject(&transform.apply(p))),
            CoordMapper::Bbox(bbox_mapping) => Some(bbox_mapping.apply(p)),
            CoordMapper::Unavailable => None,
        }
    }

    pub fn is_available(&self) -> bool {
        !matches!(self, CoordMapper::Unavailable)
    }
}

impl fmt::Display for CoordMapper {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CoordMapper::Transform(_) => write!(f, "precomputed similarity transform"),
            CoordMapper::Bbox(_) => write!(f, "bounding box fallback"),
            CoordMapper::Unavailable => write!(f, "unavailable"),
        }
    }
}
