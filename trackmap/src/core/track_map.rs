use crate::core::corners::CornerPoint;
use crate::core::mapper::CoordMapper;
use crate::core::projection::LatLon;
use crate::core::telemetry::TelemetryLap;
use crate::core::track::TrackGeometry;
use crate::pre::read_data::TrackData;
use helpers::geometry::{Bounds, Point2d};
use tracing::{debug, info};

#[derive(Debug, Clone)]
pub struct MappedCorner {
    pub corner: CornerPoint,
    pub pos: LatLon,
}

/// TrackMap contains the geographic positions of all planar input data. The mapping is done once
/// when the track map is created.
///
/// * `telemetry_positions` - Index-aligned with the telemetry samples, None for samples without a
/// position (empty if no mapping is possible)
#[derive(Debug, Clone)]
pub struct TrackMap {
    pub name: String,
    pub geometry: Option<TrackGeometry>,
    pub corners: Vec<MappedCorner>,
    pub corner_mapper: CoordMapper,
    pub telemetry: Option<TelemetryLap>,
    pub telemetry_positions: Vec<Option<LatLon>>,
    pub telemetry_mapper: CoordMapper,
}

impl TrackMap {
    pub fn new(name: &str, track_data: TrackData) -> TrackMap {
        let TrackData {
            transform,
            geometry,
            corners,
            telemetry,
        } = track_data;

        // CORNERS ---------------------------------------------------------------------------------
        let corner_points = corners
            .map(|corner_data| corner_data.get_corner_points())
            .unwrap_or_default();
        let corner_coords: Vec<Point2d> = corner_points.iter().map(|c| c.coords).collect();
        let corner_mapper = CoordMapper::new(transform.as_ref(), &corner_coords, geometry.as_ref());

        if let Some(bounds) = Bounds::from_points(&corner_coords) {
            debug!(
                "Corner data contains {} corners, X [{:.1}, {:.1}], Y [{:.1}, {:.1}]",
                corner_coords.len(),
                bounds.x_min,
                bounds.x_max,
                bounds.y_min,
                bounds.y_max
            );
        }

        let corners: Vec<MappedCorner> = corner_points
            .into_iter()
            .filter_map(|corner| {
                corner_mapper
                    .map_point(&corner.coords)
                    .map(|pos| MappedCorner { corner, pos })
            })
            .collect();

        // TELEMETRY -------------------------------------------------------------------------------
        let telemetry_coords: &[Option<Point2d>] = telemetry
            .as_ref()
            .map(|lap| lap.coords.as_slice())
            .unwrap_or(&[]);
        let valid_coords: Vec<Point2d> = telemetry_coords.iter().flatten().copied().collect();
        let telemetry_mapper =
            CoordMapper::new(transform.as_ref(), &valid_coords, geometry.as_ref());

        let telemetry_positions: Vec<Option<LatLon>> = if telemetry_mapper.is_available() {
            telemetry_coords
                .iter()
                .map(|p| p.and_then(|p| telemetry_mapper.map_point(&p)))
                .collect()
        } else {
            vec![]
        };

        info!(
            "Mapped {} corners ({}) and {} of {} telemetry samples ({})",
            corners.len(),
            corner_mapper,
            telemetry_positions.iter().flatten().count(),
            telemetry_coords.len(),
            telemetry_mapper
        );

        if let Some(bounds) = geometry.as_ref().and_then(|g| g.get_bounds()) {
            debug!(
                "Track outline spans lon [{:.6}, {:.6}], lat [{:.6}, {:.6}]",
                bounds.x_min, bounds.x_max, bounds.y_min, bounds.y_max
            );
        }

        TrackMap {
            name: name.to_owned(),
            geometry,
            corners,
            corner_mapper,
            telemetry,
            telemetry_positions,
            telemetry_mapper,
        }
    }

    /// get_marker_pos returns the geographic position of the inserted telemetry sample.
    pub fn get_marker_pos(&self, idx: usize) -> Option<LatLon> {
        self.telemetry_positions.get(idx).copied().flatten()
    }
}
