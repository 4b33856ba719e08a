pub mod core {
    pub mod corners;
    pub mod mapper;
    pub mod playback;
    pub mod projection;
    pub mod telemetry;
    pub mod track;
    pub mod track_map;
}

pub mod interfaces {
    pub mod gui_interface;
}

pub mod post {
    pub mod export;
    pub mod format;
    pub mod lap_summary;
}

pub mod pre {
    pub mod check_view_opts_pars;
    pub mod read_data;
    pub mod read_view_pars;
    pub mod view_opts;
}

#[cfg(test)]
mod projection_tests {
    use crate::core::projection::{project, unproject, LatLon, EARTH_RADIUS};
    use approx::assert_abs_diff_eq;
    use helpers::geometry::Point2d;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn test_unproject_origin() {
        let latlon = unproject(&Point2d { x: 0.0, y: 0.0 });
        assert_abs_diff_eq!(latlon.lat, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(latlon.lon, 0.0, epsilon = 1e-12);
    }
    #[test]
    fn test_unproject_lon() {
        let latlon = unproject(&Point2d {
            x: EARTH_RADIUS * FRAC_PI_2,
            y: 0.0,
        });
        assert_abs_diff_eq!(latlon.lat, 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(latlon.lon, 90.0, epsilon = 1e-9);
    }
    #[test]
    fn test_unproject_lat() {
        // y of latitude 45 deg is R * ln(tan(67.5 deg))
        let latlon = unproject(&Point2d {
            x: 0.0,
            y: EARTH_RADIUS * 67.5_f64.to_radians().tan().ln(),
        });
        assert_abs_diff_eq!(latlon.lat, 45.0, epsilon = 1e-9);
    }
    #[test]
    fn test_project_inverse() {
        let latlon = LatLon {
            lat: 34.843,
            lon: 136.541,
        };
        let latlon_back = unproject(&project(&latlon));
        assert_abs_diff_eq!(latlon_back.lat, latlon.lat, epsilon = 1e-9);
        assert_abs_diff_eq!(latlon_back.lon, latlon.lon, epsilon = 1e-9);
    }
}




#[cfg(test)]
mod format_tests {
    use crate::core::telemetry::TelemetryLap;
    use crate::post::format::{
        format_km, format_percent, format_time, or_missing, round_display, MetricReadout, MISSING,
    };
    use serde_json::json;

    #[test]
    fn test_round_display() {
        assert_eq!(round_display(Some(2.5)), Some(3));
        assert_eq!(round_display(Some(-0.4)), Some(0));
        assert_eq!(round_display(None), None);
        assert_eq!(round_display(Some(f64::NAN)), None);
        assert_eq!(or_missing(round_display(None)), MISSING);
    }
    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(Some(0.5)), Some(50));
        assert_eq!(format_percent(Some(1.0)), Some(100));
        assert_eq!(format_percent(Some(42.4)), Some(42));
        assert_eq!(format_percent(Some(150.0)), Some(100));
        assert_eq!(format_percent(Some(-5.0)), Some(0));
        assert_eq!(format_percent(None), None);
        assert_eq!(format_percent(Some(f64::INFINITY)), None);
    }
    #[test]
    fn test_format_km() {
        assert_eq!(format_km(Some(1234.0)), Some(String::from("1.23 km")));
        assert_eq!(format_km(Some(0.0)), Some(String::from("0.00 km")));
        assert_eq!(format_km(None), None);
    }
    #[test]
    fn test_format_time() {
        assert_eq!(format_time(Some(12.5)), Some(String::from("12.500s")));
        assert_eq!(format_time(Some(f64::NAN)), None);
        assert_eq!(or_missing(format_time(None)), "-");
    }
    #[test]
    fn test_metric_readout() {
        let telemetry_file: crate::core::telemetry::TelemetryFile =
            serde_json::from_value(json!({
                "tel": {
                    "time": [0.0, 0.5],
                    "x": [100.4, 101.6],
                    "y": [-20.5, -21.0],
                    "speed": [250.4, "251.6"],
                    "rpm": [11000, null],
                    "gear": [7, 7],
                    "throttle": [1.0, 0.5],
                    "distance": [1234.0, 1300.0]
                }
            }))
            .unwrap();
        let lap = TelemetryLap::from_raw(&telemetry_file.tel).unwrap();

        let readout = MetricReadout::at(&lap, 1);
        assert_eq!(readout.time, "0.500s");
        assert_eq!(readout.speed, "252 km/h");
        assert_eq!(readout.rpm, "-");
        assert_eq!(readout.gear, "7");
        assert_eq!(readout.throttle_pct, Some(50));
        assert_eq!(readout.get_brake_text(), "-");
        assert_eq!(readout.distance, "1.30 km");
        assert_eq!(readout.position, "102, -21");

        let readout = MetricReadout::at(&lap, 0);
        assert_eq!(readout.get_throttle_text(), "100%");
        assert_eq!(readout.position, "100, -20");
    }
}

#[cfg(test)]
mod track_tests {
    use crate::core::corners::CornerData;
    use crate::core::track::{GeoJsonFeatureCollection, TrackGeometry};
    use serde_json::json;

    #[test]
    fn test_track_from_linestring() {
        let collection: GeoJsonFeatureCollection = serde_json::from_value(json!({
            "type": "FeatureCollection",
            "features": [
                {"type": "Feature", "properties": {},
                 "geometry": {"type": "Point", "coordinates": [1.0, 2.0]}},
                {"type": "Feature", "properties": {"name": "circuit"},
                 "geometry": {"type": "LineString",
                              "coordinates": [[8.0, 50.0, 120.0], [9.0, 52.0, 121.0]]}}
            ]
        }))
        .unwrap();
        let geometry = TrackGeometry::from_geojson(&collection).unwrap();
        assert_eq!(geometry.outline.len(), 2);
        assert_eq!(geometry.outline[1].lat, 52.0);
        assert_eq!(geometry.outline[1].lon, 9.0);

        let bounds = geometry.get_bounds().unwrap();
        assert_eq!(bounds.x_min, 8.0);
        assert_eq!(bounds.y_max, 52.0);
    }
    #[test]
    fn test_track_from_polygon() {
        let collection: GeoJsonFeatureCollection = serde_json::from_value(json!({
            "features": [
                {"geometry": {"type": "Polygon",
                              "coordinates": [[[8.0, 50.0], [9.0, 50.0], [9.0, 52.0], [8.0, 50.0]]]}}
            ]
        }))
        .unwrap();
        let geometry = TrackGeometry::from_geojson(&collection).unwrap();
        assert_eq!(geometry.outline.len(), 4);
    }
    #[test]
    fn test_track_without_line() {
        let collection: GeoJsonFeatureCollection =
            serde_json::from_value(json!({"features": [{"geometry": null}]})).unwrap();
        assert!(TrackGeometry::from_geojson(&collection).is_none());
    }

    #[test]
    fn test_corner_points() {
        let corner_data: CornerData = serde_json::from_value(json!({
            "CornerNumber": [1, 2],
            "X": [10.0, 20.0, 30.0],
            "Y": [-1.0, -2.0],
            "Angle": [90.5]
        }))
        .unwrap();
        let corner_points = corner_data.get_corner_points();
        assert_eq!(corner_points.len(), 2);
        assert_eq!(corner_points[1].coords.x, 20.0);
        assert_eq!(corner_points[1].number, Some(2));
        assert_eq!(corner_points[0].angle, Some(90.5));
        assert_eq!(corner_points[1].angle, None);
        assert_eq!(corner_points[1].get_label(), "2");
    }
    #[test]
    fn test_corner_label_without_number() {
        let corner_data: CornerData =
            serde_json::from_value(json!({"X": [10.0], "Y": [-1.0]})).unwrap();
        assert_eq!(corner_data.get_corner_points()[0].get_label(), "#0");
    }
    #[test]
    fn test_corner_number_null() {
        let corner_data: CornerData = serde_json::from_value(json!({
            "CornerNumber": [1, null],
            "X": [10.0, 20.0],
            "Y": [-1.0, -2.0]
        }))
        .unwrap();
        let corner_points = corner_data.get_corner_points();
        assert_eq!(corner_points.len(), 2);
        assert_eq!(corner_points[0].number, Some(1));
        assert_eq!(corner_points[1].number, None);
        assert_eq!(corner_points[1].get_label(), "#1");
    }
    #[test]
    fn test_corner_number_float() {
        let corner_data: CornerData = serde_json::from_value(json!({
            "CornerNumber": [1.0, 2.0, 2.5],
            "X": [10.0, 20.0, 30.0],
            "Y": [-1.0, -2.0, -3.0],
            "Rotation": [45.0, null]
        }))
        .unwrap();
        let corner_points = corner_data.get_corner_points();
        assert_eq!(corner_points[0].number, Some(1));
        assert_eq!(corner_points[1].number, Some(2));
        assert_eq!(corner_points[2].number, None);
        assert_eq!(corner_points[0].rotation, Some(45.0));
        assert_eq!(corner_points[1].rotation, None);
    }
    #[test]
    fn test_corner_without_position() {
        let corner_data: CornerData = serde_json::from_value(json!({
            "CornerNumber": [1, 2, 3],
            "X": [10.0, null, 30.0],
            "Y": [-1.0, -2.0, -3.0]
        }))
        .unwrap();
        let corner_points = corner_data.get_corner_points();
        assert_eq!(corner_points.len(), 2);
        assert_eq!(corner_points[1].idx, 2);
        assert_eq!(corner_points[1].get_label(), "3");
    }
}

#[cfg(test)]
mod track_map_tests {
    use crate::core::corners::CornerData;
    use crate::core::mapper::{CoordMapper, SimilarityTransform};
    use crate::core::projection::LatLon;
    use crate::core::track::TrackGeometry;
    use crate::core::track_map::TrackMap;
    use crate::post::export::get_trace_rows;
    use crate::post::lap_summary::LapSummary;
    use crate::core::telemetry::{TelemetryFile, TelemetryLap};
    use crate::pre::read_data::TrackData;
    use approx::assert_abs_diff_eq;
    use serde_json::json;

    fn track_data() -> TrackData {
        TrackData {
            transform: None,
            geometry: Some(TrackGeometry {
                outline: vec![
                    LatLon {
                        lat: 50.0,
                        lon: 8.0,
                    },
                    LatLon {
                        lat: 52.0,
                        lon: 9.0,
                    },
                ],
            }),
            corners: Some(
                serde_json::from_value::<CornerData>(json!({
                    "CornerNumber": [1, 2],
                    "X": [0.0, 10.0],
                    "Y": [0.0, 5.0]
                }))
                .unwrap(),
            ),
            telemetry: Some(crate::telemetry_tests::lap()),
        }
    }

    #[test]
    fn test_track_map_bbox() {
        let track_map = TrackMap::new("test", track_data());
        assert!(matches!(track_map.corner_mapper, CoordMapper::Bbox(_)));
        assert_eq!(track_map.corners.len(), 2);
        assert_abs_diff_eq!(track_map.corners[1].pos.lat, 52.0, epsilon = 1e-12);
        assert_abs_diff_eq!(track_map.corners[1].pos.lon, 9.0, epsilon = 1e-12);

        // telemetry uses its own bounding box
        assert_eq!(track_map.telemetry_positions.len(), 3);
        let pos = track_map.get_marker_pos(0).unwrap();
        assert_abs_diff_eq!(pos.lon, 8.0, epsilon = 1e-12);
        assert_abs_diff_eq!(pos.lat, 52.0, epsilon = 1e-12);
        assert!(track_map.get_marker_pos(3).is_none());
    }
    #[test]
    fn test_track_map_transform() {
        let mut track_data = track_data();
        track_data.transform = Some(SimilarityTransform {
            s: 1.0,
            cos: 1.0,
            sin: 0.0,
            tx: 0.0,
            ty: 0.0,
        });
        let track_map = TrackMap::new("test", track_data);
        assert!(matches!(track_map.telemetry_mapper, CoordMapper::Transform(_)));
        assert_abs_diff_eq!(track_map.corners[0].pos.lat, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(track_map.corners[0].pos.lon, 0.0, epsilon = 1e-12);
    }
    #[test]
    fn test_track_map_empty() {
        let track_map = TrackMap::new("empty", TrackData::default());
        assert!(track_map.corners.is_empty());
        assert!(track_map.telemetry_positions.is_empty());
        assert!(get_trace_rows(&track_map).is_empty());

        let summary = LapSummary::new(&track_map);
        assert_eq!(summary.no_samples, 0);
        assert_eq!(summary.lap_time, None);
    }
    #[test]
    fn test_trace_rows() {
        let track_map = TrackMap::new("test", track_data());
        let rows = get_trace_rows(&track_map);
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[1].index, 1);
        assert_eq!(rows[1].time, 0.5);
        assert_eq!(rows[1].rpm, None);

        let summary = LapSummary::new(&track_map);
        assert_eq!(summary.no_samples, 3);
        assert_eq!(summary.max_speed, Some(255.0));
        assert_eq!(summary.lap_distance, Some(1370.0));
        assert_eq!(summary.no_corners, 2);
    }
    #[test]
    fn test_track_map_missing_position() {
        let telemetry_file: TelemetryFile = serde_json::from_value(json!({
            "tel": {
                "time": [0.0, 0.5, 1.0, 1.5],
                "x": [0.0, null, 5.0, 10.0],
                "y": [0.0, 1.0, 2.0, 4.0]
            }
        }))
        .unwrap();
        let mut track_data = track_data();
        track_data.telemetry = Some(TelemetryLap::from_raw(&telemetry_file.tel).unwrap());

        let track_map = TrackMap::new("test", track_data);
        assert_eq!(track_map.telemetry.as_ref().unwrap().len(), 4);
        assert_eq!(track_map.telemetry_positions.len(), 4);
        assert!(track_map.get_marker_pos(1).is_none());

        // the bounding box only covers samples with a position
        let pos = track_map.get_marker_pos(3).unwrap();
        assert_abs_diff_eq!(pos.lon, 9.0, epsilon = 1e-12);
        assert_abs_diff_eq!(pos.lat, 52.0, epsilon = 1e-12);

        let rows = get_trace_rows(&track_map);
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[1].index, 2);
    }
}
