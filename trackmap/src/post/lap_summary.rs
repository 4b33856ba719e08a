use crate::core::telemetry::Channel;
use crate::core::track_map::TrackMap;
use crate::post::format::{format_km, format_time, or_missing, round_display, MetricReadout};
use std::fmt::Write;

/// LapSummary contains the key figures of a track map that are reported in the console output.
#[derive(Debug, Clone, PartialEq)]
pub struct LapSummary {
    pub name: String,
    pub no_samples: usize,
    pub lap_time: Option<f64>,
    pub max_speed: Option<f64>,
    pub lap_distance: Option<f64>,
    pub no_outline_points: usize,
    pub no_corners: usize,
}

impl LapSummary {
    pub fn new(track_map: &TrackMap) -> LapSummary {
        let lap = track_map.telemetry.as_ref();

        LapSummary {
            name: track_map.name.to_owned(),
            no_samples: lap.map_or(0, |lap| lap.len()),
            lap_time: lap.and_then(|lap| lap.get_lap_time()),
            max_speed: lap.and_then(|lap| lap.get_max_value(Channel::Speed)),
            lap_distance: lap.and_then(|lap| lap.get_max_value(Channel::Distance)),
            no_outline_points: track_map
                .geometry
                .as_ref()
                .map_or(0, |geometry| geometry.outline.len()),
            no_corners: track_map.corners.len(),
        }
    }
}

/// print_report prints the lap summary, the mapped corners, and the metrics of the inserted sample
/// to the console output.
pub fn print_report(track_map: &TrackMap, idx: usize) {
    let summary = LapSummary::new(track_map);

    // create string with lap information
    let mut tmp_string_summary = String::new();
    writeln!(&mut tmp_string_summary, "name: {}", summary.name).unwrap();
    writeln!(
        &mut tmp_string_summary,
        "samples: {}, lap time: {}, max. speed: {} km/h, lap distance: {}",
        summary.no_samples,
        or_missing(format_time(summary.lap_time)),
        or_missing(round_display(summary.max_speed)),
        or_missing(format_km(summary.lap_distance))
    )
    .unwrap();
    writeln!(
        &mut tmp_string_summary,
        "outline points: {}, corners: {} ({}), telemetry mapping: {}",
        summary.no_outline_points,
        summary.no_corners,
        track_map.corner_mapper,
        track_map.telemetry_mapper
    )
    .unwrap();

    // create string with corner table
    let mut tmp_string_corners =
        String::from("corner,         lat,         lon,  angle, distance, rotation\n");

    for mapped_corner in track_map.corners.iter() {
        let corner = &mapped_corner.corner;
        writeln!(
            &mut tmp_string_corners,
            "{:>6}, {:11.6}, {:11.6}, {:>6}, {:>8}, {:>8}",
            corner.get_label(),
            mapped_corner.pos.lat,
            mapped_corner.pos.lon,
            or_missing(corner.angle.map(|x| format!("{:.1}", x))),
            or_missing(corner.distance.map(|x| format!("{:.0}", x))),
            or_missing(corner.rotation.map(|x| format!("{:.1}", x)))
        )
        .unwrap();
    }

    // print everything to the console
    println!("RESULT: Lap summary");
    println!("{}", tmp_string_summary);

    println!("RESULT: Corners");
    println!("{}", tmp_string_corners);

    if let Some(lap) = track_map.telemetry.as_ref().filter(|lap| !lap.is_empty()) {
        let idx = idx.min(lap.len() - 1);
        let readout = MetricReadout::at(lap, idx);
        let pos = track_map.get_marker_pos(idx);

        println!("RESULT: Telemetry at index {}", idx);
        println!(
            "time: {}, speed: {}, rpm: {}, gear: {}, throttle: {}, brake: {}, distance: {}",
            readout.time,
            readout.speed,
            readout.rpm,
            readout.gear,
            readout.get_throttle_text(),
            readout.get_brake_text(),
            readout.distance
        );
        println!(
            "position (x, y): {}, position (lat, lon): {}",
            readout.position,
            or_missing(pos.map(|pos| format!("{:.6}, {:.6}", pos.lat, pos.lon)))
        );
    }
}
