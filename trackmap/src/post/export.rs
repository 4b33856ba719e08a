use crate::core::telemetry::Channel;
use crate::core::track_map::TrackMap;
use anyhow::Context;
use helpers::general::InputValueError;
use serde::Serialize;
use std::path::Path;

/// TraceRow is a single row of the exported telemetry trace.
#[derive(Debug, Serialize, PartialEq)]
pub struct TraceRow {
    pub index: usize,
    pub time: f64,
    pub lat: f64,
    pub lon: f64,
    pub speed: Option<f64>,
    pub rpm: Option<f64>,
    pub gear: Option<f64>,
    pub throttle: Option<f64>,
    pub brake: Option<f64>,
    pub distance: Option<f64>,
}

/// get_trace_rows combines the telemetry samples with their geographic positions. Samples without
/// a position are not part of the trace.
pub fn get_trace_rows(track_map: &TrackMap) -> Vec<TraceRow> {
    let lap = match track_map.telemetry.as_ref() {
        Some(x) => x,
        None => return vec![],
    };

    track_map
        .telemetry_positions
        .iter()
        .enumerate()
        .filter_map(|(i, pos)| pos.map(|pos| (i, pos)))
        .map(|(i, pos)| TraceRow {
            index: i,
            time: lap.time[i],
            lat: pos.lat,
            lon: pos.lon,
            speed: lap.get_value(Channel::Speed, i),
            rpm: lap.get_value(Channel::Rpm, i),
            gear: lap.get_value(Channel::Gear, i),
            throttle: lap.get_value(Channel::Throttle, i),
            brake: lap.get_value(Channel::Brake, i),
            distance: lap.get_value(Channel::Distance, i),
        })
        .collect()
}

/// export_trace writes the mapped telemetry trace to a CSV file and returns the number of rows.
pub fn export_trace(track_map: &TrackMap, filepath: &Path) -> anyhow::Result<usize> {
    let rows = get_trace_rows(track_map);

    if rows.is_empty() {
        return Err(InputValueError)
            .context("There is no mapped telemetry trace that could be exported!");
    }

    let mut csv_writer = csv::Writer::from_path(filepath).context(format!(
        "Failed to create export file {}!",
        filepath.display()
    ))?;

    for row in rows.iter() {
        csv_writer.serialize(row)?;
    }

    csv_writer.flush().context(format!(
        "Failed to write export file {}!",
        filepath.display()
    ))?;
    Ok(rows.len())
}
