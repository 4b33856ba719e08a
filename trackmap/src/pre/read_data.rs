use crate::core::corners::CornerData;
use crate::core::mapper::SimilarityTransform;
use crate::core::telemetry::{TelemetryFile, TelemetryLap};
use crate::core::track::{GeoJsonFeatureCollection, TrackGeometry};
use crate::pre::read_view_pars::ViewPars;
use anyhow::Context;
use helpers::general::InputValueError;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::fs::OpenOptions;
use std::path::Path;
use tracing::{debug, info, warn};

#[derive(Debug, Deserialize)]
struct TransformFile {
    transform: Option<SimilarityTransform>,
}

/// TrackData contains all input data of a visualization. Every part is optional since the
/// visualization degrades gracefully if some data is not available.
#[derive(Debug, Default)]
pub struct TrackData {
    pub transform: Option<SimilarityTransform>,
    pub geometry: Option<TrackGeometry>,
    pub corners: Option<CornerData>,
    pub telemetry: Option<TelemetryLap>,
}

pub(crate) fn read_json<T: DeserializeOwned>(filepath: &Path, description: &str) -> anyhow::Result<T> {
    // open file
    let fh = OpenOptions::new()
        .read(true)
        .open(filepath)
        .context(format!(
            "Failed to open {} file {}!",
            description,
            filepath.display()
        ))?;

    // read and parse file content
    let content = serde_json::from_reader(&fh).context(format!(
        "Failed to parse {} file {}!",
        description,
        filepath.display()
    ))?;
    Ok(content)
}

/// read_transform reads the precomputed similarity transform. A transform file without a transform
/// or with non-finite components is an error.
pub fn read_transform(filepath: &Path) -> anyhow::Result<SimilarityTransform> {
    let transform_file: TransformFile = read_json(filepath, "transform")?;

    match transform_file.transform {
        Some(transform) if transform.is_valid() => Ok(transform),
        Some(_) => Err(InputValueError).context(format!(
            "Transform in {} contains non-finite components!",
            filepath.display()
        )),
        None => Err(InputValueError).context(format!(
            "Transform file {} does not contain a transform!",
            filepath.display()
        )),
    }
}

/// read_track_geometry reads the GeoJSON file and extracts the track outline.
pub fn read_track_geometry(filepath: &Path) -> anyhow::Result<TrackGeometry> {
    let collection: GeoJsonFeatureCollection = read_json(filepath, "track")?;

    TrackGeometry::from_geojson(&collection)
        .ok_or(InputValueError)
        .context(format!(
            "Track file {} does not contain a line feature!",
            filepath.display()
        ))
}

pub fn read_corners(filepath: &Path) -> anyhow::Result<CornerData> {
    read_json(filepath, "corner")
}

pub fn read_telemetry(filepath: &Path) -> anyhow::Result<TelemetryLap> {
    let telemetry_file: TelemetryFile = read_json(filepath, "telemetry")?;

    TelemetryLap::from_raw(&telemetry_file.tel).context(format!(
        "Invalid telemetry in file {}!",
        filepath.display()
    ))
}

/// load_optional loads a file if it is configured. Failures are logged and result in None.
fn load_optional<T>(
    base_dir: &Path,
    rel_path: Option<&Path>,
    description: &str,
    read_fn: fn(&Path) -> anyhow::Result<T>,
) -> Option<T> {
    let filepath = match rel_path {
        Some(x) => base_dir.join(x),
        None => {
            debug!("No {} file configured", description);
            return None;
        }
    };

    match read_fn(&filepath) {
        Ok(x) => {
            info!("Loaded {} file {}", description, filepath.display());
            Some(x)
        }
        Err(err) => {
            warn!("Skipping {} data: {:#}", description, err);
            None
        }
    }
}

/// load_track_data loads all data files configured in the view parameters. base_dir is the
/// directory the file paths are relative to.
pub fn load_track_data(view_pars: &ViewPars, base_dir: &Path) -> TrackData {
    TrackData {
        transform: load_optional(
            base_dir,
            view_pars.transform_file.as_deref(),
            "transform",
            read_transform,
        ),
        geometry: load_optional(
            base_dir,
            view_pars.track_file.as_deref(),
            "track",
            read_track_geometry,
        ),
        corners: load_optional(
            base_dir,
            view_pars.corners_file.as_deref(),
            "corner",
            read_corners,
        ),
        telemetry: load_optional(
            base_dir,
            view_pars.telemetry_file.as_deref(),
            "telemetry",
            read_telemetry,
        ),
    }
}
