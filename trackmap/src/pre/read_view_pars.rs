use crate::pre::read_data::read_json;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// * `track_color` - Hex color of the track outline
/// * `telemetry_color` - Hex color of the driven line
/// * `corner_color` - Hex color of the corner markers
/// * `marker_color` - Hex color of the playback marker
/// * `fit_padding` - (px) Padding between the track and the map border when fitting the view
/// * `corner_radius` - (px) Radius of the corner markers
/// * `marker_radius` - (px) Radius of the playback marker
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct StylePars {
    pub track_color: String,
    pub telemetry_color: String,
    pub corner_color: String,
    pub marker_color: String,
    pub fit_padding: f64,
    pub corner_radius: f64,
    pub marker_radius: f64,
}

impl Default for StylePars {
    fn default() -> Self {
        StylePars {
            track_color: String::from("#2b7ae4"),
            telemetry_color: String::from("#ffb400"),
            corner_color: String::from("#dd3333"),
            marker_color: String::from("#ffffff"),
            fit_padding: 10.0,
            corner_radius: 6.0,
            marker_radius: 7.0,
        }
    }
}

/// ViewPars describes which data files make up a visualization and how it is styled. File paths are
/// relative to the directory of the parameter file, every file is optional.
///
/// * `name` - Name shown in the window title and the report
/// * `transform_file` - Precomputed similarity transform
/// * `track_file` - GeoJSON track outline
/// * `corners_file` - Corner data
/// * `telemetry_file` - Recorded driver lap
/// * `initial_speed` - Playback speed multiplier at startup
#[derive(Debug, Deserialize, Clone)]
pub struct ViewPars {
    #[serde(default)]
    pub name: String,
    pub transform_file: Option<PathBuf>,
    pub track_file: Option<PathBuf>,
    pub corners_file: Option<PathBuf>,
    pub telemetry_file: Option<PathBuf>,
    #[serde(default = "default_initial_speed")]
    pub initial_speed: f64,
    #[serde(default)]
    pub style: StylePars,
}

fn default_initial_speed() -> f64 {
    1.0
}

/// read_view_pars reads the JSON file and decodes the JSON string into the view parameters struct.
pub fn read_view_pars(filepath: &Path) -> anyhow::Result<ViewPars> {
    read_json(filepath, "parameter")
}
