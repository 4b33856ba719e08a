use crate::core::telemetry::numeric;
use helpers::geometry::Point2d;
use serde::Deserialize;
use serde_json::Value;

/// CornerData is the column-oriented corner information of a circuit as delivered in the corner
/// file. All columns are index-aligned. Values are kept as raw JSON values such that a single
/// invalid entry only affects its own corner.
#[derive(Debug, Deserialize, Clone, Default)]
#[serde(rename_all = "PascalCase", default)]
pub struct CornerData {
    pub corner_number: Vec<Value>,
    #[serde(rename = "X")]
    pub x: Vec<Value>,
    #[serde(rename = "Y")]
    pub y: Vec<Value>,
    pub angle: Vec<Value>,
    pub distance: Vec<Value>,
    pub rotation: Vec<Value>,
}

/// * `coords` - (m) Planar position of the corner
/// * `idx` - Index of the corner in the corner data
/// * `number` - Official corner number (if available)
/// * `angle` - (deg) Corner angle (if available)
/// * `distance` - (m) Distance of the corner from the finish line (if available)
/// * `rotation` - (deg) Rotation of the corner label (if available)
#[derive(Debug, Clone, PartialEq)]
pub struct CornerPoint {
    pub coords: Point2d,
    pub idx: usize,
    pub number: Option<u32>,
    pub angle: Option<f64>,
    pub distance: Option<f64>,
    pub rotation: Option<f64>,
}

impl CornerPoint {
    pub fn get_label(&self) -> String {
        match self.number {
            Some(number) => number.to_string(),
            None => format!("#{}", self.idx),
        }
    }
}

/// corner_number accepts non-negative integral values only (1.0 is fine, 1.5 is not).
fn corner_number(val: &Value) -> Option<u32> {
    numeric(val)
        .filter(|num| num.fract() == 0.0 && *num >= 0.0 && *num <= u32::MAX as f64)
        .map(|num| num as u32)
}

impl CornerData {
    /// get_corner_points converts the columns into corner points. The number of points is limited
    /// by the shorter of the X and Y columns, optional columns may be shorter. Corners without a
    /// numeric position are skipped.
    pub fn get_corner_points(&self) -> Vec<CornerPoint> {
        let no_corners = self.x.len().min(self.y.len());
        let optional = |col: &[Value], i: usize| col.get(i).and_then(numeric);

        (0..no_corners)
            .filter_map(|i| {
                let coords = Point2d {
                    x: numeric(&self.x[i])?,
                    y: numeric(&self.y[i])?,
                };

                Some(CornerPoint {
                    coords,
                    idx: i,
                    number: self.corner_number.get(i).and_then(corner_number),
                    angle: optional(&self.angle, i),
                    distance: optional(&self.distance, i),
                    rotation: optional(&self.rotation, i),
                })
            })
            .collect()
    }
}
