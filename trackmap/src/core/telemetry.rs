use anyhow::Context;
use helpers::general::{is_non_decreasing, InputValueError};
use helpers::geometry::Point2d;
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Deserialize)]
pub struct TelemetryFile {
    pub tel: RawTelemetry,
}

/// RawTelemetry contains the telemetry channels as found in the telemetry file. Values are kept as
/// raw JSON values since recorded channels can contain nulls or numbers stored as strings.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct RawTelemetry {
    pub time: Vec<Value>,
    pub x: Vec<Value>,
    pub y: Vec<Value>,
    pub speed: Vec<Value>,
    pub rpm: Vec<Value>,
    pub gear: Vec<Value>,
    pub throttle: Vec<Value>,
    pub brake: Vec<Value>,
    pub distance: Vec<Value>,
}

/// numeric converts a numeric-like JSON value into a finite number.
pub fn numeric(val: &Value) -> Option<f64> {
    let num = match val {
        Value::Number(num) => num.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        _ => None,
    }?;

    if num.is_finite() {
        Some(num)
    } else {
        None
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Channel {
    Speed,
    Rpm,
    Gear,
    Throttle,
    Brake,
    Distance,
}

/// TelemetryLap is a recorded driver lap in a columnar layout, all columns are index-aligned by
/// the sample index.
///
/// * `time` - (s) Sample time, non-decreasing
/// * `coords` - (m) Planar car position (None for samples without a numeric position)
/// * `speed` - (km/h) Car speed
/// * `rpm` - (1/min) Engine speed
/// * `gear` - Selected gear
/// * `throttle` - Throttle pedal position (either [0, 1] or [0, 100])
/// * `brake` - Brake pedal position (either [0, 1] or [0, 100])
/// * `distance` - (m) Distance driven since the start of the lap
#[derive(Debug, Clone)]
pub struct TelemetryLap {
    pub time: Vec<f64>,
    pub coords: Vec<Option<Point2d>>,
    speed: Vec<Option<f64>>,
    rpm: Vec<Option<f64>>,
    gear: Vec<Option<f64>>,
    throttle: Vec<Option<f64>>,
    brake: Vec<Option<f64>>,
    distance: Vec<Option<f64>>,
}

impl TelemetryLap {
    /// from_raw creates the lap from the raw telemetry channels. The number of samples is limited
    /// by the shortest of the time, x, and y channels. Every time value must be numeric since the
    /// playback searches in it, all other channels (including the position) are optional per
    /// sample.
    pub fn from_raw(raw: &RawTelemetry) -> anyhow::Result<TelemetryLap> {
        let no_samples = raw.time.len().min(raw.x.len()).min(raw.y.len());

        // time channel
        let time = raw.time[..no_samples]
            .iter()
            .enumerate()
            .map(|(i, val)| {
                numeric(val).ok_or(InputValueError).context(format!(
                    "Telemetry time channel contains a non-numeric value at sample {}!",
                    i
                ))
            })
            .collect::<anyhow::Result<Vec<f64>>>()?;

        if !is_non_decreasing(&time) {
            return Err(InputValueError)
                .context("Telemetry time channel must be non-decreasing!");
        }

        // positions
        let coords = (0..no_samples)
            .map(|i| {
                Some(Point2d {
                    x: numeric(&raw.x[i])?,
                    y: numeric(&raw.y[i])?,
                })
            })
            .collect();

        // optional channels
        let optional_channel = |vals: &[Value]| -> Vec<Option<f64>> {
            (0..no_samples)
                .map(|i| vals.get(i).and_then(numeric))
                .collect()
        };

        Ok(TelemetryLap {
            time,
            coords,
            speed: optional_channel(&raw.speed),
            rpm: optional_channel(&raw.rpm),
            gear: optional_channel(&raw.gear),
            throttle: optional_channel(&raw.throttle),
            brake: optional_channel(&raw.brake),
            distance: optional_channel(&raw.distance),
        })
    }

    pub fn len(&self) -> usize {
        self.time.len()
    }

    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }

    pub fn get_position(&self, idx: usize) -> Option<Point2d> {
        self.coords.get(idx).copied().flatten()
    }

    pub fn get_value(&self, channel: Channel, idx: usize) -> Option<f64> {
        let vals = match channel {
            Channel::Speed => &self.speed,
            Channel::Rpm => &self.rpm,
            Channel::Gear => &self.gear,
            Channel::Throttle => &self.throttle,
            Channel::Brake => &self.brake,
            Channel::Distance => &self.distance,
        };
        vals.get(idx).copied().flatten()
    }

    /// get_lap_time returns the time span covered by the samples.
    pub fn get_lap_time(&self) -> Option<f64> {
        Some(self.time.last()? - self.time.first()?)
    }

    /// get_max_value returns the maximum of all available values of a channel.
    pub fn get_max_value(&self, channel: Channel) -> Option<f64> {
        (0..self.len())
            .filter_map(|i| self.get_value(channel, i))
            .fold(None, |max, val| match max {
                Some(max) if max >= val => Some(max),
                _ => Some(val),
            })
    }
}
