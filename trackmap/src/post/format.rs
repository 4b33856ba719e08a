use crate::core::telemetry::{Channel, TelemetryLap};
use helpers::general::round_half_up;

/// Display text of a missing or invalid value.
pub const MISSING: &str = "-";

/// or_missing returns the display text of an optional value.
pub fn or_missing<T: ToString>(val: Option<T>) -> String {
    val.map_or_else(|| String::from(MISSING), |val| val.to_string())
}

fn finite(val: Option<f64>) -> Option<f64> {
    val.filter(|val| val.is_finite())
}

/// round_display rounds a value to the nearest integer.
pub fn round_display(val: Option<f64>) -> Option<i64> {
    finite(val).map(|val| round_half_up(val) as i64)
}

/// format_percent converts a pedal position to an integer percentage in [0, 100]. Inputs in [0, 1]
/// are treated as fractions, everything else as already scaled.
pub fn format_percent(val: Option<f64>) -> Option<u8> {
    let mut pct = finite(val)?;

    if (0.0..=1.0).contains(&pct) {
        pct *= 100.0;
    }

    Some(round_half_up(pct.max(0.0).min(100.0)) as u8)
}

/// format_km converts a distance in meters to kilometers with two decimals, e.g. "1.23 km".
pub fn format_km(val: Option<f64>) -> Option<String> {
    let km = finite(val)? / 1000.0;
    Some(format!("{:.2} km", round_half_up(km * 100.0) / 100.0))
}

/// format_time formats a time in seconds with three decimals, e.g. "83.456s".
pub fn format_time(val: Option<f64>) -> Option<String> {
    finite(val).map(|val| format!("{:.3}s", val))
}

/// MetricReadout contains the display texts of all metrics of a single telemetry sample.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricReadout {
    pub idx: usize,
    pub time: String,
    pub speed: String,
    pub rpm: String,
    pub gear: String,
    pub throttle_pct: Option<u8>,
    pub brake_pct: Option<u8>,
    pub distance: String,
    pub position: String,
}

impl MetricReadout {
    pub fn at(lap: &TelemetryLap, idx: usize) -> MetricReadout {
        let coords = lap.get_position(idx);

        MetricReadout {
            idx,
            time: or_missing(format_time(lap.time.get(idx).copied())),
            speed: format!(
                "{} km/h",
                or_missing(round_display(lap.get_value(Channel::Speed, idx)))
            ),
            rpm: or_missing(round_display(lap.get_value(Channel::Rpm, idx))),
            gear: or_missing(round_display(lap.get_value(Channel::Gear, idx))),
            throttle_pct: format_percent(lap.get_value(Channel::Throttle, idx)),
            brake_pct: format_percent(lap.get_value(Channel::Brake, idx)),
            distance: or_missing(format_km(lap.get_value(Channel::Distance, idx))),
            position: format!(
                "{}, {}",
                or_missing(round_display(coords.map(|p| p.x))),
                or_missing(round_display(coords.map(|p| p.y)))
            ),
        }
    }

    pub fn get_throttle_text(&self) -> String {
        or_missing(self.throttle_pct.map(|pct| format!("{}%", pct)))
    }

    pub fn get_brake_text(&self) -> String {
        or_missing(self.brake_pct.map(|pct| format!("{}%", pct)))
    }
}
