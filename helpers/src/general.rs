use std::error::Error;
use std::fmt;

/// InputValueError is used if some view option, parameter, or input data does not fulfill the
/// posed requirements, e.g., a telemetry time series that is not monotonic.
#[derive(Debug, Clone)]
pub struct InputValueError;

impl fmt::Display for InputValueError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Invalid input value")
    }
}

impl Error for InputValueError {}

/// lower_bound returns the index of the first element in the sorted array x that is not less than
/// the target value, i.e. x.len() if all elements are less than the target. Ties resolve to the
/// earliest matching index. x must be non-decreasing.
pub fn lower_bound(x: &[f64], target: f64) -> usize {
    x.partition_point(|&val| val < target)
}

/// clamped_lower_bound works like lower_bound but always returns a valid index of x (x must not be
/// empty).
pub fn clamped_lower_bound(x: &[f64], target: f64) -> usize {
    lower_bound(x, target).min(x.len() - 1)
}

/// is_non_decreasing checks if every element of x is finite and not less than its predecessor.
pub fn is_non_decreasing(x: &[f64]) -> bool {
    x.iter().all(|val| val.is_finite()) && x.windows(2).all(|w| w[0] <= w[1])
}

/// round_half_up rounds to the nearest integer, halves are rounded towards positive infinity (f64's
/// round() rounds halves away from zero, which differs for negative values).
pub fn round_half_up(x: f64) -> f64 {
    let rounded = x.round();

    if x < 0.0 && rounded - x == -0.5 {
        rounded + 1.0
    } else {
        rounded
    }
}

/// min_max returns the minimum and maximum value in the array x, None if x is empty. NaN values are
/// ignored.
pub fn min_max(x: &[f64]) -> Option<(f64, f64)> {
    x.iter()
        .filter(|val| !val.is_nan())
        .fold(None, |acc, &val| match acc {
            None => Some((val, val)),
            Some((min, max)) => Some((min.min(val), max.max(val))),
        })
}

/// lin_rescale maps x linearly from the range [src_min, src_max] to the range [dst_min, dst_max].
/// If the source range has zero extent, the midpoint of the destination range is returned.
pub fn lin_rescale(x: f64, src_min: f64, src_max: f64, dst_min: f64, dst_max: f64) -> f64 {
    if src_max == src_min {
        return (dst_min + dst_max) / 2.0;
    }

    (x - src_min) / (src_max - src_min) * (dst_max - dst_min) + dst_min
}
