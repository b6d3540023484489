//! Low-level math shared by the bar and sector layouts.
//!
//! Angles are expressed in degrees, measured clockwise from the positive
//! x-axis in screen space (y grows downwards).

use ordered_float::OrderedFloat;

use crate::core::{LinearScale, Point};
use crate::error::{ChartError, ChartResult};

pub const FULL_CIRCLE_DEGREES: f64 = 360.0;
pub const HALF_CIRCLE_DEGREES: f64 = 180.0;

/// Tolerance used when deciding whether a span covers the whole circle.
pub const ANGLE_EPSILON: f64 = 1e-9;

/// Largest value of the sequence, `None` when it is empty.
#[must_use]
pub fn max_value(values: impl IntoIterator<Item = f64>) -> Option<f64> {
    values.into_iter().map(OrderedFloat).max().map(|v| v.0)
}

#[must_use]
pub fn sum_values(values: impl IntoIterator<Item = f64>) -> f64 {
    values.into_iter().sum()
}

/// Rounds halves towards positive infinity (`27.5 -> 28`, `-0.5 -> 0`).
#[must_use]
pub fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// Maps `value` onto `[0, extent_px]` proportionally to `max`.
///
/// A non-positive `max` collapses every value to `0`.
pub fn scale_to_extent(value: f64, max: f64, extent_px: f64) -> ChartResult<f64> {
    if max <= 0.0 {
        return Ok(0.0);
    }
    LinearScale::new(0.0, max)?.domain_to_pixel(value, extent_px)
}

/// Angular span of `value` as a share of `total`.
pub fn value_to_degrees(value: f64, total: f64) -> ChartResult<f64> {
    if !total.is_finite() || total <= 0.0 {
        return Err(ChartError::DegenerateDataset(
            "total must be > 0 to allocate angles".to_owned(),
        ));
    }
    Ok(FULL_CIRCLE_DEGREES * (value / total))
}

/// `(start, end)` angle of every value, derived from the running cumulative sum.
///
/// Deriving both bounds from the cumulative sum keeps consecutive segments
/// contiguous and lands the final end angle on exactly 360 degrees. Values
/// are divided by the largest one first so the sum of finite values stays
/// finite.
pub fn cumulative_segment_angles(values: &[f64]) -> ChartResult<Vec<(f64, f64)>> {
    let max = max_value(values.iter().copied()).unwrap_or(0.0);
    if !max.is_finite() || max <= 0.0 {
        return Err(ChartError::DegenerateDataset(
            "total must be > 0 to allocate angles".to_owned(),
        ));
    }
    let shares = values.iter().map(|value| value / max).collect::<Vec<_>>();
    let total = sum_values(shares.iter().copied());
    let mut angles = Vec::with_capacity(values.len());
    let mut cumulative = 0.0;
    for share in &shares {
        let start = value_to_degrees(cumulative, total)?;
        cumulative += share;
        let end = value_to_degrees(cumulative, total)?;
        angles.push((start, end.max(start)));
    }
    Ok(angles)
}

#[must_use]
pub fn polar_to_cartesian(center: Point, radius: f64, angle_degrees: f64) -> Point {
    let radians = angle_degrees.to_radians();
    Point::new(
        center.x + radius * radians.cos(),
        center.y + radius * radians.sin(),
    )
}

/// Whether an arc of `span_degrees` must be drawn along the major arc.
///
/// Exactly 180 degrees selects the minor arc.
#[must_use]
pub fn large_arc_flag(span_degrees: f64) -> bool {
    span_degrees > HALF_CIRCLE_DEGREES
}

#[must_use]
pub fn is_full_circle(span_degrees: f64) -> bool {
    span_degrees >= FULL_CIRCLE_DEGREES - ANGLE_EPSILON
}
