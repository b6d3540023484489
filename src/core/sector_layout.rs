use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::geometry::{
    cumulative_segment_angles, is_full_circle, large_arc_flag, polar_to_cartesian, sum_values,
};
use crate::core::{DataSet, Padding, Point, Viewport};
use crate::error::{ChartError, ChartResult};

/// Angular slice of a pie/doughnut chart for one dataset entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectorGeometry {
    pub label: String,
    pub value: f64,
    pub start_angle: f64,
    pub end_angle: f64,
    pub outer_start: Point,
    pub outer_end: Point,
    pub inner_start: Point,
    pub inner_end: Point,
    pub large_arc: bool,
}

impl SectorGeometry {
    #[must_use]
    pub fn span(&self) -> f64 {
        self.end_angle - self.start_angle
    }

    #[must_use]
    pub fn is_full_circle(&self) -> bool {
        is_full_circle(self.span())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectorLayout {
    pub center: Point,
    pub radius: f64,
    pub inner_radius: f64,
    pub total: f64,
    pub sectors: Vec<SectorGeometry>,
}

/// Projects a dataset into contiguous sectors starting at 0 degrees.
///
/// The circle is centered at `min(width, height) / 2` on both axes and its
/// radius is that value minus the largest side of `svg_padding`.
/// `inner_radius` is the doughnut hole (0 for a pie).
pub fn project_sectors(
    dataset: &DataSet,
    viewport: Viewport,
    svg_padding: Padding,
    inner_radius: f64,
) -> ChartResult<SectorLayout> {
    let center_point = viewport.min_side() / 2.0;
    let center = Point::new(center_point, center_point);
    let radius = center_point - svg_padding.max_side();
    if !radius.is_finite() || radius <= 0.0 {
        return Err(ChartError::InvalidOptions(format!(
            "outer radius must be > 0 (got {radius}px)"
        )));
    }
    if !inner_radius.is_finite() || inner_radius < 0.0 || inner_radius >= radius {
        return Err(ChartError::InvalidOptions(format!(
            "centroid padding must be in [0, {radius}) (got {inner_radius})"
        )));
    }

    if dataset.is_empty() {
        return Ok(SectorLayout {
            center,
            radius,
            inner_radius,
            total: 0.0,
            sectors: Vec::new(),
        });
    }

    let values = dataset.values().collect::<Vec<_>>();
    let total = sum_values(values.iter().copied());
    if total <= 0.0 {
        return Err(ChartError::DegenerateDataset(format!(
            "values of {} entries sum to zero; angles cannot be allocated",
            values.len()
        )));
    }

    let angles = cumulative_segment_angles(&values)?;
    let sectors = dataset
        .entries()
        .iter()
        .zip(angles)
        .map(|(entry, (start_angle, end_angle))| {
            let span = end_angle - start_angle;
            trace!(label = %entry.label, start_angle, end_angle, "sector geometry");
            SectorGeometry {
                label: entry.label.clone(),
                value: entry.value,
                start_angle,
                end_angle,
                outer_start: polar_to_cartesian(center, radius, start_angle),
                outer_end: polar_to_cartesian(center, radius, end_angle),
                inner_start: polar_to_cartesian(center, inner_radius, start_angle),
                inner_end: polar_to_cartesian(center, inner_radius, end_angle),
                large_arc: large_arc_flag(span),
            }
        })
        .collect();

    Ok(SectorLayout {
        center,
        radius,
        inner_radius,
        total,
        sectors,
    })
}
