use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::geometry::{max_value, round_half_up, scale_to_extent};
use crate::core::{ChartPadding, DataSet, Padding, Point, Viewport};
use crate::error::{ChartError, ChartResult};

/// Pixel geometry of one bar, in absolute surface coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarGeometry {
    pub label: String,
    pub value: f64,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Anchor of the rotated category label under the bar.
    pub label_anchor: Point,
}

impl BarGeometry {
    #[must_use]
    pub fn center_x(&self) -> f64 {
        self.x + self.width * 0.5
    }
}

/// Y-axis label position and the value it displays.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisTick {
    pub value: f64,
    pub x: f64,
    pub y: f64,
}

/// Complete bar-chart geometry for one surface size.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarLayout {
    pub max_value: f64,
    pub chart_height: f64,
    pub bar_width: f64,
    pub baseline_y: f64,
    pub bars: Vec<BarGeometry>,
    /// Top, middle and bottom ticks, in that order. Empty for an empty dataset.
    pub y_axis: Vec<AxisTick>,
}

/// Projects a dataset into vertical bars scaled against its largest value.
///
/// The usable height is the surface height minus the top/bottom outer padding
/// and the top/bottom chart padding. Bars are `bar_margin_right` apart and
/// share the width left of `chart_padding.left` evenly, minus a margin on
/// each side.
pub fn project_bar_layout(
    dataset: &DataSet,
    viewport: Viewport,
    svg_padding: Padding,
    chart_padding: ChartPadding,
    bar_margin_right: f64,
) -> ChartResult<BarLayout> {
    let height = f64::from(viewport.height);
    let chart_height =
        height - svg_padding.top - svg_padding.bottom - chart_padding.top - chart_padding.bottom;
    if !chart_height.is_finite() || chart_height < 0.0 {
        return Err(ChartError::InvalidOptions(format!(
            "paddings exceed surface height {height}px (usable height {chart_height}px)"
        )));
    }
    let baseline_y = height - chart_padding.bottom - svg_padding.bottom;

    let count = dataset.len();
    if count == 0 {
        return Ok(BarLayout {
            max_value: 0.0,
            chart_height,
            bar_width: 0.0,
            baseline_y,
            bars: Vec::new(),
            y_axis: Vec::new(),
        });
    }

    let available = f64::from(viewport.width) - chart_padding.left;
    let bar_width = (available / count as f64).floor() - 2.0 * bar_margin_right;
    if !bar_width.is_finite() || bar_width <= 0.0 {
        return Err(ChartError::InsufficientWidth { bar_width, count });
    }

    let max = max_value(dataset.values()).unwrap_or(0.0).max(0.0);
    let mut bars = Vec::with_capacity(count);
    for (index, entry) in dataset.entries().iter().enumerate() {
        let bar_height = round_half_up(scale_to_extent(entry.value, max, chart_height)?);
        let x = chart_padding.left + index as f64 * (bar_width + bar_margin_right);
        let y = baseline_y - bar_height;
        trace!(index, value = entry.value, bar_height, x, y, "bar geometry");
        bars.push(BarGeometry {
            label: entry.label.clone(),
            value: entry.value,
            x,
            y,
            width: bar_width,
            height: bar_height,
            label_anchor: Point::new(x + bar_width * 0.5, baseline_y + svg_padding.bottom),
        });
    }

    let axis_x = svg_padding.left;
    let y_axis = vec![
        AxisTick {
            value: max,
            x: axis_x,
            y: svg_padding.top + chart_padding.top,
        },
        AxisTick {
            value: max / 2.0,
            x: axis_x,
            y: baseline_y - chart_height / 2.0,
        },
        AxisTick {
            value: 0.0,
            x: axis_x,
            y: baseline_y,
        },
    ];

    Ok(BarLayout {
        max_value: max,
        chart_height,
        bar_width,
        baseline_y,
        bars,
        y_axis,
    })
}

#[cfg(test)]
mod tests {
    use super::project_bar_layout;
    use crate::core::{ChartPadding, DataSet, Padding, Viewport};
    use crate::error::ChartError;

    fn padding() -> (Padding, ChartPadding) {
        (
            Padding::new(10.0, 0.0, 10.0, 20.0),
            ChartPadding::new(20.0, 50.0, 50.0),
        )
    }

    #[test]
    fn bars_share_baseline() {
        let dataset = DataSet::from_pairs([("a", 1.0), ("b", 4.0), ("c", 0.0)]).expect("dataset");
        let (svg, chart) = padding();
        let layout =
            project_bar_layout(&dataset, Viewport::new(300, 200), svg, chart, 5.0).expect("layout");

        assert_eq!(layout.baseline_y, 140.0);
        for bar in &layout.bars {
            assert_eq!(bar.y + bar.height, layout.baseline_y);
        }
        assert_eq!(layout.bars[2].height, 0.0);
    }

    #[test]
    fn empty_dataset_has_no_bars_or_ticks() {
        let (svg, chart) = padding();
        let layout = project_bar_layout(&DataSet::empty(), Viewport::new(300, 200), svg, chart, 5.0)
            .expect("layout");
        assert!(layout.bars.is_empty());
        assert!(layout.y_axis.is_empty());
    }

    #[test]
    fn too_many_bars_fail_fast() {
        let dataset =
            DataSet::from_pairs((0..100).map(|i| (format!("k{i}"), 1.0))).expect("dataset");
        let (svg, chart) = padding();
        let err = project_bar_layout(&dataset, Viewport::new(300, 200), svg, chart, 5.0)
            .expect_err("bars cannot fit");
        assert!(matches!(err, ChartError::InsufficientWidth { count: 100, .. }));
    }

    #[test]
    fn paddings_taller_than_surface_are_rejected() {
        let dataset = DataSet::from_pairs([("a", 1.0)]).expect("dataset");
        let (svg, chart) = padding();
        let err = project_bar_layout(&dataset, Viewport::new(300, 60), svg, chart, 5.0)
            .expect_err("negative chart height");
        assert!(matches!(err, ChartError::InvalidOptions(_)));
    }
}
