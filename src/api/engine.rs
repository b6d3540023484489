use tracing::{debug, warn};

use crate::core::{DataSet, project_bar_layout, project_sectors};
use crate::error::ChartResult;
use crate::render::{Primitive, RenderFrame, Renderer};

use super::scene::{bar_primitives, sector_primitives};
use super::validation::validate_layout_options;
use super::{ChartType, LayoutOptions};

/// Stateless layout engine turning `(data, options)` into render primitives.
///
/// Every call is independent: inputs are only read and the returned
/// primitives are freshly allocated, so one engine can be shared freely
/// between threads and resize passes.
#[derive(Debug, Clone, Copy, Default)]
pub struct LayoutEngine;

impl LayoutEngine {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Lays out `dataset` as `chart_type` for a container `container_width`
    /// pixels wide.
    ///
    /// An empty dataset yields an empty list. Otherwise the result is either
    /// the complete primitive list in paint order or the first validation
    /// error.
    pub fn compute(
        &self,
        chart_type: ChartType,
        dataset: &DataSet,
        options: &LayoutOptions,
        container_width: f64,
    ) -> ChartResult<Vec<Primitive>> {
        if dataset.is_empty() {
            debug!(%chart_type, "empty dataset, nothing to lay out");
            return Ok(Vec::new());
        }
        self.compute_frame(chart_type, dataset, options, container_width)
            .map(|frame| frame.primitives)
    }

    /// Same as `compute`, with the chart type given by name.
    pub fn compute_named(
        &self,
        chart_type: &str,
        dataset: &DataSet,
        options: &LayoutOptions,
        container_width: f64,
    ) -> ChartResult<Vec<Primitive>> {
        let chart_type = chart_type.parse::<ChartType>().inspect_err(|err| {
            warn!(error = %err, "layout rejected");
        })?;
        self.compute(chart_type, dataset, options, container_width)
    }

    /// Lays out `dataset` using `options.chart_type`.
    pub fn compute_configured(
        &self,
        dataset: &DataSet,
        options: &LayoutOptions,
        container_width: f64,
    ) -> ChartResult<Vec<Primitive>> {
        self.compute(options.chart_type, dataset, options, container_width)
    }

    /// Builds the full frame, including the resolved surface size.
    pub fn compute_frame(
        &self,
        chart_type: ChartType,
        dataset: &DataSet,
        options: &LayoutOptions,
        container_width: f64,
    ) -> ChartResult<RenderFrame> {
        self.build_frame(chart_type, dataset, options, container_width)
            .inspect_err(|err| {
                warn!(%chart_type, entries = dataset.len(), error = %err, "layout rejected");
            })
    }

    /// Computes a frame and hands it to `renderer`.
    pub fn render_into<R: Renderer>(
        &self,
        renderer: &mut R,
        chart_type: ChartType,
        dataset: &DataSet,
        options: &LayoutOptions,
        container_width: f64,
    ) -> ChartResult<RenderFrame> {
        let frame = self.compute_frame(chart_type, dataset, options, container_width)?;
        renderer.render(&frame)?;
        Ok(frame)
    }

    fn build_frame(
        &self,
        chart_type: ChartType,
        dataset: &DataSet,
        options: &LayoutOptions,
        container_width: f64,
    ) -> ChartResult<RenderFrame> {
        validate_layout_options(options)?;
        let viewport = options.resolve_viewport(container_width)?;
        debug!(
            %chart_type,
            entries = dataset.len(),
            width = viewport.width,
            height = viewport.height,
            "compute layout"
        );

        let primitives = match chart_type {
            ChartType::Bar => {
                let layout = project_bar_layout(
                    dataset,
                    viewport,
                    options.svg_padding,
                    options.chart_padding,
                    options.bar_margin_right,
                )?;
                bar_primitives(&layout, &options.id, options.value_labels)
            }
            ChartType::Pie | ChartType::Doughnut => {
                let layout =
                    project_sectors(dataset, viewport, options.svg_padding, options.centroid_padding)?;
                sector_primitives(&layout, &options.id)
            }
        };

        Ok(RenderFrame::new(viewport).with_primitives(primitives))
    }
}
