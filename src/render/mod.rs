mod frame;
mod null_renderer;
mod primitives;

pub use frame::RenderFrame;
pub use null_renderer::NullRenderer;
pub use primitives::{
    ArcPathPrimitive, DataAnnotation, PathCommand, Primitive, RectPrimitive, TextHAlign,
    TextPrimitive,
};

use crate::error::ChartResult;

/// Contract implemented by any rendering surface.
///
/// Backends receive a fully materialized, deterministic `RenderFrame` and
/// append its primitives in order, so drawing code stays isolated from chart
/// geometry.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()>;
}
