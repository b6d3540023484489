//! svg-charts: geometry engine for bar and pie/doughnut charts.
//!
//! The crate turns a small labeled dataset plus layout options into an
//! ordered list of backend-agnostic primitives (rectangles, arc paths and
//! text) in absolute pixel coordinates. Materializing them into SVG nodes or
//! any other surface is left to a `render::Renderer` implementation.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{ChartType, LayoutEngine, LayoutOptions};
pub use error::{ChartError, ChartResult};
