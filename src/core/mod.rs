pub mod bar_layout;
pub mod dataset;
pub mod geometry;
pub mod scale;
pub mod sector_layout;
pub mod types;

pub use bar_layout::{AxisTick, BarGeometry, BarLayout, project_bar_layout};
pub use dataset::{DataEntry, DataSet, DataSetInput};
pub use scale::LinearScale;
pub use sector_layout::{SectorGeometry, SectorLayout, project_sectors};
pub use types::{ChartPadding, DEFAULT_SVG_PADDING, Padding, Point, Viewport};
