mod config;
mod engine;
mod json_contract;
mod scene;
mod validation;

pub use config::{ChartType, DEFAULT_BAR_MARGIN_RIGHT, DEFAULT_CHART_ID, LayoutOptions};
pub use engine::LayoutEngine;
pub use json_contract::{
    LAYOUT_OPTIONS_JSON_SCHEMA_V1, LayoutOptionsJsonContractV1, RENDER_FRAME_JSON_SCHEMA_V1,
    RenderFrameJsonContractV1,
};
pub use scene::{VALUE_LABEL_INSET_PX, X_AXIS_LABEL_ROTATION_DEG, format_value};
