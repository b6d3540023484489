use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};
use crate::render::RenderFrame;

use super::LayoutOptions;

pub const RENDER_FRAME_JSON_SCHEMA_V1: u32 = 1;
pub const LAYOUT_OPTIONS_JSON_SCHEMA_V1: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderFrameJsonContractV1 {
    pub schema_version: u32,
    pub frame: RenderFrame,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutOptionsJsonContractV1 {
    pub schema_version: u32,
    pub options: LayoutOptions,
}

impl RenderFrame {
    pub fn to_json_contract_v1_pretty(&self) -> ChartResult<String> {
        let payload = RenderFrameJsonContractV1 {
            schema_version: RENDER_FRAME_JSON_SCHEMA_V1,
            frame: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ChartError::InvalidPrimitive(format!("failed to serialize frame contract v1: {e}"))
        })
    }

    /// Parses either a bare frame or a versioned contract payload.
    pub fn from_json_compat_str(input: &str) -> ChartResult<Self> {
        if let Ok(frame) = serde_json::from_str::<RenderFrame>(input) {
            return Ok(frame);
        }
        let payload: RenderFrameJsonContractV1 = serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidPrimitive(format!("failed to parse frame json payload: {e}"))
        })?;
        if payload.schema_version != RENDER_FRAME_JSON_SCHEMA_V1 {
            return Err(ChartError::InvalidPrimitive(format!(
                "unsupported frame schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.frame)
    }
}

impl LayoutOptions {
    /// Parses options from a bare object or a versioned contract payload.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let value: serde_json::Value = serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidOptions(format!("failed to parse options json: {e}"))
        })?;
        if value.get("schema_version").is_none() {
            return serde_json::from_value(value).map_err(|e| {
                ChartError::InvalidOptions(format!("failed to parse options json: {e}"))
            });
        }
        let payload: LayoutOptionsJsonContractV1 = serde_json::from_value(value).map_err(|e| {
            ChartError::InvalidOptions(format!("failed to parse options json payload: {e}"))
        })?;
        if payload.schema_version != LAYOUT_OPTIONS_JSON_SCHEMA_V1 {
            return Err(ChartError::InvalidOptions(format!(
                "unsupported options schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.options)
    }

    pub fn to_json_contract_v1_pretty(&self) -> ChartResult<String> {
        let payload = LayoutOptionsJsonContractV1 {
            schema_version: LAYOUT_OPTIONS_JSON_SCHEMA_V1,
            options: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ChartError::InvalidOptions(format!("failed to serialize options contract v1: {e}"))
        })
    }
}
