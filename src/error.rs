use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ChartError {
    #[error("unsupported chart type: {0}")]
    UnsupportedChartType(String),

    #[error("invalid dataset: {0}")]
    InvalidDataset(String),

    #[error("degenerate dataset: {0}")]
    DegenerateDataset(String),

    #[error("insufficient width: bar width would be {bar_width}px for {count} entries")]
    InsufficientWidth { bar_width: f64, count: usize },

    #[error("invalid layout options: {0}")]
    InvalidOptions(String),

    #[error("invalid primitive: {0}")]
    InvalidPrimitive(String),
}
