use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// One labeled sample of a chart dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataEntry {
    pub label: String,
    pub value: f64,
}

impl DataEntry {
    #[must_use]
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

/// Raw dataset shapes accepted from callers and JSON payloads.
///
/// Either a label→value mapping (`{"A": 10, "B": 20}`) whose insertion order
/// is kept, or index-aligned `labels`/`values` sequences.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DataSetInput {
    Parallel {
        labels: Vec<String>,
        values: Vec<f64>,
    },
    Map(IndexMap<String, f64>),
}

/// Validated, ordered sequence of `(label, value)` pairs.
///
/// Every value is finite and non-negative. Emission order of all layouts
/// follows the order of `entries`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(try_from = "DataSetInput", into = "DataSetInput")]
pub struct DataSet {
    entries: Vec<DataEntry>,
}

impl DataSet {
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_pairs<I, L>(pairs: I) -> ChartResult<Self>
    where
        I: IntoIterator<Item = (L, f64)>,
        L: Into<String>,
    {
        let entries = pairs
            .into_iter()
            // `+ 0.0` folds negative zero into positive zero.
            .map(|(label, value)| DataEntry::new(label, value + 0.0))
            .collect::<Vec<_>>();
        for entry in &entries {
            validate_value(entry)?;
        }
        Ok(Self { entries })
    }

    pub fn from_map(map: IndexMap<String, f64>) -> ChartResult<Self> {
        Self::from_pairs(map)
    }

    pub fn from_parallel(labels: Vec<String>, values: Vec<f64>) -> ChartResult<Self> {
        if labels.len() != values.len() {
            return Err(ChartError::InvalidDataset(format!(
                "labels and values must have equal length (labels={}, values={})",
                labels.len(),
                values.len()
            )));
        }
        Self::from_pairs(labels.into_iter().zip(values))
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidDataset(format!("failed to parse dataset json: {e}")))
    }

    #[must_use]
    pub fn entries(&self) -> &[DataEntry] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.label.as_str())
    }

    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.entries.iter().map(|entry| entry.value)
    }
}

impl TryFrom<DataSetInput> for DataSet {
    type Error = ChartError;

    fn try_from(input: DataSetInput) -> ChartResult<Self> {
        match input {
            DataSetInput::Parallel { labels, values } => Self::from_parallel(labels, values),
            DataSetInput::Map(map) => Self::from_map(map),
        }
    }
}

impl From<DataSet> for DataSetInput {
    fn from(dataset: DataSet) -> Self {
        let (labels, values) = dataset
            .entries
            .into_iter()
            .map(|entry| (entry.label, entry.value))
            .unzip();
        Self::Parallel { labels, values }
    }
}

fn validate_value(entry: &DataEntry) -> ChartResult<()> {
    if !entry.value.is_finite() {
        return Err(ChartError::InvalidDataset(format!(
            "value for `{}` must be finite",
            entry.label
        )));
    }
    if entry.value < 0.0 {
        return Err(ChartError::InvalidDataset(format!(
            "value for `{}` must be >= 0",
            entry.label
        )));
    }
    Ok(())
}
