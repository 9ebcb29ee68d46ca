//! @ai:module:intent Define error types for metric aggregation and charting
//! @ai:module:layer domain
//! @ai:module:public_api Error, Result
//! @ai:module:stateless true

use crate::metrics::MetricFamily;
use thiserror::Error;

/// @ai:intent Unified error type for all metric comparison operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("Number of metric results ({results}) and model names ({model_names}) must be equal")]
    InputMismatch { results: usize, model_names: usize },

    #[error("Metric results must not be empty")]
    EmptyInput,

    #[error("All metric results must be of the same type: expected {expected}, found {found} at index {index}")]
    HeterogeneousType {
        expected: MetricFamily,
        found: MetricFamily,
        index: usize,
    },

    #[error("{family} does not satisfy the metric result contract: {reason}")]
    InvalidType { family: MetricFamily, reason: String },

    #[error("Table row has {found} cells but the table has {expected} columns")]
    RowWidth { expected: usize, found: usize },

    #[error("Invalid palette color: {0}")]
    InvalidColor(String),

    #[error("Chart rendering failed: {0}")]
    Render(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Config serialization error: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
