//! @ai:module:intent Metric result capability shared by every metric family
//! @ai:module:layer domain
//! @ai:module:public_api MetricResult, MetricFamily, PlotData, AnyMetricResult
//! @ai:module:stateless true

pub mod families;

pub use families::{
    AnyMetricResult, F1ScoreResult, MeanAveragePrecisionResult, MeanAverageRecallResult,
    ObjectSizeScores, PrecisionResult, RecallResult,
};

use crate::table::MetricTable;

/// @ai:intent Structural tag identifying the concrete metric family of a result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetricFamily {
    MeanAveragePrecision,
    MeanAverageRecall,
    Precision,
    Recall,
    F1Score,
    /// Result types defined outside this crate.
    Custom(&'static str),
}

impl MetricFamily {
    /// @ai:intent Convert family to string representation
    /// @ai:effects pure
    pub fn as_str(&self) -> &'static str {
        match self {
            MetricFamily::MeanAveragePrecision => "MeanAveragePrecisionResult",
            MetricFamily::MeanAverageRecall => "MeanAverageRecallResult",
            MetricFamily::Precision => "PrecisionResult",
            MetricFamily::Recall => "RecallResult",
            MetricFamily::F1Score => "F1ScoreResult",
            MetricFamily::Custom(name) => name,
        }
    }
}

impl std::fmt::Display for MetricFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// @ai:intent Flattened chart view of one metric result
/// @ai:invariant labels.len() == values.len() for well-formed results
#[derive(Debug, Clone, PartialEq)]
pub struct PlotData {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
    pub title: String,
}

/// @ai:intent Capability set every metric result exposes to aggregation and charting
pub trait MetricResult {
    /// @ai:intent Concrete family of this result, compared for homogeneity
    fn family(&self) -> MetricFamily;

    /// @ai:intent Row-oriented table view; size-bucketed columns carry small/medium/large in their name
    fn to_table(&self) -> MetricTable;

    /// @ai:intent Ordered (label, value) pairs and a title, non-size-bucketed labels first
    fn to_plot_data(&self) -> PlotData;
}

impl<T: MetricResult + ?Sized> MetricResult for &T {
    fn family(&self) -> MetricFamily {
        (**self).family()
    }

    fn to_table(&self) -> MetricTable {
        (**self).to_table()
    }

    fn to_plot_data(&self) -> PlotData {
        (**self).to_plot_data()
    }
}

impl<T: MetricResult + ?Sized> MetricResult for Box<T> {
    fn family(&self) -> MetricFamily {
        (**self).family()
    }

    fn to_table(&self) -> MetricTable {
        (**self).to_table()
    }

    fn to_plot_data(&self) -> PlotData {
        (**self).to_plot_data()
    }
}
