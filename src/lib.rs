//! @ai:module:intent Compare evaluation metric results across models
//! @ai:module:layer application
//! @ai:module:public_api aggregator, chart, config, error, metrics, size_bucket, table, validation
//! @ai:module:stateless true
//!
//! # Metric Compare
//!
//! Merges per-model metric results into one table and lays them out as a
//! grouped bar chart.
//!
//! ## Example
//!
//! ```rust,no_run
//! use metric_compare::{ChartComparer, MeanAveragePrecisionResult, ResultAggregator, SvgRenderer};
//!
//! let results = vec![
//!     MeanAveragePrecisionResult { map50_95: 0.41, map50: 0.62, map75: 0.44, ..Default::default() },
//!     MeanAveragePrecisionResult { map50_95: 0.47, map50: 0.68, map75: 0.50, ..Default::default() },
//! ];
//! let names = ["yolov8n", "yolov8s"];
//!
//! let table = ResultAggregator::new().aggregate(&results, &names, false).unwrap();
//! println!("{}", table.table().to_markdown());
//!
//! let mut renderer = SvgRenderer::new();
//! ChartComparer::new().compare(&results, &names, false, &mut renderer).unwrap();
//! ```

pub mod aggregator;
pub mod chart;
pub mod config;
pub mod error;
pub mod metrics;
pub mod size_bucket;
pub mod table;
pub mod validation;

#[cfg(test)]
mod testing;

pub use aggregator::{AggregatedTable, ResultAggregator, RowGroup, MODEL_NAME_COLUMN};
pub use chart::{
    BitmapRenderer, ChartComparer, ChartLayout, ChartRenderer, LabelSelection, SvgRenderer,
};
pub use config::{ChartConfig, CompareConfig};
pub use error::{Error, Result};
pub use metrics::{
    AnyMetricResult, F1ScoreResult, MeanAveragePrecisionResult, MeanAverageRecallResult,
    MetricFamily, MetricResult, ObjectSizeScores, PlotData, PrecisionResult, RecallResult,
};
pub use size_bucket::SizeBucketMatcher;
pub use table::{Cell, MetricTable};
