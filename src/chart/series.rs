//! @ai:module:intent Collect per-model value sequences aligned to shared labels
//! @ai:module:layer application
//! @ai:module:public_api ChartSeries, LabelSelection
//! @ai:module:stateless true

use crate::metrics::MetricResult;
use crate::size_bucket::SizeBucketMatcher;
use serde::{Deserialize, Serialize};

/// @ai:intent How labels are reduced when object sizes are excluded
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum LabelSelection {
    /// Keep the first `count` labels; results list their overall labels first.
    Leading { count: usize },
    /// Drop labels whose name matches the size-bucket pattern.
    ByName,
}

impl Default for LabelSelection {
    fn default() -> Self {
        LabelSelection::Leading { count: 3 }
    }
}

/// @ai:intent One value sequence per model, positionally aligned to the first result's labels
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSeries {
    pub title: String,
    pub labels: Vec<String>,
    pub values: Vec<Vec<f64>>,
}

impl ChartSeries {
    /// @ai:intent Gather plot data, taking labels and title from the first result
    /// @ai:pre results is non-empty and validated
    /// @ai:effects pure
    pub fn collect<R: MetricResult>(results: &[R]) -> Self {
        let mut plots = results.iter().map(|r| r.to_plot_data());

        let Some(first) = plots.next() else {
            return Self {
                title: String::new(),
                labels: Vec::new(),
                values: Vec::new(),
            };
        };

        let mut values = vec![first.values];
        for (offset, plot) in plots.enumerate() {
            if plot.values.len() != first.labels.len() {
                tracing::warn!(
                    "Model {} has {} values for {} labels; pairing positionally",
                    offset + 1,
                    plot.values.len(),
                    first.labels.len()
                );
            }
            values.push(plot.values);
        }

        Self {
            title: first.title,
            labels: first.labels,
            values,
        }
    }

    /// @ai:intent Reduce labels and every value sequence to the non-size-bucketed subset
    /// @ai:effects pure
    pub fn select(mut self, selection: &LabelSelection, matcher: &SizeBucketMatcher) -> Self {
        match selection {
            LabelSelection::Leading { count } => {
                self.labels.truncate(*count);
                for values in &mut self.values {
                    values.truncate(*count);
                }
            }
            LabelSelection::ByName => {
                let keep: Vec<bool> = self
                    .labels
                    .iter()
                    .map(|l| !matcher.is_size_bucketed(l))
                    .collect();

                let mut flags = keep.iter();
                self.labels.retain(|_| *flags.next().unwrap_or(&false));

                for values in &mut self.values {
                    let mut flags = keep.iter();
                    values.retain(|_| *flags.next().unwrap_or(&false));
                }
            }
        }

        tracing::debug!("Selected labels: {}", self.labels.join(", "));
        self
    }
}
