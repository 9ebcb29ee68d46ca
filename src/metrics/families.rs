//! @ai:module:intent Concrete detection metric result families
//! @ai:module:layer domain
//! @ai:module:public_api MeanAveragePrecisionResult, MeanAverageRecallResult, PrecisionResult, RecallResult, F1ScoreResult, AnyMetricResult
//! @ai:module:stateless true

use crate::metrics::{MetricFamily, MetricResult, PlotData};
use crate::table::{Cell, MetricTable};
use serde::{Deserialize, Serialize};

/// @ai:intent Headline scores recomputed on small, medium and large objects only
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ObjectSizeScores {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub small: Option<[f64; 3]>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub medium: Option<[f64; 3]>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub large: Option<[f64; 3]>,
}

impl ObjectSizeScores {
    /// @ai:intent Present buckets as (table prefix, plot prefix, scores), smallest first
    /// @ai:effects pure
    fn buckets(&self) -> impl Iterator<Item = (&'static str, &'static str, [f64; 3])> {
        [
            ("small_objects", "Small", self.small),
            ("medium_objects", "Medium", self.medium),
            ("large_objects", "Large", self.large),
        ]
        .into_iter()
        .filter_map(|(column, label, scores)| scores.map(|s| (column, label, s)))
    }
}

/// @ai:intent Build the one-row table shared by all headline-score families
/// @ai:effects pure
fn headline_table(names: [&str; 3], headline: [f64; 3], sizes: &ObjectSizeScores) -> MetricTable {
    let mut entries: Vec<(String, Cell)> = names
        .iter()
        .zip(headline)
        .map(|(name, value)| (name.to_string(), Cell::Number(value)))
        .collect();

    for (prefix, _, scores) in sizes.buckets() {
        for (name, value) in names.iter().zip(scores) {
            entries.push((format!("{}_{}", prefix, name), Cell::Number(value)));
        }
    }

    MetricTable::single_row(entries)
}

/// @ai:intent Build plot data with headline labels first, then per-size labels
/// @ai:effects pure
fn headline_plot(
    title: &str,
    names: [&str; 3],
    headline: [f64; 3],
    sizes: &ObjectSizeScores,
) -> PlotData {
    let mut labels: Vec<String> = names.iter().map(|n| n.to_string()).collect();
    let mut values = headline.to_vec();

    for (_, prefix, scores) in sizes.buckets() {
        labels.extend(names.iter().map(|name| format!("{}: {}", prefix, name)));
        values.extend(scores);
    }

    PlotData {
        labels,
        values,
        title: title.to_string(),
    }
}

/// @ai:intent Mean average precision over IoU thresholds
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MeanAveragePrecisionResult {
    pub map50_95: f64,
    pub map50: f64,
    pub map75: f64,
    #[serde(default)]
    pub object_sizes: ObjectSizeScores,
}

impl MeanAveragePrecisionResult {
    const NAMES: [&'static str; 3] = ["mAP@50:95", "mAP@50", "mAP@75"];

    fn headline(&self) -> [f64; 3] {
        [self.map50_95, self.map50, self.map75]
    }
}

impl MetricResult for MeanAveragePrecisionResult {
    fn family(&self) -> MetricFamily {
        MetricFamily::MeanAveragePrecision
    }

    fn to_table(&self) -> MetricTable {
        headline_table(Self::NAMES, self.headline(), &self.object_sizes)
    }

    fn to_plot_data(&self) -> PlotData {
        headline_plot(
            "Mean Average Precision",
            Self::NAMES,
            self.headline(),
            &self.object_sizes,
        )
    }
}

/// @ai:intent Mean average recall at 1, 10 and 100 detections per image
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MeanAverageRecallResult {
    pub mar_at_1: f64,
    pub mar_at_10: f64,
    pub mar_at_100: f64,
    #[serde(default)]
    pub object_sizes: ObjectSizeScores,
}

impl MeanAverageRecallResult {
    const NAMES: [&'static str; 3] = ["mAR@1", "mAR@10", "mAR@100"];

    fn headline(&self) -> [f64; 3] {
        [self.mar_at_1, self.mar_at_10, self.mar_at_100]
    }
}

impl MetricResult for MeanAverageRecallResult {
    fn family(&self) -> MetricFamily {
        MetricFamily::MeanAverageRecall
    }

    fn to_table(&self) -> MetricTable {
        headline_table(Self::NAMES, self.headline(), &self.object_sizes)
    }

    fn to_plot_data(&self) -> PlotData {
        headline_plot(
            "Mean Average Recall",
            Self::NAMES,
            self.headline(),
            &self.object_sizes,
        )
    }
}

/// @ai:intent Precision averaged over IoU thresholds and at IoU 0.50 / 0.75
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PrecisionResult {
    pub precision_at_50_95: f64,
    pub precision_at_50: f64,
    pub precision_at_75: f64,
    #[serde(default)]
    pub object_sizes: ObjectSizeScores,
}

impl MetricResult for PrecisionResult {
    fn family(&self) -> MetricFamily {
        MetricFamily::Precision
    }

    fn to_table(&self) -> MetricTable {
        headline_table(
            ["P@50:95", "P@50", "P@75"],
            [self.precision_at_50_95, self.precision_at_50, self.precision_at_75],
            &self.object_sizes,
        )
    }

    fn to_plot_data(&self) -> PlotData {
        headline_plot(
            "Precision",
            ["P@50:95", "P@50", "P@75"],
            [self.precision_at_50_95, self.precision_at_50, self.precision_at_75],
            &self.object_sizes,
        )
    }
}

/// @ai:intent Recall averaged over IoU thresholds and at IoU 0.50 / 0.75
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecallResult {
    pub recall_at_50_95: f64,
    pub recall_at_50: f64,
    pub recall_at_75: f64,
    #[serde(default)]
    pub object_sizes: ObjectSizeScores,
}

impl MetricResult for RecallResult {
    fn family(&self) -> MetricFamily {
        MetricFamily::Recall
    }

    fn to_table(&self) -> MetricTable {
        headline_table(
            ["R@50:95", "R@50", "R@75"],
            [self.recall_at_50_95, self.recall_at_50, self.recall_at_75],
            &self.object_sizes,
        )
    }

    fn to_plot_data(&self) -> PlotData {
        headline_plot(
            "Recall",
            ["R@50:95", "R@50", "R@75"],
            [self.recall_at_50_95, self.recall_at_50, self.recall_at_75],
            &self.object_sizes,
        )
    }
}

/// @ai:intent F1 score averaged over IoU thresholds and at IoU 0.50 / 0.75
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct F1ScoreResult {
    pub f1_at_50_95: f64,
    pub f1_at_50: f64,
    pub f1_at_75: f64,
    #[serde(default)]
    pub object_sizes: ObjectSizeScores,
}

impl MetricResult for F1ScoreResult {
    fn family(&self) -> MetricFamily {
        MetricFamily::F1Score
    }

    fn to_table(&self) -> MetricTable {
        headline_table(
            ["F1@50:95", "F1@50", "F1@75"],
            [self.f1_at_50_95, self.f1_at_50, self.f1_at_75],
            &self.object_sizes,
        )
    }

    fn to_plot_data(&self) -> PlotData {
        headline_plot(
            "F1 Score",
            ["F1@50:95", "F1@50", "F1@75"],
            [self.f1_at_50_95, self.f1_at_50, self.f1_at_75],
            &self.object_sizes,
        )
    }
}

/// @ai:intent Any built-in metric result, tagged by family for JSON input
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "metric", rename_all = "snake_case")]
pub enum AnyMetricResult {
    MeanAveragePrecision(MeanAveragePrecisionResult),
    MeanAverageRecall(MeanAverageRecallResult),
    Precision(PrecisionResult),
    Recall(RecallResult),
    F1Score(F1ScoreResult),
}

impl AnyMetricResult {
    fn inner(&self) -> &dyn MetricResult {
        match self {
            AnyMetricResult::MeanAveragePrecision(r) => r,
            AnyMetricResult::MeanAverageRecall(r) => r,
            AnyMetricResult::Precision(r) => r,
            AnyMetricResult::Recall(r) => r,
            AnyMetricResult::F1Score(r) => r,
        }
    }
}

impl MetricResult for AnyMetricResult {
    fn family(&self) -> MetricFamily {
        self.inner().family()
    }

    fn to_table(&self) -> MetricTable {
        self.inner().to_table()
    }

    fn to_plot_data(&self) -> PlotData {
        self.inner().to_plot_data()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn map_with_small() -> MeanAveragePrecisionResult {
        MeanAveragePrecisionResult {
            map50_95: 0.45,
            map50: 0.7,
            map75: 0.5,
            object_sizes: ObjectSizeScores {
                small: Some([0.2, 0.4, 0.25]),
                ..Default::default()
            },
        }
    }

    #[test]
    fn test_table_columns_include_size_prefix() {
        let table = map_with_small().to_table();

        assert_eq!(
            table.columns(),
            &[
                "mAP@50:95",
                "mAP@50",
                "mAP@75",
                "small_objects_mAP@50:95",
                "small_objects_mAP@50",
                "small_objects_mAP@75",
            ]
        );
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_plot_data_headline_first() {
        let plot = map_with_small().to_plot_data();

        assert_eq!(plot.title, "Mean Average Precision");
        assert_eq!(&plot.labels[..3], &["mAP@50:95", "mAP@50", "mAP@75"]);
        assert_eq!(plot.labels[3], "Small: mAP@50:95");
        assert_eq!(plot.values, vec![0.45, 0.7, 0.5, 0.2, 0.4, 0.25]);
    }

    #[test]
    fn test_plot_without_sizes_has_three_labels() {
        let plot = F1ScoreResult {
            f1_at_50_95: 0.3,
            f1_at_50: 0.6,
            f1_at_75: 0.4,
            ..Default::default()
        }
        .to_plot_data();

        assert_eq!(plot.labels.len(), 3);
        assert_eq!(plot.values.len(), 3);
    }

    #[test]
    fn test_any_result_from_json() {
        let json = r#"{
            "metric": "recall",
            "recall_at_50_95": 0.4,
            "recall_at_50": 0.6,
            "recall_at_75": 0.45,
            "object_sizes": { "large": [0.5, 0.7, 0.55] }
        }"#;

        let result: AnyMetricResult = serde_json::from_str(json).unwrap();

        assert_eq!(result.family(), MetricFamily::Recall);
        assert!(result.to_table().has_column("large_objects_R@50"));
        assert_eq!(result.to_plot_data().labels.len(), 6);
    }

    #[test]
    fn test_families_are_distinct() {
        let a = AnyMetricResult::Precision(PrecisionResult::default());
        let b = AnyMetricResult::Recall(RecallResult::default());
        assert_ne!(a.family(), b.family());
    }
}
