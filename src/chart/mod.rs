//! @ai:module:intent Grouped bar chart comparing models across metric labels
//! @ai:module:layer application
//! @ai:module:public_api ChartComparer, ChartLayout, ChartRenderer, SvgRenderer, BitmapRenderer, LabelSelection

pub mod font;
pub mod layout;
pub mod palette;
pub mod render;
pub mod series;

pub use font::{current_font_family, FontFamilyGuard};
pub use layout::{Bar, BarSeries, ChartLayout};
pub use palette::Palette;
pub use render::{BitmapRenderer, ChartRenderer, SvgRenderer};
pub use series::{ChartSeries, LabelSelection};

use crate::config::ChartConfig;
use crate::error::Result;
use crate::metrics::MetricResult;
use crate::size_bucket::SizeBucketMatcher;
use crate::validation::validate_results;

/// @ai:intent Validates metric results and renders them as one grouped bar chart
pub struct ChartComparer {
    config: ChartConfig,
    matcher: SizeBucketMatcher,
}

impl ChartComparer {
    /// @ai:intent Create a chart comparer with default styling
    /// @ai:effects pure
    pub fn new() -> Self {
        Self::with_config(ChartConfig::default())
    }

    /// @ai:intent Create a chart comparer with custom styling
    /// @ai:effects pure
    pub fn with_config(config: ChartConfig) -> Self {
        Self {
            config,
            matcher: SizeBucketMatcher::new(),
        }
    }

    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    /// @ai:intent Compute the chart geometry without drawing anything
    /// @ai:pre results.len() == model_names.len() > 0, all results of one family
    /// @ai:effects pure
    pub fn layout<R, S>(
        &self,
        results: &[R],
        model_names: &[S],
        include_object_sizes: bool,
    ) -> Result<ChartLayout>
    where
        R: MetricResult,
        S: AsRef<str>,
    {
        validate_results(results, model_names)?;
        let palette = Palette::from_hex(&self.config.palette)?;

        let mut series = ChartSeries::collect(results);
        if !include_object_sizes {
            series = series.select(&self.config.label_selection, &self.matcher);
        }

        tracing::debug!(
            "Laying out {} labels for {} models",
            series.labels.len(),
            model_names.len()
        );

        Ok(ChartLayout::build(
            series,
            model_names,
            &palette,
            &self.config,
            include_object_sizes,
        ))
    }

    /// @ai:intent Validate, lay out and draw one grouped bar chart
    /// @ai:post renderer font family is the configured one while drawing and
    ///          restored afterwards, whether or not drawing succeeds
    /// @ai:effects io
    pub fn compare<R, S>(
        &self,
        results: &[R],
        model_names: &[S],
        include_object_sizes: bool,
        renderer: &mut dyn ChartRenderer,
    ) -> Result<()>
    where
        R: MetricResult,
        S: AsRef<str>,
    {
        let layout = self.layout(results, model_names, include_object_sizes)?;

        let _font = FontFamilyGuard::set(&self.config.font_family);
        renderer.render(&layout)
    }
}

impl Default for ChartComparer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::metrics::{
        AnyMetricResult, MeanAveragePrecisionResult, ObjectSizeScores, PrecisionResult,
        RecallResult,
    };
    use crate::testing::StubResult;
    use pretty_assertions::assert_eq;

    const LABELS: [&str; 5] = [
        "Precision",
        "Recall",
        "F1",
        "Precision (small)",
        "Precision (medium)",
    ];
    const VALUES: [f64; 5] = [0.8, 0.7, 0.75, 0.6, 0.85];

    /// Captures what it was asked to draw.
    #[derive(Default)]
    struct RecordingRenderer {
        layouts: Vec<ChartLayout>,
        font_families: Vec<String>,
        fail: bool,
    }

    impl ChartRenderer for RecordingRenderer {
        fn render(&mut self, layout: &ChartLayout) -> Result<()> {
            self.font_families.push(current_font_family());
            if self.fail {
                return Err(Error::Render("backend unavailable".to_string()));
            }
            self.layouts.push(layout.clone());
            Ok(())
        }
    }

    fn two_models() -> Vec<StubResult> {
        vec![
            StubResult::new(&LABELS, &VALUES),
            StubResult::new(&LABELS, &VALUES),
        ]
    }

    #[test]
    fn test_excluding_sizes_uses_first_three_labels() {
        let mut renderer = RecordingRenderer::default();

        ChartComparer::new()
            .compare(&two_models(), &["a", "b"], false, &mut renderer)
            .unwrap();

        let layout = &renderer.layouts[0];
        assert_eq!(layout.labels, ["Precision", "Recall", "F1"]);
        for series in &layout.series {
            let values: Vec<f64> = series.bars.iter().map(|b| b.value).collect();
            assert_eq!(values, vec![0.8, 0.7, 0.75]);
        }
        assert_eq!(layout.value_label_rotation, 0.0);
    }

    #[test]
    fn test_including_sizes_uses_full_sequence() {
        let layout = ChartComparer::new()
            .layout(&two_models(), &["a", "b"], true)
            .unwrap();

        assert_eq!(layout.labels, LABELS);
        assert_eq!(layout.series[0].bars.len(), 5);
        assert_eq!(layout.value_label_rotation, 90.0);
    }

    #[test]
    fn test_legend_names_and_title() {
        let results = vec![
            MeanAveragePrecisionResult {
                map50_95: 0.4,
                map50: 0.6,
                map75: 0.45,
                object_sizes: ObjectSizeScores {
                    large: Some([0.5, 0.7, 0.55]),
                    ..Default::default()
                },
            },
            MeanAveragePrecisionResult::default(),
        ];

        let layout = ChartComparer::new()
            .layout(&results, &["baseline", "finetuned"], false)
            .unwrap();

        assert_eq!(layout.title, "Mean Average Precision");
        let names: Vec<&str> = layout.series.iter().map(|s| s.model_name.as_str()).collect();
        assert_eq!(names, vec!["baseline", "finetuned"]);
        assert_eq!(layout.labels.len(), 3);
    }

    #[test]
    fn test_by_name_selection_from_config() {
        let config = ChartConfig {
            label_selection: LabelSelection::ByName,
            ..Default::default()
        };
        let results = vec![StubResult::new(
            &["Small: AP", "AP", "AR", "Large: AR"],
            &[0.1, 0.2, 0.3, 0.4],
        )];

        let layout = ChartComparer::with_config(config)
            .layout(&results, &["m"], false)
            .unwrap();

        assert_eq!(layout.labels, ["AP", "AR"]);
    }

    #[test]
    fn test_font_family_scoped_to_render() {
        let before = current_font_family();
        let mut renderer = RecordingRenderer::default();

        ChartComparer::new()
            .compare(&two_models(), &["a", "b"], false, &mut renderer)
            .unwrap();

        assert_eq!(renderer.font_families, vec!["monospace".to_string()]);
        assert_eq!(current_font_family(), before);
    }

    #[test]
    fn test_font_family_restored_after_render_failure() {
        let before = current_font_family();
        let mut renderer = RecordingRenderer {
            fail: true,
            ..Default::default()
        };

        let err = ChartComparer::new()
            .compare(&two_models(), &["a", "b"], false, &mut renderer)
            .unwrap_err();

        assert!(matches!(err, Error::Render(_)));
        assert_eq!(current_font_family(), before);
    }

    #[test]
    fn test_validation_happens_before_rendering() {
        let mut renderer = RecordingRenderer::default();
        let results = vec![
            AnyMetricResult::Precision(PrecisionResult::default()),
            AnyMetricResult::Recall(RecallResult::default()),
        ];

        let err = ChartComparer::new()
            .compare(&results, &["a", "b"], false, &mut renderer)
            .unwrap_err();

        assert!(matches!(err, Error::HeterogeneousType { .. }));
        assert!(renderer.font_families.is_empty());
    }

    #[test]
    fn test_mismatch_and_empty_errors() {
        let comparer = ChartComparer::new();
        let mut renderer = RecordingRenderer::default();

        let err = comparer
            .compare(&two_models(), &["a"], false, &mut renderer)
            .unwrap_err();
        assert!(matches!(err, Error::InputMismatch { .. }));

        let empty: Vec<StubResult> = vec![];
        let names: Vec<&str> = vec![];
        let err = comparer
            .compare(&empty, &names, false, &mut renderer)
            .unwrap_err();
        assert!(matches!(err, Error::EmptyInput));
        assert!(renderer.layouts.is_empty());
    }

    #[test]
    fn test_invalid_palette_rejected() {
        let config = ChartConfig {
            palette: vec!["not-a-color".to_string()],
            ..Default::default()
        };

        let err = ChartComparer::with_config(config)
            .layout(&two_models(), &["a", "b"], false)
            .unwrap_err();

        assert!(matches!(err, Error::InvalidColor(_)));
    }

    #[test]
    fn test_repeated_calls_are_independent() {
        let comparer = ChartComparer::new();
        let mut renderer = RecordingRenderer::default();

        comparer
            .compare(&two_models(), &["a", "b"], true, &mut renderer)
            .unwrap();
        comparer
            .compare(&two_models(), &["a", "b"], false, &mut renderer)
            .unwrap();

        assert_eq!(renderer.layouts[0].labels.len(), 5);
        assert_eq!(renderer.layouts[1].labels.len(), 3);
    }
}
