//! @ai:module:intent Grouped bar chart geometry, independent of any drawing backend
//! @ai:module:layer domain
//! @ai:module:public_api ChartLayout, BarSeries, Bar, bar_width, bar_offset, CLUSTER_WIDTH, Y_RANGE
//! @ai:module:stateless true

use crate::chart::palette::Palette;
use crate::chart::series::ChartSeries;
use crate::config::ChartConfig;
use plotters::style::RGBColor;

/// Rotation of value annotations when size buckets widen the chart.
const CROWDED_VALUE_ROTATION: f64 = 90.0;

/// Total width of one label's bar cluster in axis units.
pub const CLUSTER_WIDTH: f64 = 0.8;

/// Scores are fractions, so the value axis is fixed.
pub const Y_RANGE: (f64, f64) = (0.0, 1.0);

/// @ai:intent Width of a single bar when n bars share one cluster
/// @ai:pre n > 0
/// @ai:effects pure
pub fn bar_width(cluster_width: f64, n: usize) -> f64 {
    cluster_width / n as f64
}

/// @ai:intent Horizontal offset of the i-th of n bars from the cluster center
/// @ai:post offsets of all n bars sum to zero
/// @ai:effects pure
pub fn bar_offset(i: usize, n: usize, width: f64) -> f64 {
    (i as f64 - (n as f64 - 1.0) / 2.0) * width
}

/// @ai:intent One bar with its value annotation
#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub label_index: usize,
    pub center: f64,
    pub value: f64,
    pub annotation: String,
    pub annotation_y: f64,
}

/// @ai:intent All bars belonging to one model
#[derive(Debug, Clone, PartialEq)]
pub struct BarSeries {
    pub model_name: String,
    pub color: RGBColor,
    pub offset: f64,
    pub bars: Vec<Bar>,
}

/// @ai:intent Everything a backend needs to draw the grouped bar chart
/// @ai:invariant tick_positions.len() == labels.len()
#[derive(Debug, Clone, PartialEq)]
pub struct ChartLayout {
    pub title: String,
    pub y_axis_label: String,
    pub labels: Vec<String>,
    pub tick_positions: Vec<f64>,
    pub bar_width: f64,
    pub series: Vec<BarSeries>,
    pub y_range: (f64, f64),
    pub size: (u32, u32),
    /// Degrees counter-clockwise.
    pub tick_label_rotation: f64,
    /// Degrees counter-clockwise.
    pub value_label_rotation: f64,
}

impl ChartLayout {
    /// @ai:intent Position one cluster of bars per label, one bar per model
    /// @ai:pre model_names.len() == series.values.len() > 0
    /// @ai:effects pure
    pub fn build<S: AsRef<str>>(
        series: ChartSeries,
        model_names: &[S],
        palette: &Palette,
        config: &ChartConfig,
        include_object_sizes: bool,
    ) -> Self {
        let n = model_names.len().max(1);
        let width = bar_width(CLUSTER_WIDTH, n);
        let tick_positions: Vec<f64> = (0..series.labels.len()).map(|i| i as f64).collect();

        let bar_series = series
            .values
            .iter()
            .zip(model_names)
            .enumerate()
            .map(|(i, (values, name))| {
                let offset = bar_offset(i, n, width);
                let bars = tick_positions
                    .iter()
                    .zip(values)
                    .enumerate()
                    .map(|(label_index, (tick, value))| Bar {
                        label_index,
                        center: tick + offset,
                        value: *value,
                        annotation: format!("{:.2}", value),
                        annotation_y: value + config.value_label_offset,
                    })
                    .collect();

                BarSeries {
                    model_name: name.as_ref().to_string(),
                    color: palette.color(i),
                    offset,
                    bars,
                }
            })
            .collect();

        Self {
            title: series.title,
            y_axis_label: "Value".to_string(),
            labels: series.labels,
            tick_positions,
            bar_width: width,
            series: bar_series,
            y_range: Y_RANGE,
            size: (config.width, config.height),
            tick_label_rotation: config.tick_label_rotation,
            value_label_rotation: if include_object_sizes {
                CROWDED_VALUE_ROTATION
            } else {
                0.0
            },
        }
    }

    /// @ai:intent Horizontal axis range with half a slot of padding at each end
    /// @ai:effects pure
    pub fn x_range(&self) -> (f64, f64) {
        (-0.5, self.labels.len().max(1) as f64 - 0.5)
    }
}
