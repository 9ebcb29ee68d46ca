//! Test doubles shared by unit tests.

use crate::metrics::{MetricFamily, MetricResult, PlotData};
use crate::table::{Cell, MetricTable};

/// Metric result with hand-picked table columns and plot data.
#[derive(Debug, Clone)]
pub(crate) struct StubResult {
    family: &'static str,
    labels: Vec<String>,
    values: Vec<f64>,
    columns: Vec<String>,
}

impl StubResult {
    /// Table columns default to the plot labels.
    pub(crate) fn new(labels: &[&str], values: &[f64]) -> Self {
        Self {
            family: "StubResult",
            labels: labels.iter().map(|l| l.to_string()).collect(),
            values: values.to_vec(),
            columns: labels.iter().map(|l| l.to_string()).collect(),
        }
    }

    pub(crate) fn with_family(mut self, family: &'static str) -> Self {
        self.family = family;
        self
    }

    pub(crate) fn with_columns(mut self, columns: &[&str]) -> Self {
        self.columns = columns.iter().map(|c| c.to_string()).collect();
        self
    }
}

impl MetricResult for StubResult {
    fn family(&self) -> MetricFamily {
        MetricFamily::Custom(self.family)
    }

    fn to_table(&self) -> MetricTable {
        MetricTable::single_row(self.columns.iter().enumerate().map(|(i, column)| {
            (
                column.clone(),
                Cell::Number(self.values.get(i).copied().unwrap_or(0.0)),
            )
        }))
    }

    fn to_plot_data(&self) -> PlotData {
        PlotData {
            labels: self.labels.clone(),
            values: self.values.clone(),
            title: "Stub Metric".to_string(),
        }
    }
}
