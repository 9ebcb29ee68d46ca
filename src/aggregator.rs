//! @ai:module:intent Merge per-model metric results into one comparable table
//! @ai:module:layer application
//! @ai:module:public_api ResultAggregator, AggregatedTable, RowGroup, MODEL_NAME_COLUMN
//! @ai:module:stateless true

use crate::error::Result;
use crate::metrics::MetricResult;
use crate::size_bucket::SizeBucketMatcher;
use crate::table::{Cell, MetricTable};
use crate::validation::validate_results;
use serde::Serialize;

/// Leading column added to every merged table.
pub const MODEL_NAME_COLUMN: &str = "Model Name";

/// @ai:intent Rows of the merged table contributed by one model
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RowGroup {
    pub model_name: String,
    pub start: usize,
    pub len: usize,
}

/// @ai:intent Merged table plus the row range each input result occupies
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregatedTable {
    table: MetricTable,
    row_groups: Vec<RowGroup>,
}

impl AggregatedTable {
    pub fn table(&self) -> &MetricTable {
        &self.table
    }

    pub fn row_groups(&self) -> &[RowGroup] {
        &self.row_groups
    }

    pub fn into_table(self) -> MetricTable {
        self.table
    }
}

/// @ai:intent Validates and merges metric results, one row group per model
pub struct ResultAggregator {
    matcher: SizeBucketMatcher,
}

impl ResultAggregator {
    /// @ai:intent Create a new result aggregator
    /// @ai:effects pure
    pub fn new() -> Self {
        Self {
            matcher: SizeBucketMatcher::new(),
        }
    }

    /// @ai:intent Concatenate each result's table under a leading model-name column
    /// @ai:pre results.len() == model_names.len() > 0, all results of one family
    /// @ai:post row groups follow input order; no size-bucketed column remains
    ///          unless include_object_sizes is set
    /// @ai:effects pure
    pub fn aggregate<R, S>(
        &self,
        results: &[R],
        model_names: &[S],
        include_object_sizes: bool,
    ) -> Result<AggregatedTable>
    where
        R: MetricResult,
        S: AsRef<str>,
    {
        validate_results(results, model_names)?;

        tracing::debug!(
            "Aggregating {} {} results",
            results.len(),
            results[0].family()
        );

        let mut tables = Vec::with_capacity(results.len());
        let mut row_groups = Vec::with_capacity(results.len());
        let mut start = 0;

        for (result, name) in results.iter().zip(model_names) {
            let name = name.as_ref();
            let mut table = result.to_table();
            table.insert_column(0, MODEL_NAME_COLUMN, Cell::from(name));

            row_groups.push(RowGroup {
                model_name: name.to_string(),
                start,
                len: table.len(),
            });
            start += table.len();
            tables.push(table);
        }

        let mut merged = MetricTable::concat(tables);

        if !include_object_sizes {
            let dropped = merged.drop_columns_where(|c| self.matcher.is_size_bucketed(c));
            if !dropped.is_empty() {
                tracing::debug!("Dropped size-bucketed columns: {}", dropped.join(", "));
            }
        }

        Ok(AggregatedTable {
            table: merged,
            row_groups,
        })
    }
}

impl Default for ResultAggregator {
    fn default() -> Self {
        Self::new()
    }
}
