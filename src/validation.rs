//! @ai:module:intent Input validation shared by aggregation and charting
//! @ai:module:layer application
//! @ai:module:public_api validate_results, check_contract
//! @ai:module:stateless true

use crate::aggregator::MODEL_NAME_COLUMN;
use crate::error::{Error, Result};
use crate::metrics::MetricResult;

/// @ai:intent Validate a list of per-model results against their model names
/// @ai:pre none
/// @ai:post Ok only if lengths match, the list is non-empty, all results share
///          the first result's family and the first result honors the contract
/// @ai:effects pure
pub fn validate_results<R, S>(results: &[R], model_names: &[S]) -> Result<()>
where
    R: MetricResult,
    S: AsRef<str>,
{
    if results.len() != model_names.len() {
        return Err(Error::InputMismatch {
            results: results.len(),
            model_names: model_names.len(),
        });
    }

    let Some(first) = results.first() else {
        return Err(Error::EmptyInput);
    };

    let expected = first.family();
    if let Some((index, other)) = results
        .iter()
        .enumerate()
        .skip(1)
        .find(|(_, r)| r.family() != expected)
    {
        return Err(Error::HeterogeneousType {
            expected,
            found: other.family(),
            index,
        });
    }

    check_contract(first)
}

/// @ai:intent Structurally check that a result exposes usable table and plot views
/// @ai:effects pure
pub fn check_contract<R: MetricResult + ?Sized>(result: &R) -> Result<()> {
    let invalid = |reason: String| Error::InvalidType {
        family: result.family(),
        reason,
    };

    let table = result.to_table();
    if table.columns().is_empty() {
        return Err(invalid("table has no columns".to_string()));
    }
    if table.has_column(MODEL_NAME_COLUMN) {
        return Err(invalid(format!(
            "table already has a '{}' column",
            MODEL_NAME_COLUMN
        )));
    }

    let plot = result.to_plot_data();
    if plot.labels.is_empty() {
        return Err(invalid("plot data has no labels".to_string()));
    }
    if plot.labels.len() != plot.values.len() {
        return Err(invalid(format!(
            "plot data has {} labels but {} values",
            plot.labels.len(),
            plot.values.len()
        )));
    }

    Ok(())
}
