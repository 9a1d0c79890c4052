use log::debug;

use super::error::{QueryError, Result};
use super::model::{parse_number, AggregateFunc, AggregationResult, AggregationSpec, Dataset};

/// Parse `column=function`, e.g. `"price=avg"`.
///
/// Exactly one `=` is required. The function name is trimmed and
/// lower-cased before it is resolved.
pub fn parse_aggregation(raw: &str) -> Result<AggregationSpec> {
    let Some((column, function)) = raw.split_once('=') else {
        return Err(QueryError::InvalidAggregationFormat(raw.to_string()));
    };
    if function.contains('=') {
        return Err(QueryError::InvalidAggregationFormat(raw.to_string()));
    }

    let name = function.trim().to_lowercase();
    let function = AggregateFunc::from_name(&name)
        .ok_or(QueryError::UnsupportedAggregationFunction(name))?;

    Ok(AggregationSpec {
        column: column.trim().to_string(),
        function,
    })
}

/// Compute the requested aggregate over `dataset`.
///
/// Returns `Ok(None)` when nothing was requested or when no row carries a
/// value for the column. Empty cells are skipped; a missing column or a
/// non-empty cell that is not a number aborts.
pub fn calculate_aggregation(
    dataset: &Dataset,
    aggregation: Option<&str>,
) -> Result<Option<AggregationResult>> {
    let Some(raw) = aggregation.filter(|a| !a.is_empty()) else {
        return Ok(None);
    };
    let spec = parse_aggregation(raw)?;

    let (values, skipped) = collect_values(dataset, &spec.column)?;
    debug!(
        "{}({}): {} values from {} rows, {} empty cells skipped",
        spec.function,
        spec.column,
        values.len(),
        dataset.len(),
        skipped
    );

    Ok(spec
        .function
        .apply(&values)
        .map(|value| AggregationResult { spec, value }))
}

/// Numeric values of `column`, plus how many empty cells were left out.
fn collect_values(dataset: &Dataset, column: &str) -> Result<(Vec<f64>, usize)> {
    let mut values = Vec::with_capacity(dataset.len());
    let mut skipped = 0;
    for row in &dataset.rows {
        let cell = row
            .get(column)
            .ok_or_else(|| QueryError::AggregationColumnMissing {
                column: column.to_string(),
            })?;
        if cell.is_empty() {
            skipped += 1;
            continue;
        }
        let value = parse_number(cell).ok_or_else(|| QueryError::AggregationValueNotNumeric {
            column: column.to_string(),
            value: cell.to_string(),
        })?;
        values.push(value);
    }
    Ok((values, skipped))
}
