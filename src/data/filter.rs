use log::debug;

use super::error::{QueryError, Result};
use super::model::{parse_number, Condition, Dataset, Operator, Row};

// ---------------------------------------------------------------------------
// Condition parsing
// ---------------------------------------------------------------------------

/// Parse `column<op>value`, e.g. `"age>=30"`.
///
/// Operators are tried in [`Operator::PRIORITY`] order and the first one
/// contained in the string wins, so `>=` is never read as `>` plus `=5`.
/// Column and value are trimmed.
pub fn parse_condition(raw: &str) -> Result<Condition> {
    let operator = Operator::PRIORITY
        .into_iter()
        .find(|op| raw.contains(op.symbol()))
        .ok_or_else(|| QueryError::InvalidConditionFormat(raw.to_string()))?;

    let mut parts = raw.split(operator.symbol());
    match (parts.next(), parts.next(), parts.next()) {
        (Some(column), Some(value), None) => Ok(Condition {
            column: column.trim().to_string(),
            operator,
            value: value.trim().to_string(),
        }),
        _ => Err(QueryError::InvalidConditionFormat(raw.to_string())),
    }
}

// ---------------------------------------------------------------------------
// Filtering
// ---------------------------------------------------------------------------

/// Keep the rows matching `condition`, preserving order.
///
/// With no condition the dataset is returned as is. The first row whose
/// cell is missing or not numeric (for `>`, `<`, `>=`, `<=`) aborts the
/// whole filter.
pub fn apply_filter(dataset: &Dataset, condition: Option<&str>) -> Result<Dataset> {
    let Some(raw) = condition.filter(|c| !c.is_empty()) else {
        return Ok(dataset.clone());
    };

    let condition = parse_condition(raw)?;
    debug!("filtering {} rows on {condition}", dataset.len());

    let mut kept = Vec::new();
    for row in &dataset.rows {
        if row_matches(row, &condition)? {
            kept.push(row.clone());
        }
    }

    debug!("{} of {} rows kept", kept.len(), dataset.len());
    Ok(dataset.with_rows(kept))
}

/// Evaluate `condition` against one row.
///
/// `=` compares raw text exactly; every other operator compares as floats.
pub fn row_matches(row: &Row, condition: &Condition) -> Result<bool> {
    let cell = row
        .get(&condition.column)
        .ok_or_else(|| QueryError::FilterColumnMissing {
            column: condition.column.clone(),
        })?;

    if condition.operator == Operator::Eq {
        return Ok(cell == condition.value);
    }

    let lhs = numeric(&condition.column, cell)?;
    let rhs = numeric(&condition.column, &condition.value)?;
    Ok(condition.operator.compare(lhs, rhs))
}

fn numeric(column: &str, raw: &str) -> Result<f64> {
    parse_number(raw).ok_or_else(|| QueryError::FilterValueNotNumeric {
        column: column.to_string(),
        value: raw.to_string(),
    })
}
