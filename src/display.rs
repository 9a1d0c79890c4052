use std::sync::Arc;

use anyhow::{Context, Result};
use arrow::array::{ArrayRef, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use arrow::util::pretty::pretty_format_batches;

use crate::data::model::{AggregationResult, Dataset};

pub const NO_ROWS_MESSAGE: &str = "No rows match the filter condition.";

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

/// `avg(price): 12.50`
pub fn render_aggregate(result: &AggregationResult) -> String {
    format!(
        "{}({}): {:.2}",
        result.spec.function, result.spec.column, result.value
    )
}

/// Render rows as a bordered grid, columns in header order.
///
/// Every column is Utf8; a cell missing from a row shows up empty.
pub fn render_table(dataset: &Dataset) -> Result<String> {
    let fields: Vec<Field> = dataset
        .column_names
        .iter()
        .map(|name| Field::new(name, DataType::Utf8, true))
        .collect();

    let columns: Vec<ArrayRef> = dataset
        .column_names
        .iter()
        .map(|name| {
            let cells: StringArray = dataset.rows.iter().map(|row| row.get(name)).collect();
            Arc::new(cells) as ArrayRef
        })
        .collect();

    let batch = RecordBatch::try_new(Arc::new(Schema::new(fields)), columns)
        .context("building result table")?;
    let table = pretty_format_batches(&[batch]).context("formatting result table")?;
    Ok(table.to_string())
}

/// Pick what to show: the aggregate if one was computed, otherwise the
/// rows, otherwise the empty-result message.
pub fn render_results(dataset: &Dataset, aggregate: Option<&AggregationResult>) -> Result<String> {
    if let Some(result) = aggregate {
        return Ok(render_aggregate(result));
    }
    if dataset.is_empty() {
        return Ok(NO_ROWS_MESSAGE.to_string());
    }
    render_table(dataset)
}

/// Write the results to stdout.
pub fn show_results(dataset: &Dataset, aggregate: Option<&AggregationResult>) -> Result<()> {
    println!("{}", render_results(dataset, aggregate)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{AggregateFunc, AggregationSpec, Row};

    fn cities() -> Dataset {
        Dataset::new(
            vec!["name".into(), "city".into()],
            vec![
                Row::from_iter([("name", "Alice"), ("city", "NY")]),
                Row::from_iter([("name", "Carol")]),
            ],
        )
    }

    #[test]
    fn aggregate_has_two_decimals() {
        let result = AggregationResult {
            spec: AggregationSpec {
                column: "age".into(),
                function: AggregateFunc::Avg,
            },
            value: 35.0,
        };
        assert_eq!(render_aggregate(&result), "avg(age): 35.00");
        assert_eq!(
            render_results(&cities(), Some(&result)).unwrap(),
            "avg(age): 35.00"
        );
    }

    #[test]
    fn table_has_headers_and_rows_in_order() {
        let out = render_results(&cities(), None).unwrap();
        let lines: Vec<&str> = out.lines().collect();

        assert!(lines[0].starts_with('+'));
        assert!(lines[1].contains("name") && lines[1].contains("city"));
        let alice = out.find("Alice").unwrap();
        let carol = out.find("Carol").unwrap();
        assert!(alice < carol);
        assert!(out.find("name").unwrap() < out.find("city").unwrap());
    }

    #[test]
    fn empty_result_message() {
        let empty = cities().with_rows(Vec::new());
        assert_eq!(render_results(&empty, None).unwrap(), NO_ROWS_MESSAGE);
    }
}
