use std::path::PathBuf;

use thiserror::Error;

/// Everything that can abort a load / filter / aggregate run.
///
/// None of these are recovered from: the first one raised ends the run.
#[derive(Debug, Error)]
pub enum QueryError {
    #[error("file '{}' not found", path.display())]
    FileNotFound { path: PathBuf },

    #[error("cannot read '{}'", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed CSV")]
    Csv(#[from] csv::Error),

    #[error("invalid filter condition '{0}' (expected column<op>value with op one of >=, <=, >, <, =)")]
    InvalidConditionFormat(String),

    #[error("invalid aggregation '{0}' (expected column=function)")]
    InvalidAggregationFormat(String),

    #[error("filter failed: column '{column}' not found")]
    FilterColumnMissing { column: String },

    #[error("filter failed: could not convert '{value}' in column '{column}' to a number")]
    FilterValueNotNumeric { column: String, value: String },

    #[error("aggregation failed: column '{column}' not found")]
    AggregationColumnMissing { column: String },

    #[error("aggregation failed: could not convert '{value}' in column '{column}' to a number")]
    AggregationValueNotNumeric { column: String, value: String },

    #[error("unsupported aggregation function '{0}' (expected avg, min or max)")]
    UnsupportedAggregationFunction(String),
}

pub type Result<T> = std::result::Result<T, QueryError>;
