use std::collections::BTreeMap;
use std::fmt;

// ---------------------------------------------------------------------------
// Row – one record of the input table
// ---------------------------------------------------------------------------

/// A single record: column_name → raw cell text.
///
/// Cells are never typed at load time; numeric interpretation happens on
/// demand through [`parse_number`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row {
    pub cells: BTreeMap<String, String>,
}

impl Row {
    /// Raw text of `column`, or `None` if this row has no such key.
    pub fn get(&self, column: &str) -> Option<&str> {
        self.cells.get(column).map(String::as_str)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Row {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Row {
            cells: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Interpret a cell (or condition value) as a float.
///
/// Surrounding whitespace is ignored, so `" 30 "` parses but `""` does not.
pub fn parse_number(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok()
}

// ---------------------------------------------------------------------------
// Dataset – the complete loaded table
// ---------------------------------------------------------------------------

/// All rows in file order plus the header order used for display.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    /// Rows, insertion order = file order.
    pub rows: Vec<Row>,
    /// Header-derived column names, first occurrence order.
    pub column_names: Vec<String>,
}

impl Dataset {
    pub fn new(column_names: Vec<String>, rows: Vec<Row>) -> Self {
        Dataset { rows, column_names }
    }

    /// A dataset with the same header but a different set of rows.
    pub fn with_rows(&self, rows: Vec<Row>) -> Self {
        Dataset {
            rows,
            column_names: self.column_names.clone(),
        }
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the dataset has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Condition – column / operator / value
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Eq,
    Gt,
    Lt,
    Ge,
    Le,
}

impl Operator {
    /// Scan order for condition parsing. Two-character operators come before
    /// their one-character prefixes.
    pub const PRIORITY: [Operator; 5] = [
        Operator::Ge,
        Operator::Le,
        Operator::Gt,
        Operator::Lt,
        Operator::Eq,
    ];

    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Eq => "=",
            Operator::Gt => ">",
            Operator::Lt => "<",
            Operator::Ge => ">=",
            Operator::Le => "<=",
        }
    }

    /// Apply a numeric comparison. `Eq` is textual and never reaches here,
    /// but it is handled for completeness.
    pub fn compare(self, lhs: f64, rhs: f64) -> bool {
        match self {
            Operator::Eq => lhs == rhs,
            Operator::Gt => lhs > rhs,
            Operator::Lt => lhs < rhs,
            Operator::Ge => lhs >= rhs,
            Operator::Le => lhs <= rhs,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Condition {
    pub column: String,
    pub operator: Operator,
    pub value: String,
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.column, self.operator, self.value)
    }
}

// ---------------------------------------------------------------------------
// Aggregation spec and result
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AggregateFunc {
    Avg,
    Min,
    Max,
}

impl AggregateFunc {
    /// Resolve an already lower-cased function name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "avg" => Some(AggregateFunc::Avg),
            "min" => Some(AggregateFunc::Min),
            "max" => Some(AggregateFunc::Max),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            AggregateFunc::Avg => "avg",
            AggregateFunc::Min => "min",
            AggregateFunc::Max => "max",
        }
    }

    /// Reduce a non-empty slice. Returns `None` for an empty one.
    ///
    /// A NaN anywhere in the input makes every function return NaN.
    pub fn apply(self, values: &[f64]) -> Option<f64> {
        if values.is_empty() {
            return None;
        }
        let result = match self {
            AggregateFunc::Avg => values.iter().sum::<f64>() / values.len() as f64,
            AggregateFunc::Min => values.iter().copied().reduce(nan_min)?,
            AggregateFunc::Max => values.iter().copied().reduce(nan_max)?,
        };
        Some(result)
    }
}

// `f64::min`/`f64::max` ignore a NaN operand; these propagate it.
fn nan_min(a: f64, b: f64) -> f64 {
    if a.is_nan() || b.is_nan() {
        f64::NAN
    } else {
        a.min(b)
    }
}

fn nan_max(a: f64, b: f64) -> f64 {
    if a.is_nan() || b.is_nan() {
        f64::NAN
    } else {
        a.max(b)
    }
}

impl fmt::Display for AggregateFunc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregationSpec {
    pub column: String,
    pub function: AggregateFunc,
}

/// A computed aggregate together with what produced it, for display.
#[derive(Debug, Clone, PartialEq)]
pub struct AggregationResult {
    pub spec: AggregationSpec,
    pub value: f64,
}
