use std::path::PathBuf;

use clap::Parser;

/// Filter rows of a CSV file and optionally compute one aggregate.
#[derive(Parser, Debug)]
#[command(name = "csv-sieve", version, about, long_about = None)]
pub struct Args {
    /// Path to the CSV file
    pub file: PathBuf,

    /// Filter condition, e.g. "age>30" or "city=NY" (operators: >=, <=, >, <, =)
    #[arg(long = "where", value_name = "CONDITION")]
    pub condition: Option<String>,

    /// Aggregation, e.g. "price=avg" (functions: avg, min, max)
    #[arg(long, value_name = "SPEC")]
    pub aggregate: Option<String>,

    /// Field delimiter (single ASCII character)
    #[arg(short, long, default_value = ",", value_parser = parse_delimiter)]
    pub delimiter: u8,
}

fn parse_delimiter(raw: &str) -> Result<u8, String> {
    match raw.as_bytes() {
        [byte] if byte.is_ascii() => Ok(*byte),
        _ => Err(format!("expected a single ASCII character, got '{raw}'")),
    }
}
