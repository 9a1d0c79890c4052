mod cli;
mod data;
mod display;

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

use cli::Args;
use data::aggregate::calculate_aggregation;
use data::filter::apply_filter;
use data::loader::load_file;

fn main() -> ExitCode {
    env_logger::init();

    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<()> {
    let dataset = load_file(&args.file, args.delimiter)?;
    let filtered = apply_filter(&dataset, args.condition.as_deref())?;
    let aggregate = calculate_aggregation(&filtered, args.aggregate.as_deref())?;
    display::show_results(&filtered, aggregate.as_ref())
}
