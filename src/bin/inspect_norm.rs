use anyhow::{Context, Result};
use hosps_norm::{
    config::DEFAULT_OUTPUT,
    process::{load, summarize},
};
use std::{env, path::PathBuf};

/// Print the columns and the rate summary of an already written output file.
/// Takes an optional path; defaults to the pipeline's output location.
fn main() -> Result<()> {
    let path = env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT));

    let table = load(&path, b',').with_context(|| format!("loading {}", path.display()))?;

    println!("=== {} ===", path.display());
    println!("Rows:    {}", table.num_rows());
    println!("Columns: {}", table.num_columns());
    for field in table.schema().fields() {
        println!("- {:<20} | {:?}", field.name(), field.data_type());
    }
    println!();

    let summary = summarize(&table, &path)
        .with_context(|| format!("{} has no derived column", path.display()))?;
    println!("{}", summary.rate_line().trim_start());
    Ok(())
}
