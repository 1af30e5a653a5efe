// src/process/mod.rs
//! The normalization pipeline, one module per step:
//! load → validate → normalize → reorder → persist → summarize.

pub mod load;
pub mod normalize;
pub mod persist;
pub mod reorder;
pub mod summarize;
pub mod validate;

pub use load::load;
pub use normalize::{hosps_per_100k, normalize};
pub use persist::persist;
pub use reorder::reorder;
pub use summarize::{summarize, Summary};
pub use validate::validate;

use tracing::info;

use crate::{config::Config, error::Result};

/// Run every step in order. Any error stops the run before the output file
/// is touched.
#[tracing::instrument(level = "info", skip(cfg), fields(input = %cfg.input.display()))]
pub fn run(cfg: &Config) -> Result<Summary> {
    let table = load(&cfg.input, cfg.delimiter)?;
    let table = validate(table)?;
    let table = normalize(table)?;
    let table = reorder(table)?;
    persist(&table, &cfg.output, cfg.delimiter)?;
    let summary = summarize(&table, &cfg.output)?;
    info!(rows = summary.rows, min = ?summary.min, max = ?summary.max, "done");
    Ok(summary)
}
