// src/process/persist.rs

use arrow::{
    array::{ArrayRef, AsArray, Float64Array},
    csv::WriterBuilder,
    datatypes::{DataType, Float64Type},
    record_batch::RecordBatch,
};
use std::{fs, io::Write, path::Path, sync::Arc};
use tempfile::NamedTempFile;
use tracing::{debug, info};

use crate::error::{NormalizeError, Result};

/// Float64 columns with NaN cells turned into nulls, so `0 / 0` is written
/// as an empty cell like any other missing number.
fn nan_as_null(table: &RecordBatch) -> Result<RecordBatch> {
    let columns: Vec<ArrayRef> = table
        .columns()
        .iter()
        .map(|col| match col.data_type() {
            DataType::Float64 => {
                let cleaned: Float64Array = col
                    .as_primitive::<Float64Type>()
                    .iter()
                    .map(|v| v.filter(|x| !x.is_nan()))
                    .collect();
                Arc::new(cleaned) as ArrayRef
            }
            _ => col.clone(),
        })
        .collect();
    Ok(RecordBatch::try_new(table.schema(), columns)?)
}

/// Write `table` to `path` as one delimited file: header row, then every
/// row in table order, no index column. Nulls and NaN are empty cells.
///
/// The bytes go to a temp file beside `path` first and are renamed over it
/// once complete, so an existing file is replaced whole or not at all.
#[tracing::instrument(level = "info", skip(table, path), fields(path = %path.as_ref().display()))]
pub fn persist<P: AsRef<Path>>(table: &RecordBatch, path: P, delimiter: u8) -> Result<()> {
    let path = path.as_ref();
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir).map_err(|e| NormalizeError::io(dir, e))?;

    let tmp = NamedTempFile::new_in(dir).map_err(|e| NormalizeError::io(dir, e))?;
    debug!(tmp = %tmp.path().display(), "writing temp file");

    let mut writer = WriterBuilder::new()
        .with_header(true)
        .with_delimiter(delimiter)
        .build(tmp);
    writer.write(&nan_as_null(table)?)?;
    let mut tmp = writer.into_inner();
    tmp.flush().map_err(|e| NormalizeError::io(tmp.path(), e))?;

    tmp.persist(path)
        .map_err(|e| NormalizeError::io(path, e.error))?;

    info!(rows = table.num_rows(), "wrote output");
    Ok(())
}
