// src/process/load.rs

use arrow::{
    compute::concat_batches,
    csv::{reader::Format, ReaderBuilder},
    record_batch::RecordBatch,
};
use std::{fs, io::Cursor, path::Path};
use tracing::{debug, info};

use crate::{
    error::{NormalizeError, Result},
    schema::make_read_schema,
};

/// Rows per Arrow batch while parsing; batches are concatenated afterwards.
const BATCH_SIZE: usize = 64 * 1024;

/// Read the whole delimited file at `path` into one `RecordBatch`.
///
/// The existence check happens before any byte is read, so a missing input
/// fails with `NotFound` and nothing else is touched. Column types are
/// inferred from every record, with the overrides of [`make_read_schema`].
#[tracing::instrument(level = "info", skip(path), fields(path = %path.as_ref().display()))]
pub fn load<P: AsRef<Path>>(path: P, delimiter: u8) -> Result<RecordBatch> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(NormalizeError::NotFound {
            path: path.to_path_buf(),
        });
    }

    let data = fs::read(path).map_err(|e| NormalizeError::io(path, e))?;
    debug!(bytes = data.len(), "read input");

    // 1) infer one type per column over all records
    let format = Format::default()
        .with_header(true)
        .with_delimiter(delimiter);
    let (inferred, records) = format.infer_schema(Cursor::new(&data), None)?;
    let schema = make_read_schema(&inferred);
    debug!(records, columns = schema.fields().len(), "inferred schema");

    // 2) parse with the adjusted schema
    let reader = ReaderBuilder::new(schema.clone())
        .with_header(true)
        .with_delimiter(delimiter)
        .with_quote(b'"')
        .with_batch_size(BATCH_SIZE)
        .build(Cursor::new(&data))?;
    let batches = reader.collect::<std::result::Result<Vec<_>, _>>()?;

    // 3) one table in memory
    let table = concat_batches(&schema, &batches)?;
    info!(
        rows = table.num_rows(),
        columns = table.num_columns(),
        "loaded table"
    );
    Ok(table)
}
