// src/process/reorder.rs

use arrow::{
    array::{ArrayRef, UInt32Array},
    compute::{cast, lexsort_to_indices, take_record_batch, SortColumn, SortOptions},
    datatypes::DataType,
    record_batch::RecordBatch,
};
use std::sync::Arc;
use tracing::{debug, error};

use crate::{
    error::{NormalizeError, Result},
    schema::{columns::SEASON_WEEK, missing_columns, SORT_KEYS},
};

/// Ascending, nulls after every value.
const ASCENDING: SortOptions = SortOptions {
    descending: false,
    nulls_first: false,
};

/// Sort key column as it should be compared: `season_week` numerically,
/// the text keys as they were loaded.
fn key_column(table: &RecordBatch, name: &str) -> Result<ArrayRef> {
    let col = table.column(table.schema().index_of(name)?).clone();
    if name == SEASON_WEEK && !col.data_type().is_numeric() {
        debug!(data_type = ?col.data_type(), "casting season_week for numeric order");
        return Ok(cast(&col, &DataType::Float64)?);
    }
    Ok(col)
}

/// `0..rows` as sort indices.
fn positions(rows: usize) -> Result<UInt32Array> {
    let end = u32::try_from(rows).map_err(|_| NormalizeError::TooManyRows { rows })?;
    Ok(UInt32Array::from_iter_values(0..end))
}

/// Sort rows by `(season, location, season_week)`, all ascending.
///
/// Rows equal on all three keys keep their input order.
pub fn reorder(table: RecordBatch) -> Result<RecordBatch> {
    let missing = missing_columns(&table.schema(), &SORT_KEYS);
    if !missing.is_empty() {
        error!(?missing, "cannot sort");
        return Err(NormalizeError::MissingSortKey { missing });
    }

    let mut sort_columns = SORT_KEYS
        .iter()
        .map(|name| {
            Ok(SortColumn {
                values: key_column(&table, name)?,
                options: Some(ASCENDING),
            })
        })
        .collect::<Result<Vec<_>>>()?;

    // input position as the last key keeps the unstable kernel deterministic
    let position = positions(table.num_rows())?;
    sort_columns.push(SortColumn {
        values: Arc::new(position),
        options: Some(ASCENDING),
    });

    let indices = lexsort_to_indices(&sort_columns, None)?;
    let sorted = take_record_batch(&table, &indices)?;
    debug!(rows = sorted.num_rows(), "reordered");
    Ok(sorted)
}
