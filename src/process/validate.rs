// src/process/validate.rs

use arrow::record_batch::RecordBatch;
use tracing::{debug, error};

use crate::{
    error::{NormalizeError, Result},
    schema::{missing_columns, REQUIRED},
};

/// Pass `table` through if it carries `value` and `population`.
///
/// Only the column set is checked, never the cells. Sort-key columns are
/// not required here; `reorder` reports those.
pub fn validate(table: RecordBatch) -> Result<RecordBatch> {
    let missing = missing_columns(&table.schema(), &REQUIRED);
    if !missing.is_empty() {
        error!(?missing, "required columns absent");
        return Err(NormalizeError::Schema { missing });
    }
    debug!("required columns present");
    Ok(table)
}
