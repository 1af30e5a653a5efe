// src/process/normalize.rs

use arrow::{
    array::{Array, ArrayRef, Float64Array},
    compute::{cast, kernels::numeric::div},
    datatypes::{DataType, Field, Schema},
    record_batch::RecordBatch,
};
use std::sync::Arc;
use tracing::{debug, info};

use crate::{
    error::{NormalizeError, Result},
    schema::{columns::POPULATION, columns::VALUE, missing_columns, HOSPS_POP_NORM, REQUIRED},
};

/// Population denominator for the rate.
pub const PER_POPULATION: f64 = 100_000.0;

/// Compute `value / (population / 100000)` for every row.
///
/// Both inputs are cast to Float64 first; unparseable cells become null.
/// Division follows IEEE semantics: a zero population yields `inf` (or
/// `NaN` for `0 / 0`), a null on either side yields null. No row is
/// dropped and nothing here raises on bad arithmetic.
pub fn hosps_per_100k(value: &ArrayRef, population: &ArrayRef) -> Result<ArrayRef> {
    let value = cast(value, &DataType::Float64)?;
    let population = cast(population, &DataType::Float64)?;
    let per_100k = div(&population, &Float64Array::new_scalar(PER_POPULATION))?;
    Ok(div(&value, &per_100k)?)
}

/// Attach `hosps_pop_norm` to `table`.
///
/// Appended as the last column; if the table already has one it is
/// replaced where it stands, so a second pass changes nothing.
pub fn normalize(table: RecordBatch) -> Result<RecordBatch> {
    let schema = table.schema();
    let missing = missing_columns(&schema, &REQUIRED);
    if !missing.is_empty() {
        return Err(NormalizeError::Schema { missing });
    }

    let value = table.column(schema.index_of(VALUE)?);
    let population = table.column(schema.index_of(POPULATION)?);
    let derived = hosps_per_100k(value, population)?;
    let non_finite = derived
        .as_any()
        .downcast_ref::<Float64Array>()
        .map(|a| a.iter().flatten().filter(|v| !v.is_finite()).count())
        .unwrap_or(0);

    let derived_field = Arc::new(Field::new(HOSPS_POP_NORM, DataType::Float64, true));
    let mut fields = schema.fields().to_vec();
    let mut columns: Vec<ArrayRef> = table.columns().to_vec();

    match schema.index_of(HOSPS_POP_NORM) {
        Ok(idx) => {
            debug!(idx, "replacing existing derived column");
            fields[idx] = derived_field;
            columns[idx] = derived;
        }
        Err(_) => {
            fields.push(derived_field);
            columns.push(derived);
        }
    }

    info!(
        rows = table.num_rows(),
        non_finite, "computed hospitalizations per 100k"
    );
    let schema = Arc::new(Schema::new_with_metadata(fields, schema.metadata().clone()));
    Ok(RecordBatch::try_new(schema, columns)?)
}
