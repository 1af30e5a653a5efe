// src/schema/read.rs

use arrow::datatypes::{DataType, Field, Schema};
use std::sync::Arc;

use super::columns::NUMERIC_COLUMNS;

/// Adjust an inferred CSV schema before parsing:
/// - `season_week`, `value`, `population` keep an inferred numeric type
/// - everything else → Utf8, so timestamps, booleans, `06` or `1.50`
///   are written back exactly as read
pub fn make_read_schema(inferred: &Schema) -> Arc<Schema> {
    let fields: Vec<Field> = inferred
        .fields()
        .iter()
        .map(|f| {
            let dt = match f.data_type() {
                dt if dt.is_numeric() && NUMERIC_COLUMNS.contains(&f.name().as_str()) => {
                    dt.clone()
                }
                _ => DataType::Utf8,
            };
            Field::new(f.name(), dt, true)
        })
        .collect();

    Arc::new(Schema::new(fields))
}
