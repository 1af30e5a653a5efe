// src/schema/columns.rs

use arrow::datatypes::Schema;
use std::collections::BTreeSet;

pub const SEASON: &str = "season";
pub const LOCATION: &str = "location";
pub const SEASON_WEEK: &str = "season_week";
pub const VALUE: &str = "value";
pub const POPULATION: &str = "population";

/// Derived hospitalizations per 100k population.
pub const HOSPS_POP_NORM: &str = "hosps_pop_norm";

/// Columns the arithmetic needs.
pub const REQUIRED: [&str; 2] = [VALUE, POPULATION];

/// Sort key, most significant first.
pub const SORT_KEYS: [&str; 3] = [SEASON, LOCATION, SEASON_WEEK];

/// Columns parsed as numbers when they look numeric; every other column is
/// read as text and written back verbatim.
pub const NUMERIC_COLUMNS: [&str; 3] = [SEASON_WEEK, VALUE, POPULATION];

/// Names from `wanted` that `schema` does not carry.
pub fn missing_columns(schema: &Schema, wanted: &[&str]) -> BTreeSet<String> {
    wanted
        .iter()
        .filter(|name| schema.index_of(name).is_err())
        .map(|name| name.to_string())
        .collect()
}
