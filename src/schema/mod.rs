pub mod columns;
pub mod read;

pub use columns::{missing_columns, HOSPS_POP_NORM, REQUIRED, SORT_KEYS};
pub use read::make_read_schema;
