use arrow::error::ArrowError;
use std::{collections::BTreeSet, io, path::PathBuf};
use thiserror::Error;

/// Everything that can stop the normalization pipeline.
///
/// Arithmetic on bad cells (zero or null population, null value) is not an
/// error: it flows through as `inf`, `NaN` or null.
#[derive(Debug, Error)]
pub enum NormalizeError {
    #[error("input file not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("missing required columns: {{{}}}", join(missing))]
    Schema { missing: BTreeSet<String> },

    #[error("missing sort key columns: {{{}}}", join(missing))]
    MissingSortKey { missing: BTreeSet<String> },

    #[error("{rows} rows exceed the {} rows a sort can index", u32::MAX)]
    TooManyRows { rows: usize },

    #[error("i/o on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Arrow(#[from] ArrowError),
}

impl NormalizeError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

fn join(names: &BTreeSet<String>) -> String {
    names
        .iter()
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

pub type Result<T> = std::result::Result<T, NormalizeError>;
