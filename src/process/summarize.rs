// src/process/summarize.rs

use arrow::{array::AsArray, compute::cast, datatypes::DataType, datatypes::Float64Type};
use arrow::record_batch::RecordBatch;
use std::{fmt, path::PathBuf};

use crate::{error::Result, schema::HOSPS_POP_NORM};

/// What a finished run reports.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub output: PathBuf,
    pub rows: usize,
    /// Smallest non-NaN rate; `None` when every cell is null or NaN.
    pub min: Option<f64>,
    pub max: Option<f64>,
}

/// Row count plus min/max of the derived column. Null and NaN cells are
/// skipped; infinities count.
pub fn summarize(table: &RecordBatch, output: impl Into<PathBuf>) -> Result<Summary> {
    let idx = table.schema().index_of(HOSPS_POP_NORM)?;
    let rates = cast(table.column(idx), &DataType::Float64)?;
    let rates = rates.as_primitive::<Float64Type>();

    let (min, max) = rates
        .iter()
        .flatten()
        .filter(|v| !v.is_nan())
        .fold((None, None), |(lo, hi): (Option<f64>, Option<f64>), v| {
            (
                Some(lo.map_or(v, |lo| lo.min(v))),
                Some(hi.map_or(v, |hi| hi.max(v))),
            )
        });

    Ok(Summary {
        output: output.into(),
        rows: table.num_rows(),
        min,
        max,
    })
}

/// `1234567` → `1,234,567`
pub fn thousands(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

fn three_places(v: Option<f64>) -> String {
    match v {
        Some(v) => format!("{:.3}", v),
        None => "nan".to_string(),
    }
}

impl Summary {
    /// `   hosps_pop_norm summary: min=…, max=…`
    pub fn rate_line(&self) -> String {
        format!(
            "   {} summary: min={}, max={}",
            HOSPS_POP_NORM,
            three_places(self.min),
            three_places(self.max)
        )
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Wrote {} with {} rows.",
            self.output.display(),
            thousands(self.rows)
        )?;
        f.write_str(&self.rate_line())
    }
}
