use std::path::{Path, PathBuf};

/// Where the input lives relative to the working directory.
pub const DEFAULT_INPUT: &str = "analysis_data/formatted_flu.csv";
/// Where the normalized table is written.
pub const DEFAULT_OUTPUT: &str = "analysis_data/hosps_pop_norm.csv";

/// Paths and CSV dialect for one run. The binary only ever uses `Config::default()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub input: PathBuf,
    pub output: PathBuf,
    /// Field delimiter shared by the input and the output file.
    pub delimiter: u8,
}

impl Config {
    pub fn new(input: impl AsRef<Path>, output: impl AsRef<Path>) -> Self {
        Self {
            input: input.as_ref().to_path_buf(),
            output: output.as_ref().to_path_buf(),
            ..Self::default()
        }
    }

    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output: PathBuf::from(DEFAULT_OUTPUT),
            delimiter: b',',
        }
    }
}
