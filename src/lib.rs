pub mod config;
pub mod error;
pub mod process;
pub mod schema;

pub use config::Config;
pub use error::{NormalizeError, Result};
