//! Utility functions shared across the crate

pub mod date;
pub mod logging;

pub use date::{DateFormatConfig, parse_date_string};
pub use logging::{log_empty_table, log_table_load_start, log_table_loaded};
