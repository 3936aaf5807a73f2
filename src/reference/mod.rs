//! WHO reference table store
//!
//! Four LMS tables, indexed by composite key at load time:
//! weight-, length/height- and head-circumference-for-age keyed by
//! (age in months, sex), and weight-for-length/height keyed by
//! (sex, measurement kind, height rounded to 0.1 cm).

pub mod columns;
pub mod lms;
pub mod loader;
pub mod store;
pub mod table;

pub use lms::{AgeKey, HeightKey, LmsParams};
pub use loader::{LoadStats, load_reference_tables};
pub use store::{ReferenceTables, ReferenceTablesBuilder};
pub use table::ReferenceTable;
