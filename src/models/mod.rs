//! Domain models for growth screening

pub mod measurement;
pub mod types;

pub use measurement::{ChildIdentity, MeasurementInput};
pub use types::{Indicator, MeasurementKind, Sex};
