//! Algorithm implementations
//!
//! Growth screening: LMS z-scores, indicator resolution and status
//! classification against the WHO child growth standards.

pub mod growth;
