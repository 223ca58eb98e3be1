//! Fleet monitoring domain logic.
//!
//! Pure types and reductions for the fleet dashboard. This crate has no
//! database dependency; the `db` crate loads rows and hands them over as
//! plain values.

pub mod error;
pub mod fleet;
pub mod load;
pub mod snapshot;
pub mod types;
