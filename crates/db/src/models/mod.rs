//! Row models for the fleet tables.
//!
//! Each submodule contains `FromRow` structs matching the columns its
//! repository selects, plus conversions into the `core` views.

pub mod cluster;
pub mod meeting;
pub mod node;
pub mod status;
pub mod tenant;
